//! vmstats - Interactive TUI for libvirt domain resource usage.
//!
//! Usage:
//!   vmstats                          # all domains, 2 second refresh
//!   vmstats --domains web,db         # selected domains only
//!   vmstats --interval 500ms         # faster refresh
//!   vmstats --log /tmp/vmstats.log -v

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use vmstats::collector::{Collector, DEFAULT_PROGRAM, SystemRunner};
use vmstats::tui::{App, Event, EventHandler};
use vmstats::util::{clamp_interval, parse_domain_list, parse_duration};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCommit: ",
    env!("GIT_SHA"),
    "\nBuilt: ",
    env!("BUILD_DATE")
);

/// Terminal dashboard for libvirt VMs.
#[derive(Parser, Debug)]
#[command(name = "vmstats", about = "Terminal dashboard for libvirt VMs", version = VERSION)]
struct Args {
    /// Comma-separated domain names. Empty monitors all domains.
    #[arg(long, value_name = "CSV", default_value = "")]
    domains: String,

    /// Refresh interval (e.g. 500ms, 2s, 1m). Minimum 500ms.
    #[arg(long, value_name = "DURATION", default_value = "2s", value_parser = parse_duration)]
    interval: Duration,

    /// Append diagnostics to this file. Without it, diagnostics are discarded.
    #[arg(long, value_name = "PATH")]
    log: Option<String>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Hypervisor CLI to run.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_PROGRAM)]
    virsh: String,

    /// Upper bound for a single CLI invocation. 0 waits indefinitely.
    #[arg(long, value_name = "DURATION", default_value = "10s", value_parser = parse_duration)]
    timeout: Duration,
}

fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a subscriber writing to `file`. RUST_LOG directives are honored.
fn init_logging(file: File, verbose: u8) {
    let level = level_for(verbose);
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("vmstats={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
}

/// Help and version exit cleanly; every other parse failure exits with 1.
fn exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn open_log(path: &str) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = exit_code(&e);
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let (interval, clamped) = clamp_interval(args.interval);
    if clamped {
        eprintln!("Warning: Interval too low, setting to 500ms");
    }

    if let Some(ref path) = args.log {
        match open_log(path) {
            Ok(file) => init_logging(file, args.verbose),
            Err(e) => {
                eprintln!("Error opening log file: {}", e);
                std::process::exit(1);
            }
        }
    }

    let domains = parse_domain_list(&args.domains);
    let timeout = (!args.timeout.is_zero()).then_some(args.timeout);
    let scope = if domains.is_empty() {
        "all".to_string()
    } else {
        domains.join(",")
    };
    info!(
        domains = %scope,
        interval_ms = interval.as_millis() as u64,
        program = %args.virsh,
        "starting vmstats"
    );

    let collector = Collector::new(SystemRunner::new())
        .with_program(args.virsh)
        .with_timeout(timeout);

    let events = EventHandler::new(interval);
    let tx = events.sender();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = tx.send(Event::Interrupt);
    }) {
        warn!("Failed to set Ctrl-C handler: {}", e);
    }

    let app = App::new(collector, domains);
    if let Err(e) = app.run(events) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
