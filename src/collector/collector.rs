//! Main collector that orchestrates `virsh domstats` and IP enrichment.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use super::error::CollectError;
use super::parser::{parse_domifaddr, parse_domstats};
use super::traits::CommandRunner;
use crate::model::{DomainSnapshot, DomainState};
use crate::util::monotonic_ns;

/// Default hypervisor CLI.
pub const DEFAULT_PROGRAM: &str = "virsh";

/// Default upper bound for a single CLI invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Stats groups requested from `domstats`, in argument order.
const DOMSTATS_GROUPS: [&str; 5] = ["--vcpu", "--balloon", "--block", "--interface", "--state"];

/// Builds the `domstats` argument vector. An empty domain list selects all domains.
pub fn domstats_args(domains: &[String]) -> Vec<String> {
    let mut args = Vec::with_capacity(1 + DOMSTATS_GROUPS.len() + domains.len());
    args.push("domstats".to_string());
    args.extend(DOMSTATS_GROUPS.iter().map(|s| s.to_string()));
    args.extend(domains.iter().cloned());
    args
}

/// Builds the `domifaddr` argument vector for one domain.
pub fn domifaddr_args(domain: &str) -> Vec<String> {
    ["domifaddr", domain, "--full", "--source", "lease"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Collects per-domain snapshots by running the hypervisor CLI.
///
/// Cheap to clone; clones share the runner.
pub struct Collector<R: CommandRunner> {
    runner: Arc<R>,
    program: String,
    timeout: Option<Duration>,
}

impl<R: CommandRunner> Clone for Collector<R> {
    fn clone(&self) -> Self {
        Self {
            runner: Arc::clone(&self.runner),
            program: self.program.clone(),
            timeout: self.timeout,
        }
    }
}

impl<R: CommandRunner> Collector<R> {
    /// Creates a collector running `virsh` with the default timeout.
    pub fn new(runner: R) -> Self {
        Self {
            runner: Arc::new(runner),
            program: DEFAULT_PROGRAM.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Overrides the hypervisor CLI program name or path.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Sets the per-invocation timeout. `None` waits for the CLI indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the shared runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Collects one generation of snapshots.
    ///
    /// All returned snapshots carry the same `last_update_monotonic_ns`,
    /// read once right after `domstats` returns. Running domains are then
    /// enriched with guest IP addresses; enrichment failures are ignored.
    pub fn collect(&self, domains: &[String]) -> Result<Vec<DomainSnapshot>, CollectError> {
        let started = Instant::now();
        let output = self
            .runner
            .run(&self.program, &domstats_args(domains), self.timeout)?;
        let stamp = monotonic_ns();

        let mut snapshots = parse_domstats(&output);
        for snap in &mut snapshots {
            snap.last_update_monotonic_ns = stamp;
        }

        self.enrich_ips(&mut snapshots);

        debug!(
            domains = snapshots.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "collected domain stats"
        );
        Ok(snapshots)
    }

    /// Adds lease-sourced guest addresses to the interfaces of running domains.
    pub fn enrich_ips(&self, snapshots: &mut [DomainSnapshot]) {
        for snap in snapshots
            .iter_mut()
            .filter(|s| s.state == DomainState::Running)
        {
            let args = domifaddr_args(&snap.domain_name);
            match self.runner.run(&self.program, &args, self.timeout) {
                Ok(output) => merge_addresses(snap, &output),
                Err(e) => debug!(domain = %snap.domain_name, error = %e, "domifaddr failed"),
            }
        }
    }
}

/// Appends addresses from `domifaddr` output to matching interfaces by name.
/// Rows for interfaces the snapshot does not know are dropped.
pub fn merge_addresses(snap: &mut DomainSnapshot, domifaddr_output: &str) {
    for addr in parse_domifaddr(domifaddr_output) {
        if let Some(iface) = snap
            .interfaces
            .iter_mut()
            .find(|i| !i.name.is_empty() && i.name == addr.interface)
        {
            iface.ips.push(addr.address);
        }
    }
}
