//! Content of the Memory, CPU, Disk and Network boxes.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::fmt::{format_bytes, format_duration_ns, format_percent, percent_of, usage_level};
use crate::model::{BlockStats, DomainSnapshot, InterfaceStats};
use crate::tui::render::LayoutPlan;
use crate::tui::style::Styles;

use super::bar::usage_bar;

fn dim_line(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Styles::dim()))
}

fn device_name(name: &str) -> Line<'static> {
    Line::from(Span::styled(
        name.to_string(),
        Styles::default().add_modifier(Modifier::BOLD),
    ))
}

// ---------------------------------------------------------------------------
// Memory
// ---------------------------------------------------------------------------

pub fn memory_lines(snap: &DomainSnapshot, plan: &LayoutPlan) -> Vec<Line<'static>> {
    let balloon = &snap.balloon;
    let total = balloon.current.saturating_mul(1024);
    let used = balloon.current.saturating_sub(balloon.unused).saturating_mul(1024);
    let free = balloon.unused.saturating_mul(1024);
    let rss = balloon.rss.saturating_mul(1024);
    let pct = percent_of(used, total);

    let mut usage = vec![Span::raw("Usage: ")];
    usage.extend(usage_bar(pct, plan.bar_width as usize));
    usage.push(Span::raw(format!(" {}", format_percent(pct))));

    vec![
        Line::from(format!(
            "Total: {} │ Used: {} │ Free: {} │ RSS: {}",
            format_bytes(total),
            format_bytes(used),
            format_bytes(free),
            format_bytes(rss),
        )),
        Line::from(usage),
    ]
}

// ---------------------------------------------------------------------------
// CPU
// ---------------------------------------------------------------------------

pub fn cpu_lines(snap: &DomainSnapshot, plan: &LayoutPlan) -> Vec<Line<'static>> {
    if snap.vcpus.is_empty() {
        return vec![dim_line("No vCPU data available")];
    }

    let mut lines = vec![
        Line::from(format!("vCPUs: {}", snap.vcpus.len())),
        Line::from(""),
    ];

    let mut header = format!(
        "{:<5} {:<9} {:<8} {:<12} {:<10}",
        "ID", "State", "Usage", "Time", "Exits"
    );
    if !plan.compact {
        header.push_str(&format!(" {:<10}", "I/O Exits"));
    }
    lines.push(Line::from(header));
    lines.push(dim_line("─".repeat(plan.text_width() as usize)));

    for vcpu in snap.vcpus.iter().take(plan.max_vcpus) {
        let (state, online) = if vcpu.is_online() {
            ("running", true)
        } else {
            ("offline", false)
        };
        let mut row = vec![
            Span::raw(format!("{:<5} ", vcpu.id)),
            Span::styled(format!("{:<9}", state), Styles::vcpu_state(online)),
            Span::raw(" "),
            Span::styled(
                format!("{:<8}", format_percent(vcpu.usage_pct)),
                Styles::usage_text(usage_level(vcpu.usage_pct)),
            ),
            Span::raw(format!(
                " {:<12} {:<10}",
                format_duration_ns(vcpu.time_ns),
                vcpu.exits
            )),
        ];
        if !plan.compact {
            row.push(Span::raw(format!(" {:<10}", vcpu.io_exits)));
        }
        lines.push(Line::from(row));
    }

    if snap.vcpus.len() > plan.max_vcpus {
        lines.push(dim_line(format!(
            "… and {} more vCPUs",
            snap.vcpus.len() - plan.max_vcpus
        )));
    }
    lines
}

// ---------------------------------------------------------------------------
// Disk
// ---------------------------------------------------------------------------

pub fn disk_lines(snap: &DomainSnapshot, plan: &LayoutPlan) -> Vec<Line<'static>> {
    let named: Vec<&BlockStats> = snap.blocks.iter().filter(|b| !b.name.is_empty()).collect();
    if named.is_empty() {
        return vec![dim_line("No disk data available")];
    }

    let mut lines = Vec::new();
    for (i, disk) in named.iter().take(plan.max_disks).enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        let pct = percent_of(disk.physical, disk.capacity);

        let mut size = vec![Span::raw(format!(
            "   Phys: {} / Max: {} ",
            format_bytes(disk.physical),
            format_bytes(disk.capacity)
        ))];
        size.extend(usage_bar(pct, plan.bar_width as usize));
        size.push(Span::raw(format!(" {}", format_percent(pct))));

        lines.push(device_name(&disk.name));
        lines.push(Line::from(size));
        lines.push(Line::from(format!(
            "   I/O:  ↓ {} ({} ops) │ ↑ {} ({} ops)",
            format_bytes(disk.read_bytes),
            disk.read_reqs,
            format_bytes(disk.write_bytes),
            disk.write_reqs
        )));
    }

    if named.len() > plan.max_disks {
        lines.push(dim_line(format!(
            "… and {} more disks",
            named.len() - plan.max_disks
        )));
    }
    lines
}

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

pub fn network_lines(snap: &DomainSnapshot) -> Vec<Line<'static>> {
    let named: Vec<&InterfaceStats> = snap
        .interfaces
        .iter()
        .filter(|i| !i.name.is_empty())
        .collect();
    if named.is_empty() {
        return vec![dim_line("No network data available")];
    }

    let mut lines = Vec::new();
    for iface in named {
        lines.push(device_name(&iface.name));
        if !iface.ips.is_empty() {
            lines.push(Line::from(format!("   IPs: {}", iface.ips.join(", "))));
        }
        lines.push(Line::from(format!(
            "   ↓ Rx: {} ({} pkts) │ {} errs",
            format_bytes(iface.rx_bytes),
            iface.rx_packets,
            iface.rx_faults()
        )));
        lines.push(Line::from(format!(
            "   ↑ Tx: {} ({} pkts) │ {} errs",
            format_bytes(iface.tx_bytes),
            iface.tx_packets,
            iface.tx_faults()
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::plan_layout;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn snapshot() -> DomainSnapshot {
        let mut snap = DomainSnapshot::new("web");
        snap.balloon.current = 4 * 1024 * 1024;
        snap.balloon.unused = 1024 * 1024;
        snap.balloon.rss = 2 * 1024 * 1024;
        snap
    }

    #[test]
    fn test_memory_lines() {
        let plan = plan_layout(120, 50);
        let lines = text(&memory_lines(&snapshot(), &plan));
        assert_eq!(
            lines[0],
            "Total: 4.0 GiB │ Used: 3.0 GiB │ Free: 1.0 GiB │ RSS: 2.0 GiB"
        );
        assert!(lines[1].starts_with("Usage: ["));
        assert!(lines[1].ends_with("] 75.0%"));
    }

    #[test]
    fn test_memory_with_zero_total() {
        let plan = plan_layout(120, 50);
        let lines = text(&memory_lines(&DomainSnapshot::new("x"), &plan));
        assert!(lines[1].ends_with(" 0.0%"));
    }

    #[test]
    fn test_cpu_limits_and_columns() {
        let mut snap = snapshot();
        for id in 0..8 {
            snap.vcpu_mut(id).state = 1;
        }
        snap.vcpus[1].state = 0;
        snap.vcpus[0].usage_pct = 95.0;

        let full = text(&cpu_lines(&snap, &plan_layout(120, 50)));
        assert_eq!(full[0], "vCPUs: 8");
        assert!(full[2].contains("I/O Exits"));
        assert_eq!(full.len(), 4 + 6 + 1);
        assert_eq!(full.last().map(String::as_str), Some("… and 2 more vCPUs"));
        assert!(full[5].contains("offline"));

        let compact = text(&cpu_lines(&snap, &plan_layout(120, 40)));
        assert!(!compact[2].contains("I/O Exits"));
        assert_eq!(compact.last().map(String::as_str), Some("… and 4 more vCPUs"));
    }

    #[test]
    fn test_cpu_usage_colored() {
        let mut snap = snapshot();
        snap.vcpu_mut(0).usage_pct = 95.0;
        let lines = cpu_lines(&snap, &plan_layout(120, 50));
        let usage = &lines[4].spans[3];
        assert_eq!(usage.content.trim(), "95.0%");
        assert_eq!(usage.style, Styles::error());
    }

    #[test]
    fn test_disk_lines_and_overflow() {
        let mut snap = snapshot();
        for id in 0..3 {
            let disk = snap.block_mut(id);
            disk.name = format!("vd{}", (b'a' + id as u8) as char);
            disk.capacity = 21_474_836_480;
            disk.physical = 1_429_151_744;
            disk.read_reqs = 5000;
        }

        let lines = text(&disk_lines(&snap, &plan_layout(120, 40)));
        assert_eq!(lines[0], "vda");
        assert!(lines[1].starts_with("   Phys: 1.3 GiB / Max: 20.0 GiB ["));
        assert!(lines[2].contains("↓ 0 B (5000 ops)"));
        assert_eq!(lines.last().map(String::as_str), Some("… and 1 more disks"));
    }

    #[test]
    fn test_network_lines() {
        let mut snap = snapshot();
        let iface = snap.interface_mut(0);
        iface.name = "vnet0".into();
        iface.rx_errs = 1;
        iface.rx_drop = 2;
        iface.ips = vec!["192.168.122.238".into()];
        snap.interface_mut(1);

        let lines = text(&network_lines(&snap));
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "   IPs: 192.168.122.238");
        assert!(lines[2].ends_with("│ 3 errs"));
    }

    #[test]
    fn test_empty_placeholders() {
        let snap = DomainSnapshot::new("bare");
        let plan = plan_layout(120, 50);
        assert_eq!(text(&cpu_lines(&snap, &plan)), vec!["No vCPU data available"]);
        assert_eq!(text(&disk_lines(&snap, &plan)), vec!["No disk data available"]);
        assert_eq!(text(&network_lines(&snap)), vec!["No network data available"]);
    }
}
