//! Parsers for `virsh` text output.
//!
//! These are pure functions over string input. Parsing is total: malformed
//! lines are skipped and non-numeric values fall back to zero, so a partially
//! garbled record still yields a snapshot.

use crate::model::{DomainSnapshot, DomainState};

/// Upper bound for vCPU/block/interface ids accepted from the input.
/// Larger ids are dropped instead of allocating huge index-aligned vectors.
pub const MAX_DEVICE_ID: usize = 4096;

/// Prefix of the record header line (`Domain: 'name'`).
const DOMAIN_HEADER: &str = "Domain:";

/// Parses the output of
/// `virsh domstats --vcpu --balloon --block --interface --state`.
///
/// Format:
/// ```text
/// Domain: 'noble_default'
///   state.state=1
///   balloon.current=16777216
///   vcpu.0.time=50350000000
///   block.0.name=vda
///   net.0.rx.bytes=1024
/// ```
///
/// One snapshot is produced per `Domain:` header, in input order. Lines
/// before the first header are ignored.
pub fn parse_domstats(content: &str) -> Vec<DomainSnapshot> {
    let mut snapshots: Vec<DomainSnapshot> = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix(DOMAIN_HEADER) {
            let name = rest.trim().trim_matches('\'');
            snapshots.push(DomainSnapshot::new(name));
            continue;
        }

        let Some(current) = snapshots.last_mut() else {
            continue;
        };
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        apply_field(current, key.trim(), value.trim());
    }

    snapshots
}

/// Parses an integer field, defaulting to zero on failure.
fn int(value: &str) -> u64 {
    value.parse().unwrap_or(0)
}

/// Parses a signed integer field, defaulting to zero on failure.
fn signed(value: &str) -> i64 {
    value.parse().unwrap_or(0)
}

/// Parses a device id segment, rejecting non-numeric and oversized ids.
fn device_id(segment: &str) -> Option<usize> {
    segment
        .parse::<usize>()
        .ok()
        .filter(|id| *id < MAX_DEVICE_ID)
}

fn apply_field(snap: &mut DomainSnapshot, key: &str, value: &str) {
    let parts: Vec<&str> = key.split('.').collect();
    match parts.as_slice() {
        ["state", "state"] => snap.state = DomainState::from_code(signed(value)),
        ["state", "reason"] => snap.state_reason = signed(value),
        ["os", "type"] if !value.is_empty() => snap.os_type = Some(value.to_string()),
        ["balloon", metric] => apply_balloon(snap, metric, value),
        ["vcpu", id, rest @ ..] => {
            if let Some(id) = device_id(id) {
                apply_vcpu(snap, id, rest, value);
            }
        }
        ["block", id, rest @ ..] => {
            if let Some(id) = device_id(id) {
                apply_block(snap, id, rest, value);
            }
        }
        ["net", id, rest @ ..] => {
            if let Some(id) = device_id(id) {
                apply_net(snap, id, rest, value);
            }
        }
        _ => {}
    }
}

fn apply_balloon(snap: &mut DomainSnapshot, metric: &str, value: &str) {
    let balloon = &mut snap.balloon;
    match metric {
        "current" => balloon.current = int(value),
        "maximum" => balloon.maximum = int(value),
        "unused" => balloon.unused = int(value),
        "available" => balloon.available = int(value),
        "usable" => balloon.usable = int(value),
        "rss" => balloon.rss = int(value),
        _ => {}
    }
}

fn apply_vcpu(snap: &mut DomainSnapshot, id: usize, rest: &[&str], value: &str) {
    let vcpu = snap.vcpu_mut(id);
    match rest {
        ["state"] => vcpu.state = signed(value),
        ["time"] => vcpu.time_ns = int(value),
        ["exits", "sum"] => vcpu.exits = int(value),
        ["halt_exits", "sum"] => vcpu.halt_exits = int(value),
        ["irq_exits", "sum"] => vcpu.irq_exits = int(value),
        ["io_exits", "sum"] => vcpu.io_exits = int(value),
        _ => {}
    }
}

fn apply_block(snap: &mut DomainSnapshot, id: usize, rest: &[&str], value: &str) {
    let block = snap.block_mut(id);
    match rest {
        ["name"] => block.name = value.to_string(),
        ["path"] => block.path = value.to_string(),
        ["allocation"] => block.allocation = int(value),
        ["capacity"] => block.capacity = int(value),
        ["physical"] => block.physical = int(value),
        ["rd", "reqs"] => block.read_reqs = int(value),
        ["rd", "bytes"] => block.read_bytes = int(value),
        ["wr", "reqs"] => block.write_reqs = int(value),
        ["wr", "bytes"] => block.write_bytes = int(value),
        _ => {}
    }
}

fn apply_net(snap: &mut DomainSnapshot, id: usize, rest: &[&str], value: &str) {
    let iface = snap.interface_mut(id);
    match rest {
        ["name"] => iface.name = value.to_string(),
        ["rx", "bytes"] => iface.rx_bytes = int(value),
        ["rx", "pkts"] => iface.rx_packets = int(value),
        ["rx", "errs"] => iface.rx_errs = int(value),
        ["rx", "drop"] => iface.rx_drop = int(value),
        ["tx", "bytes"] => iface.tx_bytes = int(value),
        ["tx", "pkts"] => iface.tx_packets = int(value),
        ["tx", "errs"] => iface.tx_errs = int(value),
        ["tx", "drop"] => iface.tx_drop = int(value),
        _ => {}
    }
}

/// One address row of `virsh domifaddr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub interface: String,
    pub mac: String,
    pub protocol: String,
    /// Address with the `/prefix` suffix removed.
    pub address: String,
}

/// Parses the output of `virsh domifaddr <domain> --full --source lease`.
///
/// Format:
/// ```text
///  Name       MAC address          Protocol     Address
/// -------------------------------------------------------
///  vnet0      52:54:00:12:34:56    ipv4         192.168.122.238/24
/// ```
pub fn parse_domifaddr(content: &str) -> Vec<InterfaceAddress> {
    let mut addresses = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("Name") || line.starts_with('-') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            continue;
        }

        let address = fields[3].split('/').next().unwrap_or(fields[3]);
        addresses.push(InterfaceAddress {
            interface: fields[0].to_string(),
            mac: fields[1].to_string(),
            protocol: fields[2].to_string(),
            address: address.to_string(),
        });
    }

    addresses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BalloonStats, BlockStats, InterfaceStats, VcpuStats};

    const NOBLE: &str = "Domain: 'noble_default'
  state.state=1
  state.reason=1
  balloon.current=16777216
  balloon.maximum=16777216
  balloon.unused=15888880
  balloon.available=16777216
  balloon.usable=16301384
  balloon.rss=1128336
  vcpu.current=4
  vcpu.maximum=4
  vcpu.0.state=1
  vcpu.0.time=50350000000
  vcpu.0.wait=0
  vcpu.0.delay=0
  vcpu.1.state=1
  vcpu.1.time=29380000000
  vcpu.1.wait=0
  vcpu.1.delay=0
  block.count=1
  block.0.name=vda
  block.0.path=/var/lib/libvirt/images/noble_default.qcow2
  block.0.rd.reqs=5000
  block.0.rd.bytes=104857600
  block.0.wr.reqs=2000
  block.0.wr.bytes=41943040
  block.0.fl.reqs=0
  block.0.allocation=1428627456
  block.0.capacity=21474836480
  block.0.physical=1429151744
";

    #[test]
    fn test_parse_single_domain() {
        let snaps = parse_domstats(NOBLE);
        assert_eq!(snaps.len(), 1);

        let s = &snaps[0];
        assert_eq!(s.domain_name, "noble_default");
        assert_eq!(s.state, DomainState::Running);
        assert_eq!(s.state_reason, 1);
        assert_eq!(
            s.balloon,
            BalloonStats {
                current: 16777216,
                maximum: 16777216,
                unused: 15888880,
                available: 16777216,
                usable: 16301384,
                rss: 1128336,
            }
        );

        assert_eq!(s.vcpus.len(), 2);
        assert_eq!(s.vcpus[0].state, 1);
        assert_eq!(s.vcpus[0].time_ns, 50_350_000_000);
        assert_eq!(s.vcpus[1].time_ns, 29_380_000_000);
        assert_eq!(s.vcpus[0].usage_pct, 0.0);

        assert_eq!(s.blocks.len(), 1);
        let vda = &s.blocks[0];
        assert_eq!(vda.name, "vda");
        assert_eq!(vda.path, "/var/lib/libvirt/images/noble_default.qcow2");
        assert_eq!(vda.read_reqs, 5000);
        assert_eq!(vda.read_bytes, 104857600);
        assert_eq!(vda.write_reqs, 2000);
        assert_eq!(vda.write_bytes, 41943040);
        assert_eq!(vda.allocation, 1428627456);
        assert_eq!(vda.capacity, 21474836480);
        assert_eq!(vda.physical, 1429151744);

        assert!(s.interfaces.is_empty());
        assert_eq!(s.last_update_monotonic_ns, 0);
    }

    #[test]
    fn test_parse_multiple_domains_in_order() {
        let input = "Domain: 'vm1'\n  balloon.current=1024\nDomain: 'vm2'\n  balloon.current=2048\n";
        let snaps = parse_domstats(input);
        assert_eq!(snaps.len(), 2);
        assert_eq!(snaps[0].domain_name, "vm1");
        assert_eq!(snaps[0].balloon.current, 1024);
        assert_eq!(snaps[1].domain_name, "vm2");
        assert_eq!(snaps[1].balloon.current, 2048);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_domstats("").is_empty());
        assert!(parse_domstats("\n\n   \n").is_empty());
    }

    #[test]
    fn test_header_only_records_count() {
        let snaps = parse_domstats("Domain: 'a'\nDomain: 'b'\n\nDomain: 'c'\n");
        let names: Vec<_> = snaps.iter().map(|s| s.domain_name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(snaps.iter().all(|s| s.vcpus.is_empty()));
    }

    #[test]
    fn test_lines_before_first_header_ignored() {
        let snaps = parse_domstats("balloon.current=5\nDomain: 'a'\n  balloon.current=7\n");
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].balloon.current, 7);
    }

    #[test]
    fn test_malformed_lines_do_not_change_result() {
        let noisy = NOBLE.replace(
            "  vcpu.current=4\n",
            "  vcpu.current=4\n\n  garbage without equals\n  ===\n  vcpu.x.state=1\n",
        );
        assert_eq!(parse_domstats(&noisy), parse_domstats(NOBLE));
    }

    #[test]
    fn test_non_numeric_values_default_to_zero() {
        let snaps = parse_domstats(
            "Domain: 'a'\n  balloon.current=lots\n  vcpu.0.time=-5\n  block.0.capacity=\n",
        );
        let s = &snaps[0];
        assert_eq!(s.balloon.current, 0);
        assert_eq!(s.vcpus.len(), 1);
        assert_eq!(s.vcpus[0].time_ns, 0);
        assert_eq!(s.blocks[0].capacity, 0);
    }

    #[test]
    fn test_sparse_ids_are_zero_filled() {
        let snaps = parse_domstats(
            "Domain: 'a'\n  vcpu.2.time=9\n  block.1.name=vdb\n  net.3.name=vnet3\n",
        );
        let s = &snaps[0];
        assert_eq!(s.vcpus.len(), 3);
        assert_eq!(s.blocks.len(), 2);
        assert_eq!(s.interfaces.len(), 4);
        for (i, v) in s.vcpus.iter().enumerate() {
            assert_eq!(v.id, i);
        }
        for (i, b) in s.blocks.iter().enumerate() {
            assert_eq!(b.id, i);
        }
        for (i, n) in s.interfaces.iter().enumerate() {
            assert_eq!(n.id, i);
        }
        assert_eq!(s.vcpus[0].time_ns, 0);
        assert_eq!(s.vcpus[2].time_ns, 9);
        assert!(s.blocks[0].name.is_empty());
        assert_eq!(s.interfaces[3].name, "vnet3");
    }

    #[test]
    fn test_vcpu_exit_sums() {
        let snaps = parse_domstats(
            "Domain: 'a'
  vcpu.0.exits.sum=100
  vcpu.0.halt_exits.sum=40
  vcpu.0.irq_exits.sum=30
  vcpu.0.io_exits.sum=20
  vcpu.0.exits.max=7
",
        );
        let v = &snaps[0].vcpus[0];
        assert_eq!(v.exits, 100);
        assert_eq!(v.halt_exits, 40);
        assert_eq!(v.irq_exits, 30);
        assert_eq!(v.io_exits, 20);
    }

    #[test]
    fn test_unknown_metrics_still_grow_lists() {
        let snaps = parse_domstats(
            "Domain: 'a'\n  vcpu.current=2\n  vcpu.3.wait=0\n  block.count=1\n  block.1.fl.reqs=3\n  net.0.unknown=7\n",
        );
        let snap = &snaps[0];
        assert_eq!(snap.vcpus.len(), 4);
        assert_eq!(snap.vcpus[3], VcpuStats::new(3));
        assert_eq!(snap.blocks.len(), 2);
        assert_eq!(snap.blocks[1], BlockStats::new(1));
        assert_eq!(snap.interfaces.len(), 1);
        assert_eq!(snap.interfaces[0], InterfaceStats::new(0));
    }

    #[test]
    fn test_oversized_ids_are_dropped() {
        let snaps = parse_domstats("Domain: 'a'\n  vcpu.99999999.time=1\n");
        assert!(snaps[0].vcpus.is_empty());
    }

    #[test]
    fn test_parse_interfaces() {
        let snaps = parse_domstats(
            "Domain: 'web'
  state.state=1
  net.count=1
  net.0.name=vnet0
  net.0.rx.bytes=2048
  net.0.rx.pkts=20
  net.0.rx.errs=1
  net.0.rx.drop=2
  net.0.tx.bytes=4096
  net.0.tx.pkts=40
  net.0.tx.errs=3
  net.0.tx.drop=4
",
        );
        let n = &snaps[0].interfaces[0];
        assert_eq!(n.name, "vnet0");
        assert_eq!(n.rx_bytes, 2048);
        assert_eq!(n.rx_packets, 20);
        assert_eq!(n.rx_faults(), 3);
        assert_eq!(n.tx_bytes, 4096);
        assert_eq!(n.tx_packets, 40);
        assert_eq!(n.tx_faults(), 7);
        assert!(n.ips.is_empty());
    }

    #[test]
    fn test_os_type_and_shutoff_state() {
        let snaps = parse_domstats("Domain: 'a'\n  state.state=5\n  state.reason=1\n  os.type=hvm\n");
        assert_eq!(snaps[0].state, DomainState::Shutoff);
        assert_eq!(snaps[0].os_type.as_deref(), Some("hvm"));
    }

    #[test]
    fn test_reparse_is_structurally_equal() {
        assert_eq!(parse_domstats(NOBLE), parse_domstats(NOBLE));
    }

    #[test]
    fn test_parse_domifaddr() {
        let output = " Name       MAC address          Protocol     Address
-------------------------------------------------------------------------------
 vnet0      52:54:00:12:34:56    ipv4         192.168.122.238/24
 vnet0      52:54:00:12:34:56    ipv6         fe80::5054:ff:fe12:3456/64
";
        let addrs = parse_domifaddr(output);
        assert_eq!(addrs.len(), 2);
        assert_eq!(addrs[0].interface, "vnet0");
        assert_eq!(addrs[0].mac, "52:54:00:12:34:56");
        assert_eq!(addrs[0].protocol, "ipv4");
        assert_eq!(addrs[0].address, "192.168.122.238");
        assert_eq!(addrs[1].address, "fe80::5054:ff:fe12:3456");
    }

    #[test]
    fn test_parse_domifaddr_skips_short_rows() {
        assert!(parse_domifaddr("\n vnet0 52:54:00:12:34:56 ipv4\n").is_empty());
        assert!(parse_domifaddr("").is_empty());
    }
}
