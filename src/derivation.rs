//! Derived metrics and display ordering for snapshot generations.
//!
//! Runs on the controller thread after a successful collect: per-vCPU
//! usage is computed against the previous generation first, then the
//! generation is sorted for display.

use std::collections::HashMap;

use crate::model::{DomainSnapshot, DomainState};

/// Fills `usage_pct` of every vCPU in `new` from the matching domain in `old`.
///
/// # Arguments
/// * `new` - Current generation, updated in place
/// * `old` - Previous generation (may be empty)
///
/// Domains without a previous sample, or whose wall delta is not
/// positive, are left untouched. A vCPU whose cumulative time went
/// backwards is treated as a counter reset and left at its current value.
pub fn compute_vcpu_usage(new: &mut [DomainSnapshot], old: &[DomainSnapshot]) {
    let previous: HashMap<&str, &DomainSnapshot> = old
        .iter()
        .map(|s| (s.domain_name.as_str(), s))
        .collect();

    for snap in new.iter_mut() {
        let Some(prev) = previous.get(snap.domain_name.as_str()) else {
            continue;
        };

        let delta_wall = match snap
            .last_update_monotonic_ns
            .checked_sub(prev.last_update_monotonic_ns)
        {
            Some(d) if d > 0 => d,
            _ => continue,
        };

        for (vcpu, old_vcpu) in snap.vcpus.iter_mut().zip(prev.vcpus.iter()) {
            let delta_cpu = vcpu.time_ns as i128 - old_vcpu.time_ns as i128;
            if delta_cpu < 0 {
                continue;
            }
            let usage = delta_cpu as f64 / delta_wall as f64 * 100.0;
            vcpu.usage_pct = usage.min(100.0);
        }
    }
}

/// Sort priority: active domains (running, idle, paused) first.
pub fn display_priority(state: DomainState) -> u8 {
    if state.is_active() { 0 } else { 1 }
}

/// Stable sort by (priority, name).
pub fn sort_for_display(snapshots: &mut [DomainSnapshot]) {
    snapshots.sort_by(|a, b| {
        display_priority(a.state)
            .cmp(&display_priority(b.state))
            .then_with(|| a.domain_name.cmp(&b.domain_name))
    });
}
