//! Per-domain snapshot model.
//!
//! One [`DomainSnapshot`] holds a single sample of one libvirt domain as
//! reported by `virsh domstats`. A refresh produces one `Vec<DomainSnapshot>`
//! (a generation); all entries of a generation share the same
//! `last_update_monotonic_ns`.

/// Power state of a domain, as reported by `state.state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainState {
    #[default]
    NoState,
    Running,
    Idle,
    Paused,
    Shutdown,
    Shutoff,
    Crashed,
    PmSuspended,
    /// Code outside the range libvirt documents.
    Other(i64),
}

impl DomainState {
    /// Maps a libvirt `virDomainState` code to a state.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => DomainState::NoState,
            1 => DomainState::Running,
            2 => DomainState::Idle,
            3 => DomainState::Paused,
            4 => DomainState::Shutdown,
            5 => DomainState::Shutoff,
            6 => DomainState::Crashed,
            7 => DomainState::PmSuspended,
            other => DomainState::Other(other),
        }
    }

    /// Running, idle and paused domains are listed first.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            DomainState::Running | DomainState::Idle | DomainState::Paused
        )
    }
}

/// Memory balloon statistics, all values in KiB.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalloonStats {
    pub current: u64,
    pub maximum: u64,
    pub unused: u64,
    pub available: u64,
    pub usable: u64,
    pub rss: u64,
}

/// vCPU state code for an offline vCPU.
pub const VCPU_OFFLINE: i64 = 0;

/// Per-vCPU counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VcpuStats {
    pub id: usize,
    /// 0 = offline, 1 = running.
    pub state: i64,
    /// Cumulative CPU time since domain start, in nanoseconds.
    pub time_ns: u64,
    pub exits: u64,
    pub halt_exits: u64,
    pub irq_exits: u64,
    pub io_exits: u64,
    /// Utilization over the last refresh, 0..=100. Filled in by
    /// [`crate::derivation::compute_vcpu_usage`], never by the parser.
    pub usage_pct: f64,
}

impl VcpuStats {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn is_online(&self) -> bool {
        self.state != VCPU_OFFLINE
    }
}

/// Per-block-device capacity and I/O counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStats {
    pub id: usize,
    pub name: String,
    pub path: String,
    pub read_reqs: u64,
    pub read_bytes: u64,
    pub write_reqs: u64,
    pub write_bytes: u64,
    pub allocation: u64,
    pub capacity: u64,
    pub physical: u64,
}

impl BlockStats {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// Per-interface traffic counters and guest addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceStats {
    pub id: usize,
    pub name: String,
    pub rx_bytes: u64,
    pub rx_packets: u64,
    pub rx_errs: u64,
    pub rx_drop: u64,
    pub tx_bytes: u64,
    pub tx_packets: u64,
    pub tx_errs: u64,
    pub tx_drop: u64,
    /// Guest addresses without prefix length, in the order reported.
    pub ips: Vec<String>,
}

impl InterfaceStats {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Receive errors plus drops.
    pub fn rx_faults(&self) -> u64 {
        self.rx_errs.saturating_add(self.rx_drop)
    }

    /// Transmit errors plus drops.
    pub fn tx_faults(&self) -> u64 {
        self.tx_errs.saturating_add(self.tx_drop)
    }
}

/// One sample of one domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainSnapshot {
    pub domain_name: String,
    pub state: DomainState,
    pub state_reason: i64,
    pub os_type: Option<String>,
    pub balloon: BalloonStats,
    /// Indexed by vCPU id.
    pub vcpus: Vec<VcpuStats>,
    /// Indexed by block id.
    pub blocks: Vec<BlockStats>,
    /// Indexed by interface id.
    pub interfaces: Vec<InterfaceStats>,
    /// Monotonic clock reading taken right after the CLI returned.
    pub last_update_monotonic_ns: i64,
}

impl DomainSnapshot {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            ..Self::default()
        }
    }

    /// Returns the vCPU entry for `id`, growing the list with zeroed entries.
    pub fn vcpu_mut(&mut self, id: usize) -> &mut VcpuStats {
        while self.vcpus.len() <= id {
            let next = self.vcpus.len();
            self.vcpus.push(VcpuStats::new(next));
        }
        &mut self.vcpus[id]
    }

    /// Returns the block entry for `id`, growing the list with zeroed entries.
    pub fn block_mut(&mut self, id: usize) -> &mut BlockStats {
        while self.blocks.len() <= id {
            let next = self.blocks.len();
            self.blocks.push(BlockStats::new(next));
        }
        &mut self.blocks[id]
    }

    /// Returns the interface entry for `id`, growing the list with zeroed entries.
    pub fn interface_mut(&mut self, id: usize) -> &mut InterfaceStats {
        while self.interfaces.len() <= id {
            let next = self.interfaces.len();
            self.interfaces.push(InterfaceStats::new(next));
        }
        &mut self.interfaces[id]
    }

    /// Configured memory in bytes (`balloon.current` is in KiB).
    pub fn memory_bytes(&self) -> u64 {
        self.balloon.current.saturating_mul(1024)
    }
}
