//! Application state management.

use chrono::{DateTime, Local};

use crate::collector::CollectError;
use crate::derivation::{compute_vcpu_usage, sort_for_display};
use crate::model::{DomainSnapshot, DomainState};

/// Controller state. Mutated only on the event-loop thread.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current generation, sorted for display.
    pub snapshots: Vec<DomainSnapshot>,
    /// Previous generation, kept for CPU usage derivation.
    pub previous_snapshots: Vec<DomainSnapshot>,
    /// Index into `snapshots` of the VM shown in the detail pane.
    pub selected_index: usize,
    pub paused: bool,
    pub show_help: bool,
    /// Wall-clock time of the last accepted generation.
    pub last_update_wall: Option<DateTime<Local>>,
    /// Terminal size, 0 until known.
    pub width: u16,
    pub height: u16,
    /// Last collection failure; cleared by the next successful refresh.
    pub last_error: Option<CollectError>,
    /// True once the first generation has been accepted.
    pub initialized: bool,
    pub quitting: bool,
}

/// Sidebar resource totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FleetSummary {
    pub running: usize,
    pub total: usize,
    pub vcpus: usize,
    pub memory_bytes: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the selection down, wrapping at the end.
    pub fn select_next(&mut self) {
        let len = self.snapshots.len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    /// Moves the selection up, wrapping at the start.
    pub fn select_prev(&mut self) {
        let len = self.snapshots.len();
        if len > 0 {
            self.selected_index = (self.selected_index + len - 1) % len;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Monotonic stamp of the current generation, if it has any domains.
    pub fn generation_ns(&self) -> Option<i64> {
        self.snapshots.first().map(|s| s.last_update_monotonic_ns)
    }

    /// Installs a freshly collected generation.
    ///
    /// A generation stamped no later than the current one is stale (an
    /// overlapping collect that finished late) and is dropped; returns
    /// `false` in that case. Otherwise the current generation becomes the
    /// previous one, vCPU usage is derived, and the new set is sorted.
    pub fn apply_snapshots(&mut self, mut snapshots: Vec<DomainSnapshot>) -> bool {
        if let (Some(current), Some(incoming)) = (
            self.generation_ns(),
            snapshots.first().map(|s| s.last_update_monotonic_ns),
        ) && incoming <= current
        {
            return false;
        }

        compute_vcpu_usage(&mut snapshots, &self.snapshots);
        sort_for_display(&mut snapshots);

        self.previous_snapshots = std::mem::replace(&mut self.snapshots, snapshots);
        self.last_error = None;
        self.initialized = true;
        self.last_update_wall = Some(Local::now());
        self.clamp_selection();
        true
    }

    /// Records a failed collect. The current generation stays on screen.
    pub fn apply_error(&mut self, err: CollectError) {
        self.last_error = Some(err);
    }

    fn clamp_selection(&mut self) {
        self.selected_index = match self.snapshots.len() {
            0 => 0,
            len => self.selected_index.min(len - 1),
        };
    }

    /// The VM shown in the detail pane.
    pub fn selected_snapshot(&self) -> Option<&DomainSnapshot> {
        self.snapshots.get(self.selected_index)
    }

    /// Totals shown at the bottom of the sidebar.
    pub fn summary(&self) -> FleetSummary {
        FleetSummary {
            running: self
                .snapshots
                .iter()
                .filter(|s| s.state == DomainState::Running)
                .count(),
            total: self.snapshots.len(),
            vcpus: self.snapshots.iter().map(|s| s.vcpus.len()).sum(),
            memory_bytes: self
                .snapshots
                .iter()
                .fold(0u64, |acc, s| acc.saturating_add(s.memory_bytes())),
        }
    }
}
