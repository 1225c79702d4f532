//! vmstats - terminal dashboard for libvirt domains.
//!
//! Resource usage is read by running `virsh domstats` (and `virsh domifaddr`
//! for guest addresses) and parsing its text output; there is no direct
//! libvirt API use.
//!
//! - [`collector`] - runs the CLI and parses its output into [`model`] snapshots
//! - [`derivation`] - per-vCPU usage and display ordering
//! - [`tui`] - event loop, state and rendering

pub mod collector;
pub mod derivation;
pub mod fmt;
pub mod model;
pub mod tui;
pub mod util;
