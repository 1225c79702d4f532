//! Mock command runner for testing.
//!
//! This module provides `MockRunner` and pre-built scenarios for testing
//! collectors without requiring a libvirt host.

mod runner;
mod scenarios;

pub use runner::MockRunner;
pub use scenarios::{DOMIFADDR_WEB, DOMSTATS_MIXED};
