//! Domain statistics collector driven by the `virsh` CLI.
//!
//! This module runs `virsh domstats`, parses its dotted key/value output
//! into [`DomainSnapshot`](crate::model::DomainSnapshot)s and enriches
//! running domains with lease-sourced guest addresses from `virsh domifaddr`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      Collector                       │
//! │  ┌──────────────────┐      ┌──────────────────────┐  │
//! │  │ parse_domstats   │      │ enrich_ips           │  │
//! │  │  - domstats      │      │  - domifaddr (lease) │  │
//! │  └────────┬─────────┘      └──────────┬───────────┘  │
//! │           └─────────────┬─────────────┘              │
//! │                  ┌──────▼────────┐                   │
//! │                  │ CommandRunner │ (trait)           │
//! │                  └──────┬────────┘                   │
//! └─────────────────────────┼────────────────────────────┘
//!                   ┌───────┴────────┐
//!            ┌──────▼───────┐ ┌──────▼─────┐
//!            │ SystemRunner │ │ MockRunner │
//!            │ (process)    │ │ (Testing)  │
//!            └──────────────┘ └────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use vmstats::collector::{Collector, SystemRunner};
//!
//! let collector = Collector::new(SystemRunner::new());
//! let snapshots = collector.collect(&[]).unwrap();
//! ```
//!
//! ## Testing (with MockRunner)
//!
//! ```
//! use vmstats::collector::{Collector, MockRunner, DOMSTATS_MIXED};
//!
//! let args = ["domstats", "--vcpu", "--balloon", "--block", "--interface", "--state"];
//! let runner = MockRunner::new().with_stdout("virsh", &args, DOMSTATS_MIXED);
//! let snapshots = Collector::new(runner).collect(&[]).unwrap();
//! assert_eq!(snapshots.len(), 3);
//! ```

#[allow(clippy::module_inception)]
mod collector;
mod error;
pub mod mock;
pub mod parser;
mod traits;

pub use collector::{
    Collector, DEFAULT_PROGRAM, DEFAULT_TIMEOUT, domifaddr_args, domstats_args, merge_addresses,
};
pub use error::CollectError;
pub use mock::{DOMIFADDR_WEB, DOMSTATS_MIXED, MockRunner};
pub use parser::{InterfaceAddress, parse_domifaddr, parse_domstats};
pub use traits::{CommandRunner, SystemRunner};
