//! Utility modules for vmstats.

mod args;
mod clock;
mod duration_parser;

pub use args::{MIN_INTERVAL, clamp_interval, parse_domain_list};
pub use clock::monotonic_ns;
pub use duration_parser::{DurationParseError, parse_duration};
