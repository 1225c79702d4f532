//! Helpers for normalizing command-line values.

use std::time::Duration;

/// Smallest refresh interval the dashboard accepts.
pub const MIN_INTERVAL: Duration = Duration::from_millis(500);

/// Splits a comma-separated domain list. Names are trimmed, empty entries dropped.
///
/// An empty result means "all domains".
pub fn parse_domain_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Raises `interval` to [`MIN_INTERVAL`] if it is lower.
///
/// Returns the effective interval and whether it was raised.
pub fn clamp_interval(interval: Duration) -> (Duration, bool) {
    if interval < MIN_INTERVAL {
        (MIN_INTERVAL, true)
    } else {
        (interval, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_domain_list() {
        assert_eq!(parse_domain_list("web, db ,,cache"), vec!["web", "db", "cache"]);
        assert!(parse_domain_list("").is_empty());
        assert!(parse_domain_list(" , ,").is_empty());
    }

    #[test]
    fn test_clamp_interval() {
        assert_eq!(
            clamp_interval(Duration::from_millis(100)),
            (MIN_INTERVAL, true)
        );
        assert_eq!(clamp_interval(Duration::ZERO), (MIN_INTERVAL, true));
        assert_eq!(clamp_interval(MIN_INTERVAL), (MIN_INTERVAL, false));
        assert_eq!(
            clamp_interval(Duration::from_secs(2)),
            (Duration::from_secs(2), false)
        );
    }
}
