//! Duration parser for CLI arguments.
//!
//! Accepts a sequence of `<number><unit>` terms, e.g. `500ms`, `2s`,
//! `1m30s`, `1.5s`. Units: `ns`, `us` (or `µs`), `ms`, `s`, `m`, `h`.
//! A bare `0` is accepted as zero.

use std::time::Duration;

/// Error type for duration parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationParseError {
    pub input: String,
    pub message: String,
}

impl DurationParseError {
    fn new(input: &str, message: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for DurationParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to parse duration '{}': {}",
            self.input, self.message
        )
    }
}

impl std::error::Error for DurationParseError {}

/// Nanoseconds per unit suffix.
fn unit_nanos(unit: &str) -> Option<f64> {
    match unit {
        "ns" => Some(1.0),
        "us" | "µs" => Some(1e3),
        "ms" => Some(1e6),
        "s" => Some(1e9),
        "m" => Some(60.0 * 1e9),
        "h" => Some(3600.0 * 1e9),
        _ => None,
    }
}

/// Parse a duration string such as `500ms` or `1m30s`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use vmstats::util::parse_duration;
///
/// assert_eq!(parse_duration("2s").unwrap(), Duration::from_secs(2));
/// assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::new(input, "empty duration"));
    }
    if trimmed == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total_nanos = 0f64;
    let mut rest = trimmed;

    while !rest.is_empty() {
        // Number: digits with an optional fractional part.
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let number_str = &rest[..number_len];
        if number_str.is_empty() || number_str == "." {
            return Err(DurationParseError::new(
                input,
                "expected a number (e.g. 500ms, 2s, 1m30s)",
            ));
        }
        let number: f64 = number_str
            .parse()
            .map_err(|_| DurationParseError::new(input, format!("invalid number '{}'", number_str)))?;
        rest = &rest[number_len..];

        // Unit: everything up to the next digit.
        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        if unit.is_empty() {
            return Err(DurationParseError::new(
                input,
                "missing unit (use ns, us, ms, s, m or h)",
            ));
        }
        let scale = unit_nanos(unit).ok_or_else(|| {
            DurationParseError::new(
                input,
                format!("unknown unit '{}' (use ns, us, ms, s, m or h)", unit),
            )
        })?;
        rest = &rest[unit_len..];

        total_nanos += number * scale;
    }

    if !total_nanos.is_finite() || total_nanos > u64::MAX as f64 {
        return Err(DurationParseError::new(input, "duration out of range"));
    }

    Ok(Duration::from_nanos(total_nanos.round() as u64))
}
