//! Shared formatting helpers for TUI widgets.
//!
//! Pure functions only: no ratatui styles, no layout.

/// Usage below this percentage is shown as normal.
pub const THRESHOLD_WARNING: f64 = 70.0;
/// Usage at or above this percentage is shown as critical.
pub const THRESHOLD_CRITICAL: f64 = 90.0;

const NANOS_PER_SEC: u64 = 1_000_000_000;

// ---------------------------------------------------------------------------
// Sizes and durations
// ---------------------------------------------------------------------------

/// Format byte count as human-readable size, base 1024.
///
/// `"512 B"`, `"1.5 KiB"`, `"16.0 GiB"`
pub fn format_bytes(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    let suffix = ['K', 'M', 'G', 'T', 'P', 'E'][exp];
    format!("{:.1} {}iB", bytes as f64 / div as f64, suffix)
}

/// Format cumulative nanoseconds as `"45s"`, `"3m5s"` or `"2h14m"`.
pub fn format_duration_ns(ns: u64) -> String {
    let secs = ns / NANOS_PER_SEC;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m{}s", mins, secs % 60);
    }
    format!("{}h{}m", mins / 60, mins % 60)
}

/// Format a percentage with one decimal, e.g. `"42.5%"`.
pub fn format_percent(pct: f64) -> String {
    format!("{:.1}%", pct)
}

// ---------------------------------------------------------------------------
// Ratios and thresholds
// ---------------------------------------------------------------------------

/// `part / whole` as a percentage, 0 when `whole` is 0.
pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Colour class of a usage percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    Normal,
    Warning,
    Critical,
}

/// Classifies `pct` against the warning and critical thresholds (inclusive lower bounds).
pub fn usage_level(pct: f64) -> UsageLevel {
    if pct >= THRESHOLD_CRITICAL {
        UsageLevel::Critical
    } else if pct >= THRESHOLD_WARNING {
        UsageLevel::Warning
    } else {
        UsageLevel::Normal
    }
}

/// Number of filled cells for a bar of `width` cells at `pct` percent.
pub fn filled_cells(pct: f64, width: usize) -> usize {
    if !pct.is_finite() || pct <= 0.0 {
        return 0;
    }
    ((pct / 100.0 * width as f64) as usize).min(width)
}
