//! Colored usage bar.

use ratatui::text::Span;

use crate::fmt::{filled_cells, usage_level};
use crate::tui::style::Styles;

/// Renders `[███░░░]` with `width` cells, colored by usage thresholds.
pub fn usage_bar(pct: f64, width: usize) -> Vec<Span<'static>> {
    let filled = filled_cells(pct, width);
    let level = usage_level(pct);
    vec![
        Span::raw("["),
        Span::styled("█".repeat(filled), Styles::bar_filled(level)),
        Span::styled("░".repeat(width - filled), Styles::bar_empty()),
        Span::raw("]"),
    ]
}
