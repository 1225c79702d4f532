//! VM list with resource summary.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

use crate::fmt::format_bytes;
use crate::tui::state::AppState;
use crate::tui::style::{Styles, state_info};

/// Rows below the list: separator, running count, totals.
const SUMMARY_ROWS: usize = 3;

/// First list row to show so that `selected` stays visible in `visible` rows.
fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 || selected < visible {
        0
    } else {
        selected + 1 - visible
    }
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::border())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = (inner.height as usize).saturating_sub(1 + SUMMARY_ROWS);
    let offset = scroll_offset(state.selected_index, visible);

    let mut lines = vec![Line::from(Span::styled("VMs", Styles::section_header()))];
    for (i, snap) in state
        .snapshots
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible.max(1))
    {
        let info = state_info(snap.state);
        let (marker, style) = if i == state.selected_index {
            ("▶ ", Styles::selected())
        } else {
            ("  ", Styles::default())
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(info.icon, info.style()),
            Span::raw(" "),
            Span::styled(snap.domain_name.clone(), style),
        ]));
    }

    let summary = state.summary();
    lines.push(Line::from(Span::styled("─".repeat(20), Styles::dim())));
    lines.push(Line::from(format!(
        "Running: {}/{}",
        summary.running, summary.total
    )));
    lines.push(Line::from(format!(
        "CPUs: {} | Mem: {}",
        summary.vcpus,
        format_bytes(summary.memory_bytes)
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
