//! Full-screen and pane placeholders.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::collector::CollectError;
use crate::tui::render::{MIN_HEIGHT, MIN_WIDTH};
use crate::tui::style::Styles;

/// Centered notice shown below the minimum terminal size.
pub fn render_too_small(frame: &mut Frame, area: Rect, width: u16, height: u16) {
    let lines = vec![
        Line::from("Terminal too small!"),
        Line::from(format!("Need at least {}x{}", MIN_WIDTH, MIN_HEIGHT)),
        Line::from(format!("Current: {}x{}", width, height)),
    ];
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Styles::warning())
        .block(Block::default().padding(Padding::top(top)));
    frame.render_widget(paragraph, area);
}

/// Shown until the first generation arrives.
pub fn render_loading(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Span::styled("Loading VM statistics…", Styles::dim()));
    frame.render_widget(paragraph, area);
}

/// Shown when the first collect failed.
pub fn render_error(frame: &mut Frame, area: Rect, err: &CollectError) {
    let lines = vec![
        Line::from(Span::styled(format!("Error: {}", err), Styles::error())),
        Line::from(""),
        Line::from(Span::styled("Press 'r' to retry, 'q' to quit", Styles::dim())),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Detail pane when the hypervisor reports no domains.
pub fn render_no_domains(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Span::styled("No domains found", Styles::offline_message()))
        .block(Block::default().padding(Padding::new(2, 2, 1, 1)));
    frame.render_widget(paragraph, area);
}
