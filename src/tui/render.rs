//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;

use super::state::AppState;
use super::widgets::{
    footer_lines, render_detail, render_error, render_loading, render_no_domains,
    render_sidebar, render_too_small,
};

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 30;
/// Terminals shorter than this get the compact layout.
pub const COMPACT_BELOW: u16 = 45;
pub const SIDEBAR_WIDTH: u16 = 34;
pub const GAP: u16 = 2;
/// Rows kept for the footer (help, last updated, padding).
const FOOTER_RESERVED: u16 = 4;
const MIN_CONTENT_HEIGHT: u16 = 15;
const MIN_CONTENT_WIDTH: u16 = 40;
/// Box border plus horizontal padding.
const BOX_OVERHEAD: u16 = 4;
/// Text columns next to a bar.
const BAR_TEXT_ALLOWANCE: u16 = 60;
const MIN_BAR_WIDTH: u16 = 10;

/// Size-dependent layout decisions for the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub compact: bool,
    pub content_height: u16,
    pub content_width: u16,
    pub inner_width: u16,
    pub bar_width: u16,
    pub max_vcpus: usize,
    pub max_disks: usize,
}

impl LayoutPlan {
    /// Usable text width inside a section box.
    pub fn text_width(&self) -> u16 {
        if self.compact {
            self.inner_width
        } else {
            // Normal boxes have two extra padding columns.
            self.inner_width.saturating_sub(2)
        }
    }
}

/// Only a known size (both dimensions non-zero) can be too small.
pub fn is_too_small(width: u16, height: u16) -> bool {
    width > 0 && height > 0 && (width < MIN_WIDTH || height < MIN_HEIGHT)
}

pub fn plan_layout(width: u16, height: u16) -> LayoutPlan {
    let compact = height < COMPACT_BELOW;
    let content_width = width
        .saturating_sub(SIDEBAR_WIDTH + BOX_OVERHEAD)
        .max(MIN_CONTENT_WIDTH);
    let inner_width = content_width - BOX_OVERHEAD;
    LayoutPlan {
        compact,
        content_height: height
            .saturating_sub(FOOTER_RESERVED)
            .max(MIN_CONTENT_HEIGHT),
        content_width,
        inner_width,
        bar_width: inner_width
            .saturating_sub(BAR_TEXT_ALLOWANCE)
            .max(MIN_BAR_WIDTH),
        max_vcpus: if compact { 4 } else { 6 },
        max_disks: if compact { 2 } else { 4 },
    }
}

/// Main render function.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let (width, height) = if state.width > 0 && state.height > 0 {
        (state.width, state.height)
    } else {
        (area.width, area.height)
    };

    if is_too_small(width, height) {
        render_too_small(frame, area, width, height);
        return;
    }

    if !state.initialized {
        match &state.last_error {
            Some(err) => render_error(frame, area, err),
            None => render_loading(frame, area),
        }
        return;
    }

    let plan = plan_layout(width, height);
    let footer = footer_lines(state);
    let content_height = plan
        .content_height
        .min(area.height.saturating_sub(footer.len() as u16));

    let [main, footer_area] =
        Layout::vertical([Constraint::Length(content_height), Constraint::Min(0)]).areas(area);
    let [sidebar, _, mut content] = Layout::horizontal([
        Constraint::Length(SIDEBAR_WIDTH),
        Constraint::Length(GAP),
        Constraint::Min(0),
    ])
    .areas(main);
    content.width = content.width.min(plan.content_width);

    render_sidebar(frame, sidebar, state);
    match state.selected_snapshot() {
        Some(snap) => render_detail(frame, content, snap, &plan),
        None => render_no_domains(frame, content),
    }
    frame.render_widget(Paragraph::new(footer), footer_area);
}
