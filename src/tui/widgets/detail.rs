//! Detail pane for the selected VM.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

use crate::model::{DomainSnapshot, DomainState};
use crate::tui::render::LayoutPlan;
use crate::tui::style::{Styles, state_info};

use super::sections::{cpu_lines, disk_lines, memory_lines, network_lines};

/// Splits `rows` rows off the top of `area`, clamped to what is left.
fn take_rows(area: &mut Rect, rows: u16) -> Rect {
    let rows = rows.min(area.height);
    let top = Rect {
        height: rows,
        ..*area
    };
    area.y += rows;
    area.height -= rows;
    top
}

/// Title band text: state, optional OS type, and name.
pub fn title_text(snap: &DomainSnapshot) -> String {
    let info = state_info(snap.state);
    let os = snap
        .os_type
        .as_deref()
        .map(|os| format!("• {} ", os))
        .unwrap_or_default();
    format!(" {} {} {}• {} ", info.icon, info.text, os, snap.domain_name)
}

/// Renders the title band followed by the four resource boxes, or the
/// shut-off notice. Content that does not fit is clipped at the bottom.
pub fn render_detail(frame: &mut Frame, area: Rect, snap: &DomainSnapshot, plan: &LayoutPlan) {
    let mut rest = area;
    let spacing = if plan.compact { 0 } else { 1 };

    let title_area = take_rows(&mut rest, 1);
    frame.render_widget(
        Paragraph::new(title_text(snap)).style(Styles::title()),
        title_area,
    );
    take_rows(&mut rest, spacing);

    if snap.state == DomainState::Shutoff {
        let notice = Paragraph::new(vec![
            Line::from("This VM is currently shut off."),
            Line::from("Metrics will appear when the VM is running."),
        ])
        .style(Styles::offline_message())
        .block(Block::default().padding(Padding::new(2, 2, 1, 1)));
        frame.render_widget(notice, rest);
        return;
    }

    let sections = [
        ("Memory", memory_lines(snap, plan)),
        ("CPU", cpu_lines(snap, plan)),
        ("Virtual Disks (Host)", disk_lines(snap, plan)),
        ("Network", network_lines(snap)),
    ];
    for (i, (title, lines)) in sections.into_iter().enumerate() {
        if i > 0 {
            take_rows(&mut rest, spacing);
        }
        if rest.height == 0 {
            break;
        }
        render_section(frame, &mut rest, title, lines, plan.compact);
    }
}

fn render_section(
    frame: &mut Frame,
    rest: &mut Rect,
    title: &'static str,
    lines: Vec<Line<'static>>,
    compact: bool,
) {
    let header = take_rows(rest, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(title, Styles::section_header())),
        header,
    );

    let padding = if compact {
        Padding::horizontal(1)
    } else {
        Padding::new(2, 2, 1, 1)
    };
    let height = lines.len() as u16 + 2 + padding.top + padding.bottom;
    let box_area = take_rows(rest, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::border())
        .padding(padding);
    frame.render_widget(Paragraph::new(lines).block(block), box_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_text() {
        let mut snap = DomainSnapshot::new("web");
        snap.state = DomainState::Running;
        assert_eq!(title_text(&snap), " ● Running • web ");

        snap.os_type = Some("hvm".into());
        assert_eq!(title_text(&snap), " ● Running • hvm • web ");
    }

    #[test]
    fn test_take_rows_clamps() {
        let mut area = Rect::new(0, 5, 10, 3);
        assert_eq!(take_rows(&mut area, 2), Rect::new(0, 5, 10, 2));
        assert_eq!(take_rows(&mut area, 4), Rect::new(0, 7, 10, 1));
        assert_eq!(area.height, 0);
        assert_eq!(take_rows(&mut area, 1).height, 0);
    }
}
