//! Help line, legend, error line and "Last updated" line.

use ratatui::text::{Line, Span};

use crate::tui::state::AppState;
use crate::tui::style::{Styles, Theme};

const NAV_KEYS: [(&str, &str); 4] = [
    ("↑/k", "prev"),
    ("↓/j", "next"),
    ("shift+tab", "prev"),
    ("tab", "next"),
];
/// The short help shows only the first two navigation keys.
const SHORT_NAV: usize = 2;
const ACTION_KEYS: [(&str, &str); 4] = [
    ("r", "refresh"),
    ("p", "pause/resume"),
    ("q", "quit"),
    ("?", "help"),
];

fn short_help() -> Line<'static> {
    let mut spans = Vec::new();
    let keys = NAV_KEYS[..SHORT_NAV].iter().chain(ACTION_KEYS.iter());
    for (i, (key, desc)) in keys.enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Styles::dim()));
        }
        spans.push(Span::styled(*key, Styles::help_key()));
        spans.push(Span::styled(format!(" {}", desc), Styles::help()));
    }
    Line::from(spans)
}

/// Two columns: navigation, then actions.
fn full_help() -> Vec<Line<'static>> {
    NAV_KEYS
        .iter()
        .zip(ACTION_KEYS.iter())
        .map(|(&(nav_key, nav_desc), &(act_key, act_desc))| {
            Line::from(vec![
                Span::styled(format!("{:<10}", nav_key), Styles::help_key()),
                Span::styled(format!("{:<8}", nav_desc), Styles::help()),
                Span::styled(format!("    {:<2}", act_key), Styles::help_key()),
                Span::styled(act_desc, Styles::help()),
            ])
        })
        .collect()
}

fn legend() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled("Legend", Styles::section_header())),
        Line::from(vec![
            Span::styled("• Colors: ", Styles::dim()),
            Span::styled("Green", Styles::default().fg(Theme::SUCCESS)),
            Span::styled(" <70%, ", Styles::dim()),
            Span::styled("Yellow", Styles::default().fg(Theme::WARNING)),
            Span::styled(" 70-90%, ", Styles::dim()),
            Span::styled("Red", Styles::default().fg(Theme::DANGER)),
            Span::styled(" ≥90%", Styles::dim()),
        ]),
        Line::from(Span::styled(
            "• Phys: Physical disk space used on host",
            Styles::dim(),
        )),
        Line::from(Span::styled("• Max: Maximum virtual disk size", Styles::dim())),
        Line::from(Span::styled(
            "• RSS: Resident Set Size (RAM used)",
            Styles::dim(),
        )),
    ]
}

/// All footer lines for the main view, top to bottom.
pub fn footer_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = if state.show_help {
        let mut lines = full_help();
        lines.extend(legend());
        lines
    } else {
        vec![short_help()]
    };

    if let Some(err) = &state.last_error {
        lines.push(Line::from(Span::styled(
            format!("Error: {} (press r to retry)", err),
            Styles::error(),
        )));
    }

    let stamp = state
        .last_update_wall
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());
    let mut last = vec![Span::styled(format!("Last updated: {}", stamp), Styles::dim())];
    if state.paused {
        last.push(Span::raw(" "));
        last.push(Span::styled("[PAUSED]", Styles::error()));
    }
    lines.push(Line::from(last));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::CollectError;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_short_footer() {
        let state = AppState::new();
        let lines = text(&footer_lines(&state));
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "↑/k prev • ↓/j next • r refresh • p pause/resume • q quit • ? help"
        );
        assert_eq!(lines[1], "Last updated: --:--:--");
    }

    #[test]
    fn test_paused_tag_and_error_line() {
        let mut state = AppState::new();
        state.paused = true;
        state.apply_error(CollectError::ExitStatus {
            program: "virsh".into(),
            code: Some(1),
        });
        let lines = footer_lines(&state);
        let last = lines.last().map(|l| l.spans.clone()).unwrap_or_default();
        assert_eq!(last[2].content, "[PAUSED]");
        assert_eq!(last[2].style, Styles::error());

        let text = text(&lines);
        assert_eq!(
            text[1],
            "Error: virsh exited with status 1 (press r to retry)"
        );
    }

    #[test]
    fn test_full_help_with_legend() {
        let mut state = AppState::new();
        state.show_help = true;
        let text = text(&footer_lines(&state));
        assert_eq!(text.len(), 4 + 6 + 1);
        assert!(text[0].starts_with("↑/k       prev"));
        assert!(text[2].starts_with("shift+tab prev"));
        assert!(text[3].starts_with("tab       next"));
        assert!(text[3].contains("? help"));
        assert!(text.iter().any(|l| l == "Legend"));
        assert!(text.iter().any(|l| l == "• RSS: Resident Set Size (RAM used)"));
        assert!(text.iter().any(|l| l.contains("Yellow 70-90%")));
    }
}
