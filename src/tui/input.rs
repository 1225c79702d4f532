//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::AppState;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Collect now, even while paused.
    Refresh,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    // Release and repeat events are reported on some platforms.
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // VM navigation
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            state.select_next();
            KeyAction::None
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
            state.select_prev();
            KeyAction::None
        }

        KeyCode::Char('r') => KeyAction::Refresh,
        KeyCode::Char('p') => {
            state.toggle_pause();
            KeyAction::None
        }
        KeyCode::Char('?') => {
            state.toggle_help();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DomainSnapshot;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with(n: usize) -> AppState {
        let mut state = AppState::new();
        state.snapshots = (0..n)
            .map(|i| DomainSnapshot::new(format!("vm{}", i)))
            .collect();
        state
    }

    #[test]
    fn test_quit_keys() {
        let mut state = AppState::new();
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            handle_key(
                &mut state,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            KeyAction::Quit
        );
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('c'))), KeyAction::None);
    }

    #[test]
    fn test_navigation_keys_wrap() {
        let mut state = state_with(3);
        for code in [KeyCode::Down, KeyCode::Char('j'), KeyCode::Tab] {
            assert_eq!(handle_key(&mut state, key(code)), KeyAction::None);
        }
        assert_eq!(state.selected_index, 0);

        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.selected_index, 2);
        handle_key(&mut state, key(KeyCode::Char('k')));
        handle_key(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_refresh_allowed_while_paused() {
        let mut state = AppState::new();
        handle_key(&mut state, key(KeyCode::Char('p')));
        assert!(state.paused);
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('r'))),
            KeyAction::Refresh
        );
        handle_key(&mut state, key(KeyCode::Char('p')));
        assert!(!state.paused);
    }

    #[test]
    fn test_help_toggle() {
        let mut state = AppState::new();
        handle_key(&mut state, key(KeyCode::Char('?')));
        assert!(state.show_help);
        handle_key(&mut state, key(KeyCode::Char('?')));
        assert!(!state.show_help);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut state = AppState::new();
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_key(&mut state, release), KeyAction::None);
    }
}
