//! Keyboard input handling
//!
//! The selector has a single mode; every key acts on the active slot.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::Slot;
use crate::state::app::App;

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        KeyCode::Tab | KeyCode::BackTab => app.switch_slot(),
        KeyCode::Left | KeyCode::Char('h') => app.focus_slot(Slot::Source),
        KeyCode::Right | KeyCode::Char('l') => app.focus_slot(Slot::Destination),

        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),

        KeyCode::Enter => app.select_under_cursor(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Delete => app.clear_active(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::remote::{BackendResult, RemoteBackend, RemoteEntry};
    use crate::state::selector::LoadState;
    use std::sync::Arc;

    struct NullBackend;

    impl RemoteBackend for NullBackend {
        fn list_remotes(&self) -> BackendResult<Vec<String>> {
            Ok(Vec::new())
        }

        fn list_entries(&self, _remote: &str) -> BackendResult<Vec<RemoteEntry>> {
            Ok(Vec::new())
        }
    }

    fn app_with_catalog() -> App {
        let mut app = App::with_backend(Config::default(), Arc::new(NullBackend));
        app.selector
            .set_catalog(vec!["alpha".to_string(), "beta".to_string()]);
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits() {
        let mut app = app_with_catalog();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_switches_the_active_slot() {
        let mut app = app_with_catalog();
        assert_eq!(app.active_slot, Slot::Source);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_slot, Slot::Destination);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_slot, Slot::Source);
    }

    #[test]
    fn enter_selects_the_remote_under_the_cursor() {
        let mut app = app_with_catalog();
        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.selector.selected(Slot::Source), Some("beta"));
        assert!(app.selector.load(Slot::Source).is_loading());
    }

    #[test]
    fn backspace_clears_the_active_selection() {
        let mut app = app_with_catalog();
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.selector.selected(Slot::Source).is_some());

        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.selector.selected(Slot::Source), None);
        assert_eq!(*app.selector.load(Slot::Source), LoadState::Idle);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app_with_catalog();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit);
    }
}
