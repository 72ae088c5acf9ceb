use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    None,
    Quit,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{BackTab, Char, Esc, Left, Right, Tab};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() {
        return Action::Quit;
    }

    match key.code {
        Right | Tab | Char('f') => app.cycle_filter_forward(),
        Left | BackTab => app.cycle_filter_back(),
        Esc | Char('a') => app.clear_filter(),
        _ => {}
    }

    Action::None
}
