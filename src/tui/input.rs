use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Discrete user actions the reducer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    NextList,
    PrevList,
    Fold,
    Unfold,
    Refresh,
    ToggleHelp,
    Quit,
}

/// Map a key press to an action. The help overlay swallows everything
/// except close and quit.
pub fn action_for(key: KeyEvent, help_open: bool) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    if help_open {
        return match key.code {
            KeyCode::Char('h') | KeyCode::Char('?') | KeyCode::Esc => Some(Action::ToggleHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('h') | KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Left => Some(Action::Fold),
        KeyCode::Right => Some(Action::Unfold),
        KeyCode::Tab | KeyCode::Char('l') => Some(Action::NextList),
        KeyCode::BackTab => Some(Action::PrevList),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Char('r') => Some(Action::Refresh),
        _ => None,
    }
}
