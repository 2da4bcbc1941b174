use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    ClearSearch,
    Previous,
    Next,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    OpenFile,
    ToggleFocus,
    Reload,
    CopyToClipboard,
    UpdateSearch(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::ClearSearch,

        // Conversation paging, the Prev/Next buttons
        (KeyCode::Left, _) => Action::Previous,
        (KeyCode::Right, _) => Action::Next,
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::Previous,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::Next,

        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,

        (KeyCode::Enter, _) => Action::OpenFile,
        (KeyCode::Tab, _) => Action::ToggleFocus,
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::Reload,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyToClipboard,

        // Search input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::UpdateSearch(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
