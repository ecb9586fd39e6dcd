//! Key bindings for the console
//!
//! Overlays capture input first (confirm dialog, editor, line prompt), then
//! screen-level bindings apply.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::console::{ConsoleState, ConsoleView, Msg};

/// Map a key press to a console message
pub fn key_to_msg(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &ConsoleState,
    now_ms: i64,
) -> Option<Msg> {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('q') {
        return Some(Msg::Quit);
    }

    if state.confirm.is_some() {
        return match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Msg::ConfirmAccept),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Msg::ConfirmCancel),
            _ => None,
        };
    }

    if state.editor.is_some() {
        return match code {
            KeyCode::Esc => Some(Msg::InputCancel),
            KeyCode::Enter => Some(Msg::InputSubmit),
            KeyCode::Tab | KeyCode::Down => Some(Msg::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Msg::PrevField),
            KeyCode::Backspace => Some(Msg::InputBackspace),
            KeyCode::Char(c) => Some(Msg::InputChar(c)),
            _ => None,
        };
    }

    if state.input.is_some() {
        return match code {
            KeyCode::Esc => Some(Msg::InputCancel),
            KeyCode::Enter => Some(Msg::InputSubmit),
            KeyCode::Backspace => Some(Msg::InputBackspace),
            KeyCode::Char(c) => Some(Msg::InputChar(c)),
            _ => None,
        };
    }

    let shared = match code {
        KeyCode::Char('q') => Some(Msg::Quit),
        KeyCode::Char('v') => Some(Msg::SwitchView),
        KeyCode::Char('/') => Some(Msg::StartSearch),
        KeyCode::Char('r') => Some(Msg::Refresh),
        KeyCode::Char('[') | KeyCode::PageUp | KeyCode::Left => Some(Msg::PrevPage),
        KeyCode::Char(']') | KeyCode::PageDown | KeyCode::Right => Some(Msg::NextPage),
        KeyCode::Char('s') => Some(Msg::CycleLimit),
        KeyCode::Char('x') => Some(Msg::DismissNotice),
        KeyCode::Esc if state.notice.is_some() => Some(Msg::DismissNotice),
        KeyCode::Esc => Some(Msg::ClearSearch),
        _ => None,
    };
    if shared.is_some() {
        return shared;
    }

    match state.view {
        ConsoleView::Overview => None,
        ConsoleView::Pallets => match code {
            KeyCode::Tab | KeyCode::BackTab => Some(Msg::SwitchPane),
            KeyCode::Char('j') | KeyCode::Down => Some(Msg::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Msg::MoveUp),
            KeyCode::Char('n') => Some(Msg::NewPallet { now_ms }),
            KeyCode::Char('a') => Some(Msg::NewPack { now_ms }),
            KeyCode::Char('e') | KeyCode::Enter => Some(Msg::EditSelected),
            KeyCode::Char('d') | KeyCode::Delete => Some(Msg::DeleteSelected),
            KeyCode::Char('o') => Some(Msg::ToggleOrphans),
            _ => None,
        },
    }
}
