//! Terminal key events to engine `KeyEvent`s.
//!
//! Terminals speaking the kitty keyboard protocol report releases, which is
//! what ends Leader mode. On press-only terminals the leader turns into a
//! one-shot prefix: the key after it gets a synthesized leader release.

use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::Mode;
use crossterm::event::{
    KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKeyEventKind,
    KeyModifiers as CKeyModifiers,
};

/// Map a crossterm key event. Returns `None` for keys the editor has no use
/// for (function keys, media keys, ...).
pub(crate) fn map_key_event(event: &CKeyEvent) -> Option<KeyEvent> {
    let code = map_key_code(&event.code)?;
    Some(KeyEvent {
        code,
        mods: map_modifiers(event.modifiers),
        released: matches!(event.kind, CKeyEventKind::Release),
    })
}

fn map_key_code(code: &CKeyCode) -> Option<KeyCode> {
    let code = match code {
        CKeyCode::Char(c) => KeyCode::Char(*c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        _ => return None,
    };
    Some(code)
}

fn map_modifiers(mods: CKeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if mods.contains(CKeyModifiers::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if mods.contains(CKeyModifiers::ALT) {
        out |= KeyModifiers::ALT;
    }
    if mods.contains(CKeyModifiers::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

/// Leader release to feed after `key` was processed, if the terminal cannot
/// report one itself.
pub(crate) fn synthesized_release(
    reports_release: bool,
    key: &KeyEvent,
    mode_after: Mode,
) -> Option<KeyEvent> {
    let leader_press = key.code == KeyCode::Char(' ') && !key.released;
    if reports_release || leader_press || mode_after != Mode::Leader {
        return None;
    }
    Some(KeyEvent::release(KeyCode::Char(' ')))
}
