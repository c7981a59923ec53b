//! Insert and Replace mode.

use super::edit;
use super::motion::{MotionKind, handle_motion};
use crate::editor::Editor;
use core_events::{KeyCode, KeyEvent};
use core_state::Mode;

pub(super) fn handle_insert(editor: &mut Editor, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => editor.mode = Mode::Normal,
        KeyCode::Backspace => edit::backspace(editor),
        KeyCode::Tab => editor.insert_at_cursor(b"\t"),
        KeyCode::Enter => editor.insert_at_cursor(b"\n"),
        KeyCode::Left => handle_motion(editor, MotionKind::Left),
        KeyCode::Right => handle_motion(editor, MotionKind::Right),
        KeyCode::Up => handle_motion(editor, MotionKind::Up),
        KeyCode::Down => handle_motion(editor, MotionKind::Down),
        KeyCode::Char(_) => {
            if let Some(byte) = key.printable_byte() {
                editor.insert_at_cursor(&[byte]);
            }
        }
    }
}

/// Single-shot replace: one printable key overwrites the cursor byte, any
/// key returns to Normal.
pub(super) fn handle_replace(editor: &mut Editor, key: KeyEvent) {
    if let Some(byte) = key.printable_byte() {
        edit::replace_char(editor, byte);
    }
    editor.mode = Mode::Normal;
}
