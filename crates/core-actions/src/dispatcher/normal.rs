//! Normal mode command table.

use super::motion::{MotionKind, handle_motion};
use super::{edit, scroll};
use crate::editor::Editor;
use crate::viewport::Viewport;
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::{Mode, PendingOperator, Rewind};

pub(super) fn handle_normal(editor: &mut Editor, key: KeyEvent, viewport: Viewport) {
    if key.is_ctrl('r') {
        editor.request_rewind(Rewind::Redo);
        return;
    }
    if key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) {
        return;
    }
    let c = match key.code {
        KeyCode::Char(c) => c,
        KeyCode::Left => return handle_motion(editor, MotionKind::Left),
        KeyCode::Right => return handle_motion(editor, MotionKind::Right),
        KeyCode::Up => return handle_motion(editor, MotionKind::Up),
        KeyCode::Down => return handle_motion(editor, MotionKind::Down),
        KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace | KeyCode::Tab => return,
    };
    match c {
        ' ' => editor.mode = Mode::Leader,
        'u' => editor.request_rewind(Rewind::Undo),
        '1'..='9' => {
            editor.mode = Mode::NormalWithCount {
                count: c.to_digit(10).map_or(0, |d| d as usize),
            }
        }
        'd' => editor.mode = Mode::NormalPending(PendingOperator::Delete),
        'z' => editor.mode = Mode::NormalPending(PendingOperator::Scroll),
        'i' => editor.mode = Mode::Insert,
        'I' => {
            handle_motion(editor, MotionKind::FirstNonBlank);
            editor.mode = Mode::Insert;
        }
        'a' => {
            handle_motion(editor, MotionKind::Right);
            editor.mode = Mode::Insert;
        }
        'A' => {
            handle_motion(editor, MotionKind::LineEnd);
            editor.mode = Mode::Insert;
        }
        'o' => {
            edit::open_below(editor);
            editor.mode = Mode::Insert;
        }
        'O' => {
            edit::open_above(editor);
            editor.mode = Mode::Insert;
        }
        'r' => editor.mode = Mode::Replace,
        'x' => edit::delete_char(editor),
        'P' => edit::paste_before(editor),
        'p' => edit::paste_after(editor),
        '0' => handle_motion(editor, MotionKind::LineStart),
        '_' => handle_motion(editor, MotionKind::FirstNonBlank),
        '$' => handle_motion(editor, MotionKind::LineEnd),
        'h' => handle_motion(editor, MotionKind::Left),
        'j' => handle_motion(editor, MotionKind::Down),
        'k' => handle_motion(editor, MotionKind::Up),
        'l' => handle_motion(editor, MotionKind::Right),
        'b' => handle_motion(editor, MotionKind::WordBackward),
        'w' => handle_motion(editor, MotionKind::WordForward),
        'g' => handle_motion(editor, MotionKind::BufferStart),
        'G' => handle_motion(editor, MotionKind::BufferEnd),
        'H' => scroll::screen_top(editor),
        'M' => scroll::screen_middle(editor, viewport),
        'L' => scroll::screen_bottom(editor, viewport),
        _ => {}
    }
}
