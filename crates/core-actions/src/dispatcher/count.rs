//! Numeric prefix accumulation (`NormalWithCount`).
//!
//! Only vertical motions consume a count; any other key abandons it.

use super::motion::{MotionKind, handle_motion, repeat_vertical};
use crate::editor::Editor;
use core_events::KeyEvent;
use core_state::Mode;
use tracing::trace;

pub(super) fn handle_count(editor: &mut Editor, key: KeyEvent, count: usize) {
    editor.mode = Mode::Normal;
    if key.is_char('j') {
        repeat_vertical(editor, MotionKind::Down, count);
    } else if key.is_char('k') {
        repeat_vertical(editor, MotionKind::Up, count);
    } else if key.is_char('g') {
        handle_motion(editor, MotionKind::BufferStart);
        repeat_vertical(editor, MotionKind::Down, count);
    } else if let Some(digit) = key.printable_byte().filter(u8::is_ascii_digit) {
        let count = count
            .saturating_mul(10)
            .saturating_add(usize::from(digit - b'0'));
        editor.mode = Mode::NormalWithCount { count };
    } else {
        trace!(target: "actions.dispatch", count, %key, "count_abandoned");
    }
}
