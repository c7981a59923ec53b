//! Motion sub-dispatch (cursor movement).
//!
//! Pure cursor movement: no text mutation, so a key that only moves never
//! leaves an undo entry. Column memory across vertical moves comes from the
//! byte offset itself (see `core_text::motion`).

use crate::editor::Editor;
use core_text::{Document, motion};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    FirstNonBlank,
    WordForward,
    WordBackward,
    BufferStart,
    BufferEnd,
}

fn primitive(kind: MotionKind) -> fn(&Document, &mut usize) {
    match kind {
        MotionKind::Left => motion::left,
        MotionKind::Right => motion::right,
        MotionKind::Up => motion::line_up,
        MotionKind::Down => motion::line_down,
        MotionKind::LineStart => motion::line_start,
        MotionKind::LineEnd => motion::line_end,
        MotionKind::FirstNonBlank => motion::first_non_blank,
        MotionKind::WordForward => motion::word_forward,
        MotionKind::WordBackward => motion::word_backward,
        MotionKind::BufferStart => motion::buffer_start,
        MotionKind::BufferEnd => motion::buffer_end,
    }
}

pub(crate) fn handle_motion(editor: &mut Editor, kind: MotionKind) {
    let before = editor.cursor();
    editor.move_cursor(primitive(kind));
    trace!(target: "actions.dispatch", ?kind, from = before, to = editor.cursor(), "motion");
}

/// Repeat a vertical motion `count` times, stopping at a document edge.
/// Returns the number of lines travelled.
pub(crate) fn repeat_vertical(editor: &mut Editor, kind: MotionKind, count: usize) -> usize {
    let mut moved = 0;
    editor.move_cursor(|doc, pos| {
        moved = motion::repeat_vertical(doc, pos, count, primitive(kind));
    });
    trace!(target: "actions.dispatch", ?kind, count, moved, "motion_repeat");
    moved
}
