//! Screen-relative cursor moves (`H`, `M`, `L`), viewport placement (`zz`,
//! `zt`, `zb`) and half-page scrolling.
//!
//! `begin_row` is re-clamped around the cursor line after every key, so the
//! values written here only need to be sensible, not final.

use super::motion::{MotionKind, repeat_vertical};
use crate::editor::Editor;
use crate::viewport::Viewport;
use tracing::trace;

/// Move the cursor to document line `target`, keeping its column.
fn move_to_line(editor: &mut Editor, target: usize) {
    let line = editor.cursor_line();
    if target > line {
        repeat_vertical(editor, MotionKind::Down, target - line);
    } else {
        repeat_vertical(editor, MotionKind::Up, line - target);
    }
}

pub(crate) fn screen_top(editor: &mut Editor) {
    let target = editor.begin_row;
    move_to_line(editor, target);
}

pub(crate) fn screen_middle(editor: &mut Editor, viewport: Viewport) {
    let target = editor.begin_row + viewport.row_count() / 2;
    move_to_line(editor, target);
}

pub(crate) fn screen_bottom(editor: &mut Editor, viewport: Viewport) {
    let target = editor.begin_row + viewport.row_count();
    move_to_line(editor, target);
}

pub(crate) fn center(editor: &mut Editor, viewport: Viewport) {
    let begin_row = editor.cursor_line().saturating_sub(viewport.row_count() / 2);
    set_begin_row(editor, begin_row);
}

pub(crate) fn top(editor: &mut Editor) {
    let begin_row = editor.cursor_line();
    set_begin_row(editor, begin_row);
}

pub(crate) fn bottom(editor: &mut Editor, viewport: Viewport) {
    let begin_row = editor.cursor_line().saturating_sub(viewport.row_count());
    set_begin_row(editor, begin_row);
}

pub(crate) fn half_page_up(editor: &mut Editor, viewport: Viewport) {
    let half = viewport.half_page();
    repeat_vertical(editor, MotionKind::Up, half);
    let begin_row = editor.begin_row.saturating_sub(half);
    set_begin_row(editor, begin_row);
}

pub(crate) fn half_page_down(editor: &mut Editor, viewport: Viewport) {
    let half = viewport.half_page();
    repeat_vertical(editor, MotionKind::Down, half);
    let begin_row = editor.begin_row + half;
    set_begin_row(editor, begin_row);
}

fn set_begin_row(editor: &mut Editor, begin_row: usize) {
    trace!(target: "actions.viewport", from = editor.begin_row, to = begin_row, "begin_row_set");
    editor.begin_row = begin_row;
}
