//! Text mutation commands.
//!
//! Everything here goes through `Editor::insert_at` / `Editor::erase`, which
//! flag the key as modifying so `History::commit` keeps the checkpoint.

use super::motion::{MotionKind, handle_motion};
use crate::editor::Editor;
use tracing::debug;

/// `x`: delete the byte under the cursor into the clipboard. Deleting a
/// newline joins the line with the next one. The final newline is the
/// document terminator and stays put.
pub(crate) fn delete_char(editor: &mut Editor) {
    let at = editor.cursor();
    if at == editor.doc().last_offset() {
        return;
    }
    let removed = editor.erase(at..at + 1);
    debug!(target: "actions.dispatch", at, "delete_char");
    editor.clipboard.set(removed);
}

/// `dd`: delete the cursor line including its newline into the clipboard.
pub(crate) fn delete_line(editor: &mut Editor) {
    let span = editor.doc().span(editor.cursor());
    let removed = editor.erase(span.start..span.end + 1);
    let lines = editor.doc().line_count();
    debug!(
        target: "actions.dispatch",
        start = span.start,
        len = removed.len(),
        lines,
        "delete_line"
    );
    editor.clipboard.set(removed);
    editor.set_cursor(span.start);
}

/// `P`: a linewise clipboard goes above the cursor line, a charwise one at
/// the cursor.
pub(crate) fn paste_before(editor: &mut Editor) {
    if editor.clipboard.is_empty() {
        return;
    }
    let text = editor.clipboard.contents().to_vec();
    if editor.clipboard.is_linewise() {
        handle_motion(editor, MotionKind::LineStart);
        editor.insert_at_cursor(&text);
        handle_motion(editor, MotionKind::Up);
    } else {
        let at = editor.cursor();
        editor.insert_at(at, &text);
        editor.set_cursor(at + text.len() - 1);
    }
    debug!(target: "actions.dispatch", len = text.len(), "paste_before");
}

/// `p`: a linewise clipboard goes below the cursor line, a charwise one after
/// the cursor byte.
pub(crate) fn paste_after(editor: &mut Editor) {
    if editor.clipboard.is_empty() {
        return;
    }
    let text = editor.clipboard.contents().to_vec();
    let span = editor.doc().span(editor.cursor());
    if editor.clipboard.is_linewise() {
        let at = span.end + 1;
        editor.insert_at(at, &text);
        editor.set_cursor(at);
    } else {
        let at = (editor.cursor() + 1).min(span.end);
        editor.insert_at(at, &text);
        editor.set_cursor(at + text.len() - 1);
    }
    debug!(target: "actions.dispatch", len = text.len(), "paste_after");
}

/// `o`: open an empty line below the cursor line.
pub(crate) fn open_below(editor: &mut Editor) {
    handle_motion(editor, MotionKind::LineEnd);
    editor.insert_at_cursor(b"\n");
}

/// `O`: open an empty line above the cursor line.
pub(crate) fn open_above(editor: &mut Editor) {
    handle_motion(editor, MotionKind::LineStart);
    editor.insert_at_cursor(b"\n");
    handle_motion(editor, MotionKind::Up);
}

/// Insert-mode Backspace: erase the byte before the cursor (joining lines
/// when it is a newline). No-op at offset 0.
pub(crate) fn backspace(editor: &mut Editor) {
    let at = editor.cursor();
    if at == 0 {
        return;
    }
    editor.erase(at - 1..at);
    editor.set_cursor(at - 1);
}

/// Replace the byte under the cursor with `byte`, cursor one left. Replacing
/// a newline joins the line with the next one.
pub(crate) fn replace_char(editor: &mut Editor, byte: u8) {
    let at = editor.cursor();
    editor.erase(at..at + 1);
    editor.insert_at(at, &[byte]);
    editor.set_cursor(at);
    handle_motion(editor, MotionKind::Left);
}
