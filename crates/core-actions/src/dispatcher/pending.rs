//! Second key of a two-key operator (`dd`, `zz`, `zt`, `zb`).
//!
//! The operator always resolves on the next key press: either it runs or it
//! is cancelled, and the mode returns to Normal in both cases.

use super::{edit, scroll};
use crate::editor::Editor;
use crate::viewport::Viewport;
use core_events::KeyEvent;
use core_state::{Mode, PendingOperator};
use tracing::trace;

pub(super) fn handle_pending(
    editor: &mut Editor,
    key: KeyEvent,
    op: PendingOperator,
    viewport: Viewport,
) {
    editor.mode = Mode::Normal;
    match op {
        PendingOperator::Delete if key.is_char('d') => edit::delete_line(editor),
        PendingOperator::Scroll if key.is_char('z') => scroll::center(editor, viewport),
        PendingOperator::Scroll if key.is_char('t') => scroll::top(editor),
        PendingOperator::Scroll if key.is_char('b') => scroll::bottom(editor, viewport),
        _ => trace!(target: "actions.dispatch", ?op, %key, "operator_cancelled"),
    }
}
