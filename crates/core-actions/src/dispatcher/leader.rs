//! Leader mode: entered by pressing space in Normal, left by releasing it.
//!
//! Commands run while the leader key is held, so several may be issued in a
//! row (e.g. scrolling repeatedly with `i`).

use super::scroll;
use crate::editor::Editor;
use crate::io_ops::IoRequest;
use crate::viewport::Viewport;
use core_events::KeyEvent;
use core_state::Mode;
use tracing::debug;

pub(super) fn handle_leader(editor: &mut Editor, key: KeyEvent, viewport: Viewport) {
    if key.released {
        if key.is_char(' ') {
            editor.mode = Mode::Normal;
        }
        return;
    }
    if key.is_char(' ') {
        // auto-repeat of the held leader key
        return;
    }
    if key.is_char('q') {
        debug!(target: "actions.dispatch", "quit_requested");
        editor.request_quit();
    } else if key.is_char('e') {
        editor.request_io(IoRequest::Load);
    } else if key.is_char('s') {
        editor.request_io(IoRequest::Save);
    } else if key.is_char('o') {
        scroll::half_page_up(editor, viewport);
    } else if key.is_char('i') {
        scroll::half_page_down(editor, viewport);
    } else {
        editor.mode = Mode::Normal;
    }
}
