//! Mode-keyed key dispatch.
//!
//! Each `Mode` variant owns one handler module; `dispatch` matches the mode
//! exhaustively so every mode x key combination ends in an explicit arm.
//! Unrecognized keys fall through to a no-op (or a cancel back to Normal in
//! the transient sub-modes).
//!
//! Sub-modules:
//! * `normal`  - Normal mode command table
//! * `count`   - numeric prefix accumulation (`3j`, `12g`)
//! * `pending` - second key of `d` / `z` operators
//! * `insert`  - Insert and single-shot Replace
//! * `leader`  - held-leader namespace (quit, load, save, half-page scroll)
//! * `motion`  - cursor movement semantics
//! * `edit`    - text mutation commands (`x`, `dd`, paste, open line)
//! * `scroll`  - screen-relative cursor moves and viewport placement
//!
//! Key release events only matter to Leader mode (the leader key's release
//! ends it); every other mode ignores them.

use crate::editor::Editor;
use crate::viewport::Viewport;
use core_events::KeyEvent;
use core_state::Mode;
use tracing::trace;

mod count;
mod edit;
mod insert;
mod leader;
mod motion;
mod normal;
mod pending;
mod scroll;

pub(crate) fn dispatch(editor: &mut Editor, key: KeyEvent, viewport: Viewport) {
    trace!(target: "actions.dispatch", mode = %editor.mode, %key, "dispatch");
    match editor.mode {
        Mode::Leader => leader::handle_leader(editor, key, viewport),
        _ if key.released => {}
        Mode::Normal => normal::handle_normal(editor, key, viewport),
        Mode::NormalWithCount { count } => count::handle_count(editor, key, count),
        Mode::NormalPending(op) => pending::handle_pending(editor, key, op, viewport),
        Mode::Insert => insert::handle_insert(editor, key),
        Mode::Replace => insert::handle_replace(editor, key),
    }
}
