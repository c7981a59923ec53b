//! Editing engine: key dispatch over the modal state machine.
//!
//! `Editor` owns the history of snapshots, the current `Mode`, the clipboard
//! and the first visible line. Hosts feed it one `KeyEvent` at a time through
//! `Editor::process`, run any requested load/save through a `Storage`, and
//! draw the result with `core_render::cull`.
//!
//! Layout:
//! * `editor`     - engine state and the per-key checkpoint/commit lifecycle
//! * `dispatcher` - per-mode key handlers and the commands they run
//! * `viewport`   - `cols x rows` arithmetic and `begin_row` clamping
//! * `io_ops`     - `Storage` boundary and its filesystem implementation

mod dispatcher;
pub mod editor;
pub mod io_ops;
pub mod viewport;

pub use editor::Editor;
pub use io_ops::{FsStorage, IoRequest, Storage, StorageError};
pub use viewport::Viewport;
