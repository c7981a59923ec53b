//! Editor state building blocks: undo history, mode, clipboard register.
//!
//! History:
//! - The live document is the top entry of `History`; there is no separate
//!   buffer field. Every processed key takes a speculative `checkpoint` and
//!   `commit` folds it away unless a mutating primitive reported a change.
//! - Undo pops the previous snapshot (text and cursor) onto a redo stack.
//!   Any committed edit clears redo.
//!
//! Clipboard:
//! - A single unnamed register overwritten by `x` and `dd`. Text ending in a
//!   newline is linewise and pastes as whole lines.
//!
//! Telemetry: history emits trace events under target `state.history`.

pub mod history;
pub mod mode;

pub use history::{Committed, HISTORY_LIMIT, History, Rewind, Snapshot};
pub use mode::{Mode, PendingOperator};

/// The single clipboard register.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Clipboard {
    text: Vec<u8>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the register contents.
    pub fn set(&mut self, text: impl Into<Vec<u8>>) {
        self.text = text.into();
    }

    pub fn contents(&self) -> &[u8] {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whole-line payload (from `dd`).
    pub fn is_linewise(&self) -> bool {
        self.text.last() == Some(&b'\n')
    }
}
