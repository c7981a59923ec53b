use core_text::Document;
use tracing::trace;

/// Default maximum number of snapshots retained in undo history.
pub const HISTORY_LIMIT: usize = 100;

/// One `(text, cursor)` pair of undo history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub text: Document,
    pub cursor: usize,
}

impl Snapshot {
    pub fn new(text: Document, cursor: usize) -> Self {
        let cursor = text.clamp(cursor);
        Self { text, cursor }
    }

    /// Re-apply the trailing newline and cursor bounds.
    pub fn normalize(&mut self) {
        self.text.ensure_trailing_newline();
        self.cursor = self.text.clamp(self.cursor);
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(Document::new(), 0)
    }
}

/// History travel requested by the key that was just processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rewind {
    Undo,
    Redo,
}

/// What `History::commit` did with the checkpoint taken for the last key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Committed {
    /// The key mutated the text; the pre-key snapshot stays as an undo entry.
    Edit,
    /// Nothing changed; the checkpoint was folded back into the live entry.
    Unchanged,
    Undone,
    Redone,
    /// Undo requested with no older snapshot left.
    AtOldest,
    /// Redo requested with nothing undone.
    AtNewest,
}

/// Bounded stack of snapshots, newest last. The newest entry is the live,
/// mutable document; everything below it is undo history.
///
/// Every processed key calls `checkpoint` first, which speculatively pushes a
/// copy of the live entry. `commit` then either keeps that copy (a real edit
/// happened) or folds it away, so keys that never mutate leave the depth
/// unchanged while cursor motion made during the key survives.
#[derive(Clone, Debug)]
pub struct History {
    past: Vec<Snapshot>,
    live: Snapshot,
    redo: Vec<Snapshot>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}

impl History {
    pub fn new(initial: Snapshot) -> Self {
        Self::with_limit(initial, HISTORY_LIMIT)
    }

    pub fn with_limit(mut initial: Snapshot, limit: usize) -> Self {
        initial.normalize();
        Self {
            past: Vec::new(),
            live: initial,
            redo: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Number of entries including the live one (always >= 1).
    pub fn depth(&self) -> usize {
        self.past.len() + 1
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn top(&self) -> &Snapshot {
        &self.live
    }

    pub fn top_mut(&mut self) -> &mut Snapshot {
        &mut self.live
    }

    /// Replace all history with a single entry (used after loading a file).
    pub fn reset(&mut self, mut snapshot: Snapshot) {
        snapshot.normalize();
        self.past.clear();
        self.redo.clear();
        self.live = snapshot;
        trace!(target: "state.history", "history_reset");
    }

    /// Speculatively duplicate the live entry before a key is interpreted.
    pub fn checkpoint(&mut self) {
        if self.depth() > self.limit && !self.past.is_empty() {
            let _ = self.past.remove(0);
            trace!(target: "state.history", limit = self.limit, "history_trimmed");
        }
        self.past.push(self.live.clone());
    }

    /// Resolve the checkpoint taken for the last key.
    pub fn commit(&mut self, modified: bool, rewind: Option<Rewind>) -> Committed {
        let mut result = if modified {
            self.redo.clear();
            Committed::Edit
        } else {
            if !self.past.is_empty() {
                // The live entry carries the key's cursor motion; the copy below it is stale.
                let _ = self.past.pop();
            }
            Committed::Unchanged
        };

        match rewind {
            Some(Rewind::Undo) => {
                result = match self.past.pop() {
                    Some(prev) => {
                        let current = std::mem::replace(&mut self.live, prev);
                        self.redo.push(current);
                        Committed::Undone
                    }
                    None => Committed::AtOldest,
                };
            }
            Some(Rewind::Redo) => {
                result = match self.redo.pop() {
                    Some(next) => {
                        let current = std::mem::replace(&mut self.live, next);
                        self.past.push(current);
                        Committed::Redone
                    }
                    None => Committed::AtNewest,
                };
            }
            None => {}
        }

        self.live.normalize();
        trace!(
            target: "state.history",
            depth = self.depth(),
            redo_depth = self.redo.len(),
            ?result,
            "commit"
        );
        result
    }
}
