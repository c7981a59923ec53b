//! Newline-terminated byte document plus line addressing and cursor motions.
//!
//! The document is a flat byte vector rather than a rope: the editing core
//! targets small files and snapshots the whole text on every key, so a
//! contiguous buffer keeps both cloning and offset arithmetic trivial.
//!
//! Invariants (hold after every public call):
//! * the byte vector is never empty;
//! * the final byte is always `'\n'`.
//!
//! Cursor offsets handed out by this crate always satisfy
//! `offset <= len() - 1`, i.e. they may rest on the trailing newline but never
//! past it.

use std::fmt;
use std::ops::Range;

pub mod motion;
pub mod span;

pub use span::LineSpan;

/// Returns true for the bytes word motions treat as separators.
pub fn is_blank(b: u8) -> bool {
    b.is_ascii_whitespace()
}

/// A text document stored as raw bytes, always terminated by a newline.
#[derive(Clone, PartialEq, Eq)]
pub struct Document {
    bytes: Vec<u8>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::len_without_is_empty)] // never empty by construction
impl Document {
    /// An empty document: a single newline.
    pub fn new() -> Self {
        Self { bytes: vec![b'\n'] }
    }

    /// Build a document from arbitrary bytes, appending the trailing newline if missing.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let mut doc = Self {
            bytes: bytes.into(),
        };
        doc.ensure_trailing_newline();
        doc
    }

    /// Convenience constructor mirroring `from_bytes` for string literals.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total byte length including the trailing newline.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Largest valid cursor offset (the trailing newline).
    pub fn last_offset(&self) -> usize {
        self.bytes.len().saturating_sub(1)
    }

    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Clamp an arbitrary offset into the valid cursor range.
    pub fn clamp(&self, offset: usize) -> usize {
        offset.min(self.last_offset())
    }

    /// Re-establish the trailing newline invariant. Returns true when a byte was added.
    pub fn ensure_trailing_newline(&mut self) -> bool {
        if self.bytes.last() == Some(&b'\n') {
            return false;
        }
        self.bytes.push(b'\n');
        true
    }

    /// Insert `bytes` at `offset` (clamped to the document length).
    pub fn insert(&mut self, offset: usize, bytes: &[u8]) {
        let at = offset.min(self.bytes.len());
        self.bytes.splice(at..at, bytes.iter().copied());
        self.ensure_trailing_newline();
    }

    /// Remove the byte range (clamped) and return the removed bytes.
    pub fn erase(&mut self, range: Range<usize>) -> Vec<u8> {
        let end = range.end.min(self.bytes.len());
        let start = range.start.min(end);
        let removed: Vec<u8> = self.bytes.drain(start..end).collect();
        self.ensure_trailing_newline();
        removed
    }

    /// Zero-based line index of the line containing `offset`.
    pub fn line_index(&self, offset: usize) -> usize {
        span::line_index(&self.bytes, offset)
    }

    /// Number of newline-terminated lines.
    pub fn line_count(&self) -> usize {
        span::line_count(&self.bytes)
    }

    /// Span of the line containing `offset`.
    pub fn span(&self, offset: usize) -> LineSpan {
        LineSpan::locate(&self.bytes, offset)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Document")
            .field(&String::from_utf8_lossy(&self.bytes))
            .finish()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}
