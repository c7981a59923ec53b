//! Viewport arithmetic.
//!
//! The viewport is the `cols x rows` cell grid handed to `process`. Its first
//! two rows belong to the status and notification bars, the rest shows
//! document lines starting at `begin_row`.
//!
//! `row_count` is the index of the last text row relative to `begin_row`, so
//! the cursor line stays visible whenever
//! `cursor_row - row_count <= begin_row <= cursor_row`.

use core_render::TEXT_ROW_OFFSET;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Screen rows available for document text.
    pub fn text_rows(&self) -> usize {
        usize::from(self.rows.saturating_sub(TEXT_ROW_OFFSET))
    }

    pub fn row_count(&self) -> usize {
        self.text_rows().saturating_sub(1)
    }

    /// Lines travelled by a half-page scroll (at least one).
    pub fn half_page(&self) -> usize {
        (self.text_rows() / 2).max(1)
    }

    /// Keep `begin_row` within `[cursor_row - row_count, cursor_row]`.
    pub fn clamp_begin_row(&self, begin_row: usize, cursor_row: usize) -> usize {
        let low = cursor_row.saturating_sub(self.row_count());
        let clamped = begin_row.clamp(low, cursor_row);
        if clamped != begin_row {
            trace!(target: "actions.viewport", begin_row, clamped, cursor_row, "begin_row_clamped");
        }
        clamped
    }
}
