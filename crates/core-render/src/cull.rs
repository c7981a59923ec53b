//! Glyph projection.
//!
//! `cull` turns the document, cursor, viewport and status strings into an
//! ordered list of positioned glyphs for an external renderer. It is a pure
//! function: calling it twice with the same request yields the same list, so
//! hosts may call it speculatively for measurement.
//!
//! Screen layout:
//! * row 0: status line
//! * row 1: notification line
//! * rows >= 2: document lines starting at `begin_row`, each prefixed by a
//!   4-digit right-aligned gutter and one blank column. The cursor's own line
//!   shows its absolute 1-based number, every other line its distance from the
//!   cursor line. Lines wider than the viewport continue on the next row with
//!   an empty gutter.
//!
//! Spaces advance a column without emitting a glyph. The cursor glyph is
//! emitted immediately before the glyph occupying the same cell.

use core_state::Mode;
use core_text::span;
use tracing::trace;

pub const STATUS_ROW: u16 = 0;
pub const NOTIFICATION_ROW: u16 = 1;
/// First screen row used for document text.
pub const TEXT_ROW_OFFSET: u16 = 2;
pub const GUTTER_DIGITS: usize = 4;
/// Gutter digits plus the separating blank column.
pub const GUTTER_WIDTH: u16 = GUTTER_DIGITS as u16 + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorShape {
    Block,
    /// Thin vertical bar (Insert).
    Bar,
    Underline,
}

impl CursorShape {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Insert => CursorShape::Bar,
            Mode::Replace => CursorShape::Underline,
            Mode::Normal
            | Mode::NormalWithCount { .. }
            | Mode::NormalPending(_)
            | Mode::Leader => CursorShape::Block,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphId {
    /// A raw document or status byte.
    Char(u8),
    /// A tab byte; occupies `tab_width` columns.
    Tab,
    /// Marker drawn where a newline byte sits.
    EndOfLine,
    Cursor(CursorShape),
}

/// Semantic color; the host resolves it through its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Status,
    Notification,
    LineNumber,
    CurrentLineNumber,
    Text,
    Whitespace,
    Cursor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub id: GlyphId,
    pub color: ColorRole,
    pub row: u16,
    pub col: u16,
}

/// Everything `cull` reads.
#[derive(Debug, Clone, Copy)]
pub struct CullRequest<'a> {
    pub text: &'a [u8],
    pub cursor: usize,
    /// Index of the first document line shown.
    pub begin_row: usize,
    pub cols: u16,
    pub rows: u16,
    pub mode: Mode,
    pub status: &'a str,
    pub notification: &'a str,
    pub tab_width: u16,
}

/// Project the request onto an ordered glyph list.
pub fn cull(req: &CullRequest<'_>) -> Vec<Glyph> {
    let mut out = Vec::new();
    if req.cols == 0 || req.rows == 0 {
        return out;
    }
    push_line_text(&mut out, req.status, STATUS_ROW, req.cols, ColorRole::Status);
    if req.rows > NOTIFICATION_ROW {
        push_line_text(
            &mut out,
            req.notification,
            NOTIFICATION_ROW,
            req.cols,
            ColorRole::Notification,
        );
    }
    if req.text.is_empty() || req.rows <= TEXT_ROW_OFFSET {
        return out;
    }

    let text = req.text;
    let cursor = req.cursor.min(text.len() - 1);
    let cursor_line = span::line_index(text, cursor);
    let Some(mut offset) = span::line_start(text, req.begin_row) else {
        return out;
    };
    let shape = CursorShape::for_mode(req.mode);
    let tab_width = req.tab_width.max(1);
    let cols = req.cols;
    let mut line = req.begin_row;
    let mut row = TEXT_ROW_OFFSET;

    'lines: while row < req.rows && offset < text.len() {
        push_gutter(&mut out, line, cursor_line, row, cols);
        let mut col = GUTTER_WIDTH;
        loop {
            let Some(&b) = text.get(offset) else {
                break 'lines;
            };
            if cols <= GUTTER_WIDTH {
                // No room for text: skip to the next line.
                offset = text[offset..]
                    .iter()
                    .position(|&c| c == b'\n')
                    .map_or(text.len(), |i| offset + i + 1);
                break;
            }
            if col >= cols {
                row += 1;
                col = GUTTER_WIDTH;
                if row >= req.rows {
                    break 'lines;
                }
            }
            if offset == cursor {
                out.push(Glyph {
                    id: GlyphId::Cursor(shape),
                    color: ColorRole::Cursor,
                    row,
                    col,
                });
            }
            let (glyph, advance) = match b {
                b'\n' => (Some((GlyphId::EndOfLine, ColorRole::Whitespace)), 1),
                b'\t' => (Some((GlyphId::Tab, ColorRole::Whitespace)), tab_width),
                b' ' => (None, 1),
                other => (Some((GlyphId::Char(other), ColorRole::Text)), 1),
            };
            if let Some((id, color)) = glyph {
                out.push(Glyph { id, color, row, col });
            }
            col = col.saturating_add(advance);
            offset += 1;
            if b == b'\n' {
                break;
            }
        }
        row += 1;
        line += 1;
    }

    trace!(target: "render.cull", glyphs = out.len(), begin_row = req.begin_row, "cull");
    out
}

/// Number shown in the gutter for `line`.
pub fn gutter_number(line: usize, cursor_line: usize) -> usize {
    if line == cursor_line {
        line + 1
    } else {
        line.abs_diff(cursor_line)
    }
}

fn push_gutter(out: &mut Vec<Glyph>, line: usize, cursor_line: usize, row: u16, cols: u16) {
    let color = if line == cursor_line {
        ColorRole::CurrentLineNumber
    } else {
        ColorRole::LineNumber
    };
    let label = format!("{:>width$}", gutter_number(line, cursor_line), width = GUTTER_DIGITS);
    // Keep the low-order digits when a number overflows the gutter.
    let digits = &label.as_bytes()[label.len() - GUTTER_DIGITS..];
    for (col, &b) in (0u16..).zip(digits) {
        if col >= cols {
            break;
        }
        if b != b' ' {
            out.push(Glyph {
                id: GlyphId::Char(b),
                color,
                row,
                col,
            });
        }
    }
}

fn push_line_text(out: &mut Vec<Glyph>, s: &str, row: u16, cols: u16, color: ColorRole) {
    for (col, &b) in (0u16..).zip(s.as_bytes()) {
        if col >= cols {
            break;
        }
        if b != b' ' {
            out.push(Glyph {
                id: GlyphId::Char(b),
                color,
                row,
                col,
            });
        }
    }
}
