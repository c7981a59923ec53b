//! Cursor motion helpers.
//!
//! These operate purely on a `Document` + cursor offset pair and are free of
//! editor state. Column memory across vertical motion is not stored anywhere:
//! it is recomputed from the offset through `LineSpan::to_relative` on every
//! call, so a vertical move after an edit follows the edited column.
//!
//! Every helper leaves `pos` within `0..=doc.last_offset()`.

use crate::{Document, LineSpan, is_blank};

fn span_of(doc: &Document, pos: &mut usize) -> LineSpan {
    *pos = doc.clamp(*pos);
    doc.span(*pos)
}

/// Move left one byte, never crossing the line start.
pub fn left(doc: &Document, pos: &mut usize) {
    let span = span_of(doc, pos);
    if *pos > span.start {
        *pos -= 1;
    }
}

/// Move right one byte, never crossing the line's newline.
pub fn right(doc: &Document, pos: &mut usize) {
    let span = span_of(doc, pos);
    if *pos < span.end {
        *pos += 1;
    }
}

pub fn line_start(doc: &Document, pos: &mut usize) {
    *pos = span_of(doc, pos).start;
}

/// Move onto the line's newline byte.
pub fn line_end(doc: &Document, pos: &mut usize) {
    *pos = span_of(doc, pos).end;
}

/// Move to the first byte of the line that is not a space or tab.
pub fn first_non_blank(doc: &Document, pos: &mut usize) {
    let span = span_of(doc, pos);
    let bytes = doc.as_bytes();
    let mut p = span.start;
    while p < span.end && matches!(bytes[p], b' ' | b'\t') {
        p += 1;
    }
    *pos = p;
}

/// Skip the current run of non-blank bytes, then the following blanks.
pub fn word_forward(doc: &Document, pos: &mut usize) {
    let last = doc.last_offset();
    let bytes = doc.as_bytes();
    let mut p = doc.clamp(*pos);
    while p < last && !is_blank(bytes[p]) {
        p += 1;
    }
    while p < last && is_blank(bytes[p]) {
        p += 1;
    }
    *pos = p;
}

/// Step back over blanks, then to the start of the preceding run of non-blank bytes.
pub fn word_backward(doc: &Document, pos: &mut usize) {
    let bytes = doc.as_bytes();
    let mut p = doc.clamp(*pos);
    if p == 0 {
        *pos = 0;
        return;
    }
    p -= 1;
    while p > 0 && is_blank(bytes[p]) {
        p -= 1;
    }
    while p > 0 && !is_blank(bytes[p - 1]) {
        p -= 1;
    }
    *pos = p;
}

/// Move to the same column on the next line (clamped to its end). No-op on the last line.
pub fn line_down(doc: &Document, pos: &mut usize) {
    let span = span_of(doc, pos);
    if span.end >= doc.last_offset() {
        return;
    }
    let col = span.to_relative(*pos);
    *pos = doc.span(span.end + 1).to_absolute(col);
}

/// Move to the same column on the previous line (clamped to its end). No-op on the first line.
pub fn line_up(doc: &Document, pos: &mut usize) {
    let span = span_of(doc, pos);
    if span.start == 0 {
        return;
    }
    let col = span.to_relative(*pos);
    *pos = doc.span(span.start - 1).to_absolute(col);
}

/// Column-preserving jump to the first line.
pub fn buffer_start(doc: &Document, pos: &mut usize) {
    let col = span_of(doc, pos).to_relative(*pos);
    *pos = doc.span(0).to_absolute(col);
}

/// Column-preserving jump to the last line.
pub fn buffer_end(doc: &Document, pos: &mut usize) {
    let col = span_of(doc, pos).to_relative(*pos);
    *pos = doc.span(doc.last_offset()).to_absolute(col);
}

/// Apply a vertical motion up to `count` times, stopping early at a document edge.
/// Returns the number of lines actually travelled.
pub fn repeat_vertical(
    doc: &Document,
    pos: &mut usize,
    count: usize,
    motion: fn(&Document, &mut usize),
) -> usize {
    let mut moved = 0;
    for _ in 0..count {
        let before = doc.line_index(*pos);
        motion(doc, pos);
        if doc.line_index(*pos) == before {
            break;
        }
        moved += 1;
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_and_line_boundaries() {
        let doc = Document::from_str("abc\ndef\n");
        let mut pos = 5;
        left(&doc, &mut pos);
        left(&doc, &mut pos);
        assert_eq!(pos, 4, "left stops at line start");
        for _ in 0..10 {
            right(&doc, &mut pos);
        }
        assert_eq!(pos, 7, "right stops on the newline");
        line_start(&doc, &mut pos);
        assert_eq!(pos, 4);
        line_end(&doc, &mut pos);
        assert_eq!(pos, 7);
    }

    #[test]
    fn first_non_blank_skips_indent() {
        let doc = Document::from_str("a\n \t  x y\n");
        let mut pos = 8;
        first_non_blank(&doc, &mut pos);
        assert_eq!(pos, 6);
    }

    #[test]
    fn first_non_blank_on_blank_line_stops_at_newline() {
        let doc = Document::from_str("   \n");
        let mut pos = 0;
        first_non_blank(&doc, &mut pos);
        assert_eq!(pos, 3);
    }

    #[test]
    fn vertical_motion_keeps_column() {
        let doc = Document::from_str("line1\nline2\n");
        let mut pos = 4;
        line_down(&doc, &mut pos);
        assert_eq!(pos, 10);
        line_up(&doc, &mut pos);
        assert_eq!(pos, 4);
    }

    #[test]
    fn vertical_motion_clamps_to_shorter_line() {
        let doc = Document::from_str("longer\nab\nlonger\n");
        let mut pos = 5;
        line_down(&doc, &mut pos);
        assert_eq!(pos, 9, "clamped onto the newline of 'ab'");
        line_down(&doc, &mut pos);
        assert_eq!(pos, 12, "column 2 of the third line");
    }

    #[test]
    fn vertical_motion_at_edges_is_noop() {
        let doc = Document::from_str("a\nb\n");
        let mut pos = 0;
        line_up(&doc, &mut pos);
        assert_eq!(pos, 0);
        let mut pos = 2;
        line_down(&doc, &mut pos);
        assert_eq!(pos, 2);
    }

    #[test]
    fn word_forward_and_backward_basic() {
        let doc = Document::from_str("foo bar  baz\nqux\n");
        let mut pos = 0;
        word_forward(&doc, &mut pos);
        assert_eq!(pos, 4);
        word_forward(&doc, &mut pos);
        assert_eq!(pos, 9);
        word_forward(&doc, &mut pos);
        assert_eq!(pos, 13, "newline counts as whitespace");
        word_backward(&doc, &mut pos);
        assert_eq!(pos, 9);
        word_backward(&doc, &mut pos);
        assert_eq!(pos, 4);
        word_backward(&doc, &mut pos);
        assert_eq!(pos, 0);
        word_backward(&doc, &mut pos);
        assert_eq!(pos, 0);
    }

    #[test]
    fn word_forward_stops_at_last_offset() {
        let doc = Document::from_str("abc   \n");
        let mut pos = 0;
        word_forward(&doc, &mut pos);
        assert_eq!(pos, doc.last_offset());
    }

    #[test]
    fn buffer_jumps_preserve_column() {
        let doc = Document::from_str("abcdef\nxy\nlmnopq\n");
        let mut pos = 14; // 'p'
        buffer_start(&doc, &mut pos);
        assert_eq!(pos, 4);
        buffer_end(&doc, &mut pos);
        assert_eq!(pos, 14);
    }

    #[test]
    fn repeat_vertical_stops_at_end() {
        let doc = Document::from_str("a\nb\nc\n");
        let mut pos = 0;
        let moved = repeat_vertical(&doc, &mut pos, 10, line_down);
        assert_eq!(moved, 2);
        assert_eq!(pos, 4);
    }
}
