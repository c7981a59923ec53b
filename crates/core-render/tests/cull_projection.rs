//! Glyph projection scenarios and properties.

use core_render::{
    ColorRole, CullRequest, CursorShape, GUTTER_WIDTH, Glyph, GlyphId, NOTIFICATION_ROW,
    STATUS_ROW, cull,
};
use core_state::Mode;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn request<'a>(text: &'a [u8], cursor: usize) -> CullRequest<'a> {
    CullRequest {
        text,
        cursor,
        begin_row: 0,
        cols: 20,
        rows: 8,
        mode: Mode::Normal,
        status: "",
        notification: "",
        tab_width: 4,
    }
}

fn row_glyphs(glyphs: &[Glyph], row: u16) -> Vec<(GlyphId, u16)> {
    glyphs
        .iter()
        .filter(|g| g.row == row)
        .map(|g| (g.id, g.col))
        .collect()
}

fn gutter_text(glyphs: &[Glyph], row: u16) -> String {
    glyphs
        .iter()
        .filter(|g| g.row == row && g.col < GUTTER_WIDTH)
        .filter_map(|g| match g.id {
            GlyphId::Char(b) => Some(b as char),
            _ => None,
        })
        .collect()
}

#[test]
fn status_and_notification_rows() {
    let mut r = request(b"\n", 0);
    r.status = "[N] x";
    r.notification = "hi";
    let glyphs = cull(&r);
    assert_eq!(
        row_glyphs(&glyphs, STATUS_ROW),
        vec![
            (GlyphId::Char(b'['), 0),
            (GlyphId::Char(b'N'), 1),
            (GlyphId::Char(b']'), 2),
            (GlyphId::Char(b'x'), 4),
        ]
    );
    assert_eq!(
        row_glyphs(&glyphs, NOTIFICATION_ROW),
        vec![(GlyphId::Char(b'h'), 0), (GlyphId::Char(b'i'), 1)]
    );
    assert!(glyphs.iter().filter(|g| g.row == STATUS_ROW).all(|g| g.color == ColorRole::Status));
}

#[test]
fn line_text_with_cursor_tab_and_newline() {
    let glyphs = cull(&request(b"a\tb c\n", 0));
    let g = GUTTER_WIDTH;
    assert_eq!(
        row_glyphs(&glyphs, 2),
        vec![
            (GlyphId::Char(b'1'), 3),
            (GlyphId::Cursor(CursorShape::Block), g),
            (GlyphId::Char(b'a'), g),
            (GlyphId::Tab, g + 1),
            (GlyphId::Char(b'b'), g + 5),
            (GlyphId::Char(b'c'), g + 7),
            (GlyphId::EndOfLine, g + 8),
        ]
    );
}

#[test]
fn relative_gutter_numbers() {
    let text = b"a\nb\nc\nd\n";
    let glyphs = cull(&request(text, 4)); // cursor on line 2
    assert_eq!(gutter_text(&glyphs, 2), "2");
    assert_eq!(gutter_text(&glyphs, 3), "1");
    assert_eq!(gutter_text(&glyphs, 4), "3");
    assert_eq!(gutter_text(&glyphs, 5), "1");
    let current: Vec<_> = glyphs
        .iter()
        .filter(|g| g.color == ColorRole::CurrentLineNumber)
        .map(|g| g.row)
        .collect();
    assert_eq!(current, vec![4]);
}

#[test]
fn begin_row_skips_leading_lines() {
    let mut r = request(b"a\nb\nc\n", 0);
    r.begin_row = 1;
    let glyphs = cull(&r);
    assert!(row_glyphs(&glyphs, 2).contains(&(GlyphId::Char(b'b'), GUTTER_WIDTH)));
    assert!(row_glyphs(&glyphs, 3).contains(&(GlyphId::Char(b'c'), GUTTER_WIDTH)));
    assert!(row_glyphs(&glyphs, 4).is_empty());
}

#[test]
fn long_line_wraps_without_number() {
    let mut r = request(b"abcdefgh\n", 0);
    r.cols = GUTTER_WIDTH + 4;
    let glyphs = cull(&r);
    let g = GUTTER_WIDTH;
    assert_eq!(gutter_text(&glyphs, 3), "", "continuation row has no number");
    assert_eq!(
        row_glyphs(&glyphs, 3),
        vec![
            (GlyphId::Char(b'e'), g),
            (GlyphId::Char(b'f'), g + 1),
            (GlyphId::Char(b'g'), g + 2),
            (GlyphId::Char(b'h'), g + 3),
        ]
    );
    assert_eq!(row_glyphs(&glyphs, 4), vec![(GlyphId::EndOfLine, g)]);
}

#[test]
fn cursor_shape_per_mode() {
    for (mode, shape) in [
        (Mode::Insert, CursorShape::Bar),
        (Mode::Replace, CursorShape::Underline),
        (Mode::Leader, CursorShape::Block),
        (Mode::NormalWithCount { count: 2 }, CursorShape::Block),
    ] {
        let mut r = request(b"ab\n", 1);
        r.mode = mode;
        let cursors: Vec<_> = cull(&r)
            .into_iter()
            .filter(|g| matches!(g.id, GlyphId::Cursor(_)))
            .collect();
        assert_eq!(cursors.len(), 1);
        assert_eq!(cursors[0].id, GlyphId::Cursor(shape));
        assert_eq!(cursors[0].col, GUTTER_WIDTH + 1);
    }
}

#[test]
fn cursor_on_space_still_drawn() {
    let glyphs = cull(&request(b"a b\n", 1));
    assert_eq!(
        row_glyphs(&glyphs, 2)
            .into_iter()
            .filter(|(_, col)| *col == GUTTER_WIDTH + 1)
            .collect::<Vec<_>>(),
        vec![(GlyphId::Cursor(CursorShape::Block), GUTTER_WIDTH + 1)]
    );
}

#[test]
fn narrow_viewport_draws_only_gutter() {
    let mut r = request(b"abc\ndef\n", 0);
    r.cols = GUTTER_WIDTH;
    let glyphs = cull(&r);
    assert!(glyphs.iter().all(|g| g.col < GUTTER_WIDTH));
    assert_eq!(gutter_text(&glyphs, 3), "1");
}

proptest! {
    #[test]
    fn cull_is_idempotent_and_stays_in_viewport(
        text in "[a-c \t\n]{0,120}",
        cursor in 0usize..130,
        begin_row in 0usize..10,
        cols in 0u16..30,
        rows in 0u16..12,
        tab_width in 1u16..8,
    ) {
        let mut bytes = text.into_bytes();
        bytes.push(b'\n');
        let r = CullRequest {
            text: &bytes,
            cursor: cursor.min(bytes.len() - 1),
            begin_row,
            cols,
            rows,
            mode: Mode::Normal,
            status: "[N] status line",
            notification: "note",
            tab_width,
        };
        let first = cull(&r);
        let second = cull(&r);
        prop_assert_eq!(&first, &second);
        for g in &first {
            prop_assert!(g.row < rows && g.col < cols, "{:?} outside {}x{}", g, cols, rows);
        }
        let cursors = first.iter().filter(|g| matches!(g.id, GlyphId::Cursor(_))).count();
        prop_assert!(cursors <= 1);
    }
}
