//! Glyph painter: turns the projected glyph list into crossterm commands.
//!
//! Every frame clears the screen and redraws all glyphs; the terminal cursor
//! is parked on the cursor glyph's cell with a shape matching the mode.

use anyhow::Result;
use core_config::{Palette, Rgb};
use core_render::{ColorRole, CursorShape, Glyph, GlyphId};
use crossterm::{
    cursor::{Hide, MoveTo, SetCursorStyle, Show},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

const TAB_MARK: char = '→';
const END_OF_LINE_MARK: char = '¬';

fn color(palette: &Palette, role: ColorRole) -> Color {
    let Rgb { r, g, b } = match role {
        ColorRole::Status => palette.status,
        ColorRole::Notification => palette.notification,
        ColorRole::LineNumber => palette.line_number,
        ColorRole::CurrentLineNumber => palette.current_line_number,
        ColorRole::Text => palette.text,
        ColorRole::Whitespace => palette.whitespace,
        ColorRole::Cursor => palette.cursor,
    };
    Color::Rgb { r, g, b }
}

fn cursor_style(shape: CursorShape) -> SetCursorStyle {
    match shape {
        CursorShape::Block => SetCursorStyle::SteadyBlock,
        CursorShape::Bar => SetCursorStyle::SteadyBar,
        CursorShape::Underline => SetCursorStyle::SteadyUnderScore,
    }
}

/// Character drawn for a non-cursor glyph. Bytes outside printable ASCII
/// show as `?`.
fn glyph_char(id: GlyphId) -> Option<char> {
    match id {
        GlyphId::Char(b) if b.is_ascii_graphic() => Some(char::from(b)),
        GlyphId::Char(_) => Some('?'),
        GlyphId::Tab => Some(TAB_MARK),
        GlyphId::EndOfLine => Some(END_OF_LINE_MARK),
        GlyphId::Cursor(_) => None,
    }
}

pub(crate) fn paint(out: &mut impl Write, glyphs: &[Glyph], palette: &Palette) -> Result<()> {
    queue!(out, Hide, Clear(ClearType::All))?;
    let mut cursor = None;
    for glyph in glyphs {
        if let GlyphId::Cursor(shape) = glyph.id {
            cursor = Some((shape, glyph.col, glyph.row));
            continue;
        }
        if let Some(c) = glyph_char(glyph.id) {
            queue!(
                out,
                MoveTo(glyph.col, glyph.row),
                SetForegroundColor(color(palette, glyph.color)),
                Print(c)
            )?;
        }
    }
    queue!(out, ResetColor)?;
    if let Some((shape, col, row)) = cursor {
        queue!(out, MoveTo(col, row), cursor_style(shape), Show)?;
    }
    out.flush()?;
    Ok(())
}
