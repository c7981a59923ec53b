//! Status line composition.
//!
//! Format:
//! `[<tag>] <name>[*] <size>B <line>:<col> p<us>us c<us>us r<us>us`
//! * `<tag>` is the single-character mode tag (`N`, `0`, `D`, `Z`, `I`, `R`,
//!   or a blank for Leader).
//! * `<name>` is the base file name or `[No Name]`; `*` marks unsaved changes.
//! * `<line>:<col>` are 1-based.
//! * The three timing figures are supplied by the host; this crate never measures time.
//!
//! Two stages: `compose_status` produces ordered `StatusSegment`s and
//! `format_status` renders them, so hosts can drop or reorder segments
//! (e.g. hide timings) without re-implementing the formatting.

use crate::timing::FrameTimings;
use core_state::Mode;
use std::borrow::Cow;
use std::fmt::Write as _;
use std::path::Path;

/// Simple DTO describing what we need to render a status line.
pub struct StatusContext<'a> {
    pub mode: Mode,
    pub file_name: Option<&'a Path>,
    /// Document differs from the last load/save.
    pub dirty: bool,
    /// Document size in bytes.
    pub size: usize,
    pub line: usize, // 0-based
    pub col: usize,  // 0-based byte column
    pub timings: FrameTimings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    Mode(&'static str),
    /// File name including the optional dirty marker.
    FileName(Cow<'a, str>),
    Size(usize),
    Position { line_1: usize, col_1: usize },
    Timings(FrameTimings),
}

/// Produce ordered segments representing the status line.
pub fn compose_status<'a>(ctx: &'a StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let name: Cow<'a, str> = ctx
        .file_name
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy())
        .unwrap_or(Cow::Borrowed("[No Name]"));
    let name = if ctx.dirty {
        Cow::Owned(format!("{name}*"))
    } else {
        name
    };
    vec![
        StatusSegment::Mode(ctx.mode.tag()),
        StatusSegment::FileName(name),
        StatusSegment::Size(ctx.size),
        StatusSegment::Position {
            line_1: ctx.line + 1,
            col_1: ctx.col + 1,
        },
        StatusSegment::Timings(ctx.timings),
    ]
}

/// Render ordered status segments into a single space-separated string.
pub fn format_status(segments: &[StatusSegment<'_>]) -> String {
    let mut s = String::with_capacity(64);
    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        match seg {
            StatusSegment::Mode(tag) => {
                let _ = write!(s, "[{tag}]");
            }
            StatusSegment::FileName(name) => s.push_str(name),
            StatusSegment::Size(bytes) => {
                let _ = write!(s, "{bytes}B");
            }
            StatusSegment::Position { line_1, col_1 } => {
                let _ = write!(s, "{line_1}:{col_1}");
            }
            StatusSegment::Timings(t) => {
                let _ = write!(
                    s,
                    "p{}us c{}us r{}us",
                    t.process.as_micros(),
                    t.cull.as_micros(),
                    t.redraw.as_micros()
                );
            }
        }
    }
    s
}

pub fn build_status(ctx: &StatusContext<'_>) -> String {
    format_status(&compose_status(ctx))
}
