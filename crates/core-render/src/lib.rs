//! Glyph projection and status line composition.
//!
//! This crate stops at an ordered glyph list: it knows nothing about fonts,
//! terminals or pixels. Hosts map `GlyphId` to whatever their backend draws
//! and `ColorRole` through a configured palette.
//!
//! Exposed Components:
//! - `cull`: pure projection of document + cursor + viewport onto glyphs.
//! - `status`: builds the status line string (mode tag, file, size, position, timings).
//! - `timing`: host-measured frame durations carried into the status line.

pub mod cull;
pub mod status;
pub mod timing;

pub use cull::{
    ColorRole, CullRequest, CursorShape, GUTTER_WIDTH, Glyph, GlyphId, NOTIFICATION_ROW,
    STATUS_ROW, TEXT_ROW_OFFSET, cull,
};
pub use status::{StatusContext, StatusSegment, build_status, compose_status, format_status};
pub use timing::FrameTimings;
