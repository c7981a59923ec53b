//! Frame timing figures shown in the status line.
//!
//! The host measures; the core only carries and formats the numbers.
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTimings {
    /// Time spent in `Editor::process` for the last key.
    pub process: Duration,
    /// Time spent in `cull` for the last frame.
    pub cull: Duration,
    /// Time the host spent painting the last frame.
    pub redraw: Duration,
}
