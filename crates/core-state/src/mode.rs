//! Editing mode state machine states.
//!
//! The transient Normal sub-states carry their data in the variant itself:
//! the repeat count lives in `NormalWithCount`, the awaited second key of an
//! operator in `NormalPending`. Dispatch matches exhaustively on this enum.

use std::fmt;

/// Operator waiting for its second key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingOperator {
    /// `d` pressed, awaiting `d`.
    Delete,
    /// `z` pressed, awaiting `z`, `t` or `b`.
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Normal command/navigation mode.
    #[default]
    Normal,
    /// Accumulating a decimal repeat count.
    NormalWithCount { count: usize },
    NormalPending(PendingOperator),
    /// Insert text mode.
    Insert,
    /// Single-character replace; returns to Normal after one key.
    Replace,
    /// Held-leader command namespace.
    Leader,
}

impl Mode {
    /// Single-character tag shown in the status line.
    pub fn tag(&self) -> &'static str {
        match self {
            Mode::Normal => "N",
            Mode::NormalWithCount { .. } => "0",
            Mode::NormalPending(PendingOperator::Delete) => "D",
            Mode::NormalPending(PendingOperator::Scroll) => "Z",
            Mode::Insert => "I",
            Mode::Replace => "R",
            Mode::Leader => " ",
        }
    }

    /// Current repeat-count accumulator; zero outside `NormalWithCount`.
    pub fn accumulator(&self) -> usize {
        match self {
            Mode::NormalWithCount { count } => *count,
            _ => 0,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
