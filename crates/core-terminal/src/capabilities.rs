//! Terminal capability probing.
//!
//! Detection runs once at startup. The only capability the editor cares about
//! is whether key release events can be reported (kitty keyboard protocol):
//! Leader mode ends on the release of the leader key, so hosts on terminals
//! without it have to synthesize that release themselves.

use crossterm::terminal::supports_keyboard_enhancement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct TerminalCapabilities {
    pub reports_key_release: bool,
}

impl TerminalCapabilities {
    /// Probe the attached terminal. Must run after raw mode is enabled;
    /// probe failures count as "unsupported".
    pub fn detect() -> Self {
        Self {
            reports_key_release: supports_keyboard_enhancement().unwrap_or(false),
        }
    }

    /// Capabilities of a terminal that reports presses only.
    pub fn press_only() -> Self {
        Self::default()
    }
}
