//! Normalized key input consumed by the editing core.
//!
//! Hosts translate their native key events (terminal, windowing system) into
//! `KeyEvent` before calling into the engine. The core never sees platform key
//! codes and keeps no global key-state tables: whether a key went down or up
//! travels with the event itself in `released`.

use std::fmt;

/// Logical key representation. Printable keys arrive as `Char`; shifted
/// letters arrive already upper-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
    /// True for key-up events.
    pub released: bool,
}

impl KeyEvent {
    /// A key-down event without modifiers.
    pub fn press(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
            released: false,
        }
    }

    pub fn release(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
            released: true,
        }
    }

    /// Shorthand for a plain character press.
    pub fn char(c: char) -> Self {
        Self::press(KeyCode::Char(c))
    }

    pub fn with_mods(mut self, mods: KeyModifiers) -> Self {
        self.mods = mods;
        self
    }

    /// The printable ASCII byte carried by this event, if any.
    ///
    /// Control/alt chords are commands and never count as text.
    pub fn printable_byte(&self) -> Option<u8> {
        if self.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) {
            return None;
        }
        match self.code {
            KeyCode::Char(c) if c.is_ascii() && !c.is_ascii_control() => Some(c as u8),
            _ => None,
        }
    }

    /// True when this is the press of `c` with no command modifiers.
    pub fn is_char(&self, c: char) -> bool {
        !self.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT)
            && self.code == KeyCode::Char(c)
    }

    pub fn is_ctrl(&self, c: char) -> bool {
        self.mods.contains(KeyModifiers::CTRL) && self.code == KeyCode::Char(c)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)?;
        if self.released {
            f.write_str("(up)")?;
        }
        Ok(())
    }
}
