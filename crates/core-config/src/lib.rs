//! Configuration loading and parsing.
//!
//! Parses `tern.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [history]
//! limit = 100        # undo snapshots kept, min 1
//!
//! [view]
//! tab_width = 4      # columns a tab glyph advances, 1..=16
//!
//! [palette]
//! status = "#1d2021" # any subset of the roles below, as #rrggbb
//! ```
//!
//! Palette roles: `status`, `notification`, `line_number`,
//! `current_line_number`, `text`, `whitespace`, `cursor`.
//!
//! A missing file or a parse error falls back to defaults. Out-of-range values
//! are clamped by `Config::effective` with an `info!` event under target
//! `config`. Unknown fields are ignored.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_HISTORY_LIMIT: usize = 100;
pub const DEFAULT_TAB_WIDTH: u16 = 4;
pub const MAX_TAB_WIDTH: u16 = 16;

#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    #[serde(default = "HistoryConfig::default_limit")]
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
        }
    }
}

impl HistoryConfig {
    const fn default_limit() -> usize {
        DEFAULT_HISTORY_LIMIT
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    #[serde(default = "ViewConfig::default_tab_width")]
    pub tab_width: u16,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            tab_width: Self::default_tab_width(),
        }
    }
}

impl ViewConfig {
    const fn default_tab_width() -> u16 {
        DEFAULT_TAB_WIDTH
    }
}

/// Raw palette entries as written in the file. Absent roles use built-in colors.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct PaletteConfig {
    pub status: Option<String>,
    pub notification: Option<String>,
    pub line_number: Option<String>,
    pub current_line_number: Option<String>,
    pub text: Option<String>,
    pub whitespace: Option<String>,
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
}

/// Values after clamping, ready for the engine and renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effective {
    pub history_limit: usize,
    pub tab_width: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional).
    pub fn parse(s: &str) -> Result<Self, PaletteError> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PaletteError::InvalidHex(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| PaletteError::InvalidHex(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("invalid color `{0}`, expected #rrggbb")]
    InvalidHex(String),
}

/// Resolved colors for every glyph role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub status: Rgb,
    pub notification: Rgb,
    pub line_number: Rgb,
    pub current_line_number: Rgb,
    pub text: Rgb,
    pub whitespace: Rgb,
    pub cursor: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            status: Rgb::new(0xd5, 0xc4, 0xa1),
            notification: Rgb::new(0xfa, 0xbd, 0x2f),
            line_number: Rgb::new(0x66, 0x5c, 0x54),
            current_line_number: Rgb::new(0xfe, 0x80, 0x19),
            text: Rgb::new(0xeb, 0xdb, 0xb2),
            whitespace: Rgb::new(0x50, 0x49, 0x45),
            cursor: Rgb::new(0x83, 0xa5, 0x98),
        }
    }
}

/// Best-effort config path: local working directory first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("tern.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("tern").join("tern.toml");
    }
    PathBuf::from("tern.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Clamp raw values into their supported ranges.
    pub fn effective(&self) -> Effective {
        let raw_limit = self.file.history.limit;
        let history_limit = raw_limit.max(1);
        if history_limit != raw_limit {
            info!(
                target: "config",
                raw = raw_limit,
                clamped = history_limit,
                "history_limit_clamped"
            );
        }
        let raw_tab = self.file.view.tab_width;
        let tab_width = raw_tab.clamp(1, MAX_TAB_WIDTH);
        if tab_width != raw_tab {
            info!(target: "config", raw = raw_tab, clamped = tab_width, "tab_width_clamped");
        }
        Effective {
            history_limit,
            tab_width,
        }
    }

    /// Resolve palette entries; invalid colors keep the built-in value.
    pub fn palette(&self) -> Palette {
        let mut palette = Palette::default();
        let raw = &self.file.palette;
        let slots: [(&str, &Option<String>, &mut Rgb); 7] = [
            ("status", &raw.status, &mut palette.status),
            ("notification", &raw.notification, &mut palette.notification),
            ("line_number", &raw.line_number, &mut palette.line_number),
            (
                "current_line_number",
                &raw.current_line_number,
                &mut palette.current_line_number,
            ),
            ("text", &raw.text, &mut palette.text),
            ("whitespace", &raw.whitespace, &mut palette.whitespace),
            ("cursor", &raw.cursor, &mut palette.cursor),
        ];
        for (role, value, slot) in slots {
            let Some(value) = value else { continue };
            match Rgb::parse(value) {
                Ok(rgb) => *slot = rgb,
                Err(e) => warn!(target: "config", role, error = %e, "palette_color_ignored"),
            }
        }
        palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl<'a> Write for LockedWriter<'a> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    fn load_str(content: &str) -> Config {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), content).unwrap();
        load_from(Some(tmp.path().to_path_buf())).unwrap()
    }

    #[test]
    fn default_config_when_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_hopefully__.toml"))).unwrap();
        assert!(cfg.raw.is_none());
        assert_eq!(
            cfg.effective(),
            Effective {
                history_limit: DEFAULT_HISTORY_LIMIT,
                tab_width: DEFAULT_TAB_WIDTH
            }
        );
        assert_eq!(cfg.palette(), Palette::default());
    }

    #[test]
    fn parses_sections() {
        let cfg = load_str("[history]\nlimit = 25\n[view]\ntab_width = 8\n");
        assert_eq!(cfg.file.history.limit, 25);
        assert_eq!(cfg.effective().tab_width, 8);
    }

    #[test]
    fn parse_error_falls_back_to_defaults() {
        let cfg = load_str("[history\nlimit = ");
        assert!(cfg.raw.is_none());
        assert_eq!(cfg.file.history.limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn clamps_out_of_range_values() {
        let cfg = load_str("[history]\nlimit = 0\n[view]\ntab_width = 99\n");
        let eff = cfg.effective();
        assert_eq!(eff.history_limit, 1);
        assert_eq!(eff.tab_width, MAX_TAB_WIDTH);
    }

    #[test]
    fn palette_overrides_and_ignores_invalid() {
        let cfg = load_str("[palette]\ntext = \"#102030\"\ncursor = \"not-a-color\"\n");
        let p = cfg.palette();
        assert_eq!(p.text, Rgb::new(0x10, 0x20, 0x30));
        assert_eq!(p.cursor, Palette::default().cursor);
    }

    #[test]
    fn rgb_parse_rejects_bad_input() {
        assert_eq!(Rgb::parse("ffffff"), Ok(Rgb::new(255, 255, 255)));
        assert!(Rgb::parse("#fff").is_err());
        assert!(Rgb::parse("#gg0000").is_err());
    }

    #[test]
    fn clamp_logging_uses_config_target() {
        let cfg = load_str("[view]\ntab_width = 0\n");
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();

        let eff = with_default(subscriber, || cfg.effective());

        let log_output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("INFO config:"));
        assert!(log_output.contains("tab_width_clamped"));
        assert_eq!(eff.tab_width, 1);
    }
}
