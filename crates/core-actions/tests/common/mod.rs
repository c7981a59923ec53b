#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{Editor, Storage, StorageError};
use core_events::{KeyCode, KeyEvent};
use core_text::Document;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const COLS: u16 = 80;
pub const ROWS: u16 = 12; // 10 text rows, row_count 9

pub fn editor(text: &str) -> Editor {
    Editor::new(Document::from_str(text))
}

pub fn editor_at(text: &str, cursor: usize) -> Editor {
    let mut ed = editor(text);
    ed.set_cursor(cursor);
    ed
}

/// Feed a literal key sequence (presses only). Returns true if any key asked to quit.
pub fn type_keys(ed: &mut Editor, keys: &str) -> bool {
    let mut quit = false;
    for c in keys.chars() {
        quit |= ed.process(KeyEvent::char(c), COLS, ROWS);
    }
    quit
}

pub fn press(ed: &mut Editor, code: KeyCode) -> bool {
    ed.process(KeyEvent::press(code), COLS, ROWS)
}

pub fn release(ed: &mut Editor, code: KeyCode) -> bool {
    ed.process(KeyEvent::release(code), COLS, ROWS)
}

/// Hold the leader key, type `keys`, release it.
pub fn leader(ed: &mut Editor, keys: &str) -> bool {
    let mut quit = press(ed, KeyCode::Char(' '));
    quit |= type_keys(ed, keys);
    quit |= release(ed, KeyCode::Char(' '));
    quit
}

pub fn text(ed: &Editor) -> String {
    String::from_utf8_lossy(ed.text().as_bytes()).into_owned()
}

/// Document invariant checked after every key in the property tests.
pub fn assert_invariant(ed: &Editor) {
    let bytes = ed.text().as_bytes();
    assert!(!bytes.is_empty(), "document never empty");
    assert_eq!(bytes.last(), Some(&b'\n'), "document ends with newline");
    assert!(
        ed.cursor() < bytes.len(),
        "cursor {} within {}",
        ed.cursor(),
        bytes.len()
    );
}

/// In-memory `Storage` for load/save tests.
#[derive(Default)]
pub struct MemStorage {
    pub files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    pub fail_writes: bool,
}

impl MemStorage {
    pub fn with_file(path: &str, contents: &str) -> Self {
        let storage = Self::default();
        storage
            .files
            .borrow_mut()
            .insert(PathBuf::from(path), contents.as_bytes().to_vec());
        storage
    }

    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(Path::new(path)).cloned()
    }
}

impl Storage for MemStorage {
    fn load(&self, path: &Path) -> Result<Document, StorageError> {
        self.files
            .borrow()
            .get(path)
            .map(|bytes| Document::from_bytes(bytes.clone()))
            .ok_or_else(|| StorageError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }

    fn save(&self, path: &Path, text: &Document) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            });
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), text.as_bytes().to_vec());
        Ok(())
    }
}
