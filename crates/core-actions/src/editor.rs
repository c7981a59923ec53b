//! The editing engine: one document, its history, the current mode.
//!
//! Per-key lifecycle (`Editor::process`):
//! 1. `History::checkpoint` duplicates the live snapshot.
//! 2. The dispatcher interprets the key for the current `Mode`, calling the
//!    mutating primitives (`insert_at`, `erase`) which flag the key as
//!    modifying, or requesting undo/redo, quit, load or save.
//! 3. `History::commit` keeps or folds the checkpoint.
//! 4. `begin_row` is re-clamped around the cursor line.
//!
//! Load/save are never executed inside `process`: the key only records an
//! `IoRequest` which the host collects with `take_io_request` and runs through
//! `perform_io` on the same thread.

use crate::dispatcher;
use crate::io_ops::{IoRequest, Storage, StorageError};
use crate::viewport::Viewport;
use core_events::KeyEvent;
use core_render::{CullRequest, FrameTimings, StatusContext, build_status};
use core_state::{Clipboard, Committed, History, Mode, Rewind, Snapshot};
use core_text::Document;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

pub struct Editor {
    history: History,
    pub(crate) mode: Mode,
    pub(crate) clipboard: Clipboard,
    pub(crate) begin_row: usize,
    file_name: Option<PathBuf>,
    notification: String,
    dirty: bool,
    // Per-key flags, reset by `process`.
    modified: bool,
    rewind: Option<Rewind>,
    quit: bool,
    io_request: Option<IoRequest>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

impl Editor {
    pub fn new(text: Document) -> Self {
        Self::from_history(History::new(Snapshot::new(text, 0)))
    }

    pub fn with_history_limit(text: Document, limit: usize) -> Self {
        Self::from_history(History::with_limit(Snapshot::new(text, 0), limit))
    }

    fn from_history(history: History) -> Self {
        Self {
            history,
            mode: Mode::Normal,
            clipboard: Clipboard::new(),
            begin_row: 0,
            file_name: None,
            notification: String::new(),
            dirty: false,
            modified: false,
            rewind: None,
            quit: false,
            io_request: None,
        }
    }

    // ---------------------------------------------------------------------------------------------
    // Read access
    // ---------------------------------------------------------------------------------------------

    pub fn text(&self) -> &Document {
        &self.history.top().text
    }

    pub fn cursor(&self) -> usize {
        self.history.top().cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Pending repeat count (zero unless a count is being typed).
    pub fn accumulator(&self) -> usize {
        self.mode.accumulator()
    }

    pub fn clipboard(&self) -> &[u8] {
        self.clipboard.contents()
    }

    /// First visible document line.
    pub fn begin_row(&self) -> usize {
        self.begin_row
    }

    pub fn notification(&self) -> &str {
        &self.notification
    }

    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// Unsaved changes since the last load/save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Zero-based line of the cursor.
    pub fn cursor_line(&self) -> usize {
        self.text().line_index(self.cursor())
    }

    /// Zero-based byte column of the cursor within its line.
    pub fn cursor_col(&self) -> usize {
        self.text().span(self.cursor()).to_relative(self.cursor())
    }

    // ---------------------------------------------------------------------------------------------
    // Host-facing mutation
    // ---------------------------------------------------------------------------------------------

    /// Place the cursor (clamped). Does not create a history entry.
    pub fn set_cursor(&mut self, offset: usize) {
        let top = self.history.top_mut();
        top.cursor = top.text.clamp(offset);
    }

    pub fn set_file_name(&mut self, path: impl Into<PathBuf>) {
        self.file_name = Some(path.into());
    }

    pub fn set_notification(&mut self, message: impl Into<String>) {
        self.notification = message.into();
    }

    /// Interpret one key event. Returns true when the user asked to quit.
    pub fn process(&mut self, key: KeyEvent, cols: u16, rows: u16) -> bool {
        let viewport = Viewport::new(cols, rows);
        self.modified = false;
        self.rewind = None;
        self.history.checkpoint();

        let mode_before = self.mode;
        dispatcher::dispatch(self, key, viewport);

        match self.history.commit(self.modified, self.rewind.take()) {
            Committed::Edit | Committed::Undone | Committed::Redone => self.dirty = true,
            Committed::AtOldest => self.notification = "Already at oldest change".to_string(),
            Committed::AtNewest => self.notification = "Already at newest change".to_string(),
            Committed::Unchanged => {}
        }
        self.begin_row = viewport.clamp_begin_row(self.begin_row, self.cursor_line());

        if mode_before != self.mode {
            debug!(target: "actions.dispatch", from = %mode_before, to = %self.mode, "mode_change");
        }
        std::mem::take(&mut self.quit)
    }

    /// Collect the load/save request raised by the last key, if any.
    pub fn take_io_request(&mut self) -> Option<IoRequest> {
        self.io_request.take()
    }

    /// Execute a load/save request. Failures land in the notification; the
    /// mode and document are left untouched.
    pub fn perform_io(&mut self, request: IoRequest, storage: &dyn Storage) {
        let result = match request {
            IoRequest::Load => self.reload(storage),
            IoRequest::Save => self.save(storage),
        };
        if let Err(e) = result {
            error!(target: "io", ?request, error = %e, "io_failed");
            self.notification = e.to_string();
        }
    }

    /// Load `path` into the editor and remember it as the file name.
    pub fn open(
        &mut self,
        path: impl Into<PathBuf>,
        storage: &dyn Storage,
    ) -> Result<(), StorageError> {
        self.file_name = Some(path.into());
        self.reload(storage)
    }

    fn reload(&mut self, storage: &dyn Storage) -> Result<(), StorageError> {
        let path = self.file_name.clone().ok_or(StorageError::NoFileName)?;
        let text = storage.load(&path)?;
        let (lines, bytes) = (text.line_count(), text.len());
        self.history.reset(Snapshot::new(text, 0));
        self.begin_row = 0;
        self.dirty = false;
        self.notification = format!("\"{}\" {}L {}B loaded", display_name(&path), lines, bytes);
        info!(target: "io", path = %path.display(), lines, bytes, "file_loaded");
        Ok(())
    }

    fn save(&mut self, storage: &dyn Storage) -> Result<(), StorageError> {
        let path = self.file_name.clone().ok_or(StorageError::NoFileName)?;
        storage.save(&path, self.text())?;
        self.dirty = false;
        let (lines, bytes) = (self.text().line_count(), self.text().len());
        self.notification = format!("\"{}\" {}L {}B written", display_name(&path), lines, bytes);
        info!(target: "io", path = %path.display(), lines, bytes, "file_saved");
        Ok(())
    }

    // ---------------------------------------------------------------------------------------------
    // Presentation helpers
    // ---------------------------------------------------------------------------------------------

    /// Status line text for the current state and host-measured timings.
    pub fn status_line(&self, timings: FrameTimings) -> String {
        build_status(&StatusContext {
            mode: self.mode,
            file_name: self.file_name.as_deref(),
            dirty: self.dirty,
            size: self.text().len(),
            line: self.cursor_line(),
            col: self.cursor_col(),
            timings,
        })
    }

    /// Assemble the projector input for the current state.
    pub fn cull_request<'a>(
        &'a self,
        status: &'a str,
        cols: u16,
        rows: u16,
        tab_width: u16,
    ) -> CullRequest<'a> {
        CullRequest {
            text: self.text().as_bytes(),
            cursor: self.cursor(),
            begin_row: self.begin_row,
            cols,
            rows,
            mode: self.mode,
            status,
            notification: &self.notification,
            tab_width,
        }
    }

    // ---------------------------------------------------------------------------------------------
    // Dispatcher primitives
    // ---------------------------------------------------------------------------------------------

    pub(crate) fn doc(&self) -> &Document {
        self.text()
    }

    /// Run a cursor motion against the live snapshot.
    pub(crate) fn move_cursor(&mut self, motion: impl FnOnce(&Document, &mut usize)) {
        let top = self.history.top_mut();
        motion(&top.text, &mut top.cursor);
        top.cursor = top.text.clamp(top.cursor);
    }

    /// Insert bytes at `at` without moving the cursor (beyond re-clamping).
    pub(crate) fn insert_at(&mut self, at: usize, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let top = self.history.top_mut();
        top.text.insert(at, bytes);
        top.cursor = top.text.clamp(top.cursor);
        self.modified = true;
    }

    /// Insert at the cursor and advance past the inserted bytes.
    pub(crate) fn insert_at_cursor(&mut self, bytes: &[u8]) {
        let at = self.cursor();
        self.insert_at(at, bytes);
        self.set_cursor(at + bytes.len());
    }

    /// Remove a byte range, returning what was removed.
    pub(crate) fn erase(&mut self, range: Range<usize>) -> Vec<u8> {
        let top = self.history.top_mut();
        let removed = top.text.erase(range);
        top.cursor = top.text.clamp(top.cursor);
        if !removed.is_empty() {
            self.modified = true;
        }
        removed
    }

    pub(crate) fn request_rewind(&mut self, rewind: Rewind) {
        self.rewind = Some(rewind);
    }

    pub(crate) fn request_quit(&mut self) {
        self.quit = true;
    }

    pub(crate) fn request_io(&mut self, request: IoRequest) {
        self.io_request = Some(request);
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
