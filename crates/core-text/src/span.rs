//! Line span addressing.
//!
//! A `LineSpan` is derived on demand from the document bytes and an offset;
//! nothing is cached. `end` is the offset of the line's newline (or the final
//! byte of the text), so both endpoints are valid cursor positions and the
//! span is inclusive on both sides.

/// Inclusive `[start, end]` byte range of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    /// Locate the line containing `offset`.
    ///
    /// A newline byte belongs to the line it terminates, so the search for the
    /// line start only considers bytes strictly before `offset`. Offsets past
    /// the end are clamped to the final byte.
    pub fn locate(text: &[u8], offset: usize) -> Self {
        if text.is_empty() {
            return Self { start: 0, end: 0 };
        }
        let last = text.len() - 1;
        let offset = offset.min(last);
        let start = text[..offset]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let end = text[offset..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(last, |i| offset + i);
        Self { start, end }
    }

    /// Column of `pos` relative to the line start (saturating outside the span).
    pub fn to_relative(&self, pos: usize) -> usize {
        pos.clamp(self.start, self.end) - self.start
    }

    /// Absolute offset for `col`, clamped to the line end.
    pub fn to_absolute(&self, col: usize) -> usize {
        self.start.saturating_add(col).min(self.end)
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos <= self.end
    }

    /// Line length including its newline.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A span always holds at least its terminating byte.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Zero-based index of the line containing `offset`.
pub fn line_index(text: &[u8], offset: usize) -> usize {
    let offset = offset.min(text.len().saturating_sub(1));
    text[..offset].iter().filter(|&&b| b == b'\n').count()
}

/// Number of lines; a trailing newline terminates the last line rather than opening a new one.
pub fn line_count(text: &[u8]) -> usize {
    let newlines = text.iter().filter(|&&b| b == b'\n').count();
    if text.last() == Some(&b'\n') {
        newlines
    } else {
        newlines + 1
    }
}

/// Offset of the first byte of line `line`, if the line exists.
pub fn line_start(text: &[u8], line: usize) -> Option<usize> {
    if line == 0 {
        return (!text.is_empty()).then_some(0);
    }
    text.iter()
        .enumerate()
        .filter(|(_, b)| **b == b'\n')
        .nth(line - 1)
        .map(|(i, _)| i + 1)
        .filter(|&s| s < text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_middle_of_line() {
        let t = b"line1\nline2\n";
        assert_eq!(LineSpan::locate(t, 2), LineSpan { start: 0, end: 5 });
        assert_eq!(LineSpan::locate(t, 8), LineSpan { start: 6, end: 11 });
    }

    #[test]
    fn newline_belongs_to_its_line() {
        let t = b"ab\ncd\n";
        assert_eq!(LineSpan::locate(t, 2), LineSpan { start: 0, end: 2 });
        assert_eq!(LineSpan::locate(t, 5), LineSpan { start: 3, end: 5 });
    }

    #[test]
    fn empty_lines() {
        let t = b"\n\nx\n";
        assert_eq!(LineSpan::locate(t, 0), LineSpan { start: 0, end: 0 });
        assert_eq!(LineSpan::locate(t, 1), LineSpan { start: 1, end: 1 });
        assert_eq!(LineSpan::locate(t, 2), LineSpan { start: 2, end: 3 });
    }

    #[test]
    fn text_without_newline_ends_at_last_byte() {
        let t = b"abc";
        assert_eq!(LineSpan::locate(t, 1), LineSpan { start: 0, end: 2 });
    }

    #[test]
    fn relative_and_absolute_clamp() {
        let s = LineSpan { start: 6, end: 11 };
        assert_eq!(s.to_relative(10), 4);
        assert_eq!(s.to_absolute(4), 10);
        assert_eq!(s.to_absolute(40), 11);
        assert_eq!(s.to_relative(2), 0);
        assert_eq!(s.len(), 6);
    }

    #[test]
    fn line_start_lookup() {
        let t = b"a\nbb\n\nc\n";
        assert_eq!(line_start(t, 0), Some(0));
        assert_eq!(line_start(t, 1), Some(2));
        assert_eq!(line_start(t, 2), Some(5));
        assert_eq!(line_start(t, 3), Some(6));
        assert_eq!(line_start(t, 4), None);
        assert_eq!(line_count(t), 4);
    }
}
