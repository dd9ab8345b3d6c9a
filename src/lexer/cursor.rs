//! Byte cursor over the source buffer, tracking 1-based line/column.

/// A restorable position snapshot, used when a token form turns out to be
/// malformed partway through and scanning must resume from the start.
#[derive(Debug, Clone, Copy)]
pub struct CursorSnapshot {
    pub index: usize,
    pub line: usize,
    pub column: usize,
}

pub struct Cursor<'a> {
    source: &'a [u8],
    index: usize,
    line: usize,
    column: usize,
    tab_width: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a [u8], tab_width: usize) -> Self {
        Self {
            source,
            index: 0,
            line: 1,
            column: 1,
            tab_width,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.source.len()
    }

    pub fn current(&self) -> Option<u8> {
        self.source.get(self.index).copied()
    }

    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.source.get(self.index + offset).copied()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            index: self.index,
            line: self.line,
            column: self.column,
        }
    }

    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.index = snapshot.index;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }

    /// Advance one byte, updating line/column. Tabs expand the column by
    /// `tab_width` instead of one; newlines reset the column and bump the
    /// line without requiring the caller to special-case them.
    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.current()?;
        self.index += 1;
        match byte {
            b'\n' => {
                self.line += 1;
                self.column = 1;
            }
            b'\t' => self.column += self.tab_width,
            _ => self.column += 1,
        }
        Some(byte)
    }

    pub fn match_byte(&mut self, b: u8) -> bool {
        if self.current() == Some(b) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start..self.index]
    }

    pub fn slice_from_current(&self) -> &'a [u8] {
        &self.source[self.index..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_line_and_column() {
        let mut c = Cursor::new(b"ab\ncd", 4);
        assert_eq!((c.line(), c.column()), (1, 1));
        c.advance();
        c.advance();
        assert_eq!((c.line(), c.column()), (1, 3));
        c.advance(); // newline
        assert_eq!((c.line(), c.column()), (2, 1));
    }

    #[test]
    fn tab_expands_column_by_tab_width() {
        let mut c = Cursor::new(b"\tx", 4);
        c.advance();
        assert_eq!(c.column(), 5);
    }

    #[test]
    fn snapshot_restore_round_trips() {
        let mut c = Cursor::new(b"abcd", 4);
        c.advance();
        c.advance();
        let snap = c.snapshot();
        c.advance();
        c.restore(snap);
        assert_eq!(c.index(), 2);
    }
}
