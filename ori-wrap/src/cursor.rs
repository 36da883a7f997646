use std::collections::HashMap;

use crate::Stream;

/// Where the last write to a stream left off.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Characters written on the current line, indentation excluded. Zero
    /// means the next write starts a fresh line.
    pub column: u16,
    /// Whether the last character written was whitespace, making the boundary
    /// before the next write a valid place to wrap.
    pub breakable: bool,
    /// Line breaks written since the last character, at most two.
    pub line_breaks: u8,
    /// Newlines of the input run the last write ended in, at most two. A
    /// following write that starts with newlines continues this run.
    pub newline_run: u8,
}

impl Cursor {
    pub const START: Self = Self {
        column: 0,
        breakable: false,
        line_breaks: 0,
        newline_run: 0,
    };

    pub fn at(column: u16) -> Self {
        Self {
            column,
            ..Self::START
        }
    }

    pub fn is_line_start(self) -> bool {
        self.column == 0
    }
}

/// Per-stream cursor positions. Entries are created on first write and
/// never removed.
#[derive(Debug, Default, Clone)]
pub struct Cursors {
    cursors: HashMap<Stream, Cursor>,
}

impl Cursors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stream: Stream) -> u16 {
        self.cursor(stream).column
    }

    pub fn cursor(&self, stream: Stream) -> Cursor {
        self.cursors.get(&stream).copied().unwrap_or(Cursor::START)
    }

    pub fn set(&mut self, stream: Stream, cursor: Cursor) {
        log::trace!("cursor of {stream} moved to column {column}", column = cursor.column);

        self.cursors.insert(stream, cursor);
    }

    pub fn reset(&mut self, stream: Stream) {
        self.set(stream, Cursor::START);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_streams_start_at_zero() {
        let cursors = Cursors::new();

        assert_eq!(cursors.get(Stream::Stdout), 0);
        assert_eq!(cursors.cursor(Stream::Stderr), Cursor::START);
    }

    #[test]
    fn streams_are_tracked_independently() {
        let mut cursors = Cursors::new();

        cursors.set(Stream::Stdout, Cursor {
            column: 7,
            breakable: true,
            ..Cursor::START
        });
        cursors.set(Stream::Stderr, Cursor::at(3));

        assert_eq!(cursors.get(Stream::Stdout), 7);
        assert!(cursors.cursor(Stream::Stdout).breakable);
        assert_eq!(cursors.get(Stream::Stderr), 3);

        cursors.reset(Stream::Stdout);

        assert!(cursors.cursor(Stream::Stdout).is_line_start());
        assert_eq!(cursors.get(Stream::Stderr), 3);
    }
}
