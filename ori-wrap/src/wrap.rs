use crate::Cursor;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Use the ambient indent of the rendering context.
    #[default]
    Ambient,
    Exact(u16),
}

impl From<u16> for Indent {
    fn from(count: u16) -> Self {
        Indent::Exact(count)
    }
}

/// How a single write is laid out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub indent: Indent,
    /// Columns kept free at the right edge of the terminal.
    pub right_padding: u16,
    /// Whether words that are cut mid-way get a trailing `-`.
    pub hyphenate: bool,
}

impl Layout {
    pub fn indent(mut self, count: u16) -> Self {
        self.indent = Indent::Exact(count);
        self
    }

    pub fn ambient_indent(mut self) -> Self {
        self.indent = Indent::Ambient;
        self
    }

    pub fn right_padding(mut self, right_padding: u16) -> Self {
        self.right_padding = right_padding;
        self
    }

    pub fn hyphenate(mut self, hyphenate: bool) -> Self {
        self.hyphenate = hyphenate;
        self
    }
}

/// The number of text columns left on a line, never less than one.
pub fn line_width(terminal_width: u16, indent: u16, right_padding: u16) -> usize {
    terminal_width
        .saturating_sub(indent)
        .saturating_sub(right_padding)
        .max(1) as usize
}

/// Wraps `text` as if it were written at `cursor`, returning the rendered
/// text and the cursor it leaves behind.
pub fn wrap(
    text: &str,
    cursor: Cursor,
    terminal_width: u16,
    indent: u16,
    right_padding: u16,
    hyphenate: bool,
) -> (String, Cursor) {
    let mut wrapper = Wrapper::new(
        cursor,
        indent,
        line_width(terminal_width, indent, right_padding),
        hyphenate,
    );

    wrapper.push(text);
    wrapper.finish()
}

#[derive(Debug)]
pub struct Wrapper {
    output: String,

    indent: usize,
    line_width: usize,
    hyphenate: bool,

    column: usize,
    breakable: bool,
    // Breaks written since the last character. A soft wrap or a cut counts
    // as one, so that a newline in the input right after it does not
    // produce an extra empty line.
    line_breaks: u8,
    newline_run: u8,
}

impl Wrapper {
    pub fn new(cursor: Cursor, indent: u16, line_width: usize, hyphenate: bool) -> Self {
        Self {
            output: String::new(),

            indent: indent as usize,
            line_width: line_width.max(1),
            hyphenate,

            column: cursor.column as usize,
            breakable: cursor.breakable,
            line_breaks: cursor.line_breaks.min(2),
            newline_run: cursor.newline_run.min(2),
        }
    }

    pub fn push(&mut self, text: &str) {
        let characters: Vec<char> = text.chars().collect();
        let mut rest = &characters[..];

        self.output.reserve(text.len());

        while !rest.is_empty() {
            let line_end = rest.iter().position(|&c| c == '\n').unwrap_or(rest.len());
            let (line, after) = rest.split_at(line_end);

            self.push_line(line);

            let newlines = after.iter().take_while(|&&c| c == '\n').count();
            if newlines > 0 {
                self.push_newlines(newlines);
            }

            rest = &after[newlines..];
        }
    }

    pub fn finish(self) -> (String, Cursor) {
        let cursor = Cursor {
            column: self.column.try_into().unwrap_or(u16::MAX),
            breakable: self.breakable,
            line_breaks: self.line_breaks,
            newline_run: self.newline_run,
        };

        (self.output, cursor)
    }

    fn push_newlines(&mut self, count: usize) {
        // A run of two or more newlines is a paragraph break: exactly one
        // blank line, however long the run and however many writes it is
        // split across.
        self.newline_run = (self.newline_run as usize + count).min(2) as u8;

        let breaks = self.newline_run.max(self.line_breaks);

        for _ in self.line_breaks..breaks {
            self.output.push('\n');
        }

        self.column = 0;
        self.breakable = false;
        self.line_breaks = breaks;
    }

    fn push_line(&mut self, mut rest: &[char]) {
        while !rest.is_empty() {
            let room = self.line_width.saturating_sub(self.column);

            if rest.len() <= room {
                self.emit(rest);
                return;
            }

            // rest[room] is the first character that would not fit. A fresh
            // line can't break before its first character.
            let earliest = if self.column == 0 { 1 } else { 0 };

            if let Some(mut at) = (earliest..=room).rev().find(|&index| rest[index].is_whitespace()) {
                while at > earliest && rest[at - 1].is_whitespace() {
                    at -= 1;
                }

                self.emit(&rest[..at]);
                self.break_line();

                let skip = rest[at..].iter().take_while(|c| c.is_whitespace()).count();
                rest = &rest[at + skip..];
                continue;
            }

            // The previous write ended in whitespace, so the line can still
            // break softly between the two writes.
            if self.column > 0 && self.breakable {
                self.break_line();
                continue;
            }

            let overfull = self.column >= self.line_width;

            let mut cut = (self.line_width - 1).saturating_sub(self.column);
            if self.column == 0 {
                cut = cut.max(1);
            }

            self.emit(&rest[..cut]);

            if self.hyphenate && !overfull {
                self.output.push('-');
            }

            self.break_line();
            rest = &rest[cut..];
        }
    }

    fn emit(&mut self, characters: &[char]) {
        let Some(&last) = characters.last() else {
            return;
        };

        if self.column == 0 {
            self.output.extend(std::iter::repeat_n(' ', self.indent));
        }

        self.output.extend(characters);

        self.column += characters.len();
        self.breakable = last.is_whitespace();
        self.line_breaks = 0;
        self.newline_run = 0;
    }

    fn break_line(&mut self) {
        self.output.push('\n');

        self.column = 0;
        self.breakable = false;
        self.line_breaks = 1;
        self.newline_run = 0;
    }
}
