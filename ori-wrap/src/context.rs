use enumset::EnumSet;
use scopeguard::ScopeGuard;

use crate::{
    Cursor,
    Cursors,
    Error,
    Indent,
    Layout,
    ProbeError,
    Result,
    Stream,
    ToText,
    stream,
};

/// Where the line width comes from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Ask the terminal on every write, so resizes are picked up.
    #[default]
    Terminal,
    Fixed(u16),
}

/// State shared by every write: the ambient indent and where each stream's
/// cursor is.
#[derive(Debug, Default)]
pub struct RenderContext {
    indent: u16,
    width: Width,
    cursors: Cursors,
    degraded: EnumSet<Stream>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(width: Width) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn indent(&self) -> u16 {
        self.indent
    }

    pub fn set_indent(&mut self, indent: u16) {
        self.indent = indent;
    }

    /// Moves the ambient indent by `delta` columns, stopping at the bounds of
    /// `u16`.
    pub fn change_indent(&mut self, delta: i32) {
        self.indent = i32::from(self.indent)
            .saturating_add(delta)
            .clamp(0, i32::from(u16::MAX)) as u16;
    }

    /// Increases the ambient indent by `by` until the returned guard is
    /// dropped.
    pub fn indented<'a>(&'a mut self, by: u16) -> ScopeGuard<&'a mut Self, impl FnOnce(&'a mut Self)> {
        let old = self.indent;
        self.indent = self.indent.saturating_add(by);

        scopeguard::guard(self, move |context| {
            context.indent = old;
        })
    }

    pub fn cursors(&self) -> &Cursors {
        &self.cursors
    }

    pub fn cursor(&self, stream: Stream) -> Cursor {
        self.cursors.cursor(stream)
    }

    /// The terminal width for `stream`, degrading to
    /// [`fallback_width`](stream::fallback_width) when it can't be probed.
    pub fn terminal_width(&mut self, stream: Stream) -> u16 {
        if let Width::Fixed(width) = self.width {
            return width;
        }

        match stream::terminal_width(stream) {
            Ok(width) => {
                log::debug!("{stream} is {width} columns wide");
                width
            },

            Err(error) => {
                let width = stream::fallback_width();

                log::log!(self.degradation_level(error), "{error}, assuming {width} columns");

                width
            },
        }
    }

    /// Warns the first time a stream's width can't be probed, and only
    /// debug-logs every time after that.
    fn degradation_level(&mut self, error: ProbeError) -> log::Level {
        if self.degraded.insert(error.stream()) {
            log::Level::Warn
        } else {
            log::Level::Debug
        }
    }

    /// Renders `value` as it would appear on `stream` and advances the
    /// stream's cursor, without writing anything.
    pub fn wrap(&mut self, stream: Stream, value: impl ToText, layout: Layout) -> String {
        let text = value.to_text();

        let indent = match layout.indent {
            Indent::Ambient => self.indent,
            Indent::Exact(indent) => indent,
        };

        let terminal_width = self.terminal_width(stream);

        log::trace!(
            "wrapping {length} bytes for {stream} in {terminal_width} columns with indent {indent}",
            length = text.len(),
        );

        let (rendered, cursor) = crate::wrap(
            &text,
            self.cursors.cursor(stream),
            terminal_width,
            indent,
            layout.right_padding,
            layout.hyphenate,
        );
        self.cursors.set(stream, cursor);

        rendered
    }

    pub fn print_to(&mut self, stream: Stream, value: impl ToText, layout: Layout) -> Result<()> {
        let rendered = self.wrap(stream, value, layout);

        stream
            .write(&rendered)
            .map_err(|source| Error::Write { stream, source })
    }

    pub fn println_to(&mut self, stream: Stream, value: impl ToText, layout: Layout) -> Result<()> {
        let mut rendered = self.wrap(stream, value, layout);
        rendered.push('\n');

        self.cursors.reset(stream);

        stream
            .write(&rendered)
            .map_err(|source| Error::Write { stream, source })
    }

    /// Ends the current line of `stream`. Prints an empty line if the cursor
    /// is already at the start of one.
    pub fn blank_line(&mut self, stream: Stream) -> Result<()> {
        self.println_to(stream, "", Layout::default())
    }

    pub fn print(&mut self, value: impl ToText) -> Result<()> {
        self.print_to(Stream::Stdout, value, Layout::default())
    }

    pub fn println(&mut self, value: impl ToText) -> Result<()> {
        self.println_to(Stream::Stdout, value, Layout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(width: u16) -> RenderContext {
        RenderContext::with_width(Width::Fixed(width))
    }

    #[test]
    fn ambient_indent_is_used_by_default() {
        let mut context = context(40);
        context.set_indent(3);

        assert_eq!(context.wrap(Stream::Stdout, "foo\nbar", Layout::default()), "   foo\n   bar");
        assert_eq!(
            context.wrap(Stream::Stderr, "foo", Layout::default().indent(1)),
            " foo"
        );
    }

    #[test]
    fn indent_changes() {
        let mut context = context(40);

        context.change_indent(4);
        assert_eq!(context.indent(), 4);

        context.change_indent(-10);
        assert_eq!(context.indent(), 0);

        {
            let mut inner = context.indented(2);
            assert_eq!(inner.indent(), 2);

            let mut innermost = inner.indented(3);
            assert_eq!(innermost.wrap(Stream::Stdout, "x", Layout::default()), "     x");
        }

        assert_eq!(context.indent(), 0);
    }

    #[test]
    fn ambient_indent_narrows_the_line() {
        let mut context = context(14);
        context.set_indent(4);

        let rendered = context.wrap(Stream::Stdout, "aaaa bbbb cccc", Layout::default().right_padding(1));

        assert_eq!(rendered, "    aaaa bbbb\n    cccc");
    }

    #[test]
    fn cursors_are_kept_per_stream() {
        let mut context = context(20);
        context.set_indent(2);

        assert_eq!(context.wrap(Stream::Stdout, "foo ", Layout::default()), "  foo ");
        assert_eq!(context.wrap(Stream::Stderr, "err", Layout::default()), "  err");
        assert_eq!(context.wrap(Stream::Stdout, "bar", Layout::default()), "bar");

        assert_eq!(context.cursors().get(Stream::Stdout), 7);
        assert_eq!(context.cursors().get(Stream::Stderr), 3);
    }

    #[test]
    fn split_writes_continue_the_line() {
        let mut context = context(12);
        let hyphenate = Layout::default().hyphenate(true);

        let mut rendered = context.wrap(Stream::Stdout, "foo ", Layout::default());
        rendered += &context.wrap(Stream::Stdout, "barbarbarbarbar\n", hyphenate);
        rendered += &context.wrap(Stream::Stdout, "baz (on newline)\n", Layout::default());

        assert_eq!(rendered, "foo \nbarbarbarba-\nrbar\nbaz (on\nnewline)\n");
        assert!(context.cursor(Stream::Stdout).is_line_start());
    }

    #[test]
    fn println_resets_the_cursor() {
        let mut context = context(80);
        context.set_indent(2);

        context.wrap(Stream::Stderr, "partial", Layout::default());
        assert_eq!(context.cursors().get(Stream::Stderr), 7);

        context.blank_line(Stream::Stderr).unwrap();

        assert!(context.cursor(Stream::Stderr).is_line_start());
        assert_eq!(context.wrap(Stream::Stderr, "fresh", Layout::default()), "  fresh");
    }

    #[test]
    fn values_are_converted() {
        let mut context = context(80);

        assert_eq!(context.wrap(Stream::Stdout, 42_u32, Layout::default()), "42");
        assert_eq!(context.wrap(Stream::Stdout, ' ', Layout::default()), " ");
        assert_eq!(context.wrap(Stream::Stdout, String::from("x"), Layout::default()), "x");
        assert_eq!(context.cursors().get(Stream::Stdout), 4);
    }

    #[test]
    fn fixed_width_is_not_probed() {
        let mut context = context(33);

        assert_eq!(context.terminal_width(Stream::Stdout), 33);
        assert_eq!(context.terminal_width(Stream::Stderr), 33);
    }

    #[test]
    fn degradation_warns_once_per_stream() {
        let mut context = RenderContext::new();

        let stdout = ProbeError::NotATerminal { stream: Stream::Stdout };
        let stderr = ProbeError::Unavailable { stream: Stream::Stderr };

        assert_eq!(context.degradation_level(stdout), log::Level::Warn);
        assert_eq!(context.degradation_level(stdout), log::Level::Debug);
        assert_eq!(
            context.degradation_level(ProbeError::Unavailable { stream: Stream::Stdout }),
            log::Level::Debug
        );

        assert_eq!(context.degradation_level(stderr), log::Level::Warn);
        assert_eq!(context.degradation_level(stderr), log::Level::Debug);

        assert_eq!(context.degraded, Stream::Stdout | Stream::Stderr);
        assert_eq!(RenderContext::new().degradation_level(stdout), log::Level::Warn);
    }

    #[test]
    fn terminal_width_always_positive() {
        let mut context = RenderContext::new();

        assert!(context.terminal_width(Stream::Stdout) > 0);
        assert!(context.terminal_width(Stream::Stdout) > 0);
    }
}
