//! Word-wrapping printer for terminal output.
//!
//! Text written through a [`RenderContext`] is reflowed to the width of the
//! terminal behind the target [`Stream`], indented, and optionally hyphenated
//! where a word has to be cut. The context remembers where the last write to
//! each stream ended, so several `print`s that build up one line wrap as if
//! they were a single write.

mod context;
mod cursor;
mod error;
pub mod stream;
mod text;
mod wrap;

pub use crate::{
    context::*,
    cursor::*,
    error::*,
    stream::{
        FALLBACK_WIDTH,
        ProbeError,
        Stream,
        terminal_width,
    },
    text::*,
    wrap::*,
};
