use std::{
    env,
    fmt,
    io::{
        self,
        IsTerminal as _,
        Write as _,
    },
};

use enumset::EnumSetType;
use terminal_size::{
    Width,
    terminal_size_of,
};

/// The width assumed when a stream is not a terminal and `COLUMNS` is unset.
pub const FALLBACK_WIDTH: u16 = 120;

/// An output destination the printer is allowed to write to.
#[derive(EnumSetType, Debug, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl fmt::Display for Stream {
    fn fmt(&self, writer: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Stdout => write!(writer, "stdout"),
            Stream::Stderr => write!(writer, "stderr"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeError {
    #[error("{stream} is not a terminal")]
    NotATerminal { stream: Stream },

    #[error("failed to query the width of {stream}")]
    Unavailable { stream: Stream },
}

impl ProbeError {
    pub fn stream(self) -> Stream {
        match self {
            ProbeError::NotATerminal { stream } | ProbeError::Unavailable { stream } => stream,
        }
    }
}

/// Queries the column count of the terminal behind `stream`.
pub fn terminal_width(stream: Stream) -> Result<u16, ProbeError> {
    let size = match stream {
        Stream::Stdout => {
            let stdout = io::stdout();

            if !stdout.is_terminal() {
                return Err(ProbeError::NotATerminal { stream });
            }

            terminal_size_of(stdout)
        },

        Stream::Stderr => {
            let stderr = io::stderr();

            if !stderr.is_terminal() {
                return Err(ProbeError::NotATerminal { stream });
            }

            terminal_size_of(stderr)
        },
    };

    match size {
        Some((Width(width), _)) if width > 0 => Ok(width),
        _ => Err(ProbeError::Unavailable { stream }),
    }
}

/// Width to use once the probe has failed: `COLUMNS` if it holds a positive
/// number, [`FALLBACK_WIDTH`] otherwise.
pub fn fallback_width() -> u16 {
    parse_columns(env::var("COLUMNS").ok().as_deref())
}

fn parse_columns(columns: Option<&str>) -> u16 {
    columns
        .and_then(|columns| columns.trim().parse::<u16>().ok())
        .filter(|&columns| columns > 0)
        .unwrap_or(FALLBACK_WIDTH)
}

impl Stream {
    /// Writes the whole of `text` in one go and flushes.
    pub fn write(self, text: &str) -> io::Result<()> {
        match self {
            Stream::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()
            },

            Stream::Stderr => {
                let mut stderr = io::stderr().lock();
                stderr.write_all(text.as_bytes())?;
                stderr.flush()
            },
        }
    }
}
