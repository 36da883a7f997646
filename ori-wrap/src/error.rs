use std::{
    io,
    result,
};

use crate::Stream;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to write to {stream}")]
    Write {
        stream: Stream,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = result::Result<T, Error>;
