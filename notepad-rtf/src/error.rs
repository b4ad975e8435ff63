use std::io;

use thiserror::Error;

/// Errors that abort a conversion run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot trim {requested} trailing bytes, only {available} available")]
    TrimOverflow { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A format code the interpreter does not know.
///
/// Never fatal. `fragment` is the markup the transcoder still emits for the
/// code, see [`UnknownCodePolicy`](crate::UnknownCodePolicy).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized format code 0x{code:02X}")]
pub struct UnrecognizedCode {
    pub code: u8,
    pub fragment: String,
}
