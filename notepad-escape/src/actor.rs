//! Consumer interface for decoded document events.
//!
//! The [`Parser`](crate::Parser) never writes output itself. Every byte it
//! consumes is turned into an [`Action`] and relayed to an [`Actor`]
//! implementation, which decides what (if anything) to emit for it.

use crate::{ControlByte, FormatCode};

/// Semantic event produced for one position of the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Ordinary text byte.
    Print(u8),
    /// Hard line break.
    LineFeed,
    /// A byte that is reserved in RTF (`{`, `}` or `\`).
    Reserved(u8),
    /// A byte the word processor uses for layout only.
    Discard(ControlByte),
    /// Escape sequence. `position` is the 0-based offset of the code byte.
    Format { code: FormatCode, position: usize },
    /// The stream ended right after an escape introducer found at
    /// `position`.
    UnterminatedEscape { position: usize },
}

/// Trait implemented by consumers of the [`Parser`](crate::Parser).
///
/// The parser calls [`Actor::handle`] synchronously, once per action, in
/// input order. An error stops the parser and is handed back to the caller.
pub trait Actor {
    type Error;

    fn handle(&mut self, action: Action) -> Result<(), Self::Error>;
}
