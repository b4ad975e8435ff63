//! Byte-level decoder for Amstrad Notepad word-processor documents.
//!
//! Notepad documents are 8-bit text with single-byte formatting directives
//! introduced by an escape byte (`0x05`). The [`Parser`] walks the raw byte
//! stream, classifies every byte and hands semantic [`Action`]s to an
//! [`Actor`]. What the actor does with them (RTF, plain text, statistics)
//! is up to the embedding crate.

mod actor;
mod control;
mod format;
mod parser;

pub use actor::{Action, Actor};
pub use control::ControlByte;
pub use format::{Attribute, FormatCode, FormatState};
pub use parser::Parser;
