//! Converter for Amstrad Notepad word-processor documents.
//!
//! Builds on [`notepad_escape`], which decodes the document byte stream:
//! - [`Interpreter`] turns paired format codes into RTF control words,
//! - [`Transcoder`] is the [`escape::Actor`] that renders every decoded
//!   event as RTF or plain text into a [`Sink`].
//!
//! Most callers only need [`convert`] (streaming) or [`convert_bytes`]
//! (in memory) together with [`ConvertOptions`].

mod error;
mod interpreter;
pub mod markup;
mod options;
mod sink;
mod transcoder;

pub use error::{Error, Result, UnrecognizedCode};
pub use interpreter::Interpreter;
pub use options::{ConvertOptions, OutputMode, UnknownCodePolicy};
pub use sink::{HoldbackWriter, Sink};
pub use transcoder::{ConversionReport, Transcoder, convert, convert_bytes};

pub use notepad_escape as escape;
