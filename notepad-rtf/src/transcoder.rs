use std::io::{ErrorKind, Read, Write};

use log::{debug, warn};
use notepad_escape::{Action, Actor, FormatCode, FormatState, Parser};

use crate::{
    ConvertOptions, Error, Interpreter, OutputMode, Result,
    markup::{self, DOC_END, DOC_START, PARAGRAPH, TEXT_START, TRAILER_LEN},
    sink::{HoldbackWriter, Sink},
};

/// Summary of a finished conversion run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionReport {
    /// Input bytes consumed, both bytes of every escape sequence included.
    pub bytes_read: usize,
    /// Bytes in the final output.
    pub bytes_written: usize,
    /// Escape sequences with a code the interpreter did not know.
    pub unrecognized_codes: usize,
}

/// [`Actor`] that renders decoded document events into a [`Sink`].
///
/// One transcoder handles exactly one document: the attribute state starts
/// out empty when the transcoder is created and lives until
/// [`Transcoder::finish`].
#[derive(Debug)]
pub struct Transcoder<S: Sink> {
    sink: S,
    mode: OutputMode,
    state: FormatState,
    interpreter: Interpreter,
    report: ConversionReport,
}

impl<S: Sink> Transcoder<S> {
    /// Create a transcoder and write the document prologue.
    pub fn start(sink: S, options: &ConvertOptions) -> Result<Self> {
        let mut transcoder = Self {
            sink,
            mode: options.mode,
            state: FormatState::default(),
            interpreter: Interpreter::new(options.unknown_codes),
            report: ConversionReport::default(),
        };

        if transcoder.mode == OutputMode::Rtf {
            transcoder.emit(DOC_START.as_bytes())?;
            transcoder.emit(TEXT_START.as_bytes())?;
        }

        Ok(transcoder)
    }

    /// Close the document and hand back the sink.
    ///
    /// RTF output loses its last [`TRAILER_LEN`] bytes, which the word
    /// processor leaves at the end of every document, in favour of the
    /// closing brace.
    pub fn finish(mut self) -> Result<(S, ConversionReport)> {
        if self.mode == OutputMode::Rtf {
            self.sink.trim_end(TRAILER_LEN)?;
            self.report.bytes_written =
                self.report.bytes_written.saturating_sub(TRAILER_LEN);
            self.emit(DOC_END)?;
        }

        self.sink.finish()?;
        debug!(
            "conversion finished: {} bytes written, {} unrecognized codes",
            self.report.bytes_written, self.report.unrecognized_codes
        );

        Ok((self.sink, self.report))
    }

    #[inline]
    fn emit(&mut self, bytes: &[u8]) -> Result<()> {
        self.sink.write_all(bytes)?;
        self.report.bytes_written += bytes.len();
        Ok(())
    }

    fn format(&mut self, code: FormatCode, position: usize) -> Result<()> {
        if self.mode == OutputMode::TextOnly {
            if let FormatCode::Unrecognized(byte) = code {
                self.report.unrecognized_codes += 1;
                warn!(
                    "unrecognized format code 0x{byte:02X} at byte {position}"
                );
            }
            return Ok(());
        }

        let written = match self.interpreter.interpret(code, &mut self.state)
        {
            Ok(fragment) => {
                self.sink.write_all(fragment.as_bytes())?;
                fragment.len()
            },
            Err(err) => {
                self.report.unrecognized_codes += 1;
                warn!("{err} at byte {position}, output may be corrupted");
                self.sink.write_all(err.fragment.as_bytes())?;
                err.fragment.len()
            },
        };
        self.report.bytes_written += written;

        Ok(())
    }
}

impl<S: Sink> Actor for Transcoder<S> {
    type Error = Error;

    fn handle(&mut self, action: Action) -> Result<()> {
        match (self.mode, action) {
            (_, Action::Print(byte)) => self.emit(&[byte]),
            (OutputMode::Rtf, Action::LineFeed) => {
                self.emit(PARAGRAPH.as_bytes())
            },
            (OutputMode::TextOnly, Action::LineFeed) => self.emit(b"\n"),
            (OutputMode::Rtf, Action::Reserved(byte)) => {
                self.emit(&markup::escape(byte))
            },
            (OutputMode::TextOnly, Action::Reserved(_)) => Ok(()),
            (_, Action::Discard(_)) => Ok(()),
            (_, Action::Format { code, position }) => {
                self.format(code, position)
            },
            (_, Action::UnterminatedEscape { position }) => {
                warn!("escape code at byte {position} has no format code");
                Ok(())
            },
        }
    }
}

/// Convert a whole document from `input` into `output`.
///
/// The input is read in chunks until a read returns no data; the output is
/// streamed as it is produced.
pub fn convert<R: Read, W: Write>(
    mut input: R,
    output: W,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    let sink = HoldbackWriter::new(output, TRAILER_LEN);
    let mut transcoder = Transcoder::start(sink, options)?;
    let mut parser = Parser::new();
    let mut buffer = vec![0u8; options.read_buffer_capacity.max(1)];

    loop {
        match input.read(&mut buffer) {
            Ok(0) => break,
            Ok(count) => parser.advance(&buffer[..count], &mut transcoder)?,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }

    let bytes_read = parser.position();
    parser.finish(&mut transcoder)?;
    let (_, report) = transcoder.finish()?;

    Ok(ConversionReport {
        bytes_read,
        ..report
    })
}

/// Convert an in-memory document.
pub fn convert_bytes(input: &[u8], options: &ConvertOptions) -> Result<Vec<u8>> {
    let mut transcoder =
        Transcoder::start(Vec::with_capacity(input.len() * 2), options)?;
    let mut parser = Parser::new();
    parser.advance(input, &mut transcoder)?;
    parser.finish(&mut transcoder)?;

    let (output, _) = transcoder.finish()?;
    Ok(output)
}
