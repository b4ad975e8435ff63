use log::trace;

use crate::{
    ControlByte, FormatCode,
    actor::{Action, Actor},
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    #[default]
    Ground,
    /// An escape introducer was consumed, the next byte is a format code.
    Escape,
}

/// Single pass decoder for the Notepad byte stream.
///
/// The parser keeps its state between calls to [`Parser::advance`], so a
/// document may be fed in arbitrarily sized chunks; an escape sequence that
/// straddles two chunks decodes the same as one that does not.
#[derive(Default, Debug)]
pub struct Parser {
    state: State,
    position: usize,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of input bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Advance the parser with a new chunk of bytes.
    pub fn advance<A: Actor>(
        &mut self,
        bytes: &[u8],
        actor: &mut A,
    ) -> Result<(), A::Error> {
        for &byte in bytes {
            let position = self.position;
            self.position += 1;

            match self.state {
                State::Escape => {
                    self.state = State::Ground;
                    let code = FormatCode::from(byte);
                    trace!("[format] {code} at {position}");
                    actor.handle(Action::Format { code, position })?;
                },
                State::Ground => self.perform(byte, actor)?,
            }
        }

        Ok(())
    }

    /// Signal the end of the input stream.
    ///
    /// Reports an escape introducer that was not followed by a code byte.
    /// The parser is ready for a new stream afterwards.
    pub fn finish<A: Actor>(&mut self, actor: &mut A) -> Result<(), A::Error> {
        let state = std::mem::take(&mut self.state);
        let consumed = std::mem::take(&mut self.position);

        if state == State::Escape {
            let position = consumed.saturating_sub(1);
            actor.handle(Action::UnterminatedEscape { position })?;
        }

        Ok(())
    }

    fn perform<A: Actor>(
        &mut self,
        byte: u8,
        actor: &mut A,
    ) -> Result<(), A::Error> {
        let class = ControlByte::from(byte);
        match class {
            ControlByte::Escape => {
                self.state = State::Escape;
                Ok(())
            },
            ControlByte::LineFeed => actor.handle(Action::LineFeed),
            ControlByte::Literal(byte) => actor.handle(Action::Print(byte)),
            class if class.is_reserved() => {
                actor.handle(Action::Reserved(byte))
            },
            class => {
                trace!("[discard] {class}");
                actor.handle(Action::Discard(class))
            },
        }
    }
}
