use notepad_escape::{FormatCode, FormatState};

use crate::{UnknownCodePolicy, UnrecognizedCode, markup};

/// Turns format codes into RTF fragments.
///
/// The attribute state itself is owned by the caller and handed in on every
/// call; the interpreter only keeps the last fragment it generated.
#[derive(Debug, Default)]
pub struct Interpreter {
    fragment: String,
    policy: UnknownCodePolicy,
}

impl Interpreter {
    pub fn new(policy: UnknownCodePolicy) -> Self {
        Self {
            fragment: String::new(),
            policy,
        }
    }

    /// Apply `code` to `state` and return the markup describing the result.
    ///
    /// Paired codes flip one attribute and yield a complete fragment for the
    /// new state. A soft space yields an empty fragment and leaves both the
    /// state and the last fragment untouched.
    pub fn interpret(
        &mut self,
        code: impl Into<FormatCode>,
        state: &mut FormatState,
    ) -> Result<&str, UnrecognizedCode> {
        match code.into() {
            FormatCode::Paired(attribute) => {
                state.flip(attribute);
                self.fragment.clear();
                markup::write_fragment(*state, &mut self.fragment);
                Ok(self.fragment.as_str())
            },
            FormatCode::SoftSpace => Ok(""),
            FormatCode::Unrecognized(code) => {
                let fragment = match self.policy {
                    UnknownCodePolicy::Skip => String::new(),
                    UnknownCodePolicy::RepeatLast => self.fragment.clone(),
                };
                Err(UnrecognizedCode { code, fragment })
            },
        }
    }
}
