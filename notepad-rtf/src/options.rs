/// What kind of document a run produces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Rich Text Format, attributes rendered as control words.
    #[default]
    Rtf,
    /// Plain text, all formatting stripped.
    TextOnly,
}

impl OutputMode {
    /// Conventional file extension for documents in this mode.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Rtf => "rtf",
            Self::TextOnly => "txt",
        }
    }
}

/// Markup emitted for a format code the interpreter does not know.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UnknownCodePolicy {
    /// Emit nothing.
    #[default]
    Skip,
    /// Emit the last fragment generated for a known code again, as the
    /// original DOS converter did.
    RepeatLast,
}

/// Configuration knobs for one conversion run.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    pub mode: OutputMode,
    pub unknown_codes: UnknownCodePolicy,
    /// Size of the temporary buffer used to drain the input.
    pub read_buffer_capacity: usize,
}

impl ConvertOptions {
    pub fn text_only() -> Self {
        Self {
            mode: OutputMode::TextOnly,
            ..Self::default()
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            unknown_codes: UnknownCodePolicy::default(),
            read_buffer_capacity: 8192,
        }
    }
}
