use std::fmt;

/// Introduces a formatting directive; the next byte is a [`FormatCode`].
///
/// [`FormatCode`]: crate::FormatCode
pub(crate) const ESCAPE: u8 = 0x05;
pub(crate) const LINE_FEED: u8 = 0x0A;
pub(crate) const CARRIAGE_RETURN: u8 = 0x0D;
pub(crate) const END_OF_DOCUMENT: u8 = 0x1A;
pub(crate) const SOFT_RETURN: u8 = 0x8A;
pub(crate) const FILLER: u8 = 0xFF;

/// Classification of a single byte seen outside of an escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlByte {
    /// (0x05) Escape introducer, the following byte is a format code.
    Escape,
    /// (0x0A) Hard line break, ends a paragraph.
    LineFeed,
    /// (0x8A) Soft carriage return written after a hard break.
    SoftReturn,
    /// (0x0D) Literal carriage return.
    CarriageReturn,
    /// (0x1A) End-of-document padding.
    EndOfDocument,
    /// (0xFF) Filler byte.
    Filler,
    /// `{`, reserved in RTF.
    OpenBrace,
    /// `}`, reserved in RTF.
    CloseBrace,
    /// `\`, reserved in RTF.
    Backslash,
    /// Any other byte, taken as text.
    Literal(u8),
}

impl ControlByte {
    /// Bytes that never reach the output in any mode.
    pub fn is_discarded(self) -> bool {
        matches!(
            self,
            Self::SoftReturn
                | Self::CarriageReturn
                | Self::EndOfDocument
                | Self::Filler
        )
    }

    /// Bytes that must be escaped with a backslash in RTF.
    pub fn is_reserved(self) -> bool {
        matches!(self, Self::OpenBrace | Self::CloseBrace | Self::Backslash)
    }

    /// The raw byte this classification was made from.
    pub fn byte(self) -> u8 {
        match self {
            Self::Escape => ESCAPE,
            Self::LineFeed => LINE_FEED,
            Self::SoftReturn => SOFT_RETURN,
            Self::CarriageReturn => CARRIAGE_RETURN,
            Self::EndOfDocument => END_OF_DOCUMENT,
            Self::Filler => FILLER,
            Self::OpenBrace => b'{',
            Self::CloseBrace => b'}',
            Self::Backslash => b'\\',
            Self::Literal(byte) => byte,
        }
    }
}

impl From<u8> for ControlByte {
    fn from(byte: u8) -> Self {
        use ControlByte::*;
        match byte {
            ESCAPE => Escape,
            LINE_FEED => LineFeed,
            SOFT_RETURN => SoftReturn,
            CARRIAGE_RETURN => CarriageReturn,
            END_OF_DOCUMENT => EndOfDocument,
            FILLER => Filler,
            b'{' => OpenBrace,
            b'}' => CloseBrace,
            b'\\' => Backslash,
            other => Literal(other),
        }
    }
}

impl fmt::Display for ControlByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ControlByte::*;
        let name = match self {
            Escape => "ESC",
            LineFeed => "LF",
            SoftReturn => "SOFT-CR",
            CarriageReturn => "CR",
            EndOfDocument => "EOD",
            Filler => "FILL",
            OpenBrace => "LBRACE",
            CloseBrace => "RBRACE",
            Backslash => "BSLASH",
            Literal(_) => "LITERAL",
        };

        match self {
            Literal(b) => write!(f, "{name}: 0x{:02X}", b),
            _ => write!(f, "{name}"),
        }
    }
}
