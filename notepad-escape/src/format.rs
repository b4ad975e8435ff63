use std::fmt;

use bitflags::bitflags;

const BOLD: u8 = 0xE2;
const ITALIC: u8 = 0xE9;
const UNDERLINE: u8 = 0xF5;
const SUBSCRIPT: u8 = 0xF3;
const SUPERSCRIPT: u8 = 0xF4;
const ENLARGED: u8 = 0xEC;
const SOFT_SPACE: u8 = 0x90;

/// One of the paired text attributes. Each occurrence of the attribute's
/// code switches it on or off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    Italic,
    Underline,
    Subscript,
    Superscript,
    Enlarged,
}

impl Attribute {
    /// All attributes, in rendering order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Bold,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::Subscript,
        Attribute::Superscript,
        Attribute::Enlarged,
    ];

    /// The format code byte that toggles this attribute.
    pub fn code(self) -> u8 {
        match self {
            Self::Bold => BOLD,
            Self::Italic => ITALIC,
            Self::Underline => UNDERLINE,
            Self::Subscript => SUBSCRIPT,
            Self::Superscript => SUPERSCRIPT,
            Self::Enlarged => ENLARGED,
        }
    }
}

impl From<Attribute> for FormatState {
    fn from(attribute: Attribute) -> Self {
        match attribute {
            Attribute::Bold => Self::BOLD,
            Attribute::Italic => Self::ITALIC,
            Attribute::Underline => Self::UNDERLINE,
            Attribute::Subscript => Self::SUBSCRIPT,
            Attribute::Superscript => Self::SUPERSCRIPT,
            Attribute::Enlarged => Self::ENLARGED,
        }
    }
}

/// The byte following an escape introducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatCode {
    /// Toggles a paired attribute.
    Paired(Attribute),
    /// Soft space inserted by the word processor, carries no formatting.
    SoftSpace,
    /// Anything else.
    Unrecognized(u8),
}

impl FormatCode {
    pub fn byte(self) -> u8 {
        match self {
            Self::Paired(attribute) => attribute.code(),
            Self::SoftSpace => SOFT_SPACE,
            Self::Unrecognized(byte) => byte,
        }
    }
}

impl From<u8> for FormatCode {
    fn from(byte: u8) -> Self {
        match byte {
            BOLD => Self::Paired(Attribute::Bold),
            ITALIC => Self::Paired(Attribute::Italic),
            UNDERLINE => Self::Paired(Attribute::Underline),
            SUBSCRIPT => Self::Paired(Attribute::Subscript),
            SUPERSCRIPT => Self::Paired(Attribute::Superscript),
            ENLARGED => Self::Paired(Attribute::Enlarged),
            SOFT_SPACE => Self::SoftSpace,
            other => Self::Unrecognized(other),
        }
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paired(attribute) => {
                write!(f, "{attribute:?}: 0x{:02X}", attribute.code())
            },
            Self::SoftSpace => write!(f, "SoftSpace: 0x{SOFT_SPACE:02X}"),
            Self::Unrecognized(b) => write!(f, "Unrecognized: 0x{:02X}", b),
        }
    }
}

bitflags! {
    /// Attributes switched on at the current point of the document.
    ///
    /// The state only ever changes through [`FormatState::flip`], one
    /// attribute per format code.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FormatState: u8 {
        const BOLD        = 0b0000_0001;
        const ITALIC      = 0b0000_0010;
        const UNDERLINE   = 0b0000_0100;
        const SUBSCRIPT   = 0b0000_1000;
        const SUPERSCRIPT = 0b0001_0000;
        const ENLARGED    = 0b0010_0000;
    }
}

impl FormatState {
    /// Switch `attribute` on if it is off, off if it is on.
    #[inline]
    pub fn flip(&mut self, attribute: Attribute) {
        self.toggle(attribute.into());
    }

    #[inline]
    pub fn is_active(&self, attribute: Attribute) -> bool {
        self.contains(attribute.into())
    }
}
