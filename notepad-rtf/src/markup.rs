//! RTF vocabulary used by the transcoder.
//!
//! The body font is Times New Roman 12pt (`\fs24`, sizes are in half
//! points); enlarged text is set in 14pt (`\fs28`).

use notepad_escape::{Attribute, FormatState};

/// Document header and font table.
pub const DOC_START: &str = "{\\rtf1\\ansi{\\fonttbl{\\f0\\fs24 Times New Roman;}}\n";

/// Opens the first paragraph with default formatting.
pub const TEXT_START: &str = "\\pard\\plain\\fs24 ";

/// Paragraph break. The font size is restated since `\par` keeps the
/// size of the previous run.
pub const PARAGRAPH: &str = "\\par\\fs24 ";

/// Resets character formatting.
pub const PLAIN: &str = "\\plain";

pub const LARGE_FONT: &str = "\\fs28 ";
pub const NORMAL_FONT: &str = "\\fs24 ";

/// Closes the document group.
pub const DOC_END: &[u8] = b"}";

/// Bytes removed from the end of the output before [`DOC_END`] is written.
pub const TRAILER_LEN: usize = 2;

/// Control word toggled on by `attribute`.
pub fn control_word(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::Bold => "\\b",
        Attribute::Italic => "\\i",
        Attribute::Underline => "\\ul",
        Attribute::Subscript => "\\dn",
        Attribute::Superscript => "\\up",
        Attribute::Enlarged => LARGE_FONT,
    }
}

/// Append the markup for `state` to `out`.
///
/// The fragment always starts with [`PLAIN`] and ends with exactly one font
/// size, so it fully describes the attributes on its own.
pub fn write_fragment(state: FormatState, out: &mut String) {
    out.push_str(PLAIN);
    for attribute in Attribute::ALL {
        if attribute == Attribute::Enlarged {
            continue;
        }
        if state.is_active(attribute) {
            out.push_str(control_word(attribute));
        }
    }

    if state.is_active(Attribute::Enlarged) {
        out.push_str(LARGE_FONT);
    } else {
        out.push_str(NORMAL_FONT);
    }
}

pub fn fragment(state: FormatState) -> String {
    let mut out = String::new();
    write_fragment(state, &mut out);
    out
}

/// Backslash-escape an RTF reserved byte.
#[inline]
pub fn escape(byte: u8) -> [u8; 2] {
    [b'\\', byte]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fragment() {
        assert_eq!(fragment(FormatState::empty()), "\\plain\\fs24 ");
    }

    #[test]
    fn fragment_order_is_fixed() {
        assert_eq!(
            fragment(FormatState::all()),
            "\\plain\\b\\i\\ul\\dn\\up\\fs28 "
        );
        assert_eq!(
            fragment(FormatState::SUPERSCRIPT | FormatState::BOLD),
            "\\plain\\b\\up\\fs24 "
        );
        assert_eq!(
            fragment(FormatState::ENLARGED | FormatState::UNDERLINE),
            "\\plain\\ul\\fs28 "
        );
    }

    #[test]
    fn every_fragment_has_one_font_size() {
        for bits in 0..=FormatState::all().bits() {
            let state = FormatState::from_bits_truncate(bits);
            let rendered = fragment(state);
            assert!(rendered.starts_with(PLAIN));
            assert_eq!(rendered.matches("\\fs").count(), 1);
        }
    }

    #[test]
    fn escape_reserved() {
        assert_eq!(&escape(b'{'), b"\\{");
        assert_eq!(&escape(b'\\'), b"\\\\");
    }
}
