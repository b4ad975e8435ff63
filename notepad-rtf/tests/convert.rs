use std::io::{self, Read};

use notepad_rtf::{
    ConvertOptions, Error, OutputMode, convert, convert_bytes,
    markup::{DOC_START, TEXT_START},
};

const ESC: u8 = 0x05;
const BOLD: u8 = 0xE2;

fn prologue() -> String {
    format!("{DOC_START}{TEXT_START}")
}

fn rtf_string(input: &[u8]) -> String {
    let out = convert_bytes(input, &ConvertOptions::default()).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn bold_run_between_plain_text() {
    let input = [b'A', ESC, BOLD, b'B', ESC, BOLD, b'C', b'.', b'.'];
    let out = rtf_string(&input);

    let body = out.strip_prefix(&prologue()).unwrap();
    assert_eq!(body, "A\\plain\\b\\fs24 B\\plain\\fs24 C}");

    let a = body.find('A').unwrap();
    let on = body.find("\\b").unwrap();
    let b = body.find('B').unwrap();
    let off = body.rfind("\\plain\\fs24").unwrap();
    let c = body.find('C').unwrap();
    assert!(a < on && on < b && b < off && off < c);
}

#[test]
fn bold_run_followed_by_paragraph() {
    let input = [b'A', ESC, BOLD, b'B', ESC, BOLD, b'C', b'\n', b'.', b'.'];
    let out = rtf_string(&input);

    assert_eq!(
        out,
        format!("{}A\\plain\\b\\fs24 B\\plain\\fs24 C\\par\\fs24 }}", prologue())
    );
}

#[test]
fn open_brace_alone() {
    let rtf = convert_bytes(b"{", &ConvertOptions::default()).unwrap();
    let naive = format!("{}\\{{", prologue());
    assert_eq!(rtf.len(), naive.len() - 1);
    assert!(rtf.ends_with(b"}"));

    let text = convert_bytes(b"{", &ConvertOptions::text_only()).unwrap();
    assert!(text.is_empty());
}

#[test]
fn trailer_replaced_by_closing_brace() {
    for tail in [b"xy", b"\x1A\x1A", b"  "] {
        let mut input = b"some text ".to_vec();
        input.extend_from_slice(tail);

        let naive_len = prologue().len() + input.len()
            - input.iter().filter(|b| **b == 0x1A).count();
        let out = convert_bytes(&input, &ConvertOptions::default()).unwrap();

        assert_eq!(out.len(), naive_len - 1);
        assert_eq!(out.last(), Some(&b'}'));
    }
}

#[test]
fn line_feed_per_mode() {
    let text = convert_bytes(b"ab\ncd", &ConvertOptions::text_only()).unwrap();
    assert_eq!(text, b"ab\ncd");

    let rtf = rtf_string(b"ab\ncd");
    assert_eq!(rtf, format!("{}ab\\par\\fs24 }}", prologue()));
}

#[test]
fn text_mode_strips_layout_bytes_only() {
    let input: Vec<u8> = (0..=u8::MAX)
        .filter(|b| !matches!(*b, 0x05 | b'{' | b'}' | b'\\'))
        .collect();
    let expected: Vec<u8> = input
        .iter()
        .copied()
        .filter(|b| !matches!(*b, 0x0D | 0x8A | 0x1A | 0xFF))
        .collect();

    let out = convert_bytes(&input, &ConvertOptions::text_only()).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn text_mode_has_no_framing() {
    let out = convert_bytes(b"plain", &ConvertOptions::text_only()).unwrap();
    assert_eq!(out, b"plain");
    assert_eq!(ConvertOptions::text_only().mode, OutputMode::TextOnly);
}

#[test]
fn every_paired_code_round_trips_state() {
    for code in [0xE2, 0xE9, 0xF5, 0xF3, 0xF4, 0xEC] {
        let input = [ESC, code, b'x', ESC, code, b'y', b'.', b'.'];
        let out = rtf_string(&input);
        let body = out.strip_prefix(&prologue()).unwrap();

        let (on, rest) = body.split_once('x').unwrap();
        assert!(on.starts_with("\\plain"));
        assert_ne!(on, "\\plain\\fs24 ");
        assert_eq!(rest, "\\plain\\fs24 y}");
    }
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

#[test]
fn read_errors_abort_the_run() {
    let mut output: Vec<u8> = Vec::new();
    let result = convert(FailingReader, &mut output, &ConvertOptions::default());
    assert!(matches!(result, Err(Error::Io(_))));
}
