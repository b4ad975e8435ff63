use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use notepad_rtf::{ConvertOptions, OutputMode, UnknownCodePolicy};

/// Converts Amstrad Notepad word-processor documents to RTF or plain text.
#[derive(Debug, Clone, Parser)]
#[command(name = "np-rtf", version, about, arg_required_else_help = true)]
pub struct CliArguments {
    /// Notepad document to convert
    pub input: PathBuf,

    /// Where to write the result, `-` for stdout
    /// [default: the input path with an .rtf or .txt extension]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Writes plain text instead of RTF
    #[arg(short, long)]
    pub text: bool,

    /// Repeats the previous formatting on unknown format codes instead of
    /// skipping them, like the original DOS converter
    #[arg(long)]
    pub repeat_stale_format: bool,

    /// Sets the level of logging verbosity:
    /// -v = info, -vv = debug, -vvv = trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where the converted document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl CliArguments {
    pub fn mode(&self) -> OutputMode {
        if self.text {
            OutputMode::TextOnly
        } else {
            OutputMode::Rtf
        }
    }

    pub fn convert_options(&self) -> ConvertOptions {
        let unknown_codes = if self.repeat_stale_format {
            UnknownCodePolicy::RepeatLast
        } else {
            UnknownCodePolicy::Skip
        };

        ConvertOptions {
            mode: self.mode(),
            unknown_codes,
            ..ConvertOptions::default()
        }
    }

    pub fn output(&self) -> Output {
        match &self.output {
            Some(path) if path.as_os_str() == "-" => Output::Stdout,
            Some(path) => Output::File(path.clone()),
            None => Output::File(derive_output_path(&self.input, self.mode())),
        }
    }
}

/// Output path next to `input`: same file stem, extension for `mode`.
///
/// `notes.wp` becomes `notes.rtf`, `letter` becomes `letter.txt`.
pub fn derive_output_path(input: &Path, mode: OutputMode) -> PathBuf {
    input.with_extension(mode.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArguments {
        CliArguments::try_parse_from(args).unwrap()
    }

    #[test]
    fn derive_output_paths() {
        let cases = [
            ("notes.wp", OutputMode::Rtf, "notes.rtf"),
            ("letter", OutputMode::TextOnly, "letter.txt"),
            ("dir/a.b.doc", OutputMode::Rtf, "dir/a.b.rtf"),
        ];

        for (input, mode, expected) in cases {
            assert_eq!(
                derive_output_path(Path::new(input), mode),
                PathBuf::from(expected)
            );
        }
    }

    #[test]
    fn defaults() {
        let args = parse(&["np-rtf", "memo.np"]);
        let options = args.convert_options();

        assert_eq!(options.mode, OutputMode::Rtf);
        assert_eq!(options.unknown_codes, UnknownCodePolicy::Skip);
        assert_eq!(args.output(), Output::File(PathBuf::from("memo.rtf")));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn flags() {
        let args = parse(&[
            "np-rtf",
            "-t",
            "--repeat-stale-format",
            "-vv",
            "-o",
            "-",
            "memo.np",
        ]);
        let options = args.convert_options();

        assert_eq!(options.mode, OutputMode::TextOnly);
        assert_eq!(options.unknown_codes, UnknownCodePolicy::RepeatLast);
        assert_eq!(args.output(), Output::Stdout);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn single_input_only() {
        assert!(CliArguments::try_parse_from(["np-rtf", "a", "b"]).is_err());
    }
}
