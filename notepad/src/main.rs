//! `np-rtf`: converts Amstrad Notepad word-processor documents to RTF or
//! plain text.

mod args;

use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::Path,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use env_logger::Env;
use log::info;
use notepad_rtf::convert;

use crate::args::{CliArguments, Output};

fn main() -> Result<()> {
    let args = CliArguments::parse();
    init_logging(args.verbose);

    let options = args.convert_options();
    let output = args.output();

    if let Output::File(path) = &output {
        if is_same_file(&args.input, path) {
            bail!(
                "refusing to overwrite the input file {}",
                args.input.display()
            );
        }
    }

    let input = File::open(&args.input).with_context(|| {
        format!("failed to open input file {}", args.input.display())
    })?;

    let report = match &output {
        Output::Stdout => convert(input, io::stdout().lock(), &options),
        Output::File(path) => {
            let file = File::create(path).with_context(|| {
                format!("failed to open output file {}", path.display())
            })?;
            convert(input, BufWriter::new(file), &options)
        },
    }
    .with_context(|| format!("failed to convert {}", args.input.display()))?;

    info!(
        "read {} bytes, wrote {} bytes, {} unrecognized format codes",
        report.bytes_read, report.bytes_written, report.unrecognized_codes
    );

    match &output {
        Output::Stdout => eprintln!("conversion successful"),
        Output::File(path) => {
            println!("conversion successful: {}", path.display())
        },
    }

    Ok(())
}

fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp_millis()
        .init();
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
