//! Print every [`Action`] the parser emits for a Notepad document.
//!
//! ```bash
//! cargo run -p notepad-escape --example log_actions -- <path>
//! ```
use std::{convert::Infallible, env, fs};

use notepad_escape::{Action, Actor, Parser};

#[derive(Default)]
struct LoggingActor {
    seq: usize,
}

impl Actor for LoggingActor {
    type Error = Infallible;

    fn handle(&mut self, action: Action) -> Result<(), Self::Error> {
        self.seq += 1;
        println!("{:04}: {action:?}", self.seq);
        Ok(())
    }
}

fn main() {
    let bytes = match env::args().nth(1) {
        Some(path) => fs::read(&path).unwrap_or_else(|err| {
            eprintln!("failed to read {path}: {err}");
            std::process::exit(1);
        }),
        None => b"Hello \x05\xE2Notepad\x05\xE2!\x0D\x0A\x8A{done}\x1A".to_vec(),
    };

    let mut parser = Parser::new();
    let mut actor = LoggingActor::default();
    let Ok(()) = parser.advance(&bytes, &mut actor);
    let Ok(()) = parser.finish(&mut actor);
}
