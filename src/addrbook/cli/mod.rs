//! The interactive prompt.
//!
//! Generic over its input and output so the whole loop can be driven from
//! tests with in-memory buffers.

mod handlers;
mod parser;
mod render;

use addrbook::api::AddressBookApi;
use addrbook::config::BookConfig;
use addrbook::store::BookStore;
use colored::Colorize;
use handlers::Outcome;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = ">>> ";
pub const FAREWELL: &str = "Good bye!";

/// Reads commands until an exit command or end of input.
pub fn run_repl<S, R, W>(
    api: &mut AddressBookApi<S>,
    config: &BookConfig,
    mut input: R,
    mut out: W,
) -> io::Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            writeln!(out)?;
            break;
        }
        // Undecodable bytes become U+FFFD and fall through to "Unknown command".
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\n', '\r'])
            .to_lowercase();

        match handlers::handle(api, config, &line) {
            Outcome::Continue(result) => render::write_result(&mut out, &result)?,
            Outcome::Exit => break,
        }
    }
    writeln!(out, "{}", FAREWELL.bold())?;
    out.flush()
}
