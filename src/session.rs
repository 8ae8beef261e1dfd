//! Interactive command loop
//!
//! Reads one command per line, runs it through `ContactBookHandler` and
//! writes the reply. Saving is left to the caller so the book is written even
//! when the console fails mid-session.

use crate::{ContactBookHandler, Reply};
use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `close` or `exit`
    Exit,
    /// The input stream ran out
    EndOfInput,
}

/// Run commands from `input` until `close`/`exit` or end of input
///
/// Bytes that are not valid UTF-8 are replaced and the line is handled like
/// any other, so one garbled line only produces an error reply.
///
/// # Errors
/// Returns the underlying error when reading `input` or writing `output`
/// fails. The handler keeps every change made up to that point.
pub fn run_session<R: BufRead, W: Write>(
    handler: &mut ContactBookHandler,
    mut input: R,
    mut output: W,
) -> io::Result<SessionEnd> {
    writeln!(output, "{}", WELCOME)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            return Ok(SessionEnd::EndOfInput);
        }
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        match handler.execute(&line) {
            Ok(Reply::Text(text)) => writeln!(output, "{}", text)?,
            Ok(Reply::Exit(text)) => {
                writeln!(output, "{}", text)?;
                return Ok(SessionEnd::Exit);
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}
