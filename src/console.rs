//! Line-oriented console over any reader and writer.

use std::io::{self, BufRead, Write};

use crate::session::{Console, Event, Prompt};

/// A [`Console`] that reads answers line by line and writes plain text.
#[derive(Debug)]
pub struct IoConsole<R, W> {
    input: R,
    output: W,
}

impl IoConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer, consuming the console.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD so the session rejects and re-asks.
        let line = String::from_utf8_lossy(&line);
        let answer = line.trim_end_matches(['\r', '\n']);
        Ok(Some(answer.to_owned()))
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn prompt(&mut self, prompt: Prompt) -> Option<String> {
        match self.read_answer(prompt) {
            Ok(Some(answer)) => Some(answer),
            Ok(None) => {
                log::debug!("input closed at {prompt:?}");
                None
            }
            Err(err) => {
                log::warn!("failed to read answer: {err}");
                None
            }
        }
    }

    fn show(&mut self, event: &Event) {
        if let Err(err) = writeln!(self.output, "{event}") {
            log::warn!("failed to write to console: {err}");
        }
    }
}
