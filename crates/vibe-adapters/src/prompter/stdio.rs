//! Line-oriented terminal prompter.

use std::io::{self, BufRead, Write};

use tracing::trace;
use vibe_core::{
    application::{ApplicationError, ports::Prompter},
    error::VibeResult,
};

/// Prompter over any buffered reader and writer.
///
/// Production uses [`StdioPrompter::stdio`]; tests can pass in-memory
/// buffers.
pub struct StdioPrompter<R, W> {
    input: R,
    output: W,
}

impl StdioPrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Prompter for StdioPrompter<R, W> {
    fn say(&mut self, line: &str) -> VibeResult<()> {
        writeln!(self.output, "{line}").map_err(prompt_error)
    }

    fn prompt(&mut self, question: &str) -> VibeResult<String> {
        write!(self.output, "{question}").map_err(prompt_error)?;
        self.output.flush().map_err(prompt_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(prompt_error)?;
        if read == 0 {
            trace!("Input closed, answering with empty line");
            // Keep the transcript readable when input is piped.
            writeln!(self.output).map_err(prompt_error)?;
            return Ok(String::new());
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

fn prompt_error(e: io::Error) -> vibe_core::error::VibeError {
    ApplicationError::Prompt {
        reason: e.to_string(),
    }
    .into()
}
