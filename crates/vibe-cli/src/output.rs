//! Output management and formatting.
//!
//! The questionnaire itself talks to the terminal through the prompter;
//! this module only prints what comes after it: the run summary, next
//! steps and the dry-run document.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Visual weight of a summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Success,
    Warning,
    Hint,
    Header,
}

/// Writes the end-of-run summary to stdout.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    /// The dry-run document. Never suppressed, never styled.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Plain, msg)
    }

    /// Green line; the message carries its own marker.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Success, msg)
    }

    /// `⚠ <msg>` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Warning, msg)
    }

    /// Dimmed follow-up hint.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Hint, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(Tone::Header, text)
    }

    /// `<label>: <path>` with the path emphasised.
    pub fn path_line(&self, label: &str, path: &Path) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let shown = path.display().to_string();
        let line = if self.no_color {
            format!("{label}: {shown}")
        } else {
            format!("{label}: {}", shown.bold())
        };
        self.term.write_line(&line)
    }

    fn emit(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.render(tone, msg))
    }

    fn render(&self, tone: Tone, msg: &str) -> String {
        match (tone, self.no_color) {
            (Tone::Plain, _) => msg.to_owned(),
            (Tone::Warning, true) => format!("\u{26a0} {msg}"),
            (_, true) => msg.to_owned(),
            (Tone::Success, false) => msg.green().bold().to_string(),
            (Tone::Warning, false) => {
                format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
            }
            (Tone::Hint, false) => msg.dimmed().to_string(),
            (Tone::Header, false) => msg.cyan().bold().to_string(),
        }
    }
}
