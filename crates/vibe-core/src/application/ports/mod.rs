//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `vibe-adapters` implement these.
//!
//! - `Prompter`: line-oriented question/answer channel
//! - `Filesystem`: read and overwrite whole files

use std::path::Path;

use crate::error::VibeResult;

/// Port for the interactive channel.
///
/// Implemented by:
/// - `vibe_adapters::prompter::StdioPrompter` (production)
/// - `vibe_adapters::prompter::ScriptedPrompter` (testing)
pub trait Prompter {
    /// Write one line (menu entry, heading, notice) to the output channel.
    fn say(&mut self, line: &str) -> VibeResult<()>;

    /// Write `question` and block until one line of input is available.
    ///
    /// Returns the line without its terminator. End of input yields an
    /// empty string.
    fn prompt(&mut self, question: &str) -> VibeResult<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn say(&mut self, line: &str) -> VibeResult<()> {
        (**self).say(line)
    }

    fn prompt(&mut self, question: &str) -> VibeResult<String> {
        (**self).prompt(question)
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `vibe_adapters::filesystem::LocalFilesystem` (production)
/// - `vibe_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Writes never create missing parent directories; a missing directory is a
/// write failure.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole UTF-8 file.
    fn read_to_string(&self, path: &Path) -> VibeResult<String>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> VibeResult<()>;
}
