//! Prompter adapters.

mod scripted;
mod stdio;

pub use scripted::ScriptedPrompter;
pub use stdio::StdioPrompter;
