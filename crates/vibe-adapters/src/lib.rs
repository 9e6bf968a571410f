//! Infrastructure adapters for the vibe kit.
//!
//! This crate implements the ports defined in `vibe-core::application::ports`.
//! It contains all terminal and filesystem I/O.

pub mod filesystem;
pub mod prompter;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompter::{ScriptedPrompter, StdioPrompter};
