//! Application layer for the vibe kit.
//!
//! This layer contains:
//! - **Services**: the three pipeline stages and the service chaining them
//! - **Ports**: Interface definitions (traits) for terminal and filesystem
//! - **Errors**: Application-specific error types
//!
//! Business rules (defaults, derivations, substitution) live in
//! `crate::domain`; services here only move data between ports and domain.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ContextMaterializer, Materialized, QuestionRunner, SetupOutcome, SetupPaths, SetupService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Prompter};

pub use error::ApplicationError;
