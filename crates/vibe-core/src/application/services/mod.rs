//! Application services - the pipeline stages.
//!
//! `QuestionRunner` (I/O through `Prompter`) feeds the pure
//! `ConfigSynthesizer`, whose output `ContextMaterializer` persists through
//! `Filesystem`. `SetupService` chains the three.

pub mod context_materializer;
pub mod question_runner;
pub mod setup_service;

pub use context_materializer::{
    ContextMaterializer, DEFAULT_CONFIG_FILE, DEFAULT_CONTEXT_FILE, Materialized, SetupPaths,
};
pub use question_runner::QuestionRunner;
pub use setup_service::{SetupOutcome, SetupService};
