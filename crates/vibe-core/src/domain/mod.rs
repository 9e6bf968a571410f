//! Core domain layer for the vibe kit.
//!
//! Pure logic only: no filesystem, no terminal. Answers come in as an
//! [`AnswerSet`], configuration goes out as a [`ProjectConfig`], and the
//! context document is plain string substitution.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: prompting and persistence are ports in `crate::application`
//! - **Deterministic**: the current date is an input, never read here
//! - **Immutable inputs**: synthesis only borrows the answers

pub mod answers;
pub mod context_document;
pub mod error;
pub mod profile;
pub mod project_config;
pub mod synthesis;
pub mod value_objects;

pub use answers::{AnswerSet, FeatureAnswer, MAX_FEATURES};
pub use context_document::{ContextDocument, Placeholder};
pub use error::{DomainError, ErrorCategory};
pub use profile::{SetupProfile, TemplatePolicy, quick_defaults};
pub use project_config::{
    Ai, AiContext, AiPrompts, Audience, CONFIG_VERSION, Deployment, Feature, Features,
    Integration, Metadata, PrimaryAudience, ProjectConfig, Requirements, SCHEMA_REF, Stack,
    Technical, Testing,
};
pub use synthesis::{ConfigSynthesizer, DEFAULT_CONSTRAINTS};
pub use value_objects::{
    Complexity, Device, Domain, Priority, ProjectStatus, ProjectType, TechnicalLevel,
    UNKNOWN_COMPLEXITY_HOURS, UsageFrequency, estimated_hours,
};
