//! Vibe Core - questionnaire to project configuration pipeline.
//!
//! This crate provides the domain and application layers for the Vibe
//! project kit, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   vibe-cli (vibe-generate, quick-setup) │
//! │        (Drives the SetupService)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  QuestionRunner → synthesis → Context-  │
//! │  Materializer, chained by SetupService  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │          (Prompter, Filesystem)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     vibe-adapters (Infrastructure)      │
//! │  (StdioPrompter, LocalFilesystem, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (AnswerSet, ProjectConfig, synthesizer) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vibe_core::{
//!     application::{Filesystem, Prompter, SetupPaths, SetupService},
//!     domain::SetupProfile,
//!     error::VibeResult,
//! };
//!
//! fn generate(prompter: impl Prompter, filesystem: impl Filesystem + 'static) -> VibeResult<()> {
//!     let paths = SetupPaths::in_dir("/work/my-app");
//!     let mut service = SetupService::new(prompter, Box::new(filesystem), paths);
//!     let outcome = service.run(SetupProfile::Full)?;
//!     println!("wrote {}", outcome.config_path.display());
//!     Ok(())
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ContextMaterializer, QuestionRunner, SetupOutcome, SetupPaths, SetupService,
        ports::{Filesystem, Prompter},
    };
    pub use crate::domain::{
        AnswerSet, ConfigSynthesizer, ContextDocument, FeatureAnswer, ProjectConfig,
        SetupProfile, TemplatePolicy,
    };
    pub use crate::error::{VibeError, VibeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
