//! Setup Service - the questionnaire → config → context pipeline.
//!
//! One pipeline serves both the full generator and quick setup; the
//! [`SetupProfile`] picks the question set, default table and template
//! policy.

use chrono::{NaiveDate, Utc};
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, Prompter},
        services::{
            context_materializer::{ContextMaterializer, SetupPaths},
            question_runner::QuestionRunner,
        },
    },
    domain::{ConfigSynthesizer, ProjectConfig, SetupProfile},
    error::VibeResult,
};

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupOutcome {
    pub config: ProjectConfig,
    pub config_path: std::path::PathBuf,
    /// `None` when quick setup found no template to update.
    pub context_path: Option<std::path::PathBuf>,
}

/// Main pipeline service.
pub struct SetupService<P> {
    runner: QuestionRunner<P>,
    materializer: ContextMaterializer,
    today: Option<NaiveDate>,
}

impl<P: Prompter> SetupService<P> {
    pub fn new(prompter: P, filesystem: Box<dyn Filesystem>, paths: SetupPaths) -> Self {
        Self {
            runner: QuestionRunner::new(prompter),
            materializer: ContextMaterializer::new(filesystem, paths),
            today: None,
        }
    }

    /// Pin the date stamped into metadata instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Ask, synthesize and persist.
    #[instrument(skip(self))]
    pub fn run(&mut self, profile: SetupProfile) -> VibeResult<SetupOutcome> {
        let config = self.preview(profile)?;
        let written = self
            .materializer
            .materialize(&config, profile.template_policy())?;

        info!(%profile, "Setup completed");
        Ok(SetupOutcome {
            config,
            config_path: written.config_path,
            context_path: written.context_path,
        })
    }

    /// Ask and synthesize without touching the filesystem.
    pub fn preview(&mut self, profile: SetupProfile) -> VibeResult<ProjectConfig> {
        let answers = self.runner.collect(profile)?;
        let today = self.today.unwrap_or_else(|| Utc::now().date_naive());
        Ok(ConfigSynthesizer::synthesize(&answers, profile, today))
    }

    /// Give back the prompter (tests read the transcript from it).
    pub fn into_prompter(self) -> P {
        self.runner.into_inner()
    }
}
