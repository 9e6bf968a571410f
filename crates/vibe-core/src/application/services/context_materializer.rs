//! Context Materializer - persists the config and the AI context document.
//!
//! Order of work:
//! 1. Load the template (per [`TemplatePolicy`])
//! 2. Write the serialized config
//! 3. Write the substituted context document
//!
//! Loading first means a missing required template aborts before anything
//! is written. There is no rollback: a failure in step 3 leaves the config
//! from step 2 in place.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ContextDocument, ProjectConfig, TemplatePolicy},
    error::VibeResult,
};

/// Default config file name, relative to the base directory.
pub const DEFAULT_CONFIG_FILE: &str = "vibe-project.config.json";

/// Default AI context document, relative to the base directory.
pub const DEFAULT_CONTEXT_FILE: &str = ".vibe/ai-context.md";

/// Where the two outputs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPaths {
    pub config_file: PathBuf,
    pub context_file: PathBuf,
}

impl SetupPaths {
    /// Default file names under `base`.
    pub fn in_dir(base: impl AsRef<Path>) -> Self {
        Self::new(base, DEFAULT_CONFIG_FILE, DEFAULT_CONTEXT_FILE)
    }

    /// Custom file names under `base`. Absolute names ignore `base`.
    pub fn new(
        base: impl AsRef<Path>,
        config_file: impl AsRef<Path>,
        context_file: impl AsRef<Path>,
    ) -> Self {
        let base = base.as_ref();
        Self {
            config_file: base.join(config_file),
            context_file: base.join(context_file),
        }
    }
}

/// What was written by one materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    pub config_path: PathBuf,
    /// `None` when an optional template was absent.
    pub context_path: Option<PathBuf>,
}

pub struct ContextMaterializer {
    filesystem: Box<dyn Filesystem>,
    paths: SetupPaths,
}

impl ContextMaterializer {
    pub fn new(filesystem: Box<dyn Filesystem>, paths: SetupPaths) -> Self {
        Self { filesystem, paths }
    }

    /// Persist `config` and the substituted context document.
    #[instrument(skip_all, fields(config = %self.paths.config_file.display()))]
    pub fn materialize(
        &self,
        config: &ProjectConfig,
        policy: TemplatePolicy,
    ) -> VibeResult<Materialized> {
        let template = self.load_template(policy)?;

        let json = config
            .to_json_pretty()
            .map_err(|e| ApplicationError::Serialization {
                reason: e.to_string(),
            })?;
        self.filesystem.write_file(&self.paths.config_file, &json)?;
        info!(path = %self.paths.config_file.display(), "Project config written");

        let context_path = match template {
            Some(template) => {
                let document = ContextDocument::substitute(&template, &config.metadata);
                self.filesystem
                    .write_file(&self.paths.context_file, &document)?;
                info!(path = %self.paths.context_file.display(), "AI context updated");
                Some(self.paths.context_file.clone())
            }
            None => None,
        };

        Ok(Materialized {
            config_path: self.paths.config_file.clone(),
            context_path,
        })
    }

    fn load_template(&self, policy: TemplatePolicy) -> VibeResult<Option<String>> {
        let path = &self.paths.context_file;
        if self.filesystem.exists(path) {
            return self.filesystem.read_to_string(path).map(Some);
        }

        match policy {
            TemplatePolicy::Required => Err(ApplicationError::ContextNotFound {
                path: path.clone(),
            }
            .into()),
            TemplatePolicy::Optional => {
                info!(path = %path.display(), "No AI context template, skipping");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::predicate::{always, eq};

    use super::*;
    use crate::{
        application::ports::MockFilesystem,
        domain::{AnswerSet, ConfigSynthesizer, SetupProfile},
        error::VibeError,
    };

    fn config() -> ProjectConfig {
        let answers = AnswerSet {
            name: "Foo".into(),
            ..AnswerSet::empty()
        };
        let day = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        ConfigSynthesizer::synthesize(&answers, SetupProfile::Full, day)
    }

    fn paths() -> SetupPaths {
        SetupPaths::in_dir("/work")
    }

    #[test]
    fn paths_resolve_under_base() {
        let p = paths();
        assert_eq!(p.config_file, PathBuf::from("/work/vibe-project.config.json"));
        assert_eq!(p.context_file, PathBuf::from("/work/.vibe/ai-context.md"));
    }

    #[test]
    fn required_template_missing_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_write_file().never();

        let m = ContextMaterializer::new(Box::new(fs), paths());
        let err = m.materialize(&config(), TemplatePolicy::Required).unwrap_err();
        assert!(matches!(
            err,
            VibeError::Application(ApplicationError::ContextNotFound { .. })
        ));
    }

    #[test]
    fn optional_template_missing_writes_config_only() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_write_file()
            .with(eq(PathBuf::from("/work/vibe-project.config.json")), always())
            .times(1)
            .returning(|_, _| Ok(()));

        let m = ContextMaterializer::new(Box::new(fs), paths());
        let out = m.materialize(&config(), TemplatePolicy::Optional).unwrap();
        assert_eq!(out.context_path, None);
    }

    #[test]
    fn template_is_substituted_and_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("Project: [PROJECT_NAME] ([STATUS])".to_string()));
        fs.expect_write_file()
            .with(eq(PathBuf::from("/work/vibe-project.config.json")), always())
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .with(
                eq(PathBuf::from("/work/.vibe/ai-context.md")),
                eq("Project: Foo (planning)"),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        let m = ContextMaterializer::new(Box::new(fs), paths());
        let out = m.materialize(&config(), TemplatePolicy::Required).unwrap();
        assert_eq!(out.context_path, Some(PathBuf::from("/work/.vibe/ai-context.md")));
    }

    #[test]
    fn config_write_failure_propagates() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string().returning(|_| Ok(String::new()));
        fs.expect_write_file().times(1).returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into())
        });

        let m = ContextMaterializer::new(Box::new(fs), paths());
        let err = m.materialize(&config(), TemplatePolicy::Required).unwrap_err();
        assert!(err.to_string().contains("Permission denied"));
    }
}
