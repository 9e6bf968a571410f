//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the resolved
//! [`SetupPaths`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--dir`, `--no-color`; handled at the call-site)
//! 2. Environment variables: `VIBE_PATHS__CONFIG_FILE`, `VIBE_OUTPUT__NO_COLOR`, ...
//! 3. File passed with `--config` (must exist)
//! 4. User config file in the platform config directory (optional)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vibe_core::application::{
    SetupPaths,
    services::{DEFAULT_CONFIG_FILE, DEFAULT_CONTEXT_FILE},
};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output locations, relative to the project directory.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    pub config_file: PathBuf,
    pub context_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
                context_file: PathBuf::from(DEFAULT_CONTEXT_FILE),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering files and environment over defaults.
    ///
    /// `config_file` is the path the user passed via `--config`.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(Self::config_path().as_deref(), config_file.map(PathBuf::as_path))
    }

    fn load_from(user_file: Option<&Path>, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default(
                "paths.config_file",
                defaults.paths.config_file.to_string_lossy().into_owned(),
            )?
            .set_default(
                "paths.context_file",
                defaults.paths.context_file.to_string_lossy().into_owned(),
            )?
            .set_default("output.no_color", defaults.output.no_color)?;

        if let Some(path) = user_file {
            debug!(path = %path.display(), "Looking for user config");
            builder = builder.add_source(File::from(path).required(false));
        }

        if let Some(path) = explicit {
            debug!(path = %path.display(), "Loading config file");
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("VIBE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Path to the per-user configuration file, if the platform has one.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "vibe", "vibe-kit")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Output locations anchored at `base`.
    pub fn setup_paths(&self, base: &Path) -> SetupPaths {
        SetupPaths::new(base, &self.paths.config_file, &self.paths.context_file)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn defaults_match_conventional_locations() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.paths.config_file, PathBuf::from("vibe-project.config.json"));
        assert_eq!(cfg.paths.context_file, PathBuf::from(".vibe/ai-context.md"));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_without_files_returns_defaults() {
        let cfg = AppConfig::load_from(None, None).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_user_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(Some(&dir.path().join("absent.toml")), None).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from(None, Some(&dir.path().join("absent.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn explicit_file_overrides_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("user.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(&user, "[paths]\ncontext_file = \"docs/user.md\"\n").unwrap();
        fs::write(
            &explicit,
            "[paths]\ncontext_file = \"docs/explicit.md\"\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(Some(&user), Some(&explicit)).unwrap();
        assert_eq!(cfg.paths.context_file, PathBuf::from("docs/explicit.md"));
        assert_eq!(cfg.paths.config_file, PathBuf::from("vibe-project.config.json"));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn setup_paths_are_anchored_at_base() {
        let paths = AppConfig::default().setup_paths(Path::new("/work/app"));
        assert_eq!(
            paths.config_file,
            PathBuf::from("/work/app/vibe-project.config.json")
        );
        assert_eq!(
            paths.context_file,
            PathBuf::from("/work/app/.vibe/ai-context.md")
        );
    }
}
