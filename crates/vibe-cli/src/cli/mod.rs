//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text.  No business logic lives here.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, CommandFactory, FromArgMatches, Parser};
use vibe_core::domain::SetupProfile;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Arguments of either executable. Name and about text are filled in per
/// profile by [`Cli::parse_for`].
#[derive(Debug, Parser)]
#[command(
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    long_about = None,
)]
pub struct Cli {
    /// Flags shared by both executables.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Where and how to write the results.
    #[command(flatten)]
    pub setup: SetupArgs,
}

/// Arguments controlling the outputs of a run.
#[derive(Debug, Args)]
pub struct SetupArgs {
    /// Project root holding the config file and the `.vibe` directory.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Project directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Print the generated config instead of writing any file.
    #[arg(long = "dry-run", help = "Print the config without writing files")]
    pub dry_run: bool,
}

impl Cli {
    /// Binary name for `profile`.
    pub const fn bin_name(profile: SetupProfile) -> &'static str {
        match profile {
            SetupProfile::Full => "vibe-generate",
            SetupProfile::Quick => "vibe-quick-setup",
        }
    }

    /// The clap command with profile-specific name and help text.
    pub fn command_for(profile: SetupProfile) -> clap::Command {
        let (about, after_help) = match profile {
            SetupProfile::Full => (
                "\u{1f680} Generate a project config and AI context from a full questionnaire",
                "EXAMPLES:\n\
                 \x20 vibe-generate\n\
                 \x20 vibe-generate --dir ../my-app\n\
                 \x20 vibe-generate --dry-run > preview.json",
            ),
            SetupProfile::Quick => (
                "\u{1f680} Quick project setup: five questions, sensible defaults",
                "EXAMPLES:\n\
                 \x20 vibe-quick-setup\n\
                 \x20 vibe-quick-setup --dir ../my-app -v",
            ),
        };
        let name = Self::bin_name(profile);
        Self::command()
            .name(name)
            .bin_name(name)
            .about(about)
            .after_help(after_help)
    }

    /// Parse `args` for the executable serving `profile`.
    pub fn parse_for<I, T>(profile: SetupProfile, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = Self::command_for(profile);
        let matches = command.try_get_matches_from_mut(args)?;
        Self::from_arg_matches(&matches).map_err(|e| e.format(&mut command))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        Cli::command_for(SetupProfile::Full).debug_assert();
        Cli::command_for(SetupProfile::Quick).debug_assert();
    }

    #[test]
    fn no_arguments_required() {
        let cli = Cli::parse_for(SetupProfile::Full, ["vibe-generate"]).unwrap();
        assert!(cli.setup.dir.is_none());
        assert!(!cli.setup.dry_run);
        assert_eq!(cli.global.verbose, 0);
    }

    #[test]
    fn parses_dir_and_dry_run() {
        let cli = Cli::parse_for(
            SetupProfile::Quick,
            ["vibe-quick-setup", "--dir", "/tmp/app", "--dry-run", "-vv"],
        )
        .unwrap();
        assert_eq!(cli.setup.dir, Some(PathBuf::from("/tmp/app")));
        assert!(cli.setup.dry_run);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::parse_for(SetupProfile::Full, ["vibe-generate", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_named_after_binary() {
        assert_eq!(Cli::command_for(SetupProfile::Full).get_name(), "vibe-generate");
        assert_eq!(
            Cli::command_for(SetupProfile::Quick).get_name(),
            "vibe-quick-setup"
        );
    }
}
