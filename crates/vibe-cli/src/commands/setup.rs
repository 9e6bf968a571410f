//! Implementation of the setup run shared by `vibe-generate` and
//! `vibe-quick-setup`.
//!
//! Responsibility: resolve where outputs go, wire the adapters into the
//! core `SetupService`, and display results. No business logic lives here.

use std::io;
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use vibe_adapters::{LocalFilesystem, StdioPrompter};
use vibe_core::{
    application::{ApplicationError, SetupOutcome, SetupService},
    domain::SetupProfile,
    error::VibeError,
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute one questionnaire session.
///
/// Dispatch sequence:
/// 1. Resolve the project directory and output paths
/// 2. Ask the questions through stdin/stdout (stderr on a dry run)
/// 3. Dry run: print the document and stop
/// 4. Otherwise persist config and context, then print a summary
#[instrument(skip_all, fields(%profile))]
pub fn execute(
    profile: SetupProfile,
    cli: Cli,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve output locations
    let base = resolve_base_dir(cli.setup.dir)?;
    let paths = config.setup_paths(&base);
    debug!(
        config_file = %paths.config_file.display(),
        context_file = %paths.context_file.display(),
        "Output paths resolved"
    );

    // 2 + 3. Dry run: questionnaire on stderr, document alone on stdout
    if cli.setup.dry_run {
        let prompter = StdioPrompter::new(io::stdin().lock(), io::stderr());
        let mut service =
            SetupService::new(prompter, Box::new(LocalFilesystem::new()), paths);
        let document = service
            .preview(profile)
            .with_cli_context(|| "collecting answers")?
            .to_json_pretty()
            .map_err(|e| {
                CliError::Core(VibeError::from(ApplicationError::Serialization {
                    reason: e.to_string(),
                }))
            })?;
        output.data(&document)?;
        return Ok(());
    }

    let mut service = SetupService::new(
        StdioPrompter::stdio(),
        Box::new(LocalFilesystem::new()),
        paths,
    );

    // 2 + 4. Full run
    let outcome = service.run(profile).with_cli_context(|| "running setup")?;
    info!(
        project = %outcome.config.metadata.name,
        config = %outcome.config_path.display(),
        "Outputs written"
    );

    match profile {
        SetupProfile::Full => report_full(&outcome, &output)?,
        SetupProfile::Quick => report_quick(&outcome, &output)?,
    }

    Ok(())
}

/// `--dir` if given, else the working directory.
fn resolve_base_dir(dir: Option<PathBuf>) -> CliResult<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().with_cli_context(|| "reading the current directory"),
    }
}

fn report_full(outcome: &SetupOutcome, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.success("\u{2705} Project configuration generated!")?;
    output.path_line("\u{1f4c4} Config", &outcome.config_path)?;
    if let Some(context) = &outcome.context_path {
        output.path_line("\u{1f916} AI Context", context)?;
    }
    Ok(())
}

fn report_quick(outcome: &SetupOutcome, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.success("\u{2705} Quick setup complete!")?;
    output.path_line("\u{1f4c4} Config saved", &outcome.config_path)?;
    match &outcome.context_path {
        Some(context) => {
            output.path_line("\u{1f916} AI context updated", context)?;
            output.print("")?;
            output.header("\u{1f3af} AI agents can now understand your project instantly!")?;
        }
        None => output.warning("No AI context template found; skipped context update")?,
    }

    output.print("")?;
    output.print("Next steps:")?;
    output.info("- Review the generated config and commit it with your project")?;
    output.info(&format!(
        "- For full setup: {}",
        Cli::bin_name(SetupProfile::Full)
    ))?;
    Ok(())
}
