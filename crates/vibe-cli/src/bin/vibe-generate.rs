//! `vibe-generate`: the full project questionnaire.

use std::process::ExitCode;

use vibe_core::domain::SetupProfile;

fn main() -> ExitCode {
    vibe_cli::main_for(SetupProfile::Full)
}
