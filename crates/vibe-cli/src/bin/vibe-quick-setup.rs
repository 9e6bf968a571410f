//! `vibe-quick-setup`: five questions, sensible defaults for the rest.

use std::process::ExitCode;

use vibe_core::domain::SetupProfile;

fn main() -> ExitCode {
    vibe_cli::main_for(SetupProfile::Quick)
}
