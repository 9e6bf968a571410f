//! Flags common to `vibe-generate` and `vibe-quick-setup`.

use std::path::PathBuf;

use clap::{ArgAction, Args, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more to stderr: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and skip the summary printed after the questions.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the summary without ANSI colours (also set by `NO_COLOR`).
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Settings file layered over the user config; `VIBE_*` variables
    /// still override it.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
