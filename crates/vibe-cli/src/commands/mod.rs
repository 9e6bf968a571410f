//! Command implementations. Both executables run the same setup command
//! with a different profile.

pub mod setup;
