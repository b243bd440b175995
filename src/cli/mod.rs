//! CLI subcommand implementations for the edgarwatch binary.

pub mod prompt;
pub mod run_cmd;
pub mod setup_cmd;
pub mod teardown_cmd;
