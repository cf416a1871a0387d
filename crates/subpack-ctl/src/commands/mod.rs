//! Command handlers for the subpack CLI.
//!
//! Each module handles one subcommand, delegating to the `subpack` library
//! for the actual filesystem work.

pub(crate) mod clean;
pub(crate) mod generate;

pub(crate) use clean::handle_clean_command;
pub(crate) use generate::handle_generate_command;
