//! Command pattern interfaces for the CLI

use clap::ArgMatches;

use crate::error::HeaderResult;

/// An executable CLI operation
pub trait Command {
    /// Runs the command, printing its result to stdout
    fn execute(&self) -> HeaderResult<()>;
}

/// Builds the command selected by the CLI arguments
pub trait CommandFactory {
    fn create_command(&self, args: &ArgMatches) -> HeaderResult<Box<dyn Command>>;
}
