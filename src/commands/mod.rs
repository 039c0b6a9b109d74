//! CLI command implementations

pub mod command_traits;
pub mod inspect_command;
pub mod tags_command;

pub use command_traits::{Command, CommandFactory};
pub use inspect_command::InspectCommand;
pub use tags_command::TagsCommand;

use clap::ArgMatches;

use crate::config::HeaderConfig;
use crate::error::{HeaderError, HeaderResult};
use crate::georeference::TiePointPolicy;

/// Picks the command to run from the CLI arguments
pub struct RasterheaderCommandFactory;

impl RasterheaderCommandFactory {
    pub fn new() -> Self {
        RasterheaderCommandFactory
    }
}

impl Default for RasterheaderCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for RasterheaderCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> HeaderResult<Box<dyn Command>> {
        if args.get_flag("tags") {
            Ok(Box::new(TagsCommand::new(args)?))
        } else {
            Ok(Box::new(InspectCommand::new(args, config_from_args(args)?)?))
        }
    }
}

pub(crate) fn input_path(args: &ArgMatches) -> HeaderResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| HeaderError::ConfigError("Missing input file".to_string()))
}

/// Config file (if any) overridden by explicit flags
pub fn config_from_args(args: &ArgMatches) -> HeaderResult<HeaderConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => HeaderConfig::from_file(path)?,
        None => HeaderConfig::default(),
    };

    if let Some(limit) = args.get_one::<String>("scan-limit") {
        config.scan_limit = limit
            .parse::<usize>()
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or_else(|| HeaderError::ConfigError(format!("Invalid scan limit: {}", limit)))?;
    }

    if args.get_flag("require-origin-tiepoint") {
        config.tie_point_policy = TiePointPolicy::RequireOrigin;
    }

    Ok(config)
}
