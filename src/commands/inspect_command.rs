//! Header extraction command

use clap::ArgMatches;
use log::info;

use crate::api::HeaderExtractor;
use crate::commands::command_traits::Command;
use crate::commands::input_path;
use crate::config::HeaderConfig;
use crate::error::HeaderResult;

/// Prints the canonical header of a DEM or GeoTIFF file
pub struct InspectCommand {
    input_file: String,
    extractor: HeaderExtractor,
}

impl InspectCommand {
    pub fn new(args: &ArgMatches, config: HeaderConfig) -> HeaderResult<Self> {
        Ok(InspectCommand {
            input_file: input_path(args)?,
            extractor: HeaderExtractor::new(config),
        })
    }
}

impl Command for InspectCommand {
    fn execute(&self) -> HeaderResult<()> {
        info!("Inspecting file: {}", self.input_file);

        let header = self.extractor.read_path(&self.input_file)?;
        print!("{}", header);
        Ok(())
    }
}
