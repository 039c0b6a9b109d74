//! Georeferencing tag dump command

use std::fs;

use clap::ArgMatches;
use log::info;

use crate::api::HeaderExtractor;
use crate::commands::command_traits::Command;
use crate::commands::input_path;
use crate::error::HeaderResult;

/// Prints the dimensions and model tags of a GeoTIFF, before any resolution
pub struct TagsCommand {
    input_file: String,
    extractor: HeaderExtractor,
}

impl TagsCommand {
    pub fn new(args: &ArgMatches) -> HeaderResult<Self> {
        Ok(TagsCommand {
            input_file: input_path(args)?,
            extractor: HeaderExtractor::default(),
        })
    }
}

impl Command for TagsCommand {
    fn execute(&self) -> HeaderResult<()> {
        info!("Dumping GeoTIFF tags of {}", self.input_file);

        let bytes = fs::read(&self.input_file)?;
        let image = self.extractor.decode_tags(&bytes)?;
        print!("{}", image);
        Ok(())
    }
}
