use clap::{Arg, ArgAction, Command as ClapCommand};
use log::{error, LevelFilter};
use std::process;

use rasterheader::commands::{CommandFactory, RasterheaderCommandFactory};
use rasterheader::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("rasterheader")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract grid size and georeferencing from ASCII grid DEMs and GeoTIFF files")
        .arg(
            Arg::new("input")
                .help("Input .dem, .asc, .tif or .tiff file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML settings file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("scan-limit")
                .long("scan-limit")
                .help("Leading bytes scanned for an ASCII grid header")
                .value_name("BYTES")
                .required(false),
        )
        .arg(
            Arg::new("require-origin-tiepoint")
                .long("require-origin-tiepoint")
                .help("Reject GeoTIFF tie points that do not anchor pixel (0, 0)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tags")
                .long("tags")
                .help("Print the decoded GeoTIFF georeferencing tags instead of the header")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log records to this file")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Warn };
    let log_file = matches.get_one::<String>("log-file").map(String::as_str);
    if let Err(e) = Logger::init_global_logger(level, log_file) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = RasterheaderCommandFactory::new();

    match factory.create_command(&matches) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
