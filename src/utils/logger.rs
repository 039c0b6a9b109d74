//! Logger for the command-line tool
//!
//! Implements the `log` facade: records go to stderr so they never mix
//! with the header printed on stdout, and optionally to a log file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{LevelFilter, Log, Metadata, Record};

pub struct Logger {
    /// Optional log file
    file: Mutex<Option<File>>,
    /// Most verbose level that is emitted
    level: LevelFilter,
}

impl Logger {
    /// Creates a logger, truncating `log_file` if one is given
    pub fn new(level: LevelFilter, log_file: Option<&str>) -> io::Result<Self> {
        let file = match log_file {
            Some(path) => Some(File::create(Path::new(path))?),
            None => None,
        };

        Ok(Logger {
            file: Mutex::new(file),
            level,
        })
    }

    fn write_to_file(&self, message: &str) -> io::Result<()> {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                writeln!(file, "{}", message)?;
            }
        }
        Ok(())
    }

    /// Installs a logger as the global `log` backend
    pub fn init_global_logger(level: LevelFilter, log_file: Option<&str>) -> io::Result<()> {
        let logger = Logger::new(level, log_file)?;

        if log::set_boxed_logger(Box::new(logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.write_to_file(&message);
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
    }
}
