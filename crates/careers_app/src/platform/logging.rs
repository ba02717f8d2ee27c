//! Platform logging initialization for careers_app.
//!
//! Stdout carries rendered markup, so terminal logging goes to stderr. File
//! logging writes `./careers.log` in the current working directory.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "./careers.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    File,
    Stderr,
    Both,
}

/// Initialize the global logger. Safe to call more than once; later calls are ignored.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File => match create_file_logger(level, config) {
            Some(file_logger) => vec![file_logger],
            None => return,
        },
        LogDestination::Stderr => vec![stderr_logger(level, config)],
        LogDestination::Both => {
            let mut loggers = vec![stderr_logger(level, config.clone())];
            if let Some(file_logger) = create_file_logger(level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

/// Reads `CAREERS_LOG` (`error`, `warn`, `info`, `debug`, `trace`); defaults to info.
pub fn level_from_env() -> LevelFilter {
    std::env::var("CAREERS_LOG")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Reads `CAREERS_LOG_TO` (`stderr`, `file`, `both`); defaults to stderr.
pub fn destination_from_env() -> LogDestination {
    std::env::var("CAREERS_LOG_TO")
        .ok()
        .and_then(|value| parse_destination(&value))
        .unwrap_or(LogDestination::Stderr)
}

fn parse_destination(value: &str) -> Option<LogDestination> {
    match value.trim().to_ascii_lowercase().as_str() {
        "stderr" => Some(LogDestination::Stderr),
        "file" => Some(LogDestination::File),
        "both" => Some(LogDestination::Both),
        _ => None,
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn stderr_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<dyn SharedLogger>> {
    let log_path = PathBuf::from(LOG_FILENAME);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
