//! Command-line argument definitions for the timetable processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_LOG_LEVEL;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the timetable processor
///
/// Parses the extracted text and table grid of a university timetable into
/// a structured weekly schedule with professor and subject indices.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "timetable-processor",
    version,
    about = "Parse extracted university timetables into structured weekly schedules",
    long_about = "Reads a JSON extraction of one timetable document (its raw text and its \
                  table grid), parses the header and every session cell, and writes the \
                  resulting schedule document as JSON. When the grid yields no session the \
                  raw text can be handed to an external fallback extraction service."
)]
pub struct Args {
    /// Input extraction file
    ///
    /// JSON object with a `text` string and a `table` array of rows, each
    /// row an array of cell strings or nulls.
    #[arg(value_name = "INPUT", help = "Extraction JSON file to process")]
    pub input: PathBuf,

    /// Output file for the schedule document
    ///
    /// If not specified, the document is written to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the schedule document to this file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// JSON file overriding the column layout, institution name or fallback
    /// service. Absent keys keep their defaults.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Fallback extraction service base URL
    ///
    /// Overrides the configuration file and the TIMETABLE_FALLBACK_URL
    /// environment variable.
    #[arg(
        long = "fallback-url",
        value_name = "URL",
        help = "Base URL of the fallback extraction service",
        conflicts_with = "no_fallback"
    )]
    pub fallback_url: Option<String>,

    /// Never call the fallback service, even when one is configured
    #[arg(long = "no-fallback", help = "Disable the fallback extraction service")]
    pub no_fallback: bool,

    /// Pretty-print the output JSON
    #[arg(long = "pretty", help = "Pretty-print the output JSON")]
    pub pretty: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose", help = "Enable debug logging")]
    pub verbose: bool,

    /// Suppress output (quiet mode)
    ///
    /// Only show warnings and errors, and skip the run summary.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except warnings and errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            DEFAULT_LOG_LEVEL
        }
    }

    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::input_not_found(&self.input));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(url) = &self.fallback_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::configuration(format!(
                    "Fallback URL must start with http:// or https://: {}",
                    url
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn parse(extra: &[&str], input: &str) -> Args {
        let mut argv = vec!["timetable-processor", input];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_default_arguments() {
        let args = parse(&[], "timetable.json");

        assert_eq!(args.input, PathBuf::from("timetable.json"));
        assert!(args.output.is_none());
        assert!(args.config_file.is_none());
        assert!(!args.pretty);
        assert!(!args.no_fallback);
        assert_eq!(args.get_log_level(), "info");
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(parse(&["-v"], "in.json").get_log_level(), "debug");
        assert_eq!(parse(&["--quiet"], "in.json").get_log_level(), "warn");
    }

    #[test]
    fn test_conflicting_flags() {
        let result = Args::try_parse_from(["timetable-processor", "in.json", "-v", "-q"]);
        assert!(result.is_err());

        let result = Args::try_parse_from([
            "timetable-processor",
            "in.json",
            "--no-fallback",
            "--fallback-url",
            "http://localhost:5000",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_missing_input() {
        let args = parse(&[], "/nonexistent/timetable.json");
        assert!(matches!(args.validate(), Err(Error::InputNotFound { .. })));
    }

    #[test]
    fn test_validate_fallback_url() {
        let input = NamedTempFile::new().unwrap();
        let path = input.path().to_str().unwrap();

        let args = parse(&["--fallback-url", "localhost:5000"], path);
        assert!(matches!(args.validate(), Err(Error::Configuration { .. })));

        let args = parse(&["--fallback-url", "http://localhost:5000"], path);
        assert!(args.validate().is_ok());
    }
}
