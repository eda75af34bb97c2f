//! Command implementation for the timetable processor CLI
//!
//! Wires logging, layered configuration, input reading, the processing run
//! and output writing together.

use crate::app::models::RawExtraction;
use crate::app::services::fallback_client::{FallbackService, HttpFallbackClient};
use crate::cli::args::Args;
use crate::config::{FallbackConfig, TimetableConfig};
use crate::constants::LOG_TARGET;
use crate::processor::{DocumentSource, ProcessOutcome, ScheduleProcessor};
use crate::{Error, Result, ScheduleDocument};
use colored::*;
use std::path::Path;
use tracing::{debug, info};

/// Main command runner
///
/// 1. Set up logging and configuration
/// 2. Read and validate the extraction
/// 3. Process it, escalating to the fallback service if needed
/// 4. Write the document and report a summary
pub async fn run(args: Args) -> Result<ProcessOutcome> {
    // Environment from .env, if present
    dotenvy::dotenv().ok();

    setup_logging(&args)?;

    info!("Starting timetable processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let extraction = read_extraction(&args.input)?;
    info!(
        "Read extraction: {} text bytes, {} table rows",
        extraction.text.len(),
        extraction.table.len()
    );

    let processor = ScheduleProcessor::new(&config);
    let fallback = config.fallback.as_ref().map(HttpFallbackClient::new);
    let outcome = processor
        .run(
            &extraction,
            fallback.as_ref().map(|client| client as &dyn FallbackService),
        )
        .await?;

    write_document(&outcome.document, args.output.as_deref(), args.pretty)?;

    if !args.quiet {
        print_summary(&outcome);
    }

    Ok(outcome)
}

/// Set up structured logging
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<TimetableConfig> {
    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file given, using defaults and environment variables"),
    }

    let mut config = TimetableConfig::load_layered(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut TimetableConfig, args: &Args) {
    if let Some(url) = &args.fallback_url {
        config.fallback = Some(FallbackConfig::new(url.clone()));
    }
    if args.no_fallback {
        config.fallback = None;
    }
}

/// Read an extraction file
pub fn read_extraction(path: &Path) -> Result<RawExtraction> {
    if !path.exists() {
        return Err(Error::input_not_found(path));
    }

    let content = std::fs::read_to_string(path)?;
    let extraction: RawExtraction = serde_json::from_str(&content)?;
    Ok(extraction)
}

/// Serialize a document to JSON
pub fn render_document(document: &ScheduleDocument, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}

/// Write a document to a file, or to stdout when no file is given
pub fn write_document(
    document: &ScheduleDocument,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let json = render_document(document, pretty)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, json)?;
            info!("Wrote schedule document to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Print a human-readable run summary to stderr
pub fn print_summary(outcome: &ProcessOutcome) {
    let document = &outcome.document;
    let statistics = &document.statistics;

    eprintln!();
    eprintln!("{}", "Timetable processed".bright_green().bold());

    if !document.header.schedules_of.is_empty() {
        eprintln!(
            "  {} {}",
            "Program:".bright_white(),
            document.header.schedules_of.bright_cyan()
        );
    }
    if !document.header.college_year.is_empty() {
        eprintln!(
            "  {} {}",
            "Year:".bright_white(),
            document.header.college_year
        );
    }

    eprintln!(
        "  {} {}",
        "Sessions:".bright_white(),
        statistics.total_sessions.to_string().bright_yellow()
    );
    eprintln!(
        "  {} {}",
        "Subjects:".bright_white(),
        statistics.total_subjects.to_string().bright_yellow()
    );
    eprintln!(
        "  {} {}",
        "Professors:".bright_white(),
        statistics.total_professors.to_string().bright_yellow()
    );
    eprintln!(
        "  {} {}",
        "Active days:".bright_white(),
        statistics.active_days.to_string().bright_yellow()
    );

    match &outcome.source {
        DocumentSource::Structural(stats) => eprintln!(
            "  {} {} of {} rows resolved to a day ({:.1}%)",
            "Source:".bright_white(),
            stats.day_rows,
            stats.rows_scanned,
            stats.day_row_rate()
        ),
        DocumentSource::Fallback => eprintln!(
            "  {} {}",
            "Source:".bright_white(),
            "fallback extraction service".yellow()
        ),
    }

    eprintln!("  {} {}ms", "Time:".bright_white(), outcome.processing_time_ms);
}
