//! Main processing engine.
//!
//! Orchestrates one document run: header parsing and schedule building
//! from the raw extraction, then entity aggregation and statistics on the
//! built schedule. When the grid yields no session at all the run escalates
//! to the fallback service, if one is configured.

use crate::app::models::{
    HeaderInfo, RawExtraction, ScheduleDocument, WeeklySchedule, default_time_slots,
};
use crate::app::services::analysis::{aggregate, compute};
use crate::app::services::fallback_client::FallbackService;
use crate::app::services::header_parser::HeaderParser;
use crate::app::services::schedule_builder::{BuildStats, ScheduleBuilder};
use crate::config::TimetableConfig;
use crate::{Error, Result};

use std::time::Instant;
use tracing::{debug, info, warn};

/// Where the document of a run came from
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    /// Parsed from the table grid
    Structural(BuildStats),
    /// Returned by the fallback extraction service
    Fallback,
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub document: ScheduleDocument,
    pub source: DocumentSource,
    pub processing_time_ms: u128,
}

impl ProcessOutcome {
    pub fn used_fallback(&self) -> bool {
        self.source == DocumentSource::Fallback
    }
}

/// Timetable processor for one document template
#[derive(Debug, Default)]
pub struct ScheduleProcessor {
    header_parser: HeaderParser,
    builder: ScheduleBuilder,
}

impl ScheduleProcessor {
    /// Create a processor from configuration
    pub fn new(config: &TimetableConfig) -> Self {
        Self {
            header_parser: HeaderParser::new(config.institution.clone()),
            builder: ScheduleBuilder::new(config.column_layout.clone()),
        }
    }

    /// Parse one extraction into a complete document
    pub fn process(&self, extraction: &RawExtraction) -> Result<ScheduleDocument> {
        self.process_with_stats(extraction).map(|(document, _)| document)
    }

    /// Parse one extraction, also returning the build statistics
    pub fn process_with_stats(
        &self,
        extraction: &RawExtraction,
    ) -> Result<(ScheduleDocument, BuildStats)> {
        if extraction.is_empty() {
            return Err(Error::extraction_failure(
                "document yielded neither text nor table rows",
            ));
        }

        let header = self.header_parser.parse(&extraction.text);
        let (schedule, stats) = self.builder.build_with_stats(&extraction.table);

        if !stats.found_sessions() {
            return Err(Error::no_sessions_found(stats.rows_scanned));
        }

        Ok((assemble_document(header, schedule), stats))
    }

    /// Parse one extraction, escalating to the fallback service when the
    /// grid holds no session
    pub async fn run(
        &self,
        extraction: &RawExtraction,
        fallback: Option<&dyn FallbackService>,
    ) -> Result<ProcessOutcome> {
        let start_time = Instant::now();

        let (document, source) = match self.process_with_stats(extraction) {
            Ok((document, stats)) => (document, DocumentSource::Structural(stats)),
            Err(error) if error.triggers_fallback() => {
                let Some(service) = fallback else {
                    return Err(error);
                };
                warn!("{}; trying fallback extraction", error);
                let document = service.extract(&extraction.text).await?;
                (document, DocumentSource::Fallback)
            }
            Err(error) => return Err(error),
        };

        let processing_time_ms = start_time.elapsed().as_millis();
        info!(
            "Processed document: {} sessions, {} subjects, {} professors in {}ms",
            document.statistics.total_sessions,
            document.statistics.total_subjects,
            document.statistics.total_professors,
            processing_time_ms
        );

        Ok(ProcessOutcome {
            document,
            source,
            processing_time_ms,
        })
    }
}

/// Derive indices and statistics and assemble the output document
pub fn assemble_document(header: HeaderInfo, schedule: WeeklySchedule) -> ScheduleDocument {
    let (professors, subjects) = aggregate(&schedule);
    let statistics = compute(&schedule, &professors, &subjects);
    debug!("Statistics: {:?}", statistics);

    ScheduleDocument {
        header,
        time_slots: default_time_slots(),
        professors,
        subjects,
        weekly_schedule: schedule,
        statistics,
    }
}
