use crate::domain::{ExtractedContent, ProcessedContent, Report, RunSummary, SourceFile};
use crate::error::SubscriptionError;
use crate::extractor::extract;
use crate::ports::{Clock, ReportSink, Result, SubscriptionSource, TimestampStore};
use crate::report::format_report;
use crate::schedule::AutoUpdateSchedule;
use crate::utils::{format_file_size, format_zh_cn_timestamp};
use log::info;
use std::path::Path;

/// Application service driving a subscription file from intake to export
pub struct SubscriptionService {
    source: Box<dyn SubscriptionSource>,
    sink: Box<dyn ReportSink>,
    store: Box<dyn TimestampStore>,
    clock: Box<dyn Clock>,
    schedule: AutoUpdateSchedule,
}

impl SubscriptionService {
    /// Creates a new SubscriptionService with the given dependencies
    pub fn new(
        source: Box<dyn SubscriptionSource>,
        sink: Box<dyn ReportSink>,
        store: Box<dyn TimestampStore>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            source,
            sink,
            store,
            clock,
            schedule: AutoUpdateSchedule::default(),
        }
    }

    pub fn with_schedule(mut self, schedule: AutoUpdateSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Time of the last successful extraction, for display only
    pub fn last_processed(&self) -> Result<Option<String>> {
        self.store.load()
    }

    pub fn load(&self, path: &Path) -> Result<SourceFile> {
        let file = self.source.read(path)?;
        info!("Loaded {} ({})", file.name, format_file_size(file.size));
        Ok(file)
    }

    /// Extracts subscription lines and records the processing time
    pub fn process(&self, file: &SourceFile) -> Result<ProcessedContent> {
        let content = extract(&file.content).ok_or(SubscriptionError::NoValidContent)?;
        let processed_at = format_zh_cn_timestamp(&self.clock.now());
        self.store.save(&processed_at)?;
        Ok(ProcessedContent {
            content,
            processed_at,
        })
    }

    pub fn generate(&self, content: &ExtractedContent) -> Report {
        format_report(content, &self.clock.now(), &self.schedule)
    }

    pub fn export(&self, report: &Report) -> Result<String> {
        self.sink.deliver(report)
    }

    /// Executes the whole pipeline: load, process, generate and export
    pub fn run(&self, path: &Path) -> Result<RunSummary> {
        let file = self.load(path)?;
        let processed = self.process(&file)?;
        let report = self.generate(&processed.content);
        let destination = self.export(&report)?;

        info!("Exported {} links to {}", report.link_count, destination);
        Ok(RunSummary {
            source_name: file.name,
            source_size: file.size,
            link_count: report.link_count,
            processed_at: processed.processed_at,
            destination,
        })
    }
}
