use crate::core::report::Reporter;
use crate::core::{Pipeline, RunStage, ScrapeOutcome};
use crate::utils::error::ScrapeError;
use std::io::Write;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the pipeline once, printing notices to stdout.
    pub async fn run(&self) -> ScrapeOutcome {
        let mut reporter = Reporter::stdout();
        self.run_with_reporter(&mut reporter).await
    }

    /// Fetch, parse, write, report. Every stage failure is reported and the
    /// run degrades to fewer or zero records; nothing is propagated.
    pub async fn run_with_reporter<W: Write>(&self, reporter: &mut Reporter<W>) -> ScrapeOutcome {
        reporter.notice("Scraping Istanbul neighborhoods...");
        tracing::info!("Starting scrape");

        let outcome = self.scrape(reporter).await;
        reporter.summary(&outcome.records);

        tracing::info!(
            "Scrape finished at {:?} with {} records",
            outcome.stage,
            outcome.records.len()
        );
        outcome
    }

    async fn scrape<W: Write>(&self, reporter: &mut Reporter<W>) -> ScrapeOutcome {
        let html = match self.pipeline.extract().await {
            Ok(html) => html,
            Err(e) => {
                report_failure(reporter, &e);
                return ScrapeOutcome::empty(RunStage::Start);
            }
        };

        let records = match self.pipeline.transform(html).await {
            Ok(records) => records,
            Err(e) => {
                report_failure(reporter, &e);
                return ScrapeOutcome::empty(RunStage::Fetched);
            }
        };

        if records.is_empty() {
            tracing::warn!("Table contained no usable rows, nothing to write");
            return ScrapeOutcome::empty(RunStage::Parsed);
        }

        match self.pipeline.load(&records).await {
            Ok(path) => {
                tracing::info!("Output saved to: {}", path);
                reporter.saved(&path, records.len());
                ScrapeOutcome {
                    records,
                    output_path: Some(path),
                    stage: RunStage::Written,
                }
            }
            Err(e) => {
                report_failure(reporter, &e);
                ScrapeOutcome {
                    records,
                    output_path: None,
                    stage: RunStage::Parsed,
                }
            }
        }
    }
}

fn report_failure<W: Write>(reporter: &mut Reporter<W>, error: &ScrapeError) {
    tracing::error!(
        "{} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );
    tracing::debug!("Recovery suggestion: {}", error.recovery_suggestion());
    reporter.notice(&error.user_friendly_message());
}
