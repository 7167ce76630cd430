use crate::domain::model::{NeighborhoodRecord, ScrapeStats};
use std::io::Write;

/// User-facing notices of a run. Writes to stdout in the binary and to a
/// buffer in tests; a failing sink is logged and otherwise ignored.
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn notice(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{}", message) {
            tracing::warn!("Could not write notice to output: {}", e);
        }
    }

    pub fn saved(&mut self, path: &str, count: usize) {
        self.notice(&format!("Data saved to {}", path));
        self.notice(&format!("Total neighborhoods: {}", count));
    }

    /// Statistics and a numbered sample, or `No data found` for an empty run.
    pub fn summary(&mut self, records: &[NeighborhoodRecord]) {
        if records.is_empty() {
            self.notice("No data found");
            return;
        }

        let stats = ScrapeStats::from_records(records);
        self.notice(&format!("Total districts: {}", stats.total_districts));
        self.notice(&format!("Total neighborhoods: {}", stats.total_neighborhoods));

        self.notice("\nSample entries:");
        for (i, record) in stats.sample.iter().enumerate() {
            self.notice(&format!(
                "{}. {} - {}",
                i + 1,
                record.neighborhood_name,
                record.district_name
            ));
        }
    }
}
