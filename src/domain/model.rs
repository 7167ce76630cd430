use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Header labels of the source table; a row carrying them is a repeated header.
pub const NEIGHBORHOOD_HEADER: &str = "Mahalle";
pub const DISTRICT_HEADER: &str = "İlçe";

/// Number of records echoed to stdout after a run.
pub const SAMPLE_SIZE: usize = 5;

/// One neighborhood-to-district mapping extracted from a single table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborhoodRecord {
    #[serde(rename = "mahalle")]
    pub neighborhood_name: String,
    #[serde(rename = "ilce")]
    pub district_name: String,
}

impl NeighborhoodRecord {
    pub fn new(neighborhood_name: impl Into<String>, district_name: impl Into<String>) -> Self {
        Self {
            neighborhood_name: neighborhood_name.into(),
            district_name: district_name.into(),
        }
    }

    /// Builds a record from two trimmed cell values, rejecting empty values
    /// and stray header rows.
    pub fn from_cells(neighborhood: &str, district: &str) -> Option<Self> {
        if neighborhood.is_empty() || district.is_empty() {
            return None;
        }
        if neighborhood == NEIGHBORHOOD_HEADER || district == DISTRICT_HEADER {
            return None;
        }
        Some(Self::new(neighborhood, district))
    }
}

/// Summary statistics printed at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeStats {
    pub total_neighborhoods: usize,
    pub total_districts: usize,
    pub sample: Vec<NeighborhoodRecord>,
}

impl ScrapeStats {
    pub fn from_records(records: &[NeighborhoodRecord]) -> Self {
        let districts: HashSet<&str> = records
            .iter()
            .map(|record| record.district_name.as_str())
            .collect();

        Self {
            total_neighborhoods: records.len(),
            total_districts: districts.len(),
            sample: records.iter().take(SAMPLE_SIZE).cloned().collect(),
        }
    }
}

/// Where a run stopped. Early exits jump straight from `Start` or `Fetched`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Start,
    Fetched,
    Parsed,
    Written,
}

#[derive(Debug, Clone)]
pub struct ScrapeOutcome {
    pub records: Vec<NeighborhoodRecord>,
    pub output_path: Option<String>,
    pub stage: RunStage,
}

impl ScrapeOutcome {
    pub fn empty(stage: RunStage) -> Self {
        Self {
            records: Vec::new(),
            output_path: None,
            stage,
        }
    }
}
