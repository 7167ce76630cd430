pub mod etl;
pub mod fetch;
pub mod pipeline;
pub mod report;
pub mod rows;
pub mod table;

pub use crate::domain::model::{NeighborhoodRecord, RunStage, ScrapeOutcome, ScrapeStats};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
