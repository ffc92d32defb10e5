pub mod aggregate;
pub mod engine;
pub mod extract;
pub mod pipeline;
pub mod progress;
pub mod report;

pub use crate::domain::model::{JobPosting, SearchParams, SearchResponse};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
pub use aggregate::FrequencyAggregator;
