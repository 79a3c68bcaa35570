//! Streaming aggregation
//!
//! Both reports are a single linear pass over the corpus:
//!
//! walk_lines / application_dirs
//! LineClassifier
//! LevelAggregator | TimelineAggregator
//! LevelSnapshot | TimelineSnapshot
//! report writers
//!
//! Auxiliary memory is bounded by the reservoir capacity for the level
//! report and by the number of clusters for the timeline report.

mod levels;
mod reservoir;
mod time_range;
mod timeline;

#[cfg(test)]
mod tests;

pub use levels::*;
pub use reservoir::*;
pub use time_range::*;
pub use timeline::*;
