pub mod corpus;
pub mod tracing;

pub use corpus::SparkCorpus;
pub use tracing::{CapturedEvent, captured_events};
