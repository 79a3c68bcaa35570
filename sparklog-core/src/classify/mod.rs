//! Line classification: severity level and leading timestamp.

mod level;
mod record;
mod timestamp;

#[cfg(test)]
mod tests;

pub use level::*;
pub use record::*;
pub use timestamp::*;
