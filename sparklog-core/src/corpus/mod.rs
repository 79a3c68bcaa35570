//! Corpus walking
//!
//! Everything that touches the log tree on disk lives here: glob discovery,
//! permissive line reading, and application directory naming. Both reports
//! read the corpus exclusively through this module.

mod application;
mod discover;
mod error;
mod lines;


pub use application::*;
pub use discover::*;
pub use error::*;
pub use lines::*;
