//! Report rendering
//!
//! Every report is rendered to a `String` first and written in one go, so
//! the renderers can be tested without touching the filesystem.

mod chart;
mod csv;
mod error;
mod histogram;
mod levels;
mod timeline;


pub use chart::*;
pub use csv::*;
pub use error::*;
pub use histogram::LogHistogram;
pub use levels::*;
pub use timeline::*;
