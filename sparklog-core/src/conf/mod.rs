mod error;
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{load_config, parse_config_file, validate_config};
pub use types::*;
