use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    // Preconditions
    #[error("log corpus not found under {root}; extract {archive} into it first")]
    SourceNotFound { root: PathBuf, archive: PathBuf },

    // Structure
    #[error("invalid application directory name: {name}")]
    InvalidIdentifier { name: String },

    // Discovery
    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl CorpusError {
    pub fn source_not_found(root: impl Into<PathBuf>, archive: impl Into<PathBuf>) -> Self {
        Self::SourceNotFound {
            root: root.into(),
            archive: archive.into(),
        }
    }

    pub fn invalid_identifier(name: impl Into<String>) -> Self {
        Self::InvalidIdentifier { name: name.into() }
    }
}
