use crate::corpus::{CorpusError, discover};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};

pub const APPLICATION_DIR_GLOB: &str = "application_*";

static APP_DIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"application_([0-9]{13})_([0-9]+)$").expect("application dir pattern is valid")
});

/// Identifier parsed from an `application_<cluster>_<number>` directory name.
///
/// Both parts keep their original digits, leading zeros included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApplicationId {
    pub cluster_id: String,
    pub app_number: String,
}

impl ApplicationId {
    pub fn parse(name: &str) -> Result<Self, CorpusError> {
        let caps = APP_DIR_RE
            .captures(name)
            .ok_or_else(|| CorpusError::invalid_identifier(name))?;

        Ok(Self {
            cluster_id: caps[1].to_string(),
            app_number: caps[2].to_string(),
        })
    }

    pub fn from_dir(dir: &Path) -> Result<Self, CorpusError> {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy())
            .ok_or_else(|| CorpusError::invalid_identifier(dir.display().to_string()))?;
        Self::parse(&name)
    }

    pub fn application_id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "application_{}_{}", self.cluster_id, self.app_number)
    }
}

/// Application directories directly under `root`, sorted by name.
pub fn application_dirs(root: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    Ok(discover(root, APPLICATION_DIR_GLOB)?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect())
}

/// Fails fast unless `root` holds at least one application directory.
///
/// Unpacking the archive is left to the operator; the archive path is only
/// used to make the error actionable.
pub fn ensure_corpus(root: &Path, archive: &Path) -> Result<(), CorpusError> {
    if !root.is_dir() || application_dirs(root)?.is_empty() {
        return Err(CorpusError::source_not_found(root, archive));
    }
    Ok(())
}
