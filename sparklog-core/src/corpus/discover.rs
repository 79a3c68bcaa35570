use crate::corpus::CorpusError;
use glob::{Pattern, glob};
use std::path::{Path, PathBuf};

/// Discovers files matching a glob pattern.
///
/// Searches the filesystem for all files that match the given glob pattern
/// and returns their paths in sorted order. Invalid paths are silently filtered out.
///
/// # Arguments
///
/// * `root` - Directory the pattern is resolved against
/// * `glob_pattern` - A glob pattern string (e.g., `"application_*/*.log"`)
///
/// # Returns
///
/// A sorted `Vec<PathBuf>` of all matching paths.
///
/// # Errors
///
/// Returns `CorpusError::Glob` if the pattern is malformed or cannot be parsed.
pub fn discover(root: &Path, glob_pattern: &str) -> Result<Vec<PathBuf>, CorpusError> {
    let pattern = &resolve_glob(root, glob_pattern);
    let mut paths: Vec<_> = glob(pattern)
        .map_err(|e| CorpusError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .collect();

    paths.sort();
    Ok(paths)
}

/// Resolves a glob pattern relative to a root directory.
///
/// The root is escaped first, so directories whose names contain glob
/// metacharacters (`[`, `*`, `?`) are matched literally. Only `pattern`
/// is interpreted as a glob.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    let root = Pattern::escape(&root.to_string_lossy());
    Path::new(&root).join(pattern).to_string_lossy().into_owned()
}
