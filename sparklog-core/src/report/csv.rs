use crate::report::ReportError;
use std::fs;
use std::path::{Path, PathBuf};

/// Wraps a field in double quotes, doubling any embedded quote.
///
/// This is the minimal quoting the sample table needs, not full RFC 4180:
/// the other tables only hold digits, ids and timestamps and are written bare.
pub fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Header line followed by one comma-joined line per row.
pub fn render_csv<R, F>(header: &str, rows: R) -> String
where
    R: IntoIterator<Item = Vec<F>>,
    F: AsRef<str>,
{
    let mut out = String::new();
    out.push_str(header);
    out.push('\n');

    for row in rows {
        let fields: Vec<&str> = row.iter().map(|f| f.as_ref()).collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}

pub fn ensure_output_dir(dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(dir).map_err(|e| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Writes one report file under `dir` and returns its path.
pub fn write_output(dir: &Path, name: &str, contents: &str) -> Result<PathBuf, ReportError> {
    let path = dir.join(name);
    fs::write(&path, contents).map_err(|e| ReportError::Write {
        path: path.clone(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(path)
}
