use crate::corpus::{CorpusError, discover};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Streams the lines of a single log file.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`; the terminator is stripped.
/// Bytes that are not valid UTF-8 are dropped rather than replaced, so odd
/// encodings in the corpus never turn into a read error.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    // last line ended at `\r`; a `\n` right after it belongs to that line
    skip_lf: bool,
}

impl LineReader<BufReader<File>> {
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            skip_lf: false,
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();

        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            };

            if available.is_empty() {
                self.skip_lf = false;
                if self.buf.is_empty() {
                    return None;
                }
                return Some(Ok(decode_permissive(&self.buf)));
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.inner.consume(1);
                    continue;
                }
            }

            match available.iter().position(|b| *b == b'\n' || *b == b'\r') {
                Some(i) => {
                    self.skip_lf = available[i] == b'\r';
                    self.buf.extend_from_slice(&available[..i]);
                    self.inner.consume(i + 1);
                    return Some(Ok(decode_permissive(&self.buf)));
                }
                None => {
                    let n = available.len();
                    self.buf.extend_from_slice(available);
                    self.inner.consume(n);
                }
            }
        }
    }
}

/// Decodes UTF-8, silently dropping invalid byte sequences.
pub fn decode_permissive(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Lazy `(source, line)` stream over every file matched by a glob.
///
/// Files are visited in sorted path order. A file that cannot be opened, or
/// that fails mid-read, is logged and skipped; the walk carries on with the
/// next file.
pub struct CorpusLines {
    files: std::vec::IntoIter<PathBuf>,
    current: Option<(Arc<Path>, LineReader<BufReader<File>>)>,
    files_read: usize,
    files_skipped: usize,
}

impl CorpusLines {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files: files.into_iter(),
            current: None,
            files_read: 0,
            files_skipped: 0,
        }
    }

    pub fn files_read(&self) -> usize {
        self.files_read
    }

    pub fn files_skipped(&self) -> usize {
        self.files_skipped
    }

    fn open_next(&mut self) -> bool {
        for path in self.files.by_ref() {
            match LineReader::open(&path) {
                Ok(reader) => {
                    self.current = Some((Arc::from(path.as_path()), reader));
                    return true;
                }
                Err(e) => {
                    self.files_skipped += 1;
                    tracing::warn!(error = %e, path = %path.display(), "skipping unreadable log file");
                }
            }
        }
        false
    }
}

impl Iterator for CorpusLines {
    type Item = (Arc<Path>, String);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((path, reader)) = &mut self.current {
                match reader.next() {
                    Some(Ok(line)) => return Some((path.clone(), line)),
                    Some(Err(e)) => {
                        self.files_skipped += 1;
                        tracing::warn!(error = %e, path = %path.display(), "read failed; skipping rest of file");
                        self.current = None;
                    }
                    None => {
                        self.files_read += 1;
                        self.current = None;
                    }
                }
            }

            if !self.open_next() {
                return None;
            }
        }
    }
}

/// Walks every file under `root` matching `pattern`, yielding its lines.
pub fn walk_lines(root: &Path, pattern: &str) -> Result<CorpusLines, CorpusError> {
    let files = discover(root, pattern)?;
    tracing::debug!(files = files.len(), pattern, "discovered log files");
    Ok(CorpusLines::new(files))
}
