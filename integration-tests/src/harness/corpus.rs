use sparklog_core::conf::AnalyzerConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Throwaway Spark log corpus laid out the way the extracted archive is:
/// `<raw>/application_<cluster>_<number>/<container>.log`.
pub struct SparkCorpus {
    dir: TempDir,
}

impl SparkCorpus {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir(dir.path().join("raw")).expect("failed to create raw dir");
        Self { dir }
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.dir.path().join("raw")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("output")
    }

    /// Config pointing at this corpus, with every other key at its default.
    pub fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            raw_dir: self.raw_dir(),
            output_dir: self.output_dir(),
            archive: self.dir.path().join("Spark.tar.gz"),
            ..AnalyzerConfig::default()
        }
    }

    pub fn add_app_dir(&self, app: &str) -> PathBuf {
        let dir = self.raw_dir().join(app);
        fs::create_dir_all(&dir).expect("failed to create application dir");
        dir
    }

    pub fn add_log(&self, app: &str, file: &str, lines: &[&str]) -> PathBuf {
        let mut contents = lines.join("\n");
        contents.push('\n');
        self.add_bytes(app, file, contents.as_bytes())
    }

    pub fn add_bytes(&self, app: &str, file: &str, bytes: &[u8]) -> PathBuf {
        let path = self.add_app_dir(app).join(file);
        fs::write(&path, bytes).expect("failed to write log file");
        path
    }

    pub fn read_output(&self, name: &str) -> String {
        read(&self.output_dir().join(name))
    }
}

impl Default for SparkCorpus {
    fn default() -> Self {
        Self::new()
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}
