use std::fs;
use std::path::PathBuf;

use flowtally_common::config::Config;
use tempfile::TempDir;

/// A scratch directory holding one run's inputs and output.
pub struct Fixture {
    _dir: TempDir,
    pub flow_log: PathBuf,
    pub lookup_table: PathBuf,
    pub output: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let dir: TempDir = tempfile::tempdir().expect("failed to create temp dir");
        let root: PathBuf = dir.path().to_path_buf();
        Self {
            _dir: dir,
            flow_log: root.join("flow_log.txt"),
            lookup_table: root.join("lookup_table.csv"),
            output: root.join("output.txt"),
        }
    }

    pub fn with_flow_log(self, lines: &[String]) -> Self {
        fs::write(&self.flow_log, lines.join("\n")).expect("failed to write flow log");
        self
    }

    pub fn with_lookup_table(self, csv: &str) -> Self {
        self.with_lookup_bytes(csv.as_bytes())
    }

    /// Writes the lookup table verbatim, for content that is not valid UTF-8.
    pub fn with_lookup_bytes(self, csv: &[u8]) -> Self {
        fs::write(&self.lookup_table, csv).expect("failed to write lookup table");
        self
    }

    pub fn config(&self) -> Config {
        Config::new(&self.flow_log, &self.lookup_table).with_output(&self.output)
    }

    pub fn report(&self) -> String {
        fs::read_to_string(&self.output).expect("report was not written")
    }
}

/// A version 2 flow log record with the given destination port and protocol number.
pub fn record(dstport: &str, protocol: &str) -> String {
    format!(
        "2 123456789012 eni-0a1b2c3d 10.0.1.201 198.51.100.2 443 {dstport} {protocol} \
         25 20000 1620140761 1620140821 ACCEPT OK"
    )
}
