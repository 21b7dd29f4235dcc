use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "output.txt";

pub struct Config {
    /// Flow log to aggregate (AWS VPC flow log v2, ASCII).
    pub flow_log: PathBuf,
    /// CSV lookup table with `dstport`, `protocol` and `tag` columns.
    pub lookup_table: PathBuf,
    /// Where the report is written.
    pub output: PathBuf,
    pub no_banner: bool,
    /// 0 prints everything, 1 hides banner and headers, 2 also hides the summary.
    ///
    /// Diagnostics are never hidden by this setting.
    pub quiet: u8,
}

impl Config {
    pub fn new(flow_log: impl Into<PathBuf>, lookup_table: impl Into<PathBuf>) -> Self {
        Self {
            flow_log: flow_log.into(),
            lookup_table: lookup_table.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            no_banner: false,
            quiet: 0,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}
