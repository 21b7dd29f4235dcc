pub mod analyze;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use flowtally_common::config::{Config, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "flowtally", version)]
#[command(about = "Counts flow log traffic per port/protocol pair and per lookup tag.")]
pub struct CommandLine {
    /// ASCII flow log in the version 2 format.
    /// See https://docs.aws.amazon.com/vpc/latest/userguide/flow-log-records.html
    pub flow_log: PathBuf,
    /// ASCII CSV lookup table. dstport, protocol and tag columns are required
    pub lookup_table: PathBuf,
    /// Where to write the report
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Less terminal output (-q hides headers, -qq hides everything but warnings)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Don't print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            flow_log: self.flow_log,
            lookup_table: self.lookup_table,
            output: self.output,
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
