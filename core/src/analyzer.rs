use std::path::PathBuf;

use flowtally_common::config::Config;
use flowtally_common::flow::{PairCounts, TagCounts};
use flowtally_common::{error, info, success};

use crate::flow_log::FlowLogParser;
use crate::lookup::LookupTable;
use crate::{report, tags};

/// Everything a run produced.
pub struct Analysis {
    pub rules: LookupTable,
    pub pairs: PairCounts,
    pub tags: TagCounts,
    /// Where the report landed, `None` if it could not be written.
    pub report: Option<PathBuf>,
}

impl Analysis {
    /// Flow records that made it into the pair counts.
    pub fn records_counted(&self) -> u64 {
        self.pairs.total()
    }

    /// Records that landed in a named tag bucket.
    ///
    /// A lookup rule whose tag is literally `Untagged` shares the untagged
    /// bucket, so its traffic is not counted here.
    pub fn records_tagged(&self) -> u64 {
        self.tags
            .iter()
            .filter(|(bucket, _)| bucket.is_tagged())
            .map(|(_, count)| count)
            .sum()
    }
}

/// Runs the whole pipeline for `cfg` and writes the report.
///
/// Always returns: unreadable inputs produce empty tables and an unwritable
/// output leaves [`Analysis::report`] empty, each with a logged error.
pub fn analyze(cfg: &Config) -> Analysis {
    info!("Reading lookup table...");
    let rules: LookupTable = LookupTable::load(&cfg.lookup_table);
    success!("Found {} tag mappings from lookup table.", rules.len());

    info!("Reading flow log...");
    let pairs: PairCounts = FlowLogParser::default().parse(&cfg.flow_log);
    success!("Found {} unique port/protocol combinations.", pairs.len());

    let tags: TagCounts = tags::aggregate(&pairs, &rules);

    let report = match report::write(&cfg.output, &pairs, &tags) {
        Ok(()) => {
            success!("Output written to {}", cfg.output.display());
            Some(cfg.output.clone())
        }
        Err(e) => {
            error!("{e}");
            None
        }
    };

    Analysis {
        rules,
        pairs,
        tags,
        report,
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
