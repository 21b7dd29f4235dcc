use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flowtally_common::flow::{PairCounts, TagCounts};
use thiserror::Error;

pub const TAG_SECTION: &str = "Tag Counts:";
pub const TAG_HEADER: &str = "Tag,Count";
pub const PAIR_SECTION: &str = "Port/Protocol Combination Counts:";
pub const PAIR_HEADER: &str = "Port,Protocol,Count";

#[derive(Debug, Error)]
#[error("Could not write to output file '{}'.", path.display())]
pub struct ReportError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Renders the two-section report. Lines are `\n`-separated with no newline
/// after the last one.
pub fn render(pairs: &PairCounts, tags: &TagCounts) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(pairs.len() + tags.len() + 4);

    lines.push(TAG_SECTION.to_string());
    lines.push(TAG_HEADER.to_string());
    lines.extend(tags.iter().map(|(tag, count)| format!("{tag},{count}")));

    lines.push(PAIR_SECTION.to_string());
    lines.push(PAIR_HEADER.to_string());
    lines.extend(pairs.iter().map(|(pair, count)| format!("{pair},{count}")));

    lines.join("\n")
}

/// Writes the report to `path`, replacing any existing file.
pub fn write(path: &Path, pairs: &PairCounts, tags: &TagCounts) -> Result<(), ReportError> {
    fs::write(path, render(pairs, tags)).map_err(|source| ReportError {
        path: path.to_path_buf(),
        source,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
