//! # Flow Log Parser
//!
//! Counts `(dstport, protocol)` pairs in a whitespace-separated flow log.
//!
//! Every line is classified on its own ([`FlowLogParser::classify`]) and the
//! counts are a fold over those outcomes ([`FlowLogParser::accumulate`]), so a
//! bad line can only ever affect itself.
//!
//! See <https://docs.aws.amazon.com/vpc/latest/userguide/flow-log-records.html>
//! for the v2 record layout.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use flowtally_common::error;
use flowtally_common::flow::{PairCounts, PortProtocol};
use flowtally_protocols::{self as protocols, InvalidProtocolNumber};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowLogError {
    #[error("Flow log file '{}' not found.", .0.display())]
    NotFound(PathBuf),
    #[error("Could not open flow log '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("An error occurred while reading the flow log: {0}")]
    Read(#[from] io::Error),
}

/// Zero-based positions of the fields the parser reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowLogLayout {
    pub dstport: usize,
    pub protocol: usize,
}

impl FlowLogLayout {
    /// Default flow log format, version 2 (14 fields).
    pub const V2: Self = Self {
        dstport: 6,
        protocol: 7,
    };

    /// Shortest line that still carries both fields.
    pub fn min_fields(&self) -> usize {
        self.dstport.max(self.protocol) + 1
    }
}

impl Default for FlowLogLayout {
    fn default() -> Self {
        Self::V2
    }
}

/// What a single flow log line contributes.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Counted(PortProtocol),
    /// Too few fields; not a record of this layout.
    Short,
    InvalidProtocol(InvalidProtocolNumber),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FlowLogParser {
    layout: FlowLogLayout,
}

impl FlowLogParser {
    pub fn new(layout: FlowLogLayout) -> Self {
        Self { layout }
    }

    pub fn classify(&self, line: &str) -> LineOutcome {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < self.layout.min_fields() {
            return LineOutcome::Short;
        }

        match protocols::resolve_token(fields[self.layout.protocol]) {
            Ok(protocol) => {
                LineOutcome::Counted(PortProtocol::new(fields[self.layout.dstport], protocol.name()))
            }
            Err(e) => LineOutcome::InvalidProtocol(e),
        }
    }

    /// Folds one line into `counts`. Invalid protocol numbers are logged,
    /// short lines are skipped silently.
    pub fn accumulate(&self, mut counts: PairCounts, line: &str) -> PairCounts {
        match self.classify(line) {
            LineOutcome::Counted(pair) => counts.record(pair),
            LineOutcome::Short => {}
            LineOutcome::InvalidProtocol(e) => error!("{e}"),
        }
        counts
    }

    pub fn parse_lines<'a, I>(&self, lines: I) -> PairCounts
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .fold(PairCounts::new(), |counts, line| self.accumulate(counts, line))
    }

    /// Counts the pairs in `path`.
    ///
    /// A missing file gives empty counts; a read error part way through keeps
    /// what was counted up to that point. Both are logged.
    pub fn parse(&self, path: &Path) -> PairCounts {
        let mut counts = PairCounts::new();
        if let Err(e) = self.read_path(path, &mut counts) {
            error!("{e}");
        }
        counts
    }

    fn read_path(&self, path: &Path, counts: &mut PairCounts) -> Result<(), FlowLogError> {
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => FlowLogError::NotFound(path.to_path_buf()),
            _ => FlowLogError::Open {
                path: path.to_path_buf(),
                source,
            },
        })?;
        self.read_from(BufReader::new(file), counts)
    }

    /// Folds every line of `reader` into `counts`.
    ///
    /// Lines are decoded lossily, so non-UTF-8 bytes only spoil the fields they
    /// sit in.
    pub fn read_from<R: BufRead>(
        &self,
        mut reader: R,
        counts: &mut PairCounts,
    ) -> Result<(), FlowLogError> {
        let mut buf: Vec<u8> = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&buf);
            *counts = self.accumulate(std::mem::take(counts), &line);
        }
    }
}

/// Counts the pairs in a v2 flow log at `path`.
pub fn parse(path: &Path) -> PairCounts {
    FlowLogParser::default().parse(path)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
