//! # Flowtally Core
//!
//! The analysis pipeline, one module per stage:
//!
//! 1. [`lookup`]: load the `(dstport, protocol) -> tag` rules.
//! 2. [`flow_log`]: count `(dstport, protocol)` pairs in a flow log.
//! 3. [`tags`]: join the pair counts against the rules.
//! 4. [`report`]: render both tables into the report file.
//!
//! [`analyzer::analyze`] runs all four for a [`flowtally_common::config::Config`].
//! No stage aborts the run: missing or malformed input is logged and the
//! stage hands on whatever it managed to read.

pub mod analyzer;
pub mod flow_log;
pub mod lookup;
pub mod report;
pub mod tags;
