//! # Flowtally Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`flow`]**: aggregation keys ([`flow::PortProtocol`], [`flow::TagBucket`])
//!   and the insertion-ordered [`flow::Counter`] built on top of them.
//! * **[`config`]**: the run configuration handed from the CLI to the core.
//! * **[`log`]**: logging macros used across the workspace.

pub mod config;
pub mod flow;
pub mod log;

#[doc(hidden)]
pub use tracing;
