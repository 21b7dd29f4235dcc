//! Logging macros.
//!
//! Thin wrappers over `tracing` so the core crates log through one place. The
//! CLI installs the subscriber; without one these are no-ops, which keeps unit
//! tests quiet.

/// Progress and status lines.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// A stage finished with a result worth showing.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "flowtally::success", $($arg)*)
    };
}

/// Recoverable oddities in the input (e.g. a discarded duplicate rule).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

/// A stage could not read or write something; it degrades and carries on.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}

