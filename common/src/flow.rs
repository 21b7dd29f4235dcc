//! # Flow Aggregation Model
//!
//! Keys and counters the analysis pipeline aggregates into.
//!
//! * [`PortProtocol`]: a (destination port, protocol name) pair.
//! * [`TagBucket`]: a lookup tag, or the synthetic `Untagged` bucket.
//! * [`Counter`]: an occurrence counter that remembers first-seen order.
//!
//! Both report sections list their entries in first-seen order, so every
//! counter here is backed by an `IndexMap` rather than a `HashMap`.

pub mod counter;
pub mod pair;
pub mod tag;

pub use counter::Counter;
pub use pair::PortProtocol;
pub use tag::TagBucket;

/// Occurrences of each (destination port, protocol) pair.
pub type PairCounts = Counter<PortProtocol>;

/// Occurrences of each tag bucket.
pub type TagCounts = Counter<TagBucket>;
