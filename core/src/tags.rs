use flowtally_common::flow::{PairCounts, TagBucket, TagCounts};

use crate::lookup::LookupTable;

/// Joins pair counts against the lookup rules.
///
/// Buckets appear in the order their first pair appears in `pairs`, with
/// unmatched pairs (and pairs whose rule has an empty tag) summed under
/// [`TagBucket::Untagged`]. Every count lands in exactly one bucket, so the
/// totals of both tables match.
pub fn aggregate(pairs: &PairCounts, rules: &LookupTable) -> TagCounts {
    pairs.iter().fold(TagCounts::new(), |tags, (pair, count)| {
        tags.with(TagBucket::from_lookup(rules.get(pair)), count)
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
