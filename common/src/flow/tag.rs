use std::fmt;

pub const UNTAGGED: &str = "Untagged";

/// The bucket a pair's traffic is counted under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagBucket {
    Tagged(String),
    /// No lookup rule matched, or the matching rule had an empty tag.
    Untagged,
}

impl TagBucket {
    /// Maps an optional lookup result to its bucket.
    ///
    /// Empty tags and a literal `Untagged` tag both land in [`TagBucket::Untagged`],
    /// so the report never shows two rows named `Untagged` or a row with no name.
    pub fn from_lookup(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) if !tag.is_empty() && tag != UNTAGGED => Self::Tagged(tag.to_string()),
            _ => Self::Untagged,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Tagged(tag) => tag,
            Self::Untagged => UNTAGGED,
        }
    }

    pub fn is_tagged(&self) -> bool {
        matches!(self, Self::Tagged(_))
    }
}

impl fmt::Display for TagBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
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
