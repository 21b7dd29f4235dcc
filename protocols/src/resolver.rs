use std::fmt;
use std::num::IntErrorKind;

use thiserror::Error;

use crate::iana;

pub const UNKNOWN: &str = "unknown";

/// Outcome of resolving a protocol number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Lowercase IANA keyword, e.g. `tcp`.
    Known(&'static str),
    Unknown,
}

impl Protocol {
    pub fn name(&self) -> &'static str {
        match self {
            Protocol::Known(name) => name,
            Protocol::Unknown => UNKNOWN,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Protocol::Known(_))
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid IANA code: {token} is not an integer.")]
pub struct InvalidProtocolNumber {
    pub token: String,
}

/// Resolves a protocol number. Numbers outside `0..=255`, and assigned numbers
/// without a keyword, resolve to [`Protocol::Unknown`].
pub fn resolve(number: i64) -> Protocol {
    u8::try_from(number)
        .ok()
        .and_then(iana::keyword)
        .map_or(Protocol::Unknown, Protocol::Known)
}

/// Parses and resolves the protocol column of a flow record.
///
/// Only tokens that are not integers at all are rejected. An integer too large
/// for `i64` is still an integer and resolves to [`Protocol::Unknown`].
pub fn resolve_token(token: &str) -> Result<Protocol, InvalidProtocolNumber> {
    match token.parse::<i64>() {
        Ok(number) => Ok(resolve(number)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(Protocol::Unknown)
        }
        Err(_) => Err(InvalidProtocolNumber {
            token: token.to_string(),
        }),
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
