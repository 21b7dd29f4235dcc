use std::fmt;

/// A (destination port, protocol) aggregation key.
///
/// The port is kept as the raw token from the input. Flow logs carry `-` or
/// other junk in that column for some records and the report echoes it back
/// verbatim, so it is never parsed as a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortProtocol {
    pub port: String,
    pub protocol: String,
}

impl PortProtocol {
    /// Builds a key, lowercasing the protocol name.
    pub fn new(port: impl Into<String>, protocol: &str) -> Self {
        Self {
            port: port.into(),
            protocol: protocol.to_lowercase(),
        }
    }
}

impl fmt::Display for PortProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.port, self.protocol)
    }
}

impl<P: Into<String>> From<(P, &str)> for PortProtocol {
    fn from((port, protocol): (P, &str)) -> Self {
        Self::new(port, protocol)
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
