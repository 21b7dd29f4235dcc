use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use flowtally_common::flow::PortProtocol;
use flowtally_common::{error, warn};
use indexmap::IndexMap;
use indexmap::map::Entry;
use thiserror::Error;

pub const DSTPORT_COLUMN: &str = "dstport";
pub const PROTOCOL_COLUMN: &str = "protocol";
pub const TAG_COLUMN: &str = "tag";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Lookup table file '{}' not found.", .0.display())]
    NotFound(PathBuf),
    #[error("Could not open lookup table '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Lookup table has no '{0}' column.")]
    MissingColumn(&'static str),
    #[error("An error occurred while reading the lookup table: {0}")]
    Csv(#[from] csv::Error),
}

/// Result of offering a rule to a [`LookupTable`].
#[derive(Debug, PartialEq, Eq)]
pub enum Insertion<'a> {
    Inserted,
    /// The key was already mapped; the table still holds `kept`.
    Duplicate { kept: &'a str },
}

/// Tagging rules keyed by `(dstport, protocol)`. The first rule for a key wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LookupTable {
    rules: IndexMap<PortProtocol, String>,
}

/// Column positions of the required fields within a CSV record.
struct Columns {
    dstport: usize,
    protocol: usize,
    tag: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, LookupError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or(LookupError::MissingColumn(name))
        };

        Ok(Self {
            dstport: find(DSTPORT_COLUMN)?,
            protocol: find(PROTOCOL_COLUMN)?,
            tag: find(TAG_COLUMN)?,
        })
    }
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the rules in `path`.
    ///
    /// Never fails: a missing file yields an empty table, and a malformed one
    /// yields the rules read before the bad row. Both are logged.
    pub fn load(path: &Path) -> Self {
        let mut table = Self::new();
        if let Err(e) = table.read_path(path) {
            error!("{e}");
        }
        table
    }

    fn read_path(&mut self, path: &Path) -> Result<(), LookupError> {
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LookupError::NotFound(path.to_path_buf()),
            _ => LookupError::Open {
                path: path.to_path_buf(),
                source,
            },
        })?;
        self.read_from(file)
    }

    /// Adds every rule in a CSV stream, stopping at the first row that cannot
    /// be decoded.
    ///
    /// Rows may be ragged: extra fields are ignored and missing ones read as
    /// empty, so a row without a tag still claims its key. Rules added before
    /// an error stay in the table. An empty stream is an empty table.
    pub fn read_from<R: Read>(&mut self, reader: R) -> Result<(), LookupError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers: &StringRecord = reader.headers()?;
        if headers.is_empty() {
            return Ok(());
        }
        let columns = Columns::locate(headers)?;

        for record in reader.records() {
            let record = record?;
            let field = |idx: usize| record.get(idx).unwrap_or_default();
            let tag = field(columns.tag);
            let key = PortProtocol::new(field(columns.dstport), field(columns.protocol));

            if let Insertion::Duplicate { kept } = self.insert(key.clone(), tag) {
                warn!(
                    "Ignoring tag {tag} in lookup table. ({key}) is already mapped to {kept}."
                );
            }
        }
        Ok(())
    }

    /// Maps `key` to `tag` unless the key is already mapped.
    pub fn insert(&mut self, key: PortProtocol, tag: &str) -> Insertion<'_> {
        match self.rules.entry(key) {
            Entry::Occupied(entry) => Insertion::Duplicate {
                kept: entry.into_mut().as_str(),
            },
            Entry::Vacant(entry) => {
                entry.insert(tag.to_string());
                Insertion::Inserted
            }
        }
    }

    pub fn get(&self, key: &PortProtocol) -> Option<&str> {
        self.rules.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PortProtocol, &str)> {
        self.rules.iter().map(|(key, tag)| (key, tag.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> FromIterator<(PortProtocol, &'a str)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (PortProtocol, &'a str)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, tag) in iter {
            table.insert(key, tag);
        }
        table
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
