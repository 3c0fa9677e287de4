use std::{
    collections::{HashMap, hash_map::Entry},
    fs,
    io::ErrorKind,
    path::Path,
};

use serde_json::Value;
use tracing::{debug, info};

use crate::error::DataError;

/// Canonical host of the legacy index.
pub const LEGACY_HOST: &str = "paperswithcode.com";
/// Subdomain under which the legacy index also published paper pages.
pub const LEGACY_CS_HOST: &str = "cs.paperswithcode.com";

/// Field of a backup record holding the legacy index URL.
const SOURCE_FIELD: &str = "paper_url";
/// Field of a backup record holding the arXiv abstract URL.
const TARGET_FIELD: &str = "paper_url_abs";

/// One usable entry of the backup dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaperRecord {
    pub source_url: String,
    pub target_url: String,
}

impl PaperRecord {
    /// Pick the two fields we care about out of a loosely-shaped backup record.
    ///
    /// Returns `None` for anything that is not an object carrying non-empty string values for
    /// both the source and the target URL. Every other field is ignored.
    pub fn from_value(value: &Value) -> Option<Self> {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        };
        Some(PaperRecord {
            source_url: field(SOURCE_FIELD)?.to_string(),
            target_url: field(TARGET_FIELD)?.to_string(),
        })
    }
}

/// Lookup table from legacy index URLs to arXiv URLs.
///
/// Built once per run and never mutated afterwards. When two records share a source URL the
/// later one wins silently; no conflict resolution is attempted.
#[derive(Clone, Debug, Default)]
pub struct UrlMapping {
    table: HashMap<String, String>,
}

impl UrlMapping {
    /// Build the table, registering both legacy host spellings of every source URL.
    ///
    /// Later records win, and that includes the sibling entry: a `cs.paperswithcode.com` record
    /// replaces the target of an earlier `paperswithcode.com` record for the same path, and the
    /// other way round.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PaperRecord>,
    {
        let mut table = HashMap::new();
        for PaperRecord {
            source_url,
            target_url,
        } in records
        {
            if let Some(sibling) = sibling_url(&source_url) {
                insert(&mut table, sibling, target_url.clone());
            }
            insert(&mut table, source_url, target_url);
        }
        UrlMapping { table }
    }

    /// Parse a backup document: a JSON array of paper records.
    ///
    /// Elements lacking either URL are skipped. Anything other than an array at the top level is
    /// rejected.
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let value: Value = serde_json::from_str(json)?;
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(DataError::format(format!(
                    "expected an array of paper records, found {}",
                    kind(&other)
                )));
            }
        };
        let total = items.len();
        let records: Vec<_> = items.iter().filter_map(PaperRecord::from_value).collect();
        debug!(total, usable = records.len(), "parsed backup records");
        Ok(Self::from_records(records))
    }

    /// Read and parse the backup file at `path`.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let json = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => DataError::SourceMissing {
                path: path.to_path_buf(),
            },
            _ => DataError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let mapping = Self::from_json_str(&json)?;
        info!(path = %path.display(), mappings = mapping.len(), "loaded URL mappings");
        Ok(mapping)
    }

    pub fn get(&self, source_url: &str) -> Option<&str> {
        self.table.get(source_url).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl FromIterator<PaperRecord> for UrlMapping {
    fn from_iter<T: IntoIterator<Item = PaperRecord>>(iter: T) -> Self {
        Self::from_records(iter)
    }
}

fn insert(table: &mut HashMap<String, String>, source: String, target: String) {
    match table.entry(source) {
        Entry::Occupied(mut slot) => {
            if slot.get() != &target {
                debug!(
                    source = %slot.key(),
                    previous = %slot.get(),
                    replacement = %target,
                    "duplicate source URL, keeping the later target"
                );
            }
            slot.insert(target);
        }
        Entry::Vacant(slot) => {
            slot.insert(target);
        }
    }
}

/// The same URL under the other legacy host, if `url` is on one of them.
fn sibling_url(url: &str) -> Option<String> {
    let (scheme, rest) = url.split_once("://")?;
    let (host, path) = rest.find('/').map_or((rest, ""), |i| rest.split_at(i));
    let sibling = match host {
        LEGACY_HOST => LEGACY_CS_HOST,
        LEGACY_CS_HOST => LEGACY_HOST,
        _ => return None,
    };
    Some(format!("{scheme}://{sibling}{path}"))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
