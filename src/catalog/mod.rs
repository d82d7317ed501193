//! Completion catalogs: the static reference data the engine dispatches.
//!
//! A catalog is an ordered list of [`CompletionEntry`] records for one
//! category (scalar keywords, query operators, aggregation operators, update
//! operators, method names, collection names). Catalogs are inert: the engine
//! never mutates them, and their definition order is what the suggestion list
//! displays. Catalog sets are injected into the engine rather than held as
//! globals, so tests can run against synthetic data.
//!
//! The JSON wire shape uses the `caption`/`value`/`meta` field names of the
//! snippet tables the hosting playground serves to its editor widget, so the
//! same data files feed both sides.

mod defaults;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CompletionError, Result};

/// A single completion candidate.
///
/// `template` is authored as a bare `name: value` string; quoting the key is
/// the insertion editor's job, not the catalog author's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEntry {
    /// Displayed text
    #[serde(rename = "caption")]
    pub label: String,

    /// Raw insertable text, without surrounding key-quoting
    #[serde(rename = "value")]
    pub template: String,

    /// Free-form descriptive tag shown next to the label
    #[serde(rename = "meta")]
    pub category: String,
}

impl CompletionEntry {
    /// Create a new entry.
    pub fn new(
        label: impl Into<String>,
        template: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            template: template.into(),
            category: category.into(),
        }
    }
}

/// An ordered list of completion entries for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CompletionEntry>,
}

impl Catalog {
    /// Create a catalog from entries, preserving their order.
    pub fn new(entries: Vec<CompletionEntry>) -> Self {
        Self { entries }
    }

    /// Entries in definition order.
    pub fn entries(&self) -> &[CompletionEntry] {
        &self.entries
    }

    /// Iterate entries in definition order.
    pub fn iter(&self) -> std::slice::Iter<'_, CompletionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The six category catalogs one pane draws candidates from.
///
/// Missing categories deserialize as empty catalogs, so a host can inject a
/// file that overrides only the catalogs it cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSet {
    /// Scalar/literal BSON keywords, offered in every operator position
    #[serde(default)]
    pub keywords: Catalog,

    /// Match-query operators (`.find(` queries)
    #[serde(default)]
    pub query_operators: Catalog,

    /// Aggregation operators and stages (`.aggregate(` queries)
    #[serde(default)]
    pub aggregation_operators: Catalog,

    /// Update operators (the fallback for everything else)
    #[serde(default)]
    pub update_operators: Catalog,

    /// Query method names offered after `db.<collection>.`
    #[serde(default)]
    pub methods: Catalog,

    /// Collection names offered after `db.`
    #[serde(default)]
    pub collections: Catalog,
}

impl Default for CatalogSet {
    /// The built-in playground catalogs.
    fn default() -> Self {
        defaults::catalog_set()
    }
}

impl CatalogSet {
    /// A catalog set with every category empty.
    pub fn empty() -> Self {
        Self {
            keywords: Catalog::default(),
            query_operators: Catalog::default(),
            aggregation_operators: Catalog::default(),
            update_operators: Catalog::default(),
            methods: Catalog::default(),
            collections: Catalog::default(),
        }
    }

    /// Load a catalog set from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog set from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                CompletionError::Catalog(CatalogError::FileNotFound(path.display().to_string()))
            } else {
                CompletionError::Io(err)
            }
        })?;
        Self::from_json_str(&json)
    }
}
