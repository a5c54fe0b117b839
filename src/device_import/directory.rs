//! Location Lookup Directory
//!
//! Name-keyed view of the pre-fetched location lookup file. The remote
//! system is assumed to already hold these locations; the device import
//! only resolves names against it.

use crate::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// One entry of the location lookup file
#[derive(Debug, Clone, Deserialize)]
pub struct LocationEntry {
    /// Location name
    pub location: String,
    /// Remote location id
    pub id: i64,
}

/// Name-keyed directory of remote location ids
///
/// Built first-entry-wins, so a duplicated name resolves to the entry
/// that appears first in the lookup file.
#[derive(Debug, Default)]
pub struct LocationDirectory {
    ids_by_name: HashMap<String, i64>,
}

impl LocationDirectory {
    /// Load the directory from a JSON file holding an array of
    /// `{location, id}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries: Vec<LocationEntry> = serde_json::from_str(&content)?;
        Ok(Self::from_entries(entries))
    }

    /// Build the directory from already-parsed entries.
    pub fn from_entries(entries: Vec<LocationEntry>) -> Self {
        let mut ids_by_name = HashMap::new();
        for entry in entries {
            ids_by_name.entry(entry.location).or_insert(entry.id);
        }
        Self { ids_by_name }
    }

    /// Resolve a location name to its remote id. Exact, case-sensitive.
    pub fn resolve(&self, name: &str) -> Option<i64> {
        self.ids_by_name.get(name).copied()
    }

    /// Number of distinct location names.
    pub fn len(&self) -> usize {
        self.ids_by_name.len()
    }

    /// True when the lookup holds no entries.
    pub fn is_empty(&self) -> bool {
        self.ids_by_name.is_empty()
    }
}
