//! Record store: the session's selectable records and the external sync cache.
//!
//! Records are immutable once created. Updates replace whole entries, so a
//! renderer holding a slice from [`RecordStore::records`] never observes a
//! half-edited record.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A selectable record, e.g. a ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub attributes: BTreeMap<String, String>,
}

impl Record {
    pub fn new<I, K, V>(id: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id: id.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Copy of this record with one attribute replaced
    pub fn with_attr(&self, key: &str, value: impl Into<String>) -> Self {
        let mut attributes = self.attributes.clone();
        attributes.insert(key.to_string(), value.into());
        Self {
            id: self.id.clone(),
            attributes,
        }
    }
}

/// Identifier of a sync item; the endpoint sends either numbers or strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SyncItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SyncItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncItemId::Number(n) => write!(f, "{}", n),
            SyncItemId::Text(s) => f.write_str(s),
        }
    }
}

/// One row of the external data-integration table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncItem {
    pub id: SyncItemId,
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
    pub status: String,
    pub last_updated: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    sync_cache: Vec<SyncItem>,
}

impl RecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            sync_cache: Vec::new(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn ids(&self) -> Vec<String> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Swap in a replacement for every record whose id is in `ids`.
    /// Returns how many records were replaced.
    pub fn replace_where<F>(&mut self, ids: &[String], mut replace: F) -> usize
    where
        F: FnMut(&Record) -> Record,
    {
        let mut replaced = 0;
        for record in self.records.iter_mut() {
            if ids.contains(&record.id) {
                *record = replace(record);
                replaced += 1;
            }
        }
        replaced
    }

    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub fn sync_cache(&self) -> &[SyncItem] {
        &self.sync_cache
    }

    /// Replace the sync cache wholesale
    pub fn set_sync_cache(&mut self, items: Vec<SyncItem>) {
        self.sync_cache = items;
    }
}
