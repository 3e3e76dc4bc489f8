//! Relation tables: entity name -> ordered list of related names.
//! ------------------------------------------------------------
//! Keys are unique. A JSON document that repeats a key is rejected instead of
//! letting the later value win. Value order is kept exactly as loaded.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::io::Read;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DatasetError, DatasetResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RelationTable {
    rows: BTreeMap<String, Vec<String>>,
}

impl RelationTable {
    pub fn new() -> Self { Self::default() }

    /// Build a table from `(entity, related)` pairs. Fails on the first repeated entity.
    pub fn from_entries<I, K, V>(entries: I) -> DatasetResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let mut rows = BTreeMap::new();
        for (k, v) in entries {
            let key: String = k.into();
            let related: Vec<String> = v.into_iter().map(Into::into).collect();
            match rows.entry(key) {
                btree_map::Entry::Vacant(slot) => { slot.insert(related); }
                btree_map::Entry::Occupied(slot) => {
                    return Err(DatasetError::parse("duplicate_entity".to_string(), format!("duplicate entity '{}'", slot.key())));
                }
            }
        }
        Ok(Self { rows })
    }

    pub fn from_json_str(text: &str) -> DatasetResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Related names for `entity`, in stored order.
    pub fn get(&self, entity: &str) -> Option<&[String]> {
        self.rows.get(entity).map(Vec::as_slice)
    }

    pub fn contains(&self, entity: &str) -> bool { self.rows.contains_key(entity) }

    pub fn entities(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.rows.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Total number of related names across all entities.
    pub fn link_count(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }
}

impl<'de> Deserialize<'de> for RelationTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = RelationTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping entity names to arrays of strings")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut rows = BTreeMap::new();
                while let Some((key, related)) = access.next_entry::<String, Vec<String>>()? {
                    if rows.contains_key(&key) {
                        return Err(de::Error::custom(format!("duplicate entity '{}'", key)));
                    }
                    rows.insert(key, related);
                }
                Ok(RelationTable { rows })
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
