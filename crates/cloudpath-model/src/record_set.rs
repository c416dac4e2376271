// SPDX-License-Identifier: Apache-2.0

use crate::ids::lookup_key;
use crate::record::CertificationRecord;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

/// Immutable snapshot of every record loaded for a session.
///
/// Records keep the order they were loaded in. Ids are unique ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<CertificationRecord>,
    index: BTreeMap<String, usize>,
}

impl RecordSet {
    pub fn new(records: Vec<CertificationRecord>) -> Result<Self, ValidationError> {
        let mut index = BTreeMap::new();
        for (pos, record) in records.iter().enumerate() {
            record.validate()?;
            if let Some(prev) = index.insert(record.id.lookup_key(), pos) {
                return Err(ValidationError(format!(
                    "duplicate certification id {} (records {prev} and {pos})",
                    record.id
                )));
            }
        }
        Ok(Self { records, index })
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
        let records: Vec<CertificationRecord> = serde_json::from_slice(bytes)
            .map_err(|e| ValidationError(format!("record file is not valid: {e}")))?;
        Self::new(records)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[CertificationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CertificationRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive id lookup.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CertificationRecord> {
        self.index
            .get(&lookup_key(id))
            .and_then(|pos| self.records.get(*pos))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(&lookup_key(id))
    }

    /// SHA-256 over the canonical JSON of the record list.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        cloudpath_core::canonical::stable_json_hash_hex(&self.records)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a CertificationRecord;
    type IntoIter = std::slice::Iter<'a, CertificationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
