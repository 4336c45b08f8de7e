//! The [`SequenceDictionary`] and [`SequenceRecord`] types.
//!
//! A sequence dictionary is the ordered table of named reference sequences
//! and their lengths carried by genomic file formats (e.g. SAM headers and
//! `.dict` files). Masks and other per-locus consumers treat it as a
//! read-only collaborator: they borrow it, and it must remain unchanged for
//! their lifetime. This module does no file parsing; dictionaries are built
//! programmatically from records or from a name → length map (see the
//! [`seqlens!`] macro).
//!
//! [`seqlens!`]: crate::seqlens

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{error::MaskError, Position};

/// A single named reference sequence and its length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub name: String,
    pub length: Position,
}

impl SequenceRecord {
    pub fn new(name: impl Into<String>, length: Position) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }
}

/// An ordered, immutable table of [`SequenceRecord`]s, with name → index
/// lookup. Sequence indices are the 0-based positions of records in the
/// table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SequenceRecord>", into = "Vec<SequenceRecord>")]
pub struct SequenceDictionary {
    records: Vec<SequenceRecord>,
    indices: IndexMap<String, usize>,
}

impl SequenceDictionary {
    /// Create a new [`SequenceDictionary`] from an ordered set of records.
    ///
    /// Returns [`MaskError::DuplicateSequenceName`] if two records share a
    /// name.
    pub fn new(records: Vec<SequenceRecord>) -> Result<Self, MaskError> {
        let mut indices = IndexMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if indices.insert(record.name.clone(), index).is_some() {
                return Err(MaskError::DuplicateSequenceName(record.name.clone()));
            }
        }
        Ok(Self { records, indices })
    }

    /// Create a new [`SequenceDictionary`] from a map of sequence names to
    /// their lengths, preserving the map's order.
    pub fn from_seqlens(seqlens: &IndexMap<String, Position>) -> Self {
        let records = seqlens
            .iter()
            .map(|(name, length)| SequenceRecord::new(name, *length))
            .collect();
        // map keys are unique, so this cannot fail
        Self::new(records).unwrap_or_default()
    }

    /// The number of sequences in the dictionary.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the record at the given sequence index, or `None` if the index is
    /// beyond the table.
    pub fn get(&self, index: usize) -> Option<&SequenceRecord> {
        self.records.get(index)
    }

    /// Get the length of the sequence at the given index, or `None` if the
    /// index is beyond the table.
    pub fn length(&self, index: usize) -> Option<Position> {
        self.records.get(index).map(|record| record.length)
    }

    /// Get the index of the sequence with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Iterate over the records in sequence-index order.
    pub fn iter(&self) -> impl Iterator<Item = &SequenceRecord> {
        self.records.iter()
    }
}

impl TryFrom<Vec<SequenceRecord>> for SequenceDictionary {
    type Error = MaskError;

    fn try_from(records: Vec<SequenceRecord>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}

impl From<SequenceDictionary> for Vec<SequenceRecord> {
    fn from(dictionary: SequenceDictionary) -> Self {
        dictionary.records
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::seqlens;

    #[test]
    fn test_new_rejects_duplicate_names() {
        let records = vec![
            SequenceRecord::new("chr1", 100),
            SequenceRecord::new("chr1", 50),
        ];
        let result = SequenceDictionary::new(records);
        assert_eq!(
            result,
            Err(MaskError::DuplicateSequenceName("chr1".to_string()))
        );
    }

    #[test]
    fn test_from_seqlens_preserves_order() {
        let dictionary = SequenceDictionary::from_seqlens(&seqlens! {
            "chr2" => 50,
            "chr1" => 100,
        });
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get(0).unwrap().name, "chr2");
        assert_eq!(dictionary.length(0), Some(50));
        assert_eq!(dictionary.length(1), Some(100));
        assert_eq!(dictionary.length(2), None);
        assert_eq!(dictionary.index_of("chr1"), Some(1));
        assert_eq!(dictionary.index_of("chrX"), None);
    }

    #[test]
    fn test_serde_round_trip_rebuilds_indices() {
        let dictionary = SequenceDictionary::from_seqlens(&seqlens! {
            "chr1" => 100,
            "chr2" => 50,
        });
        let json = serde_json::to_string(&dictionary).unwrap();
        let deserialized: SequenceDictionary = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, dictionary);
        assert_eq!(deserialized.index_of("chr2"), Some(1));
    }

    #[test]
    fn test_serde_rejects_duplicate_names() {
        let json = r#"[{"name":"chr1","length":100},{"name":"chr1","length":50}]"#;
        let result: Result<SequenceDictionary, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
