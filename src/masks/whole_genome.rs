//! The [`WholeGenomeMask`]: every locus in the sequence dictionary is of
//! interest.

use std::cell::Cell;

use crate::{
    dictionary::SequenceDictionary,
    error::MaskError,
    masks::ReferenceSequenceMask,
    Position, SequenceIndex,
};

/// A [`ReferenceSequenceMask`] that reports every position from 1 up to each
/// sequence's length as set, for every sequence in the dictionary.
///
/// The mask borrows the dictionary, which must remain unchanged for the
/// mask's lifetime. Lookups for the last-queried sequence are cached, so
/// walking along one sequence does not hit the table per position; the cache
/// is interior state with no observable effect beyond performance (and makes
/// the mask `!Sync`).
#[derive(Debug)]
pub struct WholeGenomeMask<'a> {
    dictionary: &'a SequenceDictionary,
    max_sequence_index: SequenceIndex,
    max_position: Position,
    // (sequence index, length) of the last lookup
    last_lookup: Cell<Option<(SequenceIndex, Position)>>,
}

impl<'a> WholeGenomeMask<'a> {
    /// Create a new [`WholeGenomeMask`] over the given dictionary.
    ///
    /// Returns [`MaskError::EmptySequenceDictionary`] if the dictionary has
    /// no sequences.
    pub fn new(dictionary: &'a SequenceDictionary) -> Result<Self, MaskError> {
        let last_index = dictionary
            .len()
            .checked_sub(1)
            .ok_or(MaskError::EmptySequenceDictionary)?;
        let max_position = dictionary
            .length(last_index)
            .ok_or(MaskError::EmptySequenceDictionary)?;
        Ok(Self {
            dictionary,
            max_sequence_index: last_index as SequenceIndex,
            max_position,
            last_lookup: Cell::new(None),
        })
    }
}

impl ReferenceSequenceMask for WholeGenomeMask<'_> {
    fn get(&self, sequence_index: SequenceIndex, position: Position) -> Result<bool, MaskError> {
        if sequence_index < 0 {
            return Err(MaskError::NegativeSequenceIndex(sequence_index));
        }
        if sequence_index > self.max_sequence_index {
            return Ok(false);
        }
        let length = match self.last_lookup.get() {
            Some((index, length)) if index == sequence_index => length,
            _ => match self.dictionary.length(sequence_index as usize) {
                Some(length) => {
                    self.last_lookup.set(Some((sequence_index, length)));
                    length
                }
                // unreachable given the bounds check above
                None => return Ok(false),
            },
        };
        Ok(position <= length)
    }

    fn max_sequence_index(&self) -> SequenceIndex {
        self.max_sequence_index
    }

    fn max_position(&self) -> Position {
        self.max_position
    }
}
