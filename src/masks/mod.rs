//! Mask variants over reference genome loci.
//!
//! The [`ReferenceSequenceMask`] trait is the capability shared by all mask
//! variants. Consumers that walk loci depend only on this trait, so a tool
//! written against it works with any variant, e.g. the all-set
//! [`whole_genome::WholeGenomeMask`].

use crate::{error::MaskError, Position, SequenceIndex};

pub mod whole_genome;

/// A predicate over genomic loci indicating which are "of interest".
///
/// Positions are 1-based. Methods take `&self`; implementations that keep an
/// internal lookup cache use interior mutability, so a mask is generally not
/// safe to share across threads without external locking.
pub trait ReferenceSequenceMask {
    /// Return whether the mask is set for the given sequence and position.
    ///
    /// A sequence index beyond the last known sequence is not an error: no
    /// positions on an unknown sequence are set, so this returns `Ok(false)`.
    /// A negative sequence index fails with
    /// [`MaskError::NegativeSequenceIndex`].
    fn get(&self, sequence_index: SequenceIndex, position: Position) -> Result<bool, MaskError>;

    /// Return the next set position on the given sequence greater than
    /// `position`, or `None` if there are no more set positions.
    fn next_position(
        &self,
        sequence_index: SequenceIndex,
        position: Position,
    ) -> Result<Option<Position>, MaskError> {
        let Some(next) = position.checked_add(1) else {
            // Position::MAX has no successor; the index still gets validated.
            if sequence_index < 0 {
                return Err(MaskError::NegativeSequenceIndex(sequence_index));
            }
            return Ok(None);
        };
        if self.get(sequence_index, next)? {
            Ok(Some(next))
        } else {
            Ok(None)
        }
    }

    /// The largest sequence index for which the mask has any set positions.
    fn max_sequence_index(&self) -> SequenceIndex;

    /// The largest set position on the last sequence index.
    fn max_position(&self) -> Position;
}
