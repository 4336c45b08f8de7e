//! The [`MaskError`] `enum` definition and error messages.
//!
use crate::SequenceIndex;
use thiserror::Error;

/// The [`MaskError`] defines the standard set of errors that should
/// be passed to the user.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MaskError {
    // Mask query errors
    #[error("Negative sequence index: {0}")]
    NegativeSequenceIndex(SequenceIndex),

    // Sequence dictionary errors
    #[error("Sequence dictionary is empty; a mask needs at least one sequence")]
    EmptySequenceDictionary,
    #[error("Duplicate sequence name '{0}' in sequence dictionary")]
    DuplicateSequenceName(String),
}
