//! # RefMask
//!
//! RefMask is a small library for *reference sequence masks*: predicates over
//! genomic loci that tell a downstream consumer which positions of a reference
//! genome are "of interest". Tools that iterate over loci (e.g. per-base
//! callers or coverage summarizers) can take any [`ReferenceSequenceMask`]
//! and visit only the positions the mask reports as set.
//!
//! The crate ships:
//!
//!  - [`SequenceDictionary`], an ordered table of named reference sequences
//!    and their lengths, as used by genomic file formats.
//!  - The [`ReferenceSequenceMask`] capability trait.
//!  - [`WholeGenomeMask`], the default mask variant for which *every* position
//!    within the bounds of the dictionary is of interest.
//!
//! Loading dictionaries from files is left to callers; dictionaries here are
//! built programmatically, e.g. with the [`seqlens!`] macro:
//!
//! ```
//! use refmask::prelude::*;
//! use refmask::seqlens;
//!
//! let dictionary = SequenceDictionary::from_seqlens(&seqlens! {
//!     "chr1" => 100,
//!     "chr2" => 50,
//! });
//! let mask = WholeGenomeMask::new(&dictionary)?;
//! assert!(mask.get(0, 100)?);
//! assert!(!mask.get(0, 101)?);
//! # Ok::<(), refmask::error::MaskError>(())
//! ```
//!
//! [`SequenceDictionary`]: crate::dictionary::SequenceDictionary
//! [`ReferenceSequenceMask`]: crate::masks::ReferenceSequenceMask
//! [`WholeGenomeMask`]: crate::masks::whole_genome::WholeGenomeMask

pub mod dictionary;
pub mod error;
pub mod masks;
pub mod test_utilities;

/// The 1-based position type (also used for sequence lengths).
pub type Position = u32;

/// The sequence index type. Signed, following the SAM convention of 32-bit
/// reference indices where negative values are representable but never valid
/// queries.
pub type SequenceIndex = i32;

/// Create an [`IndexMap`] of sequence names and their lengths.
///
/// [`IndexMap`]: indexmap::IndexMap
#[macro_export]
macro_rules! seqlens {
    ($($name:expr => $length:expr),* $(,)?) => {
        {
            let mut seqlens = indexmap::IndexMap::new();
            $(seqlens.insert($name.to_string(), $length);)*
            seqlens
        }
    };
}

pub mod prelude {
    pub use crate::dictionary::{SequenceDictionary, SequenceRecord};
    pub use crate::error::MaskError;
    pub use crate::masks::whole_genome::WholeGenomeMask;
    pub use crate::masks::ReferenceSequenceMask;
    pub use crate::{Position, SequenceIndex};
}
