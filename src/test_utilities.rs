//! Test cases and test utility functions.
//!

use rand::{thread_rng, Rng};

use crate::{
    dictionary::{SequenceDictionary, SequenceRecord},
    Position,
};

// number of chromosome sequences
pub const NCHROM: usize = 22;

// chromosome sizes
pub const MIN_CHROM_LEN: Position = 50_000_000;
pub const MAX_CHROM_LEN: Position = 250_000_000;

/// Build a random sequence length
pub fn random_seqlen() -> Position {
    let mut rng = thread_rng();
    rng.gen_range(MIN_CHROM_LEN..=MAX_CHROM_LEN)
}

/// Build a random [`SequenceDictionary`] of `nchrom` chromosomes named
/// `chr1`, `chr2`, ... with random lengths.
pub fn random_dictionary(nchrom: usize) -> SequenceDictionary {
    let records = (1..=nchrom)
        .map(|i| SequenceRecord::new(format!("chr{}", i), random_seqlen()))
        .collect();
    SequenceDictionary::new(records).unwrap()
}

/// A fixed two-sequence dictionary: chr1 of length 100, chr2 of length 50.
pub fn dictionary_test_case_01() -> SequenceDictionary {
    let records = vec![
        SequenceRecord::new("chr1", 100),
        SequenceRecord::new("chr2", 50),
    ];
    SequenceDictionary::new(records).unwrap()
}
