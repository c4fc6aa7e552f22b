//! Sequence validation and normalization.
//!
//! Validation is exhaustive: every offending character is collected and
//! reported in one error rather than failing on the first one.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{KmerError, Result};

/// The valid nucleotide alphabet, uppercase.
pub const NUCLEOTIDES: [u8; 4] = *b"ATCG";

static VALID_BASES: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    while i < NUCLEOTIDES.len() {
        table[NUCLEOTIDES[i] as usize] = true;
        i += 1;
    }
    table
};

#[inline(always)]
fn is_valid_base(c: char) -> bool {
    c.is_ascii() && VALID_BASES[c as usize]
}

/// A validated, uppercase DNA sequence.
///
/// Can only be obtained through [`validate_sequence`] or [`validate_bytes`],
/// so holders know the content is non-empty ASCII over {A, T, C, G} and can
/// slice it at any byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(String);

impl Sequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate a raw nucleotide string and normalize it to uppercase.
///
/// Surrounding whitespace is trimmed first. Fails with
/// [`KmerError::EmptySequence`] if nothing remains, or with
/// [`KmerError::InvalidNucleotides`] listing every character outside
/// {A, T, C, G} after uppercasing, deduplicated and sorted.
pub fn validate_sequence(input: &str) -> Result<Sequence> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(KmerError::EmptySequence);
    }

    let seq = trimmed.to_ascii_uppercase();

    let invalid: BTreeSet<char> = seq.chars().filter(|&c| !is_valid_base(c)).collect();
    if !invalid.is_empty() {
        let found = invalid
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(KmerError::InvalidNucleotides { found });
    }

    Ok(Sequence(seq))
}

/// Validate raw bytes as a nucleotide sequence.
///
/// Fails with [`KmerError::NotText`] if the bytes are not UTF-8, otherwise
/// behaves like [`validate_sequence`].
pub fn validate_bytes(input: &[u8]) -> Result<Sequence> {
    let text = std::str::from_utf8(input).map_err(KmerError::NotText)?;
    validate_sequence(text)
}
