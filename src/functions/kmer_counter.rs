//! Sliding-window k-mer counting.
//!
//! Counts every overlapping substring of length k in a validated sequence.
//! The table remembers first-appearance order, which the formatter relies on
//! for the `appearance` policy and for frequency tie-breaking.

use std::str::FromStr;

use indexmap::IndexMap;
use xxhash_rust::xxh3::Xxh3Builder;

use crate::error::{KmerError, Result};
use crate::functions::validator::Sequence;

type KmerMap = IndexMap<String, u64, Xxh3Builder>;

/// Frequency table mapping each k-mer to its occurrence count.
///
/// Iteration order is the order in which k-mers were first seen during
/// counting. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct KmerCounts {
    counts: KmerMap,
}

impl KmerCounts {
    /// Count for a k-mer, 0 if absent.
    pub fn get(&self, kmer: &str) -> u64 {
        self.counts.get(kmer).copied().unwrap_or(0)
    }

    /// Number of distinct k-mers.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(kmer, &count)| (kmer.as_str(), count))
    }

    /// Total number of windows counted. Equals `len(seq) - k + 1`.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The k-mer with the highest count; ties go to the first one seen.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        let mut best: Option<(&str, u64)> = None;
        for (kmer, count) in self.iter() {
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((kmer, count)),
            }
        }
        best
    }
}

/// Count the frequency of every overlapping k-mer in `seq`.
///
/// Slides a window of width `k` across the sequence with stride 1 and
/// increments the count for each extracted substring, inserting entries in
/// first-appearance order.
///
/// Fails with [`KmerError::NonPositiveK`] if `k` is 0 and
/// [`KmerError::KTooLarge`] if `k` exceeds the sequence length.
pub fn count_kmers(seq: &Sequence, k: usize) -> Result<KmerCounts> {
    if k == 0 {
        return Err(KmerError::NonPositiveK(0));
    }
    if k > seq.len() {
        return Err(KmerError::KTooLarge { k, len: seq.len() });
    }

    let windows = seq.len() - k + 1;
    let mut counts = KmerMap::with_capacity_and_hasher(windows, Xxh3Builder::new());

    // Sequence is validated ASCII, so byte offsets are char offsets.
    let text = seq.as_str();
    for start in 0..windows {
        let kmer = &text[start..start + k];
        *counts.entry(kmer.to_owned()).or_insert(0) += 1;
    }

    Ok(KmerCounts { counts })
}

/// A k-mer size parsed from user input.
///
/// [`FromStr`] reproduces the argument checks the counter contract demands:
/// booleans and non-integer numerics are shape errors, zero and negative
/// integers are value errors. A constructed `KmerSize` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmerSize(usize);

impl KmerSize {
    pub fn get(self) -> usize {
        self.0
    }
}

impl FromStr for KmerSize {
    type Err = KmerError;

    fn from_str(raw: &str) -> Result<Self> {
        let text = raw.trim();
        if text.eq_ignore_ascii_case("true") {
            return Err(KmerError::BooleanK(true));
        }
        if text.eq_ignore_ascii_case("false") {
            return Err(KmerError::BooleanK(false));
        }
        match text.parse::<i64>() {
            Ok(value) if value <= 0 => Err(KmerError::NonPositiveK(value)),
            Ok(value) => usize::try_from(value)
                .map(KmerSize)
                .map_err(|_| KmerError::NonIntegerK(text.to_string())),
            Err(_) => Err(KmerError::NonIntegerK(text.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::functions::validator::validate_sequence;

    fn seq(text: &str) -> Sequence {
        validate_sequence(text).unwrap()
    }

    #[test]
    fn counts_overlapping_k2() {
        let counts = count_kmers(&seq("ATCGATCG"), 2).unwrap();
        assert_eq!(counts.get("AT"), 2);
        assert_eq!(counts.get("TC"), 2);
        assert_eq!(counts.get("CG"), 2);
        assert_eq!(counts.get("GA"), 1);
        assert_eq!(counts.len(), 4);
        assert_eq!(counts.total(), 7);
    }

    #[test]
    fn counts_overlapping_k3() {
        let counts = count_kmers(&seq("ATCGATCG"), 3).unwrap();
        assert_eq!(counts.get("ATC"), 2);
        assert_eq!(counts.get("TCG"), 2);
        assert_eq!(counts.get("CGA"), 1);
        assert_eq!(counts.get("GAT"), 1);
    }

    #[test]
    fn preserves_first_appearance_order() {
        let counts = count_kmers(&seq("ATCGATCG"), 2).unwrap();
        let order: Vec<&str> = counts.iter().map(|(kmer, _)| kmer).collect();
        assert_eq!(order, vec!["AT", "TC", "CG", "GA"]);
    }

    #[test]
    fn homopolymer_collapses_to_one_entry() {
        let counts = count_kmers(&seq("AAAA"), 2).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("AA"), 3);
    }

    #[test]
    fn monomers_k1() {
        let counts = count_kmers(&seq("ATCGATCG"), 1).unwrap();
        assert_eq!(counts.get("A"), 2);
        assert_eq!(counts.get("T"), 2);
        assert_eq!(counts.get("C"), 2);
        assert_eq!(counts.get("G"), 2);
    }

    #[test]
    fn k_equal_to_length_yields_single_window() {
        let counts = count_kmers(&seq("ATCG"), 4).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("ATCG"), 1);
    }

    #[test]
    fn alternating_sequence() {
        let counts = count_kmers(&seq("ATATAT"), 2).unwrap();
        assert_eq!(counts.get("AT"), 3);
        assert_eq!(counts.get("TA"), 2);
    }

    #[test]
    fn case_insensitive_counting() {
        let lower = count_kmers(&seq("atcgatcg"), 2).unwrap();
        let upper = count_kmers(&seq("ATCGATCG"), 2).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn rejects_k_zero() {
        let err = count_kmers(&seq("ATCG"), 0).unwrap_err();
        assert_eq!(err, KmerError::NonPositiveK(0));
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn rejects_k_larger_than_sequence() {
        let err = count_kmers(&seq("AT"), 5).unwrap_err();
        assert_eq!(err, KmerError::KTooLarge { k: 5, len: 2 });
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn long_repeated_sequence() {
        let text = "ATCG".repeat(10_000);
        let counts = count_kmers(&seq(&text), 2).unwrap();
        assert_eq!(counts.get("AT"), 10_000);
        assert_eq!(counts.get("TC"), 10_000);
        assert_eq!(counts.get("CG"), 10_000);
        assert_eq!(counts.get("GA"), 9_999);
        assert_eq!(counts.total(), 40_000 - 2 + 1);
    }

    #[test]
    fn most_frequent_breaks_ties_by_first_appearance() {
        // AT, TC, CG all occur twice; AT was seen first
        let counts = count_kmers(&seq("ATCGATCG"), 2).unwrap();
        assert_eq!(counts.most_frequent(), Some(("AT", 2)));
    }

    #[test]
    fn kmer_size_parses_positive_integers() {
        assert_eq!("3".parse::<KmerSize>().unwrap().get(), 3);
        assert_eq!(" 21 ".parse::<KmerSize>().unwrap().get(), 21);
    }

    #[test]
    fn kmer_size_rejects_booleans_as_type_errors() {
        let err = "true".parse::<KmerSize>().unwrap_err();
        assert_eq!(err, KmerError::BooleanK(true));
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(
            "False".parse::<KmerSize>().unwrap_err(),
            KmerError::BooleanK(false)
        );
    }

    #[test]
    fn kmer_size_rejects_fractional_numbers() {
        let err = "2.5".parse::<KmerSize>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn kmer_size_rejects_non_numeric_text() {
        let err = "two".parse::<KmerSize>().unwrap_err();
        assert_eq!(err, KmerError::NonIntegerK("two".into()));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn kmer_size_never_truncates_large_values() {
        // 2^32 + 2 must not wrap to 2 where usize is 32 bits
        match "4294967298".parse::<KmerSize>() {
            Ok(size) => assert_eq!(size.get() as u64, 4_294_967_298),
            Err(err) => assert_eq!(err.kind(), ErrorKind::Type),
        }
    }

    #[test]
    fn kmer_size_rejects_zero_and_negatives_as_value_errors() {
        assert_eq!(
            "0".parse::<KmerSize>().unwrap_err(),
            KmerError::NonPositiveK(0)
        );
        let err = "-5".parse::<KmerSize>().unwrap_err();
        assert_eq!(err, KmerError::NonPositiveK(-5));
        assert_eq!(err.kind(), ErrorKind::Value);
    }
}
