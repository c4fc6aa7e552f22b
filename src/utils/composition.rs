//! Base composition statistics over validated sequences.

use crate::functions::validator::Sequence;

/// Occurrence counts for each nucleotide base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseCounts {
    pub a: u64,
    pub t: u64,
    pub c: u64,
    pub g: u64,
}

impl BaseCounts {
    pub fn total(&self) -> u64 {
        self.a + self.t + self.c + self.g
    }
}

/// Count the occurrences of each base.
pub fn base_frequencies(seq: &Sequence) -> BaseCounts {
    let bytes = seq.as_bytes();
    BaseCounts {
        a: bytecount::count(bytes, b'A') as u64,
        t: bytecount::count(bytes, b'T') as u64,
        c: bytecount::count(bytes, b'C') as u64,
        g: bytecount::count(bytes, b'G') as u64,
    }
}

/// AT content as a fraction of sequence length, rounded to `digits`
/// decimal places.
pub fn at_content(seq: &Sequence, digits: u32) -> f64 {
    let counts = base_frequencies(seq);
    round_to((counts.a + counts.t) as f64 / seq.len() as f64, digits)
}

/// GC content as a fraction of sequence length, rounded to `digits`
/// decimal places.
pub fn gc_content(seq: &Sequence, digits: u32) -> f64 {
    let counts = base_frequencies(seq);
    round_to((counts.g + counts.c) as f64 / seq.len() as f64, digits)
}

fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
