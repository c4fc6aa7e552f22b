//! DNA k-mer counting.
//!
//! Three pure, single-pass stages: [`validate_sequence`] normalizes a raw
//! nucleotide string, [`count_kmers`] tallies every overlapping window of
//! length k in first-appearance order, and [`format_counts`] renders the
//! table as tab-separated text under a [`SortOrder`] policy.
//!
//! ```
//! use kmer_tally::{count_kmers, format_counts, validate_sequence, SortOrder};
//!
//! let seq = validate_sequence("atcgatcg").unwrap();
//! let counts = count_kmers(&seq, 2).unwrap();
//! assert_eq!(counts.total(), 7);
//! let report = format_counts(&counts, SortOrder::Frequency);
//! assert!(report.starts_with("# kmer\tfrequency"));
//! ```

pub mod error;
pub mod functions;
pub mod utils;

pub use error::{ErrorKind, KmerError, Result};
pub use functions::formatter::{SortOrder, format_counts};
pub use functions::kmer_counter::{KmerCounts, KmerSize, count_kmers};
pub use functions::validator::{NUCLEOTIDES, Sequence, validate_bytes, validate_sequence};
pub use utils::composition::{BaseCounts, at_content, base_frequencies, gc_content};
