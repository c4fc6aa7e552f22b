//! TSV report rendering for k-mer counts.

use std::fmt;
use std::str::FromStr;

use crate::error::{KmerError, Result};
use crate::functions::kmer_counter::KmerCounts;

const HEADER: &str = "# kmer\tfrequency";

/// Ordering policy for the rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// First-appearance order, as recorded during counting.
    #[default]
    Appearance,
    /// Descending count. The sort is stable, so k-mers with equal counts
    /// keep their first-appearance order.
    Frequency,
    /// Ascending lexicographic order by k-mer.
    Kmer,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Appearance => "appearance",
            SortOrder::Frequency => "frequency",
            SortOrder::Kmer => "kmer",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = KmerError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "appearance" => Ok(SortOrder::Appearance),
            "frequency" => Ok(SortOrder::Frequency),
            "kmer" => Ok(SortOrder::Kmer),
            other => Err(KmerError::UnknownSortOrder(other.to_string())),
        }
    }
}

/// Render the frequency table as tab-separated text.
///
/// The first line is `# kmer<TAB>frequency`, followed by one
/// `<kmer><TAB><count>` line per entry in the requested order. No trailing
/// newline.
pub fn format_counts(counts: &KmerCounts, order: SortOrder) -> String {
    let mut entries: Vec<(&str, u64)> = counts.iter().collect();
    match order {
        SortOrder::Appearance => {}
        SortOrder::Frequency => entries.sort_by(|a, b| b.1.cmp(&a.1)),
        SortOrder::Kmer => entries.sort_by(|a, b| a.0.cmp(b.0)),
    }

    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(HEADER.to_string());
    for (kmer, count) in entries {
        lines.push(format!("{kmer}\t{count}"));
    }
    lines.join("\n")
}
