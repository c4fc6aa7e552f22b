use kmer_tally::{SortOrder, count_kmers, format_counts, validate_sequence};

fn main() {
    let seq = validate_sequence("ATCGATCGATTACA").unwrap();
    let k = 3;

    let counts = count_kmers(&seq, k).unwrap();

    println!("{} windows, {} unique {k}-mers", counts.total(), counts.len());
    println!("{}", format_counts(&counts, SortOrder::Frequency));
}
