use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::debug;

use kmer_tally::{
    KmerSize, SortOrder, count_kmers, format_counts, validate_bytes, validate_sequence,
};

/// Count the frequency of every k-mer in a DNA sequence.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// DNA sequence (A, T, C, G; lowercase accepted).
    #[arg(
        value_name = "SEQUENCE",
        required_unless_present = "fasta",
        conflicts_with = "fasta"
    )]
    sequence: Option<String>,

    /// K-mer size (positive integer, at most the sequence length).
    #[arg(short, long, value_name = "INT")]
    kmer_size: KmerSize,

    /// Output order: appearance (default), frequency (descending),
    /// or kmer (alphabetical).
    #[arg(long, value_name = "ORDER", default_value_t = SortOrder::Appearance)]
    sort: SortOrder,

    /// Read the sequence from the first record of a FASTA/FASTQ file
    /// instead of the command line.
    #[arg(long, value_name = "FILE")]
    fasta: Option<PathBuf>,

    /// Show processing details on standard error.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    log_builder(args.verbose, std::env::var("RUST_LOG").ok().as_deref()).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// The verbose flag sets the baseline filter; RUST_LOG is applied on top so
/// the environment can still raise verbosity.
fn log_builder(verbose: bool, env_filter: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    });
    if let Some(filters) = env_filter {
        builder.parse_filters(filters);
    }
    builder
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    // File records stay raw bytes until validation so non-text input is
    // reported as a shape error, not as invalid nucleotides.
    let seq = match &args.fasta {
        Some(path) => validate_bytes(&first_record_bytes(path)?)?,
        // clap guarantees the positional is present when --fasta is absent
        None => validate_sequence(args.sequence.as_deref().unwrap_or_default())?,
    };
    debug!("sequence length: {}", seq.len());
    debug!("k: {}", args.kmer_size.get());

    let counts = count_kmers(&seq, args.kmer_size.get())?;
    debug!("total k-mers: {}", counts.total());
    debug!("unique k-mers: {}", counts.len());
    if let Some((kmer, count)) = counts.most_frequent() {
        debug!("most frequent k-mer: {kmer} ({count}x)");
    }

    println!("{}", format_counts(&counts, args.sort));
    Ok(())
}

fn first_record_bytes(path: &Path) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut reader = needletail::parse_fastx_file(path)?;
    let record = reader
        .next()
        .ok_or_else(|| format!("no sequence records in {}", path.display()))??;
    Ok(record.seq().into_owned())
}
