//! Core pipeline: validate, count, format.

pub mod formatter;
pub mod kmer_counter;
pub mod validator;
