//! Shell-style command-line splitting for argument vectors.
//!
//! The crate turns one shell-style command line into an ordered argument
//! vector backed by a single contiguous data buffer, following POSIX-like
//! quoting and escaping rules. It performs no expansion and interprets no
//! shell operators.

pub mod tokenizer;
