//! Character-level trigram language model.
//!
//! This crate provides a byte-level statistical text generator including:
//! - Add-one smoothed unigram, bigram and trigram frequency tables
//! - Distribution derivation with trigram → bigram → unigram backoff
//! - Temperature-controlled sampling
//! - A lazy generator filtering its output to printable ASCII
//!
//! Only the high-level API is exposed publicly. Table internals are kept
//! behind accessors so the smoothing invariant cannot be broken from outside.

/// Trigram model, backoff, sampling and generation.
pub mod model;

/// Corpus loading.
pub mod io;

/// Error type shared by the whole crate.
pub mod error;

pub use error::{Result, TrigramError};
