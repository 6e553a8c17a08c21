//! Top-level module for the trigram generation system.
//!
//! This module provides:
//! - The fixed byte alphabet and its display filter (`alphabet`)
//! - Smoothed frequency tables (`tables`)
//! - The trained model owning the three tables (`TrigramModel`)
//! - Backoff distribution derivation (`distribution`)
//! - Temperature sampling (`sampler`)
//! - Generation configuration (`GenerationInput`)
//! - The lazy output stream (`Generator`)

/// Fixed 256-symbol alphabet, smoothing constants and the printable filter.
pub mod alphabet;

/// Flat, smoothed count tables for each n-gram order.
pub mod tables;

/// The trainer and the model object owning all three tables.
pub mod trigram_model;

/// Probability distribution derivation with trigram → bigram → unigram backoff.
pub mod distribution;

/// Temperature-scaled weighted sampling.
pub mod sampler;

/// Generation parameters with validated setters.
pub mod generation_input;

/// Lazy symbol generator driven by a trained model.
pub mod generator;
