//! Character n-gram statistics and Markov chain text generation.
//!
//! This crate provides the two halves of a lorem-ipsum style pipeline:
//! - Text normalization and n-gram frequency counting
//! - An order-(n-1) Markov chain over characters with weighted
//!   random-walk generation
//! - The plain-text table format exchanged between the two stages
//!
//! The `ngram` and `lorem` binaries are thin wrappers around this
//! library.

/// Core Markov model and generation logic.
///
/// Exposes the model builder and the weighted random walk while the
/// low-level transition buckets stay private.
pub mod model;

/// Text normalization and n-gram counting.
pub mod text;

/// The plain-text n-gram table format (render and parse).
pub mod format;

/// Crate-wide error type.
pub mod error;
