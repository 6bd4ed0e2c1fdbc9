//! Markov model construction and text generation.
//!
//! The model is built once from an n-gram frequency table and is
//! immutable afterwards; only the walk state inside a generation call
//! evolves.

/// Weighted random-walk text generation over a built model.
pub mod generator;

/// The Markov model: prefix transition table plus starts table.
pub mod markov;

/// Internal representation of a single transition bucket.
///
/// Tracks outgoing weighted transitions and hosts the weighted-choice
/// sampling primitive. This module is not exposed publicly.
mod state;
