//! Markov-chain-based text generation library.
//!
//! This crate provides a fixed-order Markov chain over text including:
//! - Character-level and word-level tokenization
//! - A context to successor-bag table built in one pass
//! - Random-walk generation with an injectable random source
//!
//! Degenerate inputs never fail: they produce empty or shorter output.
//! The only rejected configuration is an order of 0.

/// Markov chain model and generation logic.
pub mod model;

/// Crate error type.
pub mod error;

/// I/O utilities (corpus loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::{ChainError, Result};
pub use model::{ChainConfig, Level, MarkovChain};
