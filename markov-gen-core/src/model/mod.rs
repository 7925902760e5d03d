//! Markov chain text generation.
//!
//! - Tokenization levels and rendering (`Level`)
//! - Successor bags (`State`) and the fixed-order transition table (`ChainTable`)
//! - Construction parameters (`ChainConfig`)
//! - The trained model and its random walk (`MarkovChain`)

/// Atomic unit of text: a single character or a whitespace-delimited word.
pub type Token = String;

/// `order` consecutive tokens used as a table key.
pub type Context = Vec<Token>;

/// Character and word tokenization, and the matching join strategies.
pub mod level;

/// One context and the bag of tokens observed after it.
pub mod state;

/// Fixed-order context to successor-bag table.
///
/// Built in a single pass, read-only afterwards.
pub mod chain_table;

/// Construction parameters (order, level, seed) and their validation.
pub mod chain_config;

/// Public model: train from text, generate text.
pub mod markov_chain;

pub use chain_config::{ChainConfig, DEFAULT_ORDER};
pub use chain_table::ChainTable;
pub use level::Level;
pub use markov_chain::{DEFAULT_LENGTH, MarkovChain};
pub use state::State;
