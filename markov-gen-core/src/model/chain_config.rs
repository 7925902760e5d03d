use serde::{Deserialize, Serialize};

use super::level::Level;
use crate::error::{ChainError, Result};

/// Default number of tokens in a context.
pub const DEFAULT_ORDER: usize = 2;

/// Construction parameters of a `MarkovChain`.
///
/// Missing fields fall back to their defaults when deserialized,
/// so `{"level": "word"}` is a valid configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ChainConfig {
	/// Number of preceding tokens used as context (must be >= 1).
	pub order: usize,

	/// Tokenization and rendering granularity.
	pub level: Level,

	/// Seed of the model's own random source.
	/// `None` seeds from the operating system, making output non-reproducible.
	pub seed: Option<u64>,
}

impl Default for ChainConfig {
	fn default() -> Self {
		Self { order: DEFAULT_ORDER, level: Level::default(), seed: None }
	}
}

impl ChainConfig {
	/// Creates a configuration with the given order and level, without seed.
	pub fn new(order: usize, level: Level) -> Self {
		Self { order, level, seed: None }
	}

	/// Sets the seed.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	/// Checks the configuration.
	///
	/// # Errors
	/// Returns `ChainError::InvalidConfiguration` if `order` is 0.
	pub fn validate(&self) -> Result<()> {
		if self.order == 0 {
			return Err(ChainError::InvalidConfiguration { order: self.order });
		}
		Ok(())
	}
}
