use std::path::Path;

use log::{trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Token;
use super::chain_config::ChainConfig;
use super::chain_table::ChainTable;
use super::level::Level;
use crate::error::Result;
use crate::io::read_corpus;

/// Default number of tokens requested by a generation.
pub const DEFAULT_LENGTH: usize = 100;

/// A fixed-order Markov chain trained on a text.
///
/// Tokenizes the text at the configured `Level`, builds the transition
/// table once, and generates new text by random walk over that table.
///
/// # Randomness
/// - `generate` draws from the model's own `StdRng`, seeded from
///   `ChainConfig::seed` when present
/// - `generate_with` and `generate_tokens_with` take any `Rng`, leaving the
///   model untouched
#[derive(Debug)]
pub struct MarkovChain {
	config: ChainConfig,
	table: ChainTable,
	rng: StdRng,
}

impl MarkovChain {
	/// Trains a model on `text` with the given order and level.
	///
	/// # Errors
	/// Returns `ChainError::InvalidConfiguration` if `order` is 0.
	pub fn new(text: &str, order: usize, level: Level) -> Result<Self> {
		Self::with_config(text, ChainConfig::new(order, level))
	}

	/// Trains a model on `text` using a full configuration.
	///
	/// Empty text, or text with no more tokens than `order`, gives a model
	/// that always generates an empty string.
	pub fn with_config(text: &str, config: ChainConfig) -> Result<Self> {
		let tokens = config.level.tokenize(text);
		Self::from_tokens(&tokens, config)
	}

	/// Trains a model on the contents of a text file.
	///
	/// # Errors
	/// Returns `ChainError::Io` if the file cannot be read, or
	/// `ChainError::InvalidConfiguration` if `order` is 0.
	pub fn from_corpus<P: AsRef<Path>>(filepath: P, config: ChainConfig) -> Result<Self> {
		let text = read_corpus(filepath)?;
		Self::with_config(&text, config)
	}

	/// Builds a model from an already tokenized sequence.
	///
	/// The tokens are only borrowed for construction; the model keeps the
	/// table alone.
	pub fn from_tokens(tokens: &[Token], config: ChainConfig) -> Result<Self> {
		config.validate()?;
		let table = ChainTable::build(tokens, config.order)?;
		let rng = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Ok(Self { config, table, rng })
	}

	/// Returns the order of the model.
	pub fn order(&self) -> usize {
		self.config.order
	}

	/// Returns the tokenization level of the model.
	pub fn level(&self) -> Level {
		self.config.level
	}

	/// Returns the configuration used to build the model.
	pub fn config(&self) -> &ChainConfig {
		&self.config
	}

	/// Read-only access to the transition table.
	pub fn table(&self) -> &ChainTable {
		&self.table
	}

	/// Generates text with the model's own random source.
	///
	/// See `generate_tokens_with` for the walk itself.
	pub fn generate(&mut self, length: usize, start: Option<&[Token]>) -> String {
		let tokens = walk(&self.table, &mut self.rng, length, start);
		self.render(&tokens)
	}

	/// Generates text drawing from `rng`.
	pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R, length: usize, start: Option<&[Token]>) -> String {
		let tokens = self.generate_tokens_with(rng, length, start);
		self.render(&tokens)
	}

	/// Generates a token sequence drawing from `rng`.
	///
	/// # Behavior
	/// - Empty table: returns an empty sequence, whatever `start` is.
	/// - Without `start`, the walk begins at a context chosen uniformly among
	///   the distinct contexts of the table.
	/// - A supplied `start` is used verbatim, even if unknown or of the wrong
	///   arity; the walk then simply stops at the first lookup.
	/// - Appends up to `length - order` tokens, each drawn from the bag of the
	///   last `order` tokens, and stops early on a context never observed.
	///
	/// The result always holds the full start context, so it can be longer
	/// than `length` when `length < order`.
	pub fn generate_tokens_with<R: Rng + ?Sized>(&self, rng: &mut R, length: usize, start: Option<&[Token]>) -> Vec<Token> {
		walk(&self.table, rng, length, start)
	}

	/// Joins tokens into text according to the model level.
	pub fn render<T: AsRef<str>>(&self, tokens: &[T]) -> String {
		self.config.level.join(tokens)
	}
}

/// Random walk over `table`.
fn walk<R: Rng + ?Sized>(table: &ChainTable, rng: &mut R, length: usize, start: Option<&[Token]>) -> Vec<Token> {
	if table.is_empty() {
		return Vec::new();
	}

	let order = table.order();
	let mut result: Vec<Token> = match start {
		Some(start) => {
			if start.len() != order {
				warn!("start context has {} tokens, model order is {}", start.len(), order);
			}
			start.to_vec()
		}
		None => match table.random_context(rng) {
			Some(context) => context.to_vec(),
			None => return Vec::new(),
		},
	};

	// The current context is `result[from..]`
	let mut from = 0;
	for _ in 0..length.saturating_sub(order) {
		let Some(state) = table.get(&result[from..]) else {
			trace!("walk stopped on an unseen context after {} tokens", result.len());
			break;
		};
		let Some(next) = state.pick(rng) else {
			break;
		};
		result.push(next.clone());
		from = result.len().saturating_sub(order);
	}

	result
}
