use std::collections::HashMap;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::state::State;
use super::{Context, Token};
use crate::error::{ChainError, Result};

/// Fixed-order transition table of a Markov chain.
///
/// Maps every context of `order` consecutive tokens seen in the training
/// sequence to the bag of tokens that followed it.
///
/// # Responsibilities
/// - Build the table in one pass over a token sequence
/// - Look up the successor bag of a context
/// - Pick a uniformly random context to start a walk
///
/// # Invariants
/// - `order` is always >= 1
/// - Each key in `index` has exactly `order` tokens and points at the state
///   holding the same key
/// - `states` keeps contexts in order of first observation, so a seeded
///   random source always selects the same start context
/// - Never mutated once built
#[derive(Clone, Debug)]
pub struct ChainTable {
	/// Number of tokens in a context
	order: usize, // must be >= 1

	/// States in order of first observation
	states: Vec<State>,

	/// Context to position in `states`
	index: HashMap<Context, usize>,
}

impl ChainTable {
	/// Builds the table from a token sequence.
	///
	/// For every index `i` in `[0, len - order)`, the context
	/// `tokens[i..i + order]` receives `tokens[i + order]` as a successor.
	/// A sequence with no more than `order` tokens gives an empty table,
	/// which is a valid state.
	///
	/// # Errors
	/// Returns `ChainError::InvalidConfiguration` if `order` is 0.
	pub fn build(tokens: &[Token], order: usize) -> Result<Self> {
		if order == 0 {
			return Err(ChainError::InvalidConfiguration { order });
		}

		let mut table = Self { order, states: Vec::new(), index: HashMap::new() };

		// Each window is a context followed by its successor
		for window in tokens.windows(order + 1) {
			let (context, successor) = window.split_at(order);
			let position = match table.index.get(context) {
				Some(position) => *position,
				None => {
					table.states.push(State::new(context.to_vec()));
					table.index.insert(context.to_vec(), table.states.len() - 1);
					table.states.len() - 1
				}
			};
			table.states[position].add_successor(successor[0].clone());
		}

		debug!(
			"built chain table: order={}, tokens={}, contexts={}",
			order,
			tokens.len(),
			table.states.len()
		);

		Ok(table)
	}

	/// Returns the order of the table.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// Returns `true` if no context has a recorded successor.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Returns the state of `context`, or `None` if it was never observed.
	pub fn get(&self, context: &[Token]) -> Option<&State> {
		self.index.get(context).map(|position| &self.states[*position])
	}

	/// Returns `true` if `context` was observed with a successor.
	pub fn contains(&self, context: &[Token]) -> bool {
		self.index.contains_key(context)
	}

	/// All states, in order of first observation.
	pub fn states(&self) -> &[State] {
		&self.states
	}

	/// Total number of recorded successors across all bags.
	///
	/// Equals `len(tokens) - order` for a non-empty table.
	pub fn successor_count(&self) -> usize {
		self.states.iter().map(State::len).sum()
	}

	/// Picks a context uniformly among the distinct keys.
	///
	/// Not weighted by bag size: a context seen once is as likely as one
	/// seen a hundred times. Returns `None` if the table is empty.
	pub fn random_context<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&[Token]> {
		self.states.choose(rng).map(State::key)
	}
}
