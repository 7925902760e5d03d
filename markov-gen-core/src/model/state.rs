use rand::Rng;
use rand::seq::IndexedRandom;

use super::{Context, Token};

/// Represents a state in a Markov chain.
///
/// A `State` corresponds to a fixed context (`key`) and stores every token
/// observed right after it, in observation order.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by how often they appear in the bag.
///
/// ## Invariants
/// - All successors were observed after the same `key`
/// - Duplicates are kept: frequency is encoded by repetition
/// - A state always holds at least one successor once built by `ChainTable`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
	/// Context identifying the state (exactly `order` tokens).
	key: Context,
	/// Successor bag.
	/// Example: ["b", "b", "c"] makes "b" twice as likely as "c".
	successors: Vec<Token>,
}

impl State {
	/// Creates a new empty state for the given context.
	pub(crate) fn new(key: Context) -> Self {
		Self { key, successors: Vec::new() }
	}

	/// Records one more occurrence of `successor` after this context.
	pub(crate) fn add_successor(&mut self, successor: Token) {
		self.successors.push(successor);
	}

	/// Returns the context of this state.
	pub fn key(&self) -> &[Token] {
		&self.key
	}

	/// Returns the successor bag in observation order.
	pub fn successors(&self) -> &[Token] {
		&self.successors
	}

	/// Number of recorded successors, duplicates included.
	pub fn len(&self) -> usize {
		self.successors.len()
	}

	/// Returns `true` if no successor was recorded.
	pub fn is_empty(&self) -> bool {
		self.successors.is_empty()
	}

	/// Picks a successor uniformly from the bag.
	///
	/// The probability of a token value is proportional to how many times it
	/// was observed. Returns `None` if the bag is empty.
	pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Token> {
		self.successors.choose(rng)
	}
}
