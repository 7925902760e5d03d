use thiserror::Error;

/// Result type alias for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;

/// Errors raised while configuring or feeding a Markov chain.
///
/// Degenerate inputs (empty text, text shorter than the order, unseen
/// contexts during a walk) are not errors: they yield an empty or shorter
/// output instead.
#[derive(Error, Debug)]
pub enum ChainError {
	/// The chain order must be at least 1.
	#[error("invalid configuration: order must be >= 1, got {order}")]
	InvalidConfiguration {
		/// Rejected order value
		order: usize,
	},

	/// Failed to read a training corpus.
	#[error("failed to read corpus: {0}")]
	Io(#[from] std::io::Error),
}
