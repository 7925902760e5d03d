use serde::{Deserialize, Serialize};

use super::Token;

/// Granularity at which text is cut into tokens.
///
/// The same level drives both directions: `tokenize` when training and
/// `join` when rendering generated tokens back into text.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
	/// One token per Unicode scalar value, whitespace and punctuation included.
	#[default]
	Character,
	/// One token per whitespace-delimited word.
	Word,
}

impl Level {
	/// Splits `text` into tokens.
	///
	/// - `Character`: every `char` becomes a token.
	/// - `Word`: runs of whitespace separate tokens, empty segments are dropped.
	///   No casing or punctuation normalization is applied.
	///
	/// Empty input yields an empty sequence.
	pub fn tokenize(&self, text: &str) -> Vec<Token> {
		match self {
			Level::Character => text.chars().map(String::from).collect(),
			Level::Word => text.split_whitespace().map(str::to_owned).collect(),
		}
	}

	/// Joins tokens back into text: plain concatenation for characters,
	/// single spaces for words.
	pub fn join<T: AsRef<str>>(&self, tokens: &[T]) -> String {
		let separator = match self {
			Level::Character => "",
			Level::Word => " ",
		};
		tokens
			.iter()
			.map(AsRef::as_ref)
			.collect::<Vec<&str>>()
			.join(separator)
	}
}
