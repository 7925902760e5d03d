use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a whole text file, used as a training corpus.
///
/// - Reads the entire file into memory
/// - Keeps line breaks, which are tokens at the character level
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
