use std::env::VarError;

use markov_gen_core::model::DEFAULT_LENGTH;
use markov_gen_core::{ChainConfig, Level, MarkovChain};

const SAMPLE_TEXT: &str = "
    To be, or not to be, that is the question:
    Whether 'tis nobler in the mind to suffer
    The slings and arrows of outrageous fortune,
    Or to take Arms against a Sea of troubles,
    And by opposing end them: to die, to sleep
    No more; and by a sleep, to say we end
    The heart-ache, and the thousand natural shocks
    That Flesh is heir to? 'Tis a consummation
    Devoutly to be wished. To die, to sleep,
    To sleep, perchance to Dream; aye, there's the rub,
    For in that sleep of death, what dreams may come,
    When we have shuffled off this mortal coil,
    Must give us pause. There's the respect
    That makes Calamity of so long life:
    ";

/// Reads the corpus file if one was given, returns the sample text otherwise.
fn load_text(corpus: Option<&str>) -> std::io::Result<String> {
    match corpus {
        Some(path) => std::fs::read_to_string(path),
        None => Ok(SAMPLE_TEXT.to_owned()),
    }
}

/// Parses the `MARKOV_SEED` lookup: unset means no seed, anything else must be a `u64`.
fn parse_seed(var: Result<String, VarError>) -> Result<Option<u64>, Box<dyn std::error::Error>> {
    match var {
        Ok(value) => Ok(Some(value.trim().parse::<u64>()?)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows table statistics
    env_logger::init();

    // Optional corpus file as first argument, the soliloquy otherwise
    let corpus = std::env::args().nth(1);
    let text = load_text(corpus.as_deref())?;

    // MARKOV_SEED makes the output reproducible
    let seed = parse_seed(std::env::var("MARKOV_SEED"))?;

    let mut char_config = ChainConfig::new(3, Level::Character);
    let mut word_config = ChainConfig::new(2, Level::Word);
    if let Some(seed) = seed {
        log::info!("using seed {}", seed);
        char_config = char_config.with_seed(seed);
        word_config = word_config.with_seed(seed);
    }

    // Character-level model
    let mut char_model = MarkovChain::with_config(&text, char_config)?;
    println!("Character-level generation:");
    println!("{}", char_model.generate(DEFAULT_LENGTH, None));
    println!("\n");

    // Word-level model
    let mut word_model = MarkovChain::with_config(&text, word_config)?;
    println!("Word-level generation:");
    println!("{}", word_model.generate(50, None));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_seed_is_none() {
        assert_eq!(parse_seed(Err(VarError::NotPresent)).unwrap(), None);
    }

    #[test]
    fn numeric_seed_is_parsed() {
        assert_eq!(parse_seed(Ok("42".to_owned())).unwrap(), Some(42));
        assert!(parse_seed(Ok("forty-two".to_owned())).is_err());
    }

    #[test]
    fn non_unicode_seed_is_an_error() {
        let raw = std::ffi::OsString::from("seed");
        assert!(parse_seed(Err(VarError::NotUnicode(raw))).is_err());
    }

    #[test]
    fn corpus_is_read_once_for_both_models() {
        let path = std::env::temp_dir().join(format!("markov-gen-exemple-{}.txt", std::process::id()));
        std::fs::write(&path, "a b a c a b").unwrap();
        let text = load_text(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();

        let chars = MarkovChain::with_config(&text, ChainConfig::new(3, Level::Character)).unwrap();
        let words = MarkovChain::with_config(&text, ChainConfig::new(2, Level::Word)).unwrap();
        assert_eq!(chars.table().successor_count(), text.chars().count() - 3);
        assert_eq!(words.table().successor_count(), 4);
    }

    #[test]
    fn sample_text_without_corpus() {
        assert_eq!(load_text(None).unwrap(), SAMPLE_TEXT);
    }
}
