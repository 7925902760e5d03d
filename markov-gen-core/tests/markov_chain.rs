use markov_gen_core::model::{ChainTable, Token};
use markov_gen_core::{ChainConfig, ChainError, Level, MarkovChain};
use rand::SeedableRng;
use rand::rngs::StdRng;

const HAMLET: &str = "To be, or not to be, that is the question:
Whether 'tis nobler in the mind to suffer
The slings and arrows of outrageous fortune,
Or to take Arms against a Sea of troubles,
And by opposing end them: to die, to sleep
No more; and by a sleep, to say we end
The heart-ache, and the thousand natural shocks
That Flesh is heir to? 'Tis a consummation
Devoutly to be wished. To die, to sleep,
To sleep, perchance to Dream; aye, there's the rub,";

fn tokens(values: &[&str]) -> Vec<Token> {
	values.iter().map(|t| (*t).to_owned()).collect()
}

#[test]
fn table_covers_every_window_and_nothing_else() {
	for level in [Level::Character, Level::Word] {
		let source = level.tokenize(HAMLET);
		for order in 1..=4 {
			let table = ChainTable::build(&source, order).unwrap();
			assert_eq!(table.successor_count(), source.len() - order);

			// Every window lands in the bag of its context
			for window in source.windows(order + 1) {
				let state = table.get(&window[..order]).unwrap();
				assert!(state.successors().contains(&window[order]));
			}

			// Bags hold exactly the observed windows, in order
			for state in table.states() {
				let expected: Vec<&Token> = source
					.windows(order + 1)
					.filter(|window| window[..order] == *state.key())
					.map(|window| &window[order])
					.collect();
				let actual: Vec<&Token> = state.successors().iter().collect();
				assert_eq!(actual, expected);
			}
		}
	}
}

#[test]
fn degenerate_inputs_generate_empty_text() {
	assert_eq!(MarkovChain::new("", 3, Level::Character).unwrap().generate(50, None), "");
	assert_eq!(MarkovChain::new("ab", 5, Level::Character).unwrap().generate(10, None), "");
	assert_eq!(MarkovChain::new("one two", 2, Level::Word).unwrap().generate(10, None), "");
}

#[test]
fn zero_order_is_rejected() {
	let result = MarkovChain::with_config(HAMLET, ChainConfig::new(0, Level::Word));
	assert!(matches!(result, Err(ChainError::InvalidConfiguration { order: 0 })));
}

#[test]
fn length_bounds_hold() {
	let chain = MarkovChain::new(HAMLET, 3, Level::Character).unwrap();
	let mut rng = StdRng::seed_from_u64(2024);
	for length in 0..60 {
		let generated = chain.generate_tokens_with(&mut rng, length, None);
		if length < 3 {
			assert_eq!(generated.len(), 3);
		} else {
			assert!(generated.len() >= 3);
			assert!(generated.len() <= length);
		}
	}
}

#[test]
fn generated_transitions_exist_in_source() {
	let chain = MarkovChain::new(HAMLET, 2, Level::Word).unwrap();
	let mut rng = StdRng::seed_from_u64(11);
	for _ in 0..20 {
		let generated = chain.generate_tokens_with(&mut rng, 40, None);
		assert!(chain.table().contains(&generated[..2]));
		for window in generated.windows(3) {
			let state = chain.table().get(&window[..2]).unwrap();
			assert!(state.successors().contains(&window[2]));
		}
	}
}

#[test]
fn word_model_continues_with_observed_successor() {
	let mut chain = MarkovChain::new("to be or not to be", 2, Level::Word).unwrap();
	for _ in 0..10 {
		assert_eq!(chain.generate(4, Some(&tokens(&["to", "be"]))), "to be or not");
	}
}

#[test]
fn seeded_models_are_reproducible() {
	let config = ChainConfig::new(3, Level::Character).with_seed(42);
	let mut first = MarkovChain::with_config(HAMLET, config.clone()).unwrap();
	let mut second = MarkovChain::with_config(HAMLET, config).unwrap();
	for _ in 0..5 {
		assert_eq!(first.generate(100, None), second.generate(100, None));
	}
}

#[test]
fn character_output_renders_without_separator() {
	let chain = MarkovChain::new(HAMLET, 4, Level::Character).unwrap();
	let mut rng = StdRng::seed_from_u64(5);
	let generated = chain.generate_tokens_with(&mut rng, 80, None);
	assert_eq!(chain.render(&generated), generated.concat());
}

#[test]
fn corpus_file_trains_like_text() {
	let path = std::env::temp_dir().join(format!("markov-gen-hamlet-{}.txt", std::process::id()));
	std::fs::write(&path, HAMLET).unwrap();
	let from_file = MarkovChain::from_corpus(&path, ChainConfig::new(2, Level::Word)).unwrap();
	std::fs::remove_file(&path).unwrap();

	let from_text = MarkovChain::new(HAMLET, 2, Level::Word).unwrap();
	assert_eq!(from_file.table().states(), from_text.table().states());
}

#[test]
fn missing_corpus_is_an_io_error() {
	let path = std::env::temp_dir().join("markov-gen-missing-corpus.txt");
	let result = MarkovChain::from_corpus(path, ChainConfig::default());
	assert!(matches!(result, Err(ChainError::Io(_))));
}
