use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lorem_core::error::LoremError;
use lorem_core::format;
use lorem_core::model::generator::generate;
use lorem_core::model::markov::MarkovModel;

/// Generates pseudo-random filler text from an n-gram table.
///
/// Reads the `N=<n> N-grams:` table produced by `ngram` (from a file
/// or standard input) and prints a weighted Markov walk of the
/// requested length.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
	/// Number of characters to generate
	#[arg(allow_negative_numbers = true)]
	length: i64,

	/// Path to the n-gram table (standard input when omitted)
	filename: Option<PathBuf>,
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(io::stderr)
		.init();

	let cli = Cli::parse();

	let input = match read_input(cli.filename.as_deref()) {
		Ok(Some(input)) => input,
		Ok(None) => {
			// Interactive terminal with no file: print usage instead
			// of blocking on stdin.
			let _ = Cli::command().print_help();
			return;
		}
		Err(e) => {
			eprintln!("Error reading input: {e}");
			process::exit(1);
		}
	};

	let (n, counts) = match format::parse(&input) {
		Ok(parsed) => parsed,
		Err(e) => {
			eprintln!("Error: {e}");
			process::exit(1);
		}
	};

	if counts.is_empty() {
		eprintln!("Error: {}", LoremError::EmptyModel);
		process::exit(1);
	}

	let model = MarkovModel::build(n, &counts);
	debug!(n, starts = model.starts().len(), "model built");

	let length = usize::try_from(cli.length).unwrap_or(0);
	let generated = generate(&model, length, &mut rand::rng());

	println!("{generated}");
}

fn read_input(filename: Option<&Path>) -> io::Result<Option<String>> {
	match filename {
		Some(path) => fs::read_to_string(path).map(Some),
		None => {
			if io::stdin().is_terminal() {
				return Ok(None);
			}
			let mut input = String::new();
			io::stdin().read_to_string(&mut input)?;
			Ok(Some(input))
		}
	}
}
