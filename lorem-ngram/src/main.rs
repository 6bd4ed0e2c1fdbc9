use std::collections::BTreeMap;
use std::fs;
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lorem_core::format;
use lorem_core::text;

/// Builds a character n-gram frequency table from text.
///
/// Reads a file (or standard input), normalizes it, and prints the
/// `N=<n> N-grams:` table consumed by the `lorem` generator.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
	/// Length of the n-gram
	#[arg(allow_negative_numbers = true)]
	n: i64,

	/// Path to the input text file (standard input when omitted)
	filename: Option<PathBuf>,
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(io::stderr)
		.init();

	let cli = Cli::parse();

	// The statistics stage reports read failures on stdout.
	let text = match read_input(cli.filename.as_deref()) {
		Ok(text) => text,
		Err(message) => {
			println!("{message}");
			process::exit(1);
		}
	};

	let normalized = text::normalize(&text);
	debug!(chars = normalized.chars().count(), "normalized input");

	let counts = if cli.n < 1 {
		// A non-positive order yields an empty table, not an error.
		BTreeMap::new()
	} else {
		text::count_ngrams(&normalized, cli.n as usize)
	};
	debug!(distinct = counts.len(), "counted n-grams");

	print!("{}", format::render(cli.n, &counts));
}

fn read_input(filename: Option<&Path>) -> Result<String, String> {
	match filename {
		Some(path) => fs::read_to_string(path).map_err(|e| {
			if e.kind() == ErrorKind::NotFound {
				format!("Error: File '{}' not found.", path.display())
			} else {
				format!("Error reading input: {e}")
			}
		}),
		None => {
			let mut text = String::new();
			io::stdin()
				.read_to_string(&mut text)
				.map_err(|e| format!("Error reading input: {e}"))?;
			Ok(text)
		}
	}
}
