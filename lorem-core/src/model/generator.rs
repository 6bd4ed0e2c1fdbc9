use rand::Rng;
use tracing::trace;

use super::markov::MarkovModel;
use super::state::weighted_choice;

/// Generates `length` characters of pseudo-random text by walking the
/// model's transition table.
///
/// The walk is seeded with a weighted draw over the starts table. Each
/// step looks up the bucket for the current prefix and samples one
/// continuation character. A prefix with no recorded continuation is a
/// dead end: the walk re-seeds with a whole n-gram drawn from the
/// starts table, which may overshoot the target before the final
/// truncation. Truncation is the only length correction; no step is
/// rolled back.
///
/// # Parameters
/// - `model`: the built Markov model.
/// - `length`: number of characters to produce.
/// - `rng`: randomness source; pass a seeded generator for
///   reproducible output.
///
/// # Returns
/// A string of exactly `length` characters, or an empty string when
/// the model is empty or `length` is zero.
pub fn generate<R: Rng>(model: &MarkovModel, length: usize, rng: &mut R) -> String {
	if model.is_empty() || length == 0 {
		return String::new();
	}

	// The walk state is the trailing n-1 characters of the output,
	// empty for a memoryless unigram model.
	let context = model.n().saturating_sub(1);

	let Some(seed) = draw_start(model, rng) else {
		return String::new();
	};

	let mut output = String::new();
	output.push_str(seed);
	let mut produced = seed.chars().count();
	let mut state = tail_chars(seed, context);

	while produced < length {
		match model.state(&state).and_then(|bucket| bucket.pick(rng)) {
			Some(c) => {
				output.push(c);
				produced += 1;
				if context > 0 {
					// Slide the prefix window by one character.
					state = state.chars().skip(1).collect();
					state.push(c);
				}
			}
			None => {
				// Dead end: restart with a whole n-gram, not a single
				// character.
				trace!(%state, "dead end, reseeding");
				let Some(ngram) = draw_start(model, rng) else {
					break;
				};
				output.push_str(ngram);
				produced += ngram.chars().count();
				state = tail_chars(ngram, context);
			}
		}
	}

	output.chars().take(length).collect()
}

/// Weighted draw of a full n-gram from the starts table.
fn draw_start<'a, R: Rng>(model: &'a MarkovModel, rng: &mut R) -> Option<&'a str> {
	weighted_choice(model.starts(), rng).map(String::as_str)
}

/// Returns the last `n` characters of `s` (the whole string when it is
/// shorter).
fn tail_chars(s: &str, n: usize) -> String {
	let len = s.chars().count();
	s.chars().skip(len.saturating_sub(n)).collect()
}
