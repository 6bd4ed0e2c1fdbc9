use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::state::State;

/// Order-(n-1) Markov model over characters, built from an n-gram
/// frequency table.
///
/// # Responsibilities
/// - Build the prefix transition table from `(ngram, count)` pairs
/// - Keep the weighted starts table used to seed and restart the walk
/// - Look up continuation buckets during generation
///
/// # Invariants
/// - Every stored prefix has n-1 characters; for `n == 1` all unigrams
///   share the single empty-prefix bucket
/// - The total weight of the starts table equals the total weight
///   across all transition buckets (both sum every n-gram occurrence)
#[derive(Clone, Debug)]
pub struct MarkovModel {
	/// Number of characters per n-gram.
	n: usize,

	/// Mapping from a prefix (length n-1) to its continuation bucket.
	states: HashMap<String, State>,

	/// Full n-grams with their counts, for seeding and restarts.
	starts: Vec<(String, u64)>,
}

impl MarkovModel {
	/// Builds a model of order `n` from an n-gram frequency table.
	///
	/// Each entry lands in the starts table and contributes its last
	/// character to the bucket of its n-1 character prefix. Entries
	/// whose character count disagrees with `n` are skipped, so a
	/// malformed table degrades instead of failing. An empty table
	/// yields an empty model.
	pub fn build(n: usize, counts: &BTreeMap<String, u64>) -> Self {
		let mut states: HashMap<String, State> = HashMap::new();
		let mut starts = Vec::with_capacity(counts.len());

		for (ngram, &count) in counts {
			let chars: Vec<char> = ngram.chars().collect();
			if n == 0 || chars.len() != n {
				debug!(%ngram, expected = n, "skipping entry of unexpected length");
				continue;
			}

			starts.push((ngram.clone(), count));

			// For n == 1 the prefix is empty and the unigram itself is
			// the continuation.
			let prefix: String = chars[..n - 1].iter().collect();
			let next_char = chars[n - 1];

			states
				.entry(prefix)
				.or_insert_with(State::new)
				.add_transition(next_char, count);
		}

		Self { n, states, starts }
	}

	/// The model order (characters per n-gram).
	pub fn n(&self) -> usize {
		self.n
	}

	/// True when nothing was ingested: there is no start to seed a
	/// walk from, so generation produces nothing.
	pub fn is_empty(&self) -> bool {
		self.starts.is_empty()
	}

	/// The starts table: full n-grams with their observed counts.
	pub fn starts(&self) -> &[(String, u64)] {
		&self.starts
	}

	/// The continuation pairs recorded for `prefix`, in build order.
	///
	/// `None` when the prefix was never observed (a dead end).
	pub fn transitions(&self, prefix: &str) -> Option<&[(char, u64)]> {
		self.states.get(prefix).map(State::transitions)
	}

	pub(crate) fn state(&self, prefix: &str) -> Option<&State> {
		self.states.get(prefix)
	}
}
