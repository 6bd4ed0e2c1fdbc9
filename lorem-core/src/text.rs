use std::collections::BTreeMap;

/// Normalizes raw text for n-gram counting.
///
/// - Lowercases all characters.
/// - Replaces punctuation, digits and underscores with spaces; letters,
///   hyphens and apostrophes are kept.
/// - Collapses whitespace runs into a single ASCII space and trims the
///   ends.
///
/// # Notes
/// - UTF-8 safe: works on characters, and lowercasing a character may
///   expand it into several.
/// - Idempotent: normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut pending_space = false;

	for c in text.chars().flat_map(|c| c.to_lowercase()) {
		if c.is_alphabetic() || c == '-' || c == '\'' {
			if pending_space && !out.is_empty() {
				out.push(' ');
			}
			pending_space = false;
			out.push(c);
		} else {
			// Whitespace and every replaced character collapse into a
			// single separator; leading separators are dropped.
			pending_space = true;
		}
	}

	out
}

/// Tallies every `n`-character window of `text`.
///
/// Slides a window of width `n` one character at a time and counts
/// occurrences per exact substring. Returns an empty map when `n` is
/// zero or the text holds fewer than `n` characters.
pub fn count_ngrams(text: &str, n: usize) -> BTreeMap<String, u64> {
	let mut counts = BTreeMap::new();
	if n == 0 {
		return counts;
	}

	let chars: Vec<char> = text.chars().collect();
	if chars.len() < n {
		return counts;
	}

	for window in chars.windows(n) {
		let ngram: String = window.iter().collect();
		*counts.entry(ngram).or_insert(0) += 1;
	}

	counts
}
