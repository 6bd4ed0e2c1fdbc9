use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LoremError, LoremResult};

// Should not panic, both patterns are literals.
static N_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"N=(\d+) N-grams:").unwrap());
static ENTRY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'(.+?)': (\d+)").unwrap());

/// Renders an n-gram table in the format exchanged between the two
/// stages: an `N=<n> N-grams:` header followed by one quoted entry per
/// line, ascending by n-gram.
pub fn render(n: i64, counts: &BTreeMap<String, u64>) -> String {
	let mut out = format!("N={n} N-grams:\n");
	for (ngram, count) in counts {
		out.push_str(&format!("'{ngram}': {count}\n"));
	}
	out
}

/// Parses a rendered table back into `(n, counts)`.
///
/// Matching is scan-anywhere rather than line-oriented: the first
/// `N=<digits> N-grams:` occurrence fixes `n`, and every
/// `'<content>': <digits>` occurrence contributes one entry, later
/// duplicates overwriting earlier ones. Surrounding text is ignored.
///
/// # Errors
/// [`LoremError::DeduceN`] when no header is present. An empty entry
/// set is not a parse error; callers decide whether to reject it.
pub fn parse(input: &str) -> LoremResult<(usize, BTreeMap<String, u64>)> {
	let n = N_HEADER
		.captures(input)
		.and_then(|caps| caps[1].parse::<usize>().ok())
		.ok_or(LoremError::DeduceN)?;

	let mut counts = BTreeMap::new();
	for caps in ENTRY.captures_iter(input) {
		let Ok(count) = caps[2].parse::<u64>() else {
			continue;
		};
		counts.insert(caps[1].to_string(), count);
	}

	Ok((n, counts))
}
