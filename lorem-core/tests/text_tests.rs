use std::collections::BTreeMap;

use lorem_core::text::{count_ngrams, normalize};

#[test]
fn normalize_replaces_punctuation_and_digits() {
	assert_eq!(normalize("Hello, World! 123"), "hello world");
}

#[test]
fn normalize_keeps_hyphens_and_apostrophes() {
	assert_eq!(normalize("It's a well-known fact."), "it's a well-known fact");
}

#[test]
fn normalize_collapses_whitespace_runs() {
	assert_eq!(normalize("  a\t\tb\n\nc  "), "a b c");
}

#[test]
fn normalize_drops_underscores_and_digits() {
	assert_eq!(normalize("snake_case_2_name"), "snake case name");
}

#[test]
fn normalize_empty_input() {
	assert_eq!(normalize(""), "");
}

#[test]
fn normalize_lowercases_non_ascii() {
	assert_eq!(normalize("Déjà Vu"), "déjà vu");
}

#[test]
fn normalize_is_idempotent() {
	let samples = ["Hello, World! 123", "It's a well-known fact.", "  a\t b ", "ÀÉÎ"];
	for sample in samples {
		let once = normalize(sample);
		assert_eq!(normalize(&once), once);
	}
}

#[test]
fn count_banana_unigrams() {
	let expected: BTreeMap<String, u64> =
		[("a".to_string(), 3), ("b".to_string(), 1), ("n".to_string(), 2)].into();
	assert_eq!(count_ngrams("banana", 1), expected);
}

#[test]
fn count_banana_bigrams() {
	let expected: BTreeMap<String, u64> =
		[("an".to_string(), 2), ("ba".to_string(), 1), ("na".to_string(), 2)].into();
	assert_eq!(count_ngrams("banana", 2), expected);
}

#[test]
fn count_windows_cross_word_boundaries() {
	let counts = count_ngrams("hello world", 2);
	assert_eq!(counts.get("o "), Some(&1));
	assert_eq!(counts.get(" w"), Some(&1));
}

#[test]
fn count_total_equals_window_count() {
	let text = "hello world";
	for n in 1..=4 {
		let total: u64 = count_ngrams(text, n).values().sum();
		assert_eq!(total, (text.chars().count() - n + 1) as u64);
	}
}

#[test]
fn count_short_text_is_empty() {
	assert!(count_ngrams("ab", 3).is_empty());
	assert!(count_ngrams("", 1).is_empty());
}

#[test]
fn count_zero_order_is_empty() {
	assert!(count_ngrams("banana", 0).is_empty());
}
