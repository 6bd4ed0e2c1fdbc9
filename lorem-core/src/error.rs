use thiserror::Error;

/// Errors surfaced by the n-gram pipeline.
///
/// Malformed table entries are not represented here: the model builder
/// skips them silently, and dead ends during generation are handled by
/// the restart policy rather than reported.
#[derive(Error, Debug)]
pub enum LoremError {
	#[error("Error reading input: {0}")]
	Io(#[from] std::io::Error),

	#[error("Could not deduce N from input. Format expected: 'N=<int> N-grams:'")]
	DeduceN,

	#[error("No N-grams found in input.")]
	EmptyModel,
}

pub type LoremResult<T> = Result<T, LoremError>;
