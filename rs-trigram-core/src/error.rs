use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = TrigramError> = std::result::Result<T, E>;

/// Failures detected while setting up a generation run.
///
/// Every variant is raised before the first symbol is sampled; once a
/// `Generator` exists, generation cannot fail.
#[derive(Debug, Error)]
pub enum TrigramError {
	/// The corpus file is missing or could not be read.
	#[error("cannot read corpus {path:?}: {source}")]
	FileUnreadable {
		path: PathBuf,
		source: std::io::Error,
	},

	/// The corpus is empty or shorter than a single trigram window.
	#[error("corpus too small: {len} byte(s), at least 3 are required")]
	InputTooSmall { len: usize },

	/// Temperature must be strictly positive and finite.
	#[error("invalid temperature {0}: must be a positive finite number")]
	InvalidTemperature(f64),

	/// A seed context must be exactly two symbols.
	#[error("invalid context: expected 2 bytes, got {0}")]
	InvalidContext(usize),
}
