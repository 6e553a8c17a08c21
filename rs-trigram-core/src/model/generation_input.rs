use std::time::{SystemTime, UNIX_EPOCH};

use super::alphabet::{Context, Symbol};
use super::distribution::BackoffPolicy;
use super::sampler::Temperature;
use super::trigram_model::context_from;
use crate::error::Result;

/// Default number of symbols to generate.
pub const DEFAULT_LENGTH: usize = 500;

/// Which symbol advances the rolling context after each draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContextFeedback {
	/// The sampled symbol, before the printable filter.
	#[default]
	Raw,
	/// The symbol as shown on the output stream.
	Filtered,
}

/// Parameters for a generation run.
///
/// # Responsibilities
/// - Track the requested length, seed, feedback mode and backoff policy
/// - Hold a temperature and a seed context that were validated on assignment
///
/// # Invariants
/// - `temperature` is always strictly positive and finite
/// - `context`, when set, is exactly two symbols
#[derive(Clone, Debug)]
pub struct GenerationInput {
	/// Number of symbols to emit.
	pub length: usize,

	/// Random seed; derived from the current time when `None`.
	pub seed: Option<u64>,

	/// What is fed back into the context after each draw.
	pub feedback: ContextFeedback,

	/// When higher-order tables are trusted.
	pub backoff: BackoffPolicy,

	temperature: Temperature,

	context: Option<Context>,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			length: DEFAULT_LENGTH,
			seed: None,
			feedback: ContextFeedback::default(),
			backoff: BackoffPolicy::default(),
			temperature: Temperature::default(),
			context: None,
		}
	}
}

impl GenerationInput {
	/// Creates an input for `length` symbols with default sampling settings.
	///
	/// A `None` seed is resolved from the current time when generation starts.
	pub fn new(length: usize, seed: Option<u64>) -> Self {
		Self { length, seed, ..Default::default() }
	}

	/// Returns the current temperature.
	pub fn temperature(&self) -> Temperature {
		self.temperature
	}

	/// Sets the sampling temperature.
	///
	/// # Errors
	/// Returns `InvalidTemperature` if the value is not strictly positive and finite.
	pub fn set_temperature(&mut self, temperature: f64) -> Result<()> {
		self.temperature = Temperature::new(temperature)?;
		Ok(())
	}

	/// Returns the explicit seed context, if any.
	pub fn context(&self) -> Option<Context> {
		self.context
	}

	/// Sets an explicit seed context.
	///
	/// # Errors
	/// Returns `InvalidContext` unless `symbols` holds exactly two symbols.
	pub fn set_context(&mut self, symbols: &[Symbol]) -> Result<()> {
		self.context = Some(context_from(symbols)?);
		Ok(())
	}

	/// Returns the seed, falling back to the current unix time in seconds.
	pub fn resolved_seed(&self) -> u64 {
		self.seed.unwrap_or_else(|| {
			SystemTime::now()
				.duration_since(UNIX_EPOCH)
				.map(|elapsed| elapsed.as_secs())
				.unwrap_or_default()
		})
	}
}
