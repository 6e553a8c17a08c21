use rand::Rng;

use super::alphabet::{ALPHABET_SIZE, Symbol};
use crate::error::{Result, TrigramError};

/// A validated sampling temperature.
///
/// - `1.0` keeps the distribution as is
/// - below `1.0` sharpens it toward the most likely symbol
/// - above `1.0` flattens it toward uniform
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Temperature(f64);

impl Temperature {
	/// Creates a temperature.
	///
	/// # Errors
	/// Returns `InvalidTemperature` if `value` is not finite or not strictly positive.
	pub fn new(value: f64) -> Result<Self> {
		if !value.is_finite() || value <= 0.0 {
			return Err(TrigramError::InvalidTemperature(value));
		}
		Ok(Self(value))
	}

	pub fn value(self) -> f64 {
		self.0
	}
}

impl Default for Temperature {
	fn default() -> Self {
		Self(1.0)
	}
}

/// Samples a symbol from `probs` reshaped by `temperature`.
///
/// Each symbol is weighted by `prob^(1/temperature)`; a uniform draw in
/// `[0, sum)` then selects the first symbol, in ascending order, whose
/// cumulative weight exceeds it.
///
/// Weights are computed relative to the largest probability. This is the
/// same distribution once normalised, and the top weight is exactly 1 so
/// the sum cannot underflow to 0 for very small temperatures.
///
/// `probs` must be finite, non-negative and not all zero, which every
/// distribution derived from smoothed tables is.
pub(crate) fn sample<R: Rng>(probs: &[f64; ALPHABET_SIZE], temperature: Temperature, rng: &mut R) -> Symbol {
	debug_assert!(
		probs.iter().all(|prob| prob.is_finite() && *prob >= 0.0),
		"probabilities must be finite and non-negative"
	);
	debug_assert!(probs.iter().any(|&prob| prob > 0.0), "probabilities must not all be zero");
	let exponent = 1.0 / temperature.value();
	let max = probs.iter().copied().fold(0.0, f64::max);
	if max <= 0.0 {
		// Smoothed tables never produce an empty distribution.
		return 0;
	}

	let mut weights = [0.0; ALPHABET_SIZE];
	for (weight, &prob) in weights.iter_mut().zip(probs) {
		*weight = (prob / max).powf(exponent);
	}
	let sum: f64 = weights.iter().sum();

	let r = rng.random_range(0.0..sum);

	let mut cumulative = 0.0;
	let mut fallback = 0;
	for (symbol, &weight) in weights.iter().enumerate() {
		if weight <= 0.0 {
			continue;
		}
		cumulative += weight;
		if cumulative > r {
			return symbol as Symbol;
		}
		fallback = symbol as Symbol;
	}

	// Only reachable through rounding in the running sum.
	fallback
}
