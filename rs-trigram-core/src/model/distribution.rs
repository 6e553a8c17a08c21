use super::alphabet::{ALPHABET_SIZE, Context, EVIDENCE_FLOOR};
use super::trigram_model::TrigramModel;

/// Which table a distribution was derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
	Trigram,
	Bigram,
	Unigram,
}

/// Controls when a higher-order table is trusted.
///
/// A row is used only when its total count is strictly greater than
/// `evidence_floor`. The default is the pure-smoothing row total, so any
/// single observation is enough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackoffPolicy {
	pub evidence_floor: u64,
}

impl Default for BackoffPolicy {
	fn default() -> Self {
		Self { evidence_floor: EVIDENCE_FLOOR }
	}
}

/// A probability for every symbol, together with the tier it came from.
#[derive(Clone, Debug)]
pub struct Distribution {
	pub tier: Tier,
	pub probs: [f64; ALPHABET_SIZE],
}

impl Distribution {
	fn from_row(tier: Tier, row: &[u32], total: u64) -> Self {
		let mut probs = [0.0; ALPHABET_SIZE];
		for (prob, &count) in probs.iter_mut().zip(row) {
			*prob = count as f64 / total as f64;
		}
		Self { tier, probs }
	}
}

/// Derives the next-symbol distribution for `context`.
///
/// Tries the trigram row for `(p2, p1)`, then the bigram row for `p1`,
/// and finally the unigram table. The unigram tier is taken
/// unconditionally: smoothing guarantees a non-zero total there.
pub fn derive(model: &TrigramModel, context: Context, policy: BackoffPolicy) -> Distribution {
	let (p2, p1) = context;

	let total = model.trigram().row_total(&[p2, p1]);
	if total > policy.evidence_floor {
		return Distribution::from_row(Tier::Trigram, model.trigram().row(&[p2, p1]), total);
	}

	let total = model.bigram().row_total(&[p1]);
	if total > policy.evidence_floor {
		return Distribution::from_row(Tier::Bigram, model.bigram().row(&[p1]), total);
	}

	let total = model.unigram().row_total(&[]);
	Distribution::from_row(Tier::Unigram, model.unigram().row(&[]), total)
}
