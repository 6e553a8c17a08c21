use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::alphabet::{Context, Symbol, printable};
use super::distribution::{BackoffPolicy, Tier, derive};
use super::generation_input::{ContextFeedback, GenerationInput};
use super::sampler::{Temperature, sample};
use super::trigram_model::TrigramModel;

/// How many symbols were drawn from each backoff tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TierUsage {
	pub trigram: usize,
	pub bigram: usize,
	pub unigram: usize,
}

impl TierUsage {
	fn record(&mut self, tier: Tier) {
		match tier {
			Tier::Trigram => self.trigram += 1,
			Tier::Bigram => self.bigram += 1,
			Tier::Unigram => self.unigram += 1,
		}
	}
}

/// Lazy stream of generated symbols.
///
/// Each call to `next` derives a distribution for the current context
/// (with backoff), samples from it at the configured temperature and yields
/// the printable form of the sampled symbol. The model is only borrowed,
/// so any number of generators may read the same trained model.
///
/// The stream is finite: it yields exactly the requested number of symbols.
#[derive(Debug)]
pub struct Generator<'m, R: Rng = StdRng> {
	model: &'m TrigramModel,
	rng: R,
	context: Context,
	temperature: Temperature,
	feedback: ContextFeedback,
	backoff: BackoffPolicy,
	remaining: usize,
	tier_usage: TierUsage,
}

impl<'m> Generator<'m, StdRng> {
	/// Creates a generator seeded from `input`.
	///
	/// `context` is used unless `input` carries an explicit one.
	pub fn new(model: &'m TrigramModel, context: Context, input: &GenerationInput) -> Self {
		let rng = StdRng::seed_from_u64(input.resolved_seed());
		Self::with_rng(model, context, input, rng)
	}
}

impl<'m, R: Rng> Generator<'m, R> {
	/// Creates a generator drawing from a caller-supplied random source.
	pub fn with_rng(model: &'m TrigramModel, context: Context, input: &GenerationInput, rng: R) -> Self {
		Self {
			model,
			rng,
			context: input.context().unwrap_or(context),
			temperature: input.temperature(),
			feedback: input.feedback,
			backoff: input.backoff,
			remaining: input.length,
			tier_usage: TierUsage::default(),
		}
	}

	/// Current rolling context `(p2, p1)`.
	pub fn context(&self) -> Context {
		self.context
	}

	/// Tiers used so far.
	pub fn tier_usage(&self) -> TierUsage {
		self.tier_usage
	}
}

impl<R: Rng> Iterator for Generator<'_, R> {
	type Item = Symbol;

	fn next(&mut self) -> Option<Symbol> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;

		let distribution = derive(self.model, self.context, self.backoff);
		self.tier_usage.record(distribution.tier);

		let raw = sample(&distribution.probs, self.temperature, &mut self.rng);
		let shown = printable(raw);
		trace!("{:?} ({:#04x}, {:#04x}) -> {raw:#04x}", distribution.tier, self.context.0, self.context.1);

		let fed = match self.feedback {
			ContextFeedback::Raw => raw,
			ContextFeedback::Filtered => shown,
		};
		self.context = (self.context.1, fed);

		Some(shown)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<R: Rng> ExactSizeIterator for Generator<'_, R> {}
