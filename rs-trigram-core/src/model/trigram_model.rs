use log::{Level, debug, info, log_enabled};

use super::alphabet::{Context, EVIDENCE_FLOOR, Symbol};
use super::tables::{BigramTable, CountTable, TrigramTable, UnigramTable};
use crate::error::{Result, TrigramError};

/// Character-level trigram model over the byte alphabet.
///
/// The `TrigramModel` owns the unigram, bigram and trigram tables. It is
/// built once by [`TrigramModel::train`] and is read-only afterwards:
/// generators only ever borrow it immutably.
///
/// # Invariants
/// - Every cell of every table is `>= SMOOTHING`
/// - For every context, `trigram.row_total(ctx) == EVIDENCE_FLOOR + observations`
#[derive(Clone, Debug)]
pub struct TrigramModel {
	unigram: UnigramTable,
	bigram: BigramTable,
	trigram: TrigramTable,
	corpus_len: usize,
}

impl TrigramModel {
	/// Trains a model in a single pass over `corpus`.
	///
	/// Every trigram window `(p2, p1, c)` increments the trigram, the
	/// `(p1, c)` bigram and the `c` unigram. The first two symbols only ever
	/// appear as context, so their unigrams and the bigram between them are
	/// counted separately.
	///
	/// # Errors
	/// Returns `InputTooSmall` if the corpus has fewer than 3 symbols.
	pub fn train(corpus: &[u8]) -> Result<Self> {
		if corpus.len() < 3 {
			return Err(TrigramError::InputTooSmall { len: corpus.len() });
		}

		let mut model = Self {
			unigram: UnigramTable::new(),
			bigram: BigramTable::new(),
			trigram: TrigramTable::new(),
			corpus_len: corpus.len(),
		};

		model.unigram.increment(&[], corpus[0]);
		model.unigram.increment(&[], corpus[1]);
		model.bigram.increment(&[corpus[0]], corpus[1]);

		for window in corpus.windows(3) {
			let (p2, p1, c) = (window[0], window[1], window[2]);
			model.trigram.increment(&[p2, p1], c);
			model.bigram.increment(&[p1], c);
			model.unigram.increment(&[], c);
		}

		if log_enabled!(Level::Info) {
			info!(
				"trained on {} bytes: {} trigram contexts and {} bigram contexts observed",
				model.corpus_len,
				observed_contexts(&model.trigram),
				observed_contexts(&model.bigram),
			);
		}
		Ok(model)
	}

	/// Returns the unigram table.
	pub fn unigram(&self) -> &UnigramTable {
		&self.unigram
	}

	/// Returns the bigram table.
	pub fn bigram(&self) -> &BigramTable {
		&self.bigram
	}

	/// Returns the trigram table.
	pub fn trigram(&self) -> &TrigramTable {
		&self.trigram
	}

	/// Number of symbols the model was trained on.
	pub fn corpus_len(&self) -> usize {
		self.corpus_len
	}
}

/// Number of contexts whose row holds more than the smoothing floor.
fn observed_contexts<const ORDER: u32>(table: &CountTable<ORDER>) -> usize {
	table
		.rows()
		.filter(|row| row.iter().map(|&count| count as u64).sum::<u64>() > EVIDENCE_FLOOR)
		.count()
}

/// Returns the last two symbols of `corpus`, the default seed context.
///
/// Returns `None` if the corpus is shorter than 2 symbols.
pub fn tail_context(corpus: &[u8]) -> Option<Context> {
	match corpus {
		[.., p2, p1] => {
			debug!("tail context: ({p2:#04x}, {p1:#04x})");
			Some((*p2, *p1))
		}
		_ => None,
	}
}

/// Builds a context from exactly two symbols.
///
/// # Errors
/// Returns `InvalidContext` for any other length.
pub fn context_from(symbols: &[Symbol]) -> Result<Context> {
	match symbols {
		[p2, p1] => Ok((*p2, *p1)),
		_ => Err(TrigramError::InvalidContext(symbols.len())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::alphabet::SMOOTHING;

	#[test]
	fn rejects_short_corpora() {
		let corpora: [&[u8]; 3] = [b"", b"a", b"ab"];
		for corpus in corpora {
			let err = TrigramModel::train(corpus).unwrap_err();
			assert!(matches!(err, TrigramError::InputTooSmall { len } if len == corpus.len()));
		}
	}

	#[test]
	fn minimal_corpus_trains() {
		let model = TrigramModel::train(b"abc").unwrap();
		assert_eq!(model.corpus_len(), 3);
		assert_eq!(model.trigram().get(b"ab", b'c'), 2);
		assert_eq!(model.bigram().get(b"a", b'b'), 2);
		assert_eq!(model.bigram().get(b"b", b'c'), 2);
		for symbol in [b'a', b'b', b'c'] {
			assert_eq!(model.unigram().get(&[], symbol), 2);
		}
		assert_eq!(tail_context(b"abc"), Some((b'b', b'c')));
	}

	#[test]
	fn counts_every_window() {
		let model = TrigramModel::train(b"abcabcabcabc").unwrap();

		assert_eq!(model.trigram().get(b"ab", b'c'), SMOOTHING + 4);
		assert_eq!(model.trigram().get(b"bc", b'a'), SMOOTHING + 3);
		assert_eq!(model.trigram().get(b"ca", b'b'), SMOOTHING + 3);
		assert_eq!(model.trigram().get(b"ab", b'a'), SMOOTHING);

		assert_eq!(model.bigram().get(b"a", b'b'), SMOOTHING + 4);
		assert_eq!(model.bigram().get(b"c", b'a'), SMOOTHING + 3);
		assert_eq!(model.unigram().get(&[], b'a'), SMOOTHING + 4);
		assert_eq!(model.unigram().get(&[], b'c'), SMOOTHING + 4);
	}

	#[test]
	fn smoothing_survives_training() {
		let corpus: Vec<u8> = (0..=255u8).cycle().take(2000).collect();
		let model = TrigramModel::train(&corpus).unwrap();

		assert!(model.unigram().rows().flatten().all(|&count| count >= SMOOTHING));
		assert!(model.bigram().rows().flatten().all(|&count| count >= SMOOTHING));
		assert!(model.trigram().rows().flatten().all(|&count| count >= SMOOTHING));
	}

	#[test]
	fn trigram_rows_conserve_totals() {
		let corpus = b"the cat sat on the mat, the end\nthe";
		let model = TrigramModel::train(corpus).unwrap();

		for p2 in 0..=255u8 {
			for p1 in 0..=255u8 {
				let observed = corpus
					.windows(3)
					.filter(|window| window[0] == p2 && window[1] == p1)
					.count() as u64;
				assert_eq!(model.trigram().row_total(&[p2, p1]), EVIDENCE_FLOOR + observed);
			}
		}
	}

	#[test]
	fn lower_orders_count_each_symbol_once() {
		let corpus = b"hello world";
		let model = TrigramModel::train(corpus).unwrap();

		assert_eq!(model.unigram().row_total(&[]), EVIDENCE_FLOOR + corpus.len() as u64);
		let bigram_total: u64 = model.bigram().rows().flatten().map(|&count| count as u64).sum();
		assert_eq!(bigram_total, 256 * 256 + corpus.len() as u64 - 1);
	}

	#[test]
	fn contexts_need_two_symbols() {
		assert_eq!(context_from(b"xy").unwrap(), (b'x', b'y'));
		assert!(matches!(context_from(b"x"), Err(TrigramError::InvalidContext(1))));
		assert!(matches!(context_from(b"xyz"), Err(TrigramError::InvalidContext(3))));
		assert_eq!(tail_context(b"a"), None);
	}
}
