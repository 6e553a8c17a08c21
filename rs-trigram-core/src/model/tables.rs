use super::alphabet::{ALPHABET_SIZE, SMOOTHING, Symbol};

/// A smoothed count table over `ALPHABET_SIZE^ORDER` cells.
///
/// Cells live in one contiguous allocation. A context of `ORDER - 1` symbols
/// selects a row of `ALPHABET_SIZE` counts, one per following symbol.
///
/// # Invariants
/// - Every cell is `>= SMOOTHING`
/// - The allocation never grows or shrinks after construction
#[derive(Clone)]
pub struct CountTable<const ORDER: u32> {
	counts: Box<[u32]>,
}

/// Counts of single symbols.
pub type UnigramTable = CountTable<1>;

/// Counts of `(p1, c)` pairs.
pub type BigramTable = CountTable<2>;

/// Counts of `(p2, p1, c)` triples.
pub type TrigramTable = CountTable<3>;

impl<const ORDER: u32> CountTable<ORDER> {
	/// Number of cells in the table.
	pub const CELLS: usize = ALPHABET_SIZE.pow(ORDER);

	/// Creates a table with every cell set to the smoothing pseudo-count.
	pub fn new() -> Self {
		Self { counts: vec![SMOOTHING; Self::CELLS].into_boxed_slice() }
	}

	/// Offset of the first cell of the row following `context`.
	///
	/// `context` holds the `ORDER - 1` preceding symbols, oldest first.
	fn row_offset(context: &[Symbol]) -> usize {
		debug_assert_eq!(context.len() as u32, ORDER - 1);
		context
			.iter()
			.fold(0, |offset, &symbol| (offset + symbol as usize) * ALPHABET_SIZE)
	}

	/// Returns the `ALPHABET_SIZE` counts that follow `context`.
	pub fn row(&self, context: &[Symbol]) -> &[u32] {
		let start = Self::row_offset(context);
		&self.counts[start..start + ALPHABET_SIZE]
	}

	/// Sum of the row following `context`.
	pub fn row_total(&self, context: &[Symbol]) -> u64 {
		self.row(context).iter().map(|&count| count as u64).sum()
	}

	/// Count of `symbol` after `context`.
	pub fn get(&self, context: &[Symbol], symbol: Symbol) -> u32 {
		self.row(context)[symbol as usize]
	}

	/// Records one occurrence of `symbol` after `context`.
	///
	/// Saturates at `u32::MAX` instead of wrapping.
	pub fn increment(&mut self, context: &[Symbol], symbol: Symbol) {
		let cell = &mut self.counts[Self::row_offset(context) + symbol as usize];
		*cell = cell.saturating_add(1);
	}

	/// Iterates over all rows (one per context) in ascending context order.
	pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
		self.counts.chunks_exact(ALPHABET_SIZE)
	}
}

impl<const ORDER: u32> Default for CountTable<ORDER> {
	fn default() -> Self {
		Self::new()
	}
}

impl<const ORDER: u32> std::fmt::Debug for CountTable<ORDER> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CountTable")
			.field("order", &ORDER)
			.field("cells", &Self::CELLS)
			.finish()
	}
}
