/// One element of the fixed alphabet: a single byte value.
pub type Symbol = u8;

/// The two most recently seen symbols, oldest first: `(p2, p1)`.
pub type Context = (Symbol, Symbol);

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 256;

/// Pseudo-count every table cell starts with (add-one smoothing).
pub const SMOOTHING: u32 = 1;

/// Row total of a context that has never been observed.
///
/// A row is only trusted when its total is strictly above this value.
pub const EVIDENCE_FLOOR: u64 = ALPHABET_SIZE as u64 * SMOOTHING as u64;

/// Maps a symbol to what is shown on the output stream.
///
/// Newline and printable ASCII (`32..=126`) pass unchanged,
/// everything else becomes a space.
pub fn printable(symbol: Symbol) -> Symbol {
	match symbol {
		b'\n' | 32..=126 => symbol,
		_ => b' ',
	}
}
