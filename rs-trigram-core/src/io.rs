use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{Result, TrigramError};

/// Reads a whole corpus file into memory as raw bytes.
///
/// No decoding is performed, every byte is one symbol.
///
/// # Errors
/// - `FileUnreadable` if the file cannot be opened or read
/// - `InputTooSmall` if the file is empty
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<Vec<u8>> {
	let path = filename.as_ref();
	let unreadable = |source| TrigramError::FileUnreadable { path: path.to_path_buf(), source };

	let mut contents = Vec::new();
	File::open(path)
		.map_err(unreadable)?
		.read_to_end(&mut contents)
		.map_err(unreadable)?;

	if contents.is_empty() {
		return Err(TrigramError::InputTooSmall { len: 0 });
	}

	debug!("loaded {} bytes from {}", contents.len(), path.display());
	Ok(contents)
}
