use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn temp_workspace() -> TempDir {
	tempfile::tempdir().expect("create tempdir")
}

fn write_corpus(workspace: &TempDir, contents: &[u8]) -> String {
	let path = workspace.path().join("corpus.txt");
	fs::write(&path, contents).expect("write corpus");
	path.to_str().expect("utf-8 path").to_owned()
}

fn run(args: &[&str]) -> Vec<u8> {
	Command::cargo_bin("rs-trigram")
		.expect("binary exists")
		.args(args)
		.assert()
		.success()
		.get_output()
		.stdout
		.clone()
}

const CORPUS: &[u8] = b"It was the best of times, it was the worst of times,\n\
it was the age of wisdom, it was the age of foolishness,\n";

#[test]
fn default_length_is_500() {
	let workspace = temp_workspace();
	let corpus = write_corpus(&workspace, CORPUS);

	let output = run(&[corpus.as_str()]);
	assert_eq!(output.len(), 500);
}

#[test]
fn fixed_seed_is_reproducible() {
	let workspace = temp_workspace();
	let corpus = write_corpus(&workspace, CORPUS);

	let first = run(&[corpus.as_str(), "200", "17", "0.7"]);
	let second = run(&[corpus.as_str(), "200", "17", "0.7"]);
	assert_eq!(first.len(), 200);
	assert_eq!(first, second);
}

#[test]
fn output_is_printable() {
	let workspace = temp_workspace();
	let binary: Vec<u8> = (0..=255u8).cycle().take(3000).collect();
	let corpus = write_corpus(&workspace, &binary);

	let output = run(&[corpus.as_str(), "1000", "3", "1.5"]);
	assert_eq!(output.len(), 1000);
	assert!(output.iter().all(|&b| b == b'\n' || (32..=126).contains(&b)));
}

#[test]
fn zero_length_prints_nothing() {
	let workspace = temp_workspace();
	let corpus = write_corpus(&workspace, CORPUS);

	assert!(run(&[corpus.as_str(), "0", "1"]).is_empty());
}

#[test]
fn cold_cycle_repeats_the_corpus() {
	let workspace = temp_workspace();
	let corpus = write_corpus(&workspace, b"abcabcabcabc");

	assert_eq!(run(&[corpus.as_str(), "5", "42", "0.01"]), b"abcab");
	assert_eq!(run(&[corpus.as_str(), "3", "42", "0.01", "--context", "ab"]), b"cab");
}

fn assert_fails(args: &[&str], message: &str) {
	let assert = Command::cargo_bin("rs-trigram")
		.expect("binary exists")
		.args(args)
		.assert()
		.failure();
	let output = assert.get_output();
	assert!(output.stdout.is_empty(), "no partial output expected");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains(message), "stderr: {stderr}");
}

#[test]
fn missing_file_fails() {
	let workspace = temp_workspace();
	let missing = workspace.path().join("missing.txt");
	assert_fails(&[missing.to_str().unwrap()], "cannot read corpus");
}

#[test]
fn empty_and_tiny_corpora_fail() {
	let workspace = temp_workspace();
	let corpus = write_corpus(&workspace, b"");
	assert_fails(&[corpus.as_str()], "corpus too small");

	let corpus = write_corpus(&workspace, b"ab");
	assert_fails(&[corpus.as_str()], "corpus too small");
}

#[test]
fn minimal_corpus_succeeds() {
	let workspace = temp_workspace();
	let corpus = write_corpus(&workspace, b"abc");
	assert_eq!(run(&[corpus.as_str(), "10", "1"]).len(), 10);
}

#[test]
fn non_positive_temperature_fails() {
	let workspace = temp_workspace();
	let corpus = write_corpus(&workspace, CORPUS);
	assert_fails(&[corpus.as_str(), "10", "1", "0"], "invalid temperature");
	assert_fails(&[corpus.as_str(), "10", "1", "-1.5"], "invalid temperature");
}

#[test]
fn bad_context_fails() {
	let workspace = temp_workspace();
	let corpus = write_corpus(&workspace, CORPUS);
	assert_fails(&[corpus.as_str(), "10", "1", "--context", "abc"], "invalid context");
}

#[test]
fn directory_is_not_a_corpus() {
	let workspace = temp_workspace();
	let dir: &Path = workspace.path();
	assert_fails(&[dir.to_str().unwrap()], "cannot read corpus");
}

#[cfg(unix)]
#[test]
fn context_accepts_non_utf8_bytes() {
	use std::ffi::OsStr;
	use std::os::unix::ffi::OsStrExt;

	let workspace = temp_workspace();
	let corpus = write_corpus(&workspace, b"\xff\xfez\xff\xfez\xff\xfez");

	let output = Command::cargo_bin("rs-trigram")
		.expect("binary exists")
		.args([corpus.as_str(), "3", "42", "0.01", "--context"])
		.arg(OsStr::from_bytes(b"\xff\xfe"))
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();
	assert_eq!(output, b"z  ");
}
