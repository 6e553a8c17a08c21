use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::{debug, info};

use rs_trigram_core::io::read_corpus;
use rs_trigram_core::model::distribution::BackoffPolicy;
use rs_trigram_core::model::generation_input::{ContextFeedback, DEFAULT_LENGTH, GenerationInput};
use rs_trigram_core::model::generator::Generator;
use rs_trigram_core::model::trigram_model::{TrigramModel, tail_context};

/// Command line of the `rs-trigram` generator.
///
/// Positional arguments follow the classic `<corpus> [length] [seed] [temperature]` order.
#[derive(Parser, Debug)]
#[command(author, version, about = "Character-level trigram text generator", long_about = None)]
struct Cli {
	/// Training corpus, read as raw bytes
	corpus: PathBuf,

	/// Number of symbols to generate
	#[arg(default_value_t = DEFAULT_LENGTH)]
	length: usize,

	/// Random seed (defaults to the current unix time)
	seed: Option<u64>,

	/// Sampling temperature, strictly positive
	#[arg(default_value_t = 1.0, allow_negative_numbers = true)]
	temperature: f64,

	/// Two-byte seed context, taken as raw bytes (defaults to the last two bytes of the corpus)
	#[arg(long, value_name = "TWO_BYTES")]
	context: Option<OsString>,

	/// Condition on the printable output instead of the raw sampled bytes
	#[arg(long)]
	feed_filtered: bool,

	/// Row total a context must exceed before its table is trusted
	#[arg(long, value_name = "COUNT")]
	evidence_floor: Option<u64>,

	/// Increase verbosity (-v, -vv)
	#[arg(short = 'v', long, action = ArgAction::Count)]
	verbose: u8,

	/// Decrease verbosity
	#[arg(short = 'q', long, action = ArgAction::Count, conflicts_with = "verbose")]
	quiet: u8,
}

impl Cli {
	/// Validates every generation parameter before the corpus is touched.
	fn generation_input(&self) -> Result<GenerationInput> {
		let mut input = GenerationInput::new(self.length, self.seed);
		// Pin the time-derived seed so it is logged and used consistently.
		input.seed = Some(input.resolved_seed());
		input.set_temperature(self.temperature)?;
		if let Some(context) = &self.context {
			input.set_context(context.as_encoded_bytes())?;
		}
		if self.feed_filtered {
			input.feedback = ContextFeedback::Filtered;
		}
		if let Some(evidence_floor) = self.evidence_floor {
			input.backoff = BackoffPolicy { evidence_floor };
		}
		Ok(input)
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose, cli.quiet);

	let input = cli.generation_input()?;
	let corpus = read_corpus(&cli.corpus)?;
	let model = TrigramModel::train(&corpus)?;
	let context = tail_context(&corpus).context("corpus has no seed context")?;

	info!(
		"generating {} symbols, seed {}, temperature {}",
		input.length,
		input.resolved_seed(),
		input.temperature().value()
	);

	let mut generator = Generator::new(&model, context, &input);
	let stdout = io::stdout();
	let mut out = BufWriter::new(stdout.lock());
	for symbol in generator.by_ref() {
		out.write_all(&[symbol]).context("failed to write output")?;
	}
	out.flush().context("failed to write output")?;

	debug!("tier usage: {:?}", generator.tier_usage());
	Ok(())
}

fn init_logging(verbose: u8, quiet: u8) {
	use log::LevelFilter;

	let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
	builder.format_timestamp_millis();
	let level = match (quiet, verbose) {
		(0, 0) => None,
		(0, 1) => Some(LevelFilter::Info),
		(0, _) => Some(LevelFilter::Debug),
		_ => Some(LevelFilter::Error),
	};
	if let Some(level) = level {
		builder.filter_level(level);
	}
	let _ = builder.try_init();
}
