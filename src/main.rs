//! neadic-convert CLI
//!
//! ```sh
//! neadic-convert --to-external --external-test "hunspell-test" tests/affix1.neadic
//! ```

use clap::Parser;
use neadic_convert::{Batch, Config, Mode};
use std::path::PathBuf;

#[derive(clap::Parser)]
#[command(version, about)]
struct Args {
	/// Test cases, directory and extension are ignored
	#[arg(required = true)]
	names: Vec<String>,

	/// Merge `.aff`, `.dic`, `.good` and `.wrong` into `.neadic`
	#[arg(long, short = 'i', conflicts_with = "to_external")]
	to_internal: bool,

	/// Split `.neadic` into `.aff`, `.dic`, `.good` and `.wrong`
	#[arg(long, short = 'e')]
	to_external: bool,

	/// Command run on each `.neadic` file
	#[arg(long, env = "NEADIC_INTERNAL_TEST")]
	internal_test: Option<String>,

	/// Command run on each `.dic` file
	#[arg(long, env = "NEADIC_EXTERNAL_TEST")]
	external_test: Option<String>,

	/// Directory of `.neadic` files
	#[arg(long, env = "NEADIC_INTERNAL_DIR")]
	internal_dir: Option<PathBuf>,

	/// Directory of external files, defaults to the `.neadic` one
	#[arg(long, env = "NEADIC_EXTERNAL_DIR")]
	external_dir: Option<PathBuf>,
}

impl From<Args> for Config {
	fn from(args: Args) -> Self {
		let mode = match (args.to_internal, args.to_external) {
			(true, _) => Mode::ToInternal,
			(_, true) => Mode::ToExternal,
			_ => Mode::None,
		};
		let non_blank = |command: String| (!command.trim().is_empty()).then_some(command);

		Self {
			mode,
			internal_test_command: args.internal_test.and_then(non_blank),
			external_test_command: args.external_test.and_then(non_blank),
			internal_dir: args.internal_dir,
			external_dir: args.external_dir,
		}
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	pretty_env_logger::init();

	let args = Args::parse();
	let names = args.names.clone();

	Batch::new(Config::from(args)).run(&names).map_err(|err| {
		log::error!("{err}");
		err.into()
	})
}
