mod config;
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

/// Finds the deepest zoom level with real imagery for a bounding box, and
/// converts between coordinates, pixels and quadkeys.
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Resolve the uniform zoom level of a bounding box
	Resolve(tools::resolve::Subcommand),

	/// Encode or decode quadkeys
	Quadkey(tools::quadkey::Subcommand),

	/// Project a position onto pixels, tiles and a quadkey
	Locate(tools::locate::Subcommand),

	/// Project a pixel back onto a position
	Pixel(tools::pixel::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Resolve(arguments) => tools::resolve::run(arguments),
		Commands::Quadkey(arguments) => tools::quadkey::run(arguments),
		Commands::Locate(arguments) => tools::locate::run(arguments),
		Commands::Pixel(arguments) => tools::pixel::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["quadzoom"]).unwrap_err().to_string();
		assert!(err.starts_with("Finds the deepest zoom level with real imagery for a bounding box"));
		assert!(err.contains("\nUsage: quadzoom [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["quadzoom", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("quadzoom "));
	}

	#[test]
	fn resolve_subcommand() {
		let err = run_command(vec!["quadzoom", "resolve"]).unwrap_err().to_string();
		assert!(err.starts_with("Resolve the uniform zoom level of a bounding box"));
	}

	#[test]
	fn quadkey_subcommand() {
		let err = run_command(vec!["quadzoom", "quadkey"]).unwrap_err().to_string();
		assert!(err.starts_with("Encode or decode quadkeys"));
	}

	#[test]
	fn locate_subcommand() {
		let err = run_command(vec!["quadzoom", "locate"]).unwrap_err().to_string();
		assert!(err.starts_with("Project a position onto pixels, tiles and a quadkey"));
	}

	#[test]
	fn pixel_subcommand() {
		let err = run_command(vec!["quadzoom", "pixel"]).unwrap_err().to_string();
		assert!(err.starts_with("Project a pixel back onto a position"));
	}
}
