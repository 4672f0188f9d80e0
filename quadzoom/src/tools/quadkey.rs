use anyhow::Result;
use quadzoom_core::{QuadKey, TileCoord};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	#[command(subcommand)]
	action: Action,
}

#[derive(clap::Subcommand, Debug)]
enum Action {
	/// Encode tile coordinates into a quadkey
	Encode {
		/// tile column
		x: u32,
		/// tile row
		y: u32,
		/// zoom level, 0..=31
		level: u8,
	},

	/// Decode a quadkey into "x y level"
	Decode {
		/// digits 0..3, one per level
		quadkey: String,
	},
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", describe(&arguments.action)?);
	Ok(())
}

fn describe(action: &Action) -> Result<String> {
	Ok(match action {
		Action::Encode { x, y, level } => TileCoord::new(*level, *x, *y)?.to_quadkey().to_string(),
		Action::Decode { quadkey } => {
			let coord = quadkey.parse::<QuadKey>()?.to_tile();
			format!("{} {} {}", coord.x, coord.y, coord.level)
		}
	})
}
