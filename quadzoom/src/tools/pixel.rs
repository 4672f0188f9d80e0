use anyhow::{Result, ensure};
use quadzoom_core::{MAX_LEVEL, PixelCoord, TileCoord, mercator::pixel_to_lat_lon};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// pixel column, clamped to the map
	px: u64,

	/// pixel row, clamped to the map
	py: u64,

	/// zoom level, 0..=31
	level: u8,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", describe(arguments)?);
	Ok(())
}

fn describe(arguments: &Subcommand) -> Result<String> {
	let level = arguments.level;
	ensure!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");

	let pixel = PixelCoord::new(arguments.px, arguments.py).clamped(level);
	let point = pixel_to_lat_lon(pixel, level);
	let xy = pixel.to_tile();
	let tile = TileCoord::new(level, xy.x, xy.y)?;
	let corner = tile.to_geo();

	Ok(format!(
		"{:.6} {:.6}\ntile {} {} quadkey {}\ntile corner {:.6} {:.6}",
		point.lat,
		point.lon,
		tile.x,
		tile.y,
		tile.to_quadkey(),
		corner.lat,
		corner.lon
	))
}
