use anyhow::{Result, ensure};
use quadzoom_core::{
	GeoPoint, MAX_LEVEL, TileCoord,
	mercator::{ground_resolution, lat_lon_to_pixel, map_scale},
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// latitude in degrees, clamped to ±85.05112878
	#[arg(allow_negative_numbers = true)]
	lat: f64,

	/// longitude in degrees, clamped to ±180
	#[arg(allow_negative_numbers = true)]
	lon: f64,

	/// zoom level, 0..=31
	level: u8,

	/// screen resolution used for the map scale
	#[arg(long, default_value_t = 96.0)]
	dpi: f64,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", describe(arguments)?);
	Ok(())
}

fn describe(arguments: &Subcommand) -> Result<String> {
	let level = arguments.level;
	ensure!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");

	let pixel = lat_lon_to_pixel(arguments.lat, arguments.lon, level);
	let tile = TileCoord::from_geo(GeoPoint::new(arguments.lat, arguments.lon), level)?;
	let (dx, dy) = pixel.offset_in_tile();

	Ok([
		format!("pixel:             {} {}", pixel.x, pixel.y),
		format!("tile:              {} {} (offset {dx} {dy})", tile.x, tile.y),
		format!("quadkey:           {}", tile.to_quadkey()),
		format!("ground resolution: {:.3} m/px", ground_resolution(arguments.lat, level)),
		format!("map scale:         1:{:.0}", map_scale(arguments.lat, level, arguments.dpi)),
	]
	.join("\n"))
}
