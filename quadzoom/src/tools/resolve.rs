use crate::config::Config;
use anyhow::Result;
use quadzoom_core::{
	GeoPoint, QuadKey,
	io::TileSourceHttp,
	resolver::{Resolution, ZoomResolver},
};
use quadzoom_image::{Placeholder, PlaceholderOracle};
use serde::Serialize;
use std::{path::PathBuf, time::Duration};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// latitude of the first corner
	#[arg(allow_negative_numbers = true)]
	lat1: f64,

	/// longitude of the first corner
	#[arg(allow_negative_numbers = true)]
	lon1: f64,

	/// latitude of the opposite corner
	#[arg(allow_negative_numbers = true)]
	lat2: f64,

	/// longitude of the opposite corner
	#[arg(allow_negative_numbers = true)]
	lon2: f64,

	/// Path to a configuration file (YAML format).
	/// Command line arguments will override configuration file settings.
	#[arg(short = 'c', long, value_name = "FILE", display_order = 0)]
	config: Option<PathBuf>,

	/// Level to start the descent from. Default: 23
	#[arg(long, display_order = 1)]
	max_level: Option<u8>,

	/// URL template of the tile provider, must contain "{quadkey}"
	#[arg(long, value_name = "URL", display_order = 1)]
	tile_url: Option<String>,

	/// Cache file for the placeholder image, reused by later runs
	#[arg(long, value_name = "FILE", display_order = 1)]
	placeholder: Option<PathBuf>,

	/// Print the result as JSON
	#[arg(long, display_order = 2)]
	json: bool,
}

impl Subcommand {
	fn load_config(&self) -> Result<Config> {
		let mut config = if let Some(path) = &self.config {
			Config::from_path(path)?
		} else {
			Config::default()
		};
		config.override_optional_tile_url(self.tile_url.as_deref());
		config.override_optional_max_level(self.max_level);
		config.override_optional_placeholder_path(self.placeholder.as_deref());
		config.validate()?;
		Ok(config)
	}
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.load_config()?;
	log::debug!("{config:?}");

	let source = TileSourceHttp::with_user_agent(
		&config.tile_url,
		Duration::from_secs(config.timeout_secs),
		&config.user_agent,
	)?;
	let quadkey: QuadKey = config.placeholder.quadkey.parse()?;
	let placeholder = Placeholder::load_or_fetch(config.placeholder.path.as_deref(), &source, &quadkey).await?;

	let oracle = PlaceholderOracle::new(Box::new(source), placeholder);
	let resolver = ZoomResolver::new(&oracle).with_max_level(config.max_level)?;
	let resolution = resolver
		.resolve(
			GeoPoint::new(arguments.lat1, arguments.lon1),
			GeoPoint::new(arguments.lat2, arguments.lon2),
		)
		.await?;

	if arguments.json {
		println!("{}", serde_json::to_string_pretty(&Report::new(&resolution)?)?);
	} else {
		println!("{}", render_text(&resolution)?);
	}
	Ok(())
}

#[derive(Debug, Serialize, PartialEq)]
struct Report {
	bbox: [f64; 4],
	level: u8,
	/// Tiles covering the box at `level`.
	tiles: Vec<TileReport>,
	/// How the tiles of the descent fared on their own, before the minimum was taken.
	provisional: ProvisionalReport,
}

#[derive(Debug, Serialize, PartialEq)]
struct TileReport {
	quadkey: String,
	x: u32,
	y: u32,
	level: u8,
}

#[derive(Debug, Serialize, PartialEq)]
struct ProvisionalReport {
	level: u8,
	tiles: Vec<ProvisionalTileReport>,
}

#[derive(Debug, Serialize, PartialEq)]
struct ProvisionalTileReport {
	quadkey: String,
	x: u32,
	y: u32,
	deepest: u8,
}

impl Report {
	fn new(resolution: &Resolution) -> Result<Report> {
		let tiles = resolution
			.tiles()?
			.into_iter()
			.map(|(coord, level)| TileReport {
				quadkey: coord.to_quadkey().to_string(),
				x: coord.x,
				y: coord.y,
				level,
			})
			.collect();
		let provisional = resolution
			.per_tile
			.iter()
			.map(|(coord, deepest)| ProvisionalTileReport {
				quadkey: coord.to_quadkey().to_string(),
				x: coord.x,
				y: coord.y,
				deepest: *deepest,
			})
			.collect();
		Ok(Report {
			bbox: resolution.bbox.as_array(),
			level: resolution.level,
			tiles,
			provisional: ProvisionalReport {
				level: resolution.provisional_level(),
				tiles: provisional,
			},
		})
	}
}

fn render_text(resolution: &Resolution) -> Result<String> {
	let mut lines = vec![
		format!("level: {}", resolution.level),
		format!(
			"provisional level: {} ({} of {} tiles limited to level {})",
			resolution.provisional_level(),
			resolution.count_limited(),
			resolution.per_tile.len(),
			resolution.level
		),
		format!("tiles: {:?}", resolution.rect_at_level()?),
	];
	for (coord, level) in resolution.tiles()? {
		lines.push(format!("{}\t{level}", coord.to_quadkey()));
	}
	Ok(lines.join("\n"))
}
