//! YAML configuration of the `resolve` command.
//!
//! Every key is optional. A minimal file looks like:
//!
//! ```yaml
//! tile_url: "https://ecn.t1.tiles.virtualearth.net/tiles/a{quadkey}.jpeg?g=131"
//! max_level: 21
//! placeholder:
//!   path: cache/placeholder.jpeg
//! ```
//!
//! A relative `placeholder.path` is resolved against the directory of the
//! configuration file. Command line arguments override the file.

use anyhow::{Result, bail, ensure};
use quadzoom_core::{MAX_LEVEL, QuadKey, io::DEFAULT_TILE_URL, resolver::DEFAULT_MAX_LEVEL};
use quadzoom_derive::context;
use quadzoom_image::DEFAULT_PLACEHOLDER_QUADKEY;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::{Path, PathBuf},
};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
	/// URL template of the tile provider, containing `{quadkey}`.
	pub tile_url: String,

	/// Level the descent starts from.
	pub max_level: u8,

	/// Timeout of a single tile request.
	pub timeout_secs: u64,

	pub user_agent: String,

	pub placeholder: PlaceholderConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct PlaceholderConfig {
	/// Where the placeholder image is cached between runs. No caching if unset.
	pub path: Option<PathBuf>,

	/// A tile that is known to have no imagery.
	pub quadkey: String,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			tile_url: DEFAULT_TILE_URL.to_string(),
			max_level: DEFAULT_MAX_LEVEL,
			timeout_secs: 30,
			user_agent: concat!("quadzoom/", env!("CARGO_PKG_VERSION")).to_string(),
			placeholder: PlaceholderConfig::default(),
		}
	}
}

impl Default for PlaceholderConfig {
	fn default() -> Self {
		PlaceholderConfig {
			path: None,
			quadkey: DEFAULT_PLACEHOLDER_QUADKEY.to_string(),
		}
	}
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	#[context("reading config file '{}'", path.display())]
	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path)?;
		let mut config = Config::from_reader(BufReader::new(file))?;

		if let (Some(base), Some(cache)) = (path.parent(), &config.placeholder.path) {
			if cache.is_relative() {
				config.placeholder.path = Some(base.join(cache));
			}
		}

		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		if !self.tile_url.contains("{quadkey}") {
			bail!("tile_url '{}' must contain '{{quadkey}}'", self.tile_url);
		}
		ensure!(
			self.tile_url.starts_with("http://") || self.tile_url.starts_with("https://"),
			"tile_url '{}' must use http or https",
			self.tile_url
		);
		ensure!(
			self.max_level <= MAX_LEVEL,
			"max_level ({}) must be <= {MAX_LEVEL}",
			self.max_level
		);
		ensure!(self.timeout_secs > 0, "timeout_secs must be greater than 0");
		self.placeholder.quadkey.parse::<QuadKey>()?;
		Ok(())
	}

	pub fn override_optional_tile_url(&mut self, tile_url: Option<&str>) {
		if let Some(tile_url) = tile_url {
			self.tile_url = tile_url.to_string();
		}
	}

	pub fn override_optional_max_level(&mut self, max_level: Option<u8>) {
		if let Some(max_level) = max_level {
			self.max_level = max_level;
		}
	}

	pub fn override_optional_placeholder_path(&mut self, path: Option<&Path>) {
		if let Some(path) = path {
			self.placeholder.path = Some(path.to_path_buf());
		}
	}
}
