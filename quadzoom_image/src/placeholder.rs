//! The image a provider returns for tiles it has no imagery for.
//!
//! The placeholder is obtained once, either from a file cached by an earlier
//! run or by fetching a tile that is known to be empty, and is read-only
//! afterwards.

use crate::{DynamicImageTraitCompare, blob2image};
use anyhow::Result;
use image::DynamicImage;
use quadzoom_core::{Blob, QuadKey, io::TileSourceTrait};
use quadzoom_derive::context;
use std::{fs, path::Path};

/// Quadkey of a polar tile at level 23 that never carries imagery.
pub const DEFAULT_PLACEHOLDER_QUADKEY: &str = "00000000000000000000000";

#[derive(Clone, Debug)]
pub struct Placeholder {
	image: DynamicImage,
}

impl Placeholder {
	pub fn new(image: DynamicImage) -> Placeholder {
		Placeholder { image }
	}

	pub fn from_blob(blob: &Blob) -> Result<Placeholder> {
		Ok(Placeholder::new(blob2image(blob)?))
	}

	#[context("reading placeholder image from '{}'", path.display())]
	pub fn from_file(path: &Path) -> Result<Placeholder> {
		let blob = Blob::from(fs::read(path)?);
		Placeholder::from_blob(&blob)
	}

	/// Reads the placeholder from `path` if that file exists. Otherwise fetches
	/// the tile `quadkey` from `source` and, when a `path` is given, stores
	/// the fetched bytes there for later runs.
	#[context("acquiring placeholder image from tile '{quadkey}' of '{}'", source.get_name())]
	pub async fn load_or_fetch(
		path: Option<&Path>,
		source: &dyn TileSourceTrait,
		quadkey: &QuadKey,
	) -> Result<Placeholder> {
		if let Some(path) = path.filter(|p| p.exists()) {
			log::debug!("using cached placeholder '{}'", path.display());
			return Placeholder::from_file(path);
		}

		log::info!("fetching placeholder tile '{quadkey}' from '{}'", source.get_name());
		let blob = source.fetch_tile(quadkey).await?;
		let placeholder = Placeholder::from_blob(&blob)?;

		if let Some(path) = path {
			write_cache(path, &blob)?;
			log::debug!("cached placeholder at '{}'", path.display());
		}

		Ok(placeholder)
	}

	/// `true` if `image` is exactly the placeholder.
	pub fn matches(&self, image: &DynamicImage) -> bool {
		self.image.is_identical(image)
	}
}

#[context("writing placeholder cache '{}'", path.display())]
fn write_cache(path: &Path, blob: &Blob) -> Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)?;
	}
	fs::write(path, blob.as_slice())?;
	Ok(())
}
