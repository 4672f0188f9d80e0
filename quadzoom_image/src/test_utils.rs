//! Synthetic images and in-memory tile sources for tests.

use anyhow::{Result, bail};
use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use quadzoom_core::{Blob, QuadKey, io::TileSourceTrait};
use std::{
	io::Cursor,
	sync::atomic::{AtomicUsize, Ordering},
};

pub fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
	DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
}

pub fn gradient(width: u32, height: u32) -> DynamicImage {
	DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
		Rgb([(x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8])
	}))
}

pub fn encode(image: &DynamicImage, format: ImageFormat) -> Blob {
	let mut buffer = Vec::new();
	image.write_to(&mut Cursor::new(&mut buffer), format).unwrap();
	Blob::from(buffer)
}

pub fn png(image: &DynamicImage) -> Blob {
	encode(image, ImageFormat::Png)
}

/// The "no imagery" tile used throughout the tests.
pub fn placeholder_image() -> DynamicImage {
	solid(16, 16, [201, 201, 201])
}

/// Real imagery down to `depth`, the placeholder below it.
#[derive(Debug)]
pub struct DepthSource {
	pub depth: u8,
	pub real: Blob,
	pub placeholder: Blob,
	pub broken: Option<QuadKey>,
	pub fetches: AtomicUsize,
}

impl DepthSource {
	pub fn new(depth: u8) -> DepthSource {
		DepthSource {
			depth,
			real: png(&gradient(16, 16)),
			placeholder: png(&placeholder_image()),
			broken: None,
			fetches: AtomicUsize::new(0),
		}
	}

	pub fn fetch_count(&self) -> usize {
		self.fetches.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl TileSourceTrait for DepthSource {
	async fn fetch_tile(&self, quadkey: &QuadKey) -> Result<Blob> {
		self.fetches.fetch_add(1, Ordering::SeqCst);
		if self.broken.as_ref() == Some(quadkey) {
			return Ok(Blob::from(&b"<html>503</html>"[..]));
		}
		Ok(if quadkey.level() <= self.depth {
			self.real.clone()
		} else {
			self.placeholder.clone()
		})
	}

	fn get_name(&self) -> &str {
		"depth"
	}
}

/// Fails every request.
#[derive(Debug)]
pub struct OfflineSource;

#[async_trait]
impl TileSourceTrait for OfflineSource {
	async fn fetch_tile(&self, quadkey: &QuadKey) -> Result<Blob> {
		bail!("offline, cannot fetch '{quadkey}'")
	}

	fn get_name(&self) -> &str {
		"offline"
	}
}
