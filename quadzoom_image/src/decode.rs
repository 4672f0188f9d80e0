use anyhow::Result;
use image::DynamicImage;
use quadzoom_core::Blob;
use quadzoom_derive::context;

/// Decodes a fetched tile. The format (JPEG or PNG) is guessed from the bytes.
#[context("decoding image from {} bytes", blob.len())]
pub fn blob2image(blob: &Blob) -> Result<DynamicImage> {
	Ok(image::load_from_memory(blob.as_slice())?)
}
