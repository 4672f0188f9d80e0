//! Exact comparison of decoded images.
//!
//! Tiles are compared pixel by pixel, without tolerance: two images are the
//! same only if size, colour model and every byte of pixel data agree.

use anyhow::{Result, ensure};
use image::DynamicImage;

/// Comparison helpers on top of [`DynamicImage`].
pub trait DynamicImageTraitCompare {
	/// Ensures both images share the same dimensions.
	fn ensure_same_size(&self, other: &DynamicImage) -> Result<()>;

	/// Ensures both images share the same dimensions and colour model.
	fn ensure_same_meta(&self, other: &DynamicImage) -> Result<()>;

	/// `true` if both images have the same size, colour model and pixel bytes.
	fn is_identical(&self, other: &DynamicImage) -> bool;
}

impl DynamicImageTraitCompare for DynamicImage {
	fn ensure_same_size(&self, other: &DynamicImage) -> Result<()> {
		ensure!(
			self.width() == other.width(),
			"Image width mismatch: self has width {}, but the other image has width {}",
			self.width(),
			other.width()
		);
		ensure!(
			self.height() == other.height(),
			"Image height mismatch: self has height {}, but the other image has height {}",
			self.height(),
			other.height()
		);
		Ok(())
	}

	fn ensure_same_meta(&self, other: &DynamicImage) -> Result<()> {
		self.ensure_same_size(other)?;
		ensure!(
			self.color() == other.color(),
			"Pixel value type mismatch: self has {:?}, but the other image has {:?}",
			self.color(),
			other.color()
		);
		Ok(())
	}

	fn is_identical(&self, other: &DynamicImage) -> bool {
		self.ensure_same_meta(other).is_ok() && self.as_bytes() == other.as_bytes()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::{gradient, solid};
	use rstest::rstest;

	#[test]
	fn identical_images() {
		assert!(gradient(8, 8).is_identical(&gradient(8, 8)));
		assert!(solid(4, 4, [10, 20, 30]).is_identical(&solid(4, 4, [10, 20, 30])));
	}

	#[rstest]
	#[case::one_channel(solid(4, 4, [10, 20, 31]))]
	#[case::wider(solid(5, 4, [10, 20, 30]))]
	#[case::taller(solid(4, 5, [10, 20, 30]))]
	#[case::with_alpha(DynamicImage::ImageRgba8(solid(4, 4, [10, 20, 30]).to_rgba8()))]
	fn different_images(#[case] other: DynamicImage) {
		let image = solid(4, 4, [10, 20, 30]);
		assert!(!image.is_identical(&other));
		assert!(!other.is_identical(&image));
	}

	#[test]
	fn meta_mismatch_messages() {
		let image = solid(4, 4, [0, 0, 0]);
		assert_eq!(
			image.ensure_same_meta(&solid(3, 4, [0, 0, 0])).unwrap_err().to_string(),
			"Image width mismatch: self has width 4, but the other image has width 3"
		);
		assert_eq!(
			image.ensure_same_size(&solid(4, 2, [0, 0, 0])).unwrap_err().to_string(),
			"Image height mismatch: self has height 4, but the other image has height 2"
		);
		let grey = DynamicImage::ImageLuma8(image.to_luma8());
		assert_eq!(
			image.ensure_same_meta(&grey).unwrap_err().to_string(),
			"Pixel value type mismatch: self has Rgb8, but the other image has L8"
		);
	}
}
