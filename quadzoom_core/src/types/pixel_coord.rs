use crate::mercator::{TILE_SIZE, TileXY, map_size, pixel_to_tile};
use std::fmt;

/// A pixel on the map canvas. Only meaningful together with a level.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelCoord {
	pub x: u64,
	pub y: u64,
}

impl PixelCoord {
	pub fn new(x: u64, y: u64) -> PixelCoord {
		PixelCoord { x, y }
	}

	/// Clamps both axes into `[0, map_size(level) - 1]`.
	#[must_use]
	pub fn clamped(&self, level: u8) -> PixelCoord {
		let max = map_size(level) - 1;
		PixelCoord {
			x: self.x.min(max),
			y: self.y.min(max),
		}
	}

	pub fn to_tile(&self) -> TileXY {
		pixel_to_tile(*self)
	}

	/// Position inside the containing tile, both axes in `0..256`.
	pub fn offset_in_tile(&self) -> (u32, u32) {
		((self.x % TILE_SIZE) as u32, (self.y % TILE_SIZE) as u32)
	}
}

impl fmt::Debug for PixelCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "PixelCoord({}, {})", self.x, self.y)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clamp_to_canvas() {
		assert_eq!(PixelCoord::new(600, 12).clamped(1), PixelCoord::new(511, 12));
		assert_eq!(PixelCoord::new(600, 12).clamped(2), PixelCoord::new(600, 12));
	}

	#[test]
	fn tile_and_offset() {
		let pixel = PixelCoord::new(167_920, 366_146);
		assert_eq!(pixel.to_tile(), TileXY { x: 655, y: 1430 });
		assert_eq!(pixel.offset_in_tile(), (240, 66));
	}
}
