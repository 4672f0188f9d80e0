//! Rectangles of tiles at a single zoom level.
//!
//! A [`TileBBox`] is inclusive on both ends: `x_min..=x_max` by
//! `y_min..=y_max`. It is never empty, since it is always built from at
//! least one tile.
//!
//! ```
//! use quadzoom_core::{GeoBBox, GeoPoint, TileBBox};
//!
//! let berlin = GeoBBox::from_points(GeoPoint::new(52.6755, 13.0884), GeoPoint::new(52.3383, 13.7611));
//! let bbox = TileBBox::from_geo(10, &berlin).unwrap();
//! assert_eq!((bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max), (549, 335, 551, 336));
//! assert_eq!(bbox.count_tiles(), 6);
//! ```

use crate::{GeoBBox, GeoPoint, TileCoord};
use anyhow::{Result, ensure};
use itertools::Itertools;
use std::fmt;

/// The tiles covering a region at one level.
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct TileBBox {
	pub level: u8,
	pub x_min: u32,
	pub y_min: u32,
	pub x_max: u32,
	pub y_max: u32,
}

impl TileBBox {
	/// # Errors
	/// Returns an error if the corners are not valid tiles of `level` or are out of order.
	pub fn from_min_and_max(level: u8, x_min: u32, y_min: u32, x_max: u32, y_max: u32) -> Result<TileBBox> {
		TileCoord::new(level, x_max, y_max)?;
		ensure!(x_min <= x_max, "x_min ({x_min}) must be <= x_max ({x_max})");
		ensure!(y_min <= y_max, "y_min ({y_min}) must be <= y_max ({y_max})");
		Ok(TileBBox {
			level,
			x_min,
			y_min,
			x_max,
			y_max,
		})
	}

	/// The rectangle spanned by the tiles under two points, in either order.
	pub fn from_points(level: u8, a: GeoPoint, b: GeoPoint) -> Result<TileBBox> {
		let a = TileCoord::from_geo(a, level)?;
		let b = TileCoord::from_geo(b, level)?;
		TileBBox::from_min_and_max(level, a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
	}

	/// The rectangle covering a geographic box at `level`.
	pub fn from_geo(level: u8, bbox: &GeoBBox) -> Result<TileBBox> {
		TileBBox::from_points(level, bbox.north_west(), bbox.south_east())
	}

	/// The top-left tile.
	pub fn min_coord(&self) -> TileCoord {
		TileCoord {
			level: self.level,
			x: self.x_min,
			y: self.y_min,
		}
	}

	pub fn max_coord(&self) -> TileCoord {
		TileCoord {
			level: self.level,
			x: self.x_max,
			y: self.y_max,
		}
	}

	pub fn width(&self) -> u32 {
		self.x_max - self.x_min + 1
	}

	pub fn height(&self) -> u32 {
		self.y_max - self.y_min + 1
	}

	pub fn count_tiles(&self) -> u64 {
		u64::from(self.width()) * u64::from(self.height())
	}

	/// Every tile of the rectangle exactly once, by `x` and then `y`.
	pub fn iter_coords(&self) -> impl Iterator<Item = TileCoord> + '_ {
		(self.x_min..=self.x_max)
			.cartesian_product(self.y_min..=self.y_max)
			.map(|(x, y)| TileCoord { level: self.level, x, y })
	}

	/// The same area one or more levels up.
	///
	/// # Errors
	/// Returns an error if `level` is deeper than this rectangle.
	pub fn at_level(&self, level: u8) -> Result<TileBBox> {
		let min = self.min_coord().ancestor_at(level)?;
		let max = self.max_coord().ancestor_at(level)?;
		TileBBox::from_min_and_max(level, min.x, min.y, max.x, max.y)
	}
}

impl fmt::Debug for TileBBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}: [{},{},{},{}] ({}x{})",
			self.level,
			self.x_min,
			self.y_min,
			self.x_max,
			self.y_max,
			self.width(),
			self.height()
		)
	}
}
