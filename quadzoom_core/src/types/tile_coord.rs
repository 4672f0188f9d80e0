//! Tile coordinates in the Bing/Web-Mercator pyramid.
//!
//! A [`TileCoord`] names one 256×256 tile by zoom level and x/y index, with
//! `(0, 0)` at the north-west corner of the map.
//!
//! ```
//! use quadzoom_core::{GeoPoint, TileCoord};
//!
//! let coord = TileCoord::from_geo(GeoPoint::new(47.6205, -122.3493), 12).unwrap();
//! assert_eq!((coord.x, coord.y), (655, 1430));
//! assert_eq!(coord.to_quadkey().as_str(), "021230021331");
//!
//! let parent = coord.parent().unwrap();
//! assert_eq!((parent.level, parent.x, parent.y), (11, 327, 715));
//! ```

use crate::{
	GeoPoint, QuadKey,
	mercator::{TileXY, lat_lon_to_pixel, pixel_to_lat_lon, pixel_to_tile, tile_to_pixel},
};
use anyhow::{Result, ensure};
use std::{cmp::Ordering, fmt};

/// Deepest level a `TileCoord` can address: indices must fit in `u32`.
pub const MAX_LEVEL: u8 = 31;

/// A tile at zoom `level` with indices `x`, `y` in `0..2^level`.
#[derive(Eq, PartialEq, Clone, Copy, Hash)]
pub struct TileCoord {
	pub level: u8,
	pub x: u32,
	pub y: u32,
}

impl TileCoord {
	/// # Errors
	/// Returns an error if `level` > 31 or an index is outside the level's grid.
	pub fn new(level: u8, x: u32, y: u32) -> Result<TileCoord> {
		ensure!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");
		let size = 1u64 << level;
		ensure!(u64::from(x) < size, "x ({x}) out of bounds for level {level}");
		ensure!(u64::from(y) < size, "y ({y}) out of bounds for level {level}");
		Ok(TileCoord { level, x, y })
	}

	/// The tile containing a geographic position. Out-of-range positions are clamped.
	pub fn from_geo(point: GeoPoint, level: u8) -> Result<TileCoord> {
		ensure!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");
		let TileXY { x, y } = pixel_to_tile(lat_lon_to_pixel(point.lat, point.lon, level));
		TileCoord::new(level, x, y)
	}

	/// Position of the tile's north-west corner.
	pub fn to_geo(&self) -> GeoPoint {
		pixel_to_lat_lon(tile_to_pixel(self.xy()), self.level)
	}

	pub fn xy(&self) -> TileXY {
		TileXY { x: self.x, y: self.y }
	}

	pub fn to_quadkey(&self) -> QuadKey {
		QuadKey::from_tile(self)
	}

	/// The tile one level up that contains this one.
	///
	/// # Errors
	/// Returns an error at level 0, which has no parent.
	pub fn parent(&self) -> Result<TileCoord> {
		ensure!(self.level > 0, "tile at level 0 has no parent");
		Ok(TileCoord {
			level: self.level - 1,
			x: self.x >> 1,
			y: self.y >> 1,
		})
	}

	/// The ancestor at a shallower `level`, or the tile itself at the same level.
	///
	/// # Errors
	/// Returns an error if `level` is deeper than this tile.
	pub fn ancestor_at(&self, level: u8) -> Result<TileCoord> {
		ensure!(
			level <= self.level,
			"level {level} is deeper than tile level {}",
			self.level
		);
		let shift = self.level - level;
		Ok(TileCoord {
			level,
			x: self.x >> shift,
			y: self.y >> shift,
		})
	}
}

impl fmt::Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileCoord({}, [{}, {}])", self.level, self.x, self.y)
	}
}

/// Orders by level, then row-major: `x` before `y`.
impl Ord for TileCoord {
	fn cmp(&self, other: &Self) -> Ordering {
		self.level
			.cmp(&other.level)
			.then(self.x.cmp(&other.x))
			.then(self.y.cmp(&other.y))
	}
}

impl PartialOrd for TileCoord {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use rstest::rstest;

	#[rstest]
	#[case(0, 0, 0, true)]
	#[case(0, 1, 0, false)]
	#[case(3, 7, 7, true)]
	#[case(3, 8, 0, false)]
	#[case(31, u32::MAX >> 1, 0, true)]
	#[case(32, 0, 0, false)]
	fn new_validates_bounds(#[case] level: u8, #[case] x: u32, #[case] y: u32, #[case] ok: bool) {
		assert_eq!(TileCoord::new(level, x, y).is_ok(), ok);
	}

	#[test]
	fn from_geo_clamps() {
		let coord = TileCoord::from_geo(GeoPoint::new(90.0, 180.0), 2).unwrap();
		assert_eq!(coord, TileCoord::new(2, 3, 0).unwrap());
		let coord = TileCoord::from_geo(GeoPoint::new(-90.0, -180.0), 2).unwrap();
		assert_eq!(coord, TileCoord::new(2, 0, 3).unwrap());
	}

	#[test]
	fn to_geo_is_north_west_corner() {
		let corner = TileCoord::new(1, 1, 1).unwrap().to_geo();
		assert_abs_diff_eq!(corner.lat, 0.0, epsilon = 1e-9);
		assert_abs_diff_eq!(corner.lon, 0.0, epsilon = 1e-9);
	}

	#[test]
	fn parent_chain_ends_at_root() {
		let mut coord = TileCoord::new(4, 13, 6).unwrap();
		let mut levels = vec![coord.level];
		while let Ok(parent) = coord.parent() {
			coord = parent;
			levels.push(coord.level);
		}
		assert_eq!(levels, vec![4, 3, 2, 1, 0]);
		assert_eq!(coord, TileCoord::new(0, 0, 0).unwrap());
	}

	#[test]
	fn ancestor_at() {
		let coord = TileCoord::new(5, 22, 9).unwrap();
		assert_eq!(coord.ancestor_at(3).unwrap(), TileCoord::new(3, 5, 2).unwrap());
		assert_eq!(coord.ancestor_at(5).unwrap(), coord);
		assert!(coord.ancestor_at(6).is_err());
	}

	#[test]
	fn ordering_is_row_major_by_x() {
		let mut coords = vec![
			TileCoord::new(2, 1, 0).unwrap(),
			TileCoord::new(2, 0, 1).unwrap(),
			TileCoord::new(1, 1, 1).unwrap(),
			TileCoord::new(2, 0, 0).unwrap(),
		];
		coords.sort();
		assert_eq!(format!("{coords:?}"), "[TileCoord(1, [1, 1]), TileCoord(2, [0, 0]), TileCoord(2, [0, 1]), TileCoord(2, [1, 0])]");
	}
}
