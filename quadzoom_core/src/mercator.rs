//! Web-Mercator projection at a given level of detail.
//!
//! The map at level `z` is a square canvas of [`map_size`]`(z)` pixels per side,
//! cut into 256×256 pixel tiles. Geographic input is clamped into the Mercator
//! range before any trigonometry, so no input can produce `NaN` or infinity:
//!
//! ```
//! use quadzoom_core::mercator::{lat_lon_to_pixel, pixel_to_lat_lon, pixel_to_tile};
//!
//! // Space Needle, Seattle
//! let pixel = lat_lon_to_pixel(47.6205, -122.3493, 12);
//! let tile = pixel_to_tile(pixel);
//! assert_eq!((tile.x, tile.y), (655, 1430));
//!
//! // latitudes beyond the Mercator limit are clamped, not rejected
//! let pole = lat_lon_to_pixel(90.0, 0.0, 3);
//! assert_eq!(pole.y, 0);
//! # let _ = pixel_to_lat_lon(pixel, 12);
//! ```

use crate::{GeoPoint, MAX_LEVEL, PixelCoord};
use std::f64::consts::PI;

/// WGS-84 equatorial radius in metres.
pub const EARTH_RADIUS: f64 = 6_378_137.0;
pub const MIN_LATITUDE: f64 = -85.05112878;
pub const MAX_LATITUDE: f64 = 85.05112878;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Side length of a tile in pixels.
pub const TILE_SIZE: u64 = 256;

/// Clamps `n` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics, and a `NaN` input yields `min`.
pub fn clip(n: f64, min: f64, max: f64) -> f64 {
	n.max(min).min(max)
}

/// Width and height of the whole map in pixels: `256 << level`.
///
/// # Panics
/// Panics if `level` is deeper than [`MAX_LEVEL`], where tile indices stop fitting in `u32`.
pub fn map_size(level: u8) -> u64 {
	assert!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");
	TILE_SIZE << level
}

/// Metres on the ground covered by one pixel at `latitude` and `level`.
pub fn ground_resolution(latitude: f64, level: u8) -> f64 {
	let latitude = clip(latitude, MIN_LATITUDE, MAX_LATITUDE);
	(latitude * PI / 180.0).cos() * 2.0 * PI * EARTH_RADIUS / map_size(level) as f64
}

/// Map scale denominator `N` of the ratio `1 : N` on a screen with `screen_dpi` dots per inch.
pub fn map_scale(latitude: f64, level: u8, screen_dpi: f64) -> f64 {
	ground_resolution(latitude, level) * screen_dpi / 0.0254
}

/// Projects a WGS-84 position into pixel space at `level`.
///
/// Rounds to the nearest pixel and clamps to the canvas.
pub fn lat_lon_to_pixel(latitude: f64, longitude: f64, level: u8) -> PixelCoord {
	let latitude = clip(latitude, MIN_LATITUDE, MAX_LATITUDE);
	let longitude = clip(longitude, MIN_LONGITUDE, MAX_LONGITUDE);

	let x = (longitude + 180.0) / 360.0;
	let sin_latitude = (latitude * PI / 180.0).sin();
	let y = 0.5 - ((1.0 + sin_latitude) / (1.0 - sin_latitude)).ln() / (4.0 * PI);

	let size = map_size(level) as f64;
	PixelCoord {
		x: clip(x * size + 0.5, 0.0, size - 1.0) as u64,
		y: clip(y * size + 0.5, 0.0, size - 1.0) as u64,
	}
}

/// Inverse of [`lat_lon_to_pixel`]. Pixels outside the canvas are clamped first.
pub fn pixel_to_lat_lon(pixel: PixelCoord, level: u8) -> GeoPoint {
	let size = map_size(level) as f64;
	let x = clip(pixel.x as f64, 0.0, size - 1.0) / size - 0.5;
	let y = 0.5 - clip(pixel.y as f64, 0.0, size - 1.0) / size;

	GeoPoint {
		lat: 90.0 - 360.0 * (-y * 2.0 * PI).exp().atan() / PI,
		lon: 360.0 * x,
	}
}

/// Tile indices of the tile containing `pixel`.
pub fn pixel_to_tile(pixel: PixelCoord) -> TileXY {
	TileXY {
		x: (pixel.x / TILE_SIZE) as u32,
		y: (pixel.y / TILE_SIZE) as u32,
	}
}

/// Upper-left pixel of a tile.
pub fn tile_to_pixel(tile: TileXY) -> PixelCoord {
	PixelCoord {
		x: u64::from(tile.x) * TILE_SIZE,
		y: u64::from(tile.y) * TILE_SIZE,
	}
}

/// Tile indices without a level, as produced by [`pixel_to_tile`].
///
/// Combine with a level via [`crate::TileCoord::new`] to get a pyramid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileXY {
	pub x: u32,
	pub y: u32,
}
