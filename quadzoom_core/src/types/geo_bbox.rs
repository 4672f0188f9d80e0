//! Geographic bounding boxes spanned by two corner points.
//!
//! # Examples
//!
//! ```
//! use quadzoom_core::{GeoBBox, GeoPoint};
//!
//! // the corners may be given in any order
//! let a = GeoBBox::from_points(GeoPoint::new(52.6, 13.1), GeoPoint::new(52.4, 13.7));
//! let b = GeoBBox::from_points(GeoPoint::new(52.4, 13.7), GeoPoint::new(52.6, 13.1));
//! assert_eq!(a, b);
//! assert_eq!(a.as_array(), [13.1, 52.4, 13.7, 52.6]);
//! ```

use crate::GeoPoint;
use std::fmt;

/// A longitude/latitude rectangle in degrees.
///
/// `x` is longitude, `y` is latitude. Values are stored as given; clamping to
/// the Mercator range happens when the box is projected.
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl GeoBBox {
	/// Builds the box spanned by two corners, taking min and max per axis.
	pub fn from_points(a: GeoPoint, b: GeoPoint) -> GeoBBox {
		GeoBBox {
			x_min: a.lon.min(b.lon),
			y_min: a.lat.min(b.lat),
			x_max: a.lon.max(b.lon),
			y_max: a.lat.max(b.lat),
		}
	}

	/// North-west corner; projects onto the smallest tile indices.
	pub fn north_west(&self) -> GeoPoint {
		GeoPoint::new(self.y_max, self.x_min)
	}

	/// South-east corner; projects onto the largest tile indices.
	pub fn south_east(&self) -> GeoPoint {
		GeoPoint::new(self.y_min, self.x_max)
	}

	/// `[west, south, east, north]`
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}
}

impl fmt::Debug for GeoBBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "GeoBBox({:?})", self.as_array())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn corners() {
		let bbox = GeoBBox::from_points(GeoPoint::new(-10.0, 20.0), GeoPoint::new(5.0, -30.0));
		assert_eq!(bbox.north_west(), GeoPoint::new(5.0, -30.0));
		assert_eq!(bbox.south_east(), GeoPoint::new(-10.0, 20.0));
	}

	#[test]
	fn debug_format() {
		let bbox = GeoBBox::from_points(GeoPoint::new(1.0, 2.0), GeoPoint::new(3.0, 4.0));
		assert_eq!(format!("{bbox:?}"), "GeoBBox([2.0, 1.0, 4.0, 3.0])");
	}
}
