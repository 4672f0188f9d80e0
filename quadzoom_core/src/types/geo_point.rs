use std::fmt;

/// A WGS-84 position in degrees.
///
/// Any `f64` pair is accepted. Projections clamp latitude into the Mercator
/// range and longitude into `[-180, 180]`.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
	pub lat: f64,
	pub lon: f64,
}

impl GeoPoint {
	pub fn new(lat: f64, lon: f64) -> GeoPoint {
		GeoPoint { lat, lon }
	}
}

impl fmt::Debug for GeoPoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "GeoPoint({}, {})", self.lat, self.lon)
	}
}
