use crate::{GeoBBox, TileCoord};
use thiserror::Error as ThisError;

/// Failures of quadkey decoding and zoom resolution.
///
/// Every variant aborts the current operation. None of them is retried or
/// replaced by a fallback inside this crate.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A quadkey contained something other than the digits `0`..`3`, or was too long.
	#[error("invalid quadkey '{quadkey}': {reason}")]
	InvalidQuadKey { quadkey: String, reason: String },

	/// Every probed level down to 0 returned the placeholder image.
	#[error("no imagery available for {target} at any level from {level_from} down to 0")]
	NoImageryAvailable { target: ProbeTarget, level_from: u8 },

	/// A bounding box could not be expressed as a tile rectangle at `level`.
	#[error("cannot cover {bbox:?} with tiles at level {level}")]
	InvalidRegion {
		bbox: GeoBBox,
		level: u8,
		#[source]
		source: anyhow::Error,
	},

	/// The gateway failed to deliver or decode a tile, including timeouts.
	#[error("fetching tile '{quadkey}' at level {level} failed")]
	TileFetchFailed {
		quadkey: String,
		level: u8,
		#[source]
		source: anyhow::Error,
	},
}

/// What a failed probe sequence was looking for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProbeTarget {
	/// The top-left tile of a bounding box during the descent.
	Region(GeoBBox),
	/// A single tile during per-tile refinement.
	Tile(TileCoord),
}

impl std::fmt::Display for ProbeTarget {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ProbeTarget::Region(bbox) => write!(f, "region {bbox:?}"),
			ProbeTarget::Tile(coord) => write!(f, "tile {coord:?}"),
		}
	}
}
