use super::{Resolution, TileAvailabilityOracle};
use crate::{Error, GeoBBox, GeoPoint, MAX_LEVEL, ProbeTarget, TileBBox, TileCoord};
use anyhow::ensure;
use std::collections::BTreeMap;

/// Level the descent starts from unless configured otherwise.
pub const DEFAULT_MAX_LEVEL: u8 = 23;

/// Finds the deepest level with real imagery for every tile of a bounding box.
///
/// A run has three phases:
/// 1. descend from `max_level` until the top-left tile of the box's tile
///    rectangle is available; that level fixes the rectangle
/// 2. resolve every tile of the rectangle on its own with [`ZoomResolver::resolve_tile`]
/// 3. settle on the minimum of those levels for the whole rectangle
///
/// Probes are issued one at a time. All state of a run lives in the returned
/// [`Resolution`], so one resolver can serve any number of runs.
pub struct ZoomResolver<'a> {
	oracle: &'a dyn TileAvailabilityOracle,
	max_level: u8,
}

impl<'a> ZoomResolver<'a> {
	pub fn new(oracle: &'a dyn TileAvailabilityOracle) -> ZoomResolver<'a> {
		ZoomResolver {
			oracle,
			max_level: DEFAULT_MAX_LEVEL,
		}
	}

	/// # Errors
	/// Returns an error if `max_level` is deeper than 31.
	pub fn with_max_level(mut self, max_level: u8) -> anyhow::Result<ZoomResolver<'a>> {
		ensure!(max_level <= MAX_LEVEL, "max level ({max_level}) must be <= {MAX_LEVEL}");
		self.max_level = max_level;
		Ok(self)
	}

	pub fn max_level(&self) -> u8 {
		self.max_level
	}

	/// Resolves the box spanned by two corners, given in any order.
	pub async fn resolve(&self, a: GeoPoint, b: GeoPoint) -> Result<Resolution, Error> {
		let bbox = GeoBBox::from_points(a, b);
		log::debug!("resolving {bbox:?} from level {}", self.max_level);

		let rect = self.descend(&bbox).await?;
		log::info!(
			"top-left tile has imagery at level {}, refining {} tiles",
			rect.level,
			rect.count_tiles()
		);

		// the descent already found imagery for the top-left tile at rect.level
		let anchor = rect.min_coord();
		let mut per_tile = BTreeMap::from([(anchor, rect.level)]);
		for coord in rect.iter_coords().filter(|coord| *coord != anchor) {
			let level = self.resolve_tile(coord).await?;
			if level < rect.level {
				log::warn!("{coord:?} only has imagery down to level {level}");
			}
			per_tile.insert(coord, level);
		}

		// rect is never empty, so there is always a minimum
		let level = per_tile.values().copied().min().unwrap_or(rect.level);
		log::info!("uniform level for {bbox:?} is {level}");

		Ok(Resolution {
			bbox,
			rect,
			per_tile,
			level,
		})
	}

	/// Deepest level at which `tile` or one of its ancestors has real imagery,
	/// probing from the tile's own level upwards.
	pub async fn resolve_tile(&self, tile: TileCoord) -> Result<u8, Error> {
		let mut current = tile;
		loop {
			if self.probe(&current).await? {
				return Ok(current.level);
			}
			let Ok(parent) = current.parent() else {
				return Err(Error::NoImageryAvailable {
					target: ProbeTarget::Tile(tile),
					level_from: tile.level,
				});
			};
			current = parent;
		}
	}

	/// Walks down from `max_level` until the rectangle's top-left tile is available.
	async fn descend(&self, bbox: &GeoBBox) -> Result<TileBBox, Error> {
		for level in (0..=self.max_level).rev() {
			let rect = TileBBox::from_geo(level, bbox).map_err(|source| Error::InvalidRegion {
				bbox: *bbox,
				level,
				source,
			})?;
			if self.probe(&rect.min_coord()).await? {
				return Ok(rect);
			}
		}
		Err(Error::NoImageryAvailable {
			target: ProbeTarget::Region(*bbox),
			level_from: self.max_level,
		})
	}

	async fn probe(&self, coord: &TileCoord) -> Result<bool, Error> {
		let quadkey = coord.to_quadkey();
		let available = self
			.oracle
			.is_available(&quadkey)
			.await
			.map_err(|source| Error::TileFetchFailed {
				quadkey: quadkey.to_string(),
				level: coord.level,
				source,
			})?;
		log::debug!(
			"{coord:?} '{quadkey}': {}",
			if available { "imagery" } else { "placeholder" }
		);
		Ok(available)
	}
}
