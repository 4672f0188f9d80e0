use crate::{GeoBBox, TileBBox, TileCoord};
use anyhow::Result;
use std::collections::BTreeMap;

/// Outcome of resolving one bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
	/// The box as requested.
	pub bbox: GeoBBox,
	/// The rectangle whose top-left tile first showed real imagery during the descent.
	pub rect: TileBBox,
	/// Deepest level each tile of `rect` reached on its own, before reduction.
	pub per_tile: BTreeMap<TileCoord, u8>,
	/// The level every tile of `rect` supports.
	pub level: u8,
}

impl Resolution {
	/// Level at which the top-left tile first showed real imagery.
	pub fn provisional_level(&self) -> u8 {
		self.rect.level
	}

	/// Every tile covering the box at the uniform level, each mapped to that level.
	pub fn tiles(&self) -> Result<BTreeMap<TileCoord, u8>> {
		Ok(self.rect_at_level()?.iter_coords().map(|coord| (coord, self.level)).collect())
	}

	/// Number of tiles whose own imagery stops at the uniform level, i.e. the tiles holding the region back.
	pub fn count_limited(&self) -> usize {
		self.per_tile.values().filter(|level| **level == self.level).count()
	}

	/// The rectangle re-expressed at the uniform level.
	pub fn rect_at_level(&self) -> Result<TileBBox> {
		self.rect.at_level(self.level)
	}
}
