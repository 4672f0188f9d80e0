use crate::QuadKey;
use anyhow::Result;
use async_trait::async_trait;

/// Decides whether the provider has real imagery for a tile.
///
/// The resolver only ever asks this question, so the way it is answered
/// (comparing against a placeholder image, a checksum, a status code) can
/// change without touching the resolver.
#[async_trait]
pub trait TileAvailabilityOracle: Send + Sync {
	/// `Ok(false)` means the tile is known to be missing. Errors mean the
	/// question could not be answered.
	async fn is_available(&self, quadkey: &QuadKey) -> Result<bool>;
}
