use crate::{Placeholder, blob2image};
use anyhow::Result;
use async_trait::async_trait;
use quadzoom_core::{QuadKey, io::TileSource, resolver::TileAvailabilityOracle};

/// Answers availability by fetching the tile and comparing it with the
/// provider's placeholder. A tile is available unless it decodes to exactly
/// the placeholder image.
#[derive(Debug)]
pub struct PlaceholderOracle {
	source: TileSource,
	placeholder: Placeholder,
}

impl PlaceholderOracle {
	pub fn new(source: TileSource, placeholder: Placeholder) -> PlaceholderOracle {
		PlaceholderOracle { source, placeholder }
	}

	async fn probe(&self, quadkey: &QuadKey) -> Result<bool> {
		let blob = self.source.fetch_tile(quadkey).await?;
		let image = blob2image(&blob)?;
		Ok(!self.placeholder.matches(&image))
	}
}

#[async_trait]
impl TileAvailabilityOracle for PlaceholderOracle {
	async fn is_available(&self, quadkey: &QuadKey) -> Result<bool> {
		self.probe(quadkey).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::*;
	use pretty_assertions::assert_eq;
	use quadzoom_core::{Error, GeoPoint, resolver::ZoomResolver};

	fn oracle(source: DepthSource) -> PlaceholderOracle {
		PlaceholderOracle::new(Box::new(source), Placeholder::new(placeholder_image()))
	}

	#[tokio::test]
	async fn placeholder_tiles_are_unavailable() {
		let oracle = oracle(DepthSource::new(14));
		assert!(oracle.is_available(&"0231".parse().unwrap()).await.unwrap());
		assert!(oracle.is_available(&"02310231023102".parse().unwrap()).await.unwrap());
		assert!(!oracle.is_available(&"023102310231023".parse().unwrap()).await.unwrap());
	}

	#[tokio::test]
	async fn same_pixels_in_another_size_are_imagery() {
		let source = DepthSource {
			real: png(&solid(32, 32, [201, 201, 201])),
			..DepthSource::new(3)
		};
		let oracle = oracle(source);
		assert!(oracle.is_available(&"012".parse().unwrap()).await.unwrap());
	}

	#[tokio::test]
	async fn undecodable_tile_is_an_error() {
		let quadkey: QuadKey = "1202".parse().unwrap();
		let source = DepthSource {
			broken: Some(quadkey.clone()),
			..DepthSource::new(14)
		};
		let err = oracle(source).is_available(&quadkey).await.unwrap_err();
		assert_eq!(err.to_string(), "decoding image from 16 bytes");
	}

	#[tokio::test]
	async fn drives_the_resolver() {
		let oracle = oracle(DepthSource::new(14));
		let resolution = ZoomResolver::new(&oracle)
			.resolve(GeoPoint::new(52.52, 13.40), GeoPoint::new(52.50, 13.43))
			.await
			.unwrap();
		assert_eq!(resolution.provisional_level(), 14);
		assert_eq!(resolution.level, 14);
		assert_eq!(resolution.tiles().unwrap().len(), 6);
	}

	#[tokio::test]
	async fn resolver_reports_broken_tiles() {
		let a = GeoPoint::new(52.52, 13.40);
		let b = GeoPoint::new(52.50, 13.43);
		let anchor = quadzoom_core::TileBBox::from_points(23, a, b).unwrap().min_coord();
		let source = DepthSource {
			broken: Some(anchor.to_quadkey()),
			..DepthSource::new(14)
		};
		let oracle = oracle(source);
		let err = ZoomResolver::new(&oracle).resolve(a, b).await.unwrap_err();
		assert!(matches!(err, Error::TileFetchFailed { level: 23, .. }), "{err}");
	}
}
