//! Adaptive zoom-level resolution for a bounding box.
//!
//! ```rust
//! use quadzoom_core::{GeoPoint, QuadKey, resolver::{TileAvailabilityOracle, ZoomResolver}};
//! use anyhow::Result;
//! use async_trait::async_trait;
//!
//! // a provider with imagery down to level 17 everywhere
//! struct UpTo17;
//!
//! #[async_trait]
//! impl TileAvailabilityOracle for UpTo17 {
//!     async fn is_available(&self, quadkey: &QuadKey) -> Result<bool> {
//!         Ok(quadkey.level() <= 17)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let oracle = UpTo17;
//!     let resolver = ZoomResolver::new(&oracle);
//!     let resolution = resolver
//!         .resolve(GeoPoint::new(52.52, 13.40), GeoPoint::new(52.50, 13.43))
//!         .await?;
//!     assert_eq!(resolution.level, 17);
//!     Ok(())
//! }
//! ```

mod oracle;
pub use oracle::*;

mod resolution;
pub use resolution::*;

mod zoom_resolver;
pub use zoom_resolver::*;
