//! The [`TileSourceTrait`] gateway between the resolver and a tile provider.
//!
//! # Examples
//!
//! ```rust
//! use quadzoom_core::{Blob, QuadKey, io::{TileSource, TileSourceTrait}};
//! use anyhow::{Result, bail};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct OnlyRoot;
//!
//! #[async_trait]
//! impl TileSourceTrait for OnlyRoot {
//!     async fn fetch_tile(&self, quadkey: &QuadKey) -> Result<Blob> {
//!         if quadkey.level() > 0 {
//!             bail!("no tile {quadkey}");
//!         }
//!         Ok(Blob::from(vec![1, 2, 3]))
//!     }
//!
//!     fn get_name(&self) -> &str {
//!         "only-root"
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let source: TileSource = Box::new(OnlyRoot);
//!     assert_eq!(source.fetch_tile(&"".parse()?).await?.len(), 3);
//!     assert!(source.fetch_tile(&"0".parse()?).await.is_err());
//!     Ok(())
//! }
//! ```

use crate::{Blob, QuadKey};
use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Debug;

/// Boxed dynamic [`TileSourceTrait`].
pub type TileSource = Box<dyn TileSourceTrait>;

/// Delivers the encoded image of a tile.
#[async_trait]
pub trait TileSourceTrait: Debug + Send + Sync {
	/// Fetches the bytes of the tile addressed by `quadkey`.
	///
	/// Transport failures and unsuccessful responses are errors.
	async fn fetch_tile(&self, quadkey: &QuadKey) -> Result<Blob>;

	/// Name of the source, for logging.
	fn get_name(&self) -> &str;
}
