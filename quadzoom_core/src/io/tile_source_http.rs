//! Fetching tiles from an HTTP tile provider.
//!
//! [`TileSourceHttp`] fills the `{quadkey}` placeholder of a URL template and
//! issues one GET per tile. Each request carries a timeout; a timed-out
//! request is an ordinary error. There is no retry, the caller decides what a
//! failed fetch means.
//!
//! ```rust,no_run
//! use quadzoom_core::io::{TileSourceHttp, TileSourceTrait, DEFAULT_TILE_URL};
//! use anyhow::Result;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let source = TileSourceHttp::new(DEFAULT_TILE_URL, Duration::from_secs(30))?;
//!     let blob = source.fetch_tile(&"1202102332221212".parse()?).await?;
//!     println!("{} bytes", blob.len());
//!     Ok(())
//! }
//! ```

use super::TileSourceTrait;
use crate::{Blob, QuadKey};
use anyhow::{Result, bail};
use async_trait::async_trait;
use quadzoom_derive::context;
use reqwest::{Client, Url};
use std::time::Duration;

/// Bing aerial imagery (hybrid style), addressed by quadkey.
pub const DEFAULT_TILE_URL: &str = "https://ecn.t0.tiles.virtualearth.net/tiles/h{quadkey}.jpeg?g=131";

const QUADKEY_PLACEHOLDER: &str = "{quadkey}";

/// An HTTP(S) tile provider addressed through a URL template.
#[derive(Debug)]
pub struct TileSourceHttp {
	client: Client,
	template: String,
}

impl TileSourceHttp {
	/// Creates a source for `template`, which must contain `{quadkey}` and use http or https.
	pub fn new(template: &str, timeout: Duration) -> Result<TileSourceHttp> {
		TileSourceHttp::with_user_agent(template, timeout, concat!("quadzoom/", env!("CARGO_PKG_VERSION")))
	}

	#[context("creating HTTP tile source for '{template}'")]
	pub fn with_user_agent(template: &str, timeout: Duration, user_agent: &str) -> Result<TileSourceHttp> {
		if !template.contains(QUADKEY_PLACEHOLDER) {
			bail!("URL template must contain '{QUADKEY_PLACEHOLDER}'");
		}

		let probe = Url::parse(&template.replace(QUADKEY_PLACEHOLDER, "0"))?;
		match probe.scheme() {
			"http" | "https" => (),
			other => bail!("unsupported URL scheme '{other}', expected 'http' or 'https'"),
		}

		let client = Client::builder().timeout(timeout).user_agent(user_agent).build()?;

		Ok(TileSourceHttp {
			client,
			template: template.to_string(),
		})
	}

	pub fn tile_url(&self, quadkey: &QuadKey) -> String {
		self.template.replace(QUADKEY_PLACEHOLDER, quadkey.as_str())
	}

	#[context("fetching tile '{}' from '{}'", quadkey, self.tile_url(quadkey))]
	async fn get(&self, quadkey: &QuadKey) -> Result<Blob> {
		let url = self.tile_url(quadkey);
		log::trace!("GET {url}");

		let response = self.client.get(&url).send().await?;
		let status = response.status();
		if !status.is_success() {
			bail!("HTTP request failed with status {status}");
		}

		let bytes = response.bytes().await?;
		Ok(Blob::from(&*bytes))
	}
}

#[async_trait]
impl TileSourceTrait for TileSourceHttp {
	async fn fetch_tile(&self, quadkey: &QuadKey) -> Result<Blob> {
		self.get(quadkey).await
	}

	fn get_name(&self) -> &str {
		&self.template
	}
}
