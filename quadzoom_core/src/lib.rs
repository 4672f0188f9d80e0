//! Bing/Web-Mercator tile pyramid math and the adaptive zoom-level resolver.
//!
//! - [`mercator`]: projections between lat/lon, pixels and tiles
//! - [`types`]: coordinates, bounding boxes, quadkeys and blobs
//! - [`io`]: the tile gateway used to fetch imagery by quadkey
//! - [`resolver`]: finds the deepest uniform zoom level with real imagery for a bounding box

mod error;
pub use error::*;

pub mod io;

pub mod mercator;

pub mod resolver;

pub mod types;
pub use types::*;
