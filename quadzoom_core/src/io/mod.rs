//! Fetching tile bytes by quadkey.

mod tile_source;
pub use tile_source::*;

mod tile_source_http;
pub use tile_source_http::*;
