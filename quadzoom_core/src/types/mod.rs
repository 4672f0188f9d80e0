//! Value types of the tile pyramid: positions, pixels, tiles, rectangles and quadkeys.

mod blob;
pub use blob::*;

mod geo_bbox;
pub use geo_bbox::*;

mod geo_point;
pub use geo_point::*;

mod pixel_coord;
pub use pixel_coord::*;

mod quadkey;
pub use quadkey::*;

mod tile_bbox;
pub use tile_bbox::*;

mod tile_coord;
pub use tile_coord::*;
