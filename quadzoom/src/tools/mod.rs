pub mod locate;
pub mod pixel;
pub mod quadkey;
pub mod resolve;
