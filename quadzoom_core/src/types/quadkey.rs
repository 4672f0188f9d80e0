//! Bing quadkeys: base-4 tile identifiers.
//!
//! Digit `n` (counting from 1 at the left) interleaves bit `level - n` of the
//! tile's `x` (weight 1) and `y` (weight 2) index, so the key reads from the
//! root of the pyramid down to the tile, and its length is the tile's level.
//!
//! ```
//! use quadzoom_core::{QuadKey, TileCoord};
//!
//! let key = QuadKey::from_tile(&TileCoord::new(2, 3, 0).unwrap());
//! assert_eq!(key.as_str(), "11");
//!
//! let coord: TileCoord = "11".parse::<QuadKey>().unwrap().to_tile();
//! assert_eq!((coord.level, coord.x, coord.y), (2, 3, 0));
//!
//! assert!("0142".parse::<QuadKey>().is_err());
//! ```

use crate::{Error, MAX_LEVEL, TileCoord};
use std::{fmt, str::FromStr};

/// A validated quadkey. Holds only the digits `0`..`3`, at most 31 of them.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuadKey(String);

impl QuadKey {
	/// Encodes a tile. Level 0 yields the empty key.
	pub fn from_tile(coord: &TileCoord) -> QuadKey {
		QuadKey(tile_to_quadkey(coord.x, coord.y, coord.level))
	}

	/// Decodes into the tile this key addresses.
	pub fn to_tile(&self) -> TileCoord {
		let (x, y, level) = decode_digits(&self.0);
		TileCoord { level, x, y }
	}

	pub fn level(&self) -> u8 {
		self.0.len() as u8
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl FromStr for QuadKey {
	type Err = Error;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		let invalid = |reason: String| Error::InvalidQuadKey {
			quadkey: text.to_string(),
			reason,
		};
		if text.len() > usize::from(MAX_LEVEL) {
			return Err(invalid(format!(
				"{} digits exceed the maximum level {MAX_LEVEL}",
				text.len()
			)));
		}
		if let Some((position, digit)) = text.char_indices().find(|(_, c)| !matches!(c, '0'..='3')) {
			return Err(invalid(format!("digit '{digit}' at position {position}")));
		}
		Ok(QuadKey(text.to_string()))
	}
}

impl fmt::Display for QuadKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl fmt::Debug for QuadKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "QuadKey({:?})", self.0)
	}
}

/// Interleaves the low `level` bits of `x` and `y` into base-4 digits, most significant first.
pub fn tile_to_quadkey(x: u32, y: u32, level: u8) -> String {
	(1..=level)
		.rev()
		.map(|i| {
			let mask = 1u32 << (i - 1);
			let mut digit = b'0';
			if x & mask != 0 {
				digit += 1;
			}
			if y & mask != 0 {
				digit += 2;
			}
			char::from(digit)
		})
		.collect()
}

/// Parses a quadkey string into `(x, y, level)`.
///
/// # Errors
/// Fails with [`Error::InvalidQuadKey`] on any digit outside `0..=3` or on more than 31 digits.
pub fn quadkey_to_tile(quadkey: &str) -> Result<(u32, u32, u8), Error> {
	let key: QuadKey = quadkey.parse()?;
	Ok(decode_digits(key.as_str()))
}

// digits are validated by QuadKey::from_str
fn decode_digits(digits: &str) -> (u32, u32, u8) {
	let level = digits.len() as u8;
	let (mut x, mut y) = (0u32, 0u32);
	for (digit, i) in digits.bytes().zip((1..=level).rev()) {
		let mask = 1u32 << (i - 1);
		match digit {
			b'1' => x |= mask,
			b'2' => y |= mask,
			b'3' => {
				x |= mask;
				y |= mask;
			}
			_ => {}
		}
	}
	(x, y, level)
}
