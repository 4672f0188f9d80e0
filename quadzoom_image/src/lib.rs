//! Image side of the quadzoom workspace: decoding fetched tiles and telling
//! real imagery apart from the provider's "no imagery" placeholder.

mod compare;
pub use compare::*;

mod decode;
pub use decode::*;

mod placeholder;
pub use placeholder::*;

mod placeholder_oracle;
pub use placeholder_oracle::*;

#[cfg(test)]
mod test_utils;
