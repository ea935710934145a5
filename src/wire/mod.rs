//! Fixed-length binary records exchanged between dealer and player.
//!
//! Every record is big-endian, starts with [`MAGIC`] and a [`Kind`] tag, and
//! has a compile-time size; there are no length prefixes.
//!
//! | Record | Size |
//! |---|---|
//! | [`Offer`] | 39 |
//! | [`Request`] | 38 |
//! | [`Payload`] | 9 |
//! | [`Decision`] | 10 |
//!
//! Decoding never yields a partially filled record: any mismatch produces a
//! [`WireError`]. Values that cannot be encoded are refused at construction
//! with an [`ArgumentError`].
mod decision;
mod error;
mod name;
mod offer;
mod payload;
mod record;
mod request;
mod status;

pub use decision::*;
pub use error::*;
pub use name::*;
pub use offer::*;
pub use payload::*;
pub use record::*;
pub use request::*;
pub use status::*;
