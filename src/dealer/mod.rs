//! Dealer side of the table.
//!
//! - [`Round`] — Deals one round over a connection and resolves it
//! - [`Session`] — One player's request and the rounds it asked for
//! - [`House`] — Discovery broadcast plus the accept loop spawning sessions
mod house;
mod round;
mod session;

pub use house::*;
pub use round::*;
pub use session::*;
