//! Player side of the table.
//!
//! - [`Player`] — Pluggable hit/stand decision source
//! - [`View`] — The player's hand and the dealer's upcard at a decision
//! - [`Event`] — Cards, round results, and session summaries
//! - [`Threshold`], [`Fish`] — Automatic players
//! - `Human` — Terminal prompt (with the `server` feature)
//! - [`Table`] — Player-side session over one connection
//! - [`Client`] — Discovery, connect, play, repeat
mod client;
mod event;
mod fish;
#[cfg(feature = "server")]
mod human;
#[allow(clippy::module_inception)]
mod player;
mod table;
mod threshold;
mod view;

pub use client::*;
pub use event::*;
pub use fish::*;
#[cfg(feature = "server")]
pub use human::*;
pub use player::*;
pub use table::*;
pub use threshold::*;
pub use view::*;
