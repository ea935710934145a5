//! Cards, hands, and the refilling deck.
//!
//! - [`Card`] — A `(Rank, Suit)` pair; value depends on rank alone
//! - [`Hand`] — Ordered cards whose total is always recomputed
//! - [`Deck`] — Shuffled 52 cards, refilled and reshuffled when empty
mod card;
mod deck;
mod hand;
mod rank;
mod suit;

pub use card::*;
pub use deck::*;
pub use hand::*;
pub use rank::*;
pub use suit::*;
