use crate::cards::Card;
use crate::score::Outcome;
use crate::score::Report;

/// What a player learns as a session unfolds.
#[derive(Clone, Debug)]
pub enum Event {
    /// A card added to this player's hand.
    Dealt(Card),
    /// A dealer card: the upcard, the revealed hole card, or a draw.
    Dealer(Card),
    /// The round ended.
    Settled(Outcome),
    /// The session ended, fully played or not.
    Summary(Report),
}
