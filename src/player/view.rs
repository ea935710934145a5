use crate::Points;
use crate::cards::*;

/// The table as seen from the player's seat at a decision point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    hand: Hand,
    upcard: Option<Card>,
}

impl View {
    pub fn new(hand: Hand, upcard: Option<Card>) -> Self {
        Self { hand, upcard }
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn points(&self) -> Points {
        self.hand.points()
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.upcard {
            Some(card) => write!(f, "{} vs [{}]", self.hand, card),
            None => write!(f, "{}", self.hand),
        }
    }
}
