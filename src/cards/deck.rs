use super::card::Card;
use rand::seq::SliceRandom;

/// A shuffled 52-card deck that never runs dry.
///
/// When the last card is gone, the next draw first refills the deck with all
/// 52 cards and reshuffles. Drawing order is last-to-first in the backing vec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a freshly shuffled 52-card deck.
    pub fn new() -> Self {
        let mut deck = Self(Vec::with_capacity(52));
        deck.refill();
        deck
    }
    /// A deck whose first draws follow the given order exactly.
    /// Once exhausted it refills and shuffles like any other deck.
    pub fn stacked<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards = cards.into_iter().collect::<Vec<_>>();
        cards.reverse();
        Self(cards)
    }
    /// Replaces the contents with all 52 cards in random order.
    pub fn refill(&mut self) {
        self.0.clear();
        self.0.extend(Card::all());
        self.0.shuffle(&mut rand::rng());
    }
    /// Removes and returns the top card, refilling first if empty.
    pub fn draw(&mut self) -> Card {
        if self.0.is_empty() {
            log::debug!("[deck] exhausted, refilling");
            self.refill();
        }
        match self.0.pop() {
            Some(card) => card,
            None => unreachable!("refilled deck holds 52 cards"),
        }
    }
    /// Cards left before the next refill.
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.draw())
    }
}
