use super::card::Card;
use crate::Points;

/// An ordered sequence of cards held by one side for one round.
///
/// The total is always recomputed from the full sequence; nothing is cached.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    /// Sum of fixed card values.
    pub fn points(&self) -> Points {
        self.0.iter().map(Card::points).sum()
    }
    /// Strictly above the bust threshold.
    pub fn is_bust(&self, bust: Points) -> bool {
        self.points() > bust
    }
    /// The card at position `i` in deal order.
    pub fn get(&self, i: usize) -> Option<Card> {
        self.0.get(i).copied()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// str isomorphism, whitespace separated
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace().map(Card::try_from).collect()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .0
            .iter()
            .map(|c| format!("[{}]", c))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{} ({})", cards, self.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_fixed_values() {
        assert_eq!(Hand::try_from("Ah Kd").unwrap().points(), 21);
        assert_eq!(Hand::try_from("7c 8s 5h").unwrap().points(), 20);
        assert_eq!(Hand::try_from("Ah As").unwrap().points(), 22);
    }

    #[test]
    fn value_follows_every_push() {
        let mut hand = Hand::try_from("Th 9d").unwrap();
        assert_eq!(hand.points(), 19);
        assert!(!hand.is_bust(21));
        hand.push(Card::try_from("Kc").unwrap());
        assert_eq!(hand.points(), 29);
        assert!(hand.is_bust(21));
        assert_eq!(hand.size(), 3);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(Hand::empty().points(), 0);
    }

    #[test]
    fn displays_cards_and_total() {
        assert_eq!(Hand::try_from("Ah Kd").unwrap().to_string(), "[Ah] [Kd] (21)");
    }
}
