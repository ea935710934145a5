use super::rank::Rank;
use super::suit::Suit;
use crate::Points;

/// A playing card. Immutable once drawn.
///
/// Cards can be parsed from short strings like `"Ah"` (ace of hearts),
/// `"Td"` or `"10d"` (ten of diamonds).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// Blackjack value, a pure function of rank.
    pub fn points(&self) -> Points {
        self.rank.points()
    }
    /// All 52 (rank, suit) combinations, suit-major.
    pub fn all() -> impl Iterator<Item = Card> {
        Suit::all()
            .into_iter()
            .flat_map(|suit| Rank::all().into_iter().map(move |rank| Card { rank, suit }))
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(c: Card) -> Self {
        (c.rank, c.suit)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((i, _)) if i > 0 => Ok(Self::from((
                Rank::try_from(&s[..i])?,
                Suit::try_from(&s[i..])?,
            ))),
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_form() {
        let card = Card::try_from("Ah").unwrap();
        assert_eq!(card.rank(), Rank::Ace);
        assert_eq!(card.suit(), Suit::H);
        assert_eq!(Card::try_from("10s").unwrap().rank(), Rank::Ten);
        assert!(Card::try_from("Z").is_err());
        assert!(Card::try_from("Ax").is_err());
    }

    #[test]
    fn displays_round_trip() {
        for card in Card::all() {
            assert_eq!(Card::try_from(card.to_string().as_str()), Ok(card));
        }
    }

    #[test]
    fn full_set_is_distinct() {
        let all = Card::all().collect::<std::collections::HashSet<_>>();
        assert_eq!(all.len(), 52);
    }
}
