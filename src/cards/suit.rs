/// Card suit, numbered the way the wire carries it.
///
/// Suits never affect hand value; they only travel with the card.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    H = 0,
    D = 1,
    C = 2,
    S = 3,
}

impl Suit {
    /// All four suits in wire order.
    pub const fn all() -> [Suit; 4] {
        [Suit::H, Suit::D, Suit::C, Suit::S]
    }
    /// Unicode suit symbol for display.
    pub fn symbol(&self) -> char {
        match self {
            Suit::H => '♥',
            Suit::D => '♦',
            Suit::C => '♣',
            Suit::S => '♠',
        }
    }
    /// Whether the suit prints in red.
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::H | Suit::D)
    }
}

/// u8 isomorphism over 0..=3
impl TryFrom<u8> for Suit {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Suit::H),
            1 => Ok(Suit::D),
            2 => Ok(Suit::C),
            3 => Ok(Suit::S),
            _ => Err(format!("invalid suit u8: {}", n)),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "h" | "♥" => Ok(Suit::H),
            "d" | "♦" => Ok(Suit::D),
            "c" | "♣" => Ok(Suit::C),
            "s" | "♠" => Ok(Suit::S),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::H => write!(f, "h"),
            Suit::D => write!(f, "d"),
            Suit::C => write!(f, "c"),
            Suit::S => write!(f, "s"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for suit in Suit::all() {
            assert_eq!(Suit::try_from(u8::from(suit)), Ok(suit));
        }
        assert!(Suit::try_from(4u8).is_err());
    }

    #[test]
    fn wire_order() {
        assert_eq!(u8::from(Suit::H), 0);
        assert_eq!(u8::from(Suit::D), 1);
        assert_eq!(u8::from(Suit::C), 2);
        assert_eq!(u8::from(Suit::S), 3);
    }
}
