/// Round result carried by every server payload, from the player's side.
///
/// Anything but [`Status::NotOver`] ends the round, whether or not the same
/// payload also delivers a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    NotOver = 0,
    Tie = 1,
    Loss = 2,
    Win = 3,
}

impl Status {
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::NotOver)
    }
}

impl TryFrom<u8> for Status {
    type Error = u8;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Status::NotOver),
            1 => Ok(Status::Tie),
            2 => Ok(Status::Loss),
            3 => Ok(Status::Win),
            n => Err(n),
        }
    }
}
impl From<Status> for u8 {
    fn from(s: Status) -> u8 {
        s as u8
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Status::NotOver => write!(f, "not over"),
            Status::Tie => write!(f, "tie"),
            Status::Loss => write!(f, "loss"),
            Status::Win => write!(f, "win"),
        }
    }
}
