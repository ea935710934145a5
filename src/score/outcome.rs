use crate::wire::Status;

/// How a finished round went, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    /// Compares final totals of two hands that both stood.
    pub fn compare(player: crate::Points, dealer: crate::Points) -> Self {
        match player.cmp(&dealer) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

impl From<Outcome> for Status {
    fn from(o: Outcome) -> Status {
        match o {
            Outcome::Win => Status::Win,
            Outcome::Loss => Status::Loss,
            Outcome::Tie => Status::Tie,
        }
    }
}

/// Fails on [`Status::NotOver`].
impl TryFrom<Status> for Outcome {
    type Error = Status;
    fn try_from(s: Status) -> Result<Self, Self::Error> {
        match s {
            Status::Win => Ok(Outcome::Win),
            Status::Loss => Ok(Outcome::Loss),
            Status::Tie => Ok(Outcome::Tie),
            Status::NotOver => Err(s),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Loss => write!(f, "loss"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_is_symmetric_in_ties() {
        assert_eq!(Outcome::compare(21, 20), Outcome::Win);
        assert_eq!(Outcome::compare(18, 19), Outcome::Loss);
        assert_eq!(Outcome::compare(20, 20), Outcome::Tie);
    }

    #[test]
    fn status_mapping() {
        for outcome in [Outcome::Win, Outcome::Loss, Outcome::Tie] {
            assert_eq!(Outcome::try_from(Status::from(outcome)), Ok(outcome));
        }
        assert!(Outcome::try_from(Status::NotOver).is_err());
    }
}
