use super::*;

/// Summary of one finished session, written the same way on both sides.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// Team name the player sent, or the name it played as.
    pub name: String,
    /// Rounds asked for in the request; 0 if no valid request arrived.
    pub requested: u8,
    pub tally: Tally,
    /// True when a transport fault ended the session before every
    /// requested round was played.
    pub disconnected: bool,
}

impl Report {
    pub fn new(name: &str, requested: u8) -> Self {
        Self {
            name: name.to_string(),
            requested,
            ..Self::default()
        }
    }
    pub fn is_complete(&self) -> bool {
        !self.disconnected && self.tally.played() == self.requested as u64
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?} {}/{} | {}", self.name, self.tally.played(), self.requested, self.tally)?;
        if self.disconnected {
            write!(f, " | disconnected")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_when_every_round_played() {
        let mut report = Report::new("Team", 2);
        report.tally.record(Outcome::Win);
        assert!(!report.is_complete());
        report.tally.record(Outcome::Tie);
        assert!(report.is_complete());
    }

    #[test]
    fn disconnect_is_never_complete() {
        let report = Report {
            disconnected: true,
            ..Report::new("Team", 0)
        };
        assert!(!report.is_complete());
        assert!(report.to_string().ends_with("disconnected"));
    }
}
