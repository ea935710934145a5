use super::*;

/// Round counts owned by a single session's control flow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn played(&self) -> u64 {
        self.wins + self.losses + self.ties
    }
    /// Percentage of rounds won, 0 when nothing was played.
    pub fn win_rate(&self) -> f32 {
        match self.played() {
            0 => 0.0,
            n => self.wins as f32 / n as f32 * 100.0,
        }
    }
    /// Sums another tally into this one.
    pub fn absorb(&mut self, other: &Tally) {
        self.wins += other.wins;
        self.losses += other.losses;
        self.ties += other.ties;
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} rounds | W:{} L:{} T:{} | win rate {:.1}%",
            self.played(),
            self.wins,
            self.losses,
            self.ties,
            self.win_rate()
        )
    }
}
