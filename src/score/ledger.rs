use super::*;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Process-wide totals shared by every connection task.
///
/// Each counter is an atomic increment, so concurrent sessions never lose
/// updates. Outcomes are stored from the player's side, like [`Tally`].
#[derive(Debug, Default)]
pub struct Ledger {
    wins: AtomicU64,
    losses: AtomicU64,
    ties: AtomicU64,
    disconnects: AtomicU64,
    sessions: AtomicU64,
}

impl Ledger {
    pub fn record(&self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins.fetch_add(1, Ordering::Relaxed),
            Outcome::Loss => self.losses.fetch_add(1, Ordering::Relaxed),
            Outcome::Tie => self.ties.fetch_add(1, Ordering::Relaxed),
        };
    }
    /// A session cut short by a transport fault or malformed message.
    pub fn disconnect(&self) {
        self.disconnects.fetch_add(1, Ordering::Relaxed);
    }
    /// Returns the new session's sequence number, starting at 1.
    pub fn open(&self) -> u64 {
        self.sessions.fetch_add(1, Ordering::Relaxed) + 1
    }
    pub fn snapshot(&self) -> Tally {
        Tally {
            wins: self.wins.load(Ordering::Relaxed),
            losses: self.losses.load(Ordering::Relaxed),
            ties: self.ties.load(Ordering::Relaxed),
        }
    }
    pub fn disconnects(&self) -> u64 {
        self.disconnects.load(Ordering::Relaxed)
    }
    pub fn sessions(&self) -> u64 {
        self.sessions.load(Ordering::Relaxed)
    }
}

impl std::fmt::Display for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let tally = self.snapshot();
        write!(
            f,
            "{} games | dealer wins {} | player wins {} | ties {} | disconnects {}",
            tally.played(),
            tally.losses,
            tally.wins,
            tally.ties,
            self.disconnects()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn concurrent_records_are_not_lost() {
        let ledger = Arc::new(Ledger::default());
        let threads = (0..8)
            .map(|_| {
                let ledger = ledger.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        ledger.record(Outcome::Win);
                        ledger.record(Outcome::Tie);
                    }
                })
            })
            .collect::<Vec<_>>();
        threads.into_iter().for_each(|t| t.join().unwrap());
        let tally = ledger.snapshot();
        assert_eq!(tally.wins, 8000);
        assert_eq!(tally.ties, 8000);
        assert_eq!(tally.losses, 0);
    }

    #[test]
    fn sessions_number_from_one() {
        let ledger = Ledger::default();
        assert_eq!(ledger.open(), 1);
        assert_eq!(ledger.open(), 2);
        assert_eq!(ledger.sessions(), 2);
    }
}
