use super::*;
use crate::cards::*;
use crate::net::*;
use crate::score::*;
use crate::wire::*;
use std::time::Duration;
use tokio::io::AsyncRead;
use tokio::io::AsyncWrite;
use tokio::net::TcpStream;

/// The player's side of one session on an open connection.
///
/// Strictly turn-taking: one decision goes out only after the card
/// answering the previous one has arrived. Every payload's result field
/// is checked, since any card can be the one that ends the round.
pub struct Table<'a, S = TcpStream> {
    conn: Connection<S>,
    player: &'a mut dyn Player,
    decision: Duration,
}

impl<'a, S> Table<'a, S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    /// `decision` bounds how long the player may think. When it runs out
    /// nothing is sent: the dealer has already stood for the player.
    pub fn new(conn: Connection<S>, player: &'a mut dyn Player, decision: Duration) -> Self {
        Self {
            conn,
            player,
            decision,
        }
    }

    /// Sends the request and plays every round it asks for. The connection
    /// is closed on return either way.
    pub async fn play(mut self, request: &Request) -> Report {
        let mut report = Report::new(request.name(), request.rounds());
        match self.conn.send(request).await {
            Err(e) => {
                log::warn!("[table] request not sent: {}", e);
                report.disconnected = true;
            }
            Ok(()) => {
                for n in 1..=request.rounds() {
                    match self.round().await {
                        Ok(outcome) => {
                            log::info!("[table] round {}/{}: {}", n, request.rounds(), outcome);
                            report.tally.record(outcome);
                            self.player.notify(&Event::Settled(outcome)).await;
                        }
                        Err(e) => {
                            log::warn!("[table] round {} abandoned: {}", n, e);
                            report.disconnected = true;
                            break;
                        }
                    }
                }
            }
        }
        self.conn.close().await;
        self.player.notify(&Event::Summary(report.clone())).await;
        report
    }

    /// One round from the deal to the payload that carries a result.
    pub async fn round(&mut self) -> Result<Outcome, Disconnect> {
        let mut hand = Hand::empty();
        let mut dealer = Hand::empty();
        for i in 0..3 {
            let payload = self.conn.recv::<Payload>().await?;
            match i {
                2 => self.reveal(&mut dealer, &payload).await,
                _ => self.take(&mut hand, &payload).await,
            }
            if let Some(outcome) = Self::settled(&payload) {
                return Ok(outcome);
            }
        }
        loop {
            let view = View::new(hand.clone(), dealer.get(0));
            let Some(decision) = self.think(&view).await else {
                break;
            };
            self.conn.send(&decision).await?;
            match decision {
                Decision::Stand => break,
                Decision::Hit => {
                    let payload = self.conn.recv::<Payload>().await?;
                    self.take(&mut hand, &payload).await;
                    if let Some(outcome) = Self::settled(&payload) {
                        return Ok(outcome);
                    }
                }
            }
        }
        loop {
            let payload = self.conn.recv::<Payload>().await?;
            self.reveal(&mut dealer, &payload).await;
            if let Some(outcome) = Self::settled(&payload) {
                log::debug!("[table] {} vs {}", hand, dealer);
                return Ok(outcome);
            }
        }
    }
}

impl<'a, S> Table<'a, S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    /// `None` once the window closes. A late answer would be read as the
    /// first decision of the next round, so it is dropped instead.
    async fn think(&mut self, view: &View) -> Option<Decision> {
        match tokio::time::timeout(self.decision, self.player.decide(view)).await {
            Ok(decision) => Some(decision),
            Err(_) => {
                log::warn!("[table] no decision in time, dealer stands for us");
                None
            }
        }
    }
    async fn take(&mut self, hand: &mut Hand, payload: &Payload) {
        if let Some(card) = payload.drawn() {
            hand.push(card);
            self.player.notify(&Event::Dealt(card)).await;
        }
    }
    async fn reveal(&mut self, dealer: &mut Hand, payload: &Payload) {
        if let Some(card) = payload.drawn() {
            dealer.push(card);
            self.player.notify(&Event::Dealer(card)).await;
        }
    }
    fn settled(payload: &Payload) -> Option<Outcome> {
        Outcome::try_from(payload.status()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use crate::Timeouts;
    use crate::dealer::Round;
    use crate::dealer::Session;
    use std::sync::Arc;
    use tokio::io::DuplexStream;
    use tokio::io::duplex;

    const SECOND: Duration = Duration::from_secs(1);

    fn config() -> Config {
        Config::default().with_timeouts(Timeouts {
            decision: Duration::from_millis(500),
            ..Timeouts::default()
        })
    }

    fn pipe() -> (Connection<DuplexStream>, Connection<DuplexStream>) {
        let (a, b) = duplex(1024);
        (Connection::new(a, SECOND), Connection::new(b, SECOND))
    }

    /// Remembers every event for inspection.
    #[derive(Default)]
    struct Scribe {
        limit: crate::Points,
        events: Vec<Event>,
    }

    #[async_trait::async_trait]
    impl Player for Scribe {
        async fn decide(&mut self, view: &View) -> Decision {
            match view.points() < self.limit {
                true => Decision::Hit,
                false => Decision::Stand,
            }
        }
        async fn notify(&mut self, event: &Event) {
            self.events.push(event.clone());
        }
    }

    fn stacked(cards: &str) -> Deck {
        Deck::stacked(Hand::try_from(cards).unwrap().cards().iter().copied())
    }

    #[tokio::test]
    async fn follows_dealer_through_a_round() {
        let (mut house, seat) = pipe();
        let dealer = tokio::spawn(async move {
            let mut round = Round::with_deck(stacked("5h 6d Tc 6s 9h Kd"), &config());
            round.play(&mut house).await
        });
        let mut scribe = Scribe {
            limit: 17,
            ..Scribe::default()
        };
        let mut table = Table::new(seat, &mut scribe, SECOND);
        let outcome = table.round().await.unwrap();
        drop(table);
        assert_eq!(outcome, Outcome::Win);
        assert_eq!(dealer.await.unwrap().unwrap(), Outcome::Win);
        let dealt = scribe
            .events
            .iter()
            .filter(|e| matches!(e, Event::Dealt(_)))
            .count();
        let shown = scribe
            .events
            .iter()
            .filter(|e| matches!(e, Event::Dealer(_)))
            .count();
        assert_eq!(dealt, 3);
        assert_eq!(shown, 3);
    }

    #[tokio::test]
    async fn bust_ends_round_on_the_card() {
        let (mut house, seat) = pipe();
        let dealer = tokio::spawn(async move {
            let mut round = Round::with_deck(stacked("Th 6d Tc 9s Kh"), &config());
            round.play(&mut house).await
        });
        let mut scribe = Scribe {
            limit: 17,
            ..Scribe::default()
        };
        let mut table = Table::new(seat, &mut scribe, SECOND);
        assert_eq!(table.round().await.unwrap(), Outcome::Loss);
        assert_eq!(dealer.await.unwrap().unwrap(), Outcome::Loss);
    }

    #[tokio::test]
    async fn plays_whole_session() {
        let (house, seat) = pipe();
        let ledger = Arc::new(crate::score::Ledger::default());
        let dealer = tokio::spawn(Session::new(1, house, config(), ledger.clone()).run());
        let mut scribe = Scribe {
            limit: 15,
            ..Scribe::default()
        };
        let request = Request::new(4, "Scribe").unwrap();
        let report = Table::new(seat, &mut scribe, SECOND).play(&request).await;
        let served = dealer.await.unwrap();
        assert!(report.is_complete());
        assert_eq!(report.tally, served.tally);
        assert_eq!(ledger.snapshot(), report.tally);
        assert!(matches!(scribe.events.last(), Some(Event::Summary(r)) if r == &report));
        let settled = scribe
            .events
            .iter()
            .filter(|e| matches!(e, Event::Settled(_)))
            .count();
        assert_eq!(settled, 4);
    }

    /// Sleeps through its first decision, then hits once per round.
    #[derive(Default)]
    struct Sleeper {
        calls: usize,
    }

    #[async_trait::async_trait]
    impl Player for Sleeper {
        async fn decide(&mut self, _: &View) -> Decision {
            self.calls += 1;
            match self.calls {
                1 => {
                    tokio::time::sleep(SECOND).await;
                    Decision::Hit
                }
                2 => Decision::Hit,
                _ => Decision::Stand,
            }
        }
        async fn notify(&mut self, _: &Event) {}
    }

    #[tokio::test]
    async fn missed_window_stays_in_step() {
        let (mut house, seat) = pipe();
        let dealer = tokio::spawn(async move {
            let window = Config::default().with_timeouts(Timeouts {
                decision: Duration::from_millis(100),
                ..Timeouts::default()
            });
            let mut first = Round::with_deck(stacked("Th 8d 9c 9s"), &window);
            let first = first.play(&mut house).await.map(|_| first.player().size());
            let mut second = Round::with_deck(stacked("2h 3d Tc 7s 4h"), &window);
            let second = second.play(&mut house).await.map(|_| second.player().size());
            (first, second)
        });
        let mut sleeper = Sleeper::default();
        let mut table = Table::new(seat, &mut sleeper, Duration::from_millis(130));
        assert_eq!(table.round().await.unwrap(), Outcome::Tie);
        assert_eq!(table.round().await.unwrap(), Outcome::Loss);
        drop(table);
        let (first, second) = dealer.await.unwrap();
        assert_eq!(first.unwrap(), 2);
        assert_eq!(second.unwrap(), 3);
        assert_eq!(sleeper.calls, 3);
    }

    #[tokio::test]
    async fn dealer_hangup_is_disconnect() {
        let (house, seat) = pipe();
        drop(house);
        let mut scribe = Scribe::default();
        let request = Request::new(3, "Lonely").unwrap();
        let report = Table::new(seat, &mut scribe, SECOND).play(&request).await;
        assert!(report.disconnected);
        assert_eq!(report.tally.played(), 0);
    }
}
