use super::*;
use crate::Config;
use crate::net::*;
use crate::score::*;
use crate::wire::Request;
use std::sync::Arc;
use tokio::io::AsyncRead;
use tokio::io::AsyncWrite;
use tokio::net::TcpStream;

/// One accepted player, served start to finish by a single task.
///
/// Reads exactly one request, deals that many rounds in sequence, and
/// closes the connection. Nothing here is shared with other sessions
/// except the ledger.
#[derive(Debug)]
pub struct Session<S = TcpStream> {
    id: u64,
    conn: Connection<S>,
    config: Config,
    ledger: Arc<Ledger>,
}

impl<S> Session<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(id: u64, conn: Connection<S>, config: Config, ledger: Arc<Ledger>) -> Self {
        Self {
            id,
            conn,
            config,
            ledger,
        }
    }

    /// Plays the whole session. Faults end it early but never escape it.
    pub async fn run(mut self) -> Report {
        let report = self.serve().await;
        self.conn.close().await;
        match report.disconnected {
            true => log::warn!("[session {}] ended early: {}", self.id, report),
            false => log::info!("[session {}] complete: {}", self.id, report),
        }
        report
    }

    async fn serve(&mut self) -> Report {
        let request = match self.conn.recv::<Request>().await {
            Ok(request) => request,
            Err(e) => {
                log::warn!("[session {}] no valid request: {}", self.id, e);
                self.ledger.disconnect();
                return Report {
                    disconnected: true,
                    ..Report::default()
                };
            }
        };
        let mut report = Report::new(request.name(), request.rounds());
        log::info!(
            "[session {}] {:?} wants {} round(s)",
            self.id,
            request.name(),
            request.rounds()
        );
        for n in 1..=request.rounds() {
            match Round::new(&self.config).play(&mut self.conn).await {
                Ok(outcome) => {
                    log::info!(
                        "[session {}] round {}/{}: player {}",
                        self.id,
                        n,
                        request.rounds(),
                        outcome
                    );
                    report.tally.record(outcome);
                    self.ledger.record(outcome);
                }
                Err(e) => {
                    log::warn!("[session {}] round {} abandoned: {}", self.id, n, e);
                    report.disconnected = true;
                    self.ledger.disconnect();
                    break;
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Timeouts;
    use crate::wire::*;
    use std::time::Duration;
    use tokio::io::DuplexStream;
    use tokio::io::duplex;

    const SECOND: Duration = Duration::from_secs(1);

    fn config() -> Config {
        Config::default().with_timeouts(Timeouts {
            decision: Duration::from_millis(200),
            ..Timeouts::default()
        })
    }

    fn open(ledger: &Arc<Ledger>) -> (Session<DuplexStream>, Connection<DuplexStream>) {
        let (a, b) = duplex(1024);
        let session = Session::new(
            ledger.open(),
            Connection::new(a, SECOND),
            config(),
            ledger.clone(),
        );
        (session, Connection::new(b, SECOND))
    }

    /// Stands on every hand and reads until the round resolves.
    async fn stand_round(conn: &mut Connection<DuplexStream>) -> Result<Outcome, Disconnect> {
        for _ in 0..3 {
            conn.recv::<Payload>().await?;
        }
        conn.send(&Decision::Stand).await?;
        loop {
            let payload = conn.recv::<Payload>().await?;
            if let Ok(outcome) = Outcome::try_from(payload.status()) {
                return Ok(outcome);
            }
        }
    }

    #[tokio::test]
    async fn plays_requested_rounds() {
        let ledger = Arc::new(Ledger::default());
        let (session, mut player) = open(&ledger);
        let dealer = tokio::spawn(session.run());
        player.send(&Request::new(3, "Stander").unwrap()).await.unwrap();
        let mut tally = Tally::default();
        for _ in 0..3 {
            tally.record(stand_round(&mut player).await.unwrap());
        }
        let report = dealer.await.unwrap();
        assert_eq!(report.name, "Stander");
        assert_eq!(report.requested, 3);
        assert_eq!(report.tally, tally);
        assert!(report.is_complete());
        assert_eq!(ledger.snapshot(), tally);
        assert!(matches!(player.recv::<Payload>().await, Err(Disconnect::Closed)));
    }

    #[tokio::test]
    async fn garbage_request_aborts() {
        let ledger = Arc::new(Ledger::default());
        let (session, mut player) = open(&ledger);
        let dealer = tokio::spawn(session.run());
        player.send_all(&[0xFFu8; 38]).await.unwrap();
        let report = dealer.await.unwrap();
        assert!(report.disconnected);
        assert_eq!(report.tally.played(), 0);
        assert_eq!(ledger.disconnects(), 1);
    }

    #[tokio::test]
    async fn disconnect_is_isolated() {
        let ledger = Arc::new(Ledger::default());
        let (doomed, mut quitter) = open(&ledger);
        let (steady, mut stayer) = open(&ledger);
        let doomed = tokio::spawn(doomed.run());
        let steady = tokio::spawn(steady.run());
        quitter.send(&Request::new(5, "Quitter").unwrap()).await.unwrap();
        stayer.send(&Request::new(2, "Stayer").unwrap()).await.unwrap();
        for _ in 0..3 {
            quitter.recv::<Payload>().await.unwrap();
        }
        quitter.close().await;
        drop(quitter);
        let first = stand_round(&mut stayer).await.unwrap();
        let second = stand_round(&mut stayer).await.unwrap();
        let doomed = doomed.await.unwrap();
        let steady = steady.await.unwrap();
        assert!(doomed.disconnected);
        assert_eq!(doomed.tally.played(), 0);
        assert!(steady.is_complete());
        let mut expected = Tally::default();
        expected.record(first);
        expected.record(second);
        assert_eq!(steady.tally, expected);
        assert_eq!(ledger.disconnects(), 1);
        assert_eq!(ledger.sessions(), 2);
    }

    #[tokio::test]
    async fn eof_before_request_aborts() {
        let ledger = Arc::new(Ledger::default());
        let (session, mut player) = open(&ledger);
        let dealer = tokio::spawn(session.run());
        player.send_all(b"short").await.unwrap();
        player.close().await;
        let report = dealer.await.unwrap();
        assert!(report.disconnected);
        assert_eq!(report.requested, 0);
    }

    #[tokio::test]
    async fn hung_up_player_stops_session() {
        let ledger = Arc::new(Ledger::default());
        let (session, mut player) = open(&ledger);
        let dealer = tokio::spawn(session.run());
        player.send(&Request::new(4, "Ghost").unwrap()).await.unwrap();
        drop(player);
        let report = dealer.await.unwrap();
        assert!(report.disconnected);
        assert_eq!(report.requested, 4);
        assert!(!report.is_complete());
    }
}
