use super::*;
use crate::Config;
use crate::net::*;
use crate::score::*;
use crate::wire::Request;
use std::net::SocketAddr;

/// The player process: find a dealer, play a session, repeat.
///
/// Discovery timeouts, refused connections and dropped sessions are all
/// retried from the top until shutdown. Totals carry across sessions.
pub struct Client {
    config: Config,
    request: Request,
    player: Box<dyn Player>,
    shutdown: Shutdown,
    lifetime: Tally,
    sessions: u64,
}

impl Client {
    pub fn new(config: Config, request: Request, player: Box<dyn Player>, shutdown: Shutdown) -> Self {
        Self {
            config,
            request,
            player,
            shutdown,
            lifetime: Tally::default(),
            sessions: 0,
        }
    }
    pub fn lifetime(&self) -> Tally {
        self.lifetime
    }
    pub fn sessions(&self) -> u64 {
        self.sessions
    }

    /// Plays sessions until shutdown and returns the lifetime totals.
    pub async fn run(mut self) -> anyhow::Result<Tally> {
        while !self.shutdown.is_triggered() {
            self.once().await?;
        }
        log::info!(
            "[client] leaving after {} session(s) | {}",
            self.sessions,
            self.lifetime
        );
        Ok(self.lifetime)
    }

    /// One discovery wait and, if a dealer answered, one session.
    /// `Ok(None)` means nothing was played this time around.
    pub async fn once(&mut self) -> anyhow::Result<Option<Report>> {
        let Some((from, offer)) = Listener::new(&self.config).wait().await? else {
            log::info!("[client] no offers yet, still listening");
            return Ok(None);
        };
        let addr = SocketAddr::new(from.ip(), offer.port());
        log::info!("[client] offer from {:?} at {}", offer.name(), addr);
        let conn = match Connection::connect(addr, self.config.timeouts.connect).await {
            Ok(conn) => conn.with_timeout(self.config.timeouts.stream),
            Err(e) => {
                log::warn!("[client] {}", e);
                return Ok(None);
            }
        };
        let report = Table::new(conn, self.player.as_mut(), self.config.timeouts.decision)
            .play(&self.request)
            .await;
        self.sessions += 1;
        self.lifetime.absorb(&report.tally);
        log::info!("[client] session with {:?}: {}", offer.name(), report);
        log::info!("[client] lifetime: {}", self.lifetime);
        Ok(Some(report))
    }
}
