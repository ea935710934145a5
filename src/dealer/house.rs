use super::*;
use crate::Config;
use crate::net::*;
use crate::score::*;
use crate::wire::Offer;
use std::net::Ipv4Addr;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::net::TcpSocket;
use tokio::task::JoinSet;

/// The dealer process: advertises itself, accepts players, and hands each
/// one to its own session task.
///
/// The accept loop wakes at least once per accept timeout to check the
/// shutdown flag, so stopping never waits on a new client.
#[derive(Debug)]
pub struct House {
    name: String,
    config: Config,
    ledger: Arc<Ledger>,
    shutdown: Shutdown,
}

impl House {
    pub fn new(name: &str, config: Config, shutdown: Shutdown) -> Self {
        Self {
            name: name.to_string(),
            config,
            ledger: Arc::new(Ledger::default()),
            shutdown,
        }
    }
    pub fn ledger(&self) -> Arc<Ledger> {
        self.ledger.clone()
    }

    /// Binds the configured TCP port (0 for any) with address reuse.
    pub fn bind(&self) -> anyhow::Result<TcpListener> {
        let socket = TcpSocket::new_v4()?;
        socket.set_reuseaddr(true)?;
        socket.bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.config.tcp_port)))?;
        Ok(socket.listen(1024)?)
    }

    /// Binds, starts broadcasting, and serves until shutdown.
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = self.bind()?;
        self.serve(listener).await
    }

    /// Serves an already bound listener until shutdown. The offer carries
    /// the port the listener actually got.
    pub async fn serve(self, listener: TcpListener) -> anyhow::Result<()> {
        let port = listener.local_addr()?.port();
        let offer = Offer::new(port, &self.name);
        let broadcaster = Broadcaster::spawn(&self.config, &offer, self.shutdown.clone())?;
        match local_ip() {
            Some(ip) => log::info!("[house] {:?} dealing on {}:{}", self.name, ip, port),
            None => log::info!("[house] {:?} dealing on port {}", self.name, port),
        }
        let mut sessions = JoinSet::new();
        while !self.shutdown.is_triggered() {
            while let Some(done) = sessions.try_join_next() {
                if let Err(e) = done {
                    log::error!("[house] session task failed: {}", e);
                }
            }
            match tokio::time::timeout(self.config.timeouts.accept, listener.accept()).await {
                Err(_) => continue,
                Ok(Err(e)) => log::warn!("[house] accept failed: {}", e),
                Ok(Ok((stream, peer))) => {
                    let id = self.ledger.open();
                    log::info!("[house] session {} opened for {}", id, peer);
                    let conn = Connection::new(stream, self.config.timeouts.stream);
                    let session = Session::new(id, conn, self.config, self.ledger.clone());
                    sessions.spawn(session.run());
                }
            }
        }
        broadcaster.stop();
        if !sessions.is_empty() {
            log::warn!("[house] abandoning {} open session(s)", sessions.len());
            sessions.abort_all();
        }
        log::info!("[house] closing | {}", self.ledger);
        Ok(())
    }
}
