use crate::Config;
use crate::wire::Offer;
use crate::wire::Record;
use crate::wire::is_magic;
use socket2::Domain;
use socket2::Protocol;
use socket2::Socket;
use socket2::Type;
use std::net::Ipv4Addr;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;

/// Largest datagram read per receive. Anything longer than an offer is
/// still decoded by its leading bytes.
const DATAGRAM: usize = 1024;

/// Pause after a failed receive so a broken socket cannot spin.
const BACKOFF: Duration = Duration::from_millis(50);

/// Waits for one valid offer on the well-known discovery port.
///
/// The port is bound with address reuse so several players can listen
/// on one host. A fresh socket is bound per wait and dropped on return.
#[derive(Debug, Clone, Copy)]
pub struct Listener {
    port: u16,
    timeout: Duration,
}

impl Listener {
    pub fn new(config: &Config) -> Self {
        Self {
            port: config.udp_port,
            timeout: config.timeouts.offer,
        }
    }
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    /// The first offer that decodes, with the address it came from, or
    /// `None` once the timeout passes. Malformed datagrams are skipped.
    pub async fn wait(&self) -> anyhow::Result<Option<(SocketAddr, Offer)>> {
        let socket = self.socket()?;
        let deadline = Instant::now() + self.timeout;
        let mut buffer = [0u8; DATAGRAM];
        log::info!("[discovery] listening for offers on udp/{}", self.port);
        loop {
            match tokio::time::timeout_at(deadline, socket.recv_from(&mut buffer)).await {
                Err(_) => return Ok(None),
                Ok(Err(e)) => {
                    log::debug!("[discovery] receive failed: {}", e);
                    tokio::time::sleep_until(Self::retry_at(deadline)).await;
                }
                Ok(Ok((n, from))) if !is_magic(&buffer[..n]) => {
                    log::trace!("[discovery] foreign datagram from {}", from)
                }
                Ok(Ok((n, from))) => match Offer::decode(&buffer[..n]) {
                    Ok(offer) => return Ok(Some((from, offer))),
                    Err(e) => log::debug!("[discovery] ignoring datagram from {}: {}", from, e),
                },
            }
        }
    }

    /// A short pause after a failed receive, never past the deadline.
    fn retry_at(deadline: Instant) -> Instant {
        deadline.min(Instant::now() + BACKOFF)
    }

    fn socket(&self) -> anyhow::Result<UdpSocket> {
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
        socket.set_reuse_address(true)?;
        #[cfg(unix)]
        socket.set_reuse_port(true)?;
        socket.set_broadcast(true)?;
        socket.set_nonblocking(true)?;
        socket.bind(&SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port)).into())?;
        Ok(UdpSocket::from_std(socket.into())?)
    }
}
