use super::*;
use crate::Config;
use crate::wire::Offer;
use crate::wire::Record;
use bytes::Bytes;
use socket2::Domain;
use socket2::Protocol;
use socket2::Socket;
use socket2::Type;
use std::net::Ipv4Addr;
use std::net::SocketAddr;
use std::net::SocketAddrV4;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

/// Background task repeating one pre-encoded offer until stopped.
///
/// Delivery is best effort: a failed send is logged and the next tick
/// tries again.
#[derive(Debug)]
pub struct Broadcaster {
    handle: JoinHandle<()>,
}

impl Broadcaster {
    /// Opens a broadcast-enabled socket and starts the loop.
    /// Must be called from within a tokio runtime.
    pub fn spawn(config: &Config, offer: &Offer, shutdown: Shutdown) -> anyhow::Result<Self> {
        let socket = Self::socket()?;
        let targets = Self::targets(config);
        let message = offer.encode();
        let interval = config.timeouts.interval;
        log::info!(
            "[broadcast] offering port {} as {:?} to {:?}",
            offer.port(),
            offer.name(),
            targets
        );
        let handle = tokio::spawn(Self::run(socket, message, targets, interval, shutdown));
        Ok(Self { handle })
    }

    pub fn targets(config: &Config) -> Vec<SocketAddr> {
        let mut targets = vec![config.broadcast];
        if config.broadcast == Ipv4Addr::BROADCAST {
            if let Some(subnet) = local_ip().map(subnet_broadcast) {
                if !targets.contains(&subnet) {
                    targets.push(subnet);
                }
            }
        }
        targets
            .into_iter()
            .map(|ip| SocketAddr::V4(SocketAddrV4::new(ip, config.udp_port)))
            .collect()
    }

    pub fn stop(&self) {
        self.handle.abort();
    }

    fn socket() -> anyhow::Result<UdpSocket> {
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
        socket.set_broadcast(true)?;
        socket.set_reuse_address(true)?;
        #[cfg(unix)]
        socket.set_reuse_port(true)?;
        socket.set_nonblocking(true)?;
        socket.bind(&SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)).into())?;
        Ok(UdpSocket::from_std(socket.into())?)
    }

    async fn run(
        socket: UdpSocket,
        message: Bytes,
        targets: Vec<SocketAddr>,
        interval: Duration,
        shutdown: Shutdown,
    ) {
        while !shutdown.is_triggered() {
            for target in targets.iter() {
                match socket.send_to(&message, target).await {
                    Ok(_) => log::trace!("[broadcast] offer sent to {}", target),
                    Err(e) => log::warn!("[broadcast] send to {} failed: {}", target, e),
                }
            }
            tokio::time::sleep(interval).await;
        }
        log::info!("[broadcast] stopped");
    }
}

impl Drop for Broadcaster {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
