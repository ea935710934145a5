use std::net::IpAddr;
use std::net::Ipv4Addr;
use std::net::UdpSocket;

/// Primary outbound IPv4 address of this host.
///
/// Connecting a UDP socket sends nothing; it only makes the OS pick the
/// interface that routes to a public address.
pub fn local_ip() -> Option<Ipv4Addr> {
    UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))
        .and_then(|socket| socket.connect((Ipv4Addr::new(8, 8, 8, 8), 80)).map(|_| socket))
        .and_then(|socket| socket.local_addr())
        .ok()
        .and_then(|addr| match addr.ip() {
            IpAddr::V4(ip) if !ip.is_unspecified() => Some(ip),
            _ => None,
        })
}

/// Broadcast address of the /24 network containing `ip`.
pub fn subnet_broadcast(ip: Ipv4Addr) -> Ipv4Addr {
    let [a, b, c, _] = ip.octets();
    Ipv4Addr::new(a, b, c, 255)
}
