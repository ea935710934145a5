use super::*;
use std::net::Ipv4Addr;
use std::time::Duration;

/// Table rules the dealer enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Dealer stops drawing at or above this total.
    pub stand: Points,
    /// Totals strictly above this bust.
    pub bust: Points,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            stand: STAND_THRESHOLD,
            bust: BUST_THRESHOLD,
        }
    }
}

/// Every bounded wait in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// How long a player listens for an offer before giving up.
    pub offer: Duration,
    /// Gap between consecutive offer broadcasts.
    pub interval: Duration,
    /// Reads on an established stream outside the decision window.
    pub stream: Duration,
    /// Human think-time allowed for each hit/stand decision.
    pub decision: Duration,
    /// Accept poll period, i.e. how quickly the accept loop notices shutdown.
    pub accept: Duration,
    /// Outbound connection establishment.
    pub connect: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            offer: Duration::from_secs(10),
            interval: Duration::from_secs(1),
            stream: Duration::from_secs(30),
            decision: Duration::from_secs(60),
            accept: Duration::from_secs(1),
            connect: Duration::from_secs(30),
        }
    }
}

/// Immutable process configuration, handed by value to each component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub udp_port: u16,
    pub tcp_port: u16,
    pub broadcast: Ipv4Addr,
    pub rules: Rules,
    pub timeouts: Timeouts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            udp_port: UDP_PORT,
            tcp_port: TCP_PORT,
            broadcast: Ipv4Addr::BROADCAST,
            rules: Rules::default(),
            timeouts: Timeouts::default(),
        }
    }
}

impl Config {
    pub fn with_udp_port(self, udp_port: u16) -> Self {
        Self { udp_port, ..self }
    }
    pub fn with_tcp_port(self, tcp_port: u16) -> Self {
        Self { tcp_port, ..self }
    }
    pub fn with_broadcast(self, broadcast: Ipv4Addr) -> Self {
        Self { broadcast, ..self }
    }
    pub fn with_timeouts(self, timeouts: Timeouts) -> Self {
        Self { timeouts, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.udp_port, 13122);
        assert_eq!(config.tcp_port, 0);
        assert_eq!(config.broadcast, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(config.rules.stand, 17);
        assert_eq!(config.rules.bust, 21);
    }
    #[test]
    fn default_timeouts() {
        let timeouts = Timeouts::default();
        assert_eq!(timeouts.offer, Duration::from_secs(10));
        assert_eq!(timeouts.interval, Duration::from_secs(1));
        assert_eq!(timeouts.stream, Duration::from_secs(30));
        assert_eq!(timeouts.decision, Duration::from_secs(60));
    }
    #[test]
    fn builders_leave_other_fields() {
        let config = Config::default().with_tcp_port(4000).with_udp_port(5000);
        assert_eq!(config.tcp_port, 4000);
        assert_eq!(config.udp_port, 5000);
        assert_eq!(config.rules, Rules::default());
    }
}
