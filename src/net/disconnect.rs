use crate::wire::WireError;
use std::net::SocketAddr;

/// The single failure signal of an established connection.
///
/// Every transport fault collapses into one of these; none is fatal to the
/// process, only to the round or session that hit it.
#[derive(Debug)]
pub enum Disconnect {
    /// Peer closed the stream, or this side already called `close`.
    Closed,
    /// No complete message arrived within the read timeout.
    Timeout,
    /// A full-size message arrived but did not decode. Framing is fixed, so
    /// nothing after it can be trusted either.
    Malformed(WireError),
    Io(std::io::Error),
}

impl std::fmt::Display for Disconnect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "connection closed"),
            Self::Timeout => write!(f, "read timed out"),
            Self::Malformed(e) => write!(f, "malformed message: {}", e),
            Self::Io(e) => write!(f, "transport error: {}", e),
        }
    }
}

impl std::error::Error for Disconnect {}

impl From<std::io::Error> for Disconnect {
    fn from(e: std::io::Error) -> Self {
        use std::io::ErrorKind::*;
        match e.kind() {
            UnexpectedEof | BrokenPipe | ConnectionReset | ConnectionAborted | NotConnected => {
                Self::Closed
            }
            TimedOut | WouldBlock => Self::Timeout,
            _ => Self::Io(e),
        }
    }
}

/// Why an outbound connection could not be established.
#[derive(Debug)]
pub enum ConnectError {
    Refused(SocketAddr),
    Timeout(SocketAddr),
    Io(SocketAddr, std::io::Error),
}

impl std::fmt::Display for ConnectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Refused(addr) => write!(f, "connection to {} refused", addr),
            Self::Timeout(addr) => write!(f, "connection to {} timed out", addr),
            Self::Io(addr, e) => write!(f, "failed to connect to {}: {}", addr, e),
        }
    }
}

impl std::error::Error for ConnectError {}
