//! Transport: discovery over UDP and framed records over TCP.
//!
//! - [`Broadcaster`] — Repeats the dealer's offer on the broadcast address
//! - [`Listener`] — Waits a bounded time for the first valid offer
//! - [`Connection`] — Exact-size reads and whole writes on one stream
//! - [`Disconnect`] — Every failure of an established connection
//! - [`Shutdown`] — Cooperative stop flag polled by long-running loops
mod broadcaster;
mod connection;
mod disconnect;
mod listener;
mod local;
mod shutdown;

pub use broadcaster::*;
pub use connection::*;
pub use disconnect::*;
pub use listener::*;
pub use local::*;
pub use shutdown::*;
