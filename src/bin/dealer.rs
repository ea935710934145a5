//! Dealer Binary
//!
//! Broadcasts offers on the LAN and deals blackjack to every player
//! that connects, one task per connection, until Ctrl+C.

use blackjack::dealer::House;
use blackjack::net::Shutdown;
use blackjack::*;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "LAN blackjack dealer", long_about = None)]
struct Args {
    /// Name advertised in every offer
    #[arg(long, default_value = TEAM_NAME)]
    name: String,
    /// TCP port to accept players on (0 picks any free port)
    #[arg(long, default_value_t = TCP_PORT)]
    port: u16,
    /// UDP port offers are broadcast to
    #[arg(long, default_value_t = UDP_PORT)]
    udp_port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log();
    let shutdown = Shutdown::default();
    kys(shutdown.clone());
    let config = Config::default()
        .with_tcp_port(args.port)
        .with_udp_port(args.udp_port);
    House::new(&args.name, config, shutdown).run().await
}
