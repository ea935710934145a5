//! Player Binary
//!
//! Listens for dealer offers, connects to the first one heard, plays the
//! requested number of rounds, and goes back to listening until Ctrl+C.

use blackjack::net::Shutdown;
use blackjack::player::*;
use blackjack::wire::Request;
use blackjack::*;
use clap::Parser;
use clap::ValueEnum;
use dialoguer::Input;

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Prompt for every decision
    Manual,
    /// Hit below 17, stand otherwise
    Auto,
    /// Coin flip
    Random,
}

#[derive(Parser)]
#[command(author, version, about = "LAN blackjack player", long_about = None)]
struct Args {
    /// Team name sent to the dealer
    #[arg(long, default_value = TEAM_NAME)]
    name: String,
    /// Rounds per session (1-255); asked for interactively when omitted
    #[arg(long)]
    rounds: Option<u32>,
    /// UDP port to listen for offers on
    #[arg(long, default_value_t = UDP_PORT)]
    udp_port: u16,
    /// Who makes the hit/stand decisions
    #[arg(long, value_enum, default_value_t = Mode::Manual)]
    mode: Mode,
}

fn rounds() -> anyhow::Result<u32> {
    Ok(Input::<u32>::new()
        .with_prompt("How many rounds would you like to play? (1-255)")
        .validate_with(|n: &u32| match (1..=255).contains(n) {
            true => Ok(()),
            false => Err("enter a number between 1 and 255"),
        })
        .interact_text()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log();
    let shutdown = Shutdown::default();
    kys(shutdown.clone());
    let rounds = match args.rounds {
        Some(n) => n,
        None => rounds()?,
    };
    let request = Request::new(rounds, &args.name)?;
    let player: Box<dyn Player> = match args.mode {
        Mode::Manual => Box::new(Human::default()),
        Mode::Auto => Box::new(Threshold::default()),
        Mode::Random => Box::new(Fish),
    };
    let config = Config::default().with_udp_port(args.udp_port);
    let lifetime = Client::new(config, request, player, shutdown).run().await?;
    println!("{}", lifetime);
    Ok(())
}
