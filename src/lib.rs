//! LAN blackjack between a dealer process and remote players.
//!
//! A dealer advertises itself with UDP broadcast offers, accepts TCP
//! connections, and deals rounds to each connected player on its own task.
//! Every message on the wire is a fixed-length big-endian record.
//!
//! ## Modules
//!
//! - [`cards`]: Ranks, suits, cards, hands, and the refilling deck
//! - [`wire`]: Fixed-layout codec for offers, requests, payloads, decisions
//! - [`net`]: Discovery broadcaster/listener and the framing [`net::Connection`]
//! - [`dealer`]: Round engine, per-connection session, and the accept loop
//! - [`player`]: Decision providers, player-side session, and discovery loop
//! - [`score`]: Round outcomes, per-session tallies, process-wide ledger
pub mod cards;
pub mod config;
pub mod dealer;
pub mod net;
pub mod player;
pub mod score;
pub mod wire;

pub use config::*;

/// Blackjack hand totals and thresholds.
pub type Points = u16;

// ============================================================================
// PROTOCOL DEFAULTS
// ============================================================================
/// Well-known UDP port carrying offer broadcasts.
pub const UDP_PORT: u16 = 13122;
/// TCP port requested by the dealer (0 lets the OS choose).
pub const TCP_PORT: u16 = 0;
/// Team name used when none is given.
pub const TEAM_NAME: &str = "The Socket Wizards";
/// Dealer keeps drawing below this total.
pub const STAND_THRESHOLD: Points = 17;
/// Any total above this is a bust.
pub const BUST_THRESHOLD: Points = 21;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler that flips the given shutdown flag.
/// A second Ctrl+C exits immediately.
#[cfg(feature = "server")]
pub fn kys(shutdown: net::Shutdown) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, shutting down");
            shutdown.trigger();
        }
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("violent interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
