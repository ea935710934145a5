use crate::Config;
use crate::Rules;
use crate::cards::*;
use crate::net::*;
use crate::score::Outcome;
use crate::wire::*;
use std::time::Duration;
use tokio::io::AsyncRead;
use tokio::io::AsyncWrite;

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Dealing,
    PlayerTurn,
    DealerTurn,
    Resolved(Outcome),
}

/// Dealer-side engine for a single round.
///
/// Owns its deck and both hands for the round's lifetime. The wire sequence:
///
/// - Dealing: player card, player card, dealer upcard, all not-over.
///   The dealer's second card stays hidden.
/// - PlayerTurn: one decision per step. Timeout or garbage counts as stand.
///   Each hit card carries loss if it busts the player, ending the round.
/// - DealerTurn: reveal the hidden card, then draw below the stand line.
///   A card that busts the dealer carries win, ending the round.
/// - Resolved: if nobody busted, one card-less payload carries the result.
///
/// Every result is from the player's side.
#[derive(Debug)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: Phase,
    rules: Rules,
    decision: Duration,
}

impl Round {
    pub fn new(config: &Config) -> Self {
        Self::with_deck(Deck::new(), config)
    }
    /// A round that draws from the given deck, e.g. [`Deck::stacked`].
    pub fn with_deck(deck: Deck, config: &Config) -> Self {
        Self {
            deck,
            player: Hand::empty(),
            dealer: Hand::empty(),
            phase: Phase::Dealing,
            rules: config.rules,
            decision: config.timeouts.decision,
        }
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn player(&self) -> &Hand {
        &self.player
    }
    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Drives the round to resolution over `conn`.
    /// Any transport fault abandons the round where it stands.
    pub async fn play<S>(&mut self, conn: &mut Connection<S>) -> Result<Outcome, Disconnect>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        loop {
            self.phase = match self.phase {
                Phase::Dealing => self.deal(conn).await?,
                Phase::PlayerTurn => self.ask(conn).await?,
                Phase::DealerTurn => self.reveal(conn).await?,
                Phase::Resolved(outcome) => return Ok(outcome),
            };
        }
    }
}

impl Round {
    async fn deal<S>(&mut self, conn: &mut Connection<S>) -> Result<Phase, Disconnect>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let p1 = self.deck.draw();
        let p2 = self.deck.draw();
        let d1 = self.deck.draw();
        let d2 = self.deck.draw();
        self.player = Hand::from(vec![p1, p2]);
        self.dealer = Hand::from(vec![d1, d2]);
        log::debug!("[round] player {} | dealer [{}] [??]", self.player, d1);
        for card in [p1, p2, d1] {
            conn.send(&Payload::card(Status::NotOver, card)).await?;
        }
        Ok(Phase::PlayerTurn)
    }

    async fn ask<S>(&mut self, conn: &mut Connection<S>) -> Result<Phase, Disconnect>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        match conn.recv_within::<Decision>(self.decision).await {
            Ok(Decision::Hit) => self.hit(conn).await,
            Ok(Decision::Stand) => self.stand(conn).await,
            Err(Disconnect::Timeout) => {
                log::debug!("[round] no decision in time, standing");
                self.stand(conn).await
            }
            Err(Disconnect::Malformed(e)) => {
                log::debug!("[round] unreadable decision ({}), standing", e);
                self.stand(conn).await
            }
            Err(e) => Err(e),
        }
    }

    async fn hit<S>(&mut self, conn: &mut Connection<S>) -> Result<Phase, Disconnect>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let card = self.deck.draw();
        self.player.push(card);
        log::debug!("[round] player hits {}", self.player);
        match self.player.is_bust(self.rules.bust) {
            true => {
                conn.send(&Payload::card(Status::Loss, card)).await?;
                Ok(Phase::Resolved(Outcome::Loss))
            }
            false => {
                conn.send(&Payload::card(Status::NotOver, card)).await?;
                Ok(Phase::PlayerTurn)
            }
        }
    }

    /// Standing on a dealt bust (two aces) still loses without a dealer turn.
    async fn stand<S>(&mut self, conn: &mut Connection<S>) -> Result<Phase, Disconnect>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        log::debug!("[round] player stands on {}", self.player.points());
        match self.player.is_bust(self.rules.bust) {
            true => self.settle(conn, Outcome::Loss).await,
            false => Ok(Phase::DealerTurn),
        }
    }

    async fn reveal<S>(&mut self, conn: &mut Connection<S>) -> Result<Phase, Disconnect>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        if let Some(hole) = self.dealer.get(1) {
            conn.send(&Payload::card(Status::NotOver, hole)).await?;
        }
        if self.dealer.is_bust(self.rules.bust) {
            return self.settle(conn, Outcome::Win).await;
        }
        while self.dealer.points() < self.rules.stand {
            let card = self.deck.draw();
            self.dealer.push(card);
            log::debug!("[round] dealer draws {}", self.dealer);
            if self.dealer.is_bust(self.rules.bust) {
                conn.send(&Payload::card(Status::Win, card)).await?;
                return Ok(Phase::Resolved(Outcome::Win));
            }
            conn.send(&Payload::card(Status::NotOver, card)).await?;
        }
        let outcome = Outcome::compare(self.player.points(), self.dealer.points());
        self.settle(conn, outcome).await
    }

    async fn settle<S>(&mut self, conn: &mut Connection<S>, outcome: Outcome) -> Result<Phase, Disconnect>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        log::debug!(
            "[round] {} vs {}: player {}",
            self.player.points(),
            self.dealer.points(),
            outcome
        );
        conn.send(&Payload::verdict(outcome.into())).await?;
        Ok(Phase::Resolved(outcome))
    }
}
