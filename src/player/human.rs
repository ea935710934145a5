use super::*;
use crate::cards::Card;
use crate::score::Outcome;
use crate::wire::Decision;
use colored::*;
use dialoguer::Select;
use tokio::task::JoinHandle;

/// Interactive player at the terminal.
///
/// The prompt blocks, so it runs on the blocking pool. A failed or
/// closed prompt counts as stand. A prompt still open when its decision
/// window closed answers the next decision rather than competing with a
/// second prompt for stdin.
#[derive(Debug, Default)]
pub struct Human {
    pending: Pending,
}

impl Human {
    fn paint(card: Card) -> ColoredString {
        let face = format!("{}{}", card.rank(), card.suit().symbol());
        match card.suit().is_red() {
            true => face.red().bold(),
            false => face.white().bold(),
        }
    }
    fn prompt(view: View) -> Decision {
        const CHOICES: [Decision; 2] = [Decision::Hit, Decision::Stand];
        Select::new()
            .with_prompt(format!("YOU HOLD {}", view))
            .report(false)
            .items(&CHOICES)
            .default(if view.points() < crate::STAND_THRESHOLD { 0 } else { 1 })
            .interact()
            .map(|i| CHOICES[i])
            .inspect_err(|e| log::warn!("[human] prompt failed ({}), standing", e))
            .unwrap_or(Decision::Stand)
    }
}

#[async_trait::async_trait]
impl Player for Human {
    async fn decide(&mut self, view: &View) -> Decision {
        let view = view.clone();
        self.pending.answer(move || Self::prompt(view)).await
    }

    async fn notify(&mut self, event: &Event) {
        match event {
            Event::Dealt(card) => println!("  you   {}", Self::paint(*card)),
            Event::Dealer(card) => println!("  house {}", Self::paint(*card)),
            Event::Settled(Outcome::Win) => println!("{}", "  YOU WIN".green().bold()),
            Event::Settled(Outcome::Loss) => println!("{}", "  YOU LOSE".red().bold()),
            Event::Settled(Outcome::Tie) => println!("{}", "  PUSH".yellow().bold()),
            Event::Summary(report) => println!("\n{}\n", report.to_string().cyan()),
        }
    }
}

/// The blocking prompt thread, kept across cancelled decisions.
#[derive(Debug, Default)]
struct Pending(Option<JoinHandle<Decision>>);

impl Pending {
    /// Awaits the open prompt if there is one, else starts `ask`.
    /// The handle is only cleared once awaited, so a timed out caller
    /// leaves it for the next one.
    async fn answer<F>(&mut self, ask: F) -> Decision
    where
        F: FnOnce() -> Decision + Send + 'static,
    {
        if self.0.as_ref().is_some_and(JoinHandle::is_finished) {
            log::debug!("[human] dropping an answer that came too late");
            self.0 = None;
        }
        if self.0.is_some() {
            log::info!("[human] previous prompt still open, using its answer");
        }
        let handle = self.0.get_or_insert_with(|| tokio::task::spawn_blocking(ask));
        let decision = handle.await.unwrap_or(Decision::Stand);
        self.0 = None;
        decision
    }
}
