use super::*;
use crate::wire::Decision;

/// Anything that can choose hit or stand.
///
/// Interactive prompts, fixed strategies and random bots all sit behind
/// this trait; the table never knows which one it is driving.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Called once per decision point with everything this side can see.
    async fn decide(&mut self, view: &View) -> Decision;

    /// Called for every card, round result, and session summary.
    /// Not needed for deciding; [`View`] is self-contained.
    async fn notify(&mut self, event: &Event);
}
