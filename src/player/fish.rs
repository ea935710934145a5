use super::*;
use crate::wire::Decision;
use rand::Rng;

/// Flips a coin at every decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fish;

#[async_trait::async_trait]
impl Player for Fish {
    async fn decide(&mut self, _: &View) -> Decision {
        match rand::rng().random_bool(0.5) {
            true => Decision::Hit,
            false => Decision::Stand,
        }
    }

    async fn notify(&mut self, _: &Event) {}
}
