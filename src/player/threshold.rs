use super::*;
use crate::Points;
use crate::STAND_THRESHOLD;
use crate::wire::Decision;

/// Hits while below a fixed total, like the dealer does.
#[derive(Debug, Clone, Copy)]
pub struct Threshold(Points);

impl Default for Threshold {
    fn default() -> Self {
        Self(STAND_THRESHOLD)
    }
}

impl From<Points> for Threshold {
    fn from(limit: Points) -> Self {
        Self(limit)
    }
}

#[async_trait::async_trait]
impl Player for Threshold {
    async fn decide(&mut self, view: &View) -> Decision {
        match view.points() < self.0 {
            true => Decision::Hit,
            false => Decision::Stand,
        }
    }

    async fn notify(&mut self, _: &Event) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;

    fn view(cards: &str) -> View {
        View::new(Hand::try_from(cards).unwrap(), None)
    }

    #[tokio::test]
    async fn hits_below_limit_only() {
        let mut player = Threshold::default();
        assert_eq!(player.decide(&view("Th 6d")).await, Decision::Hit);
        assert_eq!(player.decide(&view("Th 7d")).await, Decision::Stand);
        assert_eq!(player.decide(&view("Th Kd")).await, Decision::Stand);
    }

    #[tokio::test]
    async fn custom_limit() {
        let mut player = Threshold::from(12);
        assert_eq!(player.decide(&view("5h 6d")).await, Decision::Hit);
        assert_eq!(player.decide(&view("5h 7d")).await, Decision::Stand);
    }
}
