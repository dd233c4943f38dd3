use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }
}

/// Source of uniform samples for the opponent controller and ball launches
pub trait SimRng {
    /// Uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f32;
}

/// Seeded random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl SimRng for GameRng {
    fn next_unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}

/// Replays a fixed list of samples, repeating the last one once exhausted
#[derive(Debug, Clone)]
pub struct FixedRng {
    samples: Vec<f32>,
    next: usize,
}

impl FixedRng {
    pub fn new(samples: &[f32]) -> Self {
        Self {
            samples: samples.to_vec(),
            next: 0,
        }
    }
}

impl SimRng for FixedRng {
    fn next_unit(&mut self) -> f32 {
        let sample = match self.samples.get(self.next) {
            Some(s) => *s,
            None => self.samples.last().copied().unwrap_or(0.0),
        };
        self.next += 1;
        sample.clamp(0.0, 0.999_999)
    }
}

/// Discrete things that happened during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallHit,
    PaddleHit { side: Side },
    Score { winner: Side },
}

/// Events that occurred during this step; at most one per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_hit: bool,
    pub paddle_hit: Option<Side>,
    pub scored: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        !self.wall_hit && self.paddle_hit.is_none() && self.scored.is_none()
    }

    /// Events in the order they happen within a step
    pub fn iter(&self) -> impl Iterator<Item = GameEvent> {
        let wall = self.wall_hit.then_some(GameEvent::WallHit);
        let paddle = self.paddle_hit.map(|side| GameEvent::PaddleHit { side });
        let score = self.scored.map(|winner| GameEvent::Score { winner });
        wall.into_iter().chain(paddle).chain(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Player);
        score.increment(Side::Opponent);
        score.increment(Side::Opponent);
        assert_eq!(score.get(Side::Player), 1);
        assert_eq!(score.get(Side::Opponent), 2);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            wall_hit: true,
            paddle_hit: Some(Side::Player),
            scored: Some(Side::Opponent),
        };
        assert!(!events.is_empty());

        events.clear();

        assert!(events.is_empty());
        assert_eq!(events.iter().count(), 0);
    }

    #[test]
    fn test_events_iterate_in_step_order() {
        let events = Events {
            wall_hit: true,
            paddle_hit: Some(Side::Opponent),
            scored: Some(Side::Player),
        };
        let order: Vec<GameEvent> = events.iter().collect();
        assert_eq!(
            order,
            vec![
                GameEvent::WallHit,
                GameEvent::PaddleHit {
                    side: Side::Opponent
                },
                GameEvent::Score {
                    winner: Side::Player
                },
            ]
        );
    }

    #[test]
    fn test_game_rng_is_seeded() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..16 {
            let x = a.next_unit();
            assert_eq!(x, b.next_unit());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_fixed_rng_repeats_last_sample() {
        let mut rng = FixedRng::new(&[0.2, 0.7]);
        assert_eq!(rng.next_unit(), 0.2);
        assert_eq!(rng.next_unit(), 0.7);
        assert_eq!(rng.next_unit(), 0.7);
    }
}
