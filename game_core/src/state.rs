use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Arena, Ball, Config, Paddle, Score, Side, SimRng};

/// Complete simulation state; `step` takes one and returns the next
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    /// Fresh match: centred paddles, zero score, ball launched from the centre
    pub fn new(arena: Arena, config: &Config, rng: &mut impl SimRng) -> Self {
        let paddle_y = config.paddle_start_y(&arena);
        let mut ball = Ball::new(config.ball_spawn(&arena), Vec2::ZERO);
        ball.reset(config, &arena, rng);

        Self {
            arena,
            player: Paddle::new(Side::Player, paddle_y),
            opponent: Paddle::new(Side::Opponent, paddle_y),
            ball,
            score: Score::new(),
        }
    }

    /// Zero the score and recentre paddles and ball. Repeating it changes
    /// nothing but the launch angle.
    pub fn reset(&mut self, config: &Config, rng: &mut impl SimRng) {
        *self = Self::new(self.arena, config, rng);
    }

    /// Swap in a new arena size, keeping the ball at the same relative spot
    pub fn resize(&mut self, arena: Arena, config: &Config) {
        let scale = Vec2::new(
            arena.width / self.arena.width,
            arena.height / self.arena.height,
        );
        self.arena = arena;

        self.player.y = config.clamp_paddle_y(self.player.y, &arena);
        self.opponent.y = config.clamp_paddle_y(self.opponent.y, &arena);

        let r = config.ball_radius;
        self.ball.pos *= scale;
        self.ball.pos.y = self.ball.pos.y.clamp(r, (arena.height - r).max(r));
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }
}
