use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Config, Params, SimRng};

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human player, left edge
    Player,
    /// Computer opponent, right edge
    Opponent,
}

/// Rectangular play field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size the arena to fit a viewport: capped width, fixed aspect ratio.
    pub fn from_viewport(viewport_width: f32) -> Self {
        let width = (viewport_width - Params::VIEWPORT_MARGIN)
            .min(Params::ARENA_MAX_WIDTH)
            .max(Params::ARENA_MIN_WIDTH);
        let (rise, run) = Params::ARENA_ASPECT;
        Self {
            width,
            height: width * rise / run,
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(Params::ARENA_WIDTH, Params::ARENA_HEIGHT)
    }
}

/// A paddle; width, height and speed live in `Config`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// The pong ball; radius lives in `Config`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // units per second
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset ball to the arena centre and launch it at base speed
    pub fn reset(&mut self, config: &Config, arena: &Arena, rng: &mut impl SimRng) {
        self.pos = config.ball_spawn(arena);

        // Uniform within +-45 degrees, then a coin flip for which side it heads to
        let cone = Params::LAUNCH_CONE;
        let mut angle = -cone + rng.next_unit() * 2.0 * cone;
        if rng.next_unit() < 0.5 {
            angle += std::f32::consts::PI;
        }

        self.vel = Vec2::new(angle.cos(), angle.sin()) * config.ball_speed_initial;
    }
}

/// Human paddle controls, written by input events and read once per step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub move_up: bool,
    pub move_down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedRng;

    #[test]
    fn test_arena_from_viewport() {
        let wide = Arena::from_viewport(1920.0);
        assert_eq!(wide.width, 800.0);
        assert_eq!(wide.height, 480.0);

        assert_eq!(Arena::from_viewport(840.0), Arena::default());

        let phone = Arena::from_viewport(400.0);
        assert_eq!(phone.width, 360.0);
        assert_eq!(phone.height, 216.0);

        let tiny = Arena::from_viewport(0.0);
        assert_eq!(tiny.width, Params::ARENA_MIN_WIDTH);
        assert!(tiny.height >= Params::PADDLE_HEIGHT);
    }

    #[test]
    fn test_ball_reset_launch_cone() {
        let config = Config::new();
        let arena = Arena::default();
        let mut ball = Ball::new(Vec2::new(3.0, 4.0), Vec2::new(399.0, -399.0));

        // Angle sample 0.5 -> 0 degrees, coin 0.9 -> keep heading right
        ball.reset(&config, &arena, &mut FixedRng::new(&[0.5, 0.9]));
        assert_eq!(ball.pos, Vec2::new(400.0, 240.0));
        assert!((ball.vel.x - config.ball_speed_initial).abs() < 1e-3);
        assert!(ball.vel.y.abs() < 1e-3);

        // Angle sample 0.0 -> -45 degrees, coin 0.1 -> flipped to the left
        ball.reset(&config, &arena, &mut FixedRng::new(&[0.0, 0.1]));
        assert!(ball.vel.x < 0.0, "Ball should head left, got {:?}", ball.vel);
        assert!((ball.vel.x.abs() - ball.vel.y.abs()).abs() < 1e-2);
        assert!((ball.vel.length() - config.ball_speed_initial).abs() < 1e-2);
    }

    #[test]
    fn test_paddle_center() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Opponent, 190.0);
        assert_eq!(paddle.center_y(&config), 240.0);
    }
}
