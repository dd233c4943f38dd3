use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Arena, Params, Side};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("ball_speed_increase must be at least 1.0, got {0}")]
    SpeedIncreaseTooLow(f32),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub max_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            max_dt: Params::MAX_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed_initial", self.ball_speed_initial),
            ("ball_speed_max", self.ball_speed_max),
            ("max_dt", self.max_dt),
        ];
        for (field, value) in positive {
            // `!(v > 0)` also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !(self.ball_speed_increase >= 1.0) {
            return Err(ConfigError::SpeedIncreaseTooLow(self.ball_speed_increase));
        }
        Ok(())
    }

    /// Left edge of the paddle on the given side
    pub fn paddle_x(&self, side: Side, arena: &Arena) -> f32 {
        match side {
            Side::Player => 0.0,
            Side::Opponent => arena.width - self.paddle_width,
        }
    }

    /// X coordinate of the face the ball bounces off
    pub fn paddle_face_x(&self, side: Side, arena: &Arena) -> f32 {
        match side {
            Side::Player => self.paddle_width,
            Side::Opponent => arena.width - self.paddle_width,
        }
    }

    /// Clamp paddle top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32, arena: &Arena) -> f32 {
        y.clamp(0.0, (arena.height - self.paddle_height).max(0.0))
    }

    /// Top edge that vertically centres a paddle
    pub fn paddle_start_y(&self, arena: &Arena) -> f32 {
        self.clamp_paddle_y((arena.height - self.paddle_height) / 2.0, arena)
    }

    pub fn ball_spawn(&self, arena: &Arena) -> Vec2 {
        Vec2::new(arena.width / 2.0, arena.height / 2.0)
    }
}
