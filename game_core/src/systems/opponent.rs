use crate::{Config, DifficultyProfile, GameState, SimRng};

/// Nudge the opponent paddle toward the ball's height.
///
/// One sample is drawn per tick; below `error_rate` the opponent sits the
/// tick out. Otherwise it moves at `response_gain` of full paddle speed
/// unless its centre is already within `dead_zone` of the ball.
pub fn move_opponent(
    state: &mut GameState,
    dt: f32,
    config: &Config,
    profile: &DifficultyProfile,
    rng: &mut impl SimRng,
) {
    if rng.next_unit() < profile.error_rate {
        return;
    }

    let arena = state.arena;
    let ball_y = state.ball.pos.y;
    let paddle = &mut state.opponent;
    let center = paddle.center_y(config);
    let delta = config.paddle_speed * dt * profile.response_gain;

    if center < ball_y - profile.dead_zone {
        paddle.y += delta;
    } else if center > ball_y + profile.dead_zone {
        paddle.y -= delta;
    }

    paddle.y = config.clamp_paddle_y(paddle.y, &arena);
}
