use crate::{Config, GameState, InputState};

/// Apply the human player's up/down input. Each direction is guarded
/// independently, so holding both is not special-cased.
pub fn move_player_paddle(state: &mut GameState, input: &InputState, dt: f32, config: &Config) {
    let arena = state.arena;
    let paddle = &mut state.player;
    let delta = config.paddle_speed * dt;

    if input.move_up && paddle.y > 0.0 {
        paddle.y -= delta;
    }
    if input.move_down && paddle.y < arena.height - config.paddle_height {
        paddle.y += delta;
    }

    // Clamp to arena bounds
    paddle.y = config.clamp_paddle_y(paddle.y, &arena);
}

/// Move ball based on velocity
pub fn move_ball(state: &mut GameState, dt: f32) {
    state.ball.pos += state.ball.vel * dt;
}
