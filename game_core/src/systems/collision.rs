use crate::{Config, Events, GameState, Side};

/// Bounce the ball off the top and bottom walls
pub fn check_wall_collision(state: &mut GameState, config: &Config, events: &mut Events) {
    let r = config.ball_radius;
    let height = state.arena.height;
    let ball = &mut state.ball;

    if ball.pos.y - r < 0.0 {
        ball.vel.y = ball.vel.y.abs();
        // Clamp position to prevent sinking into the wall
        ball.pos.y = r;
        events.wall_hit = true;
    } else if ball.pos.y + r > height {
        ball.vel.y = -ball.vel.y.abs();
        ball.pos.y = height - r;
        events.wall_hit = true;
    }
}

/// Check the ball against both paddles, left first
pub fn check_paddle_collisions(state: &mut GameState, config: &Config, events: &mut Events) {
    for side in [Side::Player, Side::Opponent] {
        if ball_hits_paddle(state, side, config) {
            bounce_off_paddle(state, side, config);
            if events.paddle_hit.is_none() {
                events.paddle_hit = Some(side);
            }
        }
    }
}

/// Ball overlaps the paddle rectangle and is still heading into it.
///
/// The heading check means a ball resting flush against the face after a
/// bounce cannot flip again on the next frame.
pub fn ball_hits_paddle(state: &GameState, side: Side, config: &Config) -> bool {
    let r = config.ball_radius;
    let ball = &state.ball;
    let paddle = state.paddle(side);

    let approaching = match side {
        Side::Player => ball.vel.x < 0.0,
        Side::Opponent => ball.vel.x > 0.0,
    };
    if !approaching {
        return false;
    }

    let left = config.paddle_x(side, &state.arena);
    let right = left + config.paddle_width;
    let horizontal = ball.pos.x - r <= right && ball.pos.x + r >= left;
    let vertical =
        ball.pos.y + r >= paddle.y && ball.pos.y - r <= paddle.y + config.paddle_height;

    horizontal && vertical
}

fn bounce_off_paddle(state: &mut GameState, side: Side, config: &Config) {
    let r = config.ball_radius;
    let face = config.paddle_face_x(side, &state.arena);
    let ball = &mut state.ball;
    let speed = ball.vel.x.abs() * config.ball_speed_increase;

    // X: always away from the paddle, then pushed flush against its face
    match side {
        Side::Player => {
            ball.vel.x = speed;
            ball.pos.x = face + r;
        }
        Side::Opponent => {
            ball.vel.x = -speed;
            ball.pos.x = face - r;
        }
    }
}

/// Cap each velocity axis independently
pub fn clamp_ball_speed(state: &mut GameState, config: &Config) {
    let max = config.ball_speed_max;
    state.ball.vel.x = state.ball.vel.x.clamp(-max, max);
    state.ball.vel.y = state.ball.vel.y.clamp(-max, max);
}
