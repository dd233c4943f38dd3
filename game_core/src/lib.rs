//! Deterministic two-paddle Pong simulation.
//!
//! `step` takes the current `GameState` and returns the next one along with
//! the `Events` the frame produced. Nothing here draws, plays sound or reads
//! a clock; hosts feed in `dt`, input and a random source.

pub mod components;
pub mod config;
pub mod difficulty;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use difficulty::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use systems::*;

/// Advance the simulation by `dt` seconds.
///
/// Frames with `dt` outside `(0, max_dt)` are skipped whole: the state is
/// returned unchanged with no events and no random samples drawn.
pub fn step(
    state: &GameState,
    input: &InputState,
    dt: f32,
    config: &Config,
    difficulty: Difficulty,
    rng: &mut impl SimRng,
) -> (GameState, Events) {
    let mut next = state.clone();
    let mut events = Events::new();

    if !(dt > 0.0 && dt < config.max_dt) {
        return (next, events);
    }

    // 1. Move paddles (player input, then opponent controller)
    move_player_paddle(&mut next, input, dt, config);
    move_opponent(&mut next, dt, config, &difficulty.profile(), rng);

    // 2. Move ball
    move_ball(&mut next, dt);

    // 3. Check collisions (walls, then paddles) and bound the speed
    check_wall_collision(&mut next, config, &mut events);
    check_paddle_collisions(&mut next, config, &mut events);
    clamp_ball_speed(&mut next, config);

    // 4. Check scoring (ball exited arena)
    check_scoring(&mut next, config, &mut events, rng);

    (next, events)
}
