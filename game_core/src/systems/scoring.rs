use crate::{Config, Events, GameState, Side, SimRng};

/// Check if the ball fully left the arena; score and relaunch if so.
///
/// Left exit is evaluated first, so if both somehow hold the opponent scores.
pub fn check_scoring(
    state: &mut GameState,
    config: &Config,
    events: &mut Events,
    rng: &mut impl SimRng,
) {
    let r = config.ball_radius;
    let x = state.ball.pos.x;

    let winner = if x + r <= 0.0 {
        Side::Opponent
    } else if x - r >= state.arena.width {
        Side::Player
    } else {
        return;
    };

    state.score.increment(winner);
    events.scored = Some(winner);
    log::debug!(
        "{:?} scored ({} - {})",
        winner,
        state.score.player,
        state.score.opponent
    );

    let arena = state.arena;
    state.ball.reset(config, &arena, rng);
}
