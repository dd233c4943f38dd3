use game_core::{step, Arena, Config, Difficulty, Events, GameRng, GameState, InputState};

use crate::clock::Clock;
use crate::fsm::{MatchAction, MatchFsm, MatchState};
use crate::input::{handle_key_down, handle_key_up, handle_touch, TouchButton};
use crate::scheduler::FrameScheduler;
use crate::settings::{Settings, Theme};

/// What a single display-refresh tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// False when not running or the frame gap was too large to simulate
    pub stepped: bool,
    pub events: Events,
}

/// Local game against the computer opponent.
///
/// Owns the simulation state and decides when `step` runs: only while the
/// match is Running, once per scheduled frame, with `dt` measured from the
/// previous frame (or from the moment play started/resumed).
pub struct GameLoop<C: Clock, S: FrameScheduler> {
    state: GameState,
    config: Config,
    settings: Settings,
    input: InputState,
    rng: GameRng,
    fsm: MatchFsm,
    clock: C,
    scheduler: S,
    last_frame: f64,
}

impl<C: Clock, S: FrameScheduler> GameLoop<C, S> {
    pub fn new(
        seed: u64,
        arena: Arena,
        config: Config,
        settings: Settings,
        clock: C,
        scheduler: S,
    ) -> Self {
        let mut rng = GameRng::new(seed);
        let state = GameState::new(arena, &config, &mut rng);
        let last_frame = clock.now();

        Self {
            state,
            config,
            settings,
            input: InputState::new(),
            rng,
            fsm: MatchFsm::new(),
            clock,
            scheduler,
            last_frame,
        }
    }

    pub fn start(&mut self) -> bool {
        self.begin_running(MatchAction::Start)
    }

    pub fn resume(&mut self) -> bool {
        self.begin_running(MatchAction::Resume)
    }

    pub fn pause(&mut self) -> bool {
        let result = self.fsm.transition(MatchAction::Pause);
        if result.success {
            self.scheduler.stop();
            log::info!("Paused at {} - {}", self.state.score.player, self.state.score.opponent);
        }
        result.success
    }

    /// Zero the score, recentre everything and stop the loop. Safe to repeat.
    pub fn reset(&mut self) {
        self.fsm.transition(MatchAction::Reset);
        self.scheduler.stop();
        self.state.reset(&self.config, &mut self.rng);
        log::info!("Match reset");
    }

    fn begin_running(&mut self, action: MatchAction) -> bool {
        let result = self.fsm.transition(action);
        if !result.success {
            log::debug!("Ignoring {:?} while {:?}", action, result.from_state);
            return false;
        }

        // Fresh baseline so time spent stopped never counts as a frame gap
        self.last_frame = self.clock.now();
        self.scheduler.start();
        log::info!("{:?} -> {:?}", result.from_state, result.to_state);
        true
    }

    /// Handle one display refresh
    pub fn frame(&mut self) -> FrameReport {
        if !self.scheduler.tick() || !self.fsm.is_running() {
            return FrameReport::default();
        }

        let now = self.clock.now();
        let dt = (now - self.last_frame) as f32;
        self.last_frame = now;

        let stepped = dt > 0.0 && dt < self.config.max_dt;
        if !stepped {
            log::debug!("Skipping frame with dt={:.3}s", dt);
        }

        let (next, events) = step(
            &self.state,
            &self.input,
            dt,
            &self.config,
            self.settings.difficulty,
            &mut self.rng,
        );
        self.state = next;

        self.scheduler.start();
        FrameReport { stepped, events }
    }

    pub fn key_down(&mut self, key: &str) {
        handle_key_down(key, &mut self.input);
    }

    pub fn key_up(&mut self, key: &str) {
        handle_key_up(key, &mut self.input);
    }

    pub fn touch(&mut self, button: TouchButton, pressed: bool) {
        handle_touch(button, pressed, &mut self.input);
    }

    /// Takes effect on the next frame
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log::info!("Difficulty set to {}", difficulty);
        self.settings.difficulty = difficulty;
    }

    /// Easy -> Medium -> Hard -> Easy, for a single settings button
    pub fn cycle_difficulty(&mut self) -> Difficulty {
        self.set_difficulty(self.settings.difficulty.next());
        self.settings.difficulty
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.settings.theme = self.settings.theme.toggled();
        self.settings.theme
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.settings.sound_enabled = enabled;
    }

    pub fn resize_viewport(&mut self, viewport_width: f32) {
        let arena = Arena::from_viewport(viewport_width);
        log::debug!("Arena resized to {}x{}", arena.width, arena.height);
        self.state.resize(arena, &self.config);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn match_state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::scheduler::ManualScheduler;

    const FRAME: f64 = 1.0 / 60.0;

    fn setup() -> (GameLoop<ManualClock, ManualScheduler>, ManualClock) {
        let clock = ManualClock::new(10.0);
        let game = GameLoop::new(
            7,
            Arena::default(),
            Config::new(),
            Settings::default(),
            clock.clone(),
            ManualScheduler::new(),
        );
        (game, clock)
    }

    #[test]
    fn test_nothing_runs_before_start() {
        let (mut game, clock) = setup();
        let before = game.state().clone();
        clock.advance(FRAME);

        let report = game.frame();

        assert!(!report.stepped);
        assert_eq!(game.state(), &before);
        assert_eq!(game.match_state(), MatchState::NotStarted);
    }

    #[test]
    fn test_start_steps_each_frame() {
        let (mut game, clock) = setup();
        assert!(game.start());
        let ball_before = game.state().ball.pos;

        clock.advance(FRAME);
        let report = game.frame();

        assert!(report.stepped);
        assert_ne!(game.state().ball.pos, ball_before);
        assert!(game.scheduler().is_pending(), "Next frame should be requested");
    }

    #[test]
    fn test_each_frame_rearms_scheduler() {
        let (mut game, clock) = setup();
        game.start();
        clock.advance(FRAME);
        assert!(game.frame().stepped);

        clock.advance(FRAME);
        assert!(game.frame().stepped);
        assert_eq!(game.scheduler().requests, 3);
    }

    #[test]
    fn test_pause_stops_loop_and_resume_rebaselines() {
        let (mut game, clock) = setup();
        game.start();
        clock.advance(FRAME);
        game.frame();

        assert!(game.pause());
        assert!(!game.scheduler().is_pending());
        let paused = game.state().clone();

        // A long pause must not show up as one huge frame
        clock.advance(30.0);
        assert!(!game.frame().stepped);
        assert_eq!(game.state(), &paused);

        assert!(game.resume());
        clock.advance(FRAME);
        let report = game.frame();
        assert!(report.stepped);
        assert_eq!(game.state().score, paused.score);
    }

    #[test]
    fn test_large_gap_is_skipped_but_loop_continues() {
        let (mut game, clock) = setup();
        game.start();
        let before = game.state().clone();

        clock.advance(0.5);
        let report = game.frame();

        assert!(!report.stepped);
        assert!(report.events.is_empty());
        assert_eq!(game.state(), &before);
        assert!(game.scheduler().is_pending());

        // Baseline moved forward, so the next normal frame simulates
        clock.advance(FRAME);
        assert!(game.frame().stepped);
    }

    #[test]
    fn test_reset_cancels_pending_and_is_idempotent() {
        let (mut game, clock) = setup();
        game.start();
        for _ in 0..600 {
            clock.advance(FRAME);
            game.frame();
        }

        game.reset();
        let spawn = game.config().ball_spawn(&game.state().arena);
        assert!(!game.scheduler().is_pending());
        assert_eq!(game.match_state(), MatchState::Reset);
        assert_eq!(game.state().score.player + game.state().score.opponent, 0);
        assert_eq!(game.state().ball.pos, spawn);

        game.reset();
        assert_eq!(game.match_state(), MatchState::Reset);
        assert_eq!(game.state().ball.pos, spawn);

        clock.advance(FRAME);
        assert!(!game.frame().stepped);

        assert!(game.start());
        clock.advance(FRAME);
        assert!(game.frame().stepped);
    }

    #[test]
    fn test_invalid_actions_are_ignored() {
        let (mut game, _clock) = setup();
        assert!(!game.pause());
        assert!(!game.resume());
        game.start();
        assert!(!game.start());
        assert_eq!(game.scheduler().requests, 1);
    }

    #[test]
    fn test_input_moves_player_paddle() {
        let (mut game, clock) = setup();
        game.start();
        let before = game.state().player.y;

        game.key_down("ArrowUp");
        clock.advance(FRAME);
        game.frame();
        assert!(game.state().player.y < before);

        game.key_up("ArrowUp");
        let held = game.state().player.y;
        clock.advance(FRAME);
        game.frame();
        assert_eq!(game.state().player.y, held);
    }

    #[test]
    fn test_settings_changes() {
        let (mut game, _clock) = setup();
        game.set_difficulty(Difficulty::Hard);
        assert_eq!(game.settings().difficulty, Difficulty::Hard);
        assert_eq!(game.cycle_difficulty(), Difficulty::Easy);
        assert_eq!(game.cycle_difficulty(), Difficulty::Medium);
        assert_eq!(game.settings().difficulty, Difficulty::Medium);
        assert_eq!(game.toggle_theme(), Theme::Dark);
        assert_eq!(game.settings().theme.colors(), ("#000000", "#ffffff"));
        game.set_sound_enabled(false);
        assert!(!game.settings().sound_enabled);
    }

    #[test]
    fn test_resize_viewport() {
        let (mut game, _clock) = setup();
        game.resize_viewport(500.0);
        assert_eq!(game.state().arena.width, 460.0);
        let max_y = game.state().arena.height - game.config().paddle_height;
        assert!(game.state().player.y <= max_y);
    }
}
