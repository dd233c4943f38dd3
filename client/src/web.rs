//! Browser bindings
//!
//! The page owns the canvas, DOM controls, audio context and the
//! requestAnimationFrame callback. It passes timestamps and input in and
//! reads positions, scores and sound cues back out.

use game_core::Difficulty;
use wasm_bindgen::prelude::*;

use crate::audio::cues_for;
use crate::clock::ManualClock;
use crate::fsm::MatchState;
use crate::game_loop::{FrameReport, GameLoop};
use crate::input::TouchButton;
use crate::scheduler::{FrameScheduler, ManualScheduler};
use crate::settings::{Settings, Theme};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Logger already initialised");
    }
}

#[wasm_bindgen]
pub struct WebGame {
    game: GameLoop<ManualClock, ManualScheduler>,
    clock: ManualClock,
    last: FrameReport,
}

#[wasm_bindgen]
impl WebGame {
    /// `settings_json` is whatever the page last saved, if anything
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f32, settings_json: Option<String>) -> WebGame {
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let settings = match settings_json.as_deref().map(Settings::from_json) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                log::warn!("Ignoring stored settings: {}", e);
                Settings::default()
            }
            None => Settings::default(),
        };
        let clock = ManualClock::new(0.0);
        let game = GameLoop::new(
            seed,
            game_core::Arena::from_viewport(viewport_width),
            game_core::Config::new(),
            settings,
            clock.clone(),
            ManualScheduler::new(),
        );
        WebGame {
            game,
            clock,
            last: FrameReport::default(),
        }
    }

    pub fn start(&mut self, now_ms: f64) -> bool {
        self.clock.set(now_ms / 1000.0);
        self.game.start()
    }

    pub fn pause(&mut self) -> bool {
        self.game.pause()
    }

    pub fn resume(&mut self, now_ms: f64) -> bool {
        self.clock.set(now_ms / 1000.0);
        self.game.resume()
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.last = FrameReport::default();
    }

    /// Call from the animation frame callback; true if the simulation advanced
    pub fn frame(&mut self, now_ms: f64) -> bool {
        self.clock.set(now_ms / 1000.0);
        self.last = self.game.frame();
        self.last.stepped
    }

    /// Whether the page should request another animation frame
    pub fn wants_frame(&self) -> bool {
        self.game.scheduler().is_pending()
    }

    pub fn key_down(&mut self, key: &str) {
        self.game.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.game.key_up(key);
    }

    pub fn touch(&mut self, up: bool, pressed: bool) {
        let button = if up { TouchButton::Up } else { TouchButton::Down };
        self.game.touch(button, pressed);
    }

    pub fn resize(&mut self, viewport_width: f32) {
        self.game.resize_viewport(viewport_width);
    }

    /// Flat `[frequency_hz, duration_secs, ...]` pairs for the last frame
    pub fn sound_cues(&self) -> Vec<f32> {
        cues_for(&self.last.events, self.game.settings().sound_enabled)
            .into_iter()
            .flat_map(|cue| [cue.frequency_hz, cue.duration_secs])
            .collect()
    }

    pub fn set_difficulty(&mut self, name: &str) -> bool {
        match Difficulty::from_str(name) {
            Some(difficulty) => {
                self.game.set_difficulty(difficulty);
                true
            }
            None => false,
        }
    }

    /// Name of the newly selected difficulty
    pub fn cycle_difficulty(&mut self) -> String {
        self.game.cycle_difficulty().as_str().to_string()
    }

    /// Returns true when the new theme is dark
    pub fn toggle_theme(&mut self) -> bool {
        self.game.toggle_theme() == Theme::Dark
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.game.set_sound_enabled(enabled);
    }

    /// Serialized settings for the page to persist
    pub fn settings_json(&self) -> Result<String, JsValue> {
        self.game
            .settings()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn dark_theme(&self) -> bool {
        self.game.settings().theme == Theme::Dark
    }

    #[wasm_bindgen(getter)]
    pub fn background_color(&self) -> String {
        self.game.settings().theme.colors().0.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn foreground_color(&self) -> String {
        self.game.settings().theme.colors().1.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn match_state(&self) -> MatchState {
        self.game.match_state()
    }

    #[wasm_bindgen(getter)]
    pub fn arena_width(&self) -> f32 {
        self.game.state().arena.width
    }

    #[wasm_bindgen(getter)]
    pub fn arena_height(&self) -> f32 {
        self.game.state().arena.height
    }

    #[wasm_bindgen(getter)]
    pub fn ball_x(&self) -> f32 {
        self.game.state().ball.pos.x
    }

    #[wasm_bindgen(getter)]
    pub fn ball_y(&self) -> f32 {
        self.game.state().ball.pos.y
    }

    #[wasm_bindgen(getter)]
    pub fn ball_radius(&self) -> f32 {
        self.game.config().ball_radius
    }

    #[wasm_bindgen(getter)]
    pub fn player_y(&self) -> f32 {
        self.game.state().player.y
    }

    #[wasm_bindgen(getter)]
    pub fn opponent_y(&self) -> f32 {
        self.game.state().opponent.y
    }

    #[wasm_bindgen(getter)]
    pub fn paddle_width(&self) -> f32 {
        self.game.config().paddle_width
    }

    #[wasm_bindgen(getter)]
    pub fn paddle_height(&self) -> f32 {
        self.game.config().paddle_height
    }

    #[wasm_bindgen(getter)]
    pub fn player_score(&self) -> u32 {
        self.game.state().score.player
    }

    #[wasm_bindgen(getter)]
    pub fn opponent_score(&self) -> u32 {
        self.game.state().score.opponent
    }
}
