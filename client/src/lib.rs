//! Hosts for the Pong simulation
//!
//! - `game_loop`: frame driver tying clock, scheduler, input and `game_core::step`
//! - `fsm`: match lifecycle (start, pause, resume, reset)
//! - `settings`: persisted theme, sound and difficulty preferences
//! - `audio`: event to sound cue mapping
//! - `web`: wasm32 bindings for a browser page

pub mod audio;
pub mod clock;
pub mod fsm;
pub mod game_loop;
pub mod input;
pub mod scheduler;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use audio::{cues_for, AudioSink, LogAudio, SoundCue, SoundEffect};
pub use clock::{Clock, ManualClock, SystemClock};
pub use fsm::{MatchAction, MatchFsm, MatchState, TransitionResult};
pub use game_loop::{FrameReport, GameLoop};
pub use input::TouchButton;
pub use scheduler::{FrameScheduler, ManualScheduler};
pub use settings::{
    load_or_default, JsonFileStore, MemoryStore, Settings, SettingsError, SettingsStore, Theme,
};
