//! Sound cues
//!
//! Turns simulation events into simple tones. Synthesis belongs to the
//! host (Web Audio in the browser, a log line when headless).

use game_core::{Events, GameEvent, Side};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits wall
    WallHit,
    /// Player won the point
    PlayerScore,
    /// Opponent won the point
    OpponentScore,
}

/// A single tone for the host to synthesize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundCue {
    pub effect: SoundEffect,
    pub frequency_hz: f32,
    pub duration_secs: f32,
}

impl SoundEffect {
    pub fn from_event(event: GameEvent) -> Self {
        match event {
            GameEvent::WallHit => SoundEffect::WallHit,
            GameEvent::PaddleHit { .. } => SoundEffect::PaddleHit,
            GameEvent::Score {
                winner: Side::Player,
            } => SoundEffect::PlayerScore,
            GameEvent::Score {
                winner: Side::Opponent,
            } => SoundEffect::OpponentScore,
        }
    }

    pub fn cue(&self) -> SoundCue {
        let (frequency_hz, duration_secs) = match self {
            SoundEffect::PaddleHit => (440.0, 0.1),
            SoundEffect::WallHit => (300.0, 0.1),
            SoundEffect::PlayerScore => (660.0, 0.3),
            SoundEffect::OpponentScore => (220.0, 0.3),
        };
        SoundCue {
            effect: *self,
            frequency_hz,
            duration_secs,
        }
    }
}

/// Cues for one frame's events, in event order; empty when sound is off
pub fn cues_for(events: &Events, sound_enabled: bool) -> Vec<SoundCue> {
    if !sound_enabled {
        return Vec::new();
    }
    events
        .iter()
        .map(|event| SoundEffect::from_event(event).cue())
        .collect()
}

/// Plays cues
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Headless sink: logs each cue
#[derive(Debug, Default)]
pub struct LogAudio {
    pub played: u32,
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        self.played += 1;
        log::debug!(
            "beep {:?} {}Hz for {}s",
            cue.effect,
            cue.frequency_hz,
            cue.duration_secs
        );
    }
}
