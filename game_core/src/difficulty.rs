use serde::{Deserialize, Serialize};

/// Opponent skill level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Tuning for the opponent controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Probability that the opponent ignores a tick
    pub error_rate: f32,
    /// Fraction of paddle speed applied when reacting
    pub response_gain: f32,
    /// Vertical tolerance before the opponent reacts
    pub dead_zone: f32,
}

impl Difficulty {
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                error_rate: 0.3,
                response_gain: 0.5,
                dead_zone: 50.0,
            },
            Difficulty::Medium => DifficultyProfile {
                error_rate: 0.1,
                response_gain: 0.7,
                dead_zone: 35.0,
            },
            Difficulty::Hard => DifficultyProfile {
                error_rate: 0.05,
                response_gain: 0.9,
                dead_zone: 20.0,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Cycle Easy -> Medium -> Hard -> Easy
    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
