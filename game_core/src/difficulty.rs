use serde::{Deserialize, Serialize};

use crate::{Config, Params};

/// Score bucket that selects the pillar parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyTier {
    Base,
    Faster,
    Fastest,
}

impl DifficultyTier {
    pub fn for_score(score: u32) -> Self {
        if score >= Params::FASTEST_SCORE {
            DifficultyTier::Fastest
        } else if score >= Params::FASTER_SCORE {
            DifficultyTier::Faster
        } else {
            DifficultyTier::Base
        }
    }

    pub fn speed_multiplier(&self) -> f32 {
        match self {
            DifficultyTier::Base => 1.0,
            DifficultyTier::Faster => Params::FASTER_SPEED_MUL,
            DifficultyTier::Fastest => Params::FASTEST_SPEED_MUL,
        }
    }

    pub fn gap_multiplier(&self) -> f32 {
        match self {
            DifficultyTier::Base => 1.0,
            DifficultyTier::Faster => Params::FASTER_GAP_MUL,
            DifficultyTier::Fastest => Params::FASTEST_GAP_MUL,
        }
    }

    pub fn spawn_interval_ms(&self) -> f32 {
        match self {
            DifficultyTier::Base => Params::SPAWN_INTERVAL_MS,
            DifficultyTier::Faster => Params::FASTER_SPAWN_INTERVAL_MS,
            DifficultyTier::Fastest => Params::FASTEST_SPAWN_INTERVAL_MS,
        }
    }
}

/// Pillar parameters in effect for the current score
///
/// `gap` only applies to pillars spawned from now on; pillars already on
/// screen keep the gap they were created with. `speed` applies to every pillar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub tier: DifficultyTier,
    pub speed: f32,
    pub gap: f32,
    pub spawn_interval_ms: f32,
}

impl Difficulty {
    pub fn for_score(score: u32, config: &Config) -> Self {
        let tier = DifficultyTier::for_score(score);
        Self {
            tier,
            speed: config.pillar_speed * tier.speed_multiplier(),
            gap: config.pillar_gap * tier.gap_multiplier(),
            spawn_interval_ms: tier.spawn_interval_ms(),
        }
    }

    /// Parameters at the start of a run
    pub fn base(config: &Config) -> Self {
        Self::for_score(0, config)
    }
}
