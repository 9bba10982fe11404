use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Params;

/// Messages shown on the retry screen, one picked at random per run
pub const DEFAULT_END_MESSAGES: [&str; 3] = [
    "Enthada aura minus madbed",
    "Enthada pettunata??",
    "ba delight cafe ge poyi",
];

/// Game configuration
///
/// Every field has a default from [`Params`], so a host only needs to send the
/// fields it wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub bird_x: f32,
    pub bird_y: f32,
    pub bird_radius: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub pillar_width: f32,
    pub pillar_min_height: f32,
    pub pillar_speed: f32,
    pub pillar_gap: f32,
    pub jump_cue_count: u8,
    pub end_messages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_width: Params::VIEWPORT_WIDTH,
            viewport_height: Params::VIEWPORT_HEIGHT,
            bird_x: Params::BIRD_X,
            bird_y: Params::BIRD_Y,
            bird_radius: Params::BIRD_RADIUS,
            gravity: Params::GRAVITY,
            jump_velocity: Params::JUMP_VELOCITY,
            pillar_width: Params::PILLAR_WIDTH,
            pillar_min_height: Params::PILLAR_MIN_HEIGHT,
            pillar_speed: Params::PILLAR_SPEED,
            pillar_gap: Params::PILLAR_GAP,
            jump_cue_count: Params::JUMP_CUE_COUNT,
            end_messages: DEFAULT_END_MESSAGES.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Why a configuration was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The overrides were not valid JSON for [`Config`]
    Parse(String),
    /// A field holds a value the simulation can't run with
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "failed to parse config: {}", msg),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config field `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse partial JSON overrides on top of the defaults and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)] // NaN must fail too
    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("bird_x", self.bird_x),
            ("bird_y", self.bird_y),
            ("bird_radius", self.bird_radius),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("pillar_width", self.pillar_width),
            ("pillar_min_height", self.pillar_min_height),
            ("pillar_speed", self.pillar_speed),
            ("pillar_gap", self.pillar_gap),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a finite number",
                });
            }
        }

        let positive = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("bird_radius", self.bird_radius),
            ("pillar_width", self.pillar_width),
            ("pillar_speed", self.pillar_speed),
            ("pillar_gap", self.pillar_gap),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero",
                });
            }
        }

        if self.pillar_min_height < 0.0 {
            return Err(ConfigError::Invalid {
                field: "pillar_min_height",
                reason: "must not be negative",
            });
        }
        if !(self.jump_velocity < 0.0) {
            return Err(ConfigError::Invalid {
                field: "jump_velocity",
                reason: "must point upward (negative)",
            });
        }
        if self.jump_cue_count == 0 {
            return Err(ConfigError::Invalid {
                field: "jump_cue_count",
                reason: "at least one cue is required",
            });
        }
        if self.end_messages.is_empty() {
            return Err(ConfigError::Invalid {
                field: "end_messages",
                reason: "at least one message is required",
            });
        }
        Ok(())
    }

    /// Where the bird starts each run
    pub fn bird_spawn(&self) -> Vec2 {
        Vec2::new(self.bird_x, self.bird_y)
    }

    /// True when a y coordinate lies outside the visible vertical range
    pub fn out_of_bounds(&self, y: f32) -> bool {
        y > self.viewport_height || y < 0.0
    }
}
