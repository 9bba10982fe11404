use serde::{Deserialize, Serialize};

use crate::SoundCue;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32, // Milliseconds since the previous frame
}

impl Time {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    /// `dt` as usable spawn-timer time: negative and non-finite deltas count as zero
    pub fn elapsed_ms(&self) -> f32 {
        if self.dt.is_finite() {
            self.dt.max(0.0)
        } else {
            0.0
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 16.0 }
    }
}

/// Pillars cleared this run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seeded from the platform entropy source
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    HitPillar,
    OutOfBounds,
}

/// Notifications for the presentation and audio adapters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    JumpAccepted {
        cue: SoundCue,
    },
    Scored {
        score: u32,
    },
    Ended {
        score: u32,
        cause: EndCause,
        message: String,
    },
}

/// Events raised since the host last drained them
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub queue: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.queue)
    }
}
