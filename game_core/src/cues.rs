//! Random selection of jump sounds and end-of-run messages

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::GameRng;

/// Which jump sound the audio adapter should play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundCue {
    pub index: u8,
}

impl SoundCue {
    pub fn new(index: u8) -> Self {
        Self { index }
    }

    /// Pick one of `count` cues uniformly
    pub fn pick(rng: &mut GameRng, count: u8) -> Self {
        Self::new(rng.0.gen_range(0..count.max(1)))
    }

    /// The first cue silences every other sound, background music included,
    /// and the music only comes back once it has finished.
    pub fn is_exclusive(&self) -> bool {
        self.index == 0
    }
}

/// Pick a message from the pool, or `None` if the pool is empty
pub fn pick_message<'a>(rng: &mut GameRng, pool: &'a [String]) -> Option<&'a str> {
    if pool.is_empty() {
        return None;
    }
    let i = rng.0.gen_range(0..pool.len());
    Some(pool[i].as_str())
}
