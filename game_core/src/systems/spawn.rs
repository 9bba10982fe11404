use crate::{Config, Difficulty, GameRng, ObstacleStream};

/// Advance the spawn timer and spawn a pillar when the interval has elapsed
///
/// New pillars take the gap of the current difficulty. Returns true if one was spawned.
pub fn spawn_pillars(
    obstacles: &mut ObstacleStream,
    difficulty: &Difficulty,
    dt_ms: f32,
    config: &Config,
    rng: &mut GameRng,
) -> bool {
    if !obstacles.spawn_due(dt_ms, difficulty.spawn_interval_ms) {
        return false;
    }
    obstacles.spawn(config, difficulty.gap, rng);
    true
}
