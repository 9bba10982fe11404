pub mod components;
pub mod config;
pub mod cues;
pub mod difficulty;
pub mod fsm;
pub mod geometry;
pub mod obstacles;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use cues::*;
pub use difficulty::*;
pub use fsm::*;
pub use geometry::*;
pub use obstacles::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use systems::*;

/// Run one frame of the gap runner simulation
///
/// Returns the reason the run ended, if it did. Physics advance once per call
/// regardless of `time.dt`; the delta only drives the spawn timer, so a long
/// stall is caught up with a spawn on the next frame.
#[allow(clippy::too_many_arguments)]
pub fn step(
    bird: &mut Bird,
    obstacles: &mut ObstacleStream,
    difficulty: &mut Difficulty,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<EndCause> {
    let dt = time.elapsed_ms();

    // 1. Spawn pillars on the timer
    spawn_pillars(obstacles, difficulty, dt, config, rng);

    // 2. Gravity
    integrate_bird(bird, config);

    // 3. Move, collide, score and prune pillars
    if sweep_pillars(bird, obstacles, difficulty, config, score, events) {
        return Some(EndCause::HitPillar);
    }

    // 4. Leaving the screen vertically ends the run on its own
    if bird_out_of_bounds(bird, config) {
        return Some(EndCause::OutOfBounds);
    }

    None
}
