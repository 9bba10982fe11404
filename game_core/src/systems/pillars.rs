use std::ops::ControlFlow;

use crate::systems::{check_scoring, hits_pillar};
use crate::{Bird, Config, Difficulty, Events, GameEvent, ObstacleStream, Score};

/// Move, collide and score every pillar in spawn order, then prune the ones
/// that have left the screen.
///
/// Stops at the first collision and returns true. Each score bump refreshes
/// `difficulty`, so pillars later in the list move at the new speed.
pub fn sweep_pillars(
    bird: &Bird,
    obstacles: &mut ObstacleStream,
    difficulty: &mut Difficulty,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> bool {
    let flow = obstacles.sweep(|pillar| {
        pillar.advance(difficulty.speed);
        if hits_pillar(bird, pillar, config.viewport_height) {
            return ControlFlow::Break(());
        }
        if check_scoring(bird, pillar, score) {
            *difficulty = Difficulty::for_score(score.value, config);
            events.push(GameEvent::Scored { score: score.value });
        }
        ControlFlow::Continue(())
    });

    obstacles.prune();
    flow.is_break()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DifficultyTier, Pillar};

    fn setup() -> (Config, Bird, ObstacleStream, Difficulty, Score, Events) {
        let config = Config::new();
        let bird = Bird::spawn(&config);
        let difficulty = Difficulty::base(&config);
        (
            config,
            bird,
            ObstacleStream::new(),
            difficulty,
            Score::new(),
            Events::new(),
        )
    }

    #[test]
    fn test_pillar_moves_by_current_speed() {
        let (config, bird, mut obstacles, mut difficulty, mut score, mut events) = setup();
        obstacles.pillars.push(Pillar::new(200.0, 60.0, 200.0, 280.0));

        let hit = sweep_pillars(
            &bird,
            &mut obstacles,
            &mut difficulty,
            &config,
            &mut score,
            &mut events,
        );

        assert!(!hit);
        assert_eq!(obstacles.pillars[0].x, 198.0);
    }

    #[test]
    fn test_passing_pillar_scores_and_emits_event() {
        let (config, bird, mut obstacles, mut difficulty, mut score, mut events) = setup();
        // Right edge goes from 51 to 49, past the bird at x = 50; bird is in the gap
        obstacles.pillars.push(Pillar::new(-9.0, 60.0, 200.0, 280.0));

        let hit = sweep_pillars(
            &bird,
            &mut obstacles,
            &mut difficulty,
            &config,
            &mut score,
            &mut events,
        );

        assert!(!hit);
        assert_eq!(score.value, 1);
        assert_eq!(events.queue, vec![GameEvent::Scored { score: 1 }]);
    }

    #[test]
    fn test_score_refreshes_difficulty() {
        let (config, bird, mut obstacles, mut difficulty, mut score, mut events) = setup();
        score.value = 9;
        obstacles.pillars.push(Pillar::new(-9.0, 60.0, 200.0, 280.0));

        sweep_pillars(
            &bird,
            &mut obstacles,
            &mut difficulty,
            &config,
            &mut score,
            &mut events,
        );

        assert_eq!(score.value, 10);
        assert_eq!(difficulty.tier, DifficultyTier::Faster);
    }

    #[test]
    fn test_tier_change_speeds_up_later_pillars_same_frame() {
        let (config, bird, mut obstacles, mut difficulty, mut score, mut events) = setup();
        score.value = 9;
        obstacles.pillars.push(Pillar::new(-9.0, 60.0, 200.0, 280.0));
        obstacles.pillars.push(Pillar::new(200.0, 60.0, 200.0, 280.0));

        sweep_pillars(
            &bird,
            &mut obstacles,
            &mut difficulty,
            &config,
            &mut score,
            &mut events,
        );

        assert_eq!(score.value, 10);
        assert_eq!(obstacles.pillars[0].x, -11.0, "Scoring pillar moved at base speed");
        assert_eq!(obstacles.pillars[1].x, 197.5, "Next pillar moved at the faster speed");
    }

    #[test]
    fn test_collision_stops_the_sweep() {
        let (config, mut bird, mut obstacles, mut difficulty, mut score, mut events) = setup();
        bird.pos.y = 100.0; // inside the top barrier
        obstacles.pillars.push(Pillar::new(40.0, 60.0, 200.0, 280.0));
        obstacles.pillars.push(Pillar::new(300.0, 60.0, 200.0, 280.0));

        let hit = sweep_pillars(
            &bird,
            &mut obstacles,
            &mut difficulty,
            &config,
            &mut score,
            &mut events,
        );

        assert!(hit);
        assert_eq!(obstacles.pillars[1].x, 300.0, "Pillars after the hit are not processed");
    }

    #[test]
    fn test_offscreen_pillar_is_pruned() {
        let (config, bird, mut obstacles, mut difficulty, mut score, mut events) = setup();
        obstacles.pillars.push(Pillar::new(-59.0, 60.0, 200.0, 280.0));
        obstacles.pillars[0].passed = true;
        obstacles.pillars.push(Pillar::new(200.0, 60.0, 200.0, 280.0));

        sweep_pillars(
            &bird,
            &mut obstacles,
            &mut difficulty,
            &config,
            &mut score,
            &mut events,
        );

        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles.pillars[0].x, 198.0);
        assert_eq!(score.value, 0, "Already-passed pillar doesn't score again");
    }
}
