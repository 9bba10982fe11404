use std::ops::ControlFlow;

use rand::Rng;

use crate::{Config, GameRng, Pillar};

/// Ordered pillars on screen plus the spawn timer
///
/// Pillars are kept in spawn order: the front of the list is the oldest
/// (leftmost), new pillars are appended at the back.
#[derive(Debug, Clone, Default)]
pub struct ObstacleStream {
    pub pillars: Vec<Pillar>,
    pub since_last_spawn_ms: f32,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.pillars.clear();
        self.since_last_spawn_ms = 0.0;
    }

    pub fn len(&self) -> usize {
        self.pillars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pillars.is_empty()
    }

    /// Advance the spawn timer. Returns true (and restarts the timer) once more
    /// than `interval_ms` has elapsed since the last spawn.
    pub fn spawn_due(&mut self, dt_ms: f32, interval_ms: f32) -> bool {
        self.since_last_spawn_ms += dt_ms;
        if self.since_last_spawn_ms > interval_ms {
            self.since_last_spawn_ms = 0.0;
            true
        } else {
            false
        }
    }

    /// Append a pillar at the right edge with a random top height
    ///
    /// The top height is drawn from `[min, viewport_height - gap - min]`. When
    /// the gap is too large for that range, the upper bound collapses to `min`.
    pub fn spawn(&mut self, config: &Config, gap: f32, rng: &mut GameRng) {
        let min = config.pillar_min_height;
        let max = (config.viewport_height - gap - min).max(min);
        let top_height = if max > min {
            rng.0.gen_range(min..=max)
        } else {
            min
        };

        self.pillars.push(Pillar::new(
            config.viewport_width,
            config.pillar_width,
            top_height,
            gap,
        ));
    }

    /// Hand each pillar to `visit`, oldest first. Stops as soon as `visit`
    /// breaks; later pillars are left untouched.
    pub fn sweep<F>(&mut self, mut visit: F) -> ControlFlow<()>
    where
        F: FnMut(&mut Pillar) -> ControlFlow<()>,
    {
        for pillar in &mut self.pillars {
            visit(pillar)?;
        }
        ControlFlow::Continue(())
    }

    /// Drop pillars whose right edge has left the screen. Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.pillars.len();
        self.pillars.retain(|p| !p.is_offscreen());
        before - self.pillars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_due_is_strictly_greater() {
        let mut stream = ObstacleStream::new();
        assert!(!stream.spawn_due(1000.0, 2000.0));
        assert!(!stream.spawn_due(1000.0, 2000.0), "Exactly the interval is not enough");
        assert!(stream.spawn_due(0.5, 2000.0));
        assert_eq!(stream.since_last_spawn_ms, 0.0, "Timer restarts on spawn");
    }

    #[test]
    fn test_spawn_places_pillar_at_right_edge() {
        let config = Config::new();
        let mut stream = ObstacleStream::new();
        let mut rng = GameRng::new(12345);

        stream.spawn(&config, 280.0, &mut rng);

        let pillar = &stream.pillars[0];
        assert_eq!(pillar.x, config.viewport_width);
        assert_eq!(pillar.width, config.pillar_width);
        assert!((pillar.gap() - 280.0).abs() < 1e-3);
        assert!(!pillar.passed);
    }

    #[test]
    fn test_spawn_top_height_in_range() {
        let config = Config::new();
        let mut stream = ObstacleStream::new();
        let mut rng = GameRng::new(12345);
        let gap = 280.0;

        for _ in 0..200 {
            stream.spawn(&config, gap, &mut rng);
        }

        let max = config.viewport_height - gap - config.pillar_min_height;
        for pillar in &stream.pillars {
            assert!(pillar.top_height >= config.pillar_min_height);
            assert!(pillar.top_height <= max);
        }
    }

    #[test]
    fn test_spawn_with_oversized_gap_uses_min_height() {
        let config = Config::new();
        let mut stream = ObstacleStream::new();
        let mut rng = GameRng::new(12345);

        stream.spawn(&config, 500.0, &mut rng);

        assert_eq!(stream.pillars[0].top_height, config.pillar_min_height);
        assert_eq!(stream.pillars[0].gap(), 500.0);
    }

    #[test]
    fn test_spawn_appends_in_order() {
        let config = Config::new();
        let mut stream = ObstacleStream::new();
        let mut rng = GameRng::new(12345);

        stream.spawn(&config, 280.0, &mut rng);
        stream.pillars[0].x = 100.0;
        stream.spawn(&config, 238.0, &mut rng);

        assert_eq!(stream.len(), 2);
        assert_eq!(stream.pillars[0].x, 100.0, "Oldest pillar stays at the front");
        assert_eq!(stream.pillars[1].x, config.viewport_width);
    }

    #[test]
    fn test_sweep_visits_every_pillar() {
        let mut stream = ObstacleStream::new();
        stream.pillars.push(Pillar::new(100.0, 60.0, 150.0, 280.0));
        stream.pillars.push(Pillar::new(300.0, 60.0, 150.0, 280.0));

        let mut visited = 0;
        let flow = stream.sweep(|pillar| {
            pillar.advance(2.5);
            visited += 1;
            ControlFlow::Continue(())
        });

        assert_eq!(flow, ControlFlow::Continue(()));
        assert_eq!(visited, 2);
        assert_eq!(stream.pillars[0].x, 97.5);
        assert_eq!(stream.pillars[1].x, 297.5);
    }

    #[test]
    fn test_sweep_stops_when_visitor_breaks() {
        let mut stream = ObstacleStream::new();
        stream.pillars.push(Pillar::new(100.0, 60.0, 150.0, 280.0));
        stream.pillars.push(Pillar::new(300.0, 60.0, 150.0, 280.0));

        let flow = stream.sweep(|pillar| {
            pillar.advance(2.0);
            ControlFlow::Break(())
        });

        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(stream.pillars[0].x, 98.0);
        assert_eq!(stream.pillars[1].x, 300.0, "Second pillar untouched");
    }

    #[test]
    fn test_prune_removes_every_offscreen_pillar() {
        let mut stream = ObstacleStream::new();
        // Adjacent offscreen pillars must both go
        stream.pillars.push(Pillar::new(-70.0, 60.0, 150.0, 280.0));
        stream.pillars.push(Pillar::new(-61.0, 60.0, 150.0, 280.0));
        stream.pillars.push(Pillar::new(-60.0, 60.0, 150.0, 280.0));
        stream.pillars.push(Pillar::new(200.0, 60.0, 150.0, 280.0));

        let removed = stream.prune();

        assert_eq!(removed, 2);
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.pillars[0].x, -60.0, "Right edge at 0 is kept");
        assert_eq!(stream.pillars[1].x, 200.0);
    }

    #[test]
    fn test_reset() {
        let config = Config::new();
        let mut stream = ObstacleStream::new();
        let mut rng = GameRng::new(12345);
        stream.spawn(&config, 280.0, &mut rng);
        stream.since_last_spawn_ms = 500.0;

        stream.reset();

        assert!(stream.is_empty());
        assert_eq!(stream.since_last_spawn_ms, 0.0);
    }
}
