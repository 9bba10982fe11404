//! One owned game session: the state machine plus everything a run mutates

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::systems::apply_jump;
use crate::{
    pick_message, step, Bird, Config, Difficulty, DifficultyTier, EndCause, Events, FsmState,
    GameAction, GameEvent, GameFsm, GameRng, ObstacleStream, PillarRect, Score, SoundCue, Time,
    TransitionResult,
};

/// Read-only view of a frame for the presentation adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: FsmState,
    pub bird: Vec2,
    pub bird_radius: f32,
    pub pillars: Vec<PillarRect>,
    pub score: u32,
    pub tier: DifficultyTier,
    pub viewport: Vec2,
}

/// A game and all its state
///
/// The host drives it: `start`/`restart` from the screens, `on_jump` from input,
/// `tick` once per display frame, then `drain_events` and `snapshot` to present.
pub struct GameSession {
    pub fsm: GameFsm,
    pub bird: Bird,
    pub obstacles: ObstacleStream,
    pub difficulty: Difficulty,
    pub score: Score,
    pub time: Time,
    pub events: Events,
    pub rng: GameRng,
    pub config: Config,
}

impl GameSession {
    pub fn new(config: Config, rng: GameRng) -> Self {
        Self {
            fsm: GameFsm::new(),
            bird: Bird::spawn(&config),
            obstacles: ObstacleStream::new(),
            difficulty: Difficulty::base(&config),
            score: Score::new(),
            time: Time::new(0.0),
            events: Events::new(),
            rng,
            config,
        }
    }

    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::new(config, GameRng::new(seed))
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    /// Menu -> Running with a fresh run
    pub fn start(&mut self) -> TransitionResult {
        self.begin(GameAction::Start)
    }

    /// Ended -> Running with a fresh run
    pub fn restart(&mut self) -> TransitionResult {
        self.begin(GameAction::Restart)
    }

    fn begin(&mut self, action: GameAction) -> TransitionResult {
        let result = self.fsm.transition(action);
        if result.success {
            self.reset();
            self.events.push(GameEvent::Started);
        }
        result
    }

    fn reset(&mut self) {
        self.bird = Bird::spawn(&self.config);
        self.obstacles.reset();
        self.score = Score::new();
        self.difficulty = Difficulty::base(&self.config);
        self.time = Time::new(0.0);
        self.events.clear();
    }

    /// Jump input. Ignored unless a run is in progress; returns whether it was applied.
    pub fn on_jump(&mut self) -> bool {
        if !self.fsm.is_running() {
            return false;
        }
        apply_jump(&mut self.bird, &self.config);
        let cue = SoundCue::pick(&mut self.rng, self.config.jump_cue_count);
        self.events.push(GameEvent::JumpAccepted { cue });
        true
    }

    /// Advance one display frame of `dt_ms` milliseconds. No-op unless running.
    pub fn tick(&mut self, dt_ms: f32) -> Option<EndCause> {
        if !self.fsm.is_running() {
            return None;
        }
        self.time.dt = dt_ms;

        let cause = step(
            &mut self.bird,
            &mut self.obstacles,
            &mut self.difficulty,
            &mut self.time,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        )?;

        self.end(cause);
        Some(cause)
    }

    fn end(&mut self, cause: EndCause) {
        self.fsm.transition(GameAction::Crash);
        let message = pick_message(&mut self.rng, &self.config.end_messages)
            .map(str::to_owned)
            .unwrap_or_default();
        self.events.push(GameEvent::Ended {
            score: self.score.value,
            cause,
            message,
        });
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state(),
            bird: self.bird.pos,
            bird_radius: self.bird.radius,
            pillars: self
                .obstacles
                .pillars
                .iter()
                .map(|p| p.rect(self.config.viewport_height))
                .collect(),
            score: self.score.value,
            tier: self.difficulty.tier,
            viewport: Vec2::new(self.config.viewport_width, self.config.viewport_height),
        }
    }
}
