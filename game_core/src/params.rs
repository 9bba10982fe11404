/// Game tuning parameters for the gap runner
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Viewport (world units == canvas pixels)
    pub const VIEWPORT_WIDTH: f32 = 360.0;
    pub const VIEWPORT_HEIGHT: f32 = 640.0;

    // Bird
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_Y: f32 = 300.0;
    pub const BIRD_RADIUS: f32 = 20.0; // sprite is 50x50, hitbox is a bit smaller
    pub const GRAVITY: f32 = 0.6; // velocity gained per tick
    pub const JUMP_VELOCITY: f32 = -8.0; // replaces velocity on jump

    // Pillars
    pub const PILLAR_WIDTH: f32 = 60.0;
    pub const PILLAR_MIN_HEIGHT: f32 = 100.0;
    pub const PILLAR_SPEED: f32 = 2.0; // units per tick at base difficulty
    pub const PILLAR_GAP: f32 = 280.0; // gap at base difficulty

    // Difficulty tiers
    pub const FASTER_SCORE: u32 = 10;
    pub const FASTEST_SCORE: u32 = 20;
    pub const FASTER_SPEED_MUL: f32 = 1.25;
    pub const FASTER_GAP_MUL: f32 = 0.92;
    pub const FASTEST_SPEED_MUL: f32 = 1.5;
    pub const FASTEST_GAP_MUL: f32 = 0.85;
    pub const SPAWN_INTERVAL_MS: f32 = 2000.0;
    pub const FASTER_SPAWN_INTERVAL_MS: f32 = 1850.0;
    pub const FASTEST_SPAWN_INTERVAL_MS: f32 = 1700.0;

    // Audio
    pub const JUMP_CUE_COUNT: u8 = 3;
}
