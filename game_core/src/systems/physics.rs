use crate::{Bird, Config};

/// Apply one tick of gravity, then move the bird by its velocity
pub fn integrate_bird(bird: &mut Bird, config: &Config) {
    bird.vel += config.gravity;
    bird.pos.y += bird.vel;
}

/// Jump impulse: replaces the current velocity, so every jump is the same strength
pub fn apply_jump(bird: &mut Bird, config: &Config) {
    bird.vel = config.jump_velocity;
}
