use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Aabb, Config};

/// The player-controlled body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub pos: Vec2, // x never changes during a run
    pub vel: f32,  // vertical only, positive = down
    pub radius: f32,
}

impl Bird {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: 0.0,
            radius,
        }
    }

    /// Bird at its start position, at rest
    pub fn spawn(config: &Config) -> Self {
        Self::new(config.bird_spawn(), config.bird_radius)
    }

    /// Collision box: a square of side `2 * radius` centred on the bird
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.radius * 2.0))
    }
}

/// A top/bottom barrier pair with a safe gap between them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pillar {
    pub x: f32,          // left edge
    pub width: f32,
    pub top_height: f32, // top barrier spans [0, top_height]
    pub bottom_y: f32,   // bottom barrier spans [bottom_y, viewport height]
    pub passed: bool,
}

impl Pillar {
    pub fn new(x: f32, width: f32, top_height: f32, gap: f32) -> Self {
        Self {
            x,
            width,
            top_height,
            bottom_y: top_height + gap,
            passed: false,
        }
    }

    /// Trailing edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Gap size, fixed at spawn
    pub fn gap(&self) -> f32 {
        self.bottom_y - self.top_height
    }

    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Fully behind the left edge of the screen
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }

    pub fn rect(&self, viewport_height: f32) -> PillarRect {
        PillarRect {
            top: Aabb::new(
                Vec2::new(self.x, 0.0),
                Vec2::new(self.right(), self.top_height),
            ),
            bottom: Aabb::new(
                Vec2::new(self.x, self.bottom_y),
                Vec2::new(self.right(), viewport_height),
            ),
        }
    }
}

/// Screen rectangles of a pillar, for presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarRect {
    pub top: Aabb,
    pub bottom: Aabb,
}
