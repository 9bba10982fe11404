use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (y grows downward, like the canvas)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap on the x axis (touching edges don't count)
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.right() > left && self.left() < right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center_size() {
        let aabb = Aabb::from_center_size(Vec2::new(50.0, 300.0), Vec2::splat(40.0));
        assert_eq!(aabb.left(), 30.0);
        assert_eq!(aabb.right(), 70.0);
        assert_eq!(aabb.top(), 280.0);
        assert_eq!(aabb.bottom(), 320.0);
        assert_eq!(aabb.size(), Vec2::splat(40.0));
    }

    #[test]
    fn test_overlaps_x_excludes_touching_edges() {
        let aabb = Aabb::new(Vec2::new(30.0, 0.0), Vec2::new(70.0, 10.0));
        assert!(aabb.overlaps_x(60.0, 120.0));
        assert!(aabb.overlaps_x(-20.0, 40.0));
        assert!(!aabb.overlaps_x(70.0, 130.0), "Touching right edge");
        assert!(!aabb.overlaps_x(-30.0, 30.0), "Touching left edge");
    }
}
