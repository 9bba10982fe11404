use crate::{Bird, Config, Pillar};

/// Check the bird against one pillar
///
/// The bird is treated as a square box. A bird that overlaps the pillar
/// horizontally is safe only if its whole box sits inside the gap; otherwise it
/// collides when it touches the top or the bottom barrier.
pub fn hits_pillar(bird: &Bird, pillar: &Pillar, viewport_height: f32) -> bool {
    let b = bird.bounds();

    if !b.overlaps_x(pillar.x, pillar.right()) {
        return false;
    }

    let in_gap = b.top() >= pillar.top_height && b.bottom() <= pillar.bottom_y;
    if in_gap {
        return false;
    }

    let touching_top = b.bottom() > 0.0 && b.top() < pillar.top_height;
    let touching_bottom = b.top() < viewport_height && b.bottom() > pillar.bottom_y;
    touching_top || touching_bottom
}

/// Bird centre left the visible vertical range
pub fn bird_out_of_bounds(bird: &Bird, config: &Config) -> bool {
    config.out_of_bounds(bird.pos.y)
}
