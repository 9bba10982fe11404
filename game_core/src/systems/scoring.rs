use crate::{Bird, Pillar, Score};

/// Score a pillar once the bird is past its trailing edge
///
/// Returns true if the score went up. A pillar scores at most once.
pub fn check_scoring(bird: &Bird, pillar: &mut Pillar, score: &mut Score) -> bool {
    if pillar.passed || bird.pos.x <= pillar.right() {
        return false;
    }
    pillar.passed = true;
    score.increment();
    true
}
