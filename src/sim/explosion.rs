//! Area-of-effect explosion propagation
//!
//! When an explosive block dies, everything nearby takes one hit. The blast
//! area is a rectangle three times the trigger's size, centered on it. A
//! single pass, no recursion: a chained explosive destroyed by the blast
//! does not itself go off. Revisit at the call site in tick.rs if cascading
//! is ever wanted.

use glam::Vec2;

use super::body::{Aabb, Block};
use super::effects::Effects;

/// Blast rectangle for a trigger block: expand one full width/height
/// outward from the trigger's top-left corner, i.e. 3x its size centered
/// on it.
pub fn blast_area(trigger: &Block) -> Aabb {
    Aabb::new(trigger.pos - trigger.size, trigger.size * 3.0)
}

/// Apply a destroyed trigger block's blast to the rest of the level.
///
/// Every other non-destroyed block whose bounds intersect the blast area
/// takes exactly one hit. Blocks destroyed by the blast award their score
/// value and raise a visual-effect request at their center. The trigger
/// itself is always excluded. Returns the total score awarded.
pub fn propagate_explosion(
    trigger_index: usize,
    blocks: &mut [Block],
    effects: &mut dyn Effects,
) -> u32 {
    let Some(trigger) = blocks.get(trigger_index) else {
        return 0;
    };
    let area = blast_area(trigger);
    let origin = trigger.center();
    let color = trigger.color();

    effects.explosion_triggered(origin, color);

    let mut score = 0;
    for (i, block) in blocks.iter_mut().enumerate() {
        if i == trigger_index || block.destroyed {
            continue;
        }
        if block.aabb().intersects(&area) {
            block.hit();
            if block.destroyed {
                score += block.score_value();
                effects.block_destroyed(block.score_value(), block.center(), block.color());
            }
        }
    }

    log::debug!(
        "explosion at ({:.0}, {:.0}) awarded {} points",
        origin.x,
        origin.y,
        score
    );
    score
}
