//! Status effect upkeep.
//!
//! Slows are cleared here and rebuilt by whatever auras and zones still
//! overlap this tick, so expired sources drop off without bookkeeping.
//! Block ticks persist across ticks and count down.

use hecs::World;
use rampart_core::components::StatusEffects;

pub fn run(world: &mut World) {
    for (_entity, status) in world.query_mut::<&mut StatusEffects>() {
        status.slows.clear();
        if status.block_ticks > 0 {
            status.block_ticks -= 1;
        }
    }
}
