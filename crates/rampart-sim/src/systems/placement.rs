//! Emplacement position refresh.
//!
//! Slot positions move with ring rotation, so every emplacement's world
//! position is re-resolved from its placement each tick. Grid cells and the
//! core never move; re-resolving them is a no-op.

use hecs::World;
use rampart_core::components::Placement;
use rampart_core::types::Position;

use crate::topology::Topology;

pub fn run(world: &mut World, topology: &Topology) {
    for (_entity, (placement, position)) in world.query_mut::<(&Placement, &mut Position)>() {
        if let Some(resolved) = topology.resolved_position(*placement) {
            *position = resolved;
        }
    }
}
