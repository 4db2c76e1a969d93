//! Cleanup system: removes settled enemies and finished effects.
//!
//! Runs last in the tick, after the resolver has settled deaths and leaks,
//! so nothing else sees a half-removed entity.

use hecs::{Entity, World};

use rampart_core::catalog::VariantConfig;
use rampart_core::components::{
    EmplacementState, EnemyState, MeleeUnitState, Placement, ProjectileState, ZoneState,
};
use rampart_core::enums::EmplacementKind;
use rampart_core::events::GameEvent;

use crate::economy::Economy;
use crate::topology::Topology;

/// Remove entities in a terminal state. Uses a pre-allocated buffer to
/// avoid per-tick allocation.
pub fn run(
    world: &mut World,
    topology: &mut Topology,
    economy: &mut Economy,
    config: &VariantConfig,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    // Remove settled enemies.
    for (entity, enemy) in world.query_mut::<&EnemyState>() {
        if enemy.dead || enemy.reached_goal {
            despawn_buffer.push(entity);
        }
    }

    // Remove finished projectiles, melee units, and zones.
    for (entity, projectile) in world.query_mut::<&ProjectileState>() {
        if projectile.finished {
            despawn_buffer.push(entity);
        }
    }
    for (entity, unit) in world.query_mut::<&MeleeUnitState>() {
        if unit.finished {
            despawn_buffer.push(entity);
        }
    }
    for (entity, zone) in world.query_mut::<&ZoneState>() {
        if zone.finished {
            despawn_buffer.push(entity);
        }
    }

    // Remove destroyed emplacements where the variant allows it, freeing
    // their slot and their energy reservation. The station never despawns;
    // its depletion is the loss condition.
    if config.emplacements_destructible {
        let mut destroyed: Vec<(Entity, u32, EmplacementKind, u32, Placement)> = Vec::new();
        for (entity, (state, placement)) in
            world.query_mut::<(&EmplacementState, &Placement)>()
        {
            if state.kind != EmplacementKind::Station && state.health <= 0.0 {
                destroyed.push((entity, state.id, state.kind, state.level, *placement));
            }
        }
        for (entity, id, kind, level, placement) in destroyed {
            if let Some(location) = placement.location() {
                topology.release(location);
            }
            if let Some(spec) = config.emplacement(kind) {
                economy.release_energy_delta(spec.energy_delta_at(level));
            }
            events.push(GameEvent::EmplacementDestroyed { id, kind });
            despawn_buffer.push(entity);
        }
    }

    // Despawn collected entities.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
