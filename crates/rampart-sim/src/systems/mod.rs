//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state; all state lives in components or in
//! the engine-held director, economy, and topology.

pub mod cleanup;
pub mod emplacement_fire;
pub mod melee_units;
pub mod movement;
pub mod placement;
pub mod projectiles;
pub mod resolve;
pub mod snapshot;
pub mod status;
pub mod wave_spawner;
pub mod zones;

use hecs::{Entity, World};
use rampart_core::components::EnemyState;

/// Apply damage to a living enemy, clamping health at zero. Dead or leaked
/// enemies ignore further damage; the resolver settles them first.
pub(crate) fn damage_enemy(world: &mut World, entity: Entity, amount: f64) {
    if let Ok(mut enemy) = world.get::<&mut EnemyState>(entity) {
        if enemy.dead || enemy.reached_goal || enemy.health <= 0.0 {
            return;
        }
        enemy.health = (enemy.health - amount).max(0.0);
    }
}
