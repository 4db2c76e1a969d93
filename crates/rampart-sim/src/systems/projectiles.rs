//! Projectile flight and impact resolution.
//!
//! Rounds seek their target id and never retarget; a round whose target is
//! gone self-terminates. A round spawned this tick does not move until the
//! next one, so point-blank shots still take a tick to land. Beams and arcs
//! already dealt their damage at fire time and only linger here.

use hecs::{Entity, World};
use rampart_core::components::*;
use rampart_core::types::Position;

use crate::systems::damage_enemy;

struct Impact {
    target: Entity,
    position: Position,
    damage: f64,
    splash_radius: f64,
}

pub fn run(world: &mut World, current_tick: u64) {
    // Step 1: Snapshot living enemies.
    let enemies: Vec<(Entity, u32, Position)> = world
        .query::<(&EnemyState, &Position)>()
        .iter()
        .filter(|(_, (enemy, _))| !enemy.dead && !enemy.reached_goal && enemy.health > 0.0)
        .map(|(entity, (enemy, position))| (entity, enemy.id, *position))
        .collect();

    // Step 2: Advance lingers and move rounds, queueing impacts.
    let mut impacts: Vec<Impact> = Vec::new();
    for (_entity, (projectile, position)) in
        world.query_mut::<(&mut ProjectileState, &mut Position)>()
    {
        if projectile.finished {
            continue;
        }
        match &mut projectile.kind {
            ProjectileKind::Beam { linger, .. } | ProjectileKind::Arc { linger, .. } => {
                if *linger > 0 {
                    *linger -= 1;
                }
                if *linger == 0 {
                    projectile.finished = true;
                }
            }
            ProjectileKind::Round {
                speed,
                impact_radius,
                splash_radius,
            } => {
                let (speed, impact_radius, splash_radius) =
                    (*speed, *impact_radius, *splash_radius);
                if projectile.spawned_tick == current_tick {
                    continue;
                }
                let target_id = match projectile.target {
                    Some(id) => id,
                    None => {
                        projectile.finished = true;
                        continue;
                    }
                };
                let (target, _, target_pos) =
                    match enemies.iter().find(|(_, id, _)| *id == target_id) {
                        Some(found) => found,
                        None => {
                            projectile.finished = true;
                            continue;
                        }
                    };
                let distance = position.distance_to(target_pos);
                if distance <= impact_radius.max(speed) {
                    *position = *target_pos;
                    impacts.push(Impact {
                        target: *target,
                        position: *target_pos,
                        damage: projectile.damage,
                        splash_radius,
                    });
                    projectile.finished = true;
                } else {
                    position.step_toward(target_pos, speed);
                }
            }
        }
    }

    // Step 3: Apply impacts.
    for impact in impacts {
        if impact.splash_radius > 0.0 {
            splash_damage(world, impact.position, impact.damage, impact.splash_radius);
        } else {
            damage_enemy(world, impact.target, impact.damage);
        }
    }
}

/// Linear-falloff splash: full damage at the center, zero at the radius.
pub(crate) fn splash_damage(world: &mut World, center: Position, damage: f64, radius: f64) {
    let mut hits: Vec<(Entity, f64)> = Vec::new();
    for (entity, (enemy, position)) in world.query::<(&EnemyState, &Position)>().iter() {
        if enemy.dead || enemy.reached_goal || enemy.health <= 0.0 {
            continue;
        }
        let distance = center.distance_to(position);
        if distance >= radius {
            continue;
        }
        hits.push((entity, damage * (1.0 - distance / radius)));
    }
    for (entity, amount) in hits {
        damage_enemy(world, entity, amount);
    }
}
