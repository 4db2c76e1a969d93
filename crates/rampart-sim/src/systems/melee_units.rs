//! Deployed melee unit behavior: seek, strike, slow aura, lifespan.
//!
//! Units re-acquire when their target dies (unlike projectiles, which
//! self-terminate). Slow auras are re-applied every tick to every enemy
//! inside the aggro radius; the status system cleared last tick's set.

use hecs::{Entity, World};
use rampart_core::components::*;
use rampart_core::types::Position;
use rand::Rng;

use crate::systems::damage_enemy;

struct Strike {
    target: Entity,
    damage: f64,
    block_chance: f64,
    block_ticks: u32,
}

struct Aura {
    source: u32,
    factor: f64,
    center: Position,
    radius: f64,
}

pub fn run(world: &mut World, rng: &mut impl Rng) {
    // Step 1: Snapshot living enemies.
    let enemies: Vec<(Entity, u32, Position)> = world
        .query::<(&EnemyState, &Position)>()
        .iter()
        .filter(|(_, (enemy, _))| !enemy.dead && !enemy.reached_goal && enemy.health > 0.0)
        .map(|(entity, (enemy, position))| (entity, enemy.id, *position))
        .collect();

    // Step 2: Move, retarget, and queue strikes and auras.
    let mut strikes: Vec<Strike> = Vec::new();
    let mut auras: Vec<Aura> = Vec::new();
    for (_entity, (unit, position)) in world.query_mut::<(&mut MeleeUnitState, &mut Position)>() {
        if unit.finished {
            continue;
        }
        if unit.lifespan > 0 {
            unit.lifespan -= 1;
        }
        if unit.lifespan == 0 {
            unit.finished = true;
            continue;
        }
        if unit.attack_cooldown > 0 {
            unit.attack_cooldown -= 1;
        }

        if let Some(current) = unit.target {
            if !enemies.iter().any(|(_, id, _)| *id == current) {
                unit.target = None;
            }
        }
        if unit.target.is_none() {
            let mut best: Option<(u32, f64)> = None;
            for (_, id, enemy_pos) in &enemies {
                let distance = position.distance_to(enemy_pos);
                if best.map_or(true, |(_, held)| distance < held) {
                    best = Some((*id, distance));
                }
            }
            unit.target = best.map(|(id, _)| id);
        }

        if let Some(target_id) = unit.target {
            if let Some((entity, _, enemy_pos)) =
                enemies.iter().find(|(_, id, _)| *id == target_id)
            {
                if position.distance_to(enemy_pos) > unit.attack_range {
                    position.step_toward(enemy_pos, unit.speed);
                } else if unit.attack_cooldown == 0 {
                    strikes.push(Strike {
                        target: *entity,
                        damage: unit.damage,
                        block_chance: unit.block_chance,
                        block_ticks: unit.block_ticks,
                    });
                    unit.attack_cooldown = unit.attack_interval;
                }
            }
        }

        auras.push(Aura {
            source: unit.id,
            factor: unit.slow_factor,
            center: *position,
            radius: unit.aggro_radius,
        });
    }

    // Step 3: Apply strikes, rolling the block chance per hit.
    for strike in strikes {
        damage_enemy(world, strike.target, strike.damage);
        let blocked = rng.gen::<f64>() < strike.block_chance;
        if blocked {
            if let Ok(mut status) = world.get::<&mut StatusEffects>(strike.target) {
                status.block_ticks = status.block_ticks.max(strike.block_ticks);
            }
        }
    }

    // Step 4: Apply slow auras to every enemy inside each radius.
    for aura in auras {
        for (entity, _, enemy_pos) in &enemies {
            if aura.center.distance_to(enemy_pos) > aura.radius {
                continue;
            }
            if let Ok(mut status) = world.get::<&mut StatusEffects>(*entity) {
                status.slows.push(SlowEffect {
                    source: aura.source,
                    factor: aura.factor,
                });
            }
        }
    }
}
