//! Emplacement fire control: target maintenance, cooldowns, and damage
//! delivery for every catalog delivery kind.
//!
//! Decisions and effects are split into two passes. The decide pass walks
//! emplacements, revalidates or re-acquires targets, and queues fire
//! orders; the apply pass spawns projectiles, resolves instant damage, and
//! deploys units and zones. The split keeps world borrows disjoint.

use std::f64::consts::TAU;

use glam::DVec2;
use hecs::{Entity, World};

use rampart_core::catalog::{DamageDelivery, MeleeUnitSpec, VariantConfig, ZoneSpec};
use rampart_core::components::*;
use rampart_core::constants::UNIT_DEPLOY_RADIUS;
use rampart_core::enums::TargetingPolicy;
use rampart_core::types::Position;

use crate::economy::Economy;
use crate::systems::damage_enemy;
use crate::topology::Topology;
use crate::world_setup;

/// A live enemy eligible for targeting this tick.
struct Candidate {
    entity: Entity,
    id: u32,
    position: Position,
    progress: f64,
}

enum FireOrder {
    Round {
        from: Position,
        target: u32,
        damage: f64,
        speed: f64,
        impact_radius: f64,
        splash_radius: f64,
    },
    Beam {
        from: Position,
        target: Entity,
        target_id: u32,
        to: Position,
        damage: f64,
    },
    Chain {
        from: Position,
        primary: Entity,
        primary_id: u32,
        primary_pos: Position,
        damage: f64,
        max_hops: u32,
        hop_range: f64,
        decay: f64,
        min_hop_damage: f64,
    },
    Deploy {
        from: Position,
        spec: MeleeUnitSpec,
        count: u32,
        damage: f64,
    },
    Wall {
        from: Position,
        spec: ZoneSpec,
        lifetime: u32,
    },
}

/// Run fire control for one tick.
pub fn run(
    world: &mut World,
    config: &VariantConfig,
    topology: &Topology,
    economy: &Economy,
    next_unit_id: &mut u32,
    current_tick: u64,
) {
    // Step 1: Snapshot living enemies with their traversal progress.
    let candidates: Vec<Candidate> = world
        .query::<(&EnemyState, &Position, Option<&PathProgress>)>()
        .iter()
        .filter(|(_, (enemy, _, _))| !enemy.dead && !enemy.reached_goal && enemy.health > 0.0)
        .map(|(entity, (enemy, position, progress))| Candidate {
            entity,
            id: enemy.id,
            position: *position,
            progress: topology.goal_progress(position, progress),
        })
        .collect();

    // Step 2: Decide which emplacements fire and queue their orders.
    let mut orders: Vec<FireOrder> = Vec::new();
    for (_entity, (state, position)) in world.query_mut::<(&mut EmplacementState, &Position)>() {
        let spec = match config.emplacement(state.kind) {
            Some(spec) => spec,
            None => continue,
        };
        if matches!(spec.delivery, DamageDelivery::Support) {
            continue;
        }
        if state.cooldown > 0 {
            state.cooldown -= 1;
        }

        // Targets must stay alive and strictly within range or be dropped.
        let range = spec.range_at(state.level);
        if let Some(current) = state.target {
            let held = candidates
                .iter()
                .any(|c| c.id == current && c.position.distance_to(position) < range);
            if !held {
                state.target = None;
            }
        }
        if state.target.is_none() {
            state.target = select_target(&candidates, position, range, spec.targeting);
        }

        if state.cooldown > 0 {
            continue;
        }
        let target_id = match state.target {
            Some(id) => id,
            None => continue,
        };
        let target = match candidates.iter().find(|c| c.id == target_id) {
            Some(candidate) => candidate,
            None => continue,
        };
        // Energy consumers hold fire while the ledger is overdrawn; the
        // cooldown stays at zero so they resume as soon as it recovers.
        if spec.energy_delta_at(state.level) > 0.0 && !economy.has_energy() {
            continue;
        }

        let damage = spec.damage_at(state.level);
        let order = match &spec.delivery {
            DamageDelivery::Support => continue,
            DamageDelivery::Direct => FireOrder::Beam {
                from: *position,
                target: target.entity,
                target_id,
                to: target.position,
                damage,
            },
            DamageDelivery::Homing {
                speed,
                impact_radius,
            } => FireOrder::Round {
                from: *position,
                target: target_id,
                damage,
                speed: *speed,
                impact_radius: *impact_radius,
                splash_radius: 0.0,
            },
            DamageDelivery::Splash {
                speed,
                impact_radius,
                splash_radius,
            } => FireOrder::Round {
                from: *position,
                target: target_id,
                damage,
                speed: *speed,
                impact_radius: *impact_radius,
                splash_radius: *splash_radius,
            },
            DamageDelivery::Chain {
                max_hops,
                hop_range,
                decay,
                min_hop_damage,
            } => FireOrder::Chain {
                from: *position,
                primary: target.entity,
                primary_id: target_id,
                primary_pos: target.position,
                damage,
                max_hops: *max_hops,
                hop_range: *hop_range,
                decay: *decay,
                min_hop_damage: *min_hop_damage,
            },
            DamageDelivery::MeleeDeployment(unit) => FireOrder::Deploy {
                from: *position,
                spec: *unit,
                count: unit.count_at(state.level),
                damage: unit.damage
                    * spec
                        .scaling
                        .damage_growth
                        .powi(state.level.saturating_sub(1) as i32),
            },
            DamageDelivery::Barrier(zone) => FireOrder::Wall {
                from: *position,
                spec: *zone,
                lifetime: zone.lifetime_at(state.level),
            },
        };
        orders.push(order);
        state.cooldown = spec.fire_interval_at(state.level);
    }

    // Step 3: Apply the queued orders.
    for order in orders {
        match order {
            FireOrder::Round {
                from,
                target,
                damage,
                speed,
                impact_radius,
                splash_radius,
            } => {
                let id = alloc(next_unit_id);
                world_setup::spawn_round(
                    world,
                    id,
                    from,
                    target,
                    damage,
                    speed,
                    impact_radius,
                    splash_radius,
                    current_tick,
                );
            }
            FireOrder::Beam {
                from,
                target,
                target_id,
                to,
                damage,
            } => {
                damage_enemy(world, target, damage);
                let id = alloc(next_unit_id);
                world_setup::spawn_beam(world, id, from, to, damage, target_id, current_tick);
            }
            FireOrder::Chain {
                from,
                primary,
                primary_id,
                primary_pos,
                damage,
                max_hops,
                hop_range,
                decay,
                min_hop_damage,
            } => {
                let id = alloc(next_unit_id);
                resolve_chain(
                    world,
                    id,
                    from,
                    primary,
                    primary_id,
                    primary_pos,
                    damage,
                    max_hops,
                    hop_range,
                    decay,
                    min_hop_damage,
                    current_tick,
                );
            }
            FireOrder::Deploy {
                from,
                spec,
                count,
                damage,
            } => {
                // Units fan out on a small circle so they do not stack.
                for index in 0..count {
                    let angle = index as f64 * TAU / count.max(1) as f64;
                    let offset = DVec2::from_angle(angle) * UNIT_DEPLOY_RADIUS;
                    let position = Position::from_dvec2(from.to_dvec2() + offset);
                    let id = alloc(next_unit_id);
                    world_setup::spawn_melee_unit(world, &spec, position, damage, id);
                }
            }
            FireOrder::Wall {
                from,
                spec,
                lifetime,
            } => {
                deploy_wall(world, topology, &spec, from, lifetime, next_unit_id);
            }
        }
    }
}

/// Pick a target among in-range candidates per the emplacement's policy.
/// Ties resolve to the first candidate found.
fn select_target(
    candidates: &[Candidate],
    position: &Position,
    range: f64,
    policy: TargetingPolicy,
) -> Option<u32> {
    let mut best: Option<(u32, f64)> = None;
    for candidate in candidates {
        let distance = candidate.position.distance_to(position);
        if distance >= range {
            continue;
        }
        let metric = match policy {
            TargetingPolicy::NearestInRange => distance,
            TargetingPolicy::FurthestAlong => candidate.progress,
        };
        let better = match (&best, policy) {
            (None, _) => true,
            (Some((_, held)), TargetingPolicy::NearestInRange) => metric < *held,
            (Some((_, held)), TargetingPolicy::FurthestAlong) => metric > *held,
        };
        if better {
            best = Some((candidate.id, metric));
        }
    }
    best.map(|(id, _)| id)
}

/// Full damage to the primary, then arcs to the nearest unchained living
/// enemy within hop range, decaying per hop. Spawns the lingering arc trace.
#[allow(clippy::too_many_arguments)]
pub(crate) fn resolve_chain(
    world: &mut World,
    id: u32,
    from: Position,
    primary: Entity,
    primary_id: u32,
    primary_pos: Position,
    damage: f64,
    max_hops: u32,
    hop_range: f64,
    decay: f64,
    min_hop_damage: f64,
    current_tick: u64,
) {
    damage_enemy(world, primary, damage);
    let mut visited = vec![primary_id];
    let mut links = vec![primary_pos];
    let mut last_pos = primary_pos;
    let mut hop_damage = damage * decay;
    let mut hops = 0;
    while hops < max_hops && hop_damage > min_hop_damage {
        let mut best: Option<(Entity, u32, Position, f64)> = None;
        for (entity, (enemy, position)) in world.query::<(&EnemyState, &Position)>().iter() {
            if enemy.dead || enemy.reached_goal || enemy.health <= 0.0 {
                continue;
            }
            if visited.contains(&enemy.id) {
                continue;
            }
            let distance = last_pos.distance_to(position);
            if distance >= hop_range {
                continue;
            }
            if best.as_ref().map_or(true, |(_, _, _, held)| distance < *held) {
                best = Some((entity, enemy.id, *position, distance));
            }
        }
        match best {
            Some((entity, enemy_id, position, _)) => {
                damage_enemy(world, entity, hop_damage);
                visited.push(enemy_id);
                links.push(position);
                last_pos = position;
                hop_damage *= decay;
                hops += 1;
            }
            None => break,
        }
    }
    world_setup::spawn_arc(world, id, from, links, current_tick);
}

/// Deploy a wall of zones perpendicular to the goal direction.
fn deploy_wall(
    world: &mut World,
    topology: &Topology,
    spec: &ZoneSpec,
    from: Position,
    lifetime: u32,
    next_unit_id: &mut u32,
) {
    let goal = topology.goal_point();
    let mut direction = (goal.to_dvec2() - from.to_dvec2()).normalize_or_zero();
    if direction == DVec2::ZERO {
        direction = DVec2::X;
    }
    let base = from.to_dvec2() + direction * spec.deploy_distance;
    let perpendicular = DVec2::new(-direction.y, direction.x);
    for index in 0..spec.wall_size {
        let lateral = (index as f64 - (spec.wall_size as f64 - 1.0) / 2.0) * spec.wall_spacing;
        let position = Position::from_dvec2(base + perpendicular * lateral);
        let id = alloc(next_unit_id);
        world_setup::spawn_zone(world, spec, position, lifetime, id);
    }
}

fn alloc(next_unit_id: &mut u32) -> u32 {
    let id = *next_unit_id;
    *next_unit_id += 1;
    id
}
