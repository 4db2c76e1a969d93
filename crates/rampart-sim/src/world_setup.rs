//! Entity spawn factories for the simulation world.
//!
//! Creates enemies, emplacements, projectiles, melee units, and zones with
//! appropriate component bundles. Stats are resolved from the catalog at
//! spawn time; entities carry only mutable state.

use hecs::{Entity, World};
use rand::Rng;

use rampart_core::catalog::{EmplacementSpec, MeleeUnitSpec, VariantConfig, ZoneSpec};
use rampart_core::components::*;
use rampart_core::constants::{ARC_LINGER_TICKS, BEAM_LINGER_TICKS};
use rampart_core::enums::EnemyKind;
use rampart_core::types::Position;

use crate::topology::Topology;

/// Spawn one enemy at the topology's spawn point with wave-scaled stats.
/// Returns None for kinds missing from the catalog.
pub fn spawn_enemy(
    world: &mut World,
    config: &VariantConfig,
    topology: &Topology,
    kind: EnemyKind,
    wave: u32,
    id: u32,
    rng: &mut impl Rng,
) -> Option<Entity> {
    let spec = config.enemy(kind)?;
    let scaling = &config.waves.scaling;
    let difficulty = config.difficulty_scaling();
    let health = spec.health_at(wave, scaling, difficulty);
    let state = EnemyState {
        id,
        kind,
        wave,
        health,
        max_health: health,
        base_speed: spec.speed_at(wave, scaling, difficulty),
        radius: spec.radius,
        dead: false,
        reached_goal: false,
    };
    let position = topology.spawn_position(rng);
    let entity = match topology {
        Topology::Path(_) => world.spawn((
            state,
            position,
            StatusEffects::default(),
            PathProgress { next_waypoint: 1 },
        )),
        Topology::Rings(_) => world.spawn((state, position, StatusEffects::default())),
    };
    Some(entity)
}

/// Spawn a level-1 emplacement at a resolved position.
pub fn spawn_emplacement(
    world: &mut World,
    spec: &EmplacementSpec,
    placement: Placement,
    position: Position,
    id: u32,
) -> Entity {
    let max_health = spec.max_health_at(1);
    world.spawn((
        EmplacementState {
            id,
            kind: spec.kind,
            level: 1,
            health: max_health,
            max_health,
            cooldown: 0,
            target: None,
        },
        placement,
        position,
    ))
}

/// Spawn a travelling round aimed at a target entity.
#[allow(clippy::too_many_arguments)]
pub fn spawn_round(
    world: &mut World,
    id: u32,
    position: Position,
    target: u32,
    damage: f64,
    speed: f64,
    impact_radius: f64,
    splash_radius: f64,
    spawned_tick: u64,
) -> Entity {
    world.spawn((
        ProjectileState {
            id,
            kind: ProjectileKind::Round {
                speed,
                impact_radius,
                splash_radius,
            },
            damage,
            target: Some(target),
            spawned_tick,
            finished: false,
        },
        position,
    ))
}

/// Spawn a lingering beam trace. Damage was already applied.
pub fn spawn_beam(
    world: &mut World,
    id: u32,
    from: Position,
    to: Position,
    damage: f64,
    target: u32,
    spawned_tick: u64,
) -> Entity {
    world.spawn((
        ProjectileState {
            id,
            kind: ProjectileKind::Beam {
                to,
                linger: BEAM_LINGER_TICKS,
            },
            damage,
            target: Some(target),
            spawned_tick,
            finished: false,
        },
        from,
    ))
}

/// Spawn a lingering chain-arc trace. Damage was already applied.
pub fn spawn_arc(
    world: &mut World,
    id: u32,
    from: Position,
    links: Vec<Position>,
    spawned_tick: u64,
) -> Entity {
    world.spawn((
        ProjectileState {
            id,
            kind: ProjectileKind::Arc {
                links,
                linger: ARC_LINGER_TICKS,
            },
            damage: 0.0,
            target: None,
            spawned_tick,
            finished: false,
        },
        from,
    ))
}

/// Spawn one melee unit from a deployment.
pub fn spawn_melee_unit(
    world: &mut World,
    spec: &MeleeUnitSpec,
    position: Position,
    damage: f64,
    id: u32,
) -> Entity {
    world.spawn((
        MeleeUnitState {
            id,
            damage,
            speed: spec.speed,
            attack_range: spec.attack_range,
            attack_interval: spec.attack_interval,
            attack_cooldown: 0,
            aggro_radius: spec.aggro_radius,
            slow_factor: spec.slow_factor,
            block_chance: spec.block_chance,
            block_ticks: spec.block_ticks,
            lifespan: spec.lifespan_ticks,
            target: None,
            finished: false,
        },
        position,
    ))
}

/// Spawn one barrier zone from a wall deployment.
pub fn spawn_zone(
    world: &mut World,
    spec: &ZoneSpec,
    position: Position,
    lifetime: u32,
    id: u32,
) -> Entity {
    world.spawn((
        ZoneState {
            id,
            integrity: spec.integrity,
            max_integrity: spec.integrity,
            block_radius: spec.block_radius,
            slow_factor: spec.slow_factor,
            push_factor: spec.push_factor,
            contact_damage: spec.contact_damage,
            wave_growth: spec.wave_growth,
            lifetime,
            finished: false,
        },
        position,
    ))
}
