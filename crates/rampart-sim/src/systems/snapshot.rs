//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only, it never modifies the world. Every view list
//! is sorted by id so identical states serialize identically.

use hecs::World;

use rampart_core::catalog::VariantConfig;
use rampart_core::components::*;
use rampart_core::enums::GamePhase;
use rampart_core::events::GameEvent;
use rampart_core::state::*;
use rampart_core::types::{Position, SimTime};

use crate::economy::Economy;
use crate::topology::Topology;
use crate::wave_director::WaveDirector;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    config: &VariantConfig,
    topology: &Topology,
    economy: &Economy,
    director: &WaveDirector,
    lives: Option<u32>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        wave: build_wave(director, config),
        economy: EconomyView {
            currency: economy.currency(),
            points: economy.points(),
            energy_capacity: economy.energy_capacity(),
            energy_used: economy.energy_used(),
        },
        lives,
        rings: build_rings(topology),
        enemies: build_enemies(world, config),
        emplacements: build_emplacements(world, config),
        projectiles: build_projectiles(world),
        units: build_units(world),
        zones: build_zones(world),
        events,
    }
}

fn build_wave(director: &WaveDirector, config: &VariantConfig) -> WaveView {
    let progress = if director.to_spawn > 0 {
        director.resolved as f64 / director.to_spawn as f64
    } else {
        0.0
    };
    WaveView {
        current: director.wave,
        total: config.waves.total_waves,
        spawned: director.spawned,
        to_spawn: director.to_spawn,
        alive: director.spawned.saturating_sub(director.resolved),
        progress,
        perfect: director.perfect,
        auto_start: director.auto_start,
        auto_start_remaining: if director.auto_start {
            director.auto_start_timer
        } else {
            0
        },
        preview: director
            .composition
            .iter()
            .filter(|entry| entry.count > 0)
            .map(|entry| WaveEntryView {
                kind: entry.kind,
                count: entry.count,
            })
            .collect(),
    }
}

fn build_rings(topology: &Topology) -> Vec<RingView> {
    match topology {
        Topology::Rings(rings) => rings
            .rings
            .iter()
            .enumerate()
            .map(|(index, state)| RingView {
                ring: index as u32,
                radius: state.spec.radius,
                slots: state.spec.slots,
                rotation: state.rotation,
                unlocked: state.unlocked,
                unlock_cost: state.spec.unlock_cost,
            })
            .collect(),
        Topology::Path(_) => Vec::new(),
    }
}

fn build_enemies(world: &World, config: &VariantConfig) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&EnemyState, &Position, &StatusEffects)>()
        .iter()
        .map(|(_, (enemy, position, status))| EnemyView {
            id: enemy.id,
            kind: enemy.kind,
            wave: enemy.wave,
            position: *position,
            health: enemy.health,
            max_health: enemy.max_health,
            speed: status.slowed_speed(enemy.base_speed, config.min_speed_fraction),
            blocked: status.blocked(),
        })
        .collect();
    enemies.sort_by_key(|view| view.id);
    enemies
}

fn build_emplacements(world: &World, config: &VariantConfig) -> Vec<EmplacementView> {
    let mut emplacements: Vec<EmplacementView> = world
        .query::<(&EmplacementState, &Placement, &Position)>()
        .iter()
        .map(|(_, (state, placement, position))| EmplacementView {
            id: state.id,
            kind: state.kind,
            level: state.level,
            position: *position,
            placement: *placement,
            health: state.health,
            max_health: state.max_health,
            range: config
                .emplacement(state.kind)
                .map(|spec| spec.range_at(state.level))
                .unwrap_or(0.0),
            cooldown: state.cooldown,
            target: state.target,
        })
        .collect();
    emplacements.sort_by_key(|view| view.id);
    emplacements
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&ProjectileState, &Position)>()
        .iter()
        .map(|(_, (projectile, position))| ProjectileView {
            id: projectile.id,
            position: *position,
            kind: projectile.kind.clone(),
            target: projectile.target,
        })
        .collect();
    projectiles.sort_by_key(|view| view.id);
    projectiles
}

fn build_units(world: &World) -> Vec<MeleeUnitView> {
    let mut units: Vec<MeleeUnitView> = world
        .query::<(&MeleeUnitState, &Position)>()
        .iter()
        .map(|(_, (unit, position))| MeleeUnitView {
            id: unit.id,
            position: *position,
            lifespan: unit.lifespan,
            target: unit.target,
        })
        .collect();
    units.sort_by_key(|view| view.id);
    units
}

fn build_zones(world: &World) -> Vec<ZoneView> {
    let mut zones: Vec<ZoneView> = world
        .query::<(&ZoneState, &Position)>()
        .iter()
        .map(|(_, (zone, position))| ZoneView {
            id: zone.id,
            position: *position,
            integrity: zone.integrity,
            max_integrity: zone.max_integrity,
            lifetime: zone.lifetime,
        })
        .collect();
    zones.sort_by_key(|view| view.id);
    zones
}
