//! Wave lifecycle system: auto-start countdown, spawn cadence, completion.
//!
//! Build phase only counts down the auto-start timer. Active phase spawns
//! the composition front-to-back on the spawn interval, then settles the
//! wave once everything spawned has resolved: bonus, points, completion
//! event, and the transition to build or victory.

use hecs::World;
use rampart_core::catalog::VariantConfig;
use rampart_core::components::{EmplacementState, EnemyState};
use rampart_core::enums::{EmplacementKind, GamePhase};
use rampart_core::events::GameEvent;
use rand::Rng;

use crate::economy::Economy;
use crate::topology::Topology;
use crate::wave_director::{self, WaveDirector};
use crate::world_setup;

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    config: &VariantConfig,
    topology: &Topology,
    director: &mut WaveDirector,
    economy: &mut Economy,
    phase: &mut GamePhase,
    events: &mut Vec<GameEvent>,
    rng: &mut impl Rng,
    next_unit_id: &mut u32,
) {
    match phase {
        GamePhase::Build => run_build(director, phase, events),
        GamePhase::Active => run_active(
            world,
            config,
            topology,
            director,
            economy,
            phase,
            events,
            rng,
            next_unit_id,
        ),
        GamePhase::Victory | GamePhase::Defeat => {}
    }
}

fn run_build(director: &mut WaveDirector, phase: &mut GamePhase, events: &mut Vec<GameEvent>) {
    if !director.auto_start {
        return;
    }
    if director.auto_start_timer > 0 {
        director.auto_start_timer -= 1;
    }
    if director.auto_start_timer == 0 {
        director.start_wave();
        *phase = GamePhase::Active;
        events.push(GameEvent::WaveStarted {
            wave: director.wave,
        });
    }
}

#[allow(clippy::too_many_arguments)]
fn run_active(
    world: &mut World,
    config: &VariantConfig,
    topology: &Topology,
    director: &mut WaveDirector,
    economy: &mut Economy,
    phase: &mut GamePhase,
    events: &mut Vec<GameEvent>,
    rng: &mut impl Rng,
    next_unit_id: &mut u32,
) {
    let alive = world.query_mut::<&EnemyState>().into_iter().count() as u32;
    if director.wave_cleared(alive) {
        complete_wave(world, config, director, economy, phase, events, rng);
        return;
    }

    if director.spawned < director.to_spawn {
        if director.spawn_timer == 0 {
            if let Some(kind) = director.next_spawn(config) {
                let id = *next_unit_id;
                *next_unit_id += 1;
                let wave = director.wave;
                if world_setup::spawn_enemy(world, config, topology, kind, wave, id, rng).is_some()
                {
                    events.push(GameEvent::EnemySpawned { id, kind, wave });
                }
            }
            director.spawn_timer = director.spawn_interval.saturating_sub(1);
        } else {
            director.spawn_timer -= 1;
        }
    }
}

/// Grant the completion bonus and points, then move to build or victory.
fn complete_wave(
    world: &mut World,
    config: &VariantConfig,
    director: &mut WaveDirector,
    economy: &mut Economy,
    phase: &mut GamePhase,
    events: &mut Vec<GameEvent>,
    rng: &mut impl Rng,
) {
    let bonus = wave_director::completion_bonus(&config.waves, director.wave);
    economy.grant(bonus);
    let emplacement_count = world
        .query_mut::<&EmplacementState>()
        .into_iter()
        .filter(|(_, state)| state.kind != EmplacementKind::Station)
        .count() as u32;
    let points = director.completion_points(&config.waves, emplacement_count);
    economy.award_points(points);
    events.push(GameEvent::WaveCompleted {
        wave: director.wave,
        bonus,
        points,
        perfect: director.perfect,
    });

    if director.wave >= config.waves.total_waves {
        *phase = GamePhase::Victory;
        events.push(GameEvent::Victory);
    } else {
        director.wave += 1;
        director.compose(config, rng);
        *phase = GamePhase::Build;
        if director.auto_start {
            director.auto_start_timer = config.waves.auto_start_delay;
        }
    }
}
