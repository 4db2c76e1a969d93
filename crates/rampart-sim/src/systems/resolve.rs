//! Death and leak settlement.
//!
//! Runs after all damage and movement for the tick. Death takes precedence:
//! an enemy that died and reached the goal on the same tick counts as a
//! kill, grants its reward, and charges no leak. Leaks decrement lives or
//! damage the station, depending on the variant.

use hecs::World;
use rampart_core::catalog::{TopologySpec, VariantConfig};
use rampart_core::components::{EmplacementState, EnemyState};
use rampart_core::enums::{EmplacementKind, EnemyKind, GamePhase};
use rampart_core::events::GameEvent;

use crate::economy::Economy;
use crate::wave_director::WaveDirector;

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    config: &VariantConfig,
    director: &mut WaveDirector,
    economy: &mut Economy,
    lives: &mut Option<u32>,
    phase: &mut GamePhase,
    events: &mut Vec<GameEvent>,
) {
    // Step 1: Settle deaths, clearing reached_goal so death wins ties.
    let mut kills: Vec<(u32, EnemyKind, u32)> = Vec::new();
    for (_entity, enemy) in world.query_mut::<&mut EnemyState>() {
        if !enemy.dead && enemy.health <= 0.0 {
            enemy.dead = true;
            enemy.reached_goal = false;
            kills.push((enemy.id, enemy.kind, enemy.wave));
        }
    }
    for (id, kind, wave) in kills {
        let (reward, points) = match config.enemy(kind) {
            Some(spec) => (
                spec.reward_at(wave, config.economy.reward_cap_multiple),
                spec.points,
            ),
            None => (0, 0),
        };
        economy.grant(reward);
        economy.award_points(points);
        director.resolved += 1;
        events.push(GameEvent::EnemyKilled {
            id,
            kind,
            reward,
            points,
        });
    }

    // Step 2: Settle leaks.
    let mut leaks: Vec<(u32, EnemyKind)> = Vec::new();
    for (_entity, enemy) in world.query_mut::<&mut EnemyState>() {
        if enemy.reached_goal && !enemy.dead {
            leaks.push((enemy.id, enemy.kind));
        }
    }
    if !leaks.is_empty() {
        let leak_damage = match &config.topology {
            TopologySpec::Rings { leak_damage, .. } => *leak_damage,
            _ => 0.0,
        };
        for (id, kind) in leaks {
            director.perfect = false;
            director.leaked += 1;
            director.resolved += 1;
            events.push(GameEvent::EnemyLeaked { id, kind });
            match lives {
                Some(remaining) => *remaining = remaining.saturating_sub(1),
                None => damage_station(world, leak_damage),
            }
        }
    }

    // Step 3: Defeat check.
    if *phase != GamePhase::Defeat {
        let out_of_lives = matches!(lives, Some(0));
        let station_down = world
            .query_mut::<&EmplacementState>()
            .into_iter()
            .any(|(_, state)| state.kind == EmplacementKind::Station && state.health <= 0.0);
        if out_of_lives || station_down {
            *phase = GamePhase::Defeat;
            events.push(GameEvent::Defeat);
        }
    }
}

fn damage_station(world: &mut World, amount: f64) {
    for (_entity, state) in world.query_mut::<&mut EmplacementState>() {
        if state.kind == EmplacementKind::Station {
            state.health = (state.health - amount).max(0.0);
        }
    }
}
