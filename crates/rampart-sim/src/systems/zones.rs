//! Area-denial zone behavior: contact damage, push-out, slow, integrity.
//!
//! A zone is a stationary disc. Enemies overlapping it take wave-scaled
//! contact damage, get pushed back out proportionally to their overlap, and
//! carry the zone's slow while inside. Integrity depletes by damage dealt;
//! the zone collapses at zero integrity or end of lifetime.

use hecs::{Entity, World};
use rampart_core::catalog::VariantConfig;
use rampart_core::components::*;
use rampart_core::constants::ZONE_PUSH_MARGIN;
use rampart_core::types::Position;

pub fn run(world: &mut World, config: &VariantConfig, wave: u32) {
    // Step 1: Lifetime upkeep.
    for (_entity, zone) in world.query_mut::<&mut ZoneState>() {
        if zone.finished {
            continue;
        }
        if zone.lifetime > 0 {
            zone.lifetime -= 1;
        }
        if zone.lifetime == 0 || zone.integrity <= 0.0 {
            zone.finished = true;
        }
    }

    // Step 2: Snapshot active zones.
    let zones: Vec<(Entity, ZoneState, Position)> = world
        .query::<(&ZoneState, &Position)>()
        .iter()
        .filter(|(_, (zone, _))| !zone.finished)
        .map(|(entity, (zone, position))| (entity, zone.clone(), *position))
        .collect();

    // Step 3: Resolve contacts zone by zone.
    for (zone_entity, zone, zone_pos) in zones {
        let mut dealt = 0.0;
        for (_entity, (enemy, position, status)) in
            world.query_mut::<(&mut EnemyState, &mut Position, &mut StatusEffects)>()
        {
            if enemy.dead || enemy.reached_goal || enemy.health <= 0.0 {
                continue;
            }
            let reach = zone.block_radius + enemy.radius;
            let distance = zone_pos.distance_to(position);
            if distance >= reach {
                continue;
            }

            if distance > 0.0 {
                let overlap = reach - distance;
                let push = (overlap + ZONE_PUSH_MARGIN) * zone.push_factor;
                let direction = (position.to_dvec2() - zone_pos.to_dvec2()) / distance;
                *position = Position::from_dvec2(position.to_dvec2() + direction * push);
            }
            status.slows.push(SlowEffect {
                source: zone.id,
                factor: zone.slow_factor,
            });

            let type_mult = config
                .enemy(enemy.kind)
                .map(|spec| spec.zone_damage_mult)
                .unwrap_or(1.0);
            let amount = zone.contact_damage
                * type_mult
                * (1.0 + zone.wave_growth * wave.saturating_sub(1) as f64);
            enemy.health = (enemy.health - amount).max(0.0);
            dealt += amount;
        }

        if dealt > 0.0 {
            if let Ok(mut state) = world.get::<&mut ZoneState>(zone_entity) {
                state.integrity = (state.integrity - dealt).max(0.0);
                if state.integrity <= 0.0 {
                    state.finished = true;
                }
            }
        }
    }
}
