//! Enemy movement along the topology.
//!
//! Runs after damage delivery so an enemy killed this tick never moves or
//! leaks. Block status suppresses movement entirely; slows scale the step.
//! Path enemies walk waypoint to waypoint; ring enemies fly straight at the
//! center and arrive at the standoff distance.

use hecs::World;
use rampart_core::components::*;
use rampart_core::types::Position;

use crate::topology::Topology;

pub fn run(world: &mut World, topology: &Topology, min_speed_fraction: f64) {
    match topology {
        Topology::Path(path) => {
            for (_entity, (enemy, position, status, progress)) in world.query_mut::<(
                &mut EnemyState,
                &mut Position,
                &StatusEffects,
                &mut PathProgress,
            )>() {
                if enemy.dead || enemy.reached_goal || enemy.health <= 0.0 {
                    continue;
                }
                if status.blocked() {
                    continue;
                }
                let step = status.slowed_speed(enemy.base_speed, min_speed_fraction);
                let waypoint = match path.waypoints.get(progress.next_waypoint) {
                    Some(waypoint) => *waypoint,
                    None => {
                        enemy.reached_goal = true;
                        continue;
                    }
                };
                if position.distance_to(&waypoint) < step {
                    *position = waypoint;
                    progress.next_waypoint += 1;
                    if progress.next_waypoint >= path.waypoints.len() {
                        enemy.reached_goal = true;
                    }
                } else {
                    position.step_toward(&waypoint, step);
                }
            }
        }
        Topology::Rings(rings) => {
            let center = rings.center;
            for (_entity, (enemy, position, status)) in
                world.query_mut::<(&mut EnemyState, &mut Position, &StatusEffects)>()
            {
                if enemy.dead || enemy.reached_goal || enemy.health <= 0.0 {
                    continue;
                }
                if status.blocked() {
                    continue;
                }
                let step = status.slowed_speed(enemy.base_speed, min_speed_fraction);
                let distance = position.distance_to(&center);
                if distance - step <= rings.standoff {
                    // Arrive exactly on the standoff circle.
                    if distance > 0.0 {
                        let direction = (position.to_dvec2() - center.to_dvec2()) / distance;
                        *position =
                            Position::from_dvec2(center.to_dvec2() + direction * rings.standoff);
                    }
                    enemy.reached_goal = true;
                } else {
                    position.step_toward(&center, step);
                }
            }
        }
    }
}
