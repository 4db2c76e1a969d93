//! Runtime topology: where enemies travel, where emplacements sit.
//!
//! Two shapes exist. Path topology is a waypoint polyline over a build
//! grid; enemies walk the polyline and cells touching it are unbuildable.
//! Ring topology is a set of rotating slot rings around a central point;
//! enemies fly straight at the center and stop at a standoff distance.
//!
//! Occupancy is tracked here so placement validation and destruction
//! cleanup share one source of truth.

use std::collections::HashMap;
use std::f64::consts::TAU;

use glam::DVec2;
use rampart_core::catalog::{RingSpec, TopologySpec};
use rampart_core::commands::LocationRef;
use rampart_core::components::{PathProgress, Placement};
use rampart_core::types::Position;
use rand::Rng;

#[derive(Debug, Clone)]
pub enum Topology {
    Path(PathTopology),
    Rings(RingTopology),
}

#[derive(Debug, Clone)]
pub struct PathTopology {
    pub waypoints: Vec<Position>,
    pub cell_size: f64,
    pub width: f64,
    pub height: f64,
    occupancy: HashMap<(u32, u32), u32>,
}

impl PathTopology {
    pub fn cell_center(&self, col: u32, row: u32) -> Position {
        Position::new(
            (col as f64 + 0.5) * self.cell_size,
            (row as f64 + 0.5) * self.cell_size,
        )
    }

    pub fn in_bounds(&self, col: u32, row: u32) -> bool {
        ((col as f64 + 1.0) * self.cell_size) <= self.width
            && ((row as f64 + 1.0) * self.cell_size) <= self.height
    }

    /// Whether a cell's center falls inside the path band: within one cell
    /// size of a segment's line, within one cell size past its endpoints.
    pub fn cell_on_path(&self, col: u32, row: u32) -> bool {
        let center = self.cell_center(col, row);
        let margin = self.cell_size;
        self.waypoints.windows(2).any(|pair| {
            let (a, b) = (pair[0], pair[1]);
            if (b.x - a.x).abs() > (b.y - a.y).abs() {
                // Horizontal segment.
                (center.y - a.y).abs() < margin
                    && center.x >= a.x.min(b.x) - margin
                    && center.x <= a.x.max(b.x) + margin
            } else {
                (center.x - a.x).abs() < margin
                    && center.y >= a.y.min(b.y) - margin
                    && center.y <= a.y.max(b.y) + margin
            }
        })
    }

    pub fn length(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }

    /// Monotone progress metric: path distance covered so far, estimated
    /// from the waypoint being approached.
    fn traveled(&self, position: &Position, next_waypoint: usize) -> f64 {
        let covered: f64 = self
            .waypoints
            .windows(2)
            .take(next_waypoint)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum();
        match self.waypoints.get(next_waypoint) {
            Some(waypoint) => covered - position.distance_to(waypoint),
            None => covered,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RingState {
    pub spec: RingSpec,
    /// Current rotation in degrees.
    pub rotation: f64,
    pub unlocked: bool,
}

#[derive(Debug, Clone)]
pub struct RingTopology {
    pub center: Position,
    pub spawn_radius: f64,
    pub standoff: f64,
    pub leak_damage: f64,
    pub rings: Vec<RingState>,
    occupancy: HashMap<(u32, u32), u32>,
}

impl RingTopology {
    /// World position of a slot, following the ring's current rotation.
    pub fn slot_position(&self, ring: u32, slot: u32) -> Option<Position> {
        let state = self.rings.get(ring as usize)?;
        if slot >= state.spec.slots {
            return None;
        }
        let step = 360.0 / state.spec.slots as f64;
        let angle = (step * slot as f64 + state.rotation).to_radians();
        let offset = DVec2::from_angle(angle) * state.spec.radius;
        Some(Position::from_dvec2(self.center.to_dvec2() + offset))
    }

    pub fn advance(&mut self) {
        for ring in &mut self.rings {
            ring.rotation = (ring.rotation + ring.spec.rotation_rate) % 360.0;
        }
    }

    /// Innermost still-locked ring; rings unlock outward in order.
    pub fn first_locked(&self) -> Option<u32> {
        self.rings
            .iter()
            .position(|ring| !ring.unlocked)
            .map(|index| index as u32)
    }

    pub fn unlock(&mut self, ring: u32) {
        if let Some(state) = self.rings.get_mut(ring as usize) {
            state.unlocked = true;
        }
    }
}

impl Topology {
    pub fn from_spec(spec: &TopologySpec) -> Self {
        match spec {
            TopologySpec::Path {
                width,
                height,
                cell_size,
                waypoints,
            } => Topology::Path(PathTopology {
                waypoints: waypoints.clone(),
                cell_size: *cell_size,
                width: *width,
                height: *height,
                occupancy: HashMap::new(),
            }),
            TopologySpec::Rings {
                center,
                spawn_radius,
                standoff,
                leak_damage,
                rings,
            } => Topology::Rings(RingTopology {
                center: *center,
                spawn_radius: *spawn_radius,
                standoff: *standoff,
                leak_damage: *leak_damage,
                rings: rings
                    .iter()
                    .map(|spec| RingState {
                        spec: *spec,
                        rotation: 0.0,
                        unlocked: spec.unlocked,
                    })
                    .collect(),
                occupancy: HashMap::new(),
            }),
        }
    }

    /// Whether the location exists and is buildable terrain. Occupancy and
    /// locking are separate checks.
    pub fn is_valid(&self, location: LocationRef) -> bool {
        match (self, location) {
            (Topology::Path(path), LocationRef::Cell { col, row }) => {
                path.in_bounds(col, row) && !path.cell_on_path(col, row)
            }
            (Topology::Rings(rings), LocationRef::Slot { ring, slot }) => rings
                .rings
                .get(ring as usize)
                .is_some_and(|state| slot < state.spec.slots),
            _ => false,
        }
    }

    pub fn is_locked(&self, location: LocationRef) -> bool {
        match (self, location) {
            (Topology::Rings(rings), LocationRef::Slot { ring, .. }) => rings
                .rings
                .get(ring as usize)
                .is_some_and(|state| !state.unlocked),
            _ => false,
        }
    }

    pub fn occupant(&self, location: LocationRef) -> Option<u32> {
        let (map, key) = self.occupancy_slot(location)?;
        map.get(&key).copied()
    }

    pub fn occupy(&mut self, location: LocationRef, id: u32) {
        if let Some((map, key)) = self.occupancy_slot_mut(location) {
            map.insert(key, id);
        }
    }

    pub fn release(&mut self, location: LocationRef) {
        if let Some((map, key)) = self.occupancy_slot_mut(location) {
            map.remove(&key);
        }
    }

    fn occupancy_slot(&self, location: LocationRef) -> Option<(&HashMap<(u32, u32), u32>, (u32, u32))> {
        match (self, location) {
            (Topology::Path(path), LocationRef::Cell { col, row }) => {
                Some((&path.occupancy, (col, row)))
            }
            (Topology::Rings(rings), LocationRef::Slot { ring, slot }) => {
                Some((&rings.occupancy, (ring, slot)))
            }
            _ => None,
        }
    }

    fn occupancy_slot_mut(
        &mut self,
        location: LocationRef,
    ) -> Option<(&mut HashMap<(u32, u32), u32>, (u32, u32))> {
        match (self, location) {
            (Topology::Path(path), LocationRef::Cell { col, row }) => {
                Some((&mut path.occupancy, (col, row)))
            }
            (Topology::Rings(rings), LocationRef::Slot { ring, slot }) => {
                Some((&mut rings.occupancy, (ring, slot)))
            }
            _ => None,
        }
    }

    /// Current world position of a placement. Slot positions follow ring
    /// rotation, so this is re-resolved every tick.
    pub fn resolved_position(&self, placement: Placement) -> Option<Position> {
        match (self, placement) {
            (Topology::Path(path), Placement::Cell { col, row }) => {
                Some(path.cell_center(col, row))
            }
            (Topology::Rings(rings), Placement::Slot { ring, slot }) => {
                rings.slot_position(ring, slot)
            }
            (Topology::Rings(rings), Placement::Core) => Some(rings.center),
            _ => None,
        }
    }

    pub fn spawn_position(&self, rng: &mut impl Rng) -> Position {
        match self {
            Topology::Path(path) => path.waypoints.first().copied().unwrap_or_default(),
            Topology::Rings(rings) => {
                let angle = rng.gen_range(0.0..TAU);
                let offset = DVec2::from_angle(angle) * rings.spawn_radius;
                Position::from_dvec2(rings.center.to_dvec2() + offset)
            }
        }
    }

    /// How far along its route an enemy is. Only ordering matters; the
    /// scale differs between topologies.
    pub fn goal_progress(&self, position: &Position, progress: Option<&PathProgress>) -> f64 {
        match self {
            Topology::Path(path) => {
                let next = progress.map(|p| p.next_waypoint).unwrap_or(0);
                path.traveled(position, next)
            }
            Topology::Rings(rings) => -position.distance_to(&rings.center),
        }
    }

    pub fn goal_point(&self) -> Position {
        match self {
            Topology::Path(path) => path.waypoints.last().copied().unwrap_or_default(),
            Topology::Rings(rings) => rings.center,
        }
    }

    /// Station damage per leaked enemy; zero under path topology, which
    /// uses a lives counter instead.
    pub fn leak_damage(&self) -> f64 {
        match self {
            Topology::Path(_) => 0.0,
            Topology::Rings(rings) => rings.leak_damage,
        }
    }

    /// Per-tick rotation update. Path topology is static.
    pub fn advance(&mut self) {
        if let Topology::Rings(rings) = self {
            rings.advance();
        }
    }
}
