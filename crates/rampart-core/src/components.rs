//! ECS components attached to simulation entities.

use serde::{Deserialize, Serialize};

use crate::commands::LocationRef;
use crate::enums::{EmplacementKind, EnemyKind};
use crate::types::Position;

/// Core enemy state. Death and goal arrival are flagged here and resolved
/// at the end of the tick so every system sees a consistent view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyState {
    pub id: u32,
    pub kind: EnemyKind,
    /// Wave this enemy spawned in.
    pub wave: u32,
    pub health: f64,
    pub max_health: f64,
    pub base_speed: f64,
    pub radius: f64,
    pub dead: bool,
    pub reached_goal: bool,
}

/// Waypoint-path traversal progress. Only present under path topology.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PathProgress {
    /// Index of the waypoint currently being approached.
    pub next_waypoint: usize,
}

/// One active slow applied by a unit aura or zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlowEffect {
    /// Id of the unit or zone applying the slow.
    pub source: u32,
    pub factor: f64,
}

/// Transient movement modifiers. Slows are rebuilt from live sources every
/// tick; block ticks persist and count down.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusEffects {
    pub slows: Vec<SlowEffect>,
    pub block_ticks: u32,
}

impl StatusEffects {
    /// Effective speed after stacking slows multiplicatively, floored at
    /// `min_fraction` of base speed.
    pub fn slowed_speed(&self, base: f64, min_fraction: f64) -> f64 {
        let slowed = self
            .slows
            .iter()
            .fold(base, |speed, slow| speed * (1.0 - slow.factor));
        slowed.max(base * min_fraction)
    }

    pub fn blocked(&self) -> bool {
        self.block_ticks > 0
    }
}

/// Where an emplacement sits in the topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Placement {
    Cell { col: u32, row: u32 },
    Slot { ring: u32, slot: u32 },
    /// The central station; not a player-placeable location.
    Core,
}

impl Placement {
    pub fn location(&self) -> Option<LocationRef> {
        match *self {
            Placement::Cell { col, row } => Some(LocationRef::Cell { col, row }),
            Placement::Slot { ring, slot } => Some(LocationRef::Slot { ring, slot }),
            Placement::Core => None,
        }
    }
}

impl From<LocationRef> for Placement {
    fn from(location: LocationRef) -> Self {
        match location {
            LocationRef::Cell { col, row } => Placement::Cell { col, row },
            LocationRef::Slot { ring, slot } => Placement::Slot { ring, slot },
        }
    }
}

/// Core emplacement state. Static stats are derived from the catalog at
/// `kind` and `level`; only mutable state lives here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmplacementState {
    pub id: u32,
    pub kind: EmplacementKind,
    pub level: u32,
    pub health: f64,
    pub max_health: f64,
    /// Ticks until the next shot.
    pub cooldown: u32,
    /// Sticky target id; revalidated every tick.
    pub target: Option<u32>,
}

/// In-flight or lingering projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileState {
    pub id: u32,
    pub kind: ProjectileKind,
    pub damage: f64,
    pub target: Option<u32>,
    /// Rounds spawned this tick do not move until the next one.
    pub spawned_tick: u64,
    pub finished: bool,
}

/// Projectile flavors. Beams and arcs deal damage on spawn and linger for
/// presentation only; rounds travel and deal damage on impact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProjectileKind {
    Beam {
        to: Position,
        linger: u32,
    },
    Arc {
        /// Hop endpoints, primary target first.
        links: Vec<Position>,
        linger: u32,
    },
    Round {
        speed: f64,
        impact_radius: f64,
        /// Zero means single-target impact.
        splash_radius: f64,
    },
}

/// A deployed melee unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeleeUnitState {
    pub id: u32,
    pub damage: f64,
    pub speed: f64,
    pub attack_range: f64,
    pub attack_interval: u32,
    pub attack_cooldown: u32,
    pub aggro_radius: f64,
    pub slow_factor: f64,
    pub block_chance: f64,
    pub block_ticks: u32,
    /// Remaining ticks before the unit expires.
    pub lifespan: u32,
    pub target: Option<u32>,
    pub finished: bool,
}

/// A deployed area-denial zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneState {
    pub id: u32,
    /// Depletes by damage dealt; the zone collapses at zero.
    pub integrity: f64,
    pub max_integrity: f64,
    pub block_radius: f64,
    pub slow_factor: f64,
    pub push_factor: f64,
    pub contact_damage: f64,
    pub wave_growth: f64,
    /// Remaining ticks before the zone expires.
    pub lifetime: u32,
    pub finished: bool,
}
