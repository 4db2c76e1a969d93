//! Snapshot types handed to consumers after every tick.
//!
//! A snapshot is a plain-data view of the world: entity views are sorted by
//! id so two snapshots of identical states serialize identically.

use serde::{Deserialize, Serialize};

use crate::components::Placement;
use crate::enums::{EmplacementKind, EnemyKind, GamePhase};
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub economy: EconomyView,
    /// Remaining leak budget; None when the variant tracks station health.
    pub lives: Option<u32>,
    pub rings: Vec<RingView>,
    pub enemies: Vec<EnemyView>,
    pub emplacements: Vec<EmplacementView>,
    pub projectiles: Vec<ProjectileView>,
    pub units: Vec<MeleeUnitView>,
    pub zones: Vec<ZoneView>,
    /// Everything that happened since the previous snapshot.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub current: u32,
    pub total: u32,
    pub spawned: u32,
    pub to_spawn: u32,
    /// Spawned and not yet killed or leaked.
    pub alive: u32,
    /// Fraction of the wave resolved, in 0..=1.
    pub progress: f64,
    pub perfect: bool,
    pub auto_start: bool,
    /// Build-phase ticks until auto-start fires; 0 when disarmed.
    pub auto_start_remaining: u32,
    /// Composition of the upcoming or running wave.
    pub preview: Vec<WaveEntryView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveEntryView {
    pub kind: EnemyKind,
    pub count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EconomyView {
    pub currency: u32,
    pub points: u32,
    pub energy_capacity: f64,
    pub energy_used: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RingView {
    pub ring: u32,
    pub radius: f64,
    pub slots: u32,
    /// Current rotation in degrees.
    pub rotation: f64,
    pub unlocked: bool,
    pub unlock_cost: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub wave: u32,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    /// Effective speed after slows.
    pub speed: f64,
    pub blocked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmplacementView {
    pub id: u32,
    pub kind: EmplacementKind,
    pub level: u32,
    pub position: Position,
    pub placement: Placement,
    pub health: f64,
    pub max_health: f64,
    /// Range at the current level.
    pub range: f64,
    pub cooldown: u32,
    pub target: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Position,
    pub kind: crate::components::ProjectileKind,
    pub target: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeleeUnitView {
    pub id: u32,
    pub position: Position,
    pub lifespan: u32,
    pub target: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneView {
    pub id: u32,
    pub position: Position,
    pub integrity: f64,
    pub max_integrity: f64,
    pub lifetime: u32,
}
