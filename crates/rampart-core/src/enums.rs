//! Shared enums for phases, kinds, and policies.

use serde::{Deserialize, Serialize};

/// Top-level match phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Free placement; no spawning. The auto-start countdown may run.
    #[default]
    Build,
    /// Wave in progress.
    Active,
    /// All waves cleared. Terminal.
    Victory,
    /// Lives or station health exhausted. Terminal.
    Defeat,
}

/// Emplacement kind tags. The bastion preset uses the tower kinds, the
/// orbital preset the satellite kinds plus the central station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmplacementKind {
    // --- Bastion towers ---
    Archer,
    Mage,
    Cannon,
    Barracks,

    // --- Orbital satellites ---
    Laser,
    Missile,
    Tesla,
    Shield,
    Pylon,

    /// Central structure of the orbital preset. Pre-placed, never built.
    Station,
}

/// Enemy kind tags across both presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    // --- Bastion ---
    Normal,
    Fast,
    Tank,

    // --- Orbital ---
    Scout,
    Fighter,
    Heavy,
    Stealth,

    /// Shared boss kind; forced on boss waves and the final spawn.
    Boss,
}

/// How an emplacement picks among in-range enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetingPolicy {
    /// Closest enemy strictly within range.
    #[default]
    NearestInRange,
    /// In-range enemy with the greatest traversal progress.
    FurthestAlong,
}

/// Difficulty selection, applied as flat multipliers on enemy health and
/// speed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}
