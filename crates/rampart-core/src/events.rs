//! Events emitted during simulation ticks.
//!
//! The engine buffers events as they happen and drains the buffer into each
//! snapshot, so consumers see everything that occurred since the last one.

use serde::{Deserialize, Serialize};

use crate::enums::{EmplacementKind, EnemyKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    EnemySpawned {
        id: u32,
        kind: EnemyKind,
        wave: u32,
    },
    EnemyKilled {
        id: u32,
        kind: EnemyKind,
        reward: u32,
        points: u32,
    },
    EnemyLeaked {
        id: u32,
        kind: EnemyKind,
    },
    EmplacementPlaced {
        id: u32,
        kind: EmplacementKind,
    },
    EmplacementUpgraded {
        id: u32,
        level: u32,
    },
    EmplacementDestroyed {
        id: u32,
        kind: EmplacementKind,
    },
    RingUnlocked {
        ring: u32,
    },
    WaveStarted {
        wave: u32,
    },
    WaveCompleted {
        wave: u32,
        bonus: u32,
        points: u32,
        perfect: bool,
    },
    Victory,
    Defeat,
}
