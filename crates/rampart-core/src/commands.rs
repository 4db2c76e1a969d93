//! Player commands and their outcomes.
//!
//! Commands are the only way external code mutates a running simulation.
//! Each one is validated against the current state and answered with a
//! [`CommandOutcome`]; rejected commands leave the state untouched.

use serde::{Deserialize, Serialize};

/// A player-addressable build location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LocationRef {
    /// Grid cell under path topology.
    Cell { col: u32, row: u32 },
    /// Ring slot under ring topology.
    Slot { ring: u32, slot: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Construction ---
    PlaceEmplacement {
        kind: crate::enums::EmplacementKind,
        location: LocationRef,
    },
    UpgradeEmplacement {
        id: u32,
    },
    UnlockRing {
        ring: u32,
    },

    // --- Flow control ---
    StartNextWave,
    SetSpeed {
        level: usize,
    },
    ToggleAutoStart,
    Restart,
}

/// Result of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Ok,
    InsufficientFunds,
    InvalidLocation,
    AlreadyOccupied,
    MaxLevel,
    WrongPhase,
    Locked,
}

impl CommandOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, CommandOutcome::Ok)
    }
}
