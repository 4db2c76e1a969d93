//! Geometry and time primitives.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::DT;

/// 2D position in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// Direction toward another position, radians.
    pub fn bearing_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Move `distance` units toward `target`, without overshooting.
    pub fn step_toward(&mut self, target: &Position, distance: f64) {
        let delta = target.to_dvec2() - self.to_dvec2();
        let len = delta.length();
        if len <= distance || len == 0.0 {
            *self = *target;
        } else {
            *self = Position::from_dvec2(self.to_dvec2() + delta * (distance / len));
        }
    }

    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn from_dvec2(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Simulation time: logical tick counter plus derived elapsed seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimTime {
    pub tick: u64,
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds of simulated time per tick.
    pub fn dt(&self) -> f64 {
        DT
    }

    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += DT;
    }
}
