//! Engine-level constants. Balance numbers are per-variant configuration
//! data and live in [`crate::catalog`]; only values tied to the tick loop
//! itself belong here.

/// Logical ticks per second at speed level 1.
pub const TICK_RATE: f64 = 60.0;

/// Seconds of simulated time per logical tick.
pub const DT: f64 = 1.0 / TICK_RATE;

/// Ticks a beam effect stays visible after its damage lands.
pub const BEAM_LINGER_TICKS: u32 = 10;

/// Ticks a chain arc effect stays visible.
pub const ARC_LINGER_TICKS: u32 = 20;

/// Extra overlap margin used when pushing enemies out of a zone.
pub const ZONE_PUSH_MARGIN: f64 = 2.0;

/// Spread radius for multi-unit melee deployments around their emplacement.
pub const UNIT_DEPLOY_RADIUS: f64 = 12.0;
