//! Shared vocabulary for the rampart simulation: geometry and time types,
//! ECS components, per-variant kind catalogs, player commands, events, and
//! the snapshot views the presentation layer consumes.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
