//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems at a fixed logical tick rate, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic
//! testing: the same seed, variant, and command sequence always produce
//! the same snapshots.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rampart_core::catalog::VariantConfig;
use rampart_core::commands::{CommandOutcome, LocationRef, PlayerCommand};
use rampart_core::components::{EmplacementState, Placement};
use rampart_core::enums::{EmplacementKind, GamePhase};
use rampart_core::events::GameEvent;
use rampart_core::state::GameStateSnapshot;
use rampart_core::types::SimTime;

use crate::economy::Economy;
use crate::systems;
use crate::topology::Topology;
use crate::wave_director::WaveDirector;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Complete rule set: catalogs, topology, waves, economy, clock.
    pub variant: VariantConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            variant: VariantConfig::bastion(),
        }
    }
}

/// Discrete speed levels; one rendered frame advances `ticks_per_frame`
/// logical ticks. Level 0 is pause by convention.
#[derive(Debug, Clone)]
struct SimClock {
    levels: Vec<u32>,
    index: usize,
}

impl SimClock {
    fn new(levels: Vec<u32>, index: usize) -> Self {
        let index = index.min(levels.len().saturating_sub(1));
        Self { levels, index }
    }

    fn ticks_per_frame(&self) -> u32 {
        self.levels.get(self.index).copied().unwrap_or(1)
    }

    fn level(&self) -> usize {
        self.index
    }

    fn set_level(&mut self, level: usize) {
        self.index = level.min(self.levels.len().saturating_sub(1));
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    clock: SimClock,
    topology: Topology,
    economy: Economy,
    director: WaveDirector,
    /// Remaining leak budget; None when the variant uses station health.
    lives: Option<u32>,
    rng: ChaCha8Rng,
    next_unit_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let topology = Topology::from_spec(&config.variant.topology);
        let economy = Economy::new(&config.variant.economy);
        let director = WaveDirector::new(&config.variant, &mut rng);
        let lives = config.variant.economy.lives;
        let clock = SimClock::new(
            config.variant.speed_levels.clone(),
            config.variant.default_speed,
        );
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            clock,
            topology,
            economy,
            director,
            lives,
            rng,
            next_unit_id: 1,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        };
        engine.spawn_station();
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    /// Outcomes of queued commands are not reported; use [`apply_command`]
    /// when the caller needs one.
    ///
    /// [`apply_command`]: SimulationEngine::apply_command
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply a command immediately and report its outcome. Rejected
    /// commands leave the simulation untouched.
    pub fn apply_command(&mut self, command: PlayerCommand) -> CommandOutcome {
        self.handle_command(command)
    }

    /// Advance the simulation by one logical tick and return the resulting
    /// snapshot. Terminal phases only process commands.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if matches!(self.phase, GamePhase::Build | GamePhase::Active) {
            self.run_systems();
            self.time.advance();
        }

        self.snapshot()
    }

    /// Advance one rendered frame: the clock's current tick count at the
    /// current speed level. At speed 0 this still processes commands and
    /// returns a fresh snapshot.
    pub fn advance_frame(&mut self) -> GameStateSnapshot {
        self.process_commands();

        for _ in 0..self.clock.ticks_per_frame() {
            if !matches!(self.phase, GamePhase::Build | GamePhase::Active) {
                break;
            }
            self.run_systems();
            self.time.advance();
        }

        self.snapshot()
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current speed level index.
    pub fn speed_level(&self) -> usize {
        self.clock.level()
    }

    /// Get the active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_unit_id;
        self.next_unit_id += 1;
        id
    }

    /// Spawn the central station if the variant defines one.
    fn spawn_station(&mut self) {
        let spec = match self.config.variant.emplacement(EmplacementKind::Station) {
            Some(spec) => spec.clone(),
            None => return,
        };
        let position = match self.topology.resolved_position(Placement::Core) {
            Some(position) => position,
            None => return,
        };
        let id = self.alloc_id();
        world_setup::spawn_emplacement(&mut self.world, &spec, Placement::Core, position, id);
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.config.variant,
            &self.topology,
            &self.economy,
            &self.director,
            self.lives,
            events,
        )
    }

    /// Process all queued commands, dropping their outcomes.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            let _ = self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) -> CommandOutcome {
        match command {
            PlayerCommand::PlaceEmplacement { kind, location } => {
                self.place_emplacement(kind, location)
            }
            PlayerCommand::UpgradeEmplacement { id } => self.upgrade_emplacement(id),
            PlayerCommand::UnlockRing { ring } => self.unlock_ring(ring),
            PlayerCommand::StartNextWave => self.start_next_wave(),
            PlayerCommand::SetSpeed { level } => {
                self.clock.set_level(level);
                CommandOutcome::Ok
            }
            PlayerCommand::ToggleAutoStart => self.toggle_auto_start(),
            PlayerCommand::Restart => {
                self.restart();
                CommandOutcome::Ok
            }
        }
    }

    /// Validation order: location validity, lock, occupancy, then funds,
    /// so a rejection never debits.
    fn place_emplacement(&mut self, kind: EmplacementKind, location: LocationRef) -> CommandOutcome {
        if matches!(self.phase, GamePhase::Victory | GamePhase::Defeat) {
            return CommandOutcome::WrongPhase;
        }
        // The station is not player-placeable.
        let spec = match self.config.variant.emplacement(kind) {
            Some(spec) if spec.kind != EmplacementKind::Station => spec.clone(),
            _ => return CommandOutcome::InvalidLocation,
        };
        if !self.topology.is_valid(location) {
            return CommandOutcome::InvalidLocation;
        }
        if self.topology.is_locked(location) {
            return CommandOutcome::Locked;
        }
        if self.topology.occupant(location).is_some() {
            return CommandOutcome::AlreadyOccupied;
        }
        let placement = Placement::from(location);
        let position = match self.topology.resolved_position(placement) {
            Some(position) => position,
            None => return CommandOutcome::InvalidLocation,
        };
        if !self.economy.spend(spec.cost) {
            return CommandOutcome::InsufficientFunds;
        }

        let id = self.alloc_id();
        world_setup::spawn_emplacement(&mut self.world, &spec, placement, position, id);
        self.topology.occupy(location, id);
        self.economy.apply_energy_delta(spec.energy_delta_at(1));
        self.events.push(GameEvent::EmplacementPlaced { id, kind });
        CommandOutcome::Ok
    }

    fn upgrade_emplacement(&mut self, id: u32) -> CommandOutcome {
        if matches!(self.phase, GamePhase::Victory | GamePhase::Defeat) {
            return CommandOutcome::WrongPhase;
        }
        let found = self
            .world
            .query_mut::<&EmplacementState>()
            .into_iter()
            .find(|(_, state)| state.id == id)
            .map(|(entity, state)| (entity, state.kind, state.level));
        let (entity, kind, level) = match found {
            Some(found) => found,
            None => return CommandOutcome::InvalidLocation,
        };
        let spec = match self.config.variant.emplacement(kind) {
            Some(spec) => spec.clone(),
            None => return CommandOutcome::InvalidLocation,
        };
        let cost = match spec.upgrade_cost(level) {
            Some(cost) => cost,
            None => return CommandOutcome::MaxLevel,
        };
        if !self.economy.spend(cost) {
            return CommandOutcome::InsufficientFunds;
        }

        let new_level = level + 1;
        if let Ok(mut state) = self.world.get::<&mut EmplacementState>(entity) {
            state.level = new_level;
            state.max_health = spec.max_health_at(new_level);
            // Upgrades fully repair.
            state.health = state.max_health;
        }
        let delta = spec.energy_delta_at(new_level) - spec.energy_delta_at(level);
        self.economy.apply_energy_delta(delta);
        self.events.push(GameEvent::EmplacementUpgraded {
            id,
            level: new_level,
        });
        CommandOutcome::Ok
    }

    /// Rings unlock in ascending order only.
    fn unlock_ring(&mut self, ring: u32) -> CommandOutcome {
        if matches!(self.phase, GamePhase::Victory | GamePhase::Defeat) {
            return CommandOutcome::WrongPhase;
        }
        let rings = match &mut self.topology {
            Topology::Rings(rings) => rings,
            Topology::Path(_) => return CommandOutcome::InvalidLocation,
        };
        let state = match rings.rings.get(ring as usize) {
            Some(state) => state,
            None => return CommandOutcome::InvalidLocation,
        };
        if state.unlocked {
            return CommandOutcome::InvalidLocation;
        }
        if rings.first_locked() != Some(ring) {
            return CommandOutcome::Locked;
        }
        let cost = state.spec.unlock_cost;
        if !self.economy.spend(cost) {
            return CommandOutcome::InsufficientFunds;
        }
        rings.unlock(ring);
        self.events.push(GameEvent::RingUnlocked { ring });
        CommandOutcome::Ok
    }

    fn start_next_wave(&mut self) -> CommandOutcome {
        if self.phase != GamePhase::Build {
            return CommandOutcome::WrongPhase;
        }
        self.director.start_wave();
        self.phase = GamePhase::Active;
        self.events.push(GameEvent::WaveStarted {
            wave: self.director.wave,
        });
        CommandOutcome::Ok
    }

    /// Toggling auto-start on while already in build arms the countdown
    /// immediately.
    fn toggle_auto_start(&mut self) -> CommandOutcome {
        self.director.auto_start = !self.director.auto_start;
        if self.director.auto_start && self.phase == GamePhase::Build {
            self.director.auto_start_timer = self.config.variant.waves.auto_start_delay;
        }
        CommandOutcome::Ok
    }

    /// Rebuild the engine from its own config: same seed, same variant,
    /// fresh everything else. Queued commands are dropped.
    fn restart(&mut self) {
        *self = SimulationEngine::new(self.config.clone());
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Topology rotation + emplacement position refresh
        self.topology.advance();
        systems::placement::run(&mut self.world, &self.topology);
        // 2. Wave lifecycle (auto-start, spawn cadence, completion)
        systems::wave_spawner::run(
            &mut self.world,
            &self.config.variant,
            &self.topology,
            &mut self.director,
            &mut self.economy,
            &mut self.phase,
            &mut self.events,
            &mut self.rng,
            &mut self.next_unit_id,
        );
        // 3. Status upkeep (slow rebuild, block countdown)
        systems::status::run(&mut self.world);
        // 4. Emplacement fire control
        systems::emplacement_fire::run(
            &mut self.world,
            &self.config.variant,
            &self.topology,
            &self.economy,
            &mut self.next_unit_id,
            self.time.tick,
        );
        // 5. Melee units (seek, strike, slow aura)
        systems::melee_units::run(&mut self.world, &mut self.rng);
        // 6. Area-denial zones (contact damage, push, integrity)
        systems::zones::run(&mut self.world, &self.config.variant, self.director.wave);
        // 7. Projectile flight + impacts
        systems::projectiles::run(&mut self.world, self.time.tick);
        // 8. Enemy movement
        systems::movement::run(
            &mut self.world,
            &self.topology,
            self.config.variant.min_speed_fraction,
        );
        // 9. Death/leak resolution, defeat check
        systems::resolve::run(
            &mut self.world,
            &self.config.variant,
            &mut self.director,
            &mut self.economy,
            &mut self.lives,
            &mut self.phase,
            &mut self.events,
        );
        // 10. Cleanup (settled enemies, finished effects, destroyed emplacements)
        systems::cleanup::run(
            &mut self.world,
            &mut self.topology,
            &mut self.economy,
            &self.config.variant,
            &mut self.despawn_buffer,
            &mut self.events,
        );
    }

    /// Get a mutable reference to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a read-only reference to the economy.
    #[cfg(test)]
    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    #[cfg(test)]
    pub fn economy_mut(&mut self) -> &mut Economy {
        &mut self.economy
    }

    /// Get a read-only reference to the wave director.
    #[cfg(test)]
    pub fn director(&self) -> &WaveDirector {
        &self.director
    }

    #[cfg(test)]
    pub fn director_mut(&mut self) -> &mut WaveDirector {
        &mut self.director
    }

    #[cfg(test)]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Spawn an enemy at an explicit position, bypassing the director
    /// (for combat tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        kind: rampart_core::enums::EnemyKind,
        position: rampart_core::types::Position,
    ) -> u32 {
        let id = self.alloc_id();
        let wave = self.director.wave;
        if let Some(entity) = world_setup::spawn_enemy(
            &mut self.world,
            &self.config.variant,
            &self.topology,
            kind,
            wave,
            id,
            &mut self.rng,
        ) {
            if let Ok(mut pos) = self.world.get::<&mut rampart_core::types::Position>(entity) {
                *pos = position;
            }
        }
        id
    }
}
