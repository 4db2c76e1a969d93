//! Per-variant configuration data: the emplacement and enemy catalogs,
//! topology layout, wave tuning, economy tuning, and clock speed tables.
//!
//! Systems never hard-code balance numbers; everything tunable lives here.
//! Two presets ship: [`VariantConfig::bastion`] (waypoint grid with towers)
//! and [`VariantConfig::orbital`] (rotating rings around a central station).

use crate::enums::{Difficulty, EmplacementKind, EnemyKind, TargetingPolicy};
use crate::types::Position;

/// Multiplicative per-level growth applied on upgrade, plus a flat
/// max-health increment.
#[derive(Debug, Clone, Copy)]
pub struct LevelScaling {
    pub damage_growth: f64,
    pub range_growth: f64,
    /// Applied to the fire interval; values below 1.0 shoot faster.
    pub interval_growth: f64,
    pub health_growth: f64,
    /// Flat max-health increase per level gained.
    pub flat_health: f64,
}

impl LevelScaling {
    /// No stat growth; upgrades only add flat health (central station).
    pub const fn flat(health: f64) -> Self {
        Self {
            damage_growth: 1.0,
            range_growth: 1.0,
            interval_growth: 1.0,
            health_growth: 1.0,
            flat_health: health,
        }
    }

    /// Standard combat curve shared by both presets.
    pub const fn combat(flat_health: f64) -> Self {
        Self {
            damage_growth: 1.4,
            range_growth: 1.2,
            interval_growth: 0.8,
            health_growth: 1.0,
            flat_health,
        }
    }
}

/// Cost-of-next-level formula.
#[derive(Debug, Clone)]
pub enum UpgradeCurve {
    /// cost = base_cost * current_level
    BaseTimesLevel,
    /// cost = floor(base_cost * (0.6 + 0.4 * current_level))
    GrowthFraction,
    /// Explicit cost per current level, indexed by level - 1.
    Table(Vec<u32>),
}

/// Stats for melee units deployed by barracks-style emplacements.
#[derive(Debug, Clone, Copy)]
pub struct MeleeUnitSpec {
    pub speed: f64,
    pub damage: f64,
    pub lifespan_ticks: u32,
    pub attack_range: f64,
    pub attack_interval: u32,
    /// Radius of the slow aura each unit projects.
    pub aggro_radius: f64,
    pub slow_factor: f64,
    /// Per-attack chance to apply a full movement block.
    pub block_chance: f64,
    pub block_ticks: u32,
    /// Units per deployment at level 1.
    pub base_count: u32,
    /// One extra unit per this many levels past the first.
    pub extra_count_every: u32,
}

impl MeleeUnitSpec {
    pub fn count_at(&self, level: u32) -> u32 {
        self.base_count + level.saturating_sub(1) / self.extra_count_every.max(1)
    }
}

/// Stats for area-denial zones deployed by shield-style emplacements.
#[derive(Debug, Clone, Copy)]
pub struct ZoneSpec {
    pub integrity: f64,
    pub block_radius: f64,
    pub base_lifetime_ticks: u32,
    pub lifetime_per_level: u32,
    pub slow_factor: f64,
    pub push_factor: f64,
    /// Contact damage per tick before enemy-type and wave multipliers.
    pub contact_damage: f64,
    /// Fractional contact-damage growth per wave past the first.
    pub wave_growth: f64,
    /// Zones per deployed wall.
    pub wall_size: u32,
    pub wall_spacing: f64,
    /// Distance from the emplacement toward the goal where the wall forms.
    pub deploy_distance: f64,
}

impl ZoneSpec {
    pub fn lifetime_at(&self, level: u32) -> u32 {
        self.base_lifetime_ticks + self.lifetime_per_level * level.saturating_sub(1)
    }
}

/// How an emplacement's damage reaches enemies.
#[derive(Debug, Clone)]
pub enum DamageDelivery {
    /// Non-combat support structure; never fires.
    Support,
    /// Instant hit on the resolved target.
    Direct,
    /// Seeking projectile; impact damages the target alone.
    Homing { speed: f64, impact_radius: f64 },
    /// Seeking projectile; impact splashes with linear falloff.
    Splash {
        speed: f64,
        impact_radius: f64,
        splash_radius: f64,
    },
    /// Instant hit that arcs to nearby enemies with decaying damage.
    Chain {
        max_hops: u32,
        hop_range: f64,
        decay: f64,
        min_hop_damage: f64,
    },
    /// Deploys melee units instead of firing.
    MeleeDeployment(MeleeUnitSpec),
    /// Deploys a wall of area-denial zones.
    Barrier(ZoneSpec),
}

/// Static definition of one emplacement kind.
#[derive(Debug, Clone)]
pub struct EmplacementSpec {
    pub kind: EmplacementKind,
    pub name: &'static str,
    pub blurb: &'static str,
    pub cost: u32,
    pub damage: f64,
    pub range: f64,
    /// Ticks between shots at level 1.
    pub fire_interval: u32,
    pub min_fire_interval: u32,
    pub max_health: f64,
    /// Positive = energy reserved while placed; negative = capacity added.
    pub energy_delta: f64,
    /// Flat change to the energy delta per level gained.
    pub energy_delta_per_level: f64,
    pub max_level: u32,
    pub scaling: LevelScaling,
    pub upgrade_curve: UpgradeCurve,
    pub targeting: TargetingPolicy,
    pub delivery: DamageDelivery,
}

impl EmplacementSpec {
    fn grown(base: f64, growth: f64, level: u32) -> f64 {
        base * growth.powi(level.saturating_sub(1) as i32)
    }

    pub fn damage_at(&self, level: u32) -> f64 {
        Self::grown(self.damage, self.scaling.damage_growth, level)
    }

    pub fn range_at(&self, level: u32) -> f64 {
        Self::grown(self.range, self.scaling.range_growth, level)
    }

    pub fn fire_interval_at(&self, level: u32) -> u32 {
        let scaled = Self::grown(
            self.fire_interval as f64,
            self.scaling.interval_growth,
            level,
        );
        (scaled.floor() as u32).max(self.min_fire_interval)
    }

    pub fn max_health_at(&self, level: u32) -> f64 {
        Self::grown(self.max_health, self.scaling.health_growth, level)
            + self.scaling.flat_health * level.saturating_sub(1) as f64
    }

    pub fn energy_delta_at(&self, level: u32) -> f64 {
        self.energy_delta + self.energy_delta_per_level * level.saturating_sub(1) as f64
    }

    /// Cost to go from `level` to `level + 1`; None at the cap.
    pub fn upgrade_cost(&self, level: u32) -> Option<u32> {
        if level >= self.max_level {
            return None;
        }
        let cost = match &self.upgrade_curve {
            UpgradeCurve::BaseTimesLevel => self.cost * level,
            UpgradeCurve::GrowthFraction => self.cost * (3 + 2 * level) / 5,
            UpgradeCurve::Table(costs) => costs
                .get(level.saturating_sub(1) as usize)
                .copied()
                .unwrap_or(10_000),
        };
        Some(cost)
    }
}

/// Variant-wide multiplicative wave scaling, applied at enemy construction.
#[derive(Debug, Clone, Copy)]
pub struct WaveScaling {
    /// Fractional health growth per wave past the first.
    pub health_growth: f64,
    /// Fractional speed growth per wave past the first.
    pub speed_growth: f64,
    /// Extra boss health factor 1 + wave/divisor; 0 disables.
    pub boss_health_divisor: f64,
}

/// Static definition of one enemy kind.
#[derive(Debug, Clone, Copy)]
pub struct EnemySpec {
    pub kind: EnemyKind,
    pub name: &'static str,
    pub health: f64,
    /// World units per tick.
    pub speed: f64,
    pub radius: f64,
    pub reward: u32,
    pub reward_per_wave: u32,
    /// Score awarded on kill.
    pub points: u32,
    /// Additive per-wave health growth (bastion-style linear scaling).
    pub health_per_wave: f64,
    pub speed_per_wave: f64,
    /// Multiplier on zone contact damage taken.
    pub zone_damage_mult: f64,
    /// First wave this kind may appear in regular composition; None keeps
    /// it out of regular draws (boss waves and forced spawns only).
    pub unlock_wave: Option<u32>,
    pub boss: bool,
}

impl EnemySpec {
    pub fn health_at(&self, wave: u32, scaling: &WaveScaling, difficulty: DifficultyScaling) -> f64 {
        let waves_past = wave.saturating_sub(1) as f64;
        let mut health = (self.health + self.health_per_wave * wave as f64)
            * (1.0 + scaling.health_growth * waves_past);
        if self.boss && scaling.boss_health_divisor > 0.0 {
            health *= 1.0 + wave as f64 / scaling.boss_health_divisor;
        }
        (health * difficulty.health_mult).floor()
    }

    pub fn speed_at(&self, wave: u32, scaling: &WaveScaling, difficulty: DifficultyScaling) -> f64 {
        let waves_past = wave.saturating_sub(1) as f64;
        (self.speed + self.speed_per_wave * wave as f64)
            * (1.0 + scaling.speed_growth * waves_past)
            * difficulty.speed_mult
    }

    /// Kill reward for an enemy spawned in `wave`, optionally capped at a
    /// multiple of the base reward.
    pub fn reward_at(&self, wave: u32, cap: Option<f64>) -> u32 {
        let raw = self.reward + self.reward_per_wave * wave;
        match cap {
            Some(cap) => raw.min((self.reward as f64 * cap).floor() as u32),
            None => raw,
        }
    }
}

/// One ring of the orbital layout.
#[derive(Debug, Clone, Copy)]
pub struct RingSpec {
    pub radius: f64,
    pub slots: u32,
    /// Degrees of rotation per tick.
    pub rotation_rate: f64,
    pub unlocked: bool,
    pub unlock_cost: u32,
}

/// Static topology layout. Runtime state (rotation, occupancy) lives in the
/// sim crate.
#[derive(Debug, Clone)]
pub enum TopologySpec {
    Path {
        width: f64,
        height: f64,
        cell_size: f64,
        /// Waypoints in world units, in traversal order.
        waypoints: Vec<Position>,
    },
    Rings {
        center: Position,
        /// Enemies spawn on this circle.
        spawn_radius: f64,
        /// Enemies stop (and leak) at this distance from the center.
        standoff: f64,
        /// Station damage per leaked enemy.
        leak_damage: f64,
        rings: Vec<RingSpec>,
    },
}

/// Wave composition and cadence tuning.
#[derive(Debug, Clone)]
pub struct WaveTuning {
    pub total_waves: u32,
    pub count_base: u32,
    /// floor(wave * this) extra enemies.
    pub count_per_wave: f64,
    /// floor(wave / 10) * this extra enemies.
    pub count_per_decade: u32,
    /// Every Nth wave is a boss wave; 0 disables boss waves.
    pub boss_wave_every: u32,
    /// Boss waves shrink to this fraction of the regular size.
    pub boss_wave_factor: f64,
    pub spawn_interval_base: u32,
    pub spawn_interval_step: u32,
    /// Waves per interval step.
    pub spawn_interval_step_every: u32,
    pub spawn_interval_min: u32,
    /// Largest batch of one kind drawn at once during composition.
    pub batch_max: u32,
    pub completion_bonus_base: u32,
    pub completion_bonus_per_wave: u32,
    pub completion_points: u32,
    /// Extra points per wave number when nothing leaked.
    pub perfect_points_per_wave: u32,
    /// Point penalty per placed emplacement at completion.
    pub point_penalty_per_emplacement: u32,
    /// Build-phase countdown when auto-start is enabled.
    pub auto_start_delay: u32,
    pub scaling: WaveScaling,
}

/// Starting resources and reward policy.
#[derive(Debug, Clone)]
pub struct EconomyTuning {
    pub starting_currency: u32,
    /// Leak budget; None when the variant uses station health instead.
    pub lives: Option<u32>,
    /// Optional cap on scaled kill rewards, as a multiple of base reward.
    pub reward_cap_multiple: Option<f64>,
}

/// Difficulty multipliers applied at enemy construction.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyScaling {
    pub health_mult: f64,
    pub speed_mult: f64,
}

/// Complete rule set for one variant.
#[derive(Debug, Clone)]
pub struct VariantConfig {
    pub name: &'static str,
    pub emplacements: Vec<EmplacementSpec>,
    pub enemies: Vec<EnemySpec>,
    pub topology: TopologySpec,
    pub waves: WaveTuning,
    pub economy: EconomyTuning,
    /// Ticks advanced per frame at each speed level; index 0 is pause.
    pub speed_levels: Vec<u32>,
    /// Index into `speed_levels` at match start.
    pub default_speed: usize,
    pub difficulty: Difficulty,
    /// Slow floor as a fraction of base speed.
    pub min_speed_fraction: f64,
    /// Whether emplacements can be destroyed by health depletion.
    pub emplacements_destructible: bool,
}

impl VariantConfig {
    pub fn emplacement(&self, kind: EmplacementKind) -> Option<&EmplacementSpec> {
        self.emplacements.iter().find(|spec| spec.kind == kind)
    }

    pub fn enemy(&self, kind: EnemyKind) -> Option<&EnemySpec> {
        self.enemies.iter().find(|spec| spec.kind == kind)
    }

    pub fn boss(&self) -> Option<&EnemySpec> {
        self.enemies.iter().find(|spec| spec.boss)
    }

    pub fn difficulty_scaling(&self) -> DifficultyScaling {
        match self.difficulty {
            Difficulty::Easy => DifficultyScaling {
                health_mult: 0.8,
                speed_mult: 0.9,
            },
            Difficulty::Normal => DifficultyScaling {
                health_mult: 1.0,
                speed_mult: 1.0,
            },
            Difficulty::Hard => DifficultyScaling {
                health_mult: 1.25,
                speed_mult: 1.1,
            },
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Waypoint-grid preset: four tower kinds, a lives counter, ten waves.
    pub fn bastion() -> Self {
        let cell = 40.0;
        let (width, height) = (800.0, 600.0);
        let soldier = MeleeUnitSpec {
            speed: 1.0,
            damage: 10.0,
            lifespan_ticks: 600,
            attack_range: 20.0,
            attack_interval: 60,
            aggro_radius: 40.0,
            slow_factor: 0.3,
            block_chance: 0.1,
            block_ticks: 30,
            base_count: 1,
            extra_count_every: 2,
        };
        Self {
            name: "bastion",
            emplacements: vec![
                EmplacementSpec {
                    kind: EmplacementKind::Archer,
                    name: "Archer Tower",
                    blurb: "Fast firing, moderate damage.",
                    cost: 100,
                    damage: 20.0,
                    range: 100.0,
                    fire_interval: 30,
                    min_fire_interval: 10,
                    max_health: 100.0,
                    energy_delta: 0.0,
                    energy_delta_per_level: 0.0,
                    max_level: 3,
                    scaling: LevelScaling::combat(0.0),
                    upgrade_curve: UpgradeCurve::BaseTimesLevel,
                    targeting: TargetingPolicy::NearestInRange,
                    delivery: DamageDelivery::Homing {
                        speed: 5.0,
                        impact_radius: 0.0,
                    },
                },
                EmplacementSpec {
                    kind: EmplacementKind::Mage,
                    name: "Mage Tower",
                    blurb: "Slow bolts, heavy damage.",
                    cost: 150,
                    damage: 40.0,
                    range: 120.0,
                    fire_interval: 60,
                    min_fire_interval: 10,
                    max_health: 100.0,
                    energy_delta: 0.0,
                    energy_delta_per_level: 0.0,
                    max_level: 3,
                    scaling: LevelScaling::combat(0.0),
                    upgrade_curve: UpgradeCurve::BaseTimesLevel,
                    targeting: TargetingPolicy::NearestInRange,
                    delivery: DamageDelivery::Homing {
                        speed: 4.0,
                        impact_radius: 0.0,
                    },
                },
                EmplacementSpec {
                    kind: EmplacementKind::Cannon,
                    name: "Cannon Tower",
                    blurb: "Splash damage around the impact.",
                    cost: 200,
                    damage: 60.0,
                    range: 80.0,
                    fire_interval: 90,
                    min_fire_interval: 10,
                    max_health: 100.0,
                    energy_delta: 0.0,
                    energy_delta_per_level: 0.0,
                    max_level: 3,
                    scaling: LevelScaling::combat(0.0),
                    upgrade_curve: UpgradeCurve::BaseTimesLevel,
                    targeting: TargetingPolicy::NearestInRange,
                    delivery: DamageDelivery::Splash {
                        speed: 3.0,
                        impact_radius: 0.0,
                        splash_radius: 30.0,
                    },
                },
                EmplacementSpec {
                    kind: EmplacementKind::Barracks,
                    name: "Barracks",
                    blurb: "Deploys soldiers that slow and block.",
                    cost: 175,
                    damage: 0.0,
                    range: 60.0,
                    fire_interval: 180,
                    min_fire_interval: 30,
                    max_health: 100.0,
                    energy_delta: 0.0,
                    energy_delta_per_level: 0.0,
                    max_level: 3,
                    scaling: LevelScaling::combat(0.0),
                    upgrade_curve: UpgradeCurve::BaseTimesLevel,
                    targeting: TargetingPolicy::FurthestAlong,
                    delivery: DamageDelivery::MeleeDeployment(soldier),
                },
            ],
            enemies: vec![
                EnemySpec {
                    kind: EnemyKind::Normal,
                    name: "Raider",
                    health: 50.0,
                    speed: 1.0,
                    radius: 10.0,
                    reward: 10,
                    reward_per_wave: 1,
                    points: 10,
                    health_per_wave: 10.0,
                    speed_per_wave: 0.05,
                    zone_damage_mult: 1.0,
                    unlock_wave: Some(1),
                    boss: false,
                },
                EnemySpec {
                    kind: EnemyKind::Fast,
                    name: "Runner",
                    health: 30.0,
                    speed: 2.0,
                    radius: 8.0,
                    reward: 15,
                    reward_per_wave: 2,
                    points: 15,
                    health_per_wave: 5.0,
                    speed_per_wave: 0.1,
                    zone_damage_mult: 0.8,
                    unlock_wave: Some(3),
                    boss: false,
                },
                EnemySpec {
                    kind: EnemyKind::Tank,
                    name: "Juggernaut",
                    health: 150.0,
                    speed: 0.5,
                    radius: 14.0,
                    reward: 30,
                    reward_per_wave: 3,
                    points: 30,
                    health_per_wave: 20.0,
                    speed_per_wave: 0.05,
                    zone_damage_mult: 2.0,
                    unlock_wave: Some(5),
                    boss: false,
                },
                EnemySpec {
                    kind: EnemyKind::Boss,
                    name: "Warlord",
                    health: 500.0,
                    speed: 0.7,
                    radius: 20.0,
                    reward: 100,
                    reward_per_wave: 10,
                    points: 100,
                    health_per_wave: 50.0,
                    speed_per_wave: 0.03,
                    zone_damage_mult: 4.0,
                    unlock_wave: Some(8),
                    boss: true,
                },
            ],
            topology: TopologySpec::Path {
                width,
                height,
                cell_size: cell,
                waypoints: vec![
                    Position::new(1.5 * cell, height - 1.5 * cell),
                    Position::new(1.5 * cell, 8.0 * cell),
                    Position::new(10.0 * cell, 8.0 * cell),
                    Position::new(10.0 * cell, 2.5 * cell),
                    Position::new(width - 1.5 * cell, 2.5 * cell),
                ],
            },
            waves: WaveTuning {
                total_waves: 10,
                count_base: 5,
                count_per_wave: 1.5,
                count_per_decade: 0,
                boss_wave_every: 0,
                boss_wave_factor: 0.6,
                spawn_interval_base: 90,
                spawn_interval_step: 5,
                spawn_interval_step_every: 1,
                spawn_interval_min: 30,
                batch_max: 3,
                completion_bonus_base: 50,
                completion_bonus_per_wave: 10,
                completion_points: 0,
                perfect_points_per_wave: 0,
                point_penalty_per_emplacement: 0,
                auto_start_delay: 180,
                scaling: WaveScaling {
                    health_growth: 0.0,
                    speed_growth: 0.0,
                    boss_health_divisor: 0.0,
                },
            },
            economy: EconomyTuning {
                starting_currency: 500,
                lives: Some(10),
                reward_cap_multiple: None,
            },
            speed_levels: vec![0, 1, 2, 3],
            default_speed: 1,
            difficulty: Difficulty::Normal,
            min_speed_fraction: 0.25,
            emplacements_destructible: false,
        }
    }

    /// Rotating-ring preset: five satellite kinds around a central station
    /// with an energy ledger.
    pub fn orbital() -> Self {
        let center = Position::new(450.0, 350.0);
        let barrier = ZoneSpec {
            integrity: 75.0,
            block_radius: 15.0,
            base_lifetime_ticks: 120,
            lifetime_per_level: 60,
            slow_factor: 0.25,
            push_factor: 0.3,
            contact_damage: 5.0,
            wave_growth: 0.1,
            wall_size: 4,
            wall_spacing: 20.0,
            deploy_distance: 40.0,
        };
        Self {
            name: "orbital",
            emplacements: vec![
                EmplacementSpec {
                    kind: EmplacementKind::Laser,
                    name: "Laser Satellite",
                    blurb: "Instant beam, cheap and steady.",
                    cost: 75,
                    damage: 25.0,
                    range: 100.0,
                    fire_interval: 20,
                    min_fire_interval: 10,
                    max_health: 100.0,
                    energy_delta: 15.0,
                    energy_delta_per_level: 0.0,
                    max_level: 3,
                    scaling: LevelScaling::combat(50.0),
                    upgrade_curve: UpgradeCurve::GrowthFraction,
                    targeting: TargetingPolicy::NearestInRange,
                    delivery: DamageDelivery::Direct,
                },
                EmplacementSpec {
                    kind: EmplacementKind::Missile,
                    name: "Missile Satellite",
                    blurb: "Slow homing warheads, heavy damage.",
                    cost: 125,
                    damage: 60.0,
                    range: 150.0,
                    fire_interval: 45,
                    min_fire_interval: 10,
                    max_health: 100.0,
                    energy_delta: 25.0,
                    energy_delta_per_level: 0.0,
                    max_level: 3,
                    scaling: LevelScaling::combat(50.0),
                    upgrade_curve: UpgradeCurve::GrowthFraction,
                    targeting: TargetingPolicy::NearestInRange,
                    delivery: DamageDelivery::Homing {
                        speed: 3.0,
                        impact_radius: 5.0,
                    },
                },
                EmplacementSpec {
                    kind: EmplacementKind::Tesla,
                    name: "Tesla Satellite",
                    blurb: "Arcs between clustered enemies.",
                    cost: 150,
                    damage: 35.0,
                    range: 120.0,
                    fire_interval: 40,
                    min_fire_interval: 10,
                    max_health: 100.0,
                    energy_delta: 30.0,
                    energy_delta_per_level: 0.0,
                    max_level: 3,
                    scaling: LevelScaling::combat(50.0),
                    upgrade_curve: UpgradeCurve::GrowthFraction,
                    targeting: TargetingPolicy::NearestInRange,
                    delivery: DamageDelivery::Chain {
                        max_hops: 3,
                        hop_range: 80.0,
                        decay: 0.7,
                        min_hop_damage: 10.0,
                    },
                },
                EmplacementSpec {
                    kind: EmplacementKind::Shield,
                    name: "Shield Satellite",
                    blurb: "Projects barrier walls that slow and repel.",
                    cost: 175,
                    damage: 0.0,
                    range: 100.0,
                    fire_interval: 180,
                    min_fire_interval: 15,
                    max_health: 100.0,
                    energy_delta: 20.0,
                    energy_delta_per_level: 0.0,
                    max_level: 3,
                    scaling: LevelScaling {
                        damage_growth: 1.0,
                        range_growth: 1.3,
                        interval_growth: 0.7,
                        health_growth: 1.0,
                        flat_health: 50.0,
                    },
                    upgrade_curve: UpgradeCurve::GrowthFraction,
                    targeting: TargetingPolicy::NearestInRange,
                    delivery: DamageDelivery::Barrier(barrier),
                },
                EmplacementSpec {
                    kind: EmplacementKind::Pylon,
                    name: "Energy Pylon",
                    blurb: "Generates the energy satellites consume.",
                    cost: 200,
                    damage: 0.0,
                    range: 180.0,
                    fire_interval: 0,
                    min_fire_interval: 0,
                    max_health: 100.0,
                    energy_delta: -75.0,
                    energy_delta_per_level: -25.0,
                    max_level: 3,
                    scaling: LevelScaling::flat(50.0),
                    upgrade_curve: UpgradeCurve::GrowthFraction,
                    targeting: TargetingPolicy::NearestInRange,
                    delivery: DamageDelivery::Support,
                },
                EmplacementSpec {
                    kind: EmplacementKind::Station,
                    name: "Space Station",
                    blurb: "The structure everything defends.",
                    cost: 0,
                    damage: 150.0,
                    range: 150.0,
                    fire_interval: 60,
                    min_fire_interval: 10,
                    max_health: 1000.0,
                    energy_delta: 0.0,
                    energy_delta_per_level: 0.0,
                    max_level: 5,
                    scaling: LevelScaling::flat(200.0),
                    upgrade_curve: UpgradeCurve::Table(vec![500, 1200, 2500, 5000]),
                    targeting: TargetingPolicy::NearestInRange,
                    delivery: DamageDelivery::Homing {
                        speed: 4.0,
                        impact_radius: 10.0,
                    },
                },
            ],
            enemies: vec![
                EnemySpec {
                    kind: EnemyKind::Scout,
                    name: "Scout",
                    health: 80.0,
                    speed: 2.0,
                    radius: 6.0,
                    reward: 15,
                    reward_per_wave: 0,
                    points: 0,
                    health_per_wave: 0.0,
                    speed_per_wave: 0.0,
                    zone_damage_mult: 0.8,
                    unlock_wave: Some(1),
                    boss: false,
                },
                EnemySpec {
                    kind: EnemyKind::Fighter,
                    name: "Fighter",
                    health: 120.0,
                    speed: 1.5,
                    radius: 8.0,
                    reward: 15,
                    reward_per_wave: 0,
                    points: 0,
                    health_per_wave: 0.0,
                    speed_per_wave: 0.0,
                    zone_damage_mult: 1.0,
                    unlock_wave: Some(1),
                    boss: false,
                },
                EnemySpec {
                    kind: EnemyKind::Heavy,
                    name: "Heavy",
                    health: 200.0,
                    speed: 1.0,
                    radius: 10.0,
                    reward: 15,
                    reward_per_wave: 0,
                    points: 0,
                    health_per_wave: 0.0,
                    speed_per_wave: 0.0,
                    zone_damage_mult: 2.0,
                    unlock_wave: Some(5),
                    boss: false,
                },
                EnemySpec {
                    kind: EnemyKind::Stealth,
                    name: "Stealth",
                    health: 60.0,
                    speed: 2.5,
                    radius: 5.0,
                    reward: 15,
                    reward_per_wave: 0,
                    points: 0,
                    health_per_wave: 0.0,
                    speed_per_wave: 0.0,
                    zone_damage_mult: 0.6,
                    unlock_wave: Some(15),
                    boss: false,
                },
                EnemySpec {
                    kind: EnemyKind::Boss,
                    name: "Dreadnought",
                    health: 500.0,
                    speed: 0.8,
                    radius: 20.0,
                    reward: 15,
                    reward_per_wave: 0,
                    points: 0,
                    health_per_wave: 0.0,
                    speed_per_wave: 0.0,
                    zone_damage_mult: 4.0,
                    unlock_wave: None,
                    boss: true,
                },
            ],
            topology: TopologySpec::Rings {
                center,
                spawn_radius: 400.0,
                standoff: 50.0,
                leak_damage: 50.0,
                rings: vec![
                    RingSpec {
                        radius: 120.0,
                        slots: 8,
                        rotation_rate: 1.5,
                        unlocked: true,
                        unlock_cost: 0,
                    },
                    RingSpec {
                        radius: 200.0,
                        slots: 10,
                        rotation_rate: 1.0,
                        unlocked: false,
                        unlock_cost: 200,
                    },
                    RingSpec {
                        radius: 280.0,
                        slots: 12,
                        rotation_rate: 0.7,
                        unlocked: false,
                        unlock_cost: 500,
                    },
                ],
            },
            waves: WaveTuning {
                total_waves: 1000,
                count_base: 3,
                count_per_wave: 0.5,
                count_per_decade: 1,
                boss_wave_every: 10,
                boss_wave_factor: 0.6,
                spawn_interval_base: 60,
                spawn_interval_step: 5,
                spawn_interval_step_every: 10,
                spawn_interval_min: 20,
                batch_max: 3,
                completion_bonus_base: 50,
                completion_bonus_per_wave: 10,
                completion_points: 100,
                perfect_points_per_wave: 20,
                point_penalty_per_emplacement: 5,
                auto_start_delay: 180,
                scaling: WaveScaling {
                    health_growth: 0.15,
                    speed_growth: 0.05,
                    boss_health_divisor: 10.0,
                },
            },
            economy: EconomyTuning {
                starting_currency: 500,
                lives: None,
                reward_cap_multiple: None,
            },
            speed_levels: vec![0, 1, 5, 10],
            default_speed: 1,
            difficulty: Difficulty::Normal,
            min_speed_fraction: 0.25,
            emplacements_destructible: true,
        }
    }
}
