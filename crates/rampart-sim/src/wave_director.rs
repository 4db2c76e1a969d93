//! Wave composition and spawn bookkeeping.
//!
//! The director owns everything about the current wave: what remains to
//! spawn, what has resolved, the spawn cadence, and the auto-start
//! countdown. Phase transitions themselves happen in the wave spawner
//! system, which reads and updates this state.

use rampart_core::catalog::{VariantConfig, WaveTuning};
use rampart_core::enums::EnemyKind;
use rand::Rng;

/// One batch of a single enemy kind, consumed front-to-back at spawn time.
#[derive(Debug, Clone, Copy)]
pub struct WaveEntry {
    pub kind: EnemyKind,
    pub count: u32,
}

#[derive(Debug, Clone)]
pub struct WaveDirector {
    /// 1-based wave counter; also the next wave to run while in build.
    pub wave: u32,
    pub composition: Vec<WaveEntry>,
    pub spawned: u32,
    pub to_spawn: u32,
    /// Killed or leaked.
    pub resolved: u32,
    pub leaked: u32,
    pub perfect: bool,
    pub spawn_timer: u32,
    pub spawn_interval: u32,
    pub auto_start: bool,
    pub auto_start_timer: u32,
}

impl WaveDirector {
    pub fn new(config: &VariantConfig, rng: &mut impl Rng) -> Self {
        let mut director = Self {
            wave: 1,
            composition: Vec::new(),
            spawned: 0,
            to_spawn: 0,
            resolved: 0,
            leaked: 0,
            perfect: true,
            spawn_timer: 0,
            spawn_interval: 0,
            auto_start: false,
            auto_start_timer: 0,
        };
        director.compose(config, rng);
        director
    }

    /// Regenerate the composition for the current wave counter.
    pub fn compose(&mut self, config: &VariantConfig, rng: &mut impl Rng) {
        let tuning = &config.waves;
        self.composition.clear();

        let mut remaining = wave_size(tuning, self.wave);
        if is_boss_wave(tuning, self.wave) {
            remaining = ((remaining as f64 * tuning.boss_wave_factor).floor() as u32).max(1);
            if let Some(boss) = config.boss() {
                self.composition.push(WaveEntry {
                    kind: boss.kind,
                    count: 1,
                });
                remaining -= 1;
            }
        }

        let unlocked: Vec<EnemyKind> = config
            .enemies
            .iter()
            .filter(|spec| spec.unlock_wave.is_some_and(|wave| self.wave >= wave))
            .map(|spec| spec.kind)
            .collect();
        while remaining > 0 && !unlocked.is_empty() {
            let kind = unlocked[rng.gen_range(0..unlocked.len())];
            let batch = rng.gen_range(1..=tuning.batch_max.max(1)).min(remaining);
            match self.composition.iter_mut().find(|entry| entry.kind == kind) {
                Some(entry) => entry.count += batch,
                None => self.composition.push(WaveEntry { kind, count: batch }),
            }
            remaining -= batch;
        }

        self.to_spawn = self.composition.iter().map(|entry| entry.count).sum();
        self.spawn_interval = spawn_interval(tuning, self.wave);
    }

    /// Reset spawn bookkeeping for wave start. The first spawn happens on
    /// the first active tick.
    pub fn start_wave(&mut self) {
        self.spawned = 0;
        self.resolved = 0;
        self.leaked = 0;
        self.perfect = true;
        self.spawn_timer = 0;
    }

    /// Pop the next enemy kind to spawn. The final enemy of the final wave
    /// is always the boss.
    pub fn next_spawn(&mut self, config: &VariantConfig) -> Option<EnemyKind> {
        let entry = self.composition.iter_mut().find(|entry| entry.count > 0)?;
        entry.count -= 1;
        let mut kind = entry.kind;
        self.spawned += 1;
        if self.wave == config.waves.total_waves && self.spawned == self.to_spawn {
            if let Some(boss) = config.boss() {
                kind = boss.kind;
            }
        }
        Some(kind)
    }

    pub fn wave_cleared(&self, alive: u32) -> bool {
        self.spawned >= self.to_spawn && alive == 0
    }

    /// Score bonus at wave completion, reduced by the per-emplacement
    /// penalty and floored at zero.
    pub fn completion_points(&self, tuning: &WaveTuning, emplacement_count: u32) -> u32 {
        let base = tuning.completion_points
            + if self.perfect {
                tuning.perfect_points_per_wave * self.wave
            } else {
                0
            };
        base.saturating_sub(tuning.point_penalty_per_emplacement * emplacement_count)
    }
}

/// Enemy count for a wave before any boss-wave reduction.
pub fn wave_size(tuning: &WaveTuning, wave: u32) -> u32 {
    tuning.count_base
        + (wave as f64 * tuning.count_per_wave).floor() as u32
        + (wave / 10) * tuning.count_per_decade
}

pub fn is_boss_wave(tuning: &WaveTuning, wave: u32) -> bool {
    tuning.boss_wave_every > 0 && wave % tuning.boss_wave_every == 0
}

/// Ticks between spawns, tightening as waves progress.
pub fn spawn_interval(tuning: &WaveTuning, wave: u32) -> u32 {
    tuning
        .spawn_interval_base
        .saturating_sub(tuning.spawn_interval_step * (wave / tuning.spawn_interval_step_every.max(1)))
        .max(tuning.spawn_interval_min)
}

/// Currency bonus at wave completion.
pub fn completion_bonus(tuning: &WaveTuning, wave: u32) -> u32 {
    tuning.completion_bonus_base + tuning.completion_bonus_per_wave * wave
}
