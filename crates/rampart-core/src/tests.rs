#[cfg(test)]
mod tests {
    use crate::catalog::{UpgradeCurve, VariantConfig};
    use crate::commands::{CommandOutcome, LocationRef, PlayerCommand};
    use crate::components::{Placement, StatusEffects};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Build,
            GamePhase::Active,
            GamePhase::Victory,
            GamePhase::Defeat,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_emplacement_kind_serde() {
        let variants = vec![
            EmplacementKind::Archer,
            EmplacementKind::Mage,
            EmplacementKind::Cannon,
            EmplacementKind::Barracks,
            EmplacementKind::Laser,
            EmplacementKind::Missile,
            EmplacementKind::Tesla,
            EmplacementKind::Shield,
            EmplacementKind::Pylon,
            EmplacementKind::Station,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EmplacementKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![
            EnemyKind::Normal,
            EnemyKind::Fast,
            EnemyKind::Tank,
            EnemyKind::Scout,
            EnemyKind::Fighter,
            EnemyKind::Heavy,
            EnemyKind::Stealth,
            EnemyKind::Boss,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::PlaceEmplacement {
                kind: EmplacementKind::Archer,
                location: LocationRef::Cell { col: 3, row: 4 },
            },
            PlayerCommand::PlaceEmplacement {
                kind: EmplacementKind::Laser,
                location: LocationRef::Slot { ring: 0, slot: 5 },
            },
            PlayerCommand::UpgradeEmplacement { id: 7 },
            PlayerCommand::UnlockRing { ring: 1 },
            PlayerCommand::StartNextWave,
            PlayerCommand::SetSpeed { level: 2 },
            PlayerCommand::ToggleAutoStart,
            PlayerCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    #[test]
    fn test_command_outcome_serde() {
        let outcomes = vec![
            CommandOutcome::Ok,
            CommandOutcome::InsufficientFunds,
            CommandOutcome::InvalidLocation,
            CommandOutcome::AlreadyOccupied,
            CommandOutcome::MaxLevel,
            CommandOutcome::WrongPhase,
            CommandOutcome::Locked,
        ];
        for v in &outcomes {
            let json = serde_json::to_string(v).unwrap();
            let back: CommandOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(*v, back);
        }
        assert!(CommandOutcome::Ok.is_ok());
        assert!(!CommandOutcome::Locked.is_ok());
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::EnemySpawned {
                id: 1,
                kind: EnemyKind::Normal,
                wave: 1,
            },
            GameEvent::EnemyKilled {
                id: 1,
                kind: EnemyKind::Normal,
                reward: 11,
                points: 10,
            },
            GameEvent::EnemyLeaked {
                id: 2,
                kind: EnemyKind::Fast,
            },
            GameEvent::WaveCompleted {
                wave: 3,
                bonus: 80,
                points: 160,
                perfect: true,
            },
            GameEvent::Victory,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_placement_location_round_trip() {
        let cell = Placement::Cell { col: 2, row: 9 };
        assert_eq!(cell.location(), Some(LocationRef::Cell { col: 2, row: 9 }));
        assert_eq!(Placement::from(cell.location().unwrap()), cell);

        let slot = Placement::Slot { ring: 1, slot: 4 };
        assert_eq!(
            slot.location(),
            Some(LocationRef::Slot { ring: 1, slot: 4 })
        );
        assert_eq!(Placement::from(slot.location().unwrap()), slot);

        assert_eq!(Placement::Core.location(), None);
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_step_toward() {
        let mut p = Position::new(0.0, 0.0);
        let target = Position::new(10.0, 0.0);
        p.step_toward(&target, 3.0);
        assert!((p.x - 3.0).abs() < 1e-10);
        assert!((p.y - 0.0).abs() < 1e-10);

        // Steps past the target snap onto it.
        p.step_toward(&target, 100.0);
        assert_eq!(p, target);

        // Stepping while on the target stays put.
        p.step_toward(&target, 5.0);
        assert_eq!(p, target);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    // --- Catalog invariants ---

    #[test]
    fn test_bastion_preset_sane() {
        let config = VariantConfig::bastion();
        assert!(!config.emplacements.is_empty());
        assert!(!config.enemies.is_empty());
        assert!(config.boss().is_some());
        assert!(config.economy.lives.is_some());
        assert!(!config.emplacements_destructible);
        assert_eq!(config.speed_levels[0], 0);
        assert!(config.default_speed < config.speed_levels.len());
        for spec in &config.emplacements {
            assert!(spec.max_level >= 1, "{} has no levels", spec.name);
            assert!(spec.max_health > 0.0);
        }
    }

    #[test]
    fn test_orbital_preset_sane() {
        let config = VariantConfig::orbital();
        assert!(config.boss().is_some());
        assert!(config.economy.lives.is_none());
        assert!(config.emplacements_destructible);
        assert!(config.emplacement(EmplacementKind::Station).is_some());
        // Exactly one ring starts unlocked, and locked rings cost something.
        match &config.topology {
            crate::catalog::TopologySpec::Rings { rings, .. } => {
                assert_eq!(rings.iter().filter(|r| r.unlocked).count(), 1);
                for ring in rings.iter().filter(|r| !r.unlocked) {
                    assert!(ring.unlock_cost > 0);
                }
            }
            _ => panic!("orbital should use ring topology"),
        }
    }

    /// Level curves: damage and range grow, fire interval shrinks to a floor.
    #[test]
    fn test_emplacement_level_curves() {
        let config = VariantConfig::orbital();
        let laser = config.emplacement(EmplacementKind::Laser).unwrap();
        assert!((laser.damage_at(1) - 25.0).abs() < 1e-10);
        assert!((laser.damage_at(2) - 35.0).abs() < 1e-10);
        assert!((laser.damage_at(3) - 49.0).abs() < 1e-10);
        assert_eq!(laser.fire_interval_at(1), 20);
        assert_eq!(laser.fire_interval_at(2), 16);
        assert_eq!(laser.fire_interval_at(3), 12);

        let shield = config.emplacement(EmplacementKind::Shield).unwrap();
        assert_eq!(shield.fire_interval_at(1), 180);
        // 180 * 0.7 lands just below 126.0 in f64, so the floor keeps 125.
        assert_eq!(shield.fire_interval_at(2), 125);
        assert_eq!(shield.fire_interval_at(3), 88);
        // The floor kicks in once the curve would undershoot it.
        assert_eq!(shield.fire_interval_at(10), shield.min_fire_interval);
    }

    #[test]
    fn test_pylon_energy_delta_per_level() {
        let config = VariantConfig::orbital();
        let pylon = config.emplacement(EmplacementKind::Pylon).unwrap();
        assert!((pylon.energy_delta_at(1) - -75.0).abs() < 1e-10);
        assert!((pylon.energy_delta_at(2) - -100.0).abs() < 1e-10);
        assert!((pylon.energy_delta_at(3) - -125.0).abs() < 1e-10);
    }

    #[test]
    fn test_upgrade_costs() {
        let bastion = VariantConfig::bastion();
        let archer = bastion.emplacement(EmplacementKind::Archer).unwrap();
        assert_eq!(archer.upgrade_cost(1), Some(100));
        assert_eq!(archer.upgrade_cost(2), Some(200));
        assert_eq!(archer.upgrade_cost(3), None);

        let orbital = VariantConfig::orbital();
        let laser = orbital.emplacement(EmplacementKind::Laser).unwrap();
        assert_eq!(laser.upgrade_cost(1), Some(75));
        assert_eq!(laser.upgrade_cost(2), Some(105));
        assert_eq!(laser.upgrade_cost(3), None);

        let station = orbital.emplacement(EmplacementKind::Station).unwrap();
        assert!(matches!(station.upgrade_curve, UpgradeCurve::Table(_)));
        assert_eq!(station.upgrade_cost(1), Some(500));
        assert_eq!(station.upgrade_cost(4), Some(5000));
        assert_eq!(station.upgrade_cost(5), None);
    }

    #[test]
    fn test_station_health_grows_flat() {
        let config = VariantConfig::orbital();
        let station = config.emplacement(EmplacementKind::Station).unwrap();
        assert!((station.max_health_at(1) - 1000.0).abs() < 1e-10);
        assert!((station.max_health_at(2) - 1200.0).abs() < 1e-10);
        assert!((station.max_health_at(5) - 1800.0).abs() < 1e-10);
    }

    /// Additive per-wave enemy scaling used by the bastion preset.
    #[test]
    fn test_bastion_enemy_scaling() {
        let config = VariantConfig::bastion();
        let scaling = config.waves.scaling;
        let difficulty = config.difficulty_scaling();
        let normal = config.enemy(EnemyKind::Normal).unwrap();
        assert!((normal.health_at(1, &scaling, difficulty) - 60.0).abs() < 1e-10);
        assert!((normal.health_at(3, &scaling, difficulty) - 80.0).abs() < 1e-10);
        assert_eq!(normal.reward_at(5, None), 15);
        assert_eq!(normal.reward_at(5, Some(1.2)), 12);
    }

    /// Multiplicative per-wave scaling and boss bonus used by orbital.
    #[test]
    fn test_orbital_enemy_scaling() {
        let config = VariantConfig::orbital();
        let scaling = config.waves.scaling;
        let difficulty = config.difficulty_scaling();
        let scout = config.enemy(EnemyKind::Scout).unwrap();
        assert!((scout.health_at(1, &scaling, difficulty) - 80.0).abs() < 1e-10);
        assert!((scout.health_at(2, &scaling, difficulty) - 92.0).abs() < 1e-10);

        let boss = config.boss().unwrap();
        // Wave 1 has no growth yet, so only the flat boss bonus applies.
        assert_eq!(boss.health_at(1, &scaling, difficulty), 550.0);
        // Wave 10 compounds growth with the boss bonus.
        let expected = (500.0_f64 * (1.0 + 0.15 * 9.0) * (1.0 + 10.0 / 10.0)).floor();
        assert_eq!(boss.health_at(10, &scaling, difficulty), expected);
    }

    #[test]
    fn test_difficulty_multipliers() {
        let config = VariantConfig::orbital().with_difficulty(Difficulty::Hard);
        let scaling = config.waves.scaling;
        let difficulty = config.difficulty_scaling();
        let scout = config.enemy(EnemyKind::Scout).unwrap();
        assert!((scout.health_at(1, &scaling, difficulty) - 100.0).abs() < 1e-10);
        assert!((scout.speed_at(1, &scaling, difficulty) - 2.0 * 1.1).abs() < 1e-10);
    }

    #[test]
    fn test_melee_unit_count_scales_with_level() {
        let config = VariantConfig::bastion();
        let barracks = config.emplacement(EmplacementKind::Barracks).unwrap();
        let unit = match &barracks.delivery {
            crate::catalog::DamageDelivery::MeleeDeployment(spec) => *spec,
            _ => panic!("barracks should deploy melee units"),
        };
        assert_eq!(unit.count_at(1), 1);
        assert_eq!(unit.count_at(2), 1);
        assert_eq!(unit.count_at(3), 2);
    }

    #[test]
    fn test_zone_lifetime_scales_with_level() {
        let config = VariantConfig::orbital();
        let shield = config.emplacement(EmplacementKind::Shield).unwrap();
        let zone = match &shield.delivery {
            crate::catalog::DamageDelivery::Barrier(spec) => *spec,
            _ => panic!("shield should deploy barrier zones"),
        };
        assert_eq!(zone.lifetime_at(1), 120);
        assert_eq!(zone.lifetime_at(3), 240);
    }

    /// Slows stack multiplicatively and floor at the minimum fraction.
    #[test]
    fn test_status_effects_slow_stacking() {
        use crate::components::SlowEffect;
        let mut status = StatusEffects::default();
        status.slows.push(SlowEffect {
            source: 1,
            factor: 0.3,
        });
        status.slows.push(SlowEffect {
            source: 2,
            factor: 0.3,
        });
        let slowed = status.slowed_speed(2.0, 0.25);
        assert!((slowed - 2.0 * 0.7 * 0.7).abs() < 1e-10);

        // Enough stacked slows hit the floor instead of reaching zero.
        for source in 3..20 {
            status.slows.push(SlowEffect {
                source,
                factor: 0.9,
            });
        }
        assert!((status.slowed_speed(2.0, 0.25) - 0.5).abs() < 1e-10);

        assert!(!status.blocked());
        status.block_ticks = 5;
        assert!(status.blocked());
    }
}
