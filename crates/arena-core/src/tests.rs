#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::commands::{FrameInput, MoveIntent, PlayerCommand};
    use crate::components::Lifetime;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::{RenderCommand, UiEvent};
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime, Vec2, Vec3, VisualHandle};

    // ---- Tiers ----

    #[test]
    fn test_tier_table_matches_enum_order() {
        for tier in EnemyTier::ALL {
            assert_eq!(tier.stats(), ENEMY_TIERS[tier.index()]);
        }
        assert_eq!(EnemyTier::Skirmisher.stats().points, 100);
        assert_eq!(EnemyTier::Bruiser.stats().health, 2);
        assert_eq!(EnemyTier::Behemoth.stats().size, 2.0);
    }

    #[test]
    fn test_tier_unlocks_every_two_levels() {
        assert_eq!(EnemyTier::unlocked_count(1), 1);
        assert_eq!(EnemyTier::unlocked_count(2), 1);
        assert_eq!(EnemyTier::unlocked_count(3), 2);
        assert_eq!(EnemyTier::unlocked_count(4), 2);
        assert_eq!(EnemyTier::unlocked_count(5), 3);
        assert_eq!(
            EnemyTier::unlocked_count(50),
            3,
            "Unlocks saturate at the size of the tier table"
        );
    }

    #[test]
    fn test_level_one_only_draws_weakest_tier() {
        for draw in [0.0, 0.25, 0.5, 0.999] {
            assert_eq!(EnemyTier::from_draw(1, draw), EnemyTier::Skirmisher);
        }
    }

    #[test]
    fn test_draw_splits_evenly_across_unlocked_tiers() {
        assert_eq!(EnemyTier::from_draw(5, 0.1), EnemyTier::Skirmisher);
        assert_eq!(EnemyTier::from_draw(5, 0.5), EnemyTier::Bruiser);
        assert_eq!(EnemyTier::from_draw(5, 0.9), EnemyTier::Behemoth);
        assert_eq!(
            EnemyTier::from_draw(5, 1.0),
            EnemyTier::Behemoth,
            "A draw of exactly 1.0 must not index past the table"
        );
    }

    // ---- Health bands ----

    #[test]
    fn test_health_band_boundaries() {
        assert_eq!(HealthBand::for_health(100), HealthBand::Healthy);
        assert_eq!(HealthBand::for_health(61), HealthBand::Healthy);
        assert_eq!(HealthBand::for_health(60), HealthBand::Wounded);
        assert_eq!(HealthBand::for_health(30), HealthBand::Wounded);
        assert_eq!(HealthBand::for_health(29), HealthBand::Critical);
        assert_eq!(HealthBand::for_health(-5), HealthBand::Critical);
    }

    // ---- Input ----

    #[test]
    fn test_move_intent_axes() {
        let forward = MoveIntent {
            forward: true,
            ..Default::default()
        };
        assert_eq!(forward.direction(), Vec3::new(0.0, 0.0, -1.0));

        let right = MoveIntent {
            right: true,
            ..Default::default()
        };
        assert_eq!(right.direction(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_move_intent_diagonal_is_normalized() {
        let diagonal = MoveIntent {
            back: true,
            left: true,
            ..Default::default()
        };
        let dir = diagonal.direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x < 0.0 && dir.z > 0.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let opposed = MoveIntent {
            forward: true,
            back: true,
            ..Default::default()
        };
        assert!(opposed.is_idle());
        assert!(MoveIntent::default().is_idle());
    }

    #[test]
    fn test_player_command_json_shape() {
        let json = serde_json::to_string(&PlayerCommand::SpecialFire).unwrap();
        assert_eq!(json, r#"{"type":"SpecialFire"}"#);
        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Fire"}"#).unwrap();
        assert_eq!(back, PlayerCommand::Fire);
    }

    #[test]
    fn test_frame_input_aim_has_no_movement() {
        let input = FrameInput::aim(Vec2::new(3.0, -4.0));
        assert!(input.intent.is_idle());
        assert_eq!(input.target, Vec2::new(3.0, -4.0));
    }

    // ---- Types ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_distance_is_three_dimensional() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(1.0, 2.0, 2.0);
        assert!((a.distance_to(&b) - 3.0).abs() < 1e-6);
        assert_eq!(b.ground(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_lifetime_fraction() {
        let mut life = Lifetime::new(PARTICLE_LIFETIME);
        assert_eq!(life.fraction(), 1.0);
        life.remaining = 15;
        assert!((life.fraction() - 0.5).abs() < 1e-6);
        life.remaining = 0;
        assert!(life.is_expired());
        assert_eq!(Lifetime::new(0).fraction(), 0.0);
    }

    #[test]
    fn test_palette_hex_values() {
        assert_eq!(Palette::Rose.hex(), 0xff0066);
        assert_eq!(Palette::Cyan.hex(), 0x00ffff);
        assert_eq!(Palette::Green.hex(), 0x00ff00);
    }

    // ---- Events and snapshot ----

    #[test]
    fn test_render_command_handle() {
        let spawn = RenderCommand::Spawn {
            handle: VisualHandle(7),
            kind: VisualKind::Bullet { special: true },
            position: Vec3::ZERO,
        };
        assert_eq!(spawn.handle(), VisualHandle(7));
        assert_eq!(
            RenderCommand::Despawn {
                handle: VisualHandle(9)
            }
            .handle(),
            VisualHandle(9)
        );
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let mut snap = GameStateSnapshot::default();
        snap.ui_events.push(UiEvent::SessionEnded { final_score: 1200 });
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"phase\":\"NotStarted\""));
        assert!(json.contains("\"final_score\":1200"));
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ui_events, snap.ui_events);
    }

    proptest! {
        #[test]
        fn prop_health_band_is_monotonic(a in -200i32..200, b in -200i32..200) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let rank = |band: HealthBand| match band {
                HealthBand::Critical => 0,
                HealthBand::Wounded => 1,
                HealthBand::Healthy => 2,
            };
            prop_assert!(rank(HealthBand::for_health(lo)) <= rank(HealthBand::for_health(hi)));
        }

        #[test]
        fn prop_tier_draw_stays_unlocked(level in 0u32..40, draw in 0.0f32..1.0) {
            let tier = EnemyTier::from_draw(level, draw);
            prop_assert!(tier.index() < EnemyTier::unlocked_count(level));
        }
    }
}
