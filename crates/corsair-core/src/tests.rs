#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::components::{Hull, PlayerShip, VisualEffect};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::input::InputState;
    use crate::math::*;
    use crate::state::HudUpdate;
    use crate::types::{Position, ShipId, SimTime, Velocity};

    fn sample_player() -> PlayerShip {
        PlayerShip {
            name: "Captain".into(),
            position: Position::new(MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0),
            heading: 0.0,
            velocity: Velocity::default(),
            hull: Hull::full(PLAYER_MAX_HP),
            level: 3,
            xp: 25,
            xp_to_next: 100,
            gold: 12,
            jewelry: 4,
            cannonballs: 50,
            weapon_range: PLAYER_WEAPON_RANGE,
            cannon_cooldown: 0.0,
            target: None,
        }
    }

    // ---- Math ----

    #[test]
    fn test_normalize_angle_range() {
        for a in [-10.0, -PI, -1.0, 0.0, 1.0, PI, 3.5 * PI, 100.0] {
            let n = normalize_angle(a);
            assert!(n > -PI && n <= PI, "{a} normalized to {n}");
            assert!((a.cos() - n.cos()).abs() < 1e-9 && (a.sin() - n.sin()).abs() < 1e-9);
        }
        assert!((normalize_angle(-PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_angle_between_is_symmetric_and_short() {
        assert!((angle_between(0.1, -0.1) - 0.2).abs() < 1e-12);
        assert!((angle_between(-0.1, 0.1) - 0.2).abs() < 1e-12);
        // Wraps across the +/-PI seam.
        assert!((angle_between(PI - 0.05, -PI + 0.05) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_tolerates_inverted_range() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        // Viewport wider than the map: lower bound wins.
        assert_eq!(clamp(50.0, 0.0, -200.0), 0.0);
    }

    #[test]
    fn test_rand_range_bounds_and_empty_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rand_range(&mut rng, 3.0, 8.0);
            assert!((3.0..8.0).contains(&v));
        }
        assert_eq!(rand_range(&mut rng, 4.0, 4.0), 4.0);
        assert_eq!(rand_range(&mut rng, 9.0, 1.0), 9.0);
    }

    // ---- Types ----

    #[test]
    fn test_position_geometry() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert!((a.angle_to(&Position::new(0.0, 10.0)) - PI / 2.0).abs() < 1e-12);
        let c = a.offset(0.0, 7.0);
        assert!((c.x - 7.0).abs() < 1e-12 && c.y.abs() < 1e-12);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..15 {
            t.advance(MAX_FRAME_DT);
        }
        assert_eq!(t.frame, 15);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Records ----

    #[test]
    fn test_hull_percent_clamped() {
        let mut hull = Hull::full(80.0);
        assert_eq!(hull.percent(), 100.0);
        hull.hp = -10.0;
        assert_eq!(hull.percent(), 0.0);
        assert!(hull.is_sunk());
    }

    #[test]
    fn test_explosion_starts_half_size() {
        let fx = VisualEffect::new(EffectKind::Explosion, EXPLOSION_LIFETIME, EXPLOSION_RADIUS);
        assert_eq!(fx.radius, EXPLOSION_RADIUS * 0.5);
        assert_eq!(fx.alpha, 1.0);
        let flash = VisualEffect::new(EffectKind::HitFlash, HIT_FLASH_LIFETIME, HIT_FLASH_RADIUS);
        assert_eq!(flash.radius, HIT_FLASH_RADIUS);
    }

    #[test]
    fn test_shot_owner_player_flag() {
        assert!(ShotOwner::Player.is_player());
        assert!(!ShotOwner::Pirate(ShipId(3)).is_player());
    }

    // ---- HUD ----

    #[test]
    fn test_hud_from_player() {
        let mut player = sample_player();
        player.hull.hp = 45.0;
        let hud = HudUpdate::from_player(&player);
        assert_eq!(hud.level, Some(3));
        assert_eq!(hud.gold, Some(12));
        assert_eq!(hud.jewelry, Some(4));
        assert_eq!(hud.ammunition, Some(50));
        assert_eq!(hud.health, Some(45.0));
        assert_eq!(hud.xp, Some(25.0));
    }

    #[test]
    fn test_hud_merge_keeps_absent_fields() {
        let mut current = HudUpdate::from_player(&sample_player());
        let partial = HudUpdate {
            gold: Some(99),
            ..Default::default()
        };
        current.merge(&partial);
        assert_eq!(current.gold, Some(99));
        assert_eq!(current.level, Some(3));
    }

    #[test]
    fn test_hud_partial_serializes_only_present_fields() {
        let partial = HudUpdate {
            health: Some(100.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&partial).unwrap();
        assert_eq!(json, r#"{"health":100.0}"#);
    }

    // ---- Input / events ----

    #[test]
    fn test_input_keys_are_case_insensitive() {
        let mut input = InputState::default();
        input.keys.insert(" ".to_string());
        input.keys.insert("arrowup".to_string());
        assert!(input.is_down("ArrowUp"));
        assert!(input.is_down(" "));
        assert!(!input.is_down("w"));
    }

    #[test]
    fn test_game_event_tagged_json() {
        let event = GameEvent::LootCollected {
            kind: LootKind::Jewelry,
            value: 17,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"LootCollected""#));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
