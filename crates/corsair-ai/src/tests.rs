#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use corsair_core::components::{PirateShip, ShipAi};
    use corsair_core::constants::*;
    use corsair_core::enums::{AiState, ShotOwner};
    use corsair_core::types::{Position, ShipId, Velocity};

    use crate::fsm::*;
    use crate::profiles::*;

    const DT: f64 = MAX_FRAME_DT;

    fn ship(level: u32) -> PirateShip {
        PirateShip {
            id: ShipId(7),
            name: "Anne Bonny".into(),
            heading: 0.0,
            speed: 1.0,
            level,
            size: 30.0,
        }
    }

    fn brain(level: u32) -> ShipAi {
        let profile = profile_for_level(level);
        ShipAi {
            state: AiState::Patrol,
            cannon_cooldown: 0.0,
            state_timer: 5.0,
            aggression_timer: 0.0,
            aggro_range: profile.aggro_range,
            attack_range: profile.attack_range,
            flank_side: 1.0,
            circle_phase: 0.0,
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(17)
    }

    fn step(pos: &mut Position, s: &mut PirateShip, ai: &mut ShipAi, player: Position, shots: &[IncomingShot]) -> AiOutcome {
        let ctx = AiContext { player, shots, dt: DT };
        update(pos, s, ai, &ctx, &mut rng())
    }

    // ---- Profiles ----

    #[test]
    fn test_level_three_profile() {
        let p = profile_for_level(3);
        assert_eq!(p.aggro_range, 460.0);
        assert_eq!(p.attack_range, 290.0);
        assert_eq!(p.engagement_distance, 244.0);
        assert_eq!(p.shot_speed, 320.0 + 3.0 * 26.0);
        assert_eq!(p.shot_damage, 32.0);
        assert!((p.reload_time - 1.28).abs() < 1e-12);
    }

    #[test]
    fn test_engagement_distance_clamped() {
        assert_eq!(engagement_distance(1), 260.0);
        assert_eq!(engagement_distance(6), 220.0);
        assert_eq!(engagement_distance(100), ENGAGE_DIST_MIN);
        assert_eq!(engagement_distance(0), 268.0);
    }

    #[test]
    fn test_reload_floors_at_cap() {
        let p = profile_for_level(50);
        assert!((p.reload_time - (PIRATE_RELOAD_BASE - PIRATE_RELOAD_CAP)).abs() < 1e-12);
    }

    // ---- State selection ----

    #[test]
    fn test_provoked_ship_in_attack_range_attacks() {
        let mut pos = Position::new(1000.0, 1000.0);
        let player = Position::new(1200.0, 1000.0);
        let (mut s, mut ai) = (ship(3), brain(3));
        ai.aggression_timer = 10.0;
        let out = step(&mut pos, &mut s, &mut ai, player, &[]);
        assert_eq!(ai.state, AiState::Attack);
        assert!(out.state_changed);
    }

    #[test]
    fn test_unprovoked_ship_patrols() {
        let mut pos = Position::new(1000.0, 1000.0);
        let player = Position::new(1200.0, 1000.0);
        let (mut s, mut ai) = (ship(3), brain(3));
        let out = step(&mut pos, &mut s, &mut ai, player, &[]);
        assert_eq!(ai.state, AiState::Patrol);
        assert!(!out.state_changed);
        assert!(out.fire.is_none());
    }

    #[test]
    fn test_provoked_ship_beyond_attack_range_chases() {
        let mut pos = Position::new(1000.0, 1000.0);
        let player = Position::new(1350.0, 1000.0);
        let (mut s, mut ai) = (ship(3), brain(3));
        ai.aggression_timer = 10.0;
        step(&mut pos, &mut s, &mut ai, player, &[]);
        assert_eq!(ai.state, AiState::Chase);
    }

    #[test]
    fn test_provoked_ship_outside_aggro_range_patrols() {
        let mut pos = Position::new(1000.0, 1000.0);
        let player = Position::new(1600.0, 1000.0);
        let (mut s, mut ai) = (ship(3), brain(3));
        ai.aggression_timer = 10.0;
        step(&mut pos, &mut s, &mut ai, player, &[]);
        assert_eq!(ai.state, AiState::Patrol);
    }

    #[test]
    fn test_timers_tick_down_and_floor() {
        let mut pos = Position::new(1000.0, 1000.0);
        let (mut s, mut ai) = (ship(3), brain(3));
        ai.cannon_cooldown = 0.01;
        ai.aggression_timer = 0.01;
        step(&mut pos, &mut s, &mut ai, Position::new(3000.0, 3000.0), &[]);
        assert_eq!(ai.cannon_cooldown, 0.0);
        assert_eq!(ai.aggression_timer, 0.0);
        assert!((ai.state_timer - (5.0 - DT)).abs() < 1e-12);
    }

    #[test]
    fn test_expired_patrol_timer_resampled() {
        let mut s = ship(2);
        let mut ai = brain(2);
        ai.state_timer = -0.1;
        let state = select_state(&mut s, &mut ai, 2000.0, &mut rng());
        assert_eq!(state, AiState::Patrol);
        assert!((PATROL_DURATION_MIN..PATROL_DURATION_MAX).contains(&ai.state_timer));
        assert!(s.heading.abs() <= PATROL_COURSE_CHANGE);
    }

    #[test]
    fn test_calming_down_resamples_patrol_timer() {
        let mut s = ship(2);
        let mut ai = brain(2);
        ai.state = AiState::Attack;
        ai.state_timer = 0.5;
        select_state(&mut s, &mut ai, 100.0, &mut rng());
        assert!((PATROL_DURATION_MIN..PATROL_DURATION_MAX).contains(&ai.state_timer));
        assert_eq!(s.heading, 0.0);
    }

    // ---- Evasion ----

    #[test]
    fn test_evades_nearby_airborne_shot() {
        let mut pos = Position::new(1000.0, 1000.0);
        let (mut s, mut ai) = (ship(3), brain(3));
        ai.aggression_timer = 10.0;
        ai.state = AiState::Attack;
        let shot = IncomingShot {
            position: Position::new(1050.0, 1000.0),
            z: 20.0,
            velocity: Velocity::new(-5.0, 0.0),
            owner: ShotOwner::Player,
        };
        let out = step(&mut pos, &mut s, &mut ai, Position::new(1200.0, 1000.0), &[shot]);
        assert!(out.evaded);
        assert!(out.fire.is_none());
        assert_eq!(ai.state, AiState::Attack);
        assert!(ai.cannon_cooldown >= EVASION_MIN_COOLDOWN);
        // Shot travels west, so the dodge is perpendicular: straight north or south.
        let moved = s.speed * DT * EVASION_SPEED_MULT;
        assert!((pos.x - 1000.0).abs() < 1e-9);
        assert!(((pos.y - 1000.0).abs() - moved).abs() < 1e-9);
    }

    #[test]
    fn test_ignores_own_and_landed_shots() {
        let (mut s, mut ai) = (ship(3), brain(3));
        let own = IncomingShot {
            position: Position::new(1010.0, 1000.0),
            z: 30.0,
            velocity: Velocity::new(3.0, 0.0),
            owner: ShotOwner::Pirate(ShipId(7)),
        };
        let landed = IncomingShot {
            z: 0.0,
            owner: ShotOwner::Pirate(ShipId(2)),
            ..own
        };
        let far = IncomingShot {
            position: Position::new(1000.0 + EVASION_RANGE + 1.0, 1000.0),
            owner: ShotOwner::Player,
            ..own
        };
        let mut pos = Position::new(1000.0, 1000.0);
        let out = step(&mut pos, &mut s, &mut ai, Position::new(3000.0, 3000.0), &[own, landed, far]);
        assert!(!out.evaded);
    }

    #[test]
    fn test_evasion_clamped_to_map() {
        let mut pos = Position::new(0.0, 0.0);
        let (mut s, mut ai) = (ship(1), brain(1));
        s.speed = 1.5;
        let shot = IncomingShot {
            position: Position::new(20.0, 0.0),
            z: 5.0,
            // Travelling west, so the dodge points north, off the map edge.
            velocity: Velocity::new(-4.0, 0.0),
            owner: ShotOwner::Player,
        };
        step(&mut pos, &mut s, &mut ai, Position::new(2000.0, 2000.0), &[shot]);
        assert_eq!(pos, Position::new(0.0, 0.0));
    }

    // ---- Behaviors ----

    #[test]
    fn test_chase_steers_to_flank_point() {
        let start = Position::new(1000.0, 1000.0);
        let player = Position::new(1400.0, 1000.0);
        let mut pos = start;
        let (mut s, mut ai) = (ship(1), brain(1));
        ai.aggression_timer = 10.0;
        ai.flank_side = -1.0;
        step(&mut pos, &mut s, &mut ai, player, &[]);
        assert_eq!(ai.state, AiState::Chase);

        let target = flank_point(player, start.angle_to(&player), -1.0, engagement_distance(1));
        assert!((s.heading - start.angle_to(&target)).abs() < 1e-12);
        // Flank side -1 from a due-east bearing is north of the player.
        assert!(target.y < player.y);
        assert!((pos.distance_to(&start) - s.speed * DT * CHASE_SPEED_MULT).abs() < 1e-9);
    }

    #[test]
    fn test_attack_backs_off_when_too_close() {
        let player = Position::new(2000.0, 2000.0);
        let mut pos = Position::new(2100.0, 2000.0);
        let (mut s, mut ai) = (ship(3), brain(3));
        s.size = 10.0;
        ai.aggression_timer = 10.0;
        ai.cannon_cooldown = 5.0;
        let before = pos.distance_to(&player);
        let out = step(&mut pos, &mut s, &mut ai, player, &[]);
        assert_eq!(ai.state, AiState::Attack);
        assert!(out.fire.is_none());
        assert!(ai.circle_phase > 0.0);
        // Backing off at 30 then closing at most 60 toward a far circle point still
        // cannot leave the ship much nearer than it started.
        assert!(pos.distance_to(&player) > before - s.speed * DT * ATTACK_SPEED_MULT);
    }

    #[test]
    fn test_attack_fires_when_broadside_and_reloaded() {
        let player = Position::new(2000.0, 2000.0);
        let desired = engagement_distance(3);
        // On the circle, phase pointing at the ship: the circle point moves
        // tangentially, so the heading is roughly perpendicular to the player.
        let mut pos = player.offset(0.0, desired);
        let (mut s, mut ai) = (ship(3), brain(3));
        ai.aggression_timer = 10.0;
        ai.attack_range = 400.0;
        ai.aggro_range = 500.0;
        ai.circle_phase = 0.0;
        s.speed = 1.0;
        let out = step(&mut pos, &mut s, &mut ai, player, &[]);
        let order = out.fire.expect("broadside should fire");
        assert_eq!(order.target, player);
        assert_eq!(order.speed, profile_for_level(3).shot_speed);
        assert!((ai.cannon_cooldown - profile_for_level(3).reload_time).abs() < 1e-12);
    }

    #[test]
    fn test_broadside_arc_window() {
        assert!(in_broadside_arc(0.0, FRAC_PI_2));
        // Measured the short way across the +/-PI seam.
        assert!(in_broadside_arc(PI - 0.2, -PI + 0.5));
        assert!(!in_broadside_arc(0.0, 0.1));
        assert!(!in_broadside_arc(0.0, PI));
        assert!(!in_broadside_arc(0.0, 1.7));
        assert!(!in_broadside_arc(0.0, -0.2));
    }

    // ---- Separation / bounds ----

    #[test]
    fn test_separation_pushes_off_player() {
        let player = Position::new(1000.0, 1000.0);
        let mut pos = Position::new(1010.0, 1000.0);
        let (mut s, mut ai) = (ship(2), brain(2));
        s.speed = 0.0;
        step(&mut pos, &mut s, &mut ai, player, &[]);
        let keepaway = SEPARATION_DISTANCE + s.size;
        let expected = 10.0 + (keepaway - 10.0) * SEPARATION_STRENGTH;
        assert!((pos.distance_to(&player) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_ship_is_not_pushed() {
        let player = Position::new(1000.0, 1000.0);
        let mut pos = player;
        let (mut s, mut ai) = (ship(2), brain(2));
        s.speed = 0.0;
        step(&mut pos, &mut s, &mut ai, player, &[]);
        assert_eq!(pos, player);
    }

    #[test]
    fn test_patrol_clamped_to_map() {
        let mut pos = Position::new(0.0, 0.0);
        let (mut s, mut ai) = (ship(1), brain(1));
        s.heading = PI * 1.25;
        step(&mut pos, &mut s, &mut ai, Position::new(3000.0, 3000.0), &[]);
        assert_eq!(pos, Position::new(0.0, 0.0));
    }
}
