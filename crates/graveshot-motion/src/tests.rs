use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use graveshot_core::components::{Enemy, Motion, Orbit, Visibility};
use graveshot_core::constants::*;
use graveshot_core::enums::EnemyKind;
use graveshot_core::types::Arena;

use crate::enemy::{self, Step};
use crate::sampling::{distance, random_sign, uniform};
use crate::tuning::MotionTuning;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

fn walker(position: DVec2, velocity: DVec2, size: f64) -> Enemy {
    Enemy {
        size,
        position,
        visibility: Visibility::Visible,
        motion: Motion::Linear { velocity },
    }
}

fn circler(center: DVec2, radius: f64, angle: f64, angular_speed: f64) -> Enemy {
    Enemy {
        size: 70.0,
        position: center,
        visibility: Visibility::Visible,
        motion: Motion::Circular(Orbit {
            center,
            radius,
            angle,
            angular_speed,
        }),
    }
}

fn reappear_in(enemy: &Enemy) -> f64 {
    match enemy.visibility {
        Visibility::Hidden { reappear_in } => reappear_in,
        Visibility::Visible => panic!("enemy should be hidden"),
    }
}

// ---- Sampling ----

#[test]
fn test_uniform_stays_in_range() {
    let mut rng = rng();
    for _ in 0..10_000 {
        let v = uniform(&mut rng, 0.6, 2.0);
        assert!((0.6..2.0).contains(&v), "sample {v} out of range");
    }
}

#[test]
fn test_uniform_empty_range_is_min() {
    let mut rng = rng();
    assert_eq!(uniform(&mut rng, 5.0, 5.0), 5.0);
}

#[test]
fn test_random_sign_produces_both() {
    let mut rng = rng();
    let signs: Vec<f64> = (0..200).map(|_| random_sign(&mut rng)).collect();
    assert!(signs.iter().any(|s| *s == 1.0));
    assert!(signs.iter().any(|s| *s == -1.0));
    assert!(signs.iter().all(|s| s.abs() == 1.0));
}

#[test]
fn test_distance() {
    let a = DVec2::new(0.0, 0.0);
    let b = DVec2::new(3.0, 4.0);
    assert!((distance(a, b) - 5.0).abs() < 1e-12);
    assert_eq!(distance(b, b), 0.0);
    // Symmetric, and agrees with glam on a non-axis-aligned pair.
    let c = DVec2::new(-2.5, 7.25);
    assert_eq!(distance(b, c), distance(c, b));
    assert_eq!(distance(b, c), b.distance(c));
}

#[test]
fn test_spawn_same_seed_same_enemy() {
    let arena = Arena::default();
    let mut rng_a = rng();
    let mut rng_b = rng();
    for kind in [EnemyKind::Zombie, EnemyKind::Mummy, EnemyKind::Zombie] {
        let a = enemy::spawn(&mut rng_a, &arena, kind);
        let b = enemy::spawn(&mut rng_b, &arena, kind);
        assert_eq!(a, b);
    }
}

// ---- Spawn / respawn ----

#[test]
fn test_spawn_parameters_in_range() {
    let arena = Arena::default();
    let mut rng = rng();

    for i in 0..500 {
        let kind = if i % 2 == 0 {
            EnemyKind::Zombie
        } else {
            EnemyKind::Mummy
        };
        let e = enemy::spawn(&mut rng, &arena, kind);

        assert_eq!(e.kind(), kind);
        assert!(e.is_visible());
        assert_eq!(e.size, e.size.floor(), "size should be a whole pixel count");
        assert!((SIZE_MIN..SIZE_MAX).contains(&e.size));
        assert!(arena.contains_inset(e.position, SPAWN_MARGIN));

        match e.motion {
            Motion::Linear { velocity } => {
                let speed = velocity.length();
                assert!(
                    speed >= LINEAR_SPEED_MIN - 1e-9 && speed < LINEAR_SPEED_MAX + 1e-9,
                    "speed {speed} out of range"
                );
            }
            Motion::Circular(orbit) => {
                assert!(arena.contains_inset(orbit.center, ORBIT_CENTER_MARGIN));
                assert!((ORBIT_RADIUS_MIN..ORBIT_RADIUS_MAX).contains(&orbit.radius));
                assert!((0.0..std::f64::consts::TAU).contains(&orbit.angle));
                let speed = orbit.angular_speed.abs();
                assert!((ORBIT_SPEED_MIN..ORBIT_SPEED_MAX).contains(&speed));
            }
        }
    }
}

#[test]
fn test_respawn_keeps_size_and_kind() {
    let arena = Arena::default();
    let mut rng = rng();
    let mut e = enemy::spawn(&mut rng, &arena, EnemyKind::Mummy);
    let size = e.size;
    e.visibility = Visibility::Hidden { reappear_in: 0.3 };

    enemy::respawn(&mut e, &mut rng, &arena);

    assert_eq!(e.size, size);
    assert_eq!(e.kind(), EnemyKind::Mummy);
    assert!(e.is_visible());
}

// ---- Linear motion ----

#[test]
fn test_linear_moves_by_scaled_velocity() {
    let arena = Arena::default();
    let tuning = MotionTuning::without_random_events();
    let mut rng = rng();

    let start = DVec2::new(400.0, 300.0);
    let velocity = DVec2::new(1.5, -0.5);
    let dt = 0.016;
    let mut e = walker(start, velocity, 60.0);

    let step = enemy::advance(&mut e, &mut rng, &arena, &tuning, dt);

    assert_eq!(step, Step::Moved);
    let expected = start + velocity * dt * (60.0 / 16.0);
    assert!((e.position - expected).length() < 1e-12);
    assert_eq!(e.motion, Motion::Linear { velocity });
}

#[test]
fn test_linear_bounces_off_left_edge() {
    let arena = Arena::default();
    let tuning = MotionTuning::without_random_events();
    let mut rng = rng();

    let mut e = walker(DVec2::new(5.0, 300.0), DVec2::new(-1.0, 0.0), 60.0);
    enemy::advance(&mut e, &mut rng, &arena, &tuning, 0.016);

    match e.motion {
        Motion::Linear { velocity } => assert!(velocity.x > 0.0, "vx should flip positive"),
        _ => unreachable!(),
    }
    // No clamp: the walker is still past the margin this tick.
    assert!(e.position.x < 5.0);
}

#[test]
fn test_linear_bounces_off_bottom_edge() {
    let arena = Arena::default();
    let tuning = MotionTuning::without_random_events();
    let mut rng = rng();

    let mut e = walker(
        DVec2::new(300.0, arena.height - 9.0),
        DVec2::new(0.5, 1.0),
        60.0,
    );
    enemy::advance(&mut e, &mut rng, &arena, &tuning, 0.016);

    match e.motion {
        Motion::Linear { velocity } => {
            assert!(velocity.y < 0.0);
            assert_eq!(velocity.x, 0.5, "x component untouched");
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_linear_overshoot_recovers() {
    let arena = Arena::default();
    let tuning = MotionTuning::without_random_events();
    let mut rng = rng();

    let mut e = walker(DVec2::new(12.0, 300.0), DVec2::new(-2.0, 0.0), 60.0);
    for _ in 0..200 {
        enemy::advance(&mut e, &mut rng, &arena, &tuning, 0.05);
    }
    assert!(e.position.x > BOUNCE_MARGIN, "walker should head back inside");
}

#[test]
fn test_linear_vanishes_when_chance_certain() {
    let arena = Arena::default();
    let tuning = MotionTuning {
        linear_hide_chance: 1.0,
        ..MotionTuning::default()
    };
    let mut rng = rng();
    let mut e = walker(DVec2::new(400.0, 300.0), DVec2::new(1.0, 1.0), 60.0);

    let step = enemy::advance(&mut e, &mut rng, &arena, &tuning, 0.016);

    assert_eq!(step, Step::Vanished);
    let timer = reappear_in(&e);
    assert!((HIDE_TIMER_MIN..HIDE_TIMER_MAX).contains(&timer));
}

// ---- Circular motion ----

#[test]
fn test_circular_tracks_orbit() {
    let arena = Arena::default();
    let tuning = MotionTuning::without_random_events();
    let mut rng = rng();

    let center = DVec2::new(400.0, 300.0);
    let mut e = circler(center, 50.0, 0.0, 0.04);
    let dt = 0.02;

    enemy::advance(&mut e, &mut rng, &arena, &tuning, dt);

    let expected_angle = 0.04 * dt * FRAME_SCALE;
    match e.motion {
        Motion::Circular(orbit) => assert!((orbit.angle - expected_angle).abs() < 1e-12),
        _ => unreachable!(),
    }
    let expected = center + DVec2::new(expected_angle.cos(), expected_angle.sin()) * 50.0;
    assert!((e.position - expected).length() < 1e-9);
    assert!((distance(e.position, center) - 50.0).abs() < 1e-9);
}

#[test]
fn test_circular_negative_speed_runs_backwards() {
    let arena = Arena::default();
    let tuning = MotionTuning::without_random_events();
    let mut rng = rng();

    let mut e = circler(DVec2::new(400.0, 300.0), 40.0, 1.0, -0.03);
    enemy::advance(&mut e, &mut rng, &arena, &tuning, 0.05);

    match e.motion {
        Motion::Circular(orbit) => assert!(orbit.angle < 1.0),
        _ => unreachable!(),
    }
}

#[test]
fn test_circular_recenter_ranges() {
    let arena = Arena::default();
    let tuning = MotionTuning {
        circular_recenter_chance: 1.0,
        circular_hide_chance: 0.0,
        ..MotionTuning::default()
    };
    let mut rng = rng();

    for _ in 0..200 {
        let mut e = circler(DVec2::new(400.0, 300.0), 40.0, 0.0, 0.02);
        enemy::advance(&mut e, &mut rng, &arena, &tuning, 0.016);
        match e.motion {
            Motion::Circular(orbit) => {
                assert!(arena.contains_inset(orbit.center, ORBIT_CENTER_MARGIN));
                assert!((ORBIT_RADIUS_MIN..ORBIT_RECENTER_RADIUS_MAX).contains(&orbit.radius));
                let speed = orbit.angular_speed.abs();
                assert!((ORBIT_SPEED_MIN..ORBIT_RECENTER_SPEED_MAX).contains(&speed));
            }
            _ => unreachable!(),
        }
    }
}

#[test]
fn test_circular_vanishes_when_chance_certain() {
    let arena = Arena::default();
    let tuning = MotionTuning {
        circular_recenter_chance: 0.0,
        circular_hide_chance: 1.0,
        ..MotionTuning::default()
    };
    let mut rng = rng();
    let mut e = circler(DVec2::new(400.0, 300.0), 40.0, 0.0, 0.02);

    assert_eq!(
        enemy::advance(&mut e, &mut rng, &arena, &tuning, 0.016),
        Step::Vanished
    );
    assert!(!e.is_visible());
}

// ---- Hidden state ----

#[test]
fn test_hidden_enemy_is_frozen() {
    let arena = Arena::default();
    let tuning = MotionTuning::default();
    let mut rng = rng();

    let start = DVec2::new(200.0, 200.0);
    let mut e = walker(start, DVec2::new(2.0, 2.0), 60.0);
    e.visibility = Visibility::Hidden { reappear_in: 2.0 };

    let step = enemy::advance(&mut e, &mut rng, &arena, &tuning, 0.5);

    assert_eq!(step, Step::Waiting);
    assert_eq!(e.position, start);
    assert!((reappear_in(&e) - 1.5).abs() < 1e-12);
}

#[test]
fn test_shot_then_wait_respawns_in_bounds() {
    let arena = Arena::default();
    let tuning = MotionTuning::default();
    let mut rng = rng();

    for kind in EnemyKind::ALL {
        let mut e = enemy::spawn(&mut rng, &arena, kind);
        enemy::on_shot(&mut e, &mut rng);
        let timer = reappear_in(&e);
        assert!((SHOT_TIMER_MIN..SHOT_TIMER_MAX).contains(&timer));

        let step = enemy::advance(&mut e, &mut rng, &arena, &tuning, timer);

        assert_eq!(step, Step::Respawned);
        assert!(e.is_visible());
        assert!(arena.contains_inset(e.position, SPAWN_MARGIN));
    }
}

#[test]
fn test_respawn_tick_does_not_move() {
    let arena = Arena::default();
    let tuning = MotionTuning::without_random_events();
    let mut rng = rng();

    let mut e = enemy::spawn(&mut rng, &arena, EnemyKind::Zombie);
    e.visibility = Visibility::Hidden { reappear_in: 0.01 };
    enemy::advance(&mut e, &mut rng, &arena, &tuning, 0.05);
    let respawned_at = e.position;

    // The fresh position is the sampled spawn point, untouched by velocity.
    assert!(arena.contains_inset(respawned_at, SPAWN_MARGIN));
    enemy::advance(&mut e, &mut rng, &arena, &tuning, 0.05);
    assert_ne!(e.position, respawned_at);
}

#[test]
fn test_hide_timer_range() {
    let mut rng = rng();
    let mut e = walker(DVec2::new(100.0, 100.0), DVec2::ZERO, 60.0);
    for _ in 0..1000 {
        enemy::hide_temporarily(&mut e, &mut rng);
        let timer = reappear_in(&e);
        assert!((HIDE_TIMER_MIN..HIDE_TIMER_MAX).contains(&timer));
    }
}

// ---- Hit testing ----

#[test]
fn test_hitbox_radius_floor() {
    assert_eq!(enemy::hitbox_radius(80.0), 30.0);
    // size/2 = 15 < 20, so the floor applies: 20 * 0.75
    assert_eq!(enemy::hitbox_radius(30.0), 15.0);
}

#[test]
fn test_hit_boundary_counts() {
    let e = walker(DVec2::new(300.0, 300.0), DVec2::ZERO, 80.0);
    assert!(enemy::is_hit(&e, DVec2::new(300.0, 300.0)));
    assert!(enemy::is_hit(&e, DVec2::new(330.0, 300.0)));
    assert!(enemy::is_hit(&e, DVec2::new(300.0, 270.0)));
    assert!(!enemy::is_hit(&e, DVec2::new(330.001, 300.0)));
    assert!(!enemy::is_hit(&e, DVec2::new(322.0, 322.0)));
}

#[test]
fn test_hidden_never_hit() {
    let mut e = walker(DVec2::new(300.0, 300.0), DVec2::ZERO, 80.0);
    e.visibility = Visibility::Hidden { reappear_in: 1.0 };
    for (x, y) in [(300.0, 300.0), (310.0, 295.0), (0.0, 0.0)] {
        assert!(!enemy::is_hit(&e, DVec2::new(x, y)));
    }
}

#[test]
fn test_on_shot_hides_without_moving() {
    let mut rng = rng();
    let start = DVec2::new(250.0, 150.0);
    let mut e = walker(start, DVec2::new(1.0, 0.0), 64.0);

    enemy::on_shot(&mut e, &mut rng);

    assert!(!e.is_visible());
    assert_eq!(e.position, start);
    assert_eq!(e.size, 64.0);
}
