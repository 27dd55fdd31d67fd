//! Integration tests for the frame orchestrator

use glam::Vec2;
use poolsim_core::config::{palette, BallSpawn, SimConfig};
use poolsim_core::simulation::{Simulation, CUE_BALL};
use poolsim_core::sound::NoSound;
use poolsim_core::strike::HitSpot;
use poolsim_core::tests::test_helpers::{approx_eq, total_kinetic_energy};

fn default_sim() -> Simulation {
    Simulation::new(SimConfig::default()).expect("default config is valid")
}

fn spawn(x: f32, y: f32, color: [u8; 3]) -> BallSpawn {
    BallSpawn {
        position: Vec2::new(x, y),
        mass: 1.0,
        color,
        material: "ivory".to_string(),
    }
}

#[test]
fn test_strike_then_step_moves_cue_ball() {
    let mut sim = default_sim();
    assert!(sim.queue_strike(Vec2::new(50.0, 0.0)));
    sim.step(&mut NoSound);

    // Impulse 2.5 applied, then one integration step
    let cue = sim.cue_ball();
    assert!(approx_eq(cue.position.x, 202.5, 1e-4));
    assert!(approx_eq(cue.velocity.x, 2.5 * 0.99, 1e-4));
}

#[test]
fn test_turn_gating_rejects_while_moving() {
    let mut sim = default_sim();
    assert!(sim.queue_strike(Vec2::new(50.0, 0.0)));
    sim.step(&mut NoSound);

    // Balls still rolling: the second strike must be refused
    assert!(!sim.queue_strike(Vec2::new(50.0, 0.0)));
}

#[test]
fn test_sub_threshold_drag_applies_nothing() {
    let mut sim = default_sim();
    assert!(sim.queue_strike(Vec2::new(3.0, 0.0)));
    sim.step(&mut NoSound);
    assert_eq!(sim.cue_ball().velocity, Vec2::ZERO);
}

#[test]
fn test_strike_reaches_object_ball() {
    let mut sim = default_sim();
    // Default rack: red ball sits at (500, 180), dead ahead along (300, -20)
    assert!(sim.queue_strike(Vec2::new(300.0, -20.0)));
    for _ in 0..120 {
        sim.step(&mut NoSound);
    }
    let red = &sim.bodies()[1];
    assert!(
        red.position.distance(Vec2::new(500.0, 180.0)) > 1.0,
        "object ball never moved"
    );
}

#[test]
fn test_energy_never_increases_after_strike() {
    let mut sim = default_sim();
    assert!(sim.queue_strike(Vec2::new(300.0, -20.0)));
    sim.step(&mut NoSound);
    let mut previous = total_kinetic_energy(sim.bodies());
    for _ in 0..600 {
        sim.step(&mut NoSound);
        let energy = total_kinetic_energy(sim.bodies());
        assert!(
            energy <= previous + 1e-4,
            "kinetic energy grew from {} to {}",
            previous,
            energy
        );
        previous = energy;
    }
}

#[test]
fn test_cue_pocket_ends_game_and_blocks_strikes() {
    let mut config = SimConfig::default();
    config.balls = vec![
        spawn(40.0, 40.0, palette::WHITE),
        spawn(700.0, 350.0, palette::RED),
    ];
    let mut sim = Simulation::new(config).unwrap();

    // Shoot the cue straight into the top-left pocket
    assert!(sim.queue_strike(Vec2::new(-60.0, -60.0)));
    let mut captured = false;
    for _ in 0..240 {
        sim.step(&mut NoSound);
        if sim.cue_ball().pocketed {
            captured = true;
            break;
        }
    }
    assert!(captured, "cue ball never reached the pocket");
    assert!(sim.game_over());
    assert_eq!(sim.cue_ball().velocity, Vec2::ZERO);
    assert!(!sim.queue_strike(Vec2::new(50.0, 0.0)));
}

#[test]
fn test_game_over_when_table_cleared() {
    let mut config = SimConfig::default();
    config.balls = vec![
        spawn(400.0, 200.0, palette::WHITE),
        // Spawns inside the capture circle of the top-left pocket
        spawn(20.0, 20.0, palette::RED),
    ];
    let mut sim = Simulation::new(config).unwrap();
    sim.step(&mut NoSound);

    assert!(sim.bodies()[1].pocketed);
    assert!(!sim.cue_ball().pocketed);
    assert!(sim.game_over());
}

#[test]
fn test_pocket_capture_latches() {
    let mut config = SimConfig::default();
    config.balls = vec![spawn(400.0, 200.0, palette::WHITE), spawn(20.0, 20.0, palette::RED)];
    let mut sim = Simulation::new(config).unwrap();
    for _ in 0..60 {
        sim.step(&mut NoSound);
        if sim.bodies()[1].pocketed {
            assert_eq!(sim.bodies()[1].velocity, Vec2::ZERO);
        }
    }
    assert!(sim.bodies()[1].pocketed);
}

#[test]
fn test_reset_restores_initial_rack() {
    let mut sim = default_sim();
    let initial: Vec<_> = sim
        .bodies()
        .iter()
        .map(|b| (b.position, b.color, b.material.clone()))
        .collect();

    sim.select_hit_spot(HitSpot::Left);
    assert!(sim.queue_strike(Vec2::new(120.0, -40.0)));
    for _ in 0..300 {
        sim.step(&mut NoSound);
    }
    sim.reset();

    assert!(!sim.game_over());
    assert_eq!(sim.elapsed(), 0.0);
    assert_eq!(sim.selected_hit_spot(), HitSpot::Center);
    for (body, (position, color, material)) in sim.bodies().iter().zip(&initial) {
        assert_eq!(body.position, *position);
        assert_eq!(body.color, *color);
        assert_eq!(&body.material, material);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert!(!body.pocketed);
    }
}

#[test]
fn test_elapsed_advances_per_frame() {
    let mut sim = default_sim();
    for _ in 0..60 {
        sim.step(&mut NoSound);
    }
    assert!(approx_eq(sim.elapsed(), 1.0, 1e-3));
}

#[test]
fn test_cue_ball_is_body_zero() {
    let sim = default_sim();
    assert_eq!(sim.bodies()[CUE_BALL].color, palette::WHITE);
    assert_eq!(sim.cue_ball().position, Vec2::new(200.0, 200.0));
}

#[test]
fn test_all_at_rest_initially() {
    let sim = default_sim();
    assert!(sim.all_at_rest());
}
