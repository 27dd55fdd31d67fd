//! Determinism tests - the same shot must produce identical trajectories

use glam::Vec2;
use poolsim_core::config::SimConfig;
use poolsim_core::simulation::Simulation;
use poolsim_core::sound::NoSound;

type Snapshot = Vec<(f32, f32, f32, f32, bool)>;

fn run_shot(drag: Vec2, frames: usize) -> Snapshot {
    let mut sim = Simulation::new(SimConfig::default()).expect("valid config");
    assert!(sim.queue_strike(drag));
    for _ in 0..frames {
        sim.step(&mut NoSound);
    }
    sim.bodies()
        .iter()
        .map(|b| (b.position.x, b.position.y, b.velocity.x, b.velocity.y, b.pocketed))
        .collect()
}

#[test]
fn test_same_shot_is_bit_identical() {
    // Bit-equal floats, not approximate: the step order is deterministic
    let first = run_shot(Vec2::new(300.0, -20.0), 600);
    let second = run_shot(Vec2::new(300.0, -20.0), 600);
    assert_eq!(first, second);
}

#[test]
fn test_multi_contact_shot_is_deterministic() {
    // Aims between the two object balls so both get hit
    let first = run_shot(Vec2::new(330.0, 0.0), 900);
    let second = run_shot(Vec2::new(330.0, 0.0), 900);
    assert_eq!(first, second);
}

#[test]
fn test_reset_then_replay_matches_fresh_run() {
    let drag = Vec2::new(300.0, -20.0);
    let fresh = run_shot(drag, 300);

    let mut sim = Simulation::new(SimConfig::default()).expect("valid config");
    assert!(sim.queue_strike(Vec2::new(-80.0, 45.0)));
    for _ in 0..400 {
        sim.step(&mut NoSound);
    }
    sim.reset();
    assert!(sim.queue_strike(drag));
    for _ in 0..300 {
        sim.step(&mut NoSound);
    }
    let replayed: Snapshot = sim
        .bodies()
        .iter()
        .map(|b| (b.position.x, b.position.y, b.velocity.x, b.velocity.y, b.pocketed))
        .collect();

    assert_eq!(fresh, replayed);
}
