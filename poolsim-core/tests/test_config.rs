//! Unit tests for configuration validation and loading

use poolsim_core::config::{CollisionModel, ConfigError, SimConfig};
use poolsim_core::simulation::Simulation;

#[test]
fn test_default_config_is_valid() {
    assert!(SimConfig::default().validate().is_ok());
}

#[test]
fn test_negative_ball_radius_rejected() {
    let mut config = SimConfig::default();
    config.table.ball_radius = -1.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositive { .. })
    ));
}

#[test]
fn test_zero_pocket_radius_rejected() {
    let mut config = SimConfig::default();
    config.table.pocket_radius = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositive { .. })
    ));
}

#[test]
fn test_table_smaller_than_ball_rejected() {
    let mut config = SimConfig::default();
    config.table.width = 20.0;
    assert!(matches!(config.validate(), Err(ConfigError::BadTableSize)));
}

#[test]
fn test_zero_frame_rate_rejected() {
    let mut config = SimConfig::default();
    config.physics.frame_rate = 0.0;
    assert!(matches!(config.validate(), Err(ConfigError::BadFrameRate(_))));
}

#[test]
fn test_friction_out_of_range_rejected() {
    let mut config = SimConfig::default();
    config.physics.friction = 0.0;
    assert!(matches!(config.validate(), Err(ConfigError::BadFriction(_))));

    config.physics.friction = 1.5;
    assert!(matches!(config.validate(), Err(ConfigError::BadFriction(_))));
}

#[test]
fn test_empty_rack_rejected() {
    let mut config = SimConfig::default();
    config.balls.clear();
    assert!(matches!(config.validate(), Err(ConfigError::NoBalls)));
}

#[test]
fn test_out_of_bounds_spawn_rejected() {
    let mut config = SimConfig::default();
    config.balls[1].position.x = 795.0; // closer to the wall than one radius
    assert!(matches!(
        config.validate(),
        Err(ConfigError::SpawnOutOfBounds { index: 1 })
    ));
}

#[test]
fn test_non_positive_mass_rejected() {
    let mut config = SimConfig::default();
    config.balls[0].mass = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::BadMass { index: 0, .. })
    ));
}

#[test]
fn test_restitution_above_one_rejected() {
    let mut config = SimConfig::default();
    config
        .materials
        .restitution
        .insert("glass".to_string(), 1.5);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::BadRestitution { .. })
    ));
}

#[test]
fn test_simulation_refuses_invalid_config() {
    let mut config = SimConfig::default();
    config.physics.frame_rate = 0.0;
    assert!(Simulation::new(config).is_err());
}

#[test]
fn test_config_from_json_fills_defaults() {
    let config: SimConfig = serde_json::from_str(
        r#"{
            "physics": { "friction": 0.95 },
            "collision_model": "elastic"
        }"#,
    )
    .unwrap();

    assert_eq!(config.physics.friction, 0.95);
    assert_eq!(config.physics.frame_rate, 60.0);
    assert_eq!(config.collision_model, CollisionModel::Elastic);
    assert_eq!(config.table.width, 800.0);
    assert_eq!(config.balls.len(), 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_json_custom_rack() {
    let config: SimConfig = serde_json::from_str(
        r#"{
            "balls": [
                { "position": [100.0, 100.0], "color": [255, 255, 255] },
                { "position": [600.0, 300.0], "color": [255, 0, 0], "material": "clay", "mass": 2.0 }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(config.balls.len(), 2);
    // Omitted fields take the documented defaults
    assert_eq!(config.balls[0].mass, 1.0);
    assert_eq!(config.balls[0].material, "ivory");
    assert_eq!(config.balls[1].material, "clay");
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_pockets_sit_on_corners() {
    let config = SimConfig::default();
    let pockets = config.table.pocket_centers();
    assert_eq!(pockets.len(), 4);
    assert!(pockets.contains(&glam::Vec2::new(0.0, 0.0)));
    assert!(pockets.contains(&glam::Vec2::new(800.0, 400.0)));
}
