//! Loading calibration and reports through serde.

use swerve_stilt::config::{ConfigError, LiftConfig, Preset, Side, SteeringConfig, STILT_PRESETS};
use swerve_stilt::control::{Direction, LiftReport, SteeringReport};
use swerve_stilt::robot::OperatorInput;

#[test]
fn steering_config_fills_missing_fields() {
    let cfg: SteeringConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg.counts_per_rev, 8192);

    let cfg: SteeringConfig = serde_json::from_str(r#"{ "counts_per_rev": 4096 }"#).unwrap();
    assert_eq!(cfg.counts_per_rev, 4096);
    assert!(cfg.validate().is_ok());
}

#[test]
fn lift_config_from_file_is_validated() {
    let json = r#"{
        "left":  { "tolerance": 50.0, "slowdown": 500.0 },
        "right": { "tolerance": 100.0, "slowdown": 0.0 }
    }"#;
    let cfg: LiftConfig = serde_json::from_str(json).unwrap();
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::InvalidSlowdown {
            side: Side::Right,
            value: 0.0
        })
    );
}

#[test]
fn preset_table_loads_into_fixed_array() {
    let json = serde_json::to_string(&STILT_PRESETS.to_vec()).unwrap();
    let loaded: Vec<Preset> = serde_json::from_str(&json).unwrap();
    let table: [Preset; 6] = loaded.try_into().unwrap();
    assert_eq!(table, STILT_PRESETS);
}

#[test]
fn operator_input_accepts_partial_frames() {
    let input: OperatorInput =
        serde_json::from_str(r#"{ "drive_y": 1.0, "dpad_up": true }"#).unwrap();
    assert_eq!(input.drive_y, 1.0);
    assert!(input.dpad_up);
    assert!(!input.dpad_down);
}

#[test]
fn reports_serialize_for_logging() {
    let steering = SteeringReport {
        heading: 0.0,
        direction: Direction::Reverse,
        steer_power: 0.0,
        drive_power: -1.0,
        turn: 0.0,
    };
    let value = serde_json::to_value(steering).unwrap();
    assert_eq!(value["direction"], "Reverse");

    let lift = LiftReport {
        left_position: 0.0,
        right_position: 0.0,
        left_power: 0.0,
        right_power: 0.0,
        preset: 3,
        at_target: true,
    };
    let value = serde_json::to_value(lift).unwrap();
    assert_eq!(value["preset"], 3);
    assert_eq!(value["at_target"], true);
}
