use ndvi_core::config::{EngineConfig, TintColor};
use ndvi_core::consts::{DEFAULT_CELL_OVERLAP, DEFAULT_WHEEL_SENSITIVITY};
use ndvi_core::error::NdviError;
use ndvi_core::viewport::CanvasSize;

#[test]
fn test_default_config_is_valid() {
    let config = EngineConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.canvas, CanvasSize::new(800, 800));
    assert_eq!(config.wheel_sensitivity, DEFAULT_WHEEL_SENSITIVITY);
    assert_eq!(config.cell_overlap, DEFAULT_CELL_OVERLAP);
}

#[test]
fn test_toml_round_trip() {
    let config = EngineConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: EngineConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let parsed: EngineConfig = toml::from_str("wheel_sensitivity = 0.002\n").unwrap();
    assert_eq!(parsed.wheel_sensitivity, 0.002);
    assert_eq!(parsed.canvas, CanvasSize::default());
    assert_eq!(parsed.tint, EngineConfig::default().tint);
}

#[test]
fn test_canvas_table_from_toml() {
    let parsed: EngineConfig = toml::from_str("[canvas]\nwidth = 400\nheight = 300\n").unwrap();
    assert_eq!(parsed.canvas, CanvasSize::new(400, 300));
}

#[test]
fn test_zero_canvas_rejected() {
    let config = EngineConfig {
        canvas: CanvasSize::new(800, 0),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(NdviError::InvalidCanvas {
            width: 800,
            height: 0
        })
    ));
}

#[test]
fn test_bad_sensitivity_and_overlap_rejected() {
    let config = EngineConfig {
        wheel_sensitivity: 0.0,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(NdviError::InvalidConfig(_))));

    let config = EngineConfig {
        cell_overlap: -1.0,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(NdviError::InvalidConfig(_))));
}

#[test]
fn test_tint_alpha_out_of_range_rejected() {
    let mut config = EngineConfig::default();
    config.tint.high.alpha = 1.5;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("tint.high.alpha"));
}

#[test]
fn test_tint_lerp() {
    let a = TintColor {
        rgb: [0, 100, 200],
        alpha: 0.0,
    };
    let b = TintColor {
        rgb: [100, 100, 0],
        alpha: 1.0,
    };
    let mid = a.lerp(&b, 0.5);
    assert_eq!(mid.rgb, [50, 100, 100]);
    assert_eq!(mid.alpha, 0.5);
    assert_eq!(a.lerp(&b, 7.0), b);
}
