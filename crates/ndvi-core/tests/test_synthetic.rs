use ndvi_core::error::NdviError;
use ndvi_core::synthetic::{generate_field, SyntheticFieldConfig};

#[test]
fn test_dimensions_follow_config() {
    let grid = generate_field(&SyntheticFieldConfig {
        rows: 12,
        cols: 30,
        ..Default::default()
    })
    .unwrap();
    assert_eq!((grid.rows(), grid.cols()), (12, 30));
}

#[test]
fn test_same_seed_same_field() {
    let config = SyntheticFieldConfig::default();
    assert_eq!(generate_field(&config).unwrap(), generate_field(&config).unwrap());
}

#[test]
fn test_different_seed_different_field() {
    let a = generate_field(&SyntheticFieldConfig::default()).unwrap();
    let b = generate_field(&SyntheticFieldConfig {
        seed: 7,
        ..Default::default()
    })
    .unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_values_within_ndvi_range() {
    let grid = generate_field(&SyntheticFieldConfig {
        base: 0.95,
        undulation: 0.4,
        noise: 0.3,
        stress_patches: 10,
        ..Default::default()
    })
    .unwrap();
    let (min, max) = grid.min_max().unwrap();
    assert!(min >= -1.0 && max <= 1.0, "range {min}..{max}");
}

#[test]
fn test_stress_patches_lower_the_mean() {
    let healthy = generate_field(&SyntheticFieldConfig {
        stress_patches: 0,
        ..Default::default()
    })
    .unwrap();
    let stressed = generate_field(&SyntheticFieldConfig {
        stress_patches: 6,
        ..Default::default()
    })
    .unwrap();
    assert!(stressed.mean() < healthy.mean());
}

#[test]
fn test_non_finite_parameters_are_rejected() {
    let result = generate_field(&SyntheticFieldConfig {
        base: f32::NAN,
        ..Default::default()
    });
    assert!(matches!(result, Err(NdviError::InvalidConfig(_))));

    let result = generate_field(&SyntheticFieldConfig {
        noise: f32::INFINITY,
        ..Default::default()
    });
    assert!(result.is_err());
}
