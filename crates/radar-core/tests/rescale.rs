// File: crates/radar-core/tests/rescale.rs
// Purpose: Scaling contract — range membership, endpoint exactness, identity
// of the target variable, and inverted-range behavior.

use radar_core::{rescale_row, RadarError, RadialScale};

fn scales(ranges: &[(f64, f64)]) -> Vec<RadialScale> {
    ranges.iter().map(|&r| RadialScale::from(r)).collect()
}

#[test]
fn in_range_values_do_not_fail() {
    let s = scales(&[(0.0, 10.0), (0.0, 100.0), (0.0, 1.0)]);
    for values in [[0.0, 0.0, 0.0], [10.0, 100.0, 1.0], [3.7, 42.0, 0.99]] {
        assert!(rescale_row(&values, &s).is_ok(), "{values:?} should rescale");
    }
}

#[test]
fn decreasing_range_accepts_its_interval() {
    // (max, min) order is a deliberately inverted axis, not an error.
    let s = scales(&[(0.0, 10.0), (100.0, 0.0)]);
    assert!(rescale_row(&[5.0, 50.0], &s).is_ok());
    assert!(rescale_row(&[5.0, 0.0], &s).is_ok());
    assert!(rescale_row(&[5.0, 100.0], &s).is_ok());
}

#[test]
fn out_of_range_fails_in_both_orientations() {
    let s = scales(&[(0.0, 10.0), (0.0, 100.0)]);
    let err = rescale_row(&[5.0, 100.1], &s).unwrap_err();
    assert_eq!(
        err,
        RadarError::ValueOutOfRange { index: 1, value: 100.1, min: 0.0, max: 100.0 }
    );
    assert!(rescale_row(&[5.0, -0.1], &s).is_err());

    let inverted = scales(&[(0.0, 10.0), (100.0, 0.0)]);
    assert!(rescale_row(&[5.0, 100.1], &inverted).is_err());
    assert!(rescale_row(&[5.0, -0.1], &inverted).is_err());
}

#[test]
fn first_value_is_checked_too() {
    let s = scales(&[(0.0, 10.0), (0.0, 100.0)]);
    let err = rescale_row(&[11.0, 50.0], &s).unwrap_err();
    assert!(matches!(err, RadarError::ValueOutOfRange { index: 0, .. }));
}

#[test]
fn endpoints_map_exactly() {
    let s = scales(&[(2.0, 8.0), (-5.0, 5.0)]);
    let out = rescale_row(&[2.0, -5.0], &s).unwrap();
    assert_eq!(out[1], 2.0);
    let out = rescale_row(&[2.0, 5.0], &s).unwrap();
    assert_eq!(out[1], 8.0);
}

#[test]
fn target_variable_passes_through() {
    let s = scales(&[(3.0, 9.0), (0.0, 1.0)]);
    let out = rescale_row(&[7.25, 0.4], &s).unwrap();
    assert_eq!(out[0], 7.25);
}

#[test]
fn three_variable_midpoints_align() {
    // Variables A (0..10), B (0..100), C (0..1): the midpoint of each maps
    // to the midpoint of A's scale.
    let s = scales(&[(0.0, 10.0), (0.0, 100.0), (0.0, 1.0)]);
    assert_eq!(rescale_row(&[5.0, 50.0, 0.5], &s).unwrap(), vec![5.0, 5.0, 5.0]);
    assert_eq!(rescale_row(&[0.0, 0.0, 0.0], &s).unwrap(), vec![0.0, 0.0, 0.0]);
    assert_eq!(
        rescale_row(&[10.0, 100.0, 1.0], &s).unwrap(),
        vec![10.0, 10.0, 10.0]
    );
}

#[test]
fn inverted_range_maps_endpoints() {
    // Declared min maps to the target min even when the pair decreases.
    let s = scales(&[(0.0, 10.0), (100.0, 0.0)]);
    let out = rescale_row(&[0.0, 100.0], &s).unwrap();
    assert_eq!(out[1], 0.0);
    let out = rescale_row(&[0.0, 0.0], &s).unwrap();
    assert_eq!(out[1], 10.0);
    let out = rescale_row(&[0.0, 50.0], &s).unwrap();
    assert!((out[1] - 5.0).abs() < 1e-12);
}

#[test]
fn length_mismatch_is_refused() {
    let s = scales(&[(0.0, 10.0), (0.0, 100.0)]);
    let err = rescale_row(&[1.0], &s).unwrap_err();
    assert_eq!(err, RadarError::LengthMismatch { expected: 2, got: 1 });
    assert!(rescale_row(&[1.0, 2.0, 3.0], &s).is_err());
}
