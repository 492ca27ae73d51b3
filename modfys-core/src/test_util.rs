//! Shared assertions for unit tests

/// Assert two floats agree to a relative tolerance of 1e-9
#[track_caller]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(f64::MIN_POSITIVE);
    let error = (actual - expected).abs() / scale;
    assert!(
        error <= 1e-9,
        "expected {expected:e}, got {actual:e} (relative error {error:e})"
    );
}
