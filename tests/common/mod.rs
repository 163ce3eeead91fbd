#![allow(dead_code)]

use approx::assert_relative_eq;
use astrocalc::coordinates::DecimalCoords;
use tracing_subscriber::EnvFilter;

/// Position of the quasar at the first epoch (MJD 55400)
pub const QSO_EPOCH_A: (f64, f64) = (194.3374822, 71.8969964);
/// Position of the same object at the second epoch (MJD 56700)
pub const QSO_EPOCH_B: (f64, f64) = (194.3350473, 71.8972063);

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn coords((ra, dec): (f64, f64)) -> DecimalCoords {
    DecimalCoords::new(ra, dec).unwrap()
}

pub fn assert_coords_close(actual: &DecimalCoords, expected: (f64, f64), epsilon: f64) {
    assert_relative_eq!(actual.ra(), expected.0, epsilon = epsilon);
    assert_relative_eq!(actual.dec(), expected.1, epsilon = epsilon);
}
