//! # Value types shared by the calculation engines
//!
//! Positions, proper motions, angular units and decoded flag descriptions. Every type is a
//! small immutable value: constructed, consumed by one calculation and dropped.

use serde::{Deserialize, Serialize};

use crate::astrocalc_errors::{AstroCalcError, Result};
use crate::constants::{Degree, DEG_ARCSEC, DEG_MAS};

/// Equatorial position in decimal degrees.
///
/// The constructor guarantees `ra ∈ [0, 360)` and `dec ∈ [-90, 90]`; out-of-range values are
/// rejected rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct DecimalCoords {
    ra: Degree,
    dec: Degree,
}

impl DecimalCoords {
    /// Build a position from right ascension and declination in degrees.
    ///
    /// Return
    /// ------
    /// * `Err(RightAscensionOutOfRange)` if `ra` is not finite or outside `[0, 360)`
    /// * `Err(DeclinationOutOfRange)` if `dec` is not finite or outside `[-90, 90]`
    pub fn new(ra: Degree, dec: Degree) -> Result<Self> {
        if !ra.is_finite() || !(0.0..360.0).contains(&ra) {
            return Err(AstroCalcError::RightAscensionOutOfRange(ra));
        }
        if !dec.is_finite() || !(-90.0..=90.0).contains(&dec) {
            return Err(AstroCalcError::DeclinationOutOfRange(dec));
        }
        Ok(DecimalCoords { ra, dec })
    }

    pub fn ra(&self) -> Degree {
        self.ra
    }

    pub fn dec(&self) -> Degree {
        self.dec
    }
}

impl TryFrom<(f64, f64)> for DecimalCoords {
    type Error = AstroCalcError;

    fn try_from((ra, dec): (f64, f64)) -> Result<Self> {
        DecimalCoords::new(ra, dec)
    }
}

impl From<DecimalCoords> for (f64, f64) {
    fn from(coords: DecimalCoords) -> Self {
        (coords.ra, coords.dec)
    }
}

impl std::fmt::Display for DecimalCoords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.ra, self.dec)
    }
}

/// Proper motion components, already scaled to the unit requested by the caller.
///
/// `pm_ra` is the true on-sky motion (corrected by cos(Dec)), not the coordinate-grid rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProperMotion {
    pub pm_ra: f64,
    pub pm_dec: f64,
}

impl ProperMotion {
    pub fn new(pm_ra: f64, pm_dec: f64) -> Self {
        ProperMotion { pm_ra, pm_dec }
    }

    /// Magnitude of the motion vector, in the same unit as the components.
    pub fn total(&self) -> f64 {
        crate::astrometry::calculate_total_proper_motion(self.pm_ra, self.pm_dec)
    }
}

/// Unit in which angular results are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngularUnit {
    Degree,
    ArcSecond,
    MilliArcSecond,
}

impl AngularUnit {
    /// Scale factor from degrees to this unit.
    pub fn factor(&self) -> f64 {
        match self {
            AngularUnit::Degree => 1.0,
            AngularUnit::ArcSecond => DEG_ARCSEC,
            AngularUnit::MilliArcSecond => DEG_MAS,
        }
    }
}

/// One decoded bit of a catalog flag bitmask.
///
/// `value` is the bit value written in decimal (e.g. `"16"`), `description` its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlagDescription {
    pub value: String,
    pub description: String,
}

impl FlagDescription {
    pub fn new(value: impl Into<String>, description: impl Into<String>) -> Self {
        FlagDescription {
            value: value.into(),
            description: description.into(),
        }
    }

    pub fn as_pair(&self) -> (&str, &str) {
        (&self.value, &self.description)
    }
}

#[cfg(test)]
mod coordinates_test {
    use super::*;

    #[test]
    fn test_decimal_coords_bounds() {
        assert!(DecimalCoords::new(0.0, -90.0).is_ok());
        assert!(DecimalCoords::new(359.999999, 90.0).is_ok());
        assert_eq!(
            DecimalCoords::new(360.0, 0.0),
            Err(AstroCalcError::RightAscensionOutOfRange(360.0))
        );
        assert_eq!(
            DecimalCoords::new(-0.5, 0.0),
            Err(AstroCalcError::RightAscensionOutOfRange(-0.5))
        );
        assert_eq!(
            DecimalCoords::new(10.0, 90.1),
            Err(AstroCalcError::DeclinationOutOfRange(90.1))
        );
        assert!(DecimalCoords::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_try_from_tuple() {
        let coords = DecimalCoords::try_from((194.3375, 71.897)).unwrap();
        assert_eq!(coords.ra(), 194.3375);
        assert_eq!(coords.dec(), 71.897);
    }

    #[test]
    fn test_angular_unit_factor() {
        assert_eq!(AngularUnit::Degree.factor(), 1.0);
        assert_eq!(AngularUnit::ArcSecond.factor(), 3600.0);
        assert_eq!(AngularUnit::MilliArcSecond.factor(), 3_600_000.0);
    }

    #[test]
    fn test_flag_description_pair() {
        let flag = FlagDescription::new("4", "object IDed with known ICRF quasar");
        assert_eq!(flag.as_pair(), ("4", "object IDed with known ICRF quasar"));
    }
}
