//! # Astrometric calculations on decimal-degree positions
//!
//! Angular separations, proper motions from two epochs, and the small kinematic helpers built
//! on them (parallactic distance, tangential velocity, position angle).
//!
//! Every angular result is scaled by the [`AngularUnit`] requested by the caller; the formulas
//! themselves work in degrees.
//!
//! ## Angular separation
//!
//! Close pairs (both offsets below one arcminute) are measured in the local tangent plane,
//! `sqrt((Δα·cos δ̄)² + Δδ²)` with `δ̄` the mean declination, which is exact to second order at
//! that scale. Wider pairs use `atan2(|u × v|, u · v)` on unit vectors, which keeps full
//! precision at every angle where the cosine formula loses it near 0 and 180 degrees.

use nalgebra::Vector3;

use crate::astrocalc_errors::{AstroCalcError, Result};
use crate::constants::{
    Degree, KmPerSec, MilliArcSec, Parsec, ARCSEC_MAS, DAYS_PER_YEAR, MINUTES_PER_UNIT, MJD,
    KM_S_PER_AU_YR,
};
use crate::coordinates::{AngularUnit, DecimalCoords, ProperMotion};

/// Largest offset, on either axis, measured in the tangent plane (one arcminute).
const TANGENT_PLANE_LIMIT: Degree = 1.0 / MINUTES_PER_UNIT;

/// Right ascension difference `to - from`, wrapped into (-180, 180].
fn delta_ra(from: &DecimalCoords, to: &DecimalCoords) -> Degree {
    let delta = to.ra() - from.ra();
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// Cosine of the mean declination of two positions.
fn cos_mean_dec(from: &DecimalCoords, to: &DecimalCoords) -> f64 {
    ((from.dec() + to.dec()) / 2.0).to_radians().cos()
}

fn unit_vector(coords: &DecimalCoords) -> Vector3<f64> {
    let (sin_ra, cos_ra) = coords.ra().to_radians().sin_cos();
    let (sin_dec, cos_dec) = coords.dec().to_radians().sin_cos();
    Vector3::new(cos_dec * cos_ra, cos_dec * sin_ra, sin_dec)
}

/// Compute the angular separation between two positions.
///
/// Arguments
/// ---------
/// * `from`, `to`: the two positions in decimal degrees
/// * `unit`: unit of the returned separation
///
/// Return
/// ----------
/// * the separation in `unit`, always non-negative
pub fn calculate_angular_distance(
    from: &DecimalCoords,
    to: &DecimalCoords,
    unit: AngularUnit,
) -> f64 {
    let d_ra = delta_ra(from, to);
    let d_dec = to.dec() - from.dec();

    if d_ra.abs() < TANGENT_PLANE_LIMIT && d_dec.abs() < TANGENT_PLANE_LIMIT {
        let x = d_ra * cos_mean_dec(from, to);
        let y = d_dec;
        return (x * x + y * y).sqrt() * unit.factor();
    }

    let u = unit_vector(from);
    let v = unit_vector(to);
    u.cross(&v).norm().atan2(u.dot(&v)).to_degrees() * unit.factor()
}

/// Compute the proper motion of an object observed at two epochs.
///
/// The right ascension component is corrected by the cosine of the mean declination so that
/// it measures true motion on the sky. Both components are normalised to a 365-day year.
///
/// Arguments
/// ---------
/// * `from`, `to`: positions at the earlier and later epoch
/// * `from_epoch`, `to_epoch`: the two epochs in MJD (days)
/// * `unit`: angular unit of the result (per year)
///
/// Return
/// ----------
/// * `Ok(ProperMotion)` in `unit` per year
/// * `Err(DegenerateEpochs)` if both epochs are equal
/// * `Err(NonFiniteResult)` if the baseline is too short for the motion to be representable
pub fn calculate_proper_motions(
    from: &DecimalCoords,
    to: &DecimalCoords,
    from_epoch: MJD,
    to_epoch: MJD,
    unit: AngularUnit,
) -> Result<ProperMotion> {
    for epoch in [from_epoch, to_epoch] {
        if !epoch.is_finite() {
            return Err(AstroCalcError::InvalidParameter {
                quantity: "epoch",
                value: epoch,
            });
        }
    }

    let days = to_epoch - from_epoch;
    if days == 0.0 {
        tracing::debug!(epoch = from_epoch, "proper motion requested over a zero baseline");
        return Err(AstroCalcError::DegenerateEpochs(from_epoch));
    }

    let factor = unit.factor();
    let pm_ra = delta_ra(from, to) * cos_mean_dec(from, to) / days * DAYS_PER_YEAR * factor;
    let pm_dec = (to.dec() - from.dec()) / days * DAYS_PER_YEAR * factor;
    if !pm_ra.is_finite() || !pm_dec.is_finite() {
        tracing::debug!(days, "proper motion overflowed over a tiny baseline");
        return Err(AstroCalcError::NonFiniteResult("proper motion"));
    }

    Ok(ProperMotion::new(pm_ra, pm_dec))
}

/// Magnitude of a proper motion from its two already-scaled components.
pub fn calculate_total_proper_motion(pm_ra: f64, pm_dec: f64) -> f64 {
    (pm_ra * pm_ra + pm_dec * pm_dec).sqrt()
}

/// Distance in parsecs from a trigonometric parallax in milliarcseconds.
pub fn calculate_parallactic_distance(parallax: MilliArcSec) -> Result<Parsec> {
    if !parallax.is_finite() || parallax <= 0.0 {
        return Err(AstroCalcError::InvalidParameter {
            quantity: "parallax",
            value: parallax,
        });
    }
    Ok(ARCSEC_MAS / parallax)
}

/// Tangential velocity in km/s from a total proper motion (mas/yr) and a distance (pc).
pub fn calculate_tangential_velocity(
    total_proper_motion: MilliArcSec,
    distance: Parsec,
) -> Result<KmPerSec> {
    if !total_proper_motion.is_finite() || total_proper_motion < 0.0 {
        return Err(AstroCalcError::InvalidParameter {
            quantity: "total proper motion",
            value: total_proper_motion,
        });
    }
    if !distance.is_finite() || distance < 0.0 {
        return Err(AstroCalcError::InvalidParameter {
            quantity: "distance",
            value: distance,
        });
    }
    Ok(KM_S_PER_AU_YR * total_proper_motion / ARCSEC_MAS * distance)
}

/// Position angle of `to` seen from `from`, in degrees east of north, in `[0, 360)`.
pub fn calculate_position_angle(from: &DecimalCoords, to: &DecimalCoords) -> Degree {
    let d_ra = (to.ra() - from.ra()).to_radians();
    let (sin_dec1, cos_dec1) = from.dec().to_radians().sin_cos();
    let (sin_dec2, cos_dec2) = to.dec().to_radians().sin_cos();

    let y = d_ra.sin() * cos_dec2;
    let x = cos_dec1 * sin_dec2 - sin_dec1 * cos_dec2 * d_ra.cos();
    y.atan2(x).to_degrees().rem_euclid(360.0)
}
