use crate::astrocalc_errors::{AstroCalcError, Result};
use crate::constants::{Jansky, Micron, Parsec, JANSKY_SI, MICRONS_PER_METER, SPEED_OF_LIGHT};

/// Vega zero point and effective wavelength of a photometric passband.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroPoint {
    pub band: &'static str,
    /// Flux of a zero-magnitude source in Janskys
    pub flux: Jansky,
    /// Effective wavelength in micrometers
    pub wavelength: Micron,
}

/// Zero points of the passbands the catalogs are cross-referenced in (SVO filter service values).
pub static ZERO_POINTS: [ZeroPoint; 10] = [
    ZeroPoint { band: "G", flux: 3228.75, wavelength: 0.582239 },
    ZeroPoint { band: "BP", flux: 3552.01, wavelength: 0.503575 },
    ZeroPoint { band: "RP", flux: 2554.95, wavelength: 0.761996 },
    ZeroPoint { band: "J", flux: 1594.0, wavelength: 1.235 },
    ZeroPoint { band: "H", flux: 1024.0, wavelength: 1.662 },
    ZeroPoint { band: "Ks", flux: 666.8, wavelength: 2.159 },
    ZeroPoint { band: "W1", flux: 309.54, wavelength: 3.3526 },
    ZeroPoint { band: "W2", flux: 171.787, wavelength: 4.6028 },
    ZeroPoint { band: "W3", flux: 31.674, wavelength: 11.5608 },
    ZeroPoint { band: "W4", flux: 8.363, wavelength: 22.0883 },
];

impl ZeroPoint {
    /// Look up a passband by name (case-sensitive, `"Ks"`, `"W1"`, …).
    pub fn for_band(band: &str) -> Option<&'static ZeroPoint> {
        ZERO_POINTS.iter().find(|zp| zp.band == band)
    }
}

fn require_finite(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AstroCalcError::InvalidParameter { quantity, value })
    }
}

fn require_positive(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AstroCalcError::InvalidParameter { quantity, value })
    }
}

fn finite_result(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(quantity, value, "conversion produced a non-finite value");
        Err(AstroCalcError::NonFiniteResult(quantity))
    }
}

/// Distance from the distance modulus, `d = 10^((m − M + 5) / 5)`.
///
/// Arguments
/// ---------
/// * `apparent_magnitude`: apparent magnitude `m`
/// * `absolute_magnitude`: absolute magnitude `M`
///
/// Return
/// ------
/// * the distance in parsecs
pub fn calculate_distance_from_magnitudes(
    apparent_magnitude: f64,
    absolute_magnitude: f64,
) -> Result<Parsec> {
    require_finite("apparent magnitude", apparent_magnitude)?;
    require_finite("absolute magnitude", absolute_magnitude)?;
    finite_result(
        "distance",
        10f64.powf((apparent_magnitude - absolute_magnitude + 5.0) / 5.0),
    )
}

/// Absolute magnitude of a source of apparent magnitude `m` at `distance` parsecs.
pub fn calculate_absolute_magnitude(apparent_magnitude: f64, distance: Parsec) -> Result<f64> {
    require_finite("apparent magnitude", apparent_magnitude)?;
    require_positive("distance", distance)?;
    Ok(apparent_magnitude - 5.0 * distance.log10() + 5.0)
}

/// Spectral flux density in Janskys of a magnitude, `F = zp · 10^(−m / 2.5)`.
///
/// Arguments
/// ---------
/// * `magnitude`: the catalog magnitude
/// * `zero_point`: flux of a zero-magnitude source in the same band, in Janskys
pub fn convert_magnitude_to_janskys(magnitude: f64, zero_point: Jansky) -> Result<Jansky> {
    require_finite("magnitude", magnitude)?;
    require_positive("zero point", zero_point)?;
    finite_result("flux", zero_point * 10f64.powf(-magnitude / 2.5))
}

/// Magnitude of a spectral flux density, the inverse of [`convert_magnitude_to_janskys`].
pub fn convert_janskys_to_magnitude(flux: Jansky, zero_point: Jansky) -> Result<f64> {
    require_positive("flux", flux)?;
    require_positive("zero point", zero_point)?;
    Ok(-2.5 * (flux / zero_point).log10())
}

/// νF(ν) in W·m⁻² of a flux density in Janskys observed at `wavelength` micrometers.
fn janskys_to_nu_f_nu(flux: Jansky, wavelength: Micron) -> f64 {
    let frequency = SPEED_OF_LIGHT * MICRONS_PER_METER / wavelength;
    flux * JANSKY_SI * frequency
}

/// Convert a magnitude to the energy flux νF(ν) in W·m⁻².
///
/// Arguments
/// ---------
/// * `magnitude`: the catalog magnitude
/// * `zero_point`: zero-magnitude flux of the band in Janskys
/// * `wavelength`: effective wavelength of the band in micrometers
pub fn convert_magnitude_to_flux(
    magnitude: f64,
    zero_point: Jansky,
    wavelength: Micron,
) -> Result<f64> {
    require_positive("wavelength", wavelength)?;
    let flux = convert_magnitude_to_janskys(magnitude, zero_point)?;
    finite_result("flux", janskys_to_nu_f_nu(flux, wavelength))
}

/// Convert a magnitude to the flux density F(λ) in W·m⁻²·µm⁻¹.
///
/// Since λF(λ) = νF(ν), this is the energy flux divided by the wavelength, which is the same as
/// F(ν)·c/λ².
pub fn convert_magnitude_to_flux_density(
    magnitude: f64,
    zero_point: Jansky,
    wavelength: Micron,
) -> Result<f64> {
    let nu_f_nu = convert_magnitude_to_flux(magnitude, zero_point, wavelength)?;
    finite_result("flux density", nu_f_nu / wavelength)
}

#[cfg(test)]
mod flux_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_from_magnitudes() {
        assert_relative_eq!(
            calculate_distance_from_magnitudes(14.25, 10.75).unwrap(),
            50.11872336272722,
            max_relative = 1e-14
        );
        assert_eq!(calculate_distance_from_magnitudes(5.0, 5.0).unwrap(), 10.0);
        assert!(calculate_distance_from_magnitudes(f64::NAN, 5.0).is_err());
        assert_eq!(
            calculate_distance_from_magnitudes(2000.0, 0.0),
            Err(AstroCalcError::NonFiniteResult("distance"))
        );
    }

    #[test]
    fn test_absolute_magnitude() {
        assert_relative_eq!(
            calculate_absolute_magnitude(14.25, 50.11872336272722).unwrap(),
            10.75,
            epsilon = 1e-12
        );
        assert!(calculate_absolute_magnitude(14.25, 0.0).is_err());
    }

    #[test]
    fn test_magnitude_to_janskys() {
        assert_relative_eq!(
            convert_magnitude_to_janskys(10.0, 309.54).unwrap(),
            0.030954,
            max_relative = 1e-14
        );
        assert_eq!(convert_magnitude_to_janskys(0.0, 1594.0).unwrap(), 1594.0);
        assert_relative_eq!(
            convert_magnitude_to_janskys(15.0, 3228.75).unwrap(),
            0.00322875,
            max_relative = 1e-14
        );
        assert!(convert_magnitude_to_janskys(10.0, 0.0).is_err());
        assert_eq!(
            convert_magnitude_to_janskys(-1000.0, 309.54),
            Err(AstroCalcError::NonFiniteResult("flux"))
        );
    }

    #[test]
    fn test_janskys_to_magnitude() {
        assert_relative_eq!(
            convert_janskys_to_magnitude(0.030954, 309.54).unwrap(),
            10.0,
            epsilon = 1e-12
        );
        assert!(convert_janskys_to_magnitude(-1.0, 309.54).is_err());
    }

    #[test]
    fn test_magnitude_to_flux() {
        let w1 = ZeroPoint::for_band("W1").unwrap();
        assert_relative_eq!(
            convert_magnitude_to_flux(10.0, w1.flux, w1.wavelength).unwrap(),
            2.767934064586292e-14,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert_magnitude_to_flux_density(10.0, w1.flux, w1.wavelength).unwrap(),
            8.25608203957016e-15,
            max_relative = 1e-12
        );
        assert!(convert_magnitude_to_flux(10.0, w1.flux, 0.0).is_err());
        assert!(convert_magnitude_to_flux_density(10.0, w1.flux, -2.0).is_err());
    }

    #[test]
    fn test_flux_forms_agree() {
        // F(λ) = F(ν)·c/λ² with λ in meters, converted to per-micrometer
        let (mag, zp, wavelength) = (12.3, 1024.0, 1.662);
        let janskys = convert_magnitude_to_janskys(mag, zp).unwrap();
        let lambda_m = wavelength / MICRONS_PER_METER;
        let expected = janskys * JANSKY_SI * SPEED_OF_LIGHT / (lambda_m * lambda_m) / MICRONS_PER_METER;
        assert_relative_eq!(
            convert_magnitude_to_flux_density(mag, zp, wavelength).unwrap(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_point_lookup() {
        assert_eq!(ZeroPoint::for_band("Ks").map(|zp| zp.flux), Some(666.8));
        assert!(ZeroPoint::for_band("K").is_none());
    }
}
