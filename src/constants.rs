//! # Constants and type definitions for astrocalc
//!
//! This module centralizes the **conversion factors**, **physical constants** and **unit type
//! aliases** shared by every calculation in the crate.
//!
//! ## Overview
//!
//! - Angular unit conversions (degrees ↔ arcseconds ↔ milliarcseconds, hours → degrees)
//! - Calendar and epoch constants (MJD origin, Julian year, J2000.0)
//! - Photometric constants (Jansky in SI units, speed of light)
//! - Unit type aliases used across the crate
//!
//! Every value here is a compile-time constant: the table is read-only and shared by all
//! threads without synchronization.

// -------------------------------------------------------------------------------------------------
// Angular unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → arcseconds
pub const DEG_ARCSEC: f64 = 3600.0;

/// Degrees → milliarcseconds
pub const DEG_MAS: f64 = 3_600_000.0;

/// Arcseconds → milliarcseconds
pub const ARCSEC_MAS: f64 = 1000.0;

/// Arcseconds → degrees
pub const ARCSEC_DEG: f64 = 1.0 / DEG_ARCSEC;

/// Milliarcseconds → degrees
pub const MAS_DEG: f64 = 1.0 / DEG_MAS;

/// Milliarcseconds → arcseconds
pub const MAS_ARCSEC: f64 = 1.0 / ARCSEC_MAS;

/// Hours of right ascension → degrees
pub const HOURS_TO_DEG: f64 = 15.0;

/// Arcminutes in one degree (also minutes in one hour)
pub const MINUTES_PER_UNIT: f64 = 60.0;

/// Arcseconds in one degree (also seconds in one hour)
pub const SECONDS_PER_UNIT: f64 = 3600.0;

// -------------------------------------------------------------------------------------------------
// Time
// -------------------------------------------------------------------------------------------------

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Year length used to normalise proper-motion baselines (days)
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Length of the Julian year used for decimal-year epochs (days)
pub const JULIAN_YEAR_DAYS: f64 = 365.25;

/// Calendar date of MJD 0 (1858-11-17T00:00:00 UTC) as (year, month, day)
pub const MJD_EPOCH: (i32, u32, u32) = (1858, 11, 17);

/// MJD epoch of J2000.0 (2000-01-01 12:00:00)
pub const T2000: f64 = 51544.5;

/// Decimal year of J2000.0
pub const J2000_YEAR: f64 = 2000.0;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

// -------------------------------------------------------------------------------------------------
// Photometry and kinematics
// -------------------------------------------------------------------------------------------------

/// Speed of light in m/s
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;

/// One Jansky in W·m⁻²·Hz⁻¹
pub const JANSKY_SI: f64 = 1e-26;

/// Micrometers in one meter
pub const MICRONS_PER_METER: f64 = 1e6;

/// Tangential velocity in km/s of a star at 1 pc moving 1 arcsec/yr (AU/yr in km/s)
pub const KM_S_PER_AU_YR: f64 = 4.740470463533348;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in milliarcseconds
pub type MilliArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Spectral flux density in Janskys
pub type Jansky = f64;
/// Wavelength in micrometers
pub type Micron = f64;
/// Distance in parsecs
pub type Parsec = f64;
/// Velocity in kilometers per second
pub type KmPerSec = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
