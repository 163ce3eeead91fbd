//! # Time conversions
//!
//! Modified Julian Date → calendar date-time, plus the MJD/JD/decimal-year helpers used to
//! describe observation epochs.
//!
//! ## Exact MJD cascade
//!
//! Catalog MJDs carry eight or more fractional digits, which is microsecond resolution. A
//! binary `f64` cannot hold those digits exactly, so [`ModifiedJulianDate`] keeps the decimal
//! text as an integer day count and an exact fraction `numerator / 10^digits`. The time of day
//! is then obtained by integer division and remainder only:
//!
//! ```text
//! hours   = ⌊f·24⌋         r = f·24 − hours
//! minutes = ⌊r·60⌋         r = r·60 − minutes
//! seconds = ⌊r·60⌋         r = r·60 − seconds
//! micros  = ⌊r·10⁶⌋
//! ```
//!
//! The day count is added to 1858-11-17 in the proleptic Gregorian calendar.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use hifitime::Epoch;
use std::str::FromStr;

use crate::astrocalc_errors::{AstroCalcError, Result};
use crate::constants::{JULIAN_YEAR_DAYS, J2000_YEAR, MJD, MJD_EPOCH, T2000};

/// Largest number of fractional digits kept exactly (u128 headroom for the ×10⁶ step).
const MAX_FRACTION_DIGITS: u32 = 30;

const MICROS_PER_SECOND: u128 = 1_000_000;

/// An exact fraction of a day, `numerator / 10^digits`, always below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct DayFraction {
    numerator: u128,
    digits: u32,
}

impl DayFraction {
    const ZERO: DayFraction = DayFraction {
        numerator: 0,
        digits: 0,
    };

    fn denominator(&self) -> u128 {
        10u128.pow(self.digits)
    }

    /// Split the fraction into hours, minutes, seconds and microseconds, truncating.
    fn time_of_day(&self) -> (u32, u32, u32, u32) {
        let denominator = self.denominator();

        let scaled = self.numerator * 24;
        let hours = scaled / denominator;

        let scaled = (scaled % denominator) * 60;
        let minutes = scaled / denominator;

        let scaled = (scaled % denominator) * 60;
        let seconds = scaled / denominator;

        let micros = (scaled % denominator) * MICROS_PER_SECOND / denominator;

        (hours as u32, minutes as u32, seconds as u32, micros as u32)
    }

    fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator() as f64
    }
}

/// A Modified Julian Date held exactly as written in decimal.
///
/// `day` is the floor of the value, so negative dates keep a fraction in `[0, 1)`:
/// `-0.25` is stored as day `-1` plus `0.75`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModifiedJulianDate {
    day: i64,
    fraction: DayFraction,
}

impl ModifiedJulianDate {
    /// A whole-day MJD (midnight).
    pub fn from_days(day: i64) -> Self {
        ModifiedJulianDate {
            day,
            fraction: DayFraction::ZERO,
        }
    }

    /// Whole days since 1858-11-17 (floor of the value).
    pub fn day(&self) -> i64 {
        self.day
    }

    /// Nearest `f64` to the exact value, for use where binary precision is acceptable.
    pub fn to_f64(&self) -> MJD {
        self.day as f64 + self.fraction.to_f64()
    }
}

fn mjd_error(input: &str, reason: impl Into<String>) -> AstroCalcError {
    let reason = reason.into();
    tracing::debug!(input, reason = %reason, "rejected MJD input");
    AstroCalcError::InvalidMjd {
        input: input.to_string(),
        reason,
    }
}

impl FromStr for ModifiedJulianDate {
    type Err = AstroCalcError;

    /// Parse a plain decimal number such as `"58432.63880639"` or `"-12.5"`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(mjd_error(s, "no digits"));
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(mjd_error(s, "expected a plain decimal number"));
        }

        let frac_part = frac_part.trim_end_matches('0');
        if frac_part.len() > MAX_FRACTION_DIGITS as usize {
            return Err(mjd_error(
                s,
                format!("more than {MAX_FRACTION_DIGITS} fractional digits"),
            ));
        }

        let whole: i64 = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse()
                .map_err(|_| mjd_error(s, "day count out of range"))?
        };
        let fraction = DayFraction {
            numerator: if frac_part.is_empty() {
                0
            } else {
                frac_part
                    .parse()
                    .map_err(|_| mjd_error(s, "invalid fractional digits"))?
            },
            digits: frac_part.len() as u32,
        };

        if !negative {
            return Ok(ModifiedJulianDate {
                day: whole,
                fraction,
            });
        }

        if fraction.numerator == 0 {
            Ok(ModifiedJulianDate::from_days(-whole))
        } else {
            Ok(ModifiedJulianDate {
                day: -whole - 1,
                fraction: DayFraction {
                    numerator: fraction.denominator() - fraction.numerator,
                    digits: fraction.digits,
                },
            })
        }
    }
}

impl std::fmt::Display for ModifiedJulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let DayFraction { numerator, digits } = self.fraction;
        let width = digits as usize;
        match (numerator, self.day < 0) {
            (0, _) => write!(f, "{}", self.day),
            (_, false) => write!(f, "{}.{numerator:0width$}", self.day),
            (_, true) => {
                let complement = self.fraction.denominator() - numerator;
                write!(f, "-{}.{complement:0width$}", -(self.day + 1))
            }
        }
    }
}

/// Convert a Modified Julian Date into a calendar date-time with microsecond resolution.
///
/// Arguments
/// ---------
/// * `mjd`: the exact MJD, days since 1858-11-17T00:00:00 UTC
///
/// Return
/// ------
/// * the proleptic Gregorian date-time, sub-microsecond digits truncated
/// * `Err(CalendarOverflow)` if the date is outside the range chrono can represent
pub fn convert_mjd_to_datetime(mjd: &ModifiedJulianDate) -> Result<NaiveDateTime> {
    let (year, month, day) = MJD_EPOCH;
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .zip(TimeDelta::try_days(mjd.day))
        .and_then(|(origin, delta)| origin.checked_add_signed(delta))
        .ok_or(AstroCalcError::CalendarOverflow(mjd.day))?;

    let (hours, minutes, seconds, micros) = mjd.fraction.time_of_day();
    let time = NaiveTime::from_hms_micro_opt(hours, minutes, seconds, micros)
        .ok_or(AstroCalcError::CalendarOverflow(mjd.day))?;

    Ok(NaiveDateTime::new(date, time))
}

/// Parse a decimal MJD string and convert it with [`convert_mjd_to_datetime`].
pub fn convert_mjd_str_to_datetime(mjd: &str) -> Result<NaiveDateTime> {
    convert_mjd_to_datetime(&mjd.parse()?)
}

/// Transformation from a date in the format YYYY-MM-ddTHH:mm:ss (UTC) to modified julian date
///
/// Argument
/// --------
/// * `date`: an ISO 8601 date, e.g. `"2021-01-01T00:00:00"`
///
/// Return
/// ------
/// * the date in modified julian date (MJD, UTC)
pub fn date_to_mjd(date: &str) -> Result<MJD> {
    let epoch = Epoch::from_str(date).map_err(|e| AstroCalcError::InvalidDate(e.to_string()))?;
    Ok(epoch.to_mjd_utc_days())
}

/// Transformation from modified julian date (MJD) to julian date (JD)
pub fn mjd_to_jd(mjd: MJD) -> f64 {
    Epoch::from_mjd_utc(mjd).to_jde_utc_days()
}

/// Transformation from julian date (JD) to modified julian date (MJD)
pub fn jd_to_mjd(jd: f64) -> MJD {
    Epoch::from_jde_utc(jd).to_mjd_utc_days()
}

/// Transformation from a date in the format YYYY MM DD.FFFFF (UTC) to modified julian date
///
/// The fractional day goes through the same exact cascade as [`convert_mjd_to_datetime`],
/// so the result is only limited by the final `f64`.
///
/// Argument
/// --------
/// * `date_str`: a string representing the date in the format YYYY MM DD.FFFFF
///
/// Return
/// ------
/// * the date in modified julian date (MJD, UTC)
pub fn frac_date_to_mjd(date_str: &str) -> Result<MJD> {
    let invalid = |reason: &str| AstroCalcError::InvalidDate(format!("{reason} in '{date_str}'"));

    let parts: Vec<&str> = date_str.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(invalid("expected YYYY MM DD.FFFFF"));
    }

    let year = i32::from_str(parts[0]).map_err(|_| invalid("invalid year"))?;
    let month = u8::from_str(parts[1]).map_err(|_| invalid("invalid month"))?;

    // Reuse the decimal parser so the fraction of day stays exact
    let day_fraction: ModifiedJulianDate = parts[2].parse().map_err(|_| invalid("invalid day"))?;
    let day = u8::try_from(day_fraction.day).map_err(|_| invalid("invalid day"))?;
    let (hour, minute, second, micros) = day_fraction.fraction.time_of_day();

    let epoch = Epoch::maybe_from_gregorian_utc(
        year,
        month,
        day,
        hour as u8,
        minute as u8,
        second as u8,
        micros * 1000,
    )
    .map_err(|e| AstroCalcError::InvalidDate(e.to_string()))?;

    Ok(epoch.to_mjd_utc_days())
}

/// Julian-year decimal epoch (e.g. `2016.0` for Gaia DR3) of a Modified Julian Date.
pub fn mjd_to_decimal_year(mjd: MJD) -> f64 {
    J2000_YEAR + (mjd - T2000) / JULIAN_YEAR_DAYS
}

/// Modified Julian Date of a Julian-year decimal epoch.
pub fn decimal_year_to_mjd(year: f64) -> MJD {
    T2000 + (year - J2000_YEAR) * JULIAN_YEAR_DAYS
}
