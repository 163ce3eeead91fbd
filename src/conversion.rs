//! # Sexagesimal ⇄ decimal-degree conversion
//!
//! Right ascension and declination are accepted as free-form sexagesimal text. All of the
//! following spellings parse to the same value:
//!
//! ```text
//! 12h 57m 21.00s     +71d 53m 49.2s
//! 12h57m21.00s       +71d53m49.2s
//! 12h 57' 21.00"     +71° 53' 49.2"
//! 12:57:21.00        +71:53:49.2
//! ```
//!
//! Delimiters may be mixed freely inside one string. A sign is only valid as the first
//! character: `-05 30 00` works, `05 -30 00` does not.
//!
//! The inverse direction prints `"HH MM SS.ss ±DD MM SS.ss"`, rounding both axes to the
//! hundredth of a second before the fields are split so that a carry never prints `60.00`.

use std::sync::LazyLock;

use regex::Regex;

use crate::astrocalc_errors::{AstroCalcError, Result};
use crate::constants::{Degree, HOURS_TO_DEG, MINUTES_PER_UNIT, SECONDS_PER_UNIT};
use crate::coordinates::DecimalCoords;

/// Any run of unit letters, sexagesimal marks, colons or whitespace separates two fields.
static FIELD_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[hHdDmMsS:°º'"′″\s]+"#).expect("valid delimiter regex"));

/// An unsigned decimal number, as found in each sexagesimal field.
static UNSIGNED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(\.\d*)?|\.\d+)$").expect("valid number regex"));

/// Hundredths of a second in one hour (or one degree).
const CENTISECONDS_PER_UNIT: f64 = SECONDS_PER_UNIT * 100.0;

/// Hundredths of a second of time in a full day of right ascension.
const CENTISECONDS_PER_DAY: u64 = 24 * 360_000;

fn format_error(input: &str, reason: impl Into<String>) -> AstroCalcError {
    let reason = reason.into();
    tracing::debug!(input, reason = %reason, "rejected sexagesimal input");
    AstroCalcError::InvalidSexagesimal {
        input: input.to_string(),
        reason,
    }
}

/// Split a sexagesimal string into its sign and three unsigned numeric fields.
///
/// Arguments
/// ---------
/// * `text`: the raw coordinate, e.g. `"-05d 30m 14.2s"` or `"12:57:21.00"`
///
/// Return
/// ----------
/// * `Ok((sign, [first, minutes, seconds]))` where `sign` is `1.0` or `-1.0`
/// * `Err(InvalidSexagesimal)` if the text does not hold exactly three unsigned numbers
fn split_fields(text: &str) -> Result<(f64, [f64; 3])> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(format_error(text, "empty coordinate"));
    }
    let (sign, body) = if let Some(rest) = trimmed.strip_prefix(['-', '−']) {
        (-1.0, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, trimmed)
    };

    if body.contains(['+', '-', '−']) {
        return Err(format_error(text, "a sign is only allowed before the first field"));
    }

    let parts: Vec<&str> = FIELD_DELIMITERS
        .split(body)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 3 {
        return Err(format_error(
            text,
            format!("expected 3 fields, found {}", parts.len()),
        ));
    }

    let mut fields = [0.0; 3];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        if !UNSIGNED_NUMBER.is_match(part) {
            return Err(format_error(text, format!("'{part}' is not a number")));
        }
        *slot = part
            .parse()
            .map_err(|_| format_error(text, format!("'{part}' is not a number")))?;
    }

    Ok((sign, fields))
}

fn check_minutes_seconds(text: &str, minutes: f64, seconds: f64) -> Result<()> {
    if minutes >= MINUTES_PER_UNIT || seconds >= MINUTES_PER_UNIT {
        return Err(AstroCalcError::SexagesimalFieldOutOfRange(format!(
            "minutes and seconds must be below 60 in '{text}'"
        )));
    }
    Ok(())
}

/// Parse a right ascension string to degrees
///
/// Arguments
/// ---------
/// * `ra`: a string representing the right ascension as hours, minutes and seconds,
///   e.g. `"12h 57m 21.00s"`, `"12h57'21.00\""` or `"12:57:21.00"`
///
/// Returns
/// -------
/// * `Result<Degree>`: the right ascension in degrees, in `[0, 360)`.
pub fn parse_ra_to_deg(ra: &str) -> Result<Degree> {
    let (sign, [h, m, s]) = split_fields(ra)?;
    if sign < 0.0 {
        return Err(format_error(ra, "right ascension cannot be negative"));
    }
    check_minutes_seconds(ra, m, s)?;
    if h >= 24.0 {
        return Err(AstroCalcError::SexagesimalFieldOutOfRange(format!(
            "hours must be below 24 in '{ra}'"
        )));
    }

    // Seconds just below 60 in the last hour can still round the sum up to 360
    let ra_deg = (h + m / 60.0 + s / 3600.0) * HOURS_TO_DEG;
    if ra_deg >= 360.0 {
        return Err(AstroCalcError::RightAscensionOutOfRange(ra_deg));
    }
    Ok(ra_deg)
}

/// Parse a declination string to degrees
///
/// Arguments
/// ---------
/// * `dec`: a string representing the declination as signed degrees, minutes and seconds,
///   e.g. `"+71d 53m 49.2s"`, `"+71° 53' 49.2\""` or `"-00:30:14.2"`
///
/// Returns
/// -------
/// * `Result<Degree>`: the declination in degrees, in `[-90, 90]`.
pub fn parse_dec_to_deg(dec: &str) -> Result<Degree> {
    let (sign, [d, m, s]) = split_fields(dec)?;
    check_minutes_seconds(dec, m, s)?;

    let dec_deg = sign * (d + m / 60.0 + s / 3600.0);
    if dec_deg.abs() > 90.0 {
        return Err(AstroCalcError::DeclinationOutOfRange(dec_deg));
    }
    Ok(dec_deg)
}

/// Convert a sexagesimal right ascension and declination into decimal degrees.
///
/// Arguments
/// ---------
/// * `ra_text`: right ascension as hours, minutes, seconds
/// * `dec_text`: declination as signed degrees, minutes, seconds
///
/// Return
/// ----------
/// * `Ok(DecimalCoords)` holding `(ra, dec)` in degrees
/// * a format error for malformed text, a domain error for out-of-range fields
pub fn convert_to_decimal_coords(ra_text: &str, dec_text: &str) -> Result<DecimalCoords> {
    let ra = parse_ra_to_deg(ra_text)?;
    let dec = parse_dec_to_deg(dec_text)?;
    DecimalCoords::new(ra, dec)
}

/// Round a non-negative value (hours or degrees) half up to whole hundredths of a second.
fn to_centiseconds(value: f64) -> u64 {
    (value * CENTISECONDS_PER_UNIT).round() as u64
}

/// Split a count of hundredths of a second into whole units, minutes, seconds and hundredths.
fn split_centiseconds(total: u64) -> (u64, u64, u64, u64) {
    let centis = total % 100;
    let seconds = total / 100 % 60;
    let minutes = total / 6000 % 60;
    let units = total / 360_000;
    (units, minutes, seconds, centis)
}

/// Format decimal degrees as separate right ascension and declination strings.
///
/// Return
/// ----------
/// * `Ok(("HH MM SS.ss", "±DD MM SS.ss"))`, the declination carries a `-` only when negative
/// * a domain error if the position is outside the valid range
pub fn convert_to_sexagesimal_pair(ra: Degree, dec: Degree) -> Result<(String, String)> {
    let coords = DecimalCoords::new(ra, dec)?;

    let ra_hours = coords.ra() / HOURS_TO_DEG;
    let (h, m, s, cs) = split_centiseconds(to_centiseconds(ra_hours) % CENTISECONDS_PER_DAY);
    let ra_text = format!("{h:02} {m:02} {s:02}.{cs:02}");

    let (d, m, s, cs) = split_centiseconds(to_centiseconds(coords.dec().abs()));
    let sign = if coords.dec() < 0.0 && (d, m, s, cs) != (0, 0, 0, 0) {
        "-"
    } else {
        ""
    };
    let dec_text = format!("{sign}{d:02} {m:02} {s:02}.{cs:02}");

    Ok((ra_text, dec_text))
}

/// Format decimal degrees as a single `"HH MM SS.ss DD MM SS.ss"` string.
///
/// Arguments
/// ---------
/// * `ra`: right ascension in degrees, `[0, 360)`
/// * `dec`: declination in degrees, `[-90, 90]`
pub fn convert_to_sexagesimal_coords(ra: Degree, dec: Degree) -> Result<String> {
    let (ra_text, dec_text) = convert_to_sexagesimal_pair(ra, dec)?;
    Ok(format!("{ra_text} {dec_text}"))
}
