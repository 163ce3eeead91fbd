use thiserror::Error;

/// Coarse classification of an [`AstroCalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed textual input (sexagesimal, MJD or date strings).
    Format,
    /// Degenerate or out-of-range numeric input, or a non-finite result.
    Domain,
    /// Catalog endpoint configuration could not be loaded.
    Config,
}

#[derive(Error, Debug)]
pub enum AstroCalcError {
    #[error("Invalid sexagesimal coordinate '{input}': {reason}")]
    InvalidSexagesimal { input: String, reason: String },

    #[error("Invalid Modified Julian Date '{input}': {reason}")]
    InvalidMjd { input: String, reason: String },

    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("Right ascension out of range [0, 360): {0}")]
    RightAscensionOutOfRange(f64),

    #[error("Declination out of range [-90, 90]: {0}")]
    DeclinationOutOfRange(f64),

    #[error("Sexagesimal field out of range: {0}")]
    SexagesimalFieldOutOfRange(String),

    #[error("Identical epochs give no time baseline: {0}")]
    DegenerateEpochs(f64),

    #[error("Search radius must be a finite non-negative number of degrees: {0}")]
    InvalidRadius(f64),

    #[error("Invalid {quantity}: {value}")]
    InvalidParameter { quantity: &'static str, value: f64 },

    #[error("Non-finite {0}")]
    NonFiniteResult(&'static str),

    #[error("Calendar date out of supported range for MJD {0}")]
    CalendarOverflow(i64),

    #[error("Unable to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid endpoint configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),
}

impl AstroCalcError {
    /// Map the error onto the format / domain / config taxonomy.
    pub fn kind(&self) -> ErrorKind {
        use AstroCalcError::*;
        match self {
            InvalidSexagesimal { .. } | InvalidMjd { .. } | InvalidDate(_) => ErrorKind::Format,
            RightAscensionOutOfRange(_)
            | DeclinationOutOfRange(_)
            | SexagesimalFieldOutOfRange(_)
            | DegenerateEpochs(_)
            | InvalidRadius(_)
            | InvalidParameter { .. }
            | NonFiniteResult(_)
            | CalendarOverflow(_) => ErrorKind::Domain,
            IoError(_) | InvalidConfig(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, AstroCalcError>;

impl PartialEq for AstroCalcError {
    fn eq(&self, other: &Self) -> bool {
        use AstroCalcError::*;
        match (self, other) {
            (
                InvalidSexagesimal {
                    input: a,
                    reason: ra,
                },
                InvalidSexagesimal {
                    input: b,
                    reason: rb,
                },
            ) => a == b && ra == rb,
            (
                InvalidMjd {
                    input: a,
                    reason: ra,
                },
                InvalidMjd {
                    input: b,
                    reason: rb,
                },
            ) => a == b && ra == rb,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (RightAscensionOutOfRange(a), RightAscensionOutOfRange(b)) => a.to_bits() == b.to_bits(),
            (DeclinationOutOfRange(a), DeclinationOutOfRange(b)) => a.to_bits() == b.to_bits(),
            (SexagesimalFieldOutOfRange(a), SexagesimalFieldOutOfRange(b)) => a == b,
            (DegenerateEpochs(a), DegenerateEpochs(b)) => a.to_bits() == b.to_bits(),
            (InvalidRadius(a), InvalidRadius(b)) => a.to_bits() == b.to_bits(),
            (
                InvalidParameter {
                    quantity: qa,
                    value: a,
                },
                InvalidParameter {
                    quantity: qb,
                    value: b,
                },
            ) => qa == qb && a.to_bits() == b.to_bits(),
            (NonFiniteResult(a), NonFiniteResult(b)) => a == b,
            (CalendarOverflow(a), CalendarOverflow(b)) => a == b,

            // Not comparable: equal when the variant matches
            (IoError(_), IoError(_)) => true,
            (InvalidConfig(_), InvalidConfig(_)) => true,

            _ => false,
        }
    }
}

#[cfg(test)]
mod astrocalc_errors_test {
    use super::*;

    #[test]
    fn test_error_kind() {
        let err = AstroCalcError::InvalidSexagesimal {
            input: "12 57".into(),
            reason: "expected 3 fields, found 2".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(AstroCalcError::DegenerateEpochs(55400.0).kind(), ErrorKind::Domain);
        assert_eq!(AstroCalcError::InvalidRadius(-1.0).kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AstroCalcError::DeclinationOutOfRange(91.5).to_string(),
            "Declination out of range [-90, 90]: 91.5"
        );
    }
}
