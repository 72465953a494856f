use thiserror::Error;
use tracing::debug;

use crate::constants::{JulianDay, MillisecondEpoch};

/// Broad category of a [`TleError`].
///
/// Callers that only need to know *why* an input was refused should match on this
/// rather than on the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TleErrorKind {
    /// The input does not have the fixed width the format requires.
    Length,
    /// A character that must be a decimal digit (or a field with a fixed shape) is malformed.
    Format,
    /// A numeric value is outside the representable domain.
    Range,
}

#[derive(Error, Debug)]
pub enum TleError {
    #[error("Invalid line length: must be {expected} characters, received {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Checksum character is not a decimal digit: {0:?}")]
    InvalidChecksumDigit(char),

    #[error("Invalid epoch field, expected YYDDD.DDDDDDDD: {0:?}")]
    InvalidEpochField(String),

    #[error("Julian day {julian_day} is out of range for year {year}")]
    JulianDayOutOfRange { year: i32, julian_day: JulianDay },

    #[error("Two-digit year out of range (00-99): {0}")]
    TwoDigitYearOutOfRange(u32),

    #[error("Year {0} cannot be represented on the UTC calendar")]
    YearOutOfRange(i32),

    #[error("Millisecond epoch {0} cannot be represented on the UTC calendar")]
    TimestampOutOfRange(MillisecondEpoch),
}

impl TleError {
    pub fn kind(&self) -> TleErrorKind {
        use TleError::*;
        match self {
            InvalidLength { .. } => TleErrorKind::Length,
            InvalidChecksumDigit(_) | InvalidEpochField(_) => TleErrorKind::Format,
            JulianDayOutOfRange { .. }
            | TwoDigitYearOutOfRange(_)
            | YearOutOfRange(_)
            | TimestampOutOfRange(_) => TleErrorKind::Range,
        }
    }
}

/// Check that `line` holds exactly `expected` code points.
pub(crate) fn ensure_length(line: &str, expected: usize) -> Result<(), TleError> {
    let actual = line.chars().count();
    if actual != expected {
        debug!(expected, actual, "rejecting record with invalid length");
        return Err(TleError::InvalidLength { expected, actual });
    }
    Ok(())
}

impl PartialEq for TleError {
    fn eq(&self, other: &Self) -> bool {
        use TleError::*;
        match (self, other) {
            (
                InvalidLength {
                    expected: e1,
                    actual: a1,
                },
                InvalidLength {
                    expected: e2,
                    actual: a2,
                },
            ) => e1 == e2 && a1 == a2,
            (InvalidChecksumDigit(a), InvalidChecksumDigit(b)) => a == b,
            (InvalidEpochField(a), InvalidEpochField(b)) => a == b,

            // NaN julian days still compare equal so that a rejected NaN can be asserted on
            (
                JulianDayOutOfRange {
                    year: y1,
                    julian_day: d1,
                },
                JulianDayOutOfRange {
                    year: y2,
                    julian_day: d2,
                },
            ) => y1 == y2 && (d1 == d2 || (d1.is_nan() && d2.is_nan())),

            (TwoDigitYearOutOfRange(a), TwoDigitYearOutOfRange(b)) => a == b,
            (YearOutOfRange(a), YearOutOfRange(b)) => a == b,
            (TimestampOutOfRange(a), TimestampOutOfRange(b)) => a == b,

            _ => false,
        }
    }
}

#[cfg(test)]
mod tle_errors_test {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = TleError::InvalidLength {
            expected: 69,
            actual: 12,
        };
        assert_eq!(err.kind(), TleErrorKind::Length);
        assert_eq!(
            err.to_string(),
            "Invalid line length: must be 69 characters, received 12"
        );

        assert_eq!(
            TleError::InvalidChecksumDigit('x').kind(),
            TleErrorKind::Format
        );
        assert_eq!(
            TleError::InvalidEpochField("bad".into()).kind(),
            TleErrorKind::Format
        );
        assert_eq!(
            TleError::JulianDayOutOfRange {
                year: 2021,
                julian_day: 366.0
            }
            .kind(),
            TleErrorKind::Range
        );
        assert_eq!(TleError::YearOutOfRange(i32::MAX).kind(), TleErrorKind::Range);
        assert_eq!(
            TleError::TimestampOutOfRange(i64::MIN).kind(),
            TleErrorKind::Range
        );
    }

    #[test]
    fn test_ensure_length() {
        assert_eq!(ensure_length("abc", 3), Ok(()));
        assert_eq!(ensure_length("été", 3), Ok(()));
        assert_eq!(
            ensure_length("abcd", 3),
            Err(TleError::InvalidLength {
                expected: 3,
                actual: 4
            })
        );
        assert_eq!(
            ensure_length("", 68),
            Err(TleError::InvalidLength {
                expected: 68,
                actual: 0
            })
        );
    }

    #[test]
    fn test_nan_julian_day_equality() {
        let a = TleError::JulianDayOutOfRange {
            year: 2000,
            julian_day: f64::NAN,
        };
        let b = TleError::JulianDayOutOfRange {
            year: 2000,
            julian_day: f64::NAN,
        };
        assert_eq!(a, b);
        assert_ne!(a, TleError::YearOutOfRange(2000));
    }
}
