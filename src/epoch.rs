//! # TLE epoch codec
//!
//! Conversions between the epoch as written in a two-line element set and an absolute
//! **Unix millisecond timestamp** (milliseconds since 1970-01-01T00:00:00 UTC).
//!
//! ## Overview
//! -----------------
//! The epoch field of line 1 is written `YYDDD.DDDDDDDD`:
//!
//! * `YY` – two-digit year, resolved with [`EPOCH_CENTURY_PIVOT`] (57–99 → 19YY, 00–56 → 20YY),
//! * `DDD` – 1-based day of year, zero padded,
//! * `.DDDDDDDD` – time of day as a fraction of the day, no leading zero.
//!
//! The year and the fractional day-of-year (the *julian day* in TLE parlance, not to be
//! confused with the astronomical Julian Date) are carried together by [`TleEpoch`].
//!
//! ## Calendar
//! -----------------
//! All calendar arithmetic is proleptic Gregorian, UTC only, without leap seconds, which is
//! exactly the Unix timestamp model. Nothing is cached between calls: each conversion builds
//! its own `chrono` values, so every function here is safe to call from any thread.
//!
//! ## Rounding
//! -----------------
//! The fractional part of the day is converted to whole milliseconds with **round half up**.
//! Truncating would bias every epoch towards the past by up to one millisecond.
//!
//! ## See also
//! ------------
//! * [`crate::checksum`] – validation of the record line the epoch field is read from.
//! * [`hifitime::Epoch`] – target of [`TleEpoch::to_hifitime_epoch`].
use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime};
use hifitime::Epoch;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::constants::{
    JulianDay, MillisecondEpoch, EPOCH_CENTURY_PIVOT, EPOCH_FIELD, EPOCH_FIELD_WIDTH,
    EPOCH_FRACTION_DIGITS, LINE_LENGTH, MAX_JULIAN_DAY, MILLIS_PER_DAY,
};
use crate::tle_errors::{ensure_length, TleError};

static EPOCH_FIELD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})(\d{3}\.\d{8})$").expect("epoch field pattern is a valid regex")
});

/// Epoch of an element set: a four-digit year and a fractional day-of-year.
///
/// `julian_day` is 1-based: `1.0` is January 1st at 00:00:00.000 UTC, `1.5` is noon that day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TleEpoch {
    pub year: i32,
    pub julian_day: JulianDay,
}

impl TleEpoch {
    /// Build an epoch, rejecting a julian day outside `[1.0, days_in_year + 1)`.
    pub fn new(year: i32, julian_day: JulianDay) -> Result<Self, TleError> {
        check_julian_day(year, julian_day)?;
        Ok(TleEpoch { year, julian_day })
    }

    pub fn from_millisecond_epoch(epoch_ms: MillisecondEpoch) -> Result<Self, TleError> {
        let (date, millis_of_day) = split_instant(epoch_ms)?;
        Ok(TleEpoch {
            year: date.year(),
            julian_day: date.ordinal() as f64 + millis_of_day as f64 / MILLIS_PER_DAY,
        })
    }

    pub fn to_millisecond_epoch(&self) -> Result<MillisecondEpoch, TleError> {
        to_millisecond_epoch(self.year, self.julian_day)
    }

    /// Text of the 14-character epoch field, e.g. `08264.51782528`.
    pub fn to_tle_field(&self) -> Result<String, TleError> {
        format_for_tle(self.to_millisecond_epoch()?)
    }

    /// The same instant as a [`hifitime::Epoch`] in the UTC time scale.
    pub fn to_hifitime_epoch(&self) -> Result<Epoch, TleError> {
        let epoch_ms = self.to_millisecond_epoch()?;
        Ok(Epoch::from_unix_milliseconds(epoch_ms as f64))
    }

    /// Modified Julian Date of the epoch, in UTC days.
    pub fn mjd_utc(&self) -> Result<f64, TleError> {
        Ok(self.to_hifitime_epoch()?.to_mjd_utc_days())
    }
}

impl fmt::Display for TleEpoch {
    /// Writes the epoch field text; an epoch outside the calendar is a formatting error.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.to_tle_field().map_err(|_| fmt::Error)?;
        f.write_str(&field)
    }
}

/// Expand a two-digit TLE year to four digits.
///
/// Arguments
/// -----------------
/// * `two_digit_year` – the `YY` part of the epoch field, in `0..=99`.
///
/// Return
/// ----------
/// * `19YY` when `YY >= 57`, `20YY` otherwise, or [`TleError::TwoDigitYearOutOfRange`].
pub fn resolve_two_digit_year(two_digit_year: u32) -> Result<i32, TleError> {
    match two_digit_year {
        yy if yy > 99 => {
            debug!(two_digit_year, "two-digit year out of range");
            Err(TleError::TwoDigitYearOutOfRange(yy))
        }
        yy if yy >= EPOCH_CENTURY_PIVOT => Ok(1900 + yy as i32),
        yy => Ok(2000 + yy as i32),
    }
}

fn days_in_year(year: i32) -> Result<u32, TleError> {
    if NaiveDate::from_yo_opt(year, 1).is_none() {
        debug!(year, "year outside the supported calendar");
        return Err(TleError::YearOutOfRange(year));
    }
    Ok(if NaiveDate::from_yo_opt(year, 366).is_some() {
        366
    } else {
        365
    })
}

fn check_julian_day(year: i32, julian_day: JulianDay) -> Result<(), TleError> {
    if !(1.0..MAX_JULIAN_DAY).contains(&julian_day)
        || julian_day >= days_in_year(year)? as f64 + 1.0
    {
        debug!(year, julian_day, "julian day out of range");
        return Err(TleError::JulianDayOutOfRange { year, julian_day });
    }
    Ok(())
}

/// Milliseconds since the Unix epoch of midnight UTC starting `date`.
fn start_of_day(date: NaiveDate) -> MillisecondEpoch {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Calendar date of an instant and the milliseconds elapsed since that date's midnight.
fn split_instant(epoch_ms: MillisecondEpoch) -> Result<(NaiveDate, i64), TleError> {
    let instant = DateTime::from_timestamp_millis(epoch_ms).ok_or_else(|| {
        debug!(epoch_ms, "timestamp outside the supported calendar");
        TleError::TimestampOutOfRange(epoch_ms)
    })?;
    let date = instant.date_naive();
    Ok((date, epoch_ms - start_of_day(date)))
}

/// Convert a year and a fractional day-of-year into milliseconds since the Unix epoch.
///
/// The whole part of `julian_day` selects the calendar day, the fractional part is the time of
/// day, rounded half up to the nearest millisecond. A fraction close enough to `1.0` to round
/// to a full day yields midnight of the following day.
///
/// Arguments
/// -----------------
/// * `year` – four-digit year.
/// * `julian_day` – 1-based fractional day-of-year, `1.0 <= julian_day < days_in_year + 1`.
///
/// Return
/// ----------
/// * The Unix millisecond timestamp, or [`TleError::JulianDayOutOfRange`] /
///   [`TleError::YearOutOfRange`].
///
/// Example
/// ----------
/// ```
/// use tle_core::epoch::to_millisecond_epoch;
///
/// // 2000-01-01T12:00:00Z
/// assert_eq!(to_millisecond_epoch(2000, 1.5).unwrap(), 946_728_000_000);
/// // day 366 only exists in leap years
/// assert!(to_millisecond_epoch(2021, 366.0).is_err());
/// ```
pub fn to_millisecond_epoch(
    year: i32,
    julian_day: JulianDay,
) -> Result<MillisecondEpoch, TleError> {
    check_julian_day(year, julian_day)?;

    let whole_day = julian_day.trunc();
    let day_fraction = julian_day - whole_day;

    let date = NaiveDate::from_yo_opt(year, whole_day as u32)
        .ok_or(TleError::JulianDayOutOfRange { year, julian_day })?;

    // f64::round is half away from zero, i.e. half up for a non-negative fraction
    let millisecond = (day_fraction * MILLIS_PER_DAY).round() as i64;

    let epoch_ms = start_of_day(date) + millisecond;
    trace!(year, julian_day, epoch_ms, "converted TLE epoch");
    Ok(epoch_ms)
}

/// Format an instant as the 14-character TLE epoch field `YYDDD.DDDDDDDD`.
///
/// ```
/// use tle_core::epoch::format_for_tle;
///
/// // 2008-09-20T12:25:40.104Z
/// assert_eq!(format_for_tle(1_221_913_540_104).unwrap(), "08264.51782528");
/// ```
pub fn format_for_tle(epoch_ms: MillisecondEpoch) -> Result<String, TleError> {
    let (date, millis_of_day) = split_instant(epoch_ms)?;

    let day_fraction = millis_of_day as f64 / MILLIS_PER_DAY;
    let fraction = format!("{:.*}", EPOCH_FRACTION_DIGITS, day_fraction);
    // "0.xxxxxxxx" -> ".xxxxxxxx"
    let fraction = fraction.strip_prefix('0').unwrap_or(&fraction);

    Ok(format!(
        "{:02}{:03}{}",
        date.year().rem_euclid(100),
        date.ordinal(),
        fraction
    ))
}

/// Four-digit UTC year containing the instant.
pub fn epoch_year(epoch_ms: MillisecondEpoch) -> Result<i32, TleError> {
    Ok(TleEpoch::from_millisecond_epoch(epoch_ms)?.year)
}

/// Fractional day-of-year of the instant, the inverse of [`to_millisecond_epoch`].
pub fn epoch_julian_day(epoch_ms: MillisecondEpoch) -> Result<JulianDay, TleError> {
    Ok(TleEpoch::from_millisecond_epoch(epoch_ms)?.julian_day)
}

/// Parse the 14-character epoch field `YYDDD.DDDDDDDD`.
///
/// The field must match the layout exactly (no surrounding spaces, zero-padded day).
pub fn parse_epoch_field(field: &str) -> Result<TleEpoch, TleError> {
    let invalid = || {
        debug!(field, "malformed epoch field");
        TleError::InvalidEpochField(field.to_string())
    };

    let captures = EPOCH_FIELD_REGEX.captures(field).ok_or_else(invalid)?;
    let two_digit_year: u32 = captures[1].parse().map_err(|_| invalid())?;
    let julian_day: f64 = captures[2].parse().map_err(|_| invalid())?;

    TleEpoch::new(resolve_two_digit_year(two_digit_year)?, julian_day)
}

/// Read the epoch of a full line 1 record (columns 19–32).
///
/// Only the line length is checked here; checksum validation is left to
/// [`crate::checksum::is_checksum_valid`].
pub fn epoch_from_line(line: &str) -> Result<TleEpoch, TleError> {
    ensure_length(line, LINE_LENGTH)?;

    let field: String = line
        .chars()
        .skip(EPOCH_FIELD.start)
        .take(EPOCH_FIELD_WIDTH)
        .collect();
    parse_epoch_field(&field)
}
