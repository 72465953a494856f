//! # Constants and type definitions for tle_core
//!
//! This module centralizes the **fixed-width layout** of a two-line element record and the
//! **calendar conventions** used by the epoch codec.
//!
//! ## Overview
//!
//! - Record geometry (line length, checksum column, epoch field columns)
//! - Time conversion factors
//! - The two-digit year century pivot
//! - Type aliases shared across the crate

use std::ops::Range;

// -------------------------------------------------------------------------------------------------
// Record layout
// -------------------------------------------------------------------------------------------------

/// Number of characters in a full record line, checksum digit included
pub const LINE_LENGTH: usize = 69;

/// 0-based position of the checksum digit, also the length of a checksum-stripped body
pub const CHECKSUM_INDEX: usize = 68;

/// Columns of the epoch field (`YYDDD.DDDDDDDD`) in line 1, 0-based and end-exclusive
pub const EPOCH_FIELD: Range<usize> = 18..32;

/// Width of the epoch field
pub const EPOCH_FIELD_WIDTH: usize = 14;

// -------------------------------------------------------------------------------------------------
// Time conventions
// -------------------------------------------------------------------------------------------------

/// Number of milliseconds in one day, as a float for fractional-day arithmetic
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Two-digit years at or above this value belong to the 1900s, below it to the 2000s.
///
/// 1957 is the launch year of the first catalogued satellite, so no element set can predate it.
pub const EPOCH_CENTURY_PIVOT: u32 = 57;

/// Exclusive upper bound of a fractional day-of-year in any year
pub const MAX_JULIAN_DAY: f64 = 367.0;

/// Number of fractional digits written in the epoch field
pub const EPOCH_FRACTION_DIGITS: usize = 8;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Milliseconds since 1970-01-01T00:00:00 UTC
pub type MillisecondEpoch = i64;

/// Fractional day-of-year, `1.0` being the start of January 1st
pub type JulianDay = f64;
