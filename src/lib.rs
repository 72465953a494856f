//! # tle_core
//!
//! Validation and epoch handling for two-line element (TLE) records.
//!
//! - [`checksum`]: the mod-10 checksum digit closing each 69-character line.
//! - [`epoch`]: conversion between the `YYDDD.DDDDDDDD` epoch field and Unix milliseconds.
//!
//! Every operation is a pure function over its arguments; nothing is cached or shared.
pub mod checksum;
pub mod constants;
pub mod epoch;
pub mod tle_errors;

pub use checksum::{
    append_checksum, calculate_checksum, generate_checksum, get_checksum, is_checksum_valid,
    parse_checksum,
};
pub use epoch::{
    epoch_from_line, epoch_julian_day, epoch_year, format_for_tle, parse_epoch_field,
    resolve_two_digit_year, to_millisecond_epoch, TleEpoch,
};
pub use tle_errors::{TleError, TleErrorKind};
