//! # Record line checksum
//!
//! Every line of a two-line element set ends with a **mod-10 checksum digit** computed over
//! the 68 characters that precede it.
//!
//! ## Algorithm
//! -----------------
//! Digits `1`–`9` count for their value, the minus sign counts for one, and every other
//! character (`0`, letters, `+`, `.`, spaces) counts for nothing. The checksum is the sum
//! modulo 10. Cosmetic formatting therefore never changes the checksum.
//!
//! ## Line contract
//! -----------------
//! * A **body** is the checksum-stripped payload: exactly [`CHECKSUM_INDEX`] (68) characters.
//! * A **line** is a body followed by its checksum digit: exactly [`LINE_LENGTH`] (69) characters.
//!
//! Lengths are counted in Unicode code points. Any other length is a
//! [`TleError::InvalidLength`]; nothing is ever truncated or padded.
//!
//! ## Example
//! ```
//! use tle_core::checksum::{append_checksum, is_checksum_valid};
//!
//! let body = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  292";
//! let line = append_checksum(body).unwrap();
//! assert!(line.ends_with('7'));
//! assert!(is_checksum_valid(&line).unwrap());
//! ```
use tracing::{debug, trace};

use crate::constants::{CHECKSUM_INDEX, LINE_LENGTH};
use crate::tle_errors::{ensure_length, TleError};

/// Split a 69 code-point line into its body and its checksum character.
fn split_checksum(line: &str) -> Result<(&str, char), TleError> {
    ensure_length(line, LINE_LENGTH)?;
    let (offset, c) = line
        .char_indices()
        .nth(CHECKSUM_INDEX)
        .ok_or(TleError::InvalidLength {
            expected: LINE_LENGTH,
            actual: CHECKSUM_INDEX,
        })?;
    Ok((&line[..offset], c))
}

fn checksum_digit(c: char) -> Result<u8, TleError> {
    match c.to_digit(10) {
        Some(d) => Ok(d as u8),
        None => {
            debug!(character = ?c, "checksum character is not a decimal digit");
            Err(TleError::InvalidChecksumDigit(c))
        }
    }
}

/// Compute the mod-10 checksum over any character sequence.
///
/// This function is total: it does not check the length of `body`.
///
/// Arguments
/// -----------------
/// * `body` – usually the first 68 characters of a record line.
///
/// Return
/// ----------
/// * The checksum digit, in `0..=9`.
pub fn calculate_checksum(body: &str) -> u8 {
    let sum: u32 = body
        .chars()
        .map(|c| match c {
            '-' => 1,
            c => c.to_digit(10).unwrap_or(0),
        })
        .sum();
    (sum % 10) as u8
}

/// Compute the checksum digit to append to a record body.
///
/// Surrounding whitespace is trimmed first; the trimmed body must be exactly 68 characters.
pub fn generate_checksum(body: &str) -> Result<u8, TleError> {
    let body = body.trim();
    ensure_length(body, CHECKSUM_INDEX)?;

    let checksum = calculate_checksum(body);
    trace!(checksum, "generated checksum");
    Ok(checksum)
}

/// Build a full record line by appending the checksum digit to `body`.
///
/// Same contract as [`generate_checksum`]; the returned line is the trimmed body plus one digit.
pub fn append_checksum(body: &str) -> Result<String, TleError> {
    let checksum = generate_checksum(body)?;
    let mut line = String::with_capacity(LINE_LENGTH);
    line.push_str(body.trim());
    line.push(char::from(b'0' + checksum));
    Ok(line)
}

/// Return the checksum character of a full line, without interpreting it.
pub fn get_checksum(line: &str) -> Result<char, TleError> {
    Ok(split_checksum(line)?.1)
}

/// Return the checksum of a full line as a number.
///
/// Fails with [`TleError::InvalidChecksumDigit`] when the 69th character is not `0`–`9`.
pub fn parse_checksum(line: &str) -> Result<u8, TleError> {
    let c = get_checksum(line)?;
    checksum_digit(c)
}

/// Verify the checksum of a record line.
///
/// The line is trimmed, must then hold exactly 69 characters, and its last character must be a
/// decimal digit. The digit is compared with the checksum of the first 68 characters.
///
/// Return
/// ----------
/// * `Ok(true)` if the stored checksum matches, `Ok(false)` if it is a digit but the wrong one.
/// * `Err(_)` only for malformed input (length or non-digit checksum).
pub fn is_checksum_valid(line: &str) -> Result<bool, TleError> {
    let (body, c) = split_checksum(line.trim())?;
    let stored = checksum_digit(c)?;
    let computed = calculate_checksum(body);

    if stored != computed {
        debug!(stored, computed, "checksum mismatch");
    }
    Ok(stored == computed)
}
