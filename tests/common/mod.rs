#![allow(dead_code)]

use approx::assert_relative_eq;
use proptest::prelude::*;
use tle_core::TleEpoch;

/// Genuine element sets from public catalog data, as (line 1, line 2).
pub const CATALOG_TLES: [(&str, &str); 3] = [
    (
        "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927",
        "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537",
    ),
    (
        "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753",
        "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667",
    ),
    (
        "1 88888U          80275.98708465  .00073094  13844-3  66816-4 0    87",
        "2 88888  72.8435 115.9689 0086731  52.6988 110.5714 16.05824518  1058",
    ),
];

pub fn assert_epoch_close(actual: &TleEpoch, expected: &TleEpoch, epsilon: f64) {
    assert_eq!(actual.year, expected.year);
    assert_relative_eq!(actual.julian_day, expected.julian_day, epsilon = epsilon);
}

/// Characters that can appear in the payload of a record line.
pub fn record_char() -> impl Strategy<Value = char> {
    prop::sample::select(
        "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ +-."
            .chars()
            .collect::<Vec<_>>(),
    )
}

/// A 68-character checksum-stripped body that survives trimming unchanged.
pub fn record_body() -> impl Strategy<Value = String> {
    (
        prop::char::range('1', '9'),
        prop::collection::vec(record_char(), 66),
        prop::char::range('0', '9'),
    )
        .prop_map(|(first, middle, last)| {
            let mut body = String::with_capacity(68);
            body.push(first);
            body.extend(middle);
            body.push(last);
            body
        })
}
