//! Base-62 identifier codec.
//!
//! Maps a wide unique integer (in practice a UUIDv7 read as `u128`) onto a
//! fixed-length alphanumeric key. The digit order is least-significant first,
//! not the conventional most-significant-first rendering; keys already stored
//! or shared were produced this way, so the ordering must not change.

use uuid::Uuid;

const BASE: u128 = 62;

/// Encodes `value` as base-62 and truncates to the first `length` symbols.
///
/// Remainders map onto the alphabet as `0..26 -> 'a'..'z'`,
/// `26..52 -> 'A'..'Z'`, `52..62 -> '0'..'9'`, appended in the order they are
/// produced. Encoding never fails.
///
/// The caller is responsible for supplying values wide enough to yield at
/// least `length` digits; a small input simply produces a short string
/// (`encode(0, _)` is empty). Seeds from [`time_ordered_seed`] carry ~128
/// bits and always suffice for any length accepted by
/// [`crate::config::Config::validate`].
pub fn encode(mut value: u128, length: usize) -> String {
    let mut encoded = String::with_capacity(length);

    while value > 0 {
        let offset = (value % BASE) as u8;
        value /= BASE;

        let symbol = if offset < 26 {
            b'a' + offset
        } else if offset < 52 {
            b'A' + (offset - 26)
        } else {
            b'0' + (offset - 52)
        };
        encoded.push(symbol as char);
    }

    encoded.truncate(length);
    encoded
}

/// Draws a fresh time-ordered 128-bit seed.
///
/// UUIDv7 embeds a millisecond timestamp in the high bits and random bits
/// below, so seeds are roughly monotonic and collision-improbable across
/// attempts and across concurrent callers.
pub fn time_ordered_seed() -> u128 {
    Uuid::now_v7().as_u128()
}
