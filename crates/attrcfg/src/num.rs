//! Integer coercion with `strtol`-style base detection.
//!
//! Config values are free-form text. The numeric accessors accept an
//! optional sign, a `0x`/`0X` hex or leading-`0` octal prefix, and stop at
//! the first byte that is not a digit of the detected base. Trailing
//! garbage after the digits is ignored; only a value with no digits at all
//! fails to coerce. Out-of-range magnitudes clamp to the type bounds.

/// Parse a signed integer, or `None` when no digits are consumed.
pub(crate) fn parse_signed(s: &[u8]) -> Option<i64> {
    let (negative, s) = split_sign(s);
    let (base, s) = split_base(s);
    let magnitude = accumulate(s, base)?;

    Some(if negative {
        i64::try_from(magnitude).map_or(i64::MIN, |v| -v)
    } else {
        i64::try_from(magnitude).unwrap_or(i64::MAX)
    })
}

/// Parse an unsigned integer, or `None` when no digits are consumed.
///
/// A leading `-` negates then wraps into the unsigned range, as
/// `strtoull` does.
pub(crate) fn parse_unsigned(s: &[u8]) -> Option<u64> {
    let (negative, s) = split_sign(s);
    let (base, s) = split_base(s);
    let magnitude = accumulate(s, base)?;

    Some(if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}

fn split_sign(s: &[u8]) -> (bool, &[u8]) {
    match s.first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

fn split_base(s: &[u8]) -> (u64, &[u8]) {
    if s.len() > 2 && s[0] == b'0' && (s[1] == b'x' || s[1] == b'X') && s[2].is_ascii_hexdigit() {
        (16, &s[2..])
    } else if s.first() == Some(&b'0') {
        // The zero is itself a valid octal digit, so keep it: "0x" with no
        // hex digit after still parses as 0.
        (8, s)
    } else {
        (10, s)
    }
}

fn accumulate(s: &[u8], base: u64) -> Option<u64> {
    let mut value: u64 = 0;
    let mut any = false;

    for &b in s {
        let digit = match b {
            b'0'..=b'9' => (b - b'0') as u64,
            b'a'..=b'f' => (b - b'a' + 10) as u64,
            b'A'..=b'F' => (b - b'A' + 10) as u64,
            _ => break,
        };
        if digit >= base {
            break;
        }
        value = value.saturating_mul(base).saturating_add(digit);
        any = true;
    }

    any.then_some(value)
}
