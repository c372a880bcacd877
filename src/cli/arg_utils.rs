// arg_utils.rs — Numeric mini-parsers for flag values.
//
// All parsers are pure and report failure with `None`; the dispatcher turns
// that into a `ParamsError` naming the flag.

use std::time::Duration;

use crate::cli::constants::{KB, MB};

/// If `arg` starts with `prefix`, returns the remainder of `arg` after `prefix`.
pub fn long_command_w_arg<'a>(arg: &'a str, prefix: &str) -> Option<&'a str> {
    arg.strip_prefix(prefix)
}

/// Returns `true` for a non-empty string made only of ASCII digits.
///
/// Optional-value flags use this to decide whether the next token is theirs.
pub fn is_a_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a signed millisecond delay such as `-300`, `+40` or `1200`.
///
/// A sign is accepted only as the first character. Any other non-digit,
/// a missing digit, or overflow yields `None`.
pub fn parse_delay(s: &str) -> Option<i64> {
    let (negative, digits) = match *s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() {
        return None;
    }

    let mut magnitude: i64 = 0;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            return None;
        }
        magnitude = magnitude.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
    }
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses `0x1F` / `0X1f` as hexadecimal and anything else as decimal.
///
/// The whole string must be a valid number in the selected base.
pub fn parse_hex_or_decimal(s: &str) -> Option<i64> {
    if s.len() > 2 {
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return i64::from_str_radix(hex, 16).ok();
        }
    }
    s.parse::<i64>().ok()
}

/// Parses a byte count with an optional `K` or `M` suffix (case-insensitive).
///
/// The leading decimal digits give the value; a final `K` multiplies it by
/// 1024 and a final `M` by 1024². Returns `None` when there are no leading
/// digits or the result overflows.
pub fn parse_size(s: &str) -> Option<u64> {
    let digits_len = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: u64 = s[..digits_len].parse().ok()?;
    let multiplier = match s.bytes().last().map(|b| b.to_ascii_uppercase()) {
        Some(b'K') => KB,
        Some(b'M') => MB,
        _ => 1,
    };
    value.checked_mul(multiplier)
}

/// Parses `SS`, `MM:SS` or `HH:MM:SS` into a duration.
///
/// Every component must be a non-empty run of digits; minutes and seconds
/// must be below 60 in every form.
pub fn parse_time(s: &str) -> Option<Duration> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() > 3 || parts.iter().any(|p| !is_a_number(p)) {
        return None;
    }
    let mut values = parts.iter().map(|p| p.parse::<u64>().ok());
    let mut fields = [0u64; 3];
    let offset = 3 - parts.len();
    for slot in fields.iter_mut().skip(offset) {
        *slot = values.next()??;
    }
    let [hh, mm, ss] = fields;
    if mm > 59 || ss > 59 {
        return None;
    }
    let secs = hh.checked_mul(3600)?.checked_add(mm * 60 + ss)?;
    Some(Duration::from_secs(secs))
}
