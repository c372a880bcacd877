// Integration tests for cli/arg_utils.rs — numeric mini-parsers as seen
// through the public API.

use std::time::Duration;

use ccx_params::cli::arg_utils::{
    is_a_number, long_command_w_arg, parse_delay, parse_hex_or_decimal, parse_size, parse_time,
};
use ccx_params::cli::constants::{KB, MB};

#[test]
fn delay_accepts_leading_sign_only() {
    assert_eq!(parse_delay("-300"), Some(-300));
    assert_eq!(parse_delay("+300"), Some(300));
    assert_eq!(parse_delay("0"), Some(0));
    assert_eq!(parse_delay("3-00"), None);
    assert_eq!(parse_delay("12ms"), None);
}

#[test]
fn hex_needs_a_digit_after_prefix() {
    assert_eq!(parse_hex_or_decimal("0x100"), Some(256));
    assert_eq!(parse_hex_or_decimal("0"), Some(0));
    assert_eq!(parse_hex_or_decimal("0x"), None);
}

#[test]
fn size_suffix_is_the_last_character() {
    assert_eq!(parse_size("2K"), Some(2 * KB));
    assert_eq!(parse_size("3m"), Some(3 * MB));
    // Trailing junk other than K/M leaves the number as bytes.
    assert_eq!(parse_size("100B"), Some(100));
}

#[test]
fn time_minutes_and_seconds_below_sixty() {
    assert_eq!(parse_time("59"), Some(Duration::from_secs(59)));
    assert_eq!(parse_time("100:00:00"), Some(Duration::from_secs(360_000)));
    assert_eq!(parse_time("60"), None);
    assert_eq!(parse_time("0:60"), None);
    assert_eq!(parse_time("1:60:00"), None);
}

#[test]
fn number_detection_for_optional_values() {
    assert!(is_a_number("0"));
    assert!(!is_a_number("-1"));
    assert!(!is_a_number("file.ts"));
}

#[test]
fn prefixed_long_command() {
    assert_eq!(long_command_w_arg("--in=m2ts", "--in="), Some("m2ts"));
    assert_eq!(long_command_w_arg("--in=", "--in="), Some(""));
    assert_eq!(long_command_w_arg("--out", "--out="), None);
}
