// config.rs — Compile-time configuration constants.
//
// Limits and defaults that the argument parser and the finalizer share.
// Tunables such as the buffer size or the MPEG clock are only *defaults*
// here; the live values are fields of `crate::options::Options`.

use std::time::Duration;

// Maximum number of CEA-708 services carried in a DTVCC stream.
// Service identifiers are 1-based and must fall in [1, MAX_SERVICES].
pub const MAX_SERVICES: usize = 63;

// Trailing character on a positional filename that asks for a numbered
// file sequence (`DVD001.VOB+`).
pub const CONTINUATION_MARKER: char = '+';

// Default input buffer size, in bytes (16 MiB).
pub const DEFAULT_BUFFER_SIZE: usize = 16 * 1024 * 1024;

// Smallest accepted input buffer size. Smaller values are clamped up.
pub const MIN_BUFFER_SIZE: usize = 8;

// MPEG system clock frequency, and the variant some DVD recorders use.
pub const MPEG_CLOCK_FREQ: u32 = 90_000;
pub const MPEG_CLOCK_FREQ_90090: u32 = 90_090;

// Maximum characters in one word of a capitalization/profanity list
// (the width of a 608 screen row).
pub const WORD_LIST_MAX_WORD_LEN: usize = 32;

// Valid teletext page range when a page is forced with --tpage.
pub const TELETEXT_PAGE_MIN: u16 = 100;
pub const TELETEXT_PAGE_MAX: u16 = 899;

// Levenshtein typo-correction defaults.
pub const LEVDIST_MIN_CNT_DEFAULT: i64 = 2;
pub const LEVDIST_MAX_PCT_DEFAULT: i64 = 10;

// Interval, in seconds, used by --xmltvliveinterval without a value.
pub const XMLTV_LIVE_INTERVAL_DEFAULT: u32 = 10;

// Endpoint of the caption sharing service when --sharing-url is not given.
#[cfg(feature = "sharing")]
pub const DEFAULT_SHARING_URL: &str = "tcp://*:3269";

// Credit window defaults ("0", "5:00", "2", "5", "2", "5").
pub const START_CREDITS_NOT_BEFORE: Duration = Duration::from_secs(0);
pub const START_CREDITS_NOT_AFTER: Duration = Duration::from_secs(5 * 60);
pub const START_CREDITS_FOR_AT_LEAST: Duration = Duration::from_secs(2);
pub const START_CREDITS_FOR_AT_MOST: Duration = Duration::from_secs(5);
pub const END_CREDITS_FOR_AT_LEAST: Duration = Duration::from_secs(2);
pub const END_CREDITS_FOR_AT_MOST: Duration = Duration::from_secs(5);

// Fonts used to render SPUPNG output when --font / --italics are absent.
#[cfg(target_os = "windows")]
pub const DEFAULT_FONT_PATH: &str = "C:\\Windows\\Fonts\\calibri.ttf";
#[cfg(target_os = "windows")]
pub const DEFAULT_FONT_PATH_ITALICS: &str = "C:\\Windows\\Fonts\\calibrii.ttf";
#[cfg(target_os = "macos")]
pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";
#[cfg(target_os = "macos")]
pub const DEFAULT_FONT_PATH_ITALICS: &str = "/System/Library/Fonts/Helvetica-Oblique.ttf";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const DEFAULT_FONT_PATH_ITALICS: &str = "/usr/share/fonts/truetype/noto/NotoSans-Italic.ttf";

// Byte-order marks are omitted by default everywhere except Windows.
pub const NO_BOM_DEFAULT: bool = !cfg!(target_os = "windows");
