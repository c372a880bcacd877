// cli/constants.rs — Program identity, size multipliers and the display level.
//
// Console output goes through the `display*` macros below; the parser never
// prints directly, so `--quiet` and `--debug` only need to move one atomic.

use std::sync::atomic::{AtomicU32, Ordering};

// ── Identity ─────────────────────────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "CCExtractor";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commit the binary was built from, injected through `CCX_GIT_COMMIT`.
pub const GIT_COMMIT: &str = match option_env!("CCX_GIT_COMMIT") {
    Some(commit) => commit,
    None => "unknown",
};

/// Decoder implementation reported by `--version`.
pub const DECODER_IMPLEMENTATION: &str = "rust";

// ── Size multipliers ─────────────────────────────────────────────────────────
/// 1 KiB
pub const KB: u64 = 1 << 10;
/// 1 MiB
pub const MB: u64 = 1 << 20;

// ── Display level ────────────────────────────────────────────────────────────
//
// 0 = silent; 1 = errors only; 2 = normal notices; 3 = configuration summary;
// 4 = verbose.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
