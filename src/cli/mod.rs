//! Command-line interface for the parameter parser.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, size multipliers and the shared `DISPLAY_LEVEL` atomic. |
//! | [`arg_utils`] | Pure numeric mini-parsers: delays, hex-or-decimal integers, sizes, times. |
//! | [`args`]      | Flag tables and the single left-to-right token scan producing an [`args::Outcome`]. |
//! | [`finalize`]  | Cross-validation, defaults and the derived encoder/teletext views. |
//! | [`help`]      | Usage text and the detailed `--version` report. |
//!
//! Typical call sequence: [`args::parse_args_from`] → [`finalize::finalize`],
//! or [`args::parse_parameters`] for both.

pub mod constants;
pub mod arg_utils;
pub mod args;
pub mod finalize;
pub mod help;
