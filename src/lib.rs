// ccxr-params — command-line parameter parsing for a closed-caption extractor

pub mod config;
pub mod error;
pub mod options;
pub mod util;
pub mod cli;

pub use cli::args::{parse_args, parse_args_from, parse_parameters, Outcome};
pub use cli::finalize::finalize;
pub use error::{ExitCode, GrammarError, ParamsError};
pub use options::Options;
