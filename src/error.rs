//! Error taxonomy for parameter parsing and validation.
//!
//! Every parser and sub-parser returns [`ParamsError`]; the first error aborts
//! the scan. Only the binary entry point turns an error into a process exit
//! status, through [`ParamsError::exit_code`].

use thiserror::Error;

use crate::config::MAX_SERVICES;

/// Process exit statuses surfaced to the invoking shell.
///
/// The numeric values match the ones the extractor has always used, so
/// scripts that test `$?` keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitCode {
    Ok,
    NoInputFiles,
    TooManyInputFiles,
    IncompatibleParameters,
    MalformedParameter,
    WithHelp,
    NotClassified,
    NotEnoughMemory,
    ErrorInCapitalizationFile,
}

impl ExitCode {
    /// Numeric status passed to `std::process::exit`.
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Ok => 0,
            ExitCode::NoInputFiles => 2,
            ExitCode::TooManyInputFiles => 3,
            ExitCode::IncompatibleParameters => 4,
            ExitCode::MalformedParameter => 7,
            ExitCode::WithHelp => 11,
            ExitCode::NotClassified => 300,
            ExitCode::NotEnoughMemory => 500,
            ExitCode::ErrorInCapitalizationFile => 501,
        }
    }
}

/// Shape errors inside the embedded mini-grammars (`--service`, `--mkvlang`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("missing closing ] in CEA-708 services list")]
    UnclosedCharset,

    #[error("no services")]
    NoServices,

    #[error("expected `all` or `all[charset]`, got `{0}`")]
    MalformedAll(String),

    #[error("{} language code `{code}` should be xxx or xxx-xx", position(.last))]
    LanguageCodeLength { code: String, last: bool },

    #[error("{} language code `{code}` is not of the form xxx-xx", position(.last))]
    LanguageCodeHyphen { code: String, last: bool },

    #[error("{} language code `{code}` may only contain letters besides the hyphen", position(.last))]
    LanguageCodeLetters { code: String, last: bool },
}

fn position(last: &bool) -> &'static str {
    if *last {
        "last"
    } else {
        "a"
    }
}

/// A terminal parsing or validation failure.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("{flag} has no argument")]
    MissingArgument { flag: String },

    #[error("parameter {0} not understood")]
    UnrecognizedArgument(String),

    #[error("{flag}: {message}")]
    OutOfRange { flag: String, message: String },

    #[error("{flag}: {message}")]
    InvalidValue { flag: String, message: String },

    #[error("{flag}: malformed parameter: {source}")]
    MalformedGrammar {
        flag: String,
        #[source]
        source: GrammarError,
    },

    #[error("{0}")]
    Incompatible(String),

    #[error("no input files")]
    NoInputFiles,

    #[error("{0}")]
    TooManyInputFiles(String),

    #[error("not enough memory: {0}")]
    ResourceExhausted(String),

    #[error("error processing word list {path}: {message}")]
    FileProcessing { path: String, message: String },

    #[error("{0}")]
    Unclassified(String),
}

impl ParamsError {
    pub(crate) fn missing(flag: &str) -> Self {
        ParamsError::MissingArgument { flag: flag.to_owned() }
    }

    pub(crate) fn invalid(flag: &str, message: impl Into<String>) -> Self {
        ParamsError::InvalidValue { flag: flag.to_owned(), message: message.into() }
    }

    pub(crate) fn out_of_range(flag: &str, message: impl Into<String>) -> Self {
        ParamsError::OutOfRange { flag: flag.to_owned(), message: message.into() }
    }

    pub(crate) fn grammar(flag: &str, source: GrammarError) -> Self {
        ParamsError::MalformedGrammar { flag: flag.to_owned(), source }
    }

    pub(crate) fn bad_service(id: u64) -> Self {
        ParamsError::out_of_range(
            "--service",
            format!("invalid service number ({id}), valid range is 1-{MAX_SERVICES}"),
        )
    }

    /// Exit status for this error category.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ParamsError::MissingArgument { .. }
            | ParamsError::OutOfRange { .. }
            | ParamsError::InvalidValue { .. }
            | ParamsError::MalformedGrammar { .. } => ExitCode::MalformedParameter,
            ParamsError::UnrecognizedArgument(_) | ParamsError::Incompatible(_) => {
                ExitCode::IncompatibleParameters
            }
            ParamsError::NoInputFiles => ExitCode::NoInputFiles,
            ParamsError::TooManyInputFiles(_) => ExitCode::TooManyInputFiles,
            ParamsError::ResourceExhausted(_) => ExitCode::NotEnoughMemory,
            ParamsError::FileProcessing { .. } => ExitCode::ErrorInCapitalizationFile,
            ParamsError::Unclassified(_) => ExitCode::NotClassified,
        }
    }
}
