//! Capitalization and profanity word lists.
//!
//! Each list is the built-in words plus, optionally, the words of a user
//! file. Word files hold one word per line; lines starting with `#` are
//! comments and trailing whitespace is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::config::WORD_LIST_MAX_WORD_LEN;
use crate::displaylevel;
use crate::error::ParamsError;

/// Words always capitalized by `--sentencecap`.
pub const CAPITALIZED_BUILTIN: &[&str] = &[
    "I", "I'd", "I've", "I'll", "I'm", "Mr.", "Mrs.", "Ms.", "Dr.", "Monday", "Tuesday",
    "Wednesday", "Thursday", "Friday", "Saturday", "Sunday", "January", "February", "March",
    "April", "May", "June", "July", "August", "September", "October", "November", "December",
    "America", "American", "Americans", "English", "French", "Spanish", "German", "Canada",
    "Canadian", "Mexico", "Mexican", "Europe", "European", "Africa", "Asia", "Washington",
    "New York", "Los Angeles", "Christmas", "Easter", "God", "TV", "CNN", "NBC", "CBS", "ABC",
    "FBI", "CIA", "NASA", "U.S.", "U.K.", "OK",
];

/// Words censored by `--kf`.
pub const PROFANE_BUILTIN: &[&str] = &[
    "arse", "ass", "asshole", "bastard", "bitch", "bollocks", "bullshit", "cock", "crap", "cunt",
    "damn", "dick", "douche", "fag", "faggot", "fuck", "fucked", "fucker", "fucking", "goddamn",
    "motherfucker", "nigga", "nigger", "piss", "prick", "pussy", "shit", "slut", "twat", "wank",
    "whore",
];

/// Source of extra words for a word list.
///
/// The finalizer only depends on this trait, so tests can feed lists
/// without touching the filesystem.
pub trait WordListLoader {
    /// Append the words found at `path` to `list`.
    fn load(&self, path: &str, list: &mut Vec<String>) -> Result<(), ParamsError>;
}

/// Reads word files from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsWordListLoader;

impl WordListLoader for FsWordListLoader {
    fn load(&self, path: &str, list: &mut Vec<String>) -> Result<(), ParamsError> {
        let file = File::open(path).map_err(|e| ParamsError::FileProcessing {
            path: path.to_owned(),
            message: format!("unable to open word list file: {e}"),
        })?;
        read_words(BufReader::new(file), path, list)
    }
}

/// Parse a word file from `reader` into `list`.
///
/// Over-long words are skipped with a notice. `origin` only labels errors.
pub fn read_words<R: BufRead>(
    reader: R,
    origin: &str,
    list: &mut Vec<String>,
) -> Result<(), ParamsError> {
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ParamsError::FileProcessing {
            path: origin.to_owned(),
            message: format!("line {}: {e}", idx + 1),
        })?;
        if line.starts_with('#') {
            continue;
        }
        let word = line.trim_end();
        if word.chars().count() > WORD_LIST_MAX_WORD_LEN {
            displaylevel!(
                2,
                "Word in line {} too long, max = {} characters.\n",
                idx + 1,
                WORD_LIST_MAX_WORD_LEN
            );
            continue;
        }
        if !word.is_empty() {
            push_word(list, word)?;
        }
    }
    Ok(())
}

/// Append the built-in `words` to `list`.
pub fn add_builtin_words(words: &[&str], list: &mut Vec<String>) -> Result<(), ParamsError> {
    for word in words {
        push_word(list, word)?;
    }
    Ok(())
}

/// Sort for binary search and drop duplicates.
pub fn sort_words(list: &mut Vec<String>) {
    list.sort_unstable();
    list.dedup();
}

fn push_word(list: &mut Vec<String>, word: &str) -> Result<(), ParamsError> {
    list.try_reserve(1).map_err(|e| {
        ParamsError::ResourceExhausted(format!("word list: {e}"))
    })?;
    list.push(word.to_owned());
    Ok(())
}
