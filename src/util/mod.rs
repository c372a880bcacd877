//! Filesystem-facing helpers used while parsing.
//!
//! - [`file_sequence`] — input queueing and `NAME001.EXT+` expansion
//! - [`word_list`]     — capitalization/profanity word lists

pub mod file_sequence;
pub mod word_list;

pub use file_sequence::{expand_file_sequence, queue_file};
pub use word_list::{FsWordListLoader, WordListLoader};
