//! Language-code lists for `--mkvlang`.
//!
//! A list is one or more comma-separated codes, each either a three-letter
//! code (`eng`) or a three-letter code with a two-letter region (`fre-ca`).

use crate::error::GrammarError;

/// Lowercase `codes` and check every comma-separated segment.
///
/// Returns the normalised list. The error reports the first bad segment
/// and whether it was the last one in the list.
pub fn validate_language_codes(codes: &str) -> Result<String, GrammarError> {
    let normalised = codes.to_lowercase();

    let mut segments = normalised.split(',').peekable();
    while let Some(segment) = segments.next() {
        let last = segments.peek().is_none();
        check_segment(segment, last)?;
    }

    Ok(normalised)
}

fn check_segment(segment: &str, last: bool) -> Result<(), GrammarError> {
    let bytes = segment.as_bytes();
    let (language, region) = match bytes.len() {
        3 => (bytes, &[][..]),
        6 if bytes[3] == b'-' => (&bytes[..3], &bytes[4..]),
        6 => return Err(GrammarError::LanguageCodeHyphen { code: segment.to_owned(), last }),
        _ => return Err(GrammarError::LanguageCodeLength { code: segment.to_owned(), last }),
    };
    if !language.iter().chain(region).all(u8::is_ascii_lowercase) {
        return Err(GrammarError::LanguageCodeLetters { code: segment.to_owned(), last });
    }
    Ok(())
}
