// Integration tests for options/language.rs — `--mkvlang` code lists.

use ccx_params::error::GrammarError;
use ccx_params::options::language::validate_language_codes;

#[test]
fn mixed_list_is_accepted() {
    assert_eq!(validate_language_codes("jpn,por-br").unwrap(), "jpn,por-br");
}

#[test]
fn error_marks_non_final_segment() {
    assert_eq!(
        validate_language_codes("engl,fre"),
        Err(GrammarError::LanguageCodeLength { code: "engl".into(), last: false })
    );
}

#[test]
fn six_chars_need_hyphen_in_the_middle() {
    assert_eq!(
        validate_language_codes("eng,frexca"),
        Err(GrammarError::LanguageCodeHyphen { code: "frexca".into(), last: true })
    );
}

#[test]
fn empty_segments_are_rejected() {
    assert!(validate_language_codes("").is_err());
    assert!(validate_language_codes("eng,").is_err());
}

#[test]
fn codes_must_be_letters() {
    assert_eq!(
        validate_language_codes("eng,e1g"),
        Err(GrammarError::LanguageCodeLetters { code: "e1g".into(), last: true })
    );
    assert!(validate_language_codes("f_e").is_err());
}
