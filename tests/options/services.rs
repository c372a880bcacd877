// Integration tests for options/services.rs — the `--service` grammar.

use ccx_params::config::MAX_SERVICES;
use ccx_params::error::GrammarError;
use ccx_params::options::ServiceSelection;
use ccx_params::ParamsError;

fn parse(text: &str) -> Result<ServiceSelection, ParamsError> {
    let mut sel = ServiceSelection::default();
    sel.parse(text)?;
    Ok(sel)
}

fn grammar(text: &str) -> GrammarError {
    match parse(text) {
        Err(ParamsError::MalformedGrammar { source, .. }) => source,
        other => panic!("expected a grammar error for {text:?}, got {other:?}"),
    }
}

#[test]
fn list_with_charsets() {
    let sel = parse("1[UTF-8],2[EUC-KR],5").unwrap();
    assert_eq!(sel.enabled_ids().collect::<Vec<_>>(), vec![1, 2, 5]);
    assert_eq!(sel.charset(1), Some("UTF-8"));
    assert_eq!(sel.charset(2), Some("EUC-KR"));
    assert_eq!(sel.charset(5), None);
}

#[test]
fn repeated_id_counts_once_and_keeps_first_charset() {
    let sel = parse("3[A],3[B]").unwrap();
    assert_eq!(sel.active_count(), 1);
    assert_eq!(sel.charset(3), Some("A"));
}

#[test]
fn all_forms() {
    let sel = parse("all").unwrap();
    assert_eq!(sel.active_count(), MAX_SERVICES);
    assert_eq!(sel.all_services_charset(), None);

    let sel = parse("all[UTF-8]").unwrap();
    assert_eq!(sel.all_services_charset(), Some("UTF-8"));
    assert_eq!(sel.charset(MAX_SERVICES), Some("UTF-8"));
}

#[test]
fn malformed_all() {
    assert_eq!(grammar("all[UTF-8"), GrammarError::UnclosedCharset);
    assert!(matches!(grammar("allx"), GrammarError::MalformedAll(_)));
}

#[test]
fn unclosed_bracket_in_list() {
    assert_eq!(grammar("1[UTF-8"), GrammarError::UnclosedCharset);
    assert_eq!(grammar("1[UTF-8,2"), GrammarError::UnclosedCharset);
}

#[test]
fn no_digits_means_no_services() {
    assert_eq!(grammar(""), GrammarError::NoServices);
    assert_eq!(grammar(",,"), GrammarError::NoServices);
}

#[test]
fn out_of_range_ids() {
    assert!(matches!(parse("0"), Err(ParamsError::OutOfRange { .. })));
    assert!(matches!(parse("64"), Err(ParamsError::OutOfRange { .. })));
    assert!(matches!(parse("99999999999999999999999"), Err(ParamsError::OutOfRange { .. })));
    assert!(parse("63").is_ok());
}
