// Integration tests for util/word_list.rs — word file parsing.

use std::io::{Cursor, Write};

use ccx_params::util::word_list::{
    add_builtin_words, read_words, sort_words, FsWordListLoader, WordListLoader,
    CAPITALIZED_BUILTIN, PROFANE_BUILTIN,
};
use ccx_params::ParamsError;

#[test]
fn comments_blank_lines_and_trailing_space() {
    let mut list = Vec::new();
    read_words(Cursor::new("# header\nNASA  \n\r\nParis\r\n\n"), "mem", &mut list).unwrap();
    assert_eq!(list, vec!["NASA", "Paris"]);
}

#[test]
fn long_words_are_skipped() {
    let long = "x".repeat(40);
    let text = format!("{long}\nok\n");
    let mut list = Vec::new();
    read_words(Cursor::new(text), "mem", &mut list).unwrap();
    assert_eq!(list, vec!["ok"]);
}

#[test]
fn builtins_sort_cleanly() {
    for builtin in [CAPITALIZED_BUILTIN, PROFANE_BUILTIN] {
        let mut list = Vec::new();
        add_builtin_words(builtin, &mut list).unwrap();
        sort_words(&mut list);
        assert_eq!(list.len(), builtin.len());
    }
}

#[test]
fn loader_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Alpha\nBeta\n").unwrap();
    let mut list = vec!["Zeta".to_string()];
    FsWordListLoader.load(file.path().to_str().unwrap(), &mut list).unwrap();
    assert_eq!(list, vec!["Zeta", "Alpha", "Beta"]);
}

#[test]
fn loader_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let err = FsWordListLoader.load(path.to_str().unwrap(), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, ParamsError::FileProcessing { .. }));
}
