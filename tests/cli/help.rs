// Integration tests for cli/help.rs — usage text and version report.

use std::io::Write;

use ccx_params::cli::constants::{GIT_COMMIT, VERSION};
use ccx_params::cli::help::{file_sha256, version_report, write_usage};

#[test]
fn usage_lists_flag_groups() {
    let mut buf = Vec::new();
    write_usage(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("CCExtractor"));
    for group in ["Network support:", "Timing:", "Credits:", "Debug:"] {
        assert!(text.contains(group), "missing group {group}");
    }
}

#[test]
fn version_report_fields() {
    let mut exe = tempfile::NamedTempFile::new().unwrap();
    exe.write_all(b"").unwrap();
    let report = version_report(exe.path());
    assert!(report.contains(&format!("Version: {VERSION}")));
    assert!(report.contains(&format!("Git commit: {GIT_COMMIT}")));
    // SHA-256 of the empty input.
    assert!(report.contains("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"));
}

#[test]
fn sha256_streams_large_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let block = vec![b'a'; 40 * 1024];
    file.write_all(&block).unwrap();
    let digest = file_sha256(file.path()).unwrap();
    assert_eq!(digest.len(), 64);
    assert!(digest.bytes().all(|b| b.is_ascii_hexdigit()));
}
