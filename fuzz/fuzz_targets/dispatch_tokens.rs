#![no_main]
use ccx_params::cli::args::parse_args_from;
use libfuzzer_sys::fuzz_target;

// Tokens are NUL-separated. Positional names are dropped so the scan never
// probes the filesystem.
fuzz_target!(|data: &[u8]| {
    let argv: Vec<String> = data
        .split(|&b| b == 0)
        .map(|t| String::from_utf8_lossy(t).into_owned())
        .filter(|t| t.starts_with('-'))
        .collect();
    let _ = parse_args_from(&argv);
});
