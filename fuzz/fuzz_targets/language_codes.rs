#![no_main]
use ccx_params::options::language::validate_language_codes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(codes) = validate_language_codes(text) {
        for code in codes.split(',') {
            assert!(code.len() == 3 || (code.len() == 6 && code.as_bytes()[3] == b'-'));
            assert!(code.bytes().all(|b| b == b'-' || b.is_ascii_lowercase()));
        }
    }
});
