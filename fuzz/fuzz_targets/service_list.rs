#![no_main]
use ccx_params::config::MAX_SERVICES;
use ccx_params::options::ServiceSelection;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut services = ServiceSelection::default();
    if services.parse(text).is_ok() {
        // A successful parse always leaves at least one service on, and the
        // count always agrees with the per-service flags.
        assert!(services.active_count() >= 1);
        assert!(services.active_count() <= MAX_SERVICES);
        assert_eq!(services.enabled_ids().count(), services.active_count());
    }
});
