#![no_main]

use dragsplit_layout::SplitConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Loading must never panic; anything accepted must validate.
    if let Ok(config) = SplitConfig::from_json_str(text) {
        assert!(config.validate().is_ok());
        assert!(!config.sample_time.is_zero());
        assert!(config.bar_thickness.is_finite() && config.bar_thickness > 0.0);
    }
});
