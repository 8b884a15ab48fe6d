#![no_main]

use libfuzzer_sys::fuzz_target;
use logwarden_core::config::WardenConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(toml_str) = std::str::from_utf8(data) else {
        return;
    };

    // 임의의 TOML 입력에 대해 파싱과 검증이 패닉하지 않아야 한다
    if let Ok(config) = WardenConfig::parse(toml_str) {
        let _ = config.validate();
    }
});
