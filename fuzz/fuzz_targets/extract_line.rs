#![no_main]

use libfuzzer_sys::fuzz_target;
use logwarden_core::pipeline::Extractor;
use logwarden_detector::AccessLogExtractor;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    let extractor = AccessLogExtractor::new();

    // 크래시나 패닉 없이 Ok 또는 Err을 반환해야 한다
    let _ = extractor.extract(line);
});
