#![no_main]

use libfuzzer_sys::fuzz_target;

use byte_size::ParseErrorKind;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    match byte_size::parse(input) {
        Ok(size) => {
            byte_size::format(size);
        }
        Err(error) => {
            assert_eq!(error.input(), input);
            assert_eq!(
                error.saturated().is_some(),
                matches!(error.kind(), ParseErrorKind::Range)
            );
        }
    }
});
