#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|size: u64| {
    let formatted = byte_size::format(size);
    let reparsed = byte_size::parse(&formatted).expect("formatted sizes must parse");
    if size < 1000 {
        assert_eq!(reparsed, size);
    } else {
        let error = reparsed.abs_diff(size) as u128;
        assert!(error * 200 <= reparsed.max(size) as u128);
    }
});
