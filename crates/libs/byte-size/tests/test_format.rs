use byte_size::{format, parse, ByteSize, Formatted};

#[test]
fn test_format() {
    let cases = [
        (0, "0 B"),
        (5, "5 B"),
        (20, "20 B"),
        (100, "100 B"),
        (500, "500 B"),
        (999, "999 B"),
        (1000, "1.00 kB"),
        (1005, "1.00 kB"),
        (1006, "1.01 kB"),
        (1015, "1.02 kB"),
        (2334, "2.33 kB"),
        (2335, "2.34 kB"),
        (2995, "3.00 kB"),
        (9994, "9.99 kB"),
        (9995, "10.0 kB"),
        (10000, "10.0 kB"),
        (10050, "10.0 kB"),
        (10061, "10.1 kB"),
        (99949, "99.9 kB"),
        (99950, "100 kB"),
        (999499, "999 kB"),
        (999500, "1.00 MB"),
        (1000000, "1.00 MB"),
        (952500000, "952 MB"),
        (952500001, "953 MB"),
        (1000000000, "1.00 GB"),
        (2300000000000, "2.30 TB"),
        (15500000000000000, "15.5 PB"),
        (i64::MAX as u64, "9.22 EB"),
        (u64::MAX, "18.4 EB"),
    ];
    for (size, expected) in cases {
        assert_eq!(format(size), expected, "format({size})");
        assert_eq!(Formatted(size).to_string(), expected, "Formatted({size})");
        assert_eq!(ByteSize::new(size).to_string(), expected, "ByteSize({size})");
    }
}

#[test]
fn test_never_empty() {
    for size in (0..20_000).chain([u64::MAX - 1, u64::MAX]) {
        let formatted = format(size);
        assert!(formatted.ends_with('B'), "{formatted:?}");
        assert!(formatted.contains(' '), "{formatted:?}");
        assert!(formatted.as_bytes()[0].is_ascii_digit(), "{formatted:?}");
    }
}

/// Sizes spread across all magnitudes.
fn sample_sizes() -> impl Iterator<Item = u64> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    (0..10_000).map(move |_| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state >> (state % 64)
    })
}

#[test]
fn test_roundtrip_within_tolerance() {
    let edges = [0, 1, 999, 1000, 1005, 9995, 99_950, 999_500, u64::MAX];
    for size in sample_sizes().chain(edges) {
        let formatted = format(size);
        let reparsed = parse(&formatted).unwrap();
        if size < 1000 {
            assert_eq!(reparsed, size);
            continue;
        }
        // Three significant digits are accurate to half a unit in the third digit.
        let error = reparsed.abs_diff(size) as u128;
        assert!(
            error * 200 <= reparsed.max(size) as u128,
            "format({size}) = {formatted:?} reparsed as {reparsed}"
        );
    }
}
