#![cfg(feature = "serde")]

use byte_size::ByteSize;

#[test]
fn test_serialize() {
    let size = ByteSize::new(1_572_864);
    assert_eq!(serde_json::to_string(&size).unwrap(), "1572864");
}

#[test]
fn test_deserialize() {
    let cases = [
        ("1572864", 1_572_864),
        ("\"1.5 MiB\"", 1_572_864),
        ("\"1.5 MB\"", 1_500_000),
        ("\"18446744073709551615\"", u64::MAX),
    ];
    for (json, expected) in cases {
        let size: ByteSize = serde_json::from_str(json).unwrap();
        assert_eq!(size, expected, "{json}");
    }
}

#[test]
fn test_deserialize_invalid() {
    for json in ["\"20 EB\"", "\"1.2.3\"", "\"5 xB\"", "-1", "true"] {
        assert!(serde_json::from_str::<ByteSize>(json).is_err(), "{json}");
    }
    let error = serde_json::from_str::<ByteSize>("\"20 EB\"").unwrap_err();
    assert!(error.to_string().contains("byte size out of range"));
}
