//! Integration tests for common utilities module.

use seqlogic::common::bits::*;
use seqlogic::common::*;

/// Tests width masks, including the full 64-bit word.
#[test]
fn test_mask() {
    assert_eq!(mask(1), 0b1);
    assert_eq!(mask(4), 0xF);
    assert_eq!(mask(32), 0xFFFF_FFFF);
    assert_eq!(mask(64), u64::MAX);
}

/// Tests width validation bounds.
#[test]
fn test_check_width() {
    assert!(check_width(1, "test").is_ok());
    assert!(check_width(MAX_WIDTH, "test").is_ok());
    assert!(matches!(
        check_width(0, "test"),
        Err(SimError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        check_width(65, "test"),
        Err(SimError::InvalidConfiguration(_))
    ));
}

/// Tests packing of LSB-first bit sequences.
#[test]
fn test_pack() {
    assert_eq!(pack([true, false, false, false]), 0b0001);
    assert_eq!(pack([false, true, true]), 0b110);
    assert_eq!(pack(std::iter::empty::<bool>()), 0);
}

/// Tests bit extraction and binary formatting.
#[test]
fn test_bit_and_to_binary() {
    assert!(bit(0b100, 2));
    assert!(!bit(0b100, 1));
    assert_eq!(to_binary(0b0010, 4), "0010");
    assert_eq!(to_binary(0xFF, 4), "1111");
}

/// Tests error display formatting.
#[test]
fn test_error_display() {
    let err = SimError::IndexOutOfBounds { index: 40, len: 32 };
    let s = format!("{}", err);
    assert!(s.contains("IndexOutOfBounds"));
    assert!(s.contains("40"));
    assert!(s.contains("32"));

    let err = SimError::InvalidState("S=1 R=1".to_string());
    assert!(format!("{}", err).contains("InvalidState"));

    let err = SimError::InvalidConfiguration("zero modulus".to_string());
    assert!(format!("{}", err).contains("zero modulus"));
}
