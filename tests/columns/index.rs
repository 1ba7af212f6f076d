use devcol::{Error, NumericKind, RangeValue, normalize_index, normalize_slice, numeric_range};

#[test]
fn test_normalize_index() {
    assert_eq!(normalize_index(-1, 10, true), Ok(9));
    assert_eq!(
        normalize_index(10, 10, true),
        Err(Error::OutOfRange { index: 10, size: 10 })
    );
    assert_eq!(normalize_index(15, 10, false), Ok(10));
    assert_eq!(normalize_index(-12, 10, false), Ok(-2));
}

#[test]
fn test_normalize_slice() {
    assert_eq!(normalize_slice(None, None, 10), (0, 10));
    assert_eq!(normalize_slice(Some(-3), None, 10), (7, 10));
    assert_eq!(normalize_slice(Some(4), Some(2), 10), (4, 2));
}

#[test]
fn test_numeric_ranges() {
    let range = numeric_range(NumericKind::Int16).unwrap();
    assert_eq!(range.min, RangeValue::Signed(-32_768));
    assert_eq!(range.max, RangeValue::Signed(32_767));

    let range = numeric_range(NumericKind::UInt32).unwrap();
    assert_eq!(range.max, RangeValue::Unsigned(u32::MAX.into()));

    assert!(matches!(
        numeric_range(NumericKind::Utf8),
        Err(Error::UnsupportedType(_))
    ));
}
