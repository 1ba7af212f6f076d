use devcol::{Error, NullableColumn, scalar_broadcast_to};

use crate::assert_bits_eq;
use crate::common::device;

#[test]
fn test_column_indexing() {
    let column =
        NullableColumn::from_options(&device(), &[Some(1.0f64), None, Some(3.0)]).unwrap();

    assert_eq!(column.get(0).unwrap(), Some(1.0));
    assert_eq!(column.get(-2).unwrap(), None);
    assert_eq!(column.get(-1).unwrap(), Some(3.0));
    assert!(column.get(3).unwrap_err().is_out_of_range());
    assert_bits_eq!(column.validity().unwrap(), [1, 0, 1]);
}

#[test]
fn test_column_slicing() {
    let device = device();
    let values: Vec<Option<i64>> = (0..12)
        .map(|i| if i % 4 == 0 { None } else { Some(i) })
        .collect();
    let column = NullableColumn::from_options(&device, &values).unwrap();
    assert_eq!(column.null_count(), 3);

    let sliced = column.slice(&device, Some(-5), Some(-1)).unwrap();
    assert_eq!(sliced.to_options(), vec![Some(7), None, Some(9), Some(10)]);
    assert!(column.slice(&device, Some(9), Some(3)).unwrap().is_empty());
}

#[test]
fn test_broadcast_feeds_dense_column() {
    let device = device();
    let buffer = scalar_broadcast_to(&device, 42u32, &[2, 2]).unwrap();
    let column = NullableColumn::with_validity(buffer, None).unwrap();
    assert_eq!(column.to_options(), vec![Some(42); 4]);
    assert_eq!(
        column.get(4),
        Err(Error::OutOfRange { index: 4, size: 4 })
    );
}
