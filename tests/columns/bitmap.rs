use devcol::{
    CheckedBits, DeviceConfig, Error, HostDevice, SharedValidity, UncheckedBits, ValidityBitmap,
    make_validity_storage,
};

use crate::assert_bits_eq;
use crate::common::{bitmap, device};

#[test]
fn test_storage_sizing_per_unit_width() {
    let device = device();
    for bits in 1..=8 {
        assert_eq!(make_validity_storage::<u8, _>(&device, bits).unwrap().len(), 1);
    }
    assert_eq!(make_validity_storage::<u8, _>(&device, 9).unwrap().len(), 2);
    for bits in 1..=64 {
        assert_eq!(make_validity_storage::<u64, _>(&device, bits).unwrap().len(), 1);
    }
    assert_eq!(make_validity_storage::<u64, _>(&device, 65).unwrap().len(), 2);
}

#[test]
fn test_widths_coexist() {
    let narrow = bitmap::<u8>(&[1, 0, 1, 1, 0, 0, 0, 0, 1, 1]);
    let wide = bitmap::<u32>(&[1, 0, 1, 1, 0, 0, 0, 0, 1, 1]);

    assert_eq!(narrow.unit_bits(), 8);
    assert_eq!(wide.unit_bits(), 32);
    assert_eq!(narrow.unit_count(), 2);
    assert_eq!(wide.unit_count(), 1);
    assert_eq!(narrow.iter().collect::<Vec<_>>(), wide.iter().collect::<Vec<_>>());
}

#[test]
fn test_set_then_get_in_raw_storage() {
    let mut storage = make_validity_storage::<u16, _>(&device(), 40).unwrap();
    storage.fill(0);
    storage.set_bit(21);
    assert!(storage.get_bit(21));
    assert_eq!(storage.as_slice(), &[0, 0b0000_0000_0010_0000, 0]);
}

#[test]
fn test_checked_and_unchecked_tiers() {
    let mut validity = bitmap::<u8>(&[0, 0, 0]);
    validity.set_valid(1).unwrap();
    assert_bits_eq!(validity, [0, 1, 0]);

    assert_eq!(validity.set_valid(3), Err(Error::out_of_range(3, 3)));
    validity.set_bit(3);
    assert_bits_eq!(validity, [0, 1, 0]);
    assert!(validity.get_bit(3));
}

#[test]
fn test_slice_of_bitmap() {
    let validity = bitmap::<u8>(&[1, 1, 0, 1, 0, 1, 1, 0, 0, 1]);
    let device = device();
    assert_bits_eq!(validity.slice(&device, Some(-3), None).unwrap(), [1, 0, 0]);
    assert_bits_eq!(validity.slice(&device, None, Some(2)).unwrap(), [1, 1]);
    assert_bits_eq!(validity.slice(&device, Some(5), Some(1)).unwrap(), []);
}

#[test]
fn test_shared_validity_round_trip() {
    let device = device();
    let shared = SharedValidity::from_bitmap(&bitmap::<u8>(&[0, 0, 0, 0, 0]));
    std::thread::scope(|scope| {
        scope.spawn(|| shared.set_bit(0));
        scope.spawn(|| shared.set_bit(4));
    });
    assert_bits_eq!(shared.into_bitmap(&device).unwrap(), [1, 0, 0, 0, 1]);
}

#[test]
fn test_configured_device_limits_bitmaps() {
    let config = DeviceConfig::from_toml_str("memory_limit_bytes = 4").unwrap();
    let device = HostDevice::from_config(&config).unwrap();

    assert!(ValidityBitmap::<u8>::new_valid(&device, 32).is_ok());
    assert_eq!(
        ValidityBitmap::<u8>::new_valid(&device, 33).unwrap_err(),
        Error::ResourceExhausted {
            requested: 5,
            limit: 4
        }
    );
}
