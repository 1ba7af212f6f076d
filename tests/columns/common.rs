use devcol::{HostDevice, StorageUnit, ValidityBitmap};

pub fn device() -> HostDevice {
    HostDevice::new()
}

pub fn bitmap<U: StorageUnit>(bits: &[u8]) -> ValidityBitmap<U> {
    let valid: Vec<bool> = bits.iter().map(|b| *b == 1).collect();
    ValidityBitmap::from_bools(&device(), &valid).unwrap()
}

#[macro_export]
macro_rules! assert_bits_eq {
    ($bitmap:expr, [$($bit:literal),* $(,)?]) => {{
        let actual: Vec<u8> = $bitmap.iter().map(u8::from).collect();
        let expected: Vec<u8> = vec![$($bit),*];
        assert_eq!(actual, expected, "validity bits differ");
    }};
}
