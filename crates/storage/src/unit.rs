use std::fmt::Debug;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Shl, Shr};
use std::sync::atomic::{AtomicU8, AtomicU16, AtomicU32, AtomicU64, Ordering};

/// Storage unit used for validity masks unless another width is requested.
pub type MaskUnit = u8;

/// Fixed-width unsigned integer that validity bits are packed into.
///
/// The width is part of the type, so a bitmap sized for `u8` units can only be
/// read back through `u8` accessors.
pub trait StorageUnit:
    Copy
    + Default
    + Eq
    + Debug
    + Send
    + Sync
    + 'static
    + BitOr<Output = Self>
    + BitOrAssign
    + BitAnd<Output = Self>
    + BitAndAssign
    + Not<Output = Self>
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
{
    const BITS: usize;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    type Atomic: AtomicUnit<Self>;

    fn count_ones(self) -> usize;

    /// Single-bit mask for the bit at `pos` within its unit.
    #[inline(always)]
    fn bit_mask(pos: usize) -> Self {
        Self::ONE << (pos % Self::BITS)
    }
}

/// Atomic cell holding one storage unit.
pub trait AtomicUnit<U>: Send + Sync {
    fn new(value: U) -> Self;
    fn load(&self) -> U;
    fn fetch_or(&self, value: U) -> U;
    fn fetch_and(&self, value: U) -> U;
    fn into_inner(self) -> U;
}

macro_rules! impl_storage_unit {
    ($($ty:ty => $atomic:ty),* $(,)?) => {
        $(
            impl StorageUnit for $ty {
                const BITS: usize = <$ty>::BITS as usize;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;

                type Atomic = $atomic;

                #[inline(always)]
                fn count_ones(self) -> usize {
                    <$ty>::count_ones(self) as usize
                }
            }

            impl AtomicUnit<$ty> for $atomic {
                #[inline]
                fn new(value: $ty) -> Self {
                    <$atomic>::new(value)
                }

                #[inline]
                fn load(&self) -> $ty {
                    <$atomic>::load(self, Ordering::Relaxed)
                }

                #[inline]
                fn fetch_or(&self, value: $ty) -> $ty {
                    <$atomic>::fetch_or(self, value, Ordering::Relaxed)
                }

                #[inline]
                fn fetch_and(&self, value: $ty) -> $ty {
                    <$atomic>::fetch_and(self, value, Ordering::Relaxed)
                }

                #[inline]
                fn into_inner(self) -> $ty {
                    <$atomic>::into_inner(self)
                }
            }
        )*
    };
}

impl_storage_unit!(
    u8 => AtomicU8,
    u16 => AtomicU16,
    u32 => AtomicU32,
    u64 => AtomicU64,
);
