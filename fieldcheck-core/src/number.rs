// Numeric kinds accepted by the range checks

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer and float types.
///
/// Sealed: the range checks rely on `PartialOrd` meaning numeric order.
pub trait Number: sealed::Sealed + Copy + PartialOrd + fmt::Display {
    /// Additive identity, the bound for [`positive_number`](crate::positive_number).
    const ZERO: Self;
}

macro_rules! impl_number {
    ($zero:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Number for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_number!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(0.0 => f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_of<T: Number>(_: T) -> T {
        T::ZERO
    }

    #[test]
    fn test_zero_per_kind() {
        assert_eq!(zero_of(7u8), 0);
        assert_eq!(zero_of(-7i64), 0);
        assert_eq!(zero_of(2.5f32), 0.0);
        assert_eq!(zero_of(2.5f64), 0.0);
    }
}
