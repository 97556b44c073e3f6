use std::cmp::Ordering;

/// Element types with equality and a total order.
///
/// - `total_cmp` must be a total order; `Equal` is the equality every
///   set operation in this crate uses.
/// - Floats use the IEEE 754 total order, so NaNs compare equal to themselves
///   and `-0.0 < 0.0`.
pub trait Ordered {
    fn total_cmp(&self, other: &Self) -> Ordering;

    #[inline]
    fn total_eq(&self, other: &Self) -> bool {
        self.total_cmp(other) == Ordering::Equal
    }

    #[inline]
    fn total_lt(&self, other: &Self) -> bool {
        self.total_cmp(other) == Ordering::Less
    }
}

/// Implements [`Ordered`] for types whose `Ord` already is the order wanted.
#[macro_export]
macro_rules! impl_ordered_for_ord {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Ordered for $ty {
                #[inline]
                fn total_cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                    ::std::cmp::Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_ordered_for_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool, String,
);

impl Ordered for &str {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        (*self).cmp(*other)
    }
}

impl Ordered for f32 {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

impl Ordered for f64 {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}
