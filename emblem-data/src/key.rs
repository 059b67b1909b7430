//! Node handles with a sentinel "null" value.
//!
//! A [`Key`] names a node slot in some [`Storage`](crate::Storage). Lists
//! keep `K::NONE` in their `head`/`tail` fields and in the links of detached
//! nodes, so an empty list costs no `Option` wrapper per link.

/// Copyable handle to a node slot, with a reserved null value.
///
/// # Example
///
/// ```
/// use emblem_data::Key;
///
/// let key: u32 = 7;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// ```
///
/// Custom handle types work as long as they can round-trip through `usize`:
///
/// ```
/// use emblem_data::Key;
///
/// #[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// struct FragmentId(u32);
///
/// impl Key for FragmentId {
///     const NONE: Self = FragmentId(u32::MAX);
///
///     fn from_usize(val: usize) -> Self {
///         FragmentId(val as u32)
///     }
///
///     fn as_usize(&self) -> usize {
///         self.0 as usize
///     }
/// }
///
/// assert!(FragmentId::NONE.is_none());
/// ```
pub trait Key: Copy + Eq {
    /// The null handle. Never names a real slot.
    const NONE: Self;

    /// Builds a key from a slot number.
    fn from_usize(val: usize) -> Self;

    /// Returns the slot number.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is [`Key::NONE`].
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this names a slot.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Converts the sentinel into `None`.
    #[inline]
    fn into_option(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }

                #[inline]
                fn as_usize(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_key_sentinel {
        ($($ty:ty => $name:ident),*) => {
            $(
                #[test]
                fn $name() {
                    assert!(<$ty>::NONE.is_none());
                    assert!(!<$ty>::NONE.is_some());
                    assert!((0 as $ty).is_some());
                    assert!((<$ty>::MAX - 1).is_some());
                    assert_eq!(<$ty>::NONE.into_option(), None);
                }
            )*
        };
    }

    test_key_sentinel!(
        u8 => u8_sentinel,
        u16 => u16_sentinel,
        u32 => u32_sentinel,
        u64 => u64_sentinel,
        usize => usize_sentinel
    );

    #[test]
    fn slot_numbers_round_trip() {
        for i in [0usize, 1, 100, u16::MAX as usize] {
            assert_eq!(u32::from_usize(i).as_usize(), i);
        }
        assert_eq!(5u16.into_option(), Some(5));
    }
}
