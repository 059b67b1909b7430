//! Three-way comparators for the supported scalar payloads.
//!
//! Every comparator is a pure function producing a strict total order:
//! `cmp(a, b) == Less` exactly when `cmp(b, a) == Greater`, the order is
//! transitive, and `cmp(a, a) == Equal`. Each one agrees with the hash of
//! the same name in [`hash`](crate::hash) on what counts as equal.

use core::cmp::Ordering;

/// A comparator over values of type `T`.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

macro_rules! cmp_ord {
    ($($(#[$meta:meta])* $name:ident => $ty:ty),* $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(a: $ty, b: $ty) -> Ordering {
                a.cmp(&b)
            }
        )*
    };
}

cmp_ord! {
    /// Orders characters by code point.
    cmp_chars => char,
    /// Orders signed integers numerically.
    cmp_ints => i32,
    /// Orders sizes numerically. Default comparator for list search.
    cmp_sizes => usize,
    /// Orders booleans with `false` first.
    cmp_bools => bool,
}

macro_rules! cmp_float {
    ($($(#[$meta:meta])* $name:ident => $ty:ty),* $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(a: $ty, b: $ty) -> Ordering {
                // NaN has no native ordering
                a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
            }
        )*
    };
}

cmp_float! {
    /// Orders doubles numerically. `-0.0 == 0.0`; NaNs sort by IEEE total
    /// order, so positive NaN is above every number.
    cmp_doubles => f64,
    /// Orders floats numerically, with the same NaN handling as
    /// [`cmp_doubles`].
    cmp_floats => f32,
}

/// Orders pointers by address. Metadata of wide pointers is ignored.
#[inline]
pub fn cmp_ptrs<T: ?Sized>(a: *const T, b: *const T) -> Ordering {
    a.addr().cmp(&b.addr())
}

/// Orders strings lexicographically by their bytes.
#[inline]
pub fn cmp_strs(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}
