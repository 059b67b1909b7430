//! Capabilities a list element can provide.
//!
//! [`Element`] bundles an element type with its comparator and hash, so a
//! list of `T` can only ever be searched with `T`'s own ordering.
//! [`Truthy`] gives the presence test used by [`List::all`] and
//! [`List::any`].
//!
//! [`List::all`]: crate::List::all
//! [`List::any`]: crate::List::any

use core::cmp::Ordering;
use std::rc::Rc;

use crate::cmp::{
    cmp_bools, cmp_chars, cmp_doubles, cmp_floats, cmp_ints, cmp_ptrs, cmp_sizes, cmp_strs,
};
use crate::hash::{
    Hash, hash_bool, hash_char, hash_double, hash_float, hash_int, hash_ptr, hash_size, hash_str,
};

/// A type with a total order and a hash that agrees with it.
///
/// Implementations must satisfy: `a.compare(b) == Equal` implies
/// `a.hash_value() == b.hash_value()`.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use emblem_data::Element;
///
/// assert_eq!("abc".compare("abd"), Ordering::Less);
/// assert_eq!(3usize.hash_value(), emblem_data::hash::hash_size(3));
/// ```
pub trait Element {
    /// Three-way comparison against another value of the same type.
    fn compare(&self, other: &Self) -> Ordering;

    /// Deterministic hash of this value.
    fn hash_value(&self) -> Hash;
}

macro_rules! impl_element_for_scalar {
    ($($ty:ty => $cmp:ident, $hash:ident);* $(;)?) => {
        $(
            impl Element for $ty {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    $cmp(*self, *other)
                }

                #[inline]
                fn hash_value(&self) -> Hash {
                    $hash(*self)
                }
            }
        )*
    };
}

impl_element_for_scalar! {
    char => cmp_chars, hash_char;
    i32 => cmp_ints, hash_int;
    usize => cmp_sizes, hash_size;
    bool => cmp_bools, hash_bool;
    f64 => cmp_doubles, hash_double;
    f32 => cmp_floats, hash_float;
}

impl<T: ?Sized> Element for *const T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        cmp_ptrs(*self, *other)
    }

    #[inline]
    fn hash_value(&self) -> Hash {
        hash_ptr(*self)
    }
}

impl<T: ?Sized> Element for *mut T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        cmp_ptrs(self.cast_const(), other.cast_const())
    }

    #[inline]
    fn hash_value(&self) -> Hash {
        hash_ptr(self.cast_const())
    }
}

impl Element for str {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        cmp_strs(self, other)
    }

    #[inline]
    fn hash_value(&self) -> Hash {
        hash_str(self)
    }
}

impl Element for String {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        cmp_strs(self, other)
    }

    #[inline]
    fn hash_value(&self) -> Hash {
        hash_str(self)
    }
}

impl Element for Box<str> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        cmp_strs(self, other)
    }

    #[inline]
    fn hash_value(&self) -> Hash {
        hash_str(self)
    }
}

impl<E: Element + ?Sized> Element for &E {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }

    #[inline]
    fn hash_value(&self) -> Hash {
        (**self).hash_value()
    }
}

impl<E: Element + ?Sized> Element for Rc<E> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(other)
    }

    #[inline]
    fn hash_value(&self) -> Hash {
        (**self).hash_value()
    }
}

/// Presence test for `all`/`any` folds.
///
/// This is the truthiness of the slot a value occupies, not a predicate on
/// its contents. Scalars stored inline are falsy when all of their bits
/// are zero. Anything held behind a pointer (strings, boxes, shared
/// references) is truthy whatever it points at, and only a null pointer or
/// `None` is falsy.
///
/// ```
/// use emblem_data::Truthy;
///
/// assert!(!0usize.is_truthy());
/// assert!("".is_truthy());
/// assert!(!None::<&str>.is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the slot holding this value is non-null.
    fn is_truthy(&self) -> bool;
}

macro_rules! impl_truthy_for_int {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != '\0'
    }
}

impl Truthy for f64 {
    /// `-0.0` has a set sign bit and is truthy.
    #[inline]
    fn is_truthy(&self) -> bool {
        self.to_bits() != 0
    }
}

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.to_bits() != 0
    }
}

impl<T: ?Sized> Truthy for *const T {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_null()
    }
}

impl<T: ?Sized> Truthy for *mut T {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_null()
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

macro_rules! impl_truthy_for_pointee {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                #[inline]
                fn is_truthy(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_truthy_for_pointee!(str, String);

impl<T: ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: ?Sized> Truthy for Rc<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}
