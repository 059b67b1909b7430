//! A single element type for lists that mix scalar kinds.

use core::cmp::Ordering;
use core::hash::Hasher;

use crate::cmp::{cmp_chars, cmp_doubles, cmp_floats, cmp_ints, cmp_ptrs, cmp_sizes, cmp_strs};
use crate::element::{Element, Truthy};
use crate::hash::{
    Hash, hash_char, hash_double, hash_float, hash_int, hash_ptr, hash_size, hash_str,
};

/// A value of one of the supported payload kinds.
///
/// Scalars are stored inline; only strings own a heap allocation.
/// Payloads of different kinds order by kind, in declaration order, so a
/// mixed list still has a total order. Equality, ordering and hashing all
/// go through [`Element`], which makes `Payload` usable as a map key.
///
/// # Example
///
/// ```
/// use emblem_data::{BoxedListStorage, List, Maybe, Payload};
///
/// let mut storage: BoxedListStorage<Payload> = BoxedListStorage::with_capacity(4);
/// let list = List::try_from_iter(
///     &mut storage,
///     [Payload::from("h1"), Payload::from(12usize), Payload::from('§')],
/// )
/// .unwrap();
///
/// assert!(list.search(&storage, &Payload::from(12usize)).is_just());
/// assert_eq!(list.search(&storage, &Payload::from(12i32)), Maybe::Nothing);
/// ```
#[derive(Debug, Clone)]
pub enum Payload {
    /// A character.
    Char(char),
    /// A signed integer.
    Int(i32),
    /// A size or count.
    Size(usize),
    /// An opaque address owned elsewhere.
    Ptr(*const ()),
    /// A double-precision float.
    Double(f64),
    /// A single-precision float.
    Float(f32),
    /// An owned string.
    Str(Box<str>),
}

impl Payload {
    /// The null address.
    #[inline]
    pub const fn null() -> Self {
        Payload::Ptr(core::ptr::null())
    }

    /// Returns the string contents, if this is a [`Payload::Str`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Payload::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    const fn kind(&self) -> u8 {
        match self {
            Payload::Char(_) => 0,
            Payload::Int(_) => 1,
            Payload::Size(_) => 2,
            Payload::Ptr(_) => 3,
            Payload::Double(_) => 4,
            Payload::Float(_) => 5,
            Payload::Str(_) => 6,
        }
    }
}

impl Element for Payload {
    fn compare(&self, other: &Self) -> Ordering {
        use Payload::*;

        match (self, other) {
            (Char(a), Char(b)) => cmp_chars(*a, *b),
            (Int(a), Int(b)) => cmp_ints(*a, *b),
            (Size(a), Size(b)) => cmp_sizes(*a, *b),
            (Ptr(a), Ptr(b)) => cmp_ptrs(*a, *b),
            (Double(a), Double(b)) => cmp_doubles(*a, *b),
            (Float(a), Float(b)) => cmp_floats(*a, *b),
            (Str(a), Str(b)) => cmp_strs(a, b),
            _ => self.kind().cmp(&other.kind()),
        }
    }

    fn hash_value(&self) -> Hash {
        match self {
            Payload::Char(c) => hash_char(*c),
            Payload::Int(i) => hash_int(*i),
            Payload::Size(n) => hash_size(*n),
            Payload::Ptr(p) => hash_ptr(*p),
            Payload::Double(d) => hash_double(*d),
            Payload::Float(f) => hash_float(*f),
            Payload::Str(s) => hash_str(s),
        }
    }
}

impl Truthy for Payload {
    fn is_truthy(&self) -> bool {
        match self {
            Payload::Char(c) => c.is_truthy(),
            Payload::Int(i) => i.is_truthy(),
            Payload::Size(n) => n.is_truthy(),
            Payload::Ptr(p) => p.is_truthy(),
            Payload::Double(d) => d.is_truthy(),
            Payload::Float(f) => f.is_truthy(),
            Payload::Str(_) => true,
        }
    }
}

impl PartialEq for Payload {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Payload {}

impl PartialOrd for Payload {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Payload {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl core::hash::Hash for Payload {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Payload {
                #[inline]
                fn from(value: $ty) -> Self {
                    Payload::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    char => Char,
    i32 => Int,
    usize => Size,
    f64 => Double,
    f32 => Float,
    Box<str> => Str,
}

impl<T> From<*const T> for Payload {
    #[inline]
    fn from(value: *const T) -> Self {
        Payload::Ptr(value.cast())
    }
}

impl From<&str> for Payload {
    #[inline]
    fn from(value: &str) -> Self {
        Payload::Str(value.into())
    }
}

impl From<String> for Payload {
    #[inline]
    fn from(value: String) -> Self {
        Payload::Str(value.into_boxed_str())
    }
}
