//! Deterministic hashes for the supported scalar payloads.
//!
//! Each hash agrees with the comparator of the same type in
//! [`cmp`](crate::cmp): values that compare `Equal` hash identically.
//! The hashes are stable across runs and platforms of the same pointer
//! width, so they may be used for content-addressed lookup tables.

/// Hash value produced by this module.
pub type Hash = u64;

/// Starting accumulator of the numeric hash.
pub const NUMERIC_SEED: Hash = 0x00dc_ba09_8765_4321;

/// Starting accumulator of the string hash (djb2).
pub const STRING_SEED: Hash = 5381;

// Pointer hashing goes through the size hash.
const _: () = assert!(size_of::<usize>() <= size_of::<Hash>());

/// XORs `value << i` into the seed for every bit index of [`Hash`].
///
/// Low payload bits are smeared across the whole word; bits shifted past
/// the top are lost, so wide values with equal low bits collide more often.
#[inline]
const fn spread(value: Hash) -> Hash {
    let mut hash = NUMERIC_SEED;
    let mut i = 0;
    while i < Hash::BITS {
        hash ^= value << i;
        i += 1;
    }
    hash
}

/// Hashes a character by its code point.
#[inline]
pub const fn hash_char(c: char) -> Hash {
    spread(c as Hash)
}

/// Hashes a signed integer, sign-extended to the hash width.
#[inline]
pub const fn hash_int(v: i32) -> Hash {
    spread(v as i64 as Hash)
}

/// Hashes a size.
#[inline]
pub const fn hash_size(v: usize) -> Hash {
    spread(v as Hash)
}

/// Hashes a boolean as `0` or `1`.
#[inline]
pub const fn hash_bool(b: bool) -> Hash {
    spread(b as Hash)
}

/// Hashes a pointer by its address, via [`hash_size`].
#[inline]
pub fn hash_ptr<T: ?Sized>(p: *const T) -> Hash {
    hash_size(p.addr())
}

/// Hashes a double by its bit pattern, with `-0.0` folded onto `0.0`.
#[inline]
pub fn hash_double(v: f64) -> Hash {
    let v = if v == 0.0 { 0.0 } else { v };
    spread(v.to_bits())
}

/// Hashes a float by its bit pattern, with `-0.0` folded onto `0.0`.
#[inline]
pub fn hash_float(v: f32) -> Hash {
    let v = if v == 0.0 { 0.0 } else { v };
    spread(v.to_bits() as Hash)
}

/// Hashes a string's bytes with djb2.
///
/// ```
/// use emblem_data::hash::hash_str;
///
/// assert_eq!(hash_str(""), 5381);
/// assert_eq!(hash_str("abc"), hash_str(&String::from("abc")));
/// ```
#[inline]
pub fn hash_str(s: &str) -> Hash {
    s.bytes().fold(STRING_SEED, |h, b| {
        (h << 5).wrapping_add(h) ^ Hash::from(b)
    })
}
