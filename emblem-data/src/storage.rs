//! Caller-owned node memory.
//!
//! Lists never allocate nodes themselves. Nodes live in a [`Storage`] that
//! the caller owns and passes to every list operation; a key handed out by
//! the storage stays valid until the caller removes that slot, no matter how
//! often the node is linked into or detached from lists.
//!
//! ```text
//! Storage<T>              get / get_mut / remove
//!     │
//!     ├── BoundedStorage<T>    fixed capacity, try_insert -> Result<K, Full<T>>
//!     │
//!     └── UnboundedStorage<T>  growable, insert -> K
//! ```

use core::fmt;

use crate::Key;

/// Slab-like storage with stable keys.
///
/// A key returned by an insert names the same value until
/// [`remove`](Storage::remove) is called with it. Removed slots may be
/// handed out again by later inserts.
pub trait Storage<T> {
    /// Handle type for slots in this storage.
    type Key: Key;

    /// Returns a reference to the value at `key`, if occupied.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if occupied.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Removes and returns the value at `key`, if occupied.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slot is occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Storage with a fixed number of slots.
pub trait BoundedStorage<T>: Storage<T> {
    /// Inserts a value, returning its key.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` when every slot is occupied.
    fn try_insert(&mut self, value: T) -> Result<Self::Key, Full<T>>;

    /// Returns the total number of slots.
    fn capacity(&self) -> usize;
}

/// Storage that grows on demand.
pub trait UnboundedStorage<T>: Storage<T> {
    /// Inserts a value, returning its key.
    fn insert(&mut self, value: T) -> Self::Key;
}

/// Error returned when fixed-capacity storage is full.
///
/// Carries the value that could not be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage is full")
    }
}

impl<T: fmt::Debug> std::error::Error for Full<T> {}

// =============================================================================
// BoxedStorage - fixed capacity, one boxed slot array plus a free stack
// =============================================================================

/// Fixed-capacity storage sized at construction.
///
/// Slots are a single boxed array; vacant slots are tracked on a LIFO free
/// stack, so the most recently freed slot is reused first. A fresh storage
/// hands out keys in ascending order.
///
/// # Example
///
/// ```
/// use emblem_data::{BoundedStorage, BoxedStorage, Storage};
///
/// let mut storage: BoxedStorage<&str> = BoxedStorage::with_capacity(4);
/// let key = storage.try_insert("preamble").unwrap();
/// assert_eq!(storage.get(key), Some(&"preamble"));
/// ```
pub struct BoxedStorage<T, K: Key = u32> {
    slots: Box<[Option<T>]>,
    free: Vec<K>,
}

impl<T, K: Key> BoxedStorage<T, K> {
    /// Creates storage with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` does not fit below the key type's sentinel.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= K::NONE.as_usize(),
            "capacity exceeds key type maximum"
        );

        let slots = (0..capacity).map(|_| None).collect();
        let free = (0..capacity).rev().map(K::from_usize).collect();

        Self { slots, free }
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    /// Drops every stored value and makes all slots vacant.
    ///
    /// Lists that still hold keys into this storage are left dangling;
    /// clear or destroy them first.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.free.clear();
        self.free
            .extend((0..self.slots.len()).rev().map(K::from_usize));
    }
}

impl<T, K: Key> Storage<T> for BoxedStorage<T, K> {
    type Key = K;

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        self.slots.get(key.as_usize())?.as_ref()
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.slots.get_mut(key.as_usize())?.as_mut()
    }

    #[inline]
    fn remove(&mut self, key: K) -> Option<T> {
        let value = self.slots.get_mut(key.as_usize())?.take()?;
        self.free.push(key);
        Some(value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl<T, K: Key> BoundedStorage<T> for BoxedStorage<T, K> {
    #[inline]
    fn try_insert(&mut self, value: T) -> Result<K, Full<T>> {
        let Some(key) = self.free.pop() else {
            return Err(Full(value));
        };
        self.slots[key.as_usize()] = Some(value);
        Ok(key)
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<T: fmt::Debug, K: Key> fmt::Debug for BoxedStorage<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedStorage")
            .field("capacity", &self.slots.len())
            .field("len", &self.len())
            .finish()
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        slab::Slab::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        slab::Slab::get_mut(self, key)
    }

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }
}

#[cfg(feature = "slab")]
impl<T> UnboundedStorage<T> for slab::Slab<T> {
    #[inline]
    fn insert(&mut self, value: T) -> usize {
        slab::Slab::insert(self, value)
    }
}
