//! Doubly-linked list over caller-owned nodes.
//!
//! A [`List`] only tracks head, tail and length. The nodes themselves are
//! [`ListNode`]s living in a [`Storage`] the caller owns and passes to every
//! operation. Linking and unlinking rewire keys; they never allocate or free.
//! The only operations that touch storage occupancy are bulk construction,
//! the `push` helpers and [`List::destroy`] with `free_nodes` set.
//!
//! # Storage Invariant
//!
//! A list must always be used with the same storage. Passing a different
//! storage, or freeing a node while it is still linked, is a caller error:
//! it cannot cause undefined behavior, but later operations may panic or
//! return garbage.
//!
//! # Example
//!
//! ```
//! use emblem_data::{BoundedStorage, BoxedListStorage, List, ListNode, Maybe};
//!
//! let mut storage: BoxedListStorage<usize> = BoxedListStorage::with_capacity(8);
//! let mut list: List<usize, BoxedListStorage<usize>> = List::new();
//!
//! // Nodes are created by the caller and handed to the list by key
//! let a = storage.try_insert(ListNode::new(10)).unwrap();
//! let b = storage.try_insert(ListNode::new(20)).unwrap();
//! list.append(&mut storage, a).unwrap();
//! list.prepend(&mut storage, b).unwrap();
//!
//! assert_eq!(list.iter(&storage).copied().collect::<Vec<_>>(), vec![20, 10]);
//! assert_eq!(list.search(&storage, &10), Maybe::Just(a));
//!
//! // Detaching leaves the node in storage
//! list.remove(&mut storage, a).unwrap();
//! assert_eq!(list.len(), 1);
//! assert_eq!(list.get(&storage, a), Some(&10));
//! ```
//!
//! # Moving Between Lists
//!
//! ```
//! use emblem_data::{BoxedListStorage, List};
//!
//! let mut storage: BoxedListStorage<&str> = BoxedListStorage::with_capacity(4);
//! let mut pending: List<&str, BoxedListStorage<&str>> = List::new();
//! let mut emitted: List<&str, BoxedListStorage<&str>> = List::new();
//!
//! let key = pending.try_push_back(&mut storage, "chapter").unwrap();
//!
//! pending.remove(&mut storage, key).unwrap();
//! emitted.append(&mut storage, key).unwrap();
//!
//! assert!(pending.is_empty());
//! assert_eq!(emitted.front(&storage), Some(&"chapter"));
//! ```

use core::cmp::Ordering;
use std::marker::PhantomData;

use crate::{
    BoundedStorage, BoxedStorage, Element, Full, Key, LinkError, Maybe, Storage, Truthy,
    UnboundedStorage,
};

/// Type alias for bounded list storage backed by a boxed allocation.
pub type BoxedListStorage<T, K = u32> = BoxedStorage<ListNode<T, K>, K>;

/// Type alias for unbounded list storage backed by `slab::Slab`.
#[cfg(feature = "slab")]
pub type SlabListStorage<T> = slab::Slab<ListNode<T, usize>>;

/// A list node: a payload plus its neighbours' keys.
///
/// Callers create nodes with [`ListNode::new`], insert them into storage,
/// and pass the resulting key to [`List::append`] or [`List::prepend`].
#[derive(Debug)]
pub struct ListNode<T, K: Key = u32> {
    pub(crate) data: T,
    pub(crate) prev: K,
    pub(crate) next: K,
}

impl<T, K: Key> ListNode<T, K> {
    /// Creates a new unlinked node.
    #[inline]
    pub fn new(data: T) -> Self {
        Self {
            data,
            prev: K::NONE,
            next: K::NONE,
        }
    }

    /// Returns a reference to the payload.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the payload.
    #[inline]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Consumes the node, returning the payload.
    #[inline]
    pub fn into_data(self) -> T {
        self.data
    }

    /// Key of the previous node, if linked after one.
    #[inline]
    pub fn prev_key(&self) -> Option<K> {
        self.prev.into_option()
    }

    /// Key of the next node, if linked before one.
    #[inline]
    pub fn next_key(&self) -> Option<K> {
        self.next.into_option()
    }
}

/// A doubly-linked list over external storage.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Storage type (e.g., [`BoxedListStorage<T>`])
/// - `K`: Key type (default `u32`)
#[derive(Debug)]
pub struct List<T, S, K: Key = u32>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    head: K,
    tail: K,
    len: usize,
    _marker: PhantomData<(T, S)>,
}

impl<T, S, K: Key> Default for List<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    fn default() -> Self {
        Self::new()
    }
}

const MISSING: &str = "linked node missing from storage";

// =============================================================================
// Base impl - works with any Storage (read/link/detach operations)
// =============================================================================

impl<T, S, K: Key> List<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub fn front_key(&self) -> Option<K> {
        self.head.into_option()
    }

    /// Returns the tail node's key, or `None` if empty.
    #[inline]
    pub fn back_key(&self) -> Option<K> {
        self.tail.into_option()
    }

    /// Looks up a node the list already links to.
    ///
    /// # Panics
    ///
    /// Panics if the node has been freed while still linked.
    #[inline]
    fn linked(storage: &S, key: K) -> &ListNode<T, K> {
        storage.get(key).expect(MISSING)
    }

    #[inline]
    fn linked_mut(storage: &mut S, key: K) -> &mut ListNode<T, K> {
        storage.get_mut(key).expect(MISSING)
    }

    #[inline]
    fn check(storage: &S, key: K) -> Result<(), LinkError> {
        if key.is_none() {
            return Err(LinkError::Null);
        }
        match storage.get(key) {
            Some(_) => Ok(()),
            None => Err(LinkError::Vacant),
        }
    }

    // ========================================================================
    // Link operations (just relink, no alloc/dealloc)
    // ========================================================================

    /// Links a stored node to the back of the list.
    ///
    /// The node must not currently be linked into any list.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Null`] for the sentinel key and
    /// [`LinkError::Vacant`] if storage holds no node at `key`. The list is
    /// unchanged on error.
    #[inline]
    pub fn append(&mut self, storage: &mut S, key: K) -> Result<(), LinkError> {
        Self::check(storage, key)?;
        self.link_back(storage, key);
        Ok(())
    }

    /// Links a stored node to the front of the list.
    ///
    /// # Errors
    ///
    /// Same as [`append`](Self::append).
    #[inline]
    pub fn prepend(&mut self, storage: &mut S, key: K) -> Result<(), LinkError> {
        Self::check(storage, key)?;
        self.link_front(storage, key);
        Ok(())
    }

    fn link_back(&mut self, storage: &mut S, key: K) {
        let node = Self::linked_mut(storage, key);
        node.prev = self.tail;
        node.next = K::NONE;

        if self.tail.is_some() {
            Self::linked_mut(storage, self.tail).next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
    }

    fn link_front(&mut self, storage: &mut S, key: K) {
        let node = Self::linked_mut(storage, key);
        node.next = self.head;
        node.prev = K::NONE;

        if self.head.is_some() {
            Self::linked_mut(storage, self.head).prev = key;
        } else {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
    }

    /// Detaches a node from the list without freeing it.
    ///
    /// Runs in O(1): there is no membership search. The node's neighbours
    /// are joined, its own links are cleared, and head/tail move if it was
    /// an endpoint. The node stays in storage under the same key and can be
    /// linked into another list.
    ///
    /// Returns `Ok(false)` if the node carries no links and is not this
    /// list's head, meaning it is not linked anywhere.
    ///
    /// Detaching a node that belongs to a different list is a caller
    /// error; the outcome is memory-safe but unspecified.
    ///
    /// # Errors
    ///
    /// Same as [`append`](Self::append).
    pub fn remove(&mut self, storage: &mut S, key: K) -> Result<bool, LinkError> {
        Self::check(storage, key)?;

        let node = Self::linked_mut(storage, key);
        let prev = node.prev;
        let next = node.next;

        if prev.is_none() && next.is_none() && self.head != key {
            return Ok(false);
        }

        node.prev = K::NONE;
        node.next = K::NONE;

        if prev.is_some() {
            Self::linked_mut(storage, prev).next = next;
        } else {
            self.head = next;
        }

        if next.is_some() {
            Self::linked_mut(storage, next).prev = prev;
        } else {
            self.tail = prev;
        }

        debug_assert!(self.len > 0, "detached more nodes than were linked");
        self.len -= 1;
        Ok(true)
    }

    // ========================================================================
    // Teardown
    // ========================================================================

    /// Tears the list down in a single front-to-back pass.
    ///
    /// When `finalizer` is given it runs on every payload. When `free_nodes`
    /// is set every node is removed from storage (and dropped) after its
    /// payload has been visited; otherwise the nodes stay in storage with
    /// their links cleared. With neither set nothing is visited.
    ///
    /// ```
    /// use emblem_data::{BoxedListStorage, List, Storage};
    ///
    /// let mut storage: BoxedListStorage<u32> = BoxedListStorage::with_capacity(4);
    /// let list = List::try_from_iter(&mut storage, [1, 2, 3]).unwrap();
    ///
    /// let mut total = 0;
    /// list.destroy(&mut storage, true, Some(&mut |v: &mut u32| total += *v));
    ///
    /// assert_eq!(total, 6);
    /// assert!(storage.is_empty());
    /// ```
    pub fn destroy(
        self,
        storage: &mut S,
        free_nodes: bool,
        mut finalizer: Option<&mut dyn FnMut(&mut T)>,
    ) {
        if !free_nodes && finalizer.is_none() {
            return;
        }

        log::trace!(
            "destroying list of {} nodes (free_nodes: {free_nodes}, finalizer: {})",
            self.len,
            finalizer.is_some()
        );

        let mut key = self.head;
        while key.is_some() {
            let node = Self::linked_mut(storage, key);
            let next = node.next;

            if let Some(finalize) = finalizer.as_deref_mut() {
                finalize(&mut node.data);
            }

            if free_nodes {
                storage.remove(key);
            } else {
                node.prev = K::NONE;
                node.next = K::NONE;
            }

            key = next;
        }
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the element at the given key.
    #[inline]
    pub fn get<'a>(&'a self, storage: &'a S, key: K) -> Option<&'a T> {
        storage.get(key).map(|node| &node.data)
    }

    /// Returns a mutable reference to the element at the given key.
    #[inline]
    pub fn get_mut<'a>(&'a mut self, storage: &'a mut S, key: K) -> Option<&'a mut T> {
        storage.get_mut(key).map(|node| &mut node.data)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front<'a>(&'a self, storage: &'a S) -> Option<&'a T> {
        let head = self.front_key()?;
        Some(&Self::linked(storage, head).data)
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back<'a>(&'a self, storage: &'a S) -> Option<&'a T> {
        let tail = self.back_key()?;
        Some(&Self::linked(storage, tail).data)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Returns the key of the node after `key`.
    ///
    /// Returns `None` if `key` is the tail or invalid.
    #[inline]
    pub fn next_key(&self, storage: &S, key: K) -> Option<K> {
        storage.get(key)?.next.into_option()
    }

    /// Returns the key of the node before `key`.
    ///
    /// Returns `None` if `key` is the head or invalid.
    #[inline]
    pub fn prev_key(&self, storage: &S, key: K) -> Option<K> {
        storage.get(key)?.prev.into_option()
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to back.
    ///
    /// The iterator starts from the head as it is when this is called.
    #[inline]
    pub fn iter<'a>(&self, storage: &'a S) -> Iter<'a, T, S, K> {
        Iter {
            storage,
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over keys, front to back.
    ///
    /// Collect the keys first when the list is to be modified while walking
    /// it.
    #[inline]
    pub fn keys<'a>(&self, storage: &'a S) -> Keys<'a, T, S, K> {
        Keys {
            storage,
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Calls `f` on a mutable reference to every element, front to back.
    pub fn for_each_mut<F>(&self, storage: &mut S, mut f: F)
    where
        F: FnMut(&mut T),
    {
        let mut key = self.head;
        while key.is_some() {
            let node = Self::linked_mut(storage, key);
            f(&mut node.data);
            key = node.next;
        }
    }

    // ========================================================================
    // Search and folds
    // ========================================================================

    /// Returns the key of the first node whose payload compares equal to
    /// `value` under `cmp`.
    ///
    /// `cmp` receives the probe first and the node's payload second.
    ///
    /// ```
    /// use emblem_data::{BoxedListStorage, List, Maybe};
    ///
    /// let mut storage: BoxedListStorage<String> = BoxedListStorage::with_capacity(4);
    /// let list = List::try_from_iter(&mut storage, ["Title".to_string(), "Body".to_string()])
    ///     .unwrap();
    ///
    /// let found = list.search_by(&storage, "body", |probe: &str, name: &String| {
    ///     probe.cmp(name.to_lowercase().as_str())
    /// });
    /// assert_eq!(found, Maybe::Just(1));
    /// ```
    pub fn search_by<Q, F>(&self, storage: &S, value: &Q, mut cmp: F) -> Maybe<K>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        self.keys(storage)
            .find(|&key| cmp(value, &Self::linked(storage, key).data) == Ordering::Equal)
            .into()
    }

    /// Returns `true` if every element is truthy. An empty list is `true`.
    #[inline]
    pub fn all(&self, storage: &S) -> bool
    where
        T: Truthy,
    {
        self.iter(storage).all(T::is_truthy)
    }

    /// Returns `true` if any element is truthy. An empty list is `false`.
    #[inline]
    pub fn any(&self, storage: &S) -> bool
    where
        T: Truthy,
    {
        self.iter(storage).any(T::is_truthy)
    }
}

impl<T: Element, S, K: Key> List<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    /// Returns the key of the first node equal to `value` under the
    /// element's own comparator.
    #[inline]
    pub fn search(&self, storage: &S, value: &T) -> Maybe<K> {
        self.search_by(storage, value, T::compare)
    }
}

// =============================================================================
// Bounded storage impl - fallible insertion
// =============================================================================

impl<T, S, K: Key> List<T, S, K>
where
    S: BoundedStorage<ListNode<T, K>, Key = K>,
{
    /// Builds a list holding `values` in order, one new node per value.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` with the first value that did not fit.
    /// Every node inserted before that point is freed again, last first,
    /// so the storage hands out the same keys it would have before the
    /// call.
    pub fn try_from_iter<I>(storage: &mut S, values: I) -> Result<Self, Full<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        for value in values {
            if let Err(full) = list.try_push_back(storage, value) {
                log::debug!(
                    "bulk construction rolled back after {} nodes, storage capacity {}",
                    list.len,
                    storage.capacity()
                );
                list.free_from_back(storage);
                return Err(full);
            }
        }

        log::trace!("built list of {} nodes", list.len);
        Ok(list)
    }

    fn free_from_back(self, storage: &mut S) {
        let mut key = self.tail;
        while key.is_some() {
            let prev = Self::linked(storage, key).prev;
            storage.remove(key);
            key = prev;
        }
    }

    /// Inserts a value into storage and links it at the back.
    ///
    /// Returns the key of the new node.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if storage is full.
    #[inline]
    pub fn try_push_back(&mut self, storage: &mut S, value: T) -> Result<K, Full<T>> {
        let key = storage
            .try_insert(ListNode::new(value))
            .map_err(|e| Full(e.0.data))?;
        self.link_back(storage, key);
        Ok(key)
    }

    /// Inserts a value into storage and links it at the front.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if storage is full.
    #[inline]
    pub fn try_push_front(&mut self, storage: &mut S, value: T) -> Result<K, Full<T>> {
        let key = storage
            .try_insert(ListNode::new(value))
            .map_err(|e| Full(e.0.data))?;
        self.link_front(storage, key);
        Ok(key)
    }
}

// =============================================================================
// Unbounded storage impl - infallible insertion
// =============================================================================

impl<T, S, K: Key> List<T, S, K>
where
    S: UnboundedStorage<ListNode<T, K>, Key = K>,
{
    /// Builds a list holding `values` in order, one new node per value.
    pub fn from_iter_in<I>(storage: &mut S, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        for value in values {
            list.push_back(storage, value);
        }

        log::trace!("built list of {} nodes", list.len);
        list
    }

    /// Inserts a value into storage and links it at the back.
    #[inline]
    pub fn push_back(&mut self, storage: &mut S, value: T) -> K {
        let key = storage.insert(ListNode::new(value));
        self.link_back(storage, key);
        key
    }

    /// Inserts a value into storage and links it at the front.
    #[inline]
    pub fn push_front(&mut self, storage: &mut S, value: T) -> K {
        let key = storage.insert(ListNode::new(value));
        self.link_front(storage, key);
        key
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements.
pub struct Iter<'a, T, S, K: Key = u32> {
    storage: &'a S,
    next: K,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a, S, K: Key + 'a> Iterator for Iter<'a, T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.next.is_none() {
            return None;
        }

        let node = self.storage.get(self.next).expect(MISSING);
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, K: Key + 'a> ExactSizeIterator for Iter<'a, T, S, K> where
    S: Storage<ListNode<T, K>, Key = K>
{
}

/// Iterator over the keys of list nodes.
pub struct Keys<'a, T, S, K: Key = u32> {
    storage: &'a S,
    next: K,
    remaining: usize,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, S, K: Key + 'a> Iterator for Keys<'a, T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.next.is_none() {
            return None;
        }

        let key = self.next;
        self.next = self.storage.get(key).expect(MISSING).next;
        self.remaining -= 1;
        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, K: Key + 'a> ExactSizeIterator for Keys<'a, T, S, K> where
    S: Storage<ListNode<T, K>, Key = K>
{
}


#[cfg(all(test, feature = "slab"))]
mod tests_slab {
    use super::*;

    #[test]
    fn slab_push_back_infallible() {
        let mut storage: SlabListStorage<u64> = slab::Slab::with_capacity(16);
        let mut list: List<u64, SlabListStorage<u64>, usize> = List::new();

        let a = list.push_back(&mut storage, 1);
        let b = list.push_back(&mut storage, 2);
        let c = list.push_front(&mut storage, 0);

        assert_eq!(list.len(), 3);
        assert_eq!(list.iter(&storage).copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!((a, b, c), (0, 1, 2));
    }

    #[test]
    fn slab_from_iter_in_grows() {
        let mut storage: SlabListStorage<usize> = slab::Slab::with_capacity(2);
        let list: List<usize, _, usize> = List::from_iter_in(&mut storage, 0..100);

        assert_eq!(list.len(), 100);
        assert_eq!(list.search(&storage, &99).just(), Some(99));
        list.destroy(&mut storage, true, None);
        assert!(storage.is_empty());
    }
}
