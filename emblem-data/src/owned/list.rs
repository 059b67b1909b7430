//! OwnedList - a doubly-linked list that owns its storage.

use core::cmp::Ordering;
use std::mem;

use crate::list::{Iter, Keys};
use crate::{BoxedListStorage, Element, Full, Key, List, ListNode, Maybe, Storage, Truthy};

/// A doubly-linked list that owns its storage.
///
/// A convenience wrapper around [`List`] + [`BoxedListStorage`] for cases
/// where nodes never need to be shared with another list. The storage has
/// a fixed capacity chosen at construction.
///
/// # Example
///
/// ```
/// use emblem_data::OwnedList;
///
/// let list: OwnedList<i32> = OwnedList::from_vec(vec![3, 1, 2]);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
///
/// let mut removed = Vec::new();
/// list.destroy(|v| removed.push(*v));
/// assert_eq!(removed, vec![3, 1, 2]);
/// ```
#[derive(Debug)]
pub struct OwnedList<T, K: Key = u32> {
    storage: BoxedListStorage<T, K>,
    list: List<T, BoxedListStorage<T, K>, K>,
}

impl<T, K: Key> OwnedList<T, K> {
    /// Creates an empty list with room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` does not fit below the key type's sentinel.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: BoxedListStorage::with_capacity(capacity),
            list: List::new(),
        }
    }

    /// Creates a list holding `values` in order, with exactly enough
    /// capacity for them.
    ///
    /// # Panics
    ///
    /// Panics if there are more values than the key type can address.
    pub fn from_vec(values: Vec<T>) -> Self {
        let mut storage = BoxedListStorage::with_capacity(values.len());
        let Ok(list) = List::try_from_iter(&mut storage, values) else {
            unreachable!("storage is sized to the input");
        };
        Self { storage, list }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the storage capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Pushes a value to the back of the list.
    ///
    /// Returns the key of the inserted node.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if storage is full.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<K, Full<T>> {
        self.list.try_push_back(&mut self.storage, value)
    }

    /// Pushes a value to the front of the list.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if storage is full.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<K, Full<T>> {
        self.list.try_push_front(&mut self.storage, value)
    }

    /// Detaches the node at `key` and returns its value.
    ///
    /// Returns `None` if `key` does not name a node of this list.
    pub fn remove(&mut self, key: K) -> Option<T> {
        self.list
            .remove(&mut self.storage, key)
            .ok()
            .filter(|&linked| linked)?;
        self.storage.remove(key).map(ListNode::into_data)
    }

    /// Returns a reference to the element at `key`.
    #[inline]
    pub fn get(&self, key: K) -> Option<&T> {
        self.list.get(&self.storage, key)
    }

    /// Returns a mutable reference to the element at `key`.
    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.list.get_mut(&mut self.storage, key)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.list.front(&self.storage)
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.list.back(&self.storage)
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub fn front_key(&self) -> Option<K> {
        self.list.front_key()
    }

    /// Returns the tail node's key, or `None` if empty.
    #[inline]
    pub fn back_key(&self) -> Option<K> {
        self.list.back_key()
    }

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, BoxedListStorage<T, K>, K> {
        self.list.iter(&self.storage)
    }

    /// Returns an iterator over keys, front to back.
    #[inline]
    pub fn keys(&self) -> Keys<'_, T, BoxedListStorage<T, K>, K> {
        self.list.keys(&self.storage)
    }

    /// Calls `f` on every element, front to back.
    #[inline]
    pub fn for_each_mut<F: FnMut(&mut T)>(&mut self, f: F) {
        self.list.for_each_mut(&mut self.storage, f);
    }

    /// Returns the key of the first element equal to `value` under `cmp`.
    #[inline]
    pub fn search_by<Q, F>(&self, value: &Q, cmp: F) -> Maybe<K>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        self.list.search_by(&self.storage, value, cmp)
    }

    /// Returns `true` if every element is truthy.
    #[inline]
    pub fn all(&self) -> bool
    where
        T: Truthy,
    {
        self.list.all(&self.storage)
    }

    /// Returns `true` if any element is truthy.
    #[inline]
    pub fn any(&self) -> bool
    where
        T: Truthy,
    {
        self.list.any(&self.storage)
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        log::trace!("clearing owned list of {} nodes", self.list.len());
        let list = mem::take(&mut self.list);
        list.destroy(&mut self.storage, true, None);
    }

    /// Runs `finalizer` on every element, front to back, then frees them
    /// all.
    pub fn destroy<F: FnMut(&mut T)>(self, mut finalizer: F) {
        let Self { mut storage, list } = self;
        list.destroy(&mut storage, true, Some(&mut finalizer));
    }
}

impl<T: Element, K: Key> OwnedList<T, K> {
    /// Returns the key of the first element equal to `value`.
    #[inline]
    pub fn search(&self, value: &T) -> Maybe<K> {
        self.list.search(&self.storage, value)
    }
}

impl<T, K: Key> FromIterator<T> for OwnedList<T, K> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, K: Key> From<Vec<T>> for OwnedList<T, K> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoundedStorage;
    use std::rc::Rc;

    #[test]
    fn new_is_empty() {
        let list: OwnedList<u64> = OwnedList::with_capacity(16);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 16);
        assert!(list.front().is_none());
        assert!(list.back().is_none());
    }

    #[test]
    fn push_back_and_front() {
        let mut list: OwnedList<u64> = OwnedList::with_capacity(16);

        list.push_back(2).unwrap();
        list.push_back(3).unwrap();
        list.push_front(1).unwrap();

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn remove_by_key() {
        let mut list: OwnedList<u64> = OwnedList::with_capacity(16);

        let a = list.push_back(1).unwrap();
        let b = list.push_back(2).unwrap();
        let c = list.push_back(3).unwrap();

        assert_eq!(list.remove(b), Some(2));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(a), Some(&1));
        assert_eq!(list.get(c), Some(&3));

        // Freed slot is gone and can be handed out again
        assert_eq!(list.remove(b), None);
        assert_eq!(list.push_back(4).unwrap(), b);
    }

    #[test]
    fn remove_leaves_unlinked_node_alone() {
        let mut list: OwnedList<u64> = OwnedList::with_capacity(4);
        list.push_back(1).unwrap();
        let loose = list.storage.try_insert(ListNode::new(2)).unwrap();

        assert_eq!(list.remove(loose), None);
        assert_eq!(list.storage.get(loose).map(ListNode::data), Some(&2));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn full_returns_value() {
        let mut list: OwnedList<&str> = OwnedList::with_capacity(1);
        list.push_back("body").unwrap();
        assert_eq!(list.push_front("title").unwrap_err().into_inner(), "title");
    }

    #[test]
    fn from_vec_is_exactly_sized() {
        let list: OwnedList<i32> = OwnedList::from_vec(vec![3, 1, 2]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.capacity(), 3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);

        let empty: OwnedList<i32> = Vec::new().into();
        assert!(empty.is_empty());
        assert!(empty.all());
        assert!(!empty.any());
    }

    #[test]
    fn collect_and_search() {
        let list: OwnedList<char> = "abca".chars().collect();
        let first = list.front_key().unwrap();

        assert_eq!(list.search(&'a'), Maybe::Just(first));
        assert_eq!(list.search(&'z'), Maybe::Nothing);
        assert_eq!(
            list.search_by(&'C', |probe, c| probe.to_ascii_lowercase().cmp(c)),
            Maybe::Just(2)
        );
    }

    #[test]
    fn for_each_mut_and_get_mut() {
        let mut list: OwnedList<i32> = OwnedList::from_vec(vec![1, 2]);
        let back = list.back_key().unwrap();

        list.for_each_mut(|v| *v = -*v);
        *list.get_mut(back).unwrap() += 10;

        assert_eq!(list.keys().count(), 2);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![-1, 8]);
    }

    #[test]
    fn clear_frees_nodes() {
        let shared = Rc::new(());
        let mut list: OwnedList<Rc<()>> = OwnedList::with_capacity(4);
        list.push_back(Rc::clone(&shared)).unwrap();
        list.push_back(Rc::clone(&shared)).unwrap();

        list.clear();

        assert!(list.is_empty());
        assert_eq!(Rc::strong_count(&shared), 1);
        assert_eq!(list.capacity(), 4);
        list.push_back(Rc::clone(&shared)).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn destroy_runs_finalizer_then_frees() {
        let shared = Rc::new(());
        let list: OwnedList<Rc<()>> =
            OwnedList::from_vec(vec![Rc::clone(&shared), Rc::clone(&shared)]);

        let mut visited = 0;
        list.destroy(|_| visited += 1);

        assert_eq!(visited, 2);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn drop_frees_nodes() {
        let shared = Rc::new(());
        {
            let _list: OwnedList<Rc<()>> = std::iter::repeat_with(|| Rc::clone(&shared))
                .take(3)
                .collect();
            assert_eq!(Rc::strong_count(&shared), 4);
        }
        assert_eq!(Rc::strong_count(&shared), 1);
    }
}
