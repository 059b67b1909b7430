//! Generic containers for the Emblem document typesetter.
//!
//! Document trees, style tables and output queues all need the same few
//! primitives: a list whose nodes outlive any one list, a total order per
//! payload type, a hash that agrees with that order, and a search result
//! that may be empty. This crate provides exactly those.
//!
//! # Design
//!
//! Lists do not own their nodes:
//!
//! ```text
//! Storage (BoxedStorage, Slab)  - owns ListNode<T>, hands out stable keys
//! List                          - head, tail, len; rewires keys only
//! ```
//!
//! Detaching a node from a list never frees it, so a key found by a search
//! stays valid until the caller frees that slot. [`OwnedList`] bundles a
//! list with its own storage for the common case where nothing is shared.
//!
//! # Quick Start
//!
//! ```
//! use emblem_data::{BoxedListStorage, List, Maybe};
//!
//! let mut storage: BoxedListStorage<usize> = BoxedListStorage::with_capacity(16);
//! let mut pages = List::try_from_iter(&mut storage, [3, 1, 2]).unwrap();
//!
//! let key = pages.search(&storage, &1).just().unwrap();
//! pages.remove(&mut storage, key).unwrap();
//!
//! assert_eq!(pages.iter(&storage).copied().collect::<Vec<_>>(), vec![3, 2]);
//! assert_eq!(pages.search(&storage, &1), Maybe::Nothing);
//!
//! // The node is still in storage until the list is torn down
//! assert_eq!(pages.get(&storage, key), Some(&1));
//! pages.destroy(&mut storage, true, None);
//! ```
//!
//! # Comparators and Hashes
//!
//! [`cmp`] and [`hash`] hold one free function per supported scalar type.
//! [`Element`] binds a type to its pair, so [`List::search`] always uses the
//! element's own ordering; [`List::search_by`] takes any comparator. For
//! lists mixing payload kinds, use [`Payload`].
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`

#![warn(missing_docs)]

pub mod cmp;
pub mod element;
pub mod error;
pub mod hash;
pub mod key;
pub mod list;
pub mod maybe;
pub mod owned;
pub mod payload;
pub mod storage;

pub use cmp::Comparator;
pub use element::{Element, Truthy};
pub use error::LinkError;
pub use hash::Hash;
pub use key::Key;
pub use list::{BoxedListStorage, Iter, Keys, List, ListNode};
pub use maybe::Maybe;
pub use owned::OwnedList;
pub use payload::Payload;
pub use storage::{BoundedStorage, BoxedStorage, Full, Storage, UnboundedStorage};

#[cfg(feature = "slab")]
pub use list::SlabListStorage;
