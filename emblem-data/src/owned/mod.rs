//! Lists that own their node storage.
//!
//! [`OwnedList`] bundles a [`List`](crate::List) with a private
//! [`BoxedStorage`](crate::BoxedStorage). Every node it creates is freed
//! when the list is cleared, destroyed or dropped, so callers never pass
//! storage around.
//!
//! Use the raw [`List`](crate::List) instead when several lists share one
//! storage pool or nodes have to move between lists under stable keys.
//!
//! # Example
//!
//! ```
//! use emblem_data::OwnedList;
//!
//! let mut fonts: OwnedList<String> = OwnedList::with_capacity(8);
//! fonts.push_back("serif".to_string()).unwrap();
//! let mono = fonts.push_back("monospace".to_string()).unwrap();
//!
//! assert!(fonts.search(&"monospace".to_string()).is_just());
//! assert_eq!(fonts.remove(mono).as_deref(), Some("monospace"));
//! assert_eq!(fonts.len(), 1);
//! ```

mod list;

pub use list::OwnedList;
