//! Search results.

/// Outcome of a search: the node that was found, or nothing.
///
/// Lists return `Maybe<K>` where `K` is the node's key. Detaching a node
/// never frees its storage slot, so a `Just` key stays valid until the
/// caller removes the slot from storage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Maybe<T> {
    /// A match was found.
    Just(T),
    /// Nothing matched.
    #[default]
    Nothing,
}

impl<T> Maybe<T> {
    /// Returns `true` for [`Maybe::Just`].
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Returns `true` for [`Maybe::Nothing`].
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Returns the found value, if any.
    #[inline]
    pub fn just(self) -> Option<T> {
        self.into()
    }

    /// Maps the found value.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Maybe::Just(v) => Maybe::Just(f(v)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::Just(v),
            None => Maybe::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Just(v) => Some(v),
            Maybe::Nothing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags() {
        let found: Maybe<u32> = Maybe::Just(3);
        assert!(found.is_just());
        assert!(!found.is_nothing());

        let missing: Maybe<u32> = Maybe::Nothing;
        assert!(missing.is_nothing());
        assert_eq!(missing, Maybe::default());
    }

    #[test]
    fn option_conversions() {
        assert_eq!(Maybe::from(Some('x')), Maybe::Just('x'));
        assert_eq!(Maybe::<char>::from(None), Maybe::Nothing);
        assert_eq!(Maybe::Just(4).just(), Some(4));
        assert_eq!(Maybe::Just(4).map(|k| k * 2), Maybe::Just(8));
        assert_eq!(Maybe::<u8>::Nothing.map(|k| k + 1).just(), None);
    }
}
