//! Memoised sequence views and the built-in `AtIndex` implementations.

use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::hash::BuildHasher;
use std::sync::{Arc, OnceLock};

use super::{AtIndex, resolve_index, scalar_at};

type SharedSequence = Arc<dyn Any + Send + Sync>;

/// A lazily computed, memoised sequence view owned by one container.
///
/// Values that are iterable but not random-access (sets, maps, strings) are
/// materialised into a `Vec` on the first indexed access and the result is
/// kept for the lifetime of the container. Containers are immutable, so the
/// view never needs invalidation.
///
/// A `SequenceCache` is only handed out by [`Maybe`](crate::Maybe) to
/// [`AtIndex`] implementations.
#[derive(Clone, Default)]
pub struct SequenceCache {
    cell: OnceLock<SharedSequence>,
}

impl SequenceCache {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Returns the memoised sequence, building it with `build` on first use.
    ///
    /// `build` runs at most once per container. If the view was already
    /// populated with a different item type, a fresh, uncached sequence is
    /// built instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::access::{AtIndex, SequenceCache, resolve_index};
    /// use maybe_chain::some;
    /// use std::collections::BTreeSet;
    ///
    /// struct Letters(BTreeSet<char>);
    ///
    /// impl AtIndex for Letters {
    ///     type Item = char;
    ///
    ///     fn item_at(&self, index: isize, cache: &SequenceCache) -> Option<char> {
    ///         let letters = cache.get_or_materialize(|| self.0.iter().copied().collect());
    ///         resolve_index(letters.len(), index).and_then(|position| letters.get(position).copied())
    ///     }
    /// }
    ///
    /// let letters = some(Letters(['c', 'a', 'b'].into_iter().collect()));
    /// assert_eq!(letters.at(0).unwrap(), 'a');
    /// assert_eq!(letters.at(-1).unwrap(), 'c');
    /// ```
    pub fn get_or_materialize<I, F>(&self, build: F) -> Cow<'_, [I]>
    where
        I: Clone + Send + Sync + 'static,
        F: FnOnce() -> Vec<I>,
    {
        let mut build = Some(build);
        let stored = self.cell.get_or_init(|| {
            let items: Vec<I> = build.take().map_or_else(Vec::new, |build| build());
            tracing::trace!(
                length = items.len(),
                item_type = std::any::type_name::<I>(),
                "materialized sequence view"
            );
            Arc::new(items)
        });

        match stored.downcast_ref::<Vec<I>>() {
            Some(items) => Cow::Borrowed(items.as_slice()),
            None => Cow::Owned(build.map_or_else(Vec::new, |build| build())),
        }
    }

    /// Returns `true` once the view has been materialised.
    #[inline]
    pub fn is_materialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl fmt::Debug for SequenceCache {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SequenceCache")
            .field("materialized", &self.is_materialized())
            .finish()
    }
}

// =============================================================================
// Random-access sequences
// =============================================================================

fn item_of<I: Clone>(items: &[I], index: isize) -> Option<I> {
    resolve_index(items.len(), index).and_then(|position| items.get(position).cloned())
}

impl<T: Clone> AtIndex for [T] {
    type Item = T;

    fn item_at(&self, index: isize, _cache: &SequenceCache) -> Option<T> {
        item_of(self, index)
    }
}

impl<T: Clone> AtIndex for Vec<T> {
    type Item = T;

    fn item_at(&self, index: isize, _cache: &SequenceCache) -> Option<T> {
        item_of(self, index)
    }
}

impl<T: Clone, const N: usize> AtIndex for [T; N] {
    type Item = T;

    fn item_at(&self, index: isize, _cache: &SequenceCache) -> Option<T> {
        item_of(self, index)
    }
}

impl<T: Clone> AtIndex for VecDeque<T> {
    type Item = T;

    fn item_at(&self, index: isize, _cache: &SequenceCache) -> Option<T> {
        resolve_index(self.len(), index).and_then(|position| self.get(position).cloned())
    }
}

impl<A: AtIndex + ?Sized> AtIndex for &A {
    type Item = A::Item;

    fn item_at(&self, index: isize, cache: &SequenceCache) -> Option<Self::Item> {
        (**self).item_at(index, cache)
    }
}

impl<A: AtIndex + ?Sized> AtIndex for Box<A> {
    type Item = A::Item;

    fn item_at(&self, index: isize, cache: &SequenceCache) -> Option<Self::Item> {
        (**self).item_at(index, cache)
    }
}

// =============================================================================
// Strings
// =============================================================================

impl AtIndex for str {
    type Item = String;

    /// Indexes the characters of the string.
    ///
    /// An empty string is falsy and therefore treated as a plain value:
    /// index `0` or `-1` yields the empty string itself.
    fn item_at(&self, index: isize, cache: &SequenceCache) -> Option<String> {
        if self.is_empty() {
            return scalar_at(&String::new(), index);
        }
        let characters = cache.get_or_materialize(|| self.chars().map(String::from).collect());
        item_of(&characters, index)
    }
}

impl AtIndex for String {
    type Item = String;

    fn item_at(&self, index: isize, cache: &SequenceCache) -> Option<String> {
        self.as_str().item_at(index, cache)
    }
}

// =============================================================================
// Iterable collections
// =============================================================================

macro_rules! impl_at_index_for_iterable {
    ($($collection:ident),+ $(,)?) => {
        $(
            impl<T> AtIndex for $collection<T>
            where
                T: Clone + Send + Sync + 'static,
            {
                type Item = T;

                fn item_at(&self, index: isize, cache: &SequenceCache) -> Option<T> {
                    let items = cache.get_or_materialize(|| self.iter().cloned().collect());
                    item_of(&items, index)
                }
            }
        )+
    };
}

impl_at_index_for_iterable!(BTreeSet, LinkedList, BinaryHeap);

impl<T, S> AtIndex for HashSet<T, S>
where
    T: Clone + Send + Sync + 'static,
    S: BuildHasher,
{
    type Item = T;

    fn item_at(&self, index: isize, cache: &SequenceCache) -> Option<T> {
        let items = cache.get_or_materialize(|| self.iter().cloned().collect());
        item_of(&items, index)
    }
}

impl<K, V> AtIndex for BTreeMap<K, V>
where
    K: Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    type Item = (K, V);

    fn item_at(&self, index: isize, cache: &SequenceCache) -> Option<(K, V)> {
        let entries = cache.get_or_materialize(|| {
            self.iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        });
        item_of(&entries, index)
    }
}

impl<K, V, S> AtIndex for HashMap<K, V, S>
where
    K: Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    S: BuildHasher,
{
    type Item = (K, V);

    fn item_at(&self, index: isize, cache: &SequenceCache) -> Option<(K, V)> {
        let entries = cache.get_or_materialize(|| {
            self.iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        });
        item_of(&entries, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn test_materializes_once() {
        let cache = SequenceCache::new();
        let builds = AtomicUsize::new(0);
        for _ in 0..3 {
            let items = cache.get_or_materialize(|| {
                builds.fetch_add(1, Ordering::SeqCst);
                vec![1, 2, 3]
            });
            assert_eq!(items.len(), 3);
        }
        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(cache.is_materialized());
    }

    #[rstest]
    fn test_mismatched_item_type_builds_uncached() {
        let cache = SequenceCache::new();
        let _ = cache.get_or_materialize(|| vec![1_u8]);
        let other = cache.get_or_materialize(|| vec!["a"]);
        assert!(matches!(other, Cow::Owned(_)));
        assert_eq!(&*other, &["a"]);
    }

    #[rstest]
    #[case(0, Some("h"))]
    #[case(-1, Some("i"))]
    #[case(2, None)]
    fn test_string_characters(#[case] index: isize, #[case] expected: Option<&str>) {
        let cache = SequenceCache::new();
        assert_eq!("hi".item_at(index, &cache).as_deref(), expected);
    }

    #[rstest]
    fn test_empty_string_is_plain_value() {
        let cache = SequenceCache::new();
        assert_eq!("".item_at(0, &cache), Some(String::new()));
        assert_eq!("".item_at(1, &cache), None);
        assert!(!cache.is_materialized());
    }
}
