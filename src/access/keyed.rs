//! Built-in `Pluck` implementations for keyed collections.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::Pluck;

impl<K, V, Q, S> Pluck<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    V: Clone,
    S: BuildHasher,
{
    type Value = V;

    fn has_key(&self, key: &Q) -> bool {
        self.contains_key(key)
    }

    fn pluck_key(&self, key: &Q) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<K, V, Q> Pluck<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
    V: Clone,
{
    type Value = V;

    fn has_key(&self, key: &Q) -> bool {
        self.contains_key(key)
    }

    fn pluck_key(&self, key: &Q) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<P, Q> Pluck<Q> for &P
where
    P: Pluck<Q> + ?Sized,
    Q: ?Sized,
{
    type Value = P::Value;

    fn has_key(&self, key: &Q) -> bool {
        (**self).has_key(key)
    }

    fn pluck_key(&self, key: &Q) -> Option<Self::Value> {
        (**self).pluck_key(key)
    }
}
