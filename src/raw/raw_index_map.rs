use alloc::vec::Vec;
use core::borrow::Borrow;
use core::mem;

use super::search::{SearchResult, search};

/// The core storage backing `IndexMap`.
///
/// `keys` is strictly ascending and `keys[i]` is paired with `values[i]`.
/// Nothing in this layer validates that; callers that build from parts do.
#[derive(Clone)]
pub(crate) struct RawIndexMap<K, V> {
    /// Sorted keys.
    keys: Vec<K>,
    /// Values, in lockstep with `keys`.
    values: Vec<V>,
}

impl<K, V> RawIndexMap<K, V> {
    /// Creates a new, empty map.
    pub(crate) const fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Adopts `keys` and `values` as-is.
    pub(crate) fn from_parts(keys: Vec<K>, values: Vec<V>) -> Self {
        debug_assert_eq!(keys.len(), values.len());
        Self { keys, values }
    }

    pub(crate) fn into_parts(self) -> (Vec<K>, Vec<V>) {
        (self.keys, self.values)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Capacity is the smaller of the two backing vectors.
    pub(crate) fn capacity(&self) -> usize {
        self.keys.capacity().min(self.values.capacity())
    }

    pub(crate) fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    #[inline]
    pub(crate) fn keys(&self) -> &[K] {
        &self.keys
    }

    #[inline]
    pub(crate) fn values(&self) -> &[V] {
        &self.values
    }

    #[inline]
    pub(crate) fn values_mut(&mut self) -> &mut [V] {
        &mut self.values
    }

    /// Returns the key slice alongside a mutable value slice.
    #[inline]
    pub(crate) fn split_mut(&mut self) -> (&[K], &mut [V]) {
        (&self.keys, &mut self.values)
    }

    /// Returns the key at `index`, if any.
    #[inline]
    pub(crate) fn key(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    /// Returns the entry at `index`.
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub(crate) fn slot(&self, index: usize) -> (&K, &V) {
        (&self.keys[index], &self.values[index])
    }

    /// Returns the entry at `index` with a mutable value.
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub(crate) fn slot_mut(&mut self, index: usize) -> (&K, &mut V) {
        (&self.keys[index], &mut self.values[index])
    }

    /// Locates `key`, or the position it would be inserted at.
    #[inline]
    pub(crate) fn search<Q>(&self, key: &Q) -> SearchResult
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        search(&self.keys, key)
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.search(key) {
            SearchResult::Found(index) => Some(&self.values[index]),
            SearchResult::NotFound(_) => None,
        }
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.search(key) {
            SearchResult::Found(index) => Some(&mut self.values[index]),
            SearchResult::NotFound(_) => None,
        }
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.search(key) {
            SearchResult::Found(index) => Some(self.slot(index)),
            SearchResult::NotFound(_) => None,
        }
    }

    /// Overwrites the value of an existing key in place, or inserts the pair at
    /// its sorted position, shifting everything after it up by one.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        match self.search(&key) {
            SearchResult::Found(index) => Some(mem::replace(&mut self.values[index], value)),
            SearchResult::NotFound(index) => {
                self.insert_at(index, key, value);
                None
            }
        }
    }

    /// Inserts a key and value at the given position.
    pub(crate) fn insert_at(&mut self, index: usize, key: K, value: V) {
        self.keys.insert(index, key);
        self.values.insert(index, value);
    }

    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.search(key) {
            SearchResult::Found(index) => Some(self.remove_at(index)),
            SearchResult::NotFound(_) => None,
        }
    }

    /// Removes the key and value at the given position, shifting everything
    /// after it down by one.
    pub(crate) fn remove_at(&mut self, index: usize) -> (K, V) {
        let key = self.keys.remove(index);
        let value = self.values.remove(index);
        (key, value)
    }

    /// Pops the first key and value.
    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        if self.keys.is_empty() { None } else { Some(self.remove_at(0)) }
    }

    /// Pops the last key and value.
    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let key = self.keys.pop()?;
        let value = self.values.pop()?;
        Some((key, value))
    }

    /// Keeps only the entries for which `f` returns `true`.
    ///
    /// The predicate runs over every entry before anything is removed, so a
    /// panic inside `f` leaves the map untouched.
    pub(crate) fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let keep: Vec<bool> = self.keys.iter().zip(self.values.iter_mut()).map(|(k, v)| f(k, v)).collect();

        let mut flags = keep.iter();
        self.keys.retain(|_| flags.next().copied().unwrap_or(true));
        let mut flags = keep.iter();
        self.values.retain(|_| flags.next().copied().unwrap_or(true));
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;
    use proptest::prelude::*;

    impl<K: Ord, V> RawIndexMap<K, V> {
        /// Panics if the keys are not strictly ascending or the two vectors
        /// have drifted apart in length.
        pub(crate) fn validate_invariants(&self) {
            assert_eq!(self.keys.len(), self.values.len(), "keys and values differ in length");
            for i in 1..self.keys.len() {
                assert!(self.keys[i - 1] < self.keys[i], "keys not strictly ascending at indices {} and {}", i - 1, i);
            }
        }
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut raw = RawIndexMap::new();
        assert_eq!(raw.insert(3, "c"), None);
        assert_eq!(raw.insert(1, "a"), None);
        assert_eq!(raw.insert(3, "C"), Some("c"));
        assert_eq!(raw.len(), 2);
        assert_eq!(raw.keys(), &[1, 3]);
        assert_eq!(raw.values(), &["a", "C"]);
        raw.validate_invariants();
    }

    #[test]
    fn remove_shifts_down() {
        let mut raw = RawIndexMap::from_parts(vec![1, 2, 3], vec!['a', 'b', 'c']);
        assert_eq!(raw.remove_entry(&2), Some((2, 'b')));
        assert_eq!(raw.remove_entry(&2), None);
        assert_eq!(raw.slot(1), (&3, &'c'));
        raw.validate_invariants();
    }

    #[test]
    fn pop_both_ends() {
        let mut raw = RawIndexMap::from_parts(vec![1, 2, 3], vec![10, 20, 30]);
        assert_eq!(raw.pop_first(), Some((1, 10)));
        assert_eq!(raw.pop_last(), Some((3, 30)));
        assert_eq!(raw.pop_last(), Some((2, 20)));
        assert_eq!(raw.pop_first(), None);
        assert_eq!(raw.pop_last(), None);
        assert!(raw.is_empty());
    }

    #[test]
    fn retain_keeps_lockstep() {
        let mut raw = RawIndexMap::from_parts(vec![1, 2, 3, 4, 5], vec![10, 20, 30, 40, 50]);
        raw.retain(|k, v| {
            *v += 1;
            k % 2 == 1
        });
        assert_eq!(raw.keys(), &[1, 3, 5]);
        assert_eq!(raw.values(), &[11, 31, 51]);
        raw.validate_invariants();
    }

    #[test]
    fn with_capacity_reserves_both_sides() {
        let raw: RawIndexMap<u8, u64> = RawIndexMap::with_capacity(16);
        assert!(raw.capacity() >= 16);
        assert!(raw.is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn invariants_hold_under_random_ops(ops in proptest::collection::vec((any::<bool>(), 0u16..200), 0..500)) {
            let mut raw = RawIndexMap::new();
            for (is_insert, key) in ops {
                if is_insert {
                    raw.insert(key, u32::from(key) * 3);
                } else {
                    raw.remove_entry(&key);
                }
                raw.validate_invariants();
            }
            for (k, v) in raw.keys().iter().zip(raw.values()) {
                prop_assert_eq!(u32::from(*k) * 3, *v);
            }
        }
    }
}
