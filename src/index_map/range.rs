use alloc::vec::Vec;
use core::borrow::Borrow;

use super::{IndexMap, Iter};

impl<K, V> IndexMap<K, V> {
    /// Index span `[low, high)` holding every key in `min..=max`.
    ///
    /// `low` is the position of `min`; `high` is one past `max` if present,
    /// otherwise its insertion point. An inverted range collapses to `low..low`.
    fn span<Q>(&self, min: &Q, max: &Q) -> (usize, usize)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let low = self.raw.search(min).index();
        let high = self.raw.search(max).upper_bound();
        (low, high.max(low))
    }

    /// Borrows the keys and values whose keys lie in `min..=max`.
    ///
    /// Both bounds are inclusive. The result is empty if no key qualifies or
    /// `min > max`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let map = IndexMap::from([(1, 'a'), (3, 'c'), (5, 'e')]);
    /// let (keys, values) = map.range_slices(&2, &5);
    /// assert_eq!(keys, [3, 5]);
    /// assert_eq!(values, ['c', 'e']);
    /// assert!(map.range_slices(&5, &2).0.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn range_slices<Q>(&self, min: &Q, max: &Q) -> (&[K], &[V])
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (low, high) = self.span(min, max);
        (&self.raw.keys()[low..high], &self.raw.values()[low..high])
    }

    /// Copies out the keys and values whose keys lie in `min..=max`.
    ///
    /// The returned vectors are a snapshot; later changes to the map do not
    /// show up in them. See [`range_slices`](Self::range_slices) for a
    /// borrowing version.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let mut map = IndexMap::from([(5, "e"), (1, "a"), (3, "c")]);
    /// let (keys, values) = map.get_range(&2, &5);
    /// map.remove(&3);
    /// assert_eq!(keys, [3, 5]);
    /// assert_eq!(values, ["c", "e"]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n + m) where m is the number of entries returned.
    pub fn get_range<Q>(&self, min: &Q, max: &Q) -> (Vec<K>, Vec<V>)
    where
        K: Borrow<Q> + Clone,
        V: Clone,
        Q: ?Sized + Ord,
    {
        let (keys, values) = self.range_slices(min, max);
        (keys.to_vec(), values.to_vec())
    }

    /// Iterates over the entries whose keys lie in `min..=max`, in ascending
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let map: IndexMap<u32, u32> = (0..10).map(|k| (k, k * k)).collect();
    /// let squares: Vec<_> = map.range(&3, &5).map(|(_, v)| *v).collect();
    /// assert_eq!(squares, [9, 16, 25]);
    /// ```
    pub fn range<Q>(&self, min: &Q, max: &Q) -> Iter<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (keys, values) = self.range_slices(min, max);
        Iter::new(keys, values)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;
    use proptest::prelude::*;

    fn odd_map() -> IndexMap<u32, char> {
        IndexMap::from([(1, 'a'), (3, 'c'), (5, 'e')])
    }

    #[test]
    fn bounds_are_inclusive() {
        let map = odd_map();
        assert_eq!(map.get_range(&1, &5), (vec![1, 3, 5], vec!['a', 'c', 'e']));
        assert_eq!(map.get_range(&3, &3), (vec![3], vec!['c']));
    }

    #[test]
    fn upper_bound_between_keys_excludes_next_key() {
        let map = odd_map();
        assert_eq!(map.get_range(&2, &4), (vec![3], vec!['c']));
        assert_eq!(map.get_range(&0, &0), (Vec::new(), Vec::new()));
        assert_eq!(map.get_range(&6, &9), (Vec::new(), Vec::new()));
    }

    #[test]
    fn inverted_range_is_empty() {
        let map = odd_map();
        assert_eq!(map.get_range(&5, &1), (Vec::new(), Vec::new()));
        assert_eq!(map.get_range(&4, &2), (Vec::new(), Vec::new()));
        assert_eq!(map.range(&5, &1).count(), 0);
    }

    #[test]
    fn empty_map_range() {
        let map: IndexMap<u32, char> = IndexMap::new();
        let (keys, values) = map.range_slices(&0, &100);
        assert!(keys.is_empty());
        assert!(values.is_empty());
    }

    proptest! {
        #[test]
        fn range_matches_filter(
            entries in proptest::collection::vec((0u16..500, any::<u8>()), 0..200),
            min in 0u16..500,
            max in 0u16..500,
        ) {
            let map: IndexMap<u16, u8> = entries.into_iter().collect();
            let expected: Vec<(u16, u8)> = map.iter().filter(|(k, _)| min <= **k && **k <= max).map(|(k, v)| (*k, *v)).collect();
            let actual: Vec<(u16, u8)> = map.range(&min, &max).map(|(k, v)| (*k, *v)).collect();
            prop_assert_eq!(&actual, &expected);

            let (keys, values) = map.get_range(&min, &max);
            prop_assert_eq!(keys.len(), values.len());
            prop_assert!(keys.iter().zip(&values).map(|(k, v)| (*k, *v)).eq(expected));
        }
    }
}
