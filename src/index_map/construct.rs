use alloc::vec::Vec;
use core::iter;

use super::IndexMap;
use crate::error::PartsError;
use crate::raw::{RawIndexMap, first_unsorted};

impl<K: Ord, V> IndexMap<K, V> {
    /// Builds a map from keys in any order, each paired with `V::default()`.
    ///
    /// Keys are inserted one at a time, so this is O(n²) in the worst case but
    /// accepts any order. A repeated key keeps a single entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let map: IndexMap<u32, Option<&str>> = IndexMap::from_keys([5, 1, 3, 1]);
    /// assert!(map.keys().eq([1, 3, 5].iter()));
    /// assert_eq!(map.get(&3), Some(&None));
    /// ```
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        V: Default,
    {
        let mut map = IndexMap::new();
        for key in keys {
            map.insert_key(key);
        }
        map
    }

    /// Builds a map from keys that are already strictly ascending, each paired
    /// with `V::default()`.
    ///
    /// The order is trusted and only checked in debug builds. Passing unsorted
    /// or duplicate keys in a release build silently breaks every later lookup.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `keys` is not strictly ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let map: IndexMap<u32, u8> = IndexMap::from_sorted_keys(vec![1, 3, 5]);
    /// assert_eq!(map.get(&5), Some(&0));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn from_sorted_keys(keys: Vec<K>) -> Self
    where
        V: Default,
    {
        let values = iter::repeat_with(V::default).take(keys.len()).collect();
        Self::from_sorted_parts(keys, values)
    }

    /// Builds a map from pairs in any order. Later pairs overwrite earlier
    /// ones with the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let map = IndexMap::from_pairs([(5, "e"), (1, "a"), (3, "c")]);
    /// assert!(map.keys().eq([1, 3, 5].iter()));
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    /// Builds a map from pairs already in strictly ascending key order, such
    /// as the iterator of another sorted map.
    ///
    /// The order is trusted and only checked in debug builds.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the keys are not strictly ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use flat_index_map::IndexMap;
    ///
    /// let source = BTreeMap::from([(2, 'b'), (1, 'a')]);
    /// let map = IndexMap::from_sorted_pairs(source);
    /// assert_eq!(map.first_key_value(), Some((&1, &'a')));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn from_sorted_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let (keys, values): (Vec<K>, Vec<V>) = pairs.into_iter().unzip();
        Self::from_sorted_parts(keys, values)
    }

    /// Adopts a key vector and a value vector as the map's storage.
    ///
    /// `keys[i]` becomes paired with `values[i]`. The key order is trusted and
    /// only checked in debug builds; use
    /// [`try_from_sorted_parts`](Self::try_from_sorted_parts) for input that
    /// has not been checked.
    ///
    /// # Panics
    ///
    /// Panics if the vectors differ in length. In debug builds, also panics if
    /// `keys` is not strictly ascending.
    ///
    /// # Complexity
    ///
    /// O(1) in release builds.
    #[must_use]
    pub fn from_sorted_parts(keys: Vec<K>, values: Vec<V>) -> Self {
        assert!(
            keys.len() == values.len(),
            "`IndexMap::from_sorted_parts()` - `keys` and `values` differ in length!"
        );
        debug_assert!(
            first_unsorted(&keys).is_none(),
            "`IndexMap::from_sorted_parts()` - `keys` are not strictly ascending!"
        );
        IndexMap {
            raw: RawIndexMap::from_parts(keys, values),
        }
    }

    /// Adopts a key vector and a value vector after checking that they have
    /// the same length and that the keys are strictly ascending.
    ///
    /// # Errors
    ///
    /// Returns [`PartsError::LengthMismatch`] if the lengths differ, or
    /// [`PartsError::Unsorted`] naming the first key that is not greater than
    /// its predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::{IndexMap, PartsError};
    ///
    /// let map = IndexMap::try_from_sorted_parts(vec![1, 2], vec!['a', 'b']).unwrap();
    /// assert_eq!(map.len(), 2);
    ///
    /// let err = IndexMap::try_from_sorted_parts(vec![1, 2], vec!['a']).unwrap_err();
    /// assert_eq!(err, PartsError::LengthMismatch { keys: 2, values: 1 });
    /// ```
    pub fn try_from_sorted_parts(keys: Vec<K>, values: Vec<V>) -> Result<Self, PartsError> {
        if keys.len() != values.len() {
            return Err(PartsError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        if let Some(index) = first_unsorted(&keys) {
            return Err(PartsError::Unsorted { index });
        }
        Ok(IndexMap {
            raw: RawIndexMap::from_parts(keys, values),
        })
    }
}
