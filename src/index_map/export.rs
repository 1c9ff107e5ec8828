use alloc::vec::Vec;
use core::fmt;

use super::IndexMap;

impl<K, V> IndexMap<K, V> {
    /// Borrows the backing key and value slices. `keys[i]` is paired with
    /// `values[i]` and the keys are strictly ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let map = IndexMap::from([(2, 'b'), (1, 'a')]);
    /// let (keys, values) = map.as_slices();
    /// assert_eq!(keys, [1, 2]);
    /// assert_eq!(values, ['a', 'b']);
    /// ```
    #[must_use]
    pub fn as_slices(&self) -> (&[K], &[V]) {
        (self.raw.keys(), self.raw.values())
    }

    /// Copies the map out as a `(keys, values)` pair of vectors.
    ///
    /// This is the layout the `serde` feature reads and writes, and the
    /// inverse of [`from_sorted_parts`](Self::from_sorted_parts).
    #[must_use]
    pub fn to_parts(&self) -> (Vec<K>, Vec<V>)
    where
        K: Clone,
        V: Clone,
    {
        (self.raw.keys().to_vec(), self.raw.values().to_vec())
    }

    /// Consumes the map and hands back its key and value vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let map = IndexMap::from_pairs([(3, "c"), (1, "a")]);
    /// let (keys, values) = map.into_parts();
    /// assert_eq!(keys, [1, 3]);
    /// assert_eq!(values, ["a", "c"]);
    /// ```
    #[must_use]
    pub fn into_parts(self) -> (Vec<K>, Vec<V>) {
        self.raw.into_parts()
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Renders `<IndexMap Keys: 1,3 | Values: a,c >` for diagnostics. The output
/// is not meant to be parsed back.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for IndexMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<IndexMap Keys: ")?;
        write_joined(f, self.raw.keys())?;
        f.write_str(" | Values: ")?;
        write_joined(f, self.raw.values())?;
        f.write_str(" >")
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use alloc::vec::Vec;

    use serde::de::{Deserialize, Deserializer, Error};
    use serde::ser::{Serialize, Serializer};

    use super::IndexMap;

    /// Serialized as a `(keys, values)` tuple.
    impl<K: Serialize, V: Serialize> Serialize for IndexMap<K, V> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.as_slices().serialize(serializer)
        }
    }

    /// Rejects input whose keys are out of order or whose vectors differ in
    /// length.
    impl<'de, K, V> Deserialize<'de> for IndexMap<K, V>
    where
        K: Ord + Deserialize<'de>,
        V: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let (keys, values) = <(Vec<K>, Vec<V>)>::deserialize(deserializer)?;
            IndexMap::try_from_sorted_parts(keys, values).map_err(D::Error::custom)
        }
    }
}
