use alloc::vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::{FusedIterator, Zip};
use core::ops::Index;
use core::slice;

use crate::raw::RawIndexMap;

mod construct;
mod cursor;
mod export;
mod range;

pub use cursor::CursorMut;

/// An ordered map stored as two parallel sorted vectors.
///
/// Keys live in one ascending `Vec`, values in another, and `keys[i]` is always
/// paired with `values[i]`. Every operation goes through a single binary
/// search that yields either the key's index or the index it would be inserted
/// at. Lookups are O(log n); inserts and removes are O(n) because they shift
/// the tail of both vectors. In exchange iteration is a linear walk over
/// contiguous memory and a range query costs two binary searches plus the
/// span it returns.
///
/// Prefer this over `BTreeMap` for read-heavy workloads with infrequent
/// mutation, especially when most reads are ordered scans or range queries.
///
/// Keys must have a [total order]. It is a logic error for a key to be
/// modified in such a way that its ordering relative to any other key, as
/// determined by the [`Ord`] trait, changes while it is in the map. The
/// behavior resulting from such a logic error is not specified but will not
/// be undefined behavior.
///
/// # Examples
///
/// ```
/// use flat_index_map::IndexMap;
///
/// let mut planets = IndexMap::new();
/// planets.insert(5, "Jupiter");
/// planets.insert(1, "Mercury");
/// planets.insert(3, "Earth");
///
/// assert_eq!(planets.get(&3), Some(&"Earth"));
/// assert_eq!(planets.len(), 3);
///
/// let (keys, values) = planets.get_range(&2, &5);
/// assert_eq!(keys, [3, 5]);
/// assert_eq!(values, ["Earth", "Jupiter"]);
///
/// assert_eq!(planets.remove(&3), Some("Earth"));
/// let order: Vec<_> = planets.iter().map(|(k, v)| (*k, *v)).collect();
/// assert_eq!(order, [(1, "Mercury"), (5, "Jupiter")]);
/// ```
///
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub struct IndexMap<K, V> {
    raw: RawIndexMap<K, V>,
}

/// An iterator over the entries of an `IndexMap`, in ascending key order.
///
/// This `struct` is created by the [`iter`] and [`range`] methods on
/// [`IndexMap`].
///
/// The iterator borrows the map, so the map cannot change while it is alive.
/// To mutate the map mid-walk use [`IndexMap::cursor_mut`].
///
/// [`iter`]: IndexMap::iter
/// [`range`]: IndexMap::range
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>,
}

/// A mutable iterator over the entries of an `IndexMap`.
///
/// This `struct` is created by the [`iter_mut`] method on [`IndexMap`].
///
/// [`iter_mut`]: IndexMap::iter_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, K, V> {
    inner: Zip<slice::Iter<'a, K>, slice::IterMut<'a, V>>,
}

/// An owning iterator over the entries of an `IndexMap`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`IndexMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: Zip<vec::IntoIter<K>, vec::IntoIter<V>>,
}

/// An iterator over the keys of an `IndexMap`.
///
/// This `struct` is created by the [`keys`] method on [`IndexMap`].
///
/// [`keys`]: IndexMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K> {
    inner: slice::Iter<'a, K>,
}

/// An iterator over the values of an `IndexMap`.
///
/// This `struct` is created by the [`values`] method on [`IndexMap`].
///
/// [`values`]: IndexMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, V> {
    inner: slice::Iter<'a, V>,
}

/// A mutable iterator over the values of an `IndexMap`.
///
/// This `struct` is created by the [`values_mut`] method on [`IndexMap`].
///
/// [`values_mut`]: IndexMap::values_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ValuesMut<'a, V> {
    inner: slice::IterMut<'a, V>,
}

impl<K, V> IndexMap<K, V> {
    /// Makes a new, empty `IndexMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let mut map = IndexMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> IndexMap<K, V> {
        IndexMap { raw: RawIndexMap::new() }
    }

    /// Creates an empty map with room for at least `capacity` entries before
    /// either backing vector reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let map: IndexMap<i32, i32> = IndexMap::with_capacity(32);
    /// assert!(map.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        IndexMap {
            raw: RawIndexMap::with_capacity(capacity),
        }
    }

    /// Returns how many entries the map can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let mut map = IndexMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the map, removing all entries. Capacity is kept.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the index of `key` if it is present, or else the index it
    /// would be inserted at to keep the keys ascending.
    ///
    /// This is the lookup every other operation is built on. `Ok(i)` is the
    /// rank of an existing key; `Err(i)` is the number of keys smaller than
    /// `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let map = IndexMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.position(&20), Ok(1));
    /// assert_eq!(map.position(&25), Err(2));
    /// assert_eq!(map.position(&5), Err(0));
    /// assert_eq!(map.position(&99), Err(3));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn position<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).into_result()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let mut map = IndexMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns the stored key and its value for the supplied key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let mut map = IndexMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.position(key).is_ok()
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key is already present its value is overwritten in place and the
    /// old value is returned; the length does not change. Otherwise the pair is
    /// inserted at its sorted position and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let mut map = IndexMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map[&37], "b");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to find the slot, O(n) to shift the tail on a new key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        self.raw.insert(key, value)
    }

    /// Inserts `key` with a default value, overwriting any value it had.
    ///
    /// With `V = Option<T>` this stores `None`, a key that is present but has no
    /// value yet, which [`get`](Self::get) tells apart from a missing key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let mut map: IndexMap<&str, Option<u32>> = IndexMap::new();
    /// map.insert_key("pending");
    /// assert_eq!(map.get("pending"), Some(&None));
    /// assert_eq!(map.get("missing"), None);
    /// ```
    pub fn insert_key(&mut self, key: K) -> Option<V>
    where
        K: Ord,
        V: Default,
    {
        self.raw.insert(key, V::default())
    }

    /// Removes a key from the map, returning its value if the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let mut map = IndexMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to find the slot, O(n) to shift the tail.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        if self.is_empty() { None } else { Some(self.raw.slot(0)) }
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.len().checked_sub(1).map(|last| self.raw.slot(last))
    }

    /// Removes and returns the entry with the smallest key.
    ///
    /// # Complexity
    ///
    /// O(n), every remaining entry shifts down.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.pop_first()
    }

    /// Removes and returns the entry with the largest key.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.pop_last()
    }

    /// Retains only the entries for which `f` returns `true`, visiting them in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let mut map: IndexMap<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
    /// map.retain(|&k, _| k % 2 == 0);
    /// assert!(map.keys().eq([0, 2, 4, 6].iter()));
    /// ```
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.raw.retain(f);
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let map = IndexMap::from([(3, "c"), (2, "b"), (1, "a")]);
    /// let mut iter = map.iter();
    /// assert_eq!(iter.next(), Some((&1, &"a")));
    /// assert_eq!(iter.next_back(), Some((&3, &"c")));
    /// assert_eq!(iter.next(), Some((&2, &"b")));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.raw.keys(), self.raw.values())
    }

    /// Gets a mutable iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let mut map = IndexMap::from([(1, 10), (2, 20)]);
    /// for (_, value) in map.iter_mut() {
    ///     *value += 1;
    /// }
    /// assert!(map.values().eq([11, 21].iter()));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let (keys, values) = self.raw.split_mut();
        IterMut {
            inner: keys.iter().zip(values.iter_mut()),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K> {
        Keys {
            inner: self.raw.keys().iter(),
        }
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> Values<'_, V> {
        Values {
            inner: self.raw.values().iter(),
        }
    }

    /// Gets a mutable iterator over the values of the map, in order by key.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut {
            inner: self.raw.values_mut().iter_mut(),
        }
    }
}

impl<K: Clone, V: Clone> Clone for IndexMap<K, V> {
    fn clone(&self) -> Self {
        IndexMap { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash> Hash for IndexMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for IndexMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.raw.keys() == other.raw.keys() && self.raw.values() == other.raw.values()
    }
}

impl<K: Eq, V: Eq> Eq for IndexMap<K, V> {}

impl<K: PartialOrd, V: PartialOrd> PartialOrd for IndexMap<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord> Ord for IndexMap<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IndexMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for IndexMap<K, V> {
    fn default() -> Self {
        IndexMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for IndexMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = IndexMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for IndexMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for IndexMap<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a IndexMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut IndexMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K, V> IntoIterator for IndexMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_index_map::IndexMap;
    ///
    /// let map = IndexMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(self) -> IntoIter<K, V> {
        let (keys, values) = self.raw.into_parts();
        IntoIter {
            inner: keys.into_iter().zip(values),
        }
    }
}

impl<K, Q, V> Index<&Q> for IndexMap<K, V>
where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for IndexMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(keys: &'a [K], values: &'a [V]) -> Self {
        Iter {
            inner: keys.iter().zip(values.iter()),
        }
    }
}

impl<'a, K: 'a, V: 'a> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> Default for Iter<'_, K, V> {
    /// Creates an empty `Iter`.
    ///
    /// ```
    /// use flat_index_map::index_map;
    ///
    /// let iter: index_map::Iter<'_, u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter::new(&[], &[])
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K: 'a, V: 'a> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.inner.len()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("remaining", &self.inner.len()).finish()
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<&'a K> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for Keys<'_, K> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for Keys<'_, K> {}
impl<K> FusedIterator for Keys<'_, K> {}

impl<K> Clone for Keys<'_, K> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Keys<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<&'a V> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Values<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}
impl<V> FusedIterator for Values<'_, V> {}

impl<V> Clone for Values<'_, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Values<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    #[inline]
    fn next(&mut self) -> Option<&'a mut V> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for ValuesMut<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {}
impl<V> FusedIterator for ValuesMut<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for ValuesMut<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;
    use static_assertions::assert_eq_size;

    // Two vectors and nothing else; the vectors' pointer niche carries over.
    assert_eq_size!(IndexMap<u64, u64>, [usize; 6]);
    assert_eq_size!(IndexMap<u64, u64>, Option<IndexMap<u64, u64>>);

    #[test]
    fn iterators_agree_on_order() {
        let mut map = IndexMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, [1, 2, 3]);
        let values: Vec<_> = map.values().copied().collect();
        assert_eq!(values, ['a', 'b', 'c']);
        assert_eq!(map.iter().len(), 3);
        assert_eq!(map.iter().rev().map(|(k, _)| *k).collect::<Vec<_>>(), [3, 2, 1]);

        for v in map.values_mut() {
            *v = v.to_ascii_uppercase();
        }
        let owned: Vec<_> = map.into_iter().collect();
        assert_eq!(owned, [(1, 'A'), (2, 'B'), (3, 'C')]);
    }

    #[test]
    fn first_last_and_pops() {
        let mut map = IndexMap::from([(2, "b"), (1, "a"), (3, "c")]);
        assert_eq!(map.first_key_value(), Some((&1, &"a")));
        assert_eq!(map.last_key_value(), Some((&3, &"c")));
        assert_eq!(map.pop_first(), Some((1, "a")));
        assert_eq!(map.pop_last(), Some((3, "c")));
        assert_eq!(map.len(), 1);
        map.clear();
        assert_eq!(map.first_key_value(), None);
        assert_eq!(map.last_key_value(), None);
        map.raw.validate_invariants();
    }

    #[test]
    fn debug_formats() {
        let mut map = IndexMap::from([(1, 10), (2, 20)]);
        assert_eq!(format!("{map:?}"), "{1: 10, 2: 20}");
        assert_eq!(format!("{:?}", map.iter()), "[(1, 10), (2, 20)]");
        assert_eq!(format!("{:?}", map.keys()), "[1, 2]");
        assert_eq!(format!("{:?}", map.values()), "[10, 20]");
        assert_eq!(format!("{:?}", map.values_mut()), "[10, 20]");
        assert_eq!(format!("{:?}", map.iter_mut()), "IterMut { remaining: 2 }");
        assert_eq!(format!("{:?}", map.into_iter()), "IntoIter { remaining: 2 }");
    }

    #[test]
    fn borrowed_keys_lookup() {
        let mut map: IndexMap<alloc::string::String, u32> = IndexMap::new();
        map.insert("beta".into(), 2);
        map.insert("alpha".into(), 1);
        assert_eq!(map.get("alpha"), Some(&1));
        assert_eq!(map.position("beta"), Ok(1));
        assert_eq!(map.position("gamma"), Err(2));
        assert!(map.contains_key("beta"));
        assert_eq!(map.remove("alpha"), Some(1));
        assert!(!map.contains_key("alpha"));
    }

    #[test]
    fn equality_and_ordering() {
        let a = IndexMap::from([(1, 'x'), (2, 'y')]);
        let mut b = IndexMap::new();
        b.insert(2, 'y');
        b.insert(1, 'x');
        assert_eq!(a, b);
        b.insert(3, 'z');
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    #[should_panic(expected = "no entry found for key")]
    fn index_missing_key_panics() {
        let map: IndexMap<i32, i32> = IndexMap::new();
        let _value = map[&1];
    }
}
