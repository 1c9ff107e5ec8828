use core::fmt;

use super::IndexMap;
use crate::raw::RawIndexMap;

/// A forward walk over an `IndexMap` that tolerates changes to the map
/// between steps.
///
/// This `struct` is created by the [`cursor_mut`] method on [`IndexMap`].
///
/// Unlike [`Iter`](super::Iter), the cursor does not lock the map for its
/// whole lifetime: after each step the caller may insert or remove entries
/// through [`map_mut`](Self::map_mut), [`insert`](Self::insert) or
/// [`remove_current`](Self::remove_current), and the walk carries on from the
/// first key greater than the last one it yielded. Keys inserted behind the
/// cursor are not visited; keys inserted ahead of it are.
///
/// The cursor remembers the last key it yielded rather than trusting a raw
/// index. When that index no longer holds the key, the key is looked up again.
/// Once the cursor runs past the last entry it stays finished.
///
/// # Examples
///
/// ```
/// use flat_index_map::IndexMap;
///
/// let mut map = IndexMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
/// let mut visited = Vec::new();
///
/// let mut cursor = map.cursor_mut();
/// while let Some((&key, _)) = cursor.next() {
///     visited.push(key);
///     if key == 2 {
///         cursor.remove_current();
///     }
/// }
///
/// assert_eq!(visited, [1, 2, 3]);
/// assert!(map.keys().eq([1, 3].iter()));
/// ```
///
/// [`cursor_mut`]: IndexMap::cursor_mut
pub struct CursorMut<'a, K, V> {
    map: &'a mut IndexMap<K, V>,
    state: State<K>,
}

enum State<K> {
    /// Nothing yielded yet.
    Fresh,
    /// `key` was yielded last, from slot `index`.
    At { index: usize, key: K },
    Finished,
}

impl<K, V> IndexMap<K, V> {
    /// Returns a cursor positioned before the first entry.
    ///
    /// See [`CursorMut`] for how it behaves when the map changes mid-walk.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, K, V> {
        CursorMut {
            map: self,
            state: State::Fresh,
        }
    }
}

/// Slot to visit after `last`, which was yielded from `index`.
fn next_index<K: Ord, V>(raw: &RawIndexMap<K, V>, index: usize, last: &K) -> usize {
    if raw.key(index) == Some(last) {
        return index + 1;
    }
    // Something shifted the slots; find `last` again. If it was removed, its
    // insertion point already holds the next greater key.
    raw.search(last).upper_bound()
}

impl<K: Ord + Clone, V> CursorMut<'_, K, V> {
    /// Advances to the next entry and returns it, or `None` once the walk is
    /// over.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<(&K, &mut V)> {
        let index = match &self.state {
            State::Fresh => 0,
            State::At { index, key } => next_index(&self.map.raw, *index, key),
            State::Finished => return None,
        };

        let Some(key) = self.map.raw.key(index) else {
            self.state = State::Finished;
            return None;
        };
        self.state = State::At {
            index,
            key: key.clone(),
        };
        Some(self.map.raw.slot_mut(index))
    }

    /// Returns the key most recently yielded by [`next`](Self::next).
    ///
    /// The key may no longer be in the map if it was removed since.
    #[must_use]
    pub fn current_key(&self) -> Option<&K> {
        match &self.state {
            State::At { key, .. } => Some(key),
            State::Fresh | State::Finished => None,
        }
    }

    /// Removes the entry most recently yielded, if it is still present.
    ///
    /// The next call to [`next`](Self::next) yields the entry that followed it.
    pub fn remove_current(&mut self) -> Option<(K, V)> {
        match &self.state {
            State::At { index, key } if self.map.raw.key(*index) == Some(key) => Some(self.map.raw.remove_at(*index)),
            State::At { key, .. } => self.map.raw.remove_entry(key),
            State::Fresh | State::Finished => None,
        }
    }

    /// Inserts a pair into the underlying map.
    ///
    /// The new entry is visited later in this walk only if its key is greater
    /// than [`current_key`](Self::current_key).
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }
}

impl<K, V> CursorMut<'_, K, V> {
    /// Shared access to the map being walked.
    #[must_use]
    pub fn map(&self) -> &IndexMap<K, V> {
        self.map
    }

    /// Full access to the map being walked. Any change is allowed; the next
    /// step re-locates the cursor.
    pub fn map_mut(&mut self) -> &mut IndexMap<K, V> {
        self.map
    }
}

impl<K: fmt::Debug, V> fmt::Debug for CursorMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("CursorMut");
        match &self.state {
            State::Fresh => s.field("state", &"fresh"),
            State::At { index, key } => s.field("index", index).field("key", key),
            State::Finished => s.field("state", &"finished"),
        };
        s.field("len", &self.map.len()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    fn abc() -> IndexMap<u32, char> {
        IndexMap::from([(1, 'a'), (2, 'b'), (3, 'c')])
    }

    #[test]
    fn plain_walk_matches_iter() {
        let mut map = abc();
        let mut seen = Vec::new();
        let mut cursor = map.cursor_mut();
        while let Some((&k, v)) = cursor.next() {
            *v = v.to_ascii_uppercase();
            seen.push(k);
        }
        assert_eq!(seen, [1, 2, 3]);
        assert!(cursor.next().is_none());
        assert!(map.values().eq(['A', 'B', 'C'].iter()));
    }

    #[test]
    fn empty_map_finishes_immediately() {
        let mut map: IndexMap<u32, char> = IndexMap::new();
        let mut cursor = map.cursor_mut();
        assert!(cursor.next().is_none());
        assert!(cursor.current_key().is_none());
        assert!(cursor.remove_current().is_none());
    }

    #[test]
    fn deleting_yielded_key_does_not_skip_or_revisit() {
        let mut map = abc();
        let mut seen = Vec::new();
        let mut cursor = map.cursor_mut();
        while let Some((&k, &mut v)) = cursor.next() {
            seen.push((k, v));
            if k == 2 {
                assert_eq!(cursor.map_mut().remove(&2), Some('b'));
            }
        }
        assert_eq!(seen, [(1, 'a'), (2, 'b'), (3, 'c')]);
        assert!(map.keys().eq([1, 3].iter()));
    }

    #[test]
    fn deleting_every_key_as_visited() {
        let mut map: IndexMap<u32, u32> = (0..10).map(|k| (k, k)).collect();
        let mut seen = Vec::new();
        let mut cursor = map.cursor_mut();
        while let Some((&k, _)) = cursor.next() {
            seen.push(k);
            assert_eq!(cursor.remove_current(), Some((k, k)));
            assert_eq!(cursor.remove_current(), None);
        }
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
        assert!(map.is_empty());
    }

    #[test]
    fn inserts_behind_are_skipped_and_ahead_are_visited() {
        let mut map = IndexMap::from([(10, ()), (20, ()), (30, ())]);
        let mut seen = Vec::new();
        let mut cursor = map.cursor_mut();
        while let Some((&k, _)) = cursor.next() {
            seen.push(k);
            if k == 20 {
                cursor.insert(5, ());
                cursor.insert(15, ());
                cursor.insert(25, ());
            }
        }
        assert_eq!(seen, [10, 20, 25, 30]);
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn removing_keys_ahead_shortens_walk() {
        let mut map = abc();
        let mut seen = Vec::new();
        let mut cursor = map.cursor_mut();
        while let Some((&k, _)) = cursor.next() {
            seen.push(k);
            if k == 1 {
                cursor.map_mut().remove(&2);
            }
        }
        assert_eq!(seen, [1, 3]);
    }

    #[test]
    fn finished_cursor_stays_finished() {
        let mut map = abc();
        let mut cursor = map.cursor_mut();
        while cursor.next().is_some() {}
        cursor.insert(99, 'z');
        assert!(cursor.next().is_none());
        assert_eq!(cursor.map().len(), 4);
    }

    #[test]
    fn clearing_mid_walk_ends_it() {
        let mut map = abc();
        let mut cursor = map.cursor_mut();
        assert_eq!(cursor.next().map(|(k, _)| *k), Some(1));
        cursor.map_mut().clear();
        assert!(cursor.next().is_none());
    }

    #[test]
    fn debug_reports_position() {
        let mut map = abc();
        let mut cursor = map.cursor_mut();
        assert_eq!(format!("{cursor:?}"), "CursorMut { state: \"fresh\", len: 3 }");
        cursor.next();
        assert_eq!(format!("{cursor:?}"), "CursorMut { index: 0, key: 1, len: 3 }");
        assert_eq!(cursor.current_key(), Some(&1));
    }

    proptest! {
        #[test]
        fn removal_during_walk_visits_each_survivor_once(
            keys in proptest::collection::btree_set(0u16..1_000, 0..100),
            drop_every in 1usize..5,
        ) {
            let mut map: IndexMap<u16, ()> = keys.iter().map(|&k| (k, ())).collect();
            let mut seen = Vec::new();
            let mut cursor = map.cursor_mut();
            let mut step = 0;
            while let Some((&k, _)) = cursor.next() {
                seen.push(k);
                if step % drop_every == 0 {
                    cursor.remove_current();
                }
                step += 1;
            }
            let expected: Vec<u16> = keys.iter().copied().collect();
            prop_assert_eq!(seen, expected);
            map.raw.validate_invariants();
        }
    }
}
