use core::borrow::Borrow;
use core::cmp::Ordering;

/// Result of searching for a key in a sorted key slice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SearchResult {
    /// Key was found at the given index.
    Found(usize),
    /// Key was not found; index is where it would be inserted.
    NotFound(usize),
}

impl SearchResult {
    /// The position the search settled on, whether or not the key matched.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            SearchResult::Found(index) | SearchResult::NotFound(index) => index,
        }
    }

    /// First index past every key `<=` the searched key.
    #[inline]
    pub(crate) const fn upper_bound(self) -> usize {
        match self {
            SearchResult::Found(index) => index + 1,
            SearchResult::NotFound(index) => index,
        }
    }

    #[inline]
    pub(crate) const fn into_result(self) -> Result<usize, usize> {
        match self {
            SearchResult::Found(index) => Ok(index),
            SearchResult::NotFound(index) => Err(index),
        }
    }
}

/// Binary search over `keys`, which must be strictly ascending.
///
/// `floor` is the inclusive lower bound and `ceil` the exclusive upper bound of
/// the window still in play. The probe sits at the midpoint of that window and
/// the search stops on the first exact match. On a miss, `floor` has converged
/// onto the first key greater than `key` (or `keys.len()`).
#[inline]
pub(crate) fn search<K, Q>(keys: &[K], key: &Q) -> SearchResult
where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
{
    let mut floor = 0;
    let mut ceil = keys.len();

    while floor < ceil {
        let pos = floor + (ceil - floor) / 2;
        match keys[pos].borrow().cmp(key) {
            Ordering::Greater => ceil = pos,
            Ordering::Less => floor = pos + 1,
            Ordering::Equal => return SearchResult::Found(pos),
        }
    }

    SearchResult::NotFound(floor)
}

/// Returns the first index whose key is not strictly greater than its
/// predecessor, or `None` if `keys` is strictly ascending.
pub(crate) fn first_unsorted<K: Ord>(keys: &[K]) -> Option<usize> {
    keys.windows(2).position(|pair| pair[0] >= pair[1]).map(|i| i + 1)
}
