use core::fmt;

/// The reason a pair of key and value vectors was rejected by
/// [`IndexMap::try_from_sorted_parts`](crate::IndexMap::try_from_sorted_parts).
///
/// # Examples
///
/// ```
/// use flat_index_map::{IndexMap, PartsError};
///
/// let err = IndexMap::try_from_sorted_parts(vec![1, 3, 2], vec!["a", "c", "b"]).unwrap_err();
/// assert_eq!(err, PartsError::Unsorted { index: 2 });
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PartsError {
    /// The key and value vectors have different lengths.
    LengthMismatch {
        /// Number of keys supplied.
        keys: usize,
        /// Number of values supplied.
        values: usize,
    },
    /// The key at `index` is not strictly greater than the key before it.
    Unsorted {
        /// Index of the first out-of-order (or duplicate) key.
        index: usize,
    },
}

impl fmt::Display for PartsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartsError::LengthMismatch { keys, values } => {
                write!(f, "{keys} keys were supplied with {values} values")
            }
            PartsError::Unsorted { index } => {
                write!(f, "key at index {index} is not greater than the key before it")
            }
        }
    }
}

impl core::error::Error for PartsError {}
