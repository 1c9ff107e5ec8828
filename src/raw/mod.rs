mod raw_index_map;
mod search;

pub(crate) use raw_index_map::RawIndexMap;
pub(crate) use search::first_unsorted;
