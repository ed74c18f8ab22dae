use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Use indexmap for insertion-ordered lookups and rustc_hash for fast hashing
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Empty map with room for `capacity` entries
pub(crate) fn fx_index_map<K, V>(capacity: usize) -> FxIndexMap<K, V> {
    FxIndexMap::with_capacity_and_hasher(capacity, Default::default())
}
