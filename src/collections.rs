use std::hash::BuildHasherDefault;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;


/// Insertion-ordered map with rustc_hash for fast hashing.
/// Tables keyed by vertex are populated in ascending letter order, so
/// iterating them is the fixed enumeration order the tie-break relies on.
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Insertion-ordered set, same hasher. Iteration order is visit order.
pub(crate) type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
