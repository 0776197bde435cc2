//! Fast hash map, hash set, and ordered map type aliases.
//!
//! Lookups that never depend on order (shadowed names, IOC codes) use
//! [`FxHashMap`] and [`FxHashSet`] from the `rustc-hash` crate. Tables whose
//! iteration order is observable (the effective entry set, the alternate-code
//! table scanned by `alpha2`) use [`FxIndexMap`], an `indexmap::IndexMap` with
//! the same hasher, so insertion order survives overlays and removals.
//!
//! # Examples
//!
//! ```
//! use games_core::{FxHashMap, FxIndexMap, fx_hash_map, fx_index_map};
//!
//! let mut map: FxHashMap<String, i32> = fx_hash_map();
//! map.insert("key".to_owned(), 42);
//!
//! let mut ordered: FxIndexMap<&str, i32> = fx_index_map();
//! ordered.insert("b", 2);
//! ordered.insert("a", 1);
//! assert_eq!(ordered.keys().copied().collect::<Vec<_>>(), ["b", "a"]);
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

/// The hasher used by [`FxHashMap`], [`FxHashSet`] and [`FxIndexMap`].
pub type FxBuildHasher = rustc_hash::FxBuildHasher;

/// An insertion-ordered map using the Fx hash algorithm.
///
/// Re-inserting an existing key keeps its position, and
/// [`shift_remove`](indexmap::IndexMap::shift_remove) keeps the order of the
/// remaining keys.
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

/// Creates a new empty [`FxHashMap`].
#[inline]
#[must_use]
pub fn fx_hash_map<K, V>() -> FxHashMap<K, V> {
    FxHashMap::default()
}

/// Creates a new empty [`FxHashSet`].
#[inline]
#[must_use]
pub fn fx_hash_set<V>() -> FxHashSet<V> {
    FxHashSet::default()
}

/// Creates a new empty [`FxIndexMap`].
///
/// # Examples
///
/// ```
/// use games_core::fx_index_map;
///
/// let map: games_core::FxIndexMap<String, i32> = fx_index_map();
/// assert!(map.is_empty());
/// ```
#[inline]
#[must_use]
pub fn fx_index_map<K, V>() -> FxIndexMap<K, V> {
    FxIndexMap::default()
}

/// Creates a new [`FxIndexMap`] with the specified capacity.
#[inline]
#[must_use]
pub fn fx_index_map_with_capacity<K, V>(capacity: usize) -> FxIndexMap<K, V> {
    FxIndexMap::with_capacity_and_hasher(capacity, FxBuildHasher::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fx_hash_map_operations() {
        let mut map: FxHashMap<&str, i32> = fx_hash_map();
        map.insert("one", 1);
        assert_eq!(map.get("one"), Some(&1));
        assert_eq!(map.get("two"), None);
    }

    #[test]
    fn test_fx_hash_set_operations() {
        let mut set: FxHashSet<&str> = fx_hash_set();
        set.insert("one");
        assert!(set.contains("one"));
        assert!(!set.contains("two"));
    }

    #[test]
    fn test_index_map_keeps_position_on_reinsert() {
        let mut map: FxIndexMap<&str, i32> = fx_index_map();
        map.insert("WOW", 1);
        map.insert("POE", 2);
        map.insert("WOW", 3);
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, ["WOW", "POE"]);
        assert_eq!(map.get("WOW"), Some(&3));
    }

    #[test]
    fn test_index_map_shift_remove_keeps_order() {
        let mut map: FxIndexMap<&str, i32> = fx_index_map_with_capacity(4);
        map.insert("A", 1);
        map.insert("B", 2);
        map.insert("C", 3);
        map.shift_remove("B");
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, ["A", "C"]);
    }
}
