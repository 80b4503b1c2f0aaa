//! Hash-maps with a fixed hasher state, so that runs are reproducible.

pub use hashbrown::hash_map::Entry;

/// Hashmap using [`hashbrown::HashMap`] with a fixed [`foldhash`] state.
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V, foldhash::fast::FixedState>;
/// Hashset using [`hashbrown::HashSet`] with a fixed [`foldhash`] state.
pub type HashSet<K> = hashbrown::hash_set::HashSet<K, foldhash::fast::FixedState>;
