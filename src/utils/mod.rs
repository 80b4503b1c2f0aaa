//! Various unsorted geometrical operators.

pub use self::center::center;
pub use self::cleanup::remove_unused_points;
pub use self::sorted_pair::SortedPair;
pub use self::unique_points::{unique_points, DEDUP_DECIMALS};

mod center;
mod cleanup;
pub mod hashmap;
mod sorted_pair;
mod unique_points;
