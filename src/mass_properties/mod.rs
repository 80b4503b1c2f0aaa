//! Volume and centroid of pore bodies.

pub use self::closed_form::{cube_volume, sphere_volume};
pub use self::hull_volume::{hull_volume_and_centroid, try_hull_volume_and_centroid, HullProperties};

mod closed_form;
mod hull_volume;
