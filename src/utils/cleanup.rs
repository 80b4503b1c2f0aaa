use crate::math::{Point, Real};

/// Removes from `points` every point that no triangle of `idx` references, and
/// renumbers `idx` accordingly.
///
/// The remaining points keep their relative order.
pub fn remove_unused_points(points: &mut Vec<Point<Real>>, idx: &mut [[u32; 3]]) {
    let mut new_ids = vec![u32::MAX; points.len()];

    for v in idx.iter().flatten() {
        new_ids[*v as usize] = 0;
    }

    let mut next = 0;
    for id in new_ids.iter_mut().filter(|id| **id == 0) {
        *id = next;
        next += 1;
    }

    let mut i = 0;
    points.retain(|_| {
        i += 1;
        new_ids[i - 1] != u32::MAX
    });

    for v in idx.iter_mut().flatten() {
        *v = new_ids[*v as usize];
    }
}
