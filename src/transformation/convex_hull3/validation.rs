use super::ConvexHullError;
use crate::utils::hashmap::{Entry, HashMap, HashSet};
use crate::utils::SortedPair;

/// Checks if a convex-hull is properly formed.
///
/// Every edge must be shared by exactly two triangles, no triangle may reference the
/// same vertex twice, and the Euler characteristic of the closed surface must be 2.
pub fn check_convex_hull(triangles: &[[u32; 3]]) -> Result<(), ConvexHullError> {
    let mut edges = HashMap::default();
    let mut vertices = HashSet::default();

    for (itri, tri) in triangles.iter().enumerate() {
        if tri[0] == tri[1] || tri[0] == tri[2] || tri[1] == tri[2] {
            return Err(ConvexHullError::InternalError("triangle with repeated vertices"));
        }

        for i in 0..3 {
            let ivtx1 = tri[i];
            let ivtx2 = tri[(i + 1) % 3];
            let _ = vertices.insert(ivtx1);

            match edges.entry(SortedPair::new(ivtx1, ivtx2)) {
                Entry::Vacant(e) => {
                    let _ = e.insert([itri, usize::MAX]);
                }
                Entry::Occupied(mut e) => {
                    if e.get()[1] != usize::MAX {
                        return Err(ConvexHullError::TJunction(itri, ivtx1, ivtx2));
                    }

                    e.get_mut()[1] = itri;
                }
            }
        }
    }

    if let Some(adj) = edges.values().find(|adj| adj[1] == usize::MAX) {
        return Err(ConvexHullError::UnfinishedTriangle(adj[0]));
    }

    if vertices.len() + triangles.len() != edges.len() + 2 {
        return Err(ConvexHullError::InternalError("bad Euler characteristic"));
    }

    Ok(())
}
