use crate::math::{Point, Real, Vector};

#[derive(Debug)]
pub struct TriangleFacet {
    pub valid: bool,
    pub normal: Vector<Real>,
    pub pts: [usize; 3],
    pub visible_points: Vec<usize>,
    pub furthest_point: Option<usize>,
    pub furthest_distance: Real,
}

impl TriangleFacet {
    /// Builds the facet `(p1, p2, p3)` with a normal following the right-hand rule.
    ///
    /// Returns `None` if the three points are affinely dependent.
    pub fn new(p1: usize, p2: usize, p3: usize, points: &[Point<Real>]) -> Option<TriangleFacet> {
        let p1p2 = points[p2] - points[p1];
        let p1p3 = points[p3] - points[p1];
        let normal = p1p2.cross(&p1p3).try_normalize(0.0)?;

        Some(TriangleFacet {
            valid: true,
            normal,
            pts: [p1, p2, p3],
            visible_points: Vec::new(),
            furthest_point: None,
            furthest_distance: 0.0,
        })
    }

    /// The same facet with its orientation reversed.
    pub fn flipped(mut self) -> TriangleFacet {
        self.pts.swap(1, 2);
        self.normal = -self.normal;
        self
    }

    pub fn add_visible_point(&mut self, pid: usize, distance: Real) {
        if distance > self.furthest_distance {
            self.furthest_distance = distance;
            self.furthest_point = Some(pid);
        }

        self.visible_points.push(pid);
    }

    /// Signed distance from the facet's plane, positive on the outer side.
    pub fn distance_to_point(&self, point: usize, points: &[Point<Real>]) -> Real {
        self.normal.dot(&(points[point] - points[self.pts[0]]))
    }

    /// The `id`-th directed edge of this facet.
    pub fn edge(&self, id: usize) -> (usize, usize) {
        (self.pts[id], self.pts[(id + 1) % 3])
    }
}
