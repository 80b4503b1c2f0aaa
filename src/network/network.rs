use super::{NetworkError, PoreNetwork};
use crate::math::{Point, Real};
use smallvec::SmallVec;

/// An in-memory pore network.
///
/// Stores only the geometry needed to compute pore volumes. The network is validated
/// once on construction so that every throat references existing pores.
#[derive(Clone, Debug)]
pub struct Network {
    coords: Vec<Point<Real>>,
    boundary: Vec<bool>,
    conns: Vec<[usize; 2]>,
    vertices: Vec<Vec<Point<Real>>>,
    offset_vertices: Option<Vec<Vec<Point<Real>>>>,
    // Most pores of a Voronoi network have less than a dozen throats.
    pore_throats: Vec<SmallVec<[usize; 12]>>,
}

impl Network {
    /// Builds a network from its pores and throats.
    ///
    /// * `coords` and `boundary` describe the pores, and must have the same length.
    /// * `conns` and `vertices` describe the throats, and must have the same length.
    pub fn new(
        coords: Vec<Point<Real>>,
        boundary: Vec<bool>,
        conns: Vec<[usize; 2]>,
        vertices: Vec<Vec<Point<Real>>>,
    ) -> Result<Self, NetworkError> {
        check_len("boundary flags", coords.len(), boundary.len())?;
        check_len("throat vertex loops", conns.len(), vertices.len())?;

        if !coords.iter().all(is_finite) {
            return Err(NetworkError::NonFiniteCoordinate("pore coordinates"));
        }

        if !vertices.iter().flatten().all(is_finite) {
            return Err(NetworkError::NonFiniteCoordinate("throat vertices"));
        }

        let mut pore_throats = vec![SmallVec::new(); coords.len()];

        for (throat, [a, b]) in conns.iter().copied().enumerate() {
            for pore in [a, b] {
                if pore >= coords.len() {
                    return Err(NetworkError::UnknownPore { throat, pore });
                }
            }

            if a == b {
                return Err(NetworkError::SelfLoop(throat));
            }

            pore_throats[a].push(throat);
            pore_throats[b].push(throat);
        }

        Ok(Self {
            coords,
            boundary,
            conns,
            vertices,
            offset_vertices: None,
            pore_throats,
        })
    }

    /// Attaches the offset vertex loops of the throats, one per throat.
    pub fn with_offset_vertices(
        mut self,
        offset_vertices: Vec<Vec<Point<Real>>>,
    ) -> Result<Self, NetworkError> {
        check_len("offset vertex loops", self.conns.len(), offset_vertices.len())?;

        if !offset_vertices.iter().flatten().all(is_finite) {
            return Err(NetworkError::NonFiniteCoordinate("offset throat vertices"));
        }

        self.offset_vertices = Some(offset_vertices);
        Ok(self)
    }
}

fn check_len(what: &'static str, expected: usize, found: usize) -> Result<(), NetworkError> {
    if expected == found {
        Ok(())
    } else {
        Err(NetworkError::LengthMismatch {
            what,
            expected,
            found,
        })
    }
}

fn is_finite(pt: &Point<Real>) -> bool {
    pt.iter().all(|c| c.is_finite())
}

impl PoreNetwork for Network {
    fn num_pores(&self) -> usize {
        self.coords.len()
    }

    fn num_throats(&self) -> usize {
        self.conns.len()
    }

    fn pore_coords(&self, pore: usize) -> Point<Real> {
        self.coords[pore]
    }

    fn is_boundary_pore(&self, pore: usize) -> bool {
        self.boundary[pore]
    }

    fn throat_conns(&self, throat: usize) -> [usize; 2] {
        self.conns[throat]
    }

    fn throat_vertices(&self, throat: usize) -> &[Point<Real>] {
        &self.vertices[throat]
    }

    fn throat_offset_vertices(&self, throat: usize) -> Option<&[Point<Real>]> {
        self.offset_vertices
            .as_ref()
            .map(|offsets| &offsets[throat][..])
    }

    fn pore_throats(&self, pore: usize) -> &[usize] {
        &self.pore_throats[pore]
    }
}
