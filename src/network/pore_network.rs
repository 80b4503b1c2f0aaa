use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// Read access to a pore-network model.
///
/// Pores and throats are identified by their index, in `0..num_pores()` and
/// `0..num_throats()` respectively. Each throat joins two pores and is described by
/// the loop of vertices of its cross-section. After the fibres have been accounted
/// for, some networks also carry a loop of offset vertices, shrunk towards the throat
/// center.
///
/// Implementors must be `Sync`, since the chunks of a voxel image may be processed on
/// several threads.
pub trait PoreNetwork: Sync {
    /// The number of pores.
    fn num_pores(&self) -> usize;

    /// The number of throats.
    fn num_throats(&self) -> usize;

    /// The position of the center of the pore `pore`.
    fn pore_coords(&self, pore: usize) -> Point<Real>;

    /// Whether `pore` is a boundary pore. Boundary pores have no volume of their own.
    fn is_boundary_pore(&self, pore: usize) -> bool;

    /// The two pores joined by `throat`.
    fn throat_conns(&self, throat: usize) -> [usize; 2];

    /// The vertices of the cross-section of `throat`.
    fn throat_vertices(&self, throat: usize) -> &[Point<Real>];

    /// The offset vertices of the cross-section of `throat`, if the network has any.
    fn throat_offset_vertices(&self, _throat: usize) -> Option<&[Point<Real>]> {
        None
    }

    /// The throats connected to `pore`.
    fn pore_throats(&self, pore: usize) -> &[usize];

    /// The throats connected to at least one of `pores`, sorted and without duplicates.
    fn neighbor_throats(&self, pores: &[usize]) -> Vec<usize> {
        let mut throats: Vec<usize> = pores
            .iter()
            .flat_map(|p| self.pore_throats(*p).iter().copied())
            .collect();
        throats.sort_unstable();
        throats.dedup();
        throats
    }

    /// The pores sharing a throat with at least one of `pores`, excluding `pores`
    /// themselves, sorted and without duplicates.
    fn neighbor_pores(&self, pores: &[usize]) -> Vec<usize> {
        let mut input = pores.to_vec();
        input.sort_unstable();

        let mut neighbors: Vec<usize> = self
            .neighbor_throats(pores)
            .into_iter()
            .flat_map(|t| self.throat_conns(t))
            .filter(|p| input.binary_search(p).is_err())
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    /// All the pores that are not boundary pores, sorted.
    fn non_boundary_pores(&self) -> Vec<usize> {
        (0..self.num_pores())
            .filter(|p| !self.is_boundary_pore(*p))
            .collect()
    }

    /// The volume of the bounding box of all the throat vertices.
    ///
    /// This is the volume of the domain actually represented by the network. Returns
    /// zero if there are no throat vertices.
    fn vertex_domain_volume(&self) -> Real {
        let groups: Vec<&[Point<Real>]> = (0..self.num_throats())
            .map(|t| self.throat_vertices(t))
            .collect();
        Aabb::from_point_groups(&groups).map_or(0.0, |aabb| aabb.volume())
    }
}
