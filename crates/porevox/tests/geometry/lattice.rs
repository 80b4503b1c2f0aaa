//! Networks of cubic pores, whose throats are the faces shared by the cubes.

use na::{Point3, Vector3};
use porevox::network::Network;

/// The four corners of the square face orthogonal to `axis` at `pos`, whose two other
/// coordinates start at `lo`.
fn square(axis: usize, pos: f64, lo: [f64; 2], side: f64) -> Vec<Point3<f64>> {
    let (u, v) = ((axis + 1) % 3, (axis + 2) % 3);
    [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
        .iter()
        .map(|(du, dv)| {
            let mut pt = Point3::origin();
            pt[axis] = pos;
            pt[u] = lo[0] + du * side;
            pt[v] = lo[1] + dv * side;
            pt
        })
        .collect()
}

/// A lattice of `cells` cubes of side `spacing`, with one pore at the center of each
/// cube.
///
/// If `with_boundary` is set, a boundary pore is placed at the center of every face
/// lying on the surface of the lattice and connected to the cube it belongs to.
/// The pores of the cubes come first, the cube `[i, j, k]` being the pore
/// `(i * ny + j) * nz + k`.
pub fn cubic(cells: [usize; 3], spacing: f64, with_boundary: bool) -> Network {
    build(cells, spacing, with_boundary, Vector3::zeros)
}

/// A lattice built like [`cubic`], with boundary pores, whose cube pores are moved
/// randomly by up to `jitter` along each axis.
pub fn jittered(cells: [usize; 3], spacing: f64, jitter: f64, seed: u64) -> Network {
    let mut rng = oorandom::Rand64::new(seed as u128);
    let mut offset = || Vector3::from_fn(|_, _| (rng.rand_float() * 2.0 - 1.0) * jitter);
    build(cells, spacing, true, &mut offset)
}

fn build(
    cells: [usize; 3],
    spacing: f64,
    with_boundary: bool,
    mut offset: impl FnMut() -> Vector3<f64>,
) -> Network {
    let id = |c: [usize; 3]| (c[0] * cells[1] + c[1]) * cells[2] + c[2];
    let mut coords = Vec::new();
    let mut boundary = Vec::new();
    let mut conns = Vec::new();
    let mut vertices = Vec::new();

    for i in 0..cells[0] {
        for j in 0..cells[1] {
            for k in 0..cells[2] {
                let center = Point3::new(i as f64 + 0.5, j as f64 + 0.5, k as f64 + 0.5);
                coords.push(center * spacing + offset());
                boundary.push(false);
            }
        }
    }

    for i in 0..cells[0] {
        for j in 0..cells[1] {
            for k in 0..cells[2] {
                let cell = [i, j, k];

                for axis in 0..3 {
                    let (u, v) = ((axis + 1) % 3, (axis + 2) % 3);
                    let lo = [cell[u] as f64 * spacing, cell[v] as f64 * spacing];

                    if cell[axis] + 1 < cells[axis] {
                        let mut next = cell;
                        next[axis] += 1;
                        let pos = next[axis] as f64 * spacing;
                        conns.push([id(cell), id(next)]);
                        vertices.push(square(axis, pos, lo, spacing));
                    }

                    if with_boundary {
                        let mut sides = vec![];
                        if cell[axis] == 0 {
                            sides.push(0.0);
                        }
                        if cell[axis] + 1 == cells[axis] {
                            sides.push(cells[axis] as f64 * spacing);
                        }

                        for pos in sides {
                            let face = square(axis, pos, lo, spacing);
                            let center = porevox::utils::center(&face).unwrap();
                            coords.push(center);
                            boundary.push(true);
                            conns.push([id(cell), coords.len() - 1]);
                            vertices.push(face);
                        }
                    }
                }
            }
        }
    }

    Network::new(coords, boundary, conns, vertices).unwrap()
}

/// The pores of the cubes of a lattice built by [`cubic`].
pub fn cube_pores(cells: [usize; 3]) -> Vec<usize> {
    (0..cells.iter().product()).collect()
}
