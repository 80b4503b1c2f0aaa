use super::lattice;
use porevox::network::PoreNetwork;
use porevox::pore_volume::{voronoi_vox, VoxelParameters};
use porevox::segmentation::{assign_chunk_volumes, PoreLocator, UNLABELED};
use porevox::voxelization::{fibre_image, ChunkGrid, MemoryBudget, VoxelImage};

#[test]
fn every_voxel_goes_to_its_nearest_pore() {
    let cells = [3, 2, 2];
    let net = lattice::cubic(cells, 1.0, true);
    let params = VoxelParameters::new(0.1, 0.0);
    let fibre = fibre_image(&net, &lattice::cube_pores(cells), &params).unwrap();
    assert_eq!(fibre.shape(), [31, 21, 21]);

    let locator = PoreLocator::new(&net, &fibre);
    let mut labels = VoxelImage::new(fibre.shape(), UNLABELED);

    for chunk in ChunkGrid::split(fibre.shape(), 6).chunks() {
        let volumes = assign_chunk_volumes(&net, &locator, chunk, &fibre, &mut labels);
        assert_eq!(volumes.num_voxels(), chunk.len() as u64);
    }

    let pores: Vec<_> = net
        .non_boundary_pores()
        .into_iter()
        .map(|p| (p, fibre.voxel_coords(&net.pore_coords(p))))
        .collect();

    for (idx, label) in labels.indexed_iter() {
        let mut best = (f64::MAX, usize::MAX);

        for (p, pt) in &pores {
            let d = (0..3).map(|i| (idx[i] as f64 - pt[i]).powi(2)).fold(0.0, |a, b| a + b);
            if d < best.0 {
                best = (d, *p);
            }
        }

        assert_eq!(label as usize, best.1, "voxel {idx:?}");
    }
}

#[test]
fn chunking_does_not_change_the_counts() {
    let cells = [3, 3, 2];
    let net = lattice::jittered(cells, 1.0, 0.2, 7);
    let pores = lattice::cube_pores(cells);

    let mut params = VoxelParameters::new(0.08, 0.1);
    params.keep_images = true;
    params.add_boundary = false;
    let single = voronoi_vox(&net, &pores, &params).unwrap();

    params.assign_chunk_len = 5;
    params.fibre_chunk_len = 9;
    params.memory_budget = MemoryBudget::new(1000);
    let chunked = voronoi_vox(&net, &pores, &params).unwrap();

    assert_eq!(single.pore_voxels, chunked.pore_voxels);
    assert_eq!(single.fibre_voxels, chunked.fibre_voxels);
    assert_eq!(single.volumes, chunked.volumes);

    let (single, chunked) = (single.images.unwrap(), chunked.images.unwrap());
    assert_eq!(single.fibre, chunked.fibre);
    assert_eq!(single.labels, chunked.labels);
}
