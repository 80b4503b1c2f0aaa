use super::UNLABELED;
use crate::voxelization::{VoxelImage, VoxelPhase};

/// The voxels of a chunk owned by each pore of the chunk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkVolumes {
    /// The pores the voxels of the chunk were assigned to, sorted. Some may own no voxel.
    pub pores: Vec<usize>,
    /// The number of pore voxels owned by `pores[i]`.
    pub pore_voxels: Vec<u64>,
    /// The number of fibre voxels owned by `pores[i]`.
    pub fibre_voxels: Vec<u64>,
}

impl ChunkVolumes {
    /// Chunk volumes with all the counts of `pores` set to zero.
    pub fn zeros(pores: Vec<usize>) -> Self {
        let n = pores.len();
        Self {
            pores,
            pore_voxels: vec![0; n],
            fibre_voxels: vec![0; n],
        }
    }

    /// The total number of voxels counted.
    pub fn num_voxels(&self) -> u64 {
        self.pore_voxels.iter().sum::<u64>() + self.fibre_voxels.iter().sum::<u64>()
    }
}

/// The pore and fibre voxels owned by every pore of a network, indexed by pore id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelCounts {
    /// The number of pore voxels owned by each pore.
    pub pore_voxels: Vec<u64>,
    /// The number of fibre voxels owned by each pore.
    pub fibre_voxels: Vec<u64>,
}

impl LabelCounts {
    /// Zero counts for a network of `num_pores` pores.
    pub fn new(num_pores: usize) -> Self {
        Self {
            pore_voxels: vec![0; num_pores],
            fibre_voxels: vec![0; num_pores],
        }
    }

    /// Adds the counts of a chunk.
    pub fn add_chunk(&mut self, chunk: &ChunkVolumes) {
        for (i, pore) in chunk.pores.iter().enumerate() {
            self.pore_voxels[*pore] += chunk.pore_voxels[i];
            self.fibre_voxels[*pore] += chunk.fibre_voxels[i];
        }
    }
}

/// Counts the pore and fibre voxels of each label of `labels`.
///
/// Labels greater or equal to `num_pores`, [`UNLABELED`] included, are ignored.
pub fn count_labels(
    labels: &VoxelImage<u32>,
    fibre: &VoxelImage<VoxelPhase>,
    num_pores: usize,
) -> LabelCounts {
    let mut counts = LabelCounts::new(num_pores);

    for (label, phase) in labels.data().iter().zip(fibre.data()) {
        if *label == UNLABELED || *label as usize >= num_pores {
            continue;
        }

        match phase {
            VoxelPhase::Pore => counts.pore_voxels[*label as usize] += 1,
            VoxelPhase::Fibre => counts.fibre_voxels[*label as usize] += 1,
        }
    }

    counts
}

#[cfg(test)]
mod test {
    use super::{count_labels, ChunkVolumes, LabelCounts};
    use crate::segmentation::UNLABELED;
    use crate::voxelization::{VoxelImage, VoxelPhase};

    #[test]
    fn counts() {
        let labels = VoxelImage::from_vec([1, 2, 3], vec![0, 0, 2, 2, UNLABELED, 7]).unwrap();
        let fibre = VoxelImage::from_vec(
            [1, 2, 3],
            vec![
                VoxelPhase::Pore,
                VoxelPhase::Fibre,
                VoxelPhase::Pore,
                VoxelPhase::Pore,
                VoxelPhase::Pore,
                VoxelPhase::Fibre,
            ],
        )
        .unwrap();

        let counts = count_labels(&labels, &fibre, 3);
        assert_eq!(counts.pore_voxels, vec![1, 0, 2]);
        assert_eq!(counts.fibre_voxels, vec![1, 0, 0]);

        let mut total = LabelCounts::new(3);
        let mut chunk = ChunkVolumes::zeros(vec![0, 2]);
        chunk.pore_voxels = vec![4, 1];
        chunk.fibre_voxels[1] = 2;
        total.add_chunk(&chunk);
        total.add_chunk(&chunk);

        assert_eq!(chunk.num_voxels(), 7);
        assert_eq!(total.pore_voxels, vec![8, 0, 2]);
        assert_eq!(total.fibre_voxels, vec![0, 0, 4]);
    }
}
