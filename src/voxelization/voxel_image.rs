use super::ChunkRange;
use core::ops::{Index, IndexMut};

/// The material a voxel is made of.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum VoxelPhase {
    /// The voxel is part of a fibre (the solid phase).
    Fibre = 0,
    /// The voxel is open pore space.
    Pore = 1,
}

/// A dense 3d array of voxels.
///
/// Voxels are stored in row-major order, the last axis varying the fastest: the
/// voxel `[i, j, k]` is at the linear index `(i * ny + j) * nz + k`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VoxelImage<T> {
    shape: [usize; 3],
    data: Vec<T>,
}

impl<T: Copy> VoxelImage<T> {
    /// Creates an image of the given shape with all its voxels set to `value`.
    pub fn new(shape: [usize; 3], value: T) -> Self {
        Self {
            shape,
            data: vec![value; shape[0] * shape[1] * shape[2]],
        }
    }

    /// Creates an image from its voxels, in row-major order.
    ///
    /// Returns `None` if `data` does not have exactly one voxel per cell of `shape`.
    pub fn from_vec(shape: [usize; 3], data: Vec<T>) -> Option<Self> {
        (data.len() == shape[0] * shape[1] * shape[2]).then_some(Self { shape, data })
    }

    /// The number of voxels along each axis.
    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// The total number of voxels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Does this image contain no voxel?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The voxels, in row-major order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The voxels, in row-major order.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// The linear index of the voxel `idx`.
    #[inline]
    pub fn linear_index(&self, idx: [usize; 3]) -> usize {
        (idx[0] * self.shape[1] + idx[1]) * self.shape[2] + idx[2]
    }

    /// The 3d index of the voxel at the linear index `linear`.
    #[inline]
    pub fn voxel_index(&self, linear: usize) -> [usize; 3] {
        let k = linear % self.shape[2];
        let ij = linear / self.shape[2];
        [ij / self.shape[1], ij % self.shape[1], k]
    }

    /// The value of the voxel `idx`, or `None` if it is outside of the image.
    #[inline]
    pub fn get(&self, idx: [usize; 3]) -> Option<T> {
        if (0..3).all(|i| idx[i] < self.shape[i]) {
            Some(self.data[self.linear_index(idx)])
        } else {
            None
        }
    }

    /// Iterates through all the voxels with their 3d index, in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = ([usize; 3], T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (self.voxel_index(i), *v))
    }

    /// Copies the voxels of `range` into a new image.
    ///
    /// The `range` must be contained in this image.
    pub fn sub_image(&self, range: &ChunkRange) -> VoxelImage<T> {
        let data = range.iter().map(|idx| self[idx]).collect();
        VoxelImage {
            shape: range.shape(),
            data,
        }
    }

    /// Overwrites the voxels of `range` with the voxels of `sub`.
    ///
    /// The `range` must be contained in this image, and have the same shape as `sub`.
    pub fn write_sub_image(&mut self, range: &ChunkRange, sub: &VoxelImage<T>) {
        debug_assert_eq!(range.shape(), sub.shape);

        for (idx, value) in range.iter().zip(sub.data.iter()) {
            self[idx] = *value;
        }
    }
}

impl<T: Copy> Index<[usize; 3]> for VoxelImage<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: [usize; 3]) -> &T {
        &self.data[self.linear_index(idx)]
    }
}

impl<T: Copy> IndexMut<[usize; 3]> for VoxelImage<T> {
    #[inline]
    fn index_mut(&mut self, idx: [usize; 3]) -> &mut T {
        let i = self.linear_index(idx);
        &mut self.data[i]
    }
}
