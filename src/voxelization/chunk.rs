use core::ops::Range;

/// A box of voxels, given by one half-open range of indices per axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChunkRange {
    /// The range of voxel indices along each axis.
    pub ranges: [Range<usize>; 3],
}

impl ChunkRange {
    /// Creates a new chunk from its ranges.
    pub fn new(ranges: [Range<usize>; 3]) -> Self {
        Self { ranges }
    }

    /// The chunk covering a whole image of the given shape.
    pub fn full(shape: [usize; 3]) -> Self {
        Self::new([0..shape[0], 0..shape[1], 0..shape[2]])
    }

    /// The index of the first voxel of the chunk.
    #[inline]
    pub fn start(&self) -> [usize; 3] {
        [self.ranges[0].start, self.ranges[1].start, self.ranges[2].start]
    }

    /// One past the index of the last voxel of the chunk, along each axis.
    #[inline]
    pub fn end(&self) -> [usize; 3] {
        [self.ranges[0].end, self.ranges[1].end, self.ranges[2].end]
    }

    /// The number of voxels of the chunk along each axis.
    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        [
            self.ranges[0].len(),
            self.ranges[1].len(),
            self.ranges[2].len(),
        ]
    }

    /// The number of voxels of the chunk.
    #[inline]
    pub fn len(&self) -> usize {
        self.shape().iter().product()
    }

    /// Does this chunk contain no voxel?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Does this chunk contain the voxel `idx`?
    #[inline]
    pub fn contains(&self, idx: [usize; 3]) -> bool {
        (0..3).all(|i| self.ranges[i].contains(&idx[i]))
    }

    /// This chunk, enlarged by `margin` voxels on each side and clipped to an image of
    /// shape `shape`.
    pub fn dilated(&self, margin: usize, shape: [usize; 3]) -> Self {
        let mut ranges = self.ranges.clone();

        for (range, dim) in ranges.iter_mut().zip(shape) {
            *range = range.start.saturating_sub(margin)..(range.end + margin).min(dim);
        }

        Self { ranges }
    }

    /// The index of the voxel `idx` relative to the first voxel of this chunk.
    #[inline]
    pub fn local_index(&self, idx: [usize; 3]) -> [usize; 3] {
        let start = self.start();
        [idx[0] - start[0], idx[1] - start[1], idx[2] - start[2]]
    }

    /// Iterates through the voxel indices of this chunk, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        let [ri, rj, rk] = &self.ranges;
        ri.clone().flat_map(move |i| {
            rj.clone()
                .flat_map(move |j| rk.clone().map(move |k| [i, j, k]))
        })
    }
}

/// A partition of an image into chunks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkGrid {
    parts: [usize; 3],
    chunks: Vec<ChunkRange>,
}

impl ChunkGrid {
    /// Splits an image into `ceil(dim / chunk_len)` parts of nearly equal sizes along
    /// each axis.
    ///
    /// When a dimension is not a multiple of its number of parts, the first parts are
    /// one voxel longer than the last ones.
    pub fn split(shape: [usize; 3], chunk_len: usize) -> Self {
        let chunk_len = chunk_len.max(1);
        let axis_ranges = shape.map(|dim| {
            let parts = dim.div_ceil(chunk_len);
            let mut ranges = Vec::with_capacity(parts);
            let mut start = 0;

            for p in 0..parts {
                let len = dim / parts + usize::from(p < dim % parts);
                ranges.push(start..start + len);
                start += len;
            }

            ranges
        });

        Self::from_axis_ranges(axis_ranges)
    }

    /// Tiles an image with chunks of `chunk_len` voxels along each axis. The last
    /// chunk of each axis is truncated to fit into the image.
    pub fn tile(shape: [usize; 3], chunk_len: usize) -> Self {
        let chunk_len = chunk_len.max(1);
        let axis_ranges = shape.map(|dim| {
            (0..dim.div_ceil(chunk_len))
                .map(|p| p * chunk_len..((p + 1) * chunk_len).min(dim))
                .collect::<Vec<_>>()
        });

        Self::from_axis_ranges(axis_ranges)
    }

    /// A grid made of a single chunk covering the whole image.
    pub fn single(shape: [usize; 3]) -> Self {
        Self {
            parts: [1; 3],
            chunks: vec![ChunkRange::full(shape)],
        }
    }

    fn from_axis_ranges(axis_ranges: [Vec<Range<usize>>; 3]) -> Self {
        let parts = [
            axis_ranges[0].len(),
            axis_ranges[1].len(),
            axis_ranges[2].len(),
        ];
        let mut chunks = Vec::with_capacity(parts.iter().product());

        for ri in &axis_ranges[0] {
            for rj in &axis_ranges[1] {
                for rk in &axis_ranges[2] {
                    chunks.push(ChunkRange::new([ri.clone(), rj.clone(), rk.clone()]));
                }
            }
        }

        Self { parts, chunks }
    }

    /// The number of chunks along each axis.
    pub fn parts(&self) -> [usize; 3] {
        self.parts
    }

    /// The chunks of this grid.
    pub fn chunks(&self) -> &[ChunkRange] {
        &self.chunks
    }

    /// The number of chunks of this grid.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Does this grid contain no chunk?
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::{ChunkGrid, ChunkRange};

    #[test]
    fn split_like_array_split() {
        let grid = ChunkGrid::split([450, 200, 1], 200);
        assert_eq!(grid.parts(), [3, 1, 1]);

        let lens: Vec<_> = grid.chunks().iter().map(|c| c.shape()[0]).collect();
        assert_eq!(lens, vec![150, 150, 150]);

        let grid = ChunkGrid::split([11, 1, 1], 5);
        let ranges: Vec<_> = grid.chunks().iter().map(|c| c.ranges[0].clone()).collect();
        assert_eq!(ranges, vec![0..4, 4..8, 8..11]);
    }

    #[test]
    fn chunks_tile_the_image() {
        let shape = [7, 5, 9];

        for grid in [ChunkGrid::split(shape, 3), ChunkGrid::tile(shape, 4)] {
            let mut count = vec![0; shape.iter().product()];

            for chunk in grid.chunks() {
                for [i, j, k] in chunk.iter() {
                    count[(i * shape[1] + j) * shape[2] + k] += 1;
                }
            }

            assert!(count.iter().all(|c| *c == 1));
        }
    }

    #[test]
    fn dilation_is_clipped() {
        let chunk = ChunkRange::new([0..4, 4..8, 2..3]);
        let dilated = chunk.dilated(3, [10, 9, 10]);
        assert_eq!(dilated, ChunkRange::new([0..7, 1..9, 0..6]));
        assert_eq!(dilated.local_index([2, 4, 2]), [2, 3, 2]);
        assert!(dilated.contains([6, 8, 5]));
        assert!(!dilated.contains([7, 8, 5]));
    }
}
