use super::VoxelImage;
use crate::math::Real;

/// Computes the exact Euclidean distance transform of a voxel image.
///
/// Every voxel gets its distance, in voxel units, to the nearest voxel for which
/// `is_feature` returns `true`. Feature voxels have a distance of zero. If the image
/// contains no feature voxel at all, every distance is infinite.
///
/// The squared distances are computed one axis at a time with the lower-envelope
/// algorithm of Felzenszwalb and Huttenlocher, making it linear in the number of
/// voxels.
pub fn euclidean_distance_transform(
    shape: [usize; 3],
    is_feature: impl Fn([usize; 3]) -> bool,
) -> VoxelImage<Real> {
    let mut dist = VoxelImage::new(shape, Real::INFINITY);

    for (i, d) in dist.data_mut().iter_mut().enumerate() {
        let k = i % shape[2];
        let ij = i / shape[2];
        if is_feature([ij / shape[1], ij % shape[1], k]) {
            *d = 0.0;
        }
    }

    let strides = [shape[1] * shape[2], shape[2], 1];
    let max_len = shape.iter().copied().max().unwrap_or(0);
    let mut line = Vec::with_capacity(max_len);
    let mut envelope = LowerEnvelope::with_capacity(max_len);

    for axis in 0..3 {
        let (a, b) = ((axis + 1) % 3, (axis + 2) % 3);

        for u in 0..shape[a] {
            for v in 0..shape[b] {
                let first = u * strides[a] + v * strides[b];
                let data = dist.data_mut();

                line.clear();
                line.extend((0..shape[axis]).map(|q| data[first + q * strides[axis]]));
                envelope.transform(&mut line);

                for (q, d) in line.iter().enumerate() {
                    data[first + q * strides[axis]] = *d;
                }
            }
        }
    }

    for d in dist.data_mut() {
        *d = d.sqrt();
    }

    dist
}

/// Scratch space of the 1d squared distance transform.
struct LowerEnvelope {
    // Positions of the parabolas of the lower envelope.
    vertices: Vec<usize>,
    // Boundaries between consecutive parabolas.
    bounds: Vec<Real>,
    input: Vec<Real>,
}

impl LowerEnvelope {
    fn with_capacity(len: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(len),
            bounds: Vec::with_capacity(len + 1),
            input: Vec::with_capacity(len),
        }
    }

    /// Replaces the sampled function `f` by its squared distance transform
    /// `d(p) = min_q (p - q)² + f(q)`.
    fn transform(&mut self, f: &mut [Real]) {
        self.vertices.clear();
        self.bounds.clear();
        self.input.clear();
        self.input.extend_from_slice(f);

        let f0 = &self.input;
        let parabola = |q: usize| f0[q] + (q * q) as Real;

        for q in (0..f0.len()).filter(|q| f0[*q].is_finite()) {
            while let Some(&top) = self.vertices.last() {
                let s = (parabola(q) - parabola(top)) / (2.0 * (q - top) as Real);
                let top_bound = self.bounds[self.bounds.len() - 1];

                if s <= top_bound {
                    let _ = self.vertices.pop();
                    let _ = self.bounds.pop();
                } else {
                    self.vertices.push(q);
                    self.bounds.push(s);
                    break;
                }
            }

            if self.vertices.is_empty() {
                self.vertices.push(q);
                self.bounds.push(-Real::INFINITY);
            }
        }

        if self.vertices.is_empty() {
            // No feature: the distances stay infinite.
            return;
        }

        let mut k = 0;
        for (p, d) in f.iter_mut().enumerate() {
            while k + 1 < self.vertices.len() && self.bounds[k + 1] < p as Real {
                k += 1;
            }

            let v = self.vertices[k];
            let dp = p as Real - v as Real;
            *d = dp * dp + f0[v];
        }
    }
}
