mod centroids;
mod chunking;
mod conservation;
mod convergence;
mod hull_volume;
mod lattice;
mod rasterization;
mod sphere;
mod voronoi_hull;
mod watershed;
