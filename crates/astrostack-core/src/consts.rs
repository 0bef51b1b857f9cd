/// Default sigma multiplier for mean+k*sigma binarization.
pub const DEFAULT_BINARIZE_K: f32 = 2.0;

/// Mask cutoff separating "inside a star" from "outside".
pub const COARSE_MASK_CUTOFF: f32 = 0.5;

/// Half-window radius for fine sub-pixel centroid extraction.
pub const FINE_WINDOW_RADIUS: i64 = 16;

/// Default neighborhood size bounding per-star constellation fan-out.
pub const DEFAULT_CONSTELLATION_K: usize = 5;

/// Default catalog dedup radius in pixels.
pub const DEFAULT_DEDUP_RADIUS: f32 = 50.0;
