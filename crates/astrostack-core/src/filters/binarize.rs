//! Mean+k*sigma binarization of a 1-channel image into a 0/1 mask.

use crate::consts::DEFAULT_BINARIZE_K;
use crate::image::{Image, ImageDescriptor};

/// Compute mean and standard deviation over all pixel values.
pub fn mean_stddev(src: &Image) -> (f64, f64) {
    let data = src.data();
    let n = data.len() as f64;
    if n == 0.0 {
        return (0.0, 0.0);
    }
    let sum: f64 = data.iter().map(|&v| v as f64).sum();
    let mean = sum / n;
    let var: f64 = data.iter().map(|&v| (v as f64 - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// Write a 0/1 mask into `dst`: 1 where `p > mean + k*stddev`, else 0.
pub fn binarize(src: &Image, dst: &mut Image, k: f32) {
    assert_eq!(src.components(), 1, "binarize requires a 1-channel image");
    dst.realloc(ImageDescriptor::new(src.width(), src.height(), 1));

    let (mean, std) = mean_stddev(src);
    let cutoff = mean + k as f64 * std;

    for y in 0..src.height() {
        for x in 0..src.width() {
            let v = src.pixel(x, y)[0] as f64;
            dst.pixel_mut(x, y)[0] = if v > cutoff { 1.0 } else { 0.0 };
        }
    }
}

pub fn binarize_default(src: &Image, dst: &mut Image) {
    binarize(src, dst, DEFAULT_BINARIZE_K)
}
