//! Channel-average grayscale conversion.

use crate::image::{Image, ImageDescriptor};

/// Write the channel-wise mean of `src` into `dst`, reallocating `dst` to a
/// 1-channel image of the same width/height.
pub fn grayscale(src: &Image, dst: &mut Image) {
    let c = src.components();
    dst.realloc(ImageDescriptor::new(src.width(), src.height(), 1));

    for y in 0..src.height() {
        for x in 0..src.width() {
            let px = src.pixel(x, y);
            let sum: f32 = px.iter().sum();
            dst.pixel_mut(x, y)[0] = sum / c as f32;
        }
    }
}
