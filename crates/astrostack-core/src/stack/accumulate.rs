//! Final summation stacker: integer-rounded offsets, no sub-pixel resampling.

use crate::aligner::FrameOffset;
use crate::error::{Result, StackError};
use crate::image::Image;

/// Sum every image into an accumulator at its rounded `(dx, dy)` offset and
/// divide by frame count. Source pixels that land outside the canvas after
/// the shift are dropped.
pub fn stack_frames(images: &[Image], offsets: &[FrameOffset]) -> Result<Image> {
    if images.is_empty() {
        return Err(StackError::InsufficientStars);
    }
    if images.len() != offsets.len() {
        return Err(StackError::InvalidImage(format!(
            "{} images but {} offsets",
            images.len(),
            offsets.len()
        )));
    }

    let descriptor = images[0].descriptor();
    for img in &images[1..] {
        if img.descriptor() != descriptor {
            return Err(StackError::InvalidImage(format!(
                "frame shape {:?} does not match reference shape {:?}",
                img.descriptor(),
                descriptor
            )));
        }
    }

    let width = descriptor.width;
    let height = descriptor.height;
    let components = descriptor.components;

    let mut sum = Image::new(descriptor);
    for (img, offset) in images.iter().zip(offsets) {
        let dx = offset.dx.round() as i64;
        let dy = offset.dy.round() as i64;
        for y in 0..height {
            for x in 0..width {
                let sx = x as i64 - dx;
                let sy = y as i64 - dy;
                if sx < 0 || sy < 0 || sx as usize >= width || sy as usize >= height {
                    continue;
                }
                let src = img.pixel(sx as usize, sy as usize);
                let dst = sum.pixel_mut(x, y);
                for c in 0..components {
                    dst[c] += src[c];
                }
            }
        }
    }

    let n = images.len() as f32;
    for v in sum.data_mut() {
        *v /= n;
    }
    Ok(sum)
}
