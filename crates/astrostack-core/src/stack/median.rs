//! Element-wise median across identically-shaped images, for the
//! `pixel-median` CLI subcommand. Uses `select_nth_unstable` for an O(n)
//! median without a full sort.

use crate::error::{Result, StackError};
use crate::image::Image;

pub fn pixel_median_stack(images: &[Image]) -> Result<Image> {
    if images.is_empty() {
        return Err(StackError::InsufficientStars);
    }

    let descriptor = images[0].descriptor();
    for img in &images[1..] {
        if img.descriptor() != descriptor {
            return Err(StackError::InvalidImage(format!(
                "frame shape {:?} does not match {:?}",
                img.descriptor(),
                descriptor
            )));
        }
    }

    let n = images.len();
    let mut out = Image::new(descriptor);
    let mut values = vec![0.0f32; n];

    for i in 0..descriptor.len() {
        for (k, img) in images.iter().enumerate() {
            values[k] = img.data()[i];
        }
        out.data_mut()[i] = median(&mut values);
    }

    Ok(out)
}

/// O(n) median via `select_nth_unstable`, no full sort.
fn median(values: &mut [f32]) -> f32 {
    let n = values.len();
    if n == 1 {
        return values[0];
    }

    let mid = n / 2;
    if n % 2 == 1 {
        *values
            .select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap())
            .1
    } else {
        let (lower, upper, _) =
            values.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap());
        let upper_val = *upper;
        let lower_val = lower.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        (lower_val + upper_val) / 2.0
    }
}
