//! Separable Gaussian blur over a 1-channel image.
//!
//! `buf` holds the source on entry and the blurred result on exit; `scratch`
//! is reused across calls purely as vertical-pass working memory, matching
//! the frame extractor's two persistent scratch buffers.
//! Out-of-bounds samples are treated as 0.

use crate::image::{Image, ImageDescriptor};

/// Build the half-window kernel `k[0..=r]`, `r = ceil(4*sigma)`,
/// `k[i] = exp(-i^2 / (2*sigma^2))`, normalized so `k[0] + 2*sum(k[1..]) = 1`.
pub fn make_kernel(sigma: f32) -> Vec<f32> {
    let r = (4.0 * sigma).ceil().max(0.0) as usize;
    let s2 = 2.0 * sigma * sigma;
    let mut k: Vec<f32> = (0..=r)
        .map(|i| {
            if s2 <= 0.0 {
                if i == 0 {
                    1.0
                } else {
                    0.0
                }
            } else {
                (-((i * i) as f32) / s2).exp()
            }
        })
        .collect();

    let norm = k[0] + 2.0 * k[1..].iter().sum::<f32>();
    if norm > 0.0 {
        for v in &mut k {
            *v /= norm;
        }
    }
    k
}

pub fn gaussian_blur(buf: &mut Image, scratch: &mut Image, sigma: f32) {
    assert_eq!(buf.components(), 1, "gaussian_blur requires a 1-channel image");

    let w = buf.width();
    let h = buf.height();
    let kernel = make_kernel(sigma);

    scratch.realloc(ImageDescriptor::new(w, h, 1));

    // Vertical pass: buf -> scratch.
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;
            for (i, &kv) in kernel.iter().enumerate() {
                sum += kv * sample_v(buf, x, y, i as i64, h);
                if i > 0 {
                    sum += kv * sample_v(buf, x, y, -(i as i64), h);
                }
            }
            scratch.pixel_mut(x, y)[0] = sum;
        }
    }

    // Horizontal pass: scratch -> buf.
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;
            for (i, &kv) in kernel.iter().enumerate() {
                sum += kv * sample_h(scratch, x, y, i as i64, w);
                if i > 0 {
                    sum += kv * sample_h(scratch, x, y, -(i as i64), w);
                }
            }
            buf.pixel_mut(x, y)[0] = sum;
        }
    }
}

#[inline]
fn sample_v(img: &Image, x: usize, y: usize, dy: i64, h: usize) -> f32 {
    let yy = y as i64 + dy;
    if yy < 0 || yy >= h as i64 {
        0.0
    } else {
        img.pixel(x, yy as usize)[0]
    }
}

#[inline]
fn sample_h(img: &Image, x: usize, y: usize, dx: i64, w: usize) -> f32 {
    let xx = x as i64 + dx;
    if xx < 0 || xx >= w as i64 {
        0.0
    } else {
        img.pixel(xx as usize, y)[0]
    }
}
