//! Per-image stage chain: grayscale -> Gaussian blur -> binarize -> coarse
//! stars -> fine stars -> constellations, aggregated into one `FrameStack`.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BINARIZE_K, DEFAULT_CONSTELLATION_K, FINE_WINDOW_RADIUS,
};
use crate::constellation::extract_constellations;
use crate::detect::coarse::extract_coarse_stars;
use crate::detect::fine::extract_fine_stars_with_radius;
use crate::filters::{binarize, gaussian_blur, grayscale};
use crate::frame_stack::{FrameRecord, FrameStack};
use crate::image::{Image, ImageDescriptor};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FrameExtractorConfig {
    pub blur_sigma: f32,
    pub binarize_k: f32,
    pub fine_radius: i64,
    pub constellation_k: usize,
}

impl Default for FrameExtractorConfig {
    fn default() -> Self {
        Self {
            blur_sigma: 1.5,
            binarize_k: DEFAULT_BINARIZE_K,
            fine_radius: FINE_WINDOW_RADIUS,
            constellation_k: DEFAULT_CONSTELLATION_K,
        }
    }
}

/// Owns the two scratch buffers (`tmp_grayscale`, `tmp_starmask`) reused
/// across every frame passed through `extract_into`. Their backing storage
/// only ever grows.
pub struct FrameExtractor {
    tmp_grayscale: Image,
    tmp_starmask: Image,
    config: FrameExtractorConfig,
}

impl FrameExtractor {
    pub fn new(config: FrameExtractorConfig) -> Self {
        Self {
            tmp_grayscale: Image::new(ImageDescriptor::new(0, 0, 1)),
            tmp_starmask: Image::new(ImageDescriptor::new(0, 0, 1)),
            config,
        }
    }

    /// Run the full B->C->D->E chain for `image` and append the result to
    /// `stack`. If the frame yields zero constellations, the stack is left
    /// exactly as it was.
    pub fn extract_into(&mut self, image: &Image, image_index: usize, stack: &mut FrameStack) {
        let star_mark = stack.stars.len();
        let constellation_mark = stack.constellations.len();

        grayscale(image, &mut self.tmp_grayscale);
        gaussian_blur(&mut self.tmp_grayscale, &mut self.tmp_starmask, self.config.blur_sigma);
        binarize(&self.tmp_grayscale, &mut self.tmp_starmask, self.config.binarize_k);

        let coarse = extract_coarse_stars(&self.tmp_starmask);
        let fine = extract_fine_stars_with_radius(&self.tmp_grayscale, &coarse, self.config.fine_radius);

        let positions: Vec<(f32, f32)> = fine.iter().map(|s| (s.x, s.y)).collect();
        let constellations = extract_constellations(&positions, self.config.constellation_k);

        if constellations.is_empty() {
            tracing::debug!(image_index, stars = fine.len(), "frame yielded no constellations, dropping");
            stack.truncate_to(star_mark, constellation_mark);
            return;
        }

        stack.stars.extend(fine);
        stack.constellations.extend(constellations);
        stack.frames.push(FrameRecord {
            image_index,
            first_star: star_mark,
            first_constellation: constellation_mark,
        });
    }
}
