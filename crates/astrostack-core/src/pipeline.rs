//! Top-level orchestration: decode -> calibrate -> extract -> align -> stack.
//! Single input short-circuits to denoise-only.

use std::path::Path;

use crate::aligner::{align, AlignerConfig};
use crate::calibrate::subtract;
use crate::error::{Result, StackError};
use crate::extractor::{FrameExtractor, FrameExtractorConfig};
use crate::filters::{gaussian_blur, grayscale};
use crate::frame_stack::FrameStack;
use crate::image::{Image, ImageDescriptor};
use crate::io::{read_fits, write_ppm};
use crate::stack::stack_frames;

#[derive(Clone, Debug)]
pub struct StackPipelineConfig {
    pub extractor: FrameExtractorConfig,
    pub aligner: AlignerConfig,
    pub dark: Option<std::path::PathBuf>,
    pub bias: Option<std::path::PathBuf>,
}

impl Default for StackPipelineConfig {
    fn default() -> Self {
        Self {
            extractor: FrameExtractorConfig::default(),
            aligner: AlignerConfig::default(),
            dark: None,
            bias: None,
        }
    }
}

/// Run the full `stack` subcommand over `inputs`, reporting per-frame
/// progress through `on_progress`, and write the result as PPM to `output`.
/// A single input short-circuits to grayscale + Gaussian denoise, skipping
/// extraction, alignment, and stacking entirely.
pub fn run_stack(
    inputs: &[std::path::PathBuf],
    output: &Path,
    config: &StackPipelineConfig,
    mut on_progress: impl FnMut(usize, usize),
) -> Result<()> {
    if inputs.is_empty() {
        return Err(StackError::UsageError("no input frames given".into()));
    }

    let dark = config.dark.as_deref().map(read_fits).transpose()?;
    let bias = config.bias.as_deref().map(read_fits).transpose()?;

    let mut images = Vec::with_capacity(inputs.len());
    for (i, path) in inputs.iter().enumerate() {
        let mut image = read_fits(path)?;
        subtract(&mut image, dark.as_ref(), bias.as_ref())?;
        images.push(image);
        on_progress(i + 1, inputs.len());
    }

    if images.len() == 1 {
        let mut gray = Image::new(ImageDescriptor::new(0, 0, 1));
        let mut scratch = Image::new(ImageDescriptor::new(0, 0, 1));
        grayscale(&images[0], &mut gray);
        gaussian_blur(&mut gray, &mut scratch, config.extractor.blur_sigma);
        return write_ppm(output, &gray, false);
    }

    let mut stack = FrameStack::new();
    let mut extractor = FrameExtractor::new(config.extractor);
    for (i, image) in images.iter().enumerate() {
        extractor.extract_into(image, i, &mut stack);
        on_progress(i + 1, images.len());
    }

    if stack.is_empty() {
        return Err(StackError::InsufficientStars);
    }

    let offsets = align(&stack, &config.aligner)?;

    let aligned_images: Vec<Image> = stack
        .frames
        .iter()
        .map(|f| images[f.image_index].clone())
        .collect();
    let result = stack_frames(&aligned_images, &offsets)?;

    write_ppm(output, &result, false)
}

/// Run the `pixel-median` subcommand: decode every input, require identical
/// shapes, and write the element-wise median as PPM.
pub fn run_pixel_median(inputs: &[std::path::PathBuf], output: &Path) -> Result<()> {
    if inputs.is_empty() {
        return Err(StackError::UsageError("no input frames given".into()));
    }

    let images: Vec<Image> = inputs
        .iter()
        .map(|p| read_fits(p))
        .collect::<Result<_>>()?;

    let result = crate::stack::pixel_median_stack(&images)?;
    write_ppm(output, &result, false)
}
