//! Frame aligner: nearest-descriptor matching across frames, incrementally
//! growing a global star catalog.

use std::collections::HashSet;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::constellation::{compare, extract_constellations, Constellation};
use crate::consts::{DEFAULT_CONSTELLATION_K, DEFAULT_DEDUP_RADIUS};
use crate::error::{Result, StackError};
use crate::frame_stack::FrameStack;

/// Translation aligning one frame's stars into the reference frame's
/// coordinate system.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameOffset {
    pub dx: f32,
    pub dy: f32,
}

/// One offset per surviving frame, indexed parallel to `FrameStack::frames`.
#[derive(Clone, Debug, Default)]
pub struct FrameOffsets(pub Vec<FrameOffset>);

impl Deref for FrameOffsets {
    type Target = [FrameOffset];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for FrameOffsets {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AlignerConfig {
    pub constellation_k: usize,
    pub dedup_radius: f32,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            constellation_k: DEFAULT_CONSTELLATION_K,
            dedup_radius: DEFAULT_DEDUP_RADIUS,
        }
    }
}

/// Run the full alignment loop over `stack`.
pub fn align(stack: &FrameStack, config: &AlignerConfig) -> Result<FrameOffsets> {
    if stack.frames.is_empty() {
        return Err(StackError::InsufficientStars);
    }

    let n = stack.frames.len();
    let reference = reference_frame(stack);

    let mut offsets = vec![FrameOffset::default(); n];
    let mut all_stars: Vec<(f32, f32)> = stack
        .stars_for(reference)
        .iter()
        .map(|s| (s.x, s.y))
        .collect();
    let mut all_constellations = extract_constellations(&all_stars, config.constellation_k);

    let mut unprocessed: HashSet<usize> = (0..n).filter(|&i| i != reference).collect();

    while !unprocessed.is_empty() {
        let (winner, cg_idx, cf_idx, rotation) =
            best_match(stack, &unprocessed, &all_constellations)
                .expect("a non-empty unprocessed set always has a constellation to match");

        let cg = all_constellations[cg_idx];
        let cf = stack.constellations_for(winner)[cf_idx].rotate(rotation);

        let winner_stars = stack.stars_for(winner);
        let mut sum_dx = 0.0f32;
        let mut sum_dy = 0.0f32;
        for i in 0..3 {
            let g = all_stars[cg.stars[i]];
            let local = winner_stars[cf.stars[i]];
            sum_dx += g.0 - local.x;
            sum_dy += g.1 - local.y;
        }
        let offset = FrameOffset {
            dx: sum_dx / 3.0,
            dy: sum_dy / 3.0,
        };
        offsets[winner] = offset;

        let mut merged = 0usize;
        for star in winner_stars {
            let candidate = (star.x + offset.dx, star.y + offset.dy);
            let too_close = all_stars
                .iter()
                .any(|&p| dist(p, candidate) < config.dedup_radius);
            if !too_close {
                all_stars.push(candidate);
                merged += 1;
            }
        }
        tracing::debug!(
            frame = winner,
            dx = offset.dx,
            dy = offset.dy,
            merged,
            catalog_size = all_stars.len(),
            "aligned frame"
        );

        all_constellations = extract_constellations(&all_stars, config.constellation_k);
        unprocessed.remove(&winner);
    }

    Ok(FrameOffsets(offsets))
}

/// Frame with the most stars; ties keep the lowest index.
fn reference_frame(stack: &FrameStack) -> usize {
    let n = stack.frames.len();
    let mut best = 0;
    let mut best_count = stack.stars_for(0).len();
    for i in 1..n {
        let count = stack.stars_for(i).len();
        if count > best_count {
            best_count = count;
            best = i;
        }
    }
    best
}

/// The single globally minimal `(catalog constellation, frame constellation,
/// rotation)` triple across every unprocessed frame.
fn best_match(
    stack: &FrameStack,
    unprocessed: &HashSet<usize>,
    all_constellations: &[Constellation],
) -> Option<(usize, usize, usize, usize)> {
    let mut best: Option<(usize, usize, usize, usize, f32)> = None;

    let mut frames: Vec<usize> = unprocessed.iter().copied().collect();
    frames.sort_unstable();

    for frame in frames {
        for (cf_idx, cf) in stack.constellations_for(frame).iter().enumerate() {
            for (cg_idx, cg) in all_constellations.iter().enumerate() {
                let m = compare(cg, cf);
                let better = match &best {
                    None => true,
                    Some((.., d)) => m.distance_sq < *d,
                };
                if better {
                    best = Some((frame, cg_idx, cf_idx, m.rotation, m.distance_sq));
                }
            }
        }
    }

    best.map(|(frame, cg_idx, cf_idx, rotation, _)| (frame, cg_idx, cf_idx, rotation))
}

#[inline]
fn dist(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}
