//! Constellation comparison: rotation-invariant nearest-descriptor match.

use crate::constellation::types::Constellation;

/// Result of comparing two constellations: the minimal squared distance and
/// the rotation `b` must be cyclically shifted by to best match `a`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstellationMatch {
    pub distance_sq: f32,
    pub rotation: usize,
}

/// `D(r) = sum_i (a.dist[i] - b.dist[(i+r) mod 3])^2`; returns the minimal
/// `D(r)` and its `r`. Ties favor the smaller `r` (evaluated in order,
/// 0 first, kept unless a strictly smaller distance is found).
pub fn compare(a: &Constellation, b: &Constellation) -> ConstellationMatch {
    let mut best = ConstellationMatch {
        distance_sq: f32::INFINITY,
        rotation: 0,
    };

    for r in 0..3 {
        let d: f32 = (0..3)
            .map(|i| {
                let diff = a.dist[i] - b.dist[(i + r) % 3];
                diff * diff
            })
            .sum();

        if d < best.distance_sq {
            best = ConstellationMatch {
                distance_sq: d,
                rotation: r,
            };
        }
    }

    best
}
