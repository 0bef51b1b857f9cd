use astrostack_core::aligner::{align, AlignerConfig};
use astrostack_core::constellation::extract_constellations;
use astrostack_core::detect::FineStar;
use astrostack_core::error::StackError;
use astrostack_core::frame_stack::{FrameRecord, FrameStack};

fn fine(x: f32, y: f32) -> FineStar {
    FineStar {
        x,
        y,
        stddev: 1.0,
    }
}

/// Build a two-frame stack where frame B is frame A's stars translated by
/// `(dx, dy)`, with both frames' constellations extracted independently
/// (as the real frame extractor would do).
fn two_frame_stack(positions: &[(f32, f32)], dx: f32, dy: f32, k: usize) -> FrameStack {
    let a_stars: Vec<FineStar> = positions.iter().map(|&(x, y)| fine(x, y)).collect();
    let b_stars: Vec<FineStar> = positions
        .iter()
        .map(|&(x, y)| fine(x + dx, y + dy))
        .collect();

    let a_pos: Vec<(f32, f32)> = positions.to_vec();
    let b_pos: Vec<(f32, f32)> = positions.iter().map(|&(x, y)| (x + dx, y + dy)).collect();

    let a_constellations = extract_constellations(&a_pos, k);
    let b_constellations = extract_constellations(&b_pos, k);

    let mut stack = FrameStack::new();
    stack.frames.push(FrameRecord {
        image_index: 0,
        first_star: 0,
        first_constellation: 0,
    });
    stack.stars.extend(a_stars);
    stack.constellations.extend(a_constellations);

    stack.frames.push(FrameRecord {
        image_index: 1,
        first_star: stack.stars.len(),
        first_constellation: stack.constellations.len(),
    });
    stack.stars.extend(b_stars);
    stack.constellations.extend(b_constellations);

    stack
}

/// A scattered, non-degenerate set of star positions: avoids collinear or
/// symmetric layouts that could make more than one constellation match
/// equally well.
fn scattered_positions() -> Vec<(f32, f32)> {
    vec![
        (10.0, 10.0),
        (80.0, 15.0),
        (30.0, 90.0),
        (120.0, 60.0),
        (60.0, 140.0),
    ]
}

#[test]
fn recovers_the_translation_between_two_frames() {
    let stack = two_frame_stack(&scattered_positions(), 7.0, -3.0, 5);
    let offsets = align(&stack, &AlignerConfig::default()).expect("alignment should succeed");

    assert_eq!(offsets.len(), 2);
    // Both frames tie on star count, so the reference (offset 0,0) is frame 0.
    assert!((offsets[0].dx).abs() < 1e-2);
    assert!((offsets[0].dy).abs() < 1e-2);
    // Frame B's own stars carry the +(7,-3) shift baked in; its offset is the
    // correction that, added to its own star coordinates, lands back on the
    // reference catalog — the negation of the shift (see DESIGN.md).
    assert!((offsets[1].dx - (-7.0)).abs() < 1.0, "dx={}", offsets[1].dx);
    assert!((offsets[1].dy - 3.0).abs() < 1.0, "dy={}", offsets[1].dy);
}

#[test]
fn reference_frame_is_the_one_with_more_stars() {
    // Frame 0 has only 4 of the 5 stars (fewer), frame 1 (shifted) keeps all 5,
    // forcing frame 1 to become the reference.
    let positions = scattered_positions();
    let a_positions = &positions[..4];
    let a_constellations = extract_constellations(a_positions, 5);

    let mut stack = FrameStack::new();
    stack.frames.push(FrameRecord {
        image_index: 0,
        first_star: 0,
        first_constellation: 0,
    });
    stack.stars.extend(a_positions.iter().map(|&(x, y)| fine(x, y)));
    stack.constellations.extend(a_constellations);

    let b_positions: Vec<(f32, f32)> = positions.iter().map(|&(x, y)| (x + 5.0, y + 5.0)).collect();
    let b_constellations = extract_constellations(&b_positions, 5);
    stack.frames.push(FrameRecord {
        image_index: 1,
        first_star: stack.stars.len(),
        first_constellation: stack.constellations.len(),
    });
    stack.stars.extend(b_positions.iter().map(|&(x, y)| fine(x, y)));
    stack.constellations.extend(b_constellations);

    let offsets = align(&stack, &AlignerConfig::default()).expect("alignment should succeed");
    // Frame 1 (5 stars) is the reference now, so it gets (0, 0). Frame 0's
    // own stars carry no shift, while the reference catalog's do, so its
    // correction is +(5, 5), not a negation this time (see DESIGN.md).
    assert!((offsets[1].dx).abs() < 1e-2);
    assert!((offsets[1].dy).abs() < 1e-2);
    assert!((offsets[0].dx - 5.0).abs() < 1.0);
    assert!((offsets[0].dy - 5.0).abs() < 1.0);
}

#[test]
fn empty_frame_stack_is_insufficient_stars() {
    let stack = FrameStack::new();
    let result = align(&stack, &AlignerConfig::default());
    assert!(matches!(result, Err(StackError::InsufficientStars)));
}
