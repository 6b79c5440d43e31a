// overlap/animator/src/progress.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-pair overlap math.
//!
//! `progress` is 0 while the next section sits a full viewport or more below the top of the
//! measurement frame and reaches 1 exactly when its top edge meets the frame's top edge.

use overlap_geometry::util::{self, clamp_unit};

/// Progress of the next section in a pair, given the distance from the frame top to its top
/// edge.
#[inline]
pub fn pair_progress(distance: f32, viewport_height: f32) -> f32 {
    if !(viewport_height > 0.0) || !viewport_height.is_finite() {
        return 0.0;
    }
    clamp_unit(1.0 - distance / viewport_height)
}

/// How far below its resting position the incoming section sits, in pixels.
///
/// `pointer_factor` is 0 when the pointer has no influence and 1 when it is at the very top of
/// the screen; the pull brings the section in ahead of the scroll position.
pub fn incoming_offset(progress: f32,
                       viewport_height: f32,
                       pull_strength: f32,
                       pointer_factor: f32)
                       -> f32 {
    let progress = clamp_unit(progress);
    let base = (1.0 - progress) * viewport_height;
    let pull = viewport_height * pull_strength * clamp_unit(pointer_factor) * progress;
    (base - pull).max(0.0)
}

/// Opacity of the section being covered.
#[inline]
pub fn covered_opacity(progress: f32, max_dim: f32) -> f32 {
    util::lerp(1.0, 1.0 - max_dim, clamp_unit(progress))
}

/// Scale of the section being covered.
#[inline]
pub fn covered_scale(progress: f32, max_scale_reduction: f32) -> f32 {
    util::lerp(1.0, 1.0 - max_scale_reduction, clamp_unit(progress))
}

/// Upward translation of the section being covered, in percent of its height.
#[inline]
pub fn covered_lift(progress: f32, max_lift: f32) -> f32 {
    max_lift * clamp_unit(progress)
}

#[cfg(test)]
mod test {
    use super::{covered_opacity, covered_scale, incoming_offset, pair_progress};
    use overlap_geometry::util::approx_eq;
    use quickcheck;

    const VIEW_HEIGHT: f32 = 800.0;

    #[test]
    fn test_progress_endpoints() {
        assert_eq!(pair_progress(VIEW_HEIGHT, VIEW_HEIGHT), 0.0);
        assert_eq!(pair_progress(VIEW_HEIGHT * 3.0, VIEW_HEIGHT), 0.0);
        assert_eq!(pair_progress(400.0, VIEW_HEIGHT), 0.5);
        assert_eq!(pair_progress(0.0, VIEW_HEIGHT), 1.0);
        assert_eq!(pair_progress(-250.0, VIEW_HEIGHT), 1.0);
    }

    #[test]
    fn test_progress_degenerate_viewport() {
        assert_eq!(pair_progress(100.0, 0.0), 0.0);
        assert_eq!(pair_progress(100.0, -10.0), 0.0);
        assert_eq!(pair_progress(100.0, std::f32::NAN), 0.0);
        assert_eq!(pair_progress(std::f32::NAN, VIEW_HEIGHT), 0.0);
    }

    #[test]
    fn test_progress_monotonic_in_scroll_offset() {
        quickcheck::quickcheck(prop_progress_monotonic as fn(u16, u16, u16) -> bool);

        fn prop_progress_monotonic(next_top: u16, scroll_a: u16, scroll_b: u16) -> bool {
            let (low, high) = if scroll_a <= scroll_b {
                (scroll_a, scroll_b)
            } else {
                (scroll_b, scroll_a)
            };
            let next_top = next_top as f32;
            let before = pair_progress(next_top - low as f32, VIEW_HEIGHT);
            let after = pair_progress(next_top - high as f32, VIEW_HEIGHT);
            before >= 0.0 && after <= 1.0 && before <= after
        }
    }

    #[test]
    fn test_offset_without_pull() {
        assert_eq!(incoming_offset(0.0, VIEW_HEIGHT, 0.12, 0.0), VIEW_HEIGHT);
        assert_eq!(incoming_offset(0.5, VIEW_HEIGHT, 0.12, 0.0), 400.0);
        assert_eq!(incoming_offset(1.0, VIEW_HEIGHT, 0.12, 1.0), 0.0);
    }

    #[test]
    fn test_pull_brings_section_in_sooner() {
        let relaxed = incoming_offset(0.5, VIEW_HEIGHT, 0.12, 0.0);
        let pulled = incoming_offset(0.5, VIEW_HEIGHT, 0.12, 1.0);
        assert!(approx_eq(relaxed - pulled, VIEW_HEIGHT * 0.12 * 0.5, 1e-3));
        // Never pulled past its resting position.
        assert_eq!(incoming_offset(0.95, VIEW_HEIGHT, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_covered_opacity_is_strictly_decreasing() {
        quickcheck::quickcheck(prop_opacity_decreasing as fn(u8, u8) -> bool);

        fn prop_opacity_decreasing(a: u8, b: u8) -> bool {
            let (a, b) = (a as f32 / 255.0, b as f32 / 255.0);
            let (opacity_a, opacity_b) = (covered_opacity(a, 0.18), covered_opacity(b, 0.18));
            let bounded = opacity_a >= 0.82 - 1e-6 && opacity_a <= 1.0;
            let ordered = if a < b {
                opacity_a > opacity_b
            } else if a > b {
                opacity_a < opacity_b
            } else {
                opacity_a == opacity_b
            };
            bounded && ordered
        }
    }

    #[test]
    fn test_covered_scale() {
        assert_eq!(covered_scale(0.0, 0.005), 1.0);
        assert!(approx_eq(covered_scale(1.0, 0.005), 0.995, 1e-6));
        assert!(approx_eq(covered_scale(0.5, 0.0065), 0.99675, 1e-6));
    }
}
