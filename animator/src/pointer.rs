// overlap/animator/src/pointer.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Low-pass filtered pointer position.

use overlap_geometry::util::{clamp, clamp_unit};

/// Where the pointer rests when it is not over the page: the bottom edge, which exerts no pull.
pub const POINTER_REST: f32 = 1.0;

const SETTLE_EPSILON: f32 = 1e-4;

/// Normalized vertical pointer position, 0 at the top of the screen and 1 at the bottom.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PointerState {
    target: f32,
    current: f32,
}

impl Default for PointerState {
    #[inline]
    fn default() -> PointerState {
        PointerState::new()
    }
}

impl PointerState {
    #[inline]
    pub fn new() -> PointerState {
        PointerState { target: POINTER_REST, current: POINTER_REST }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Records a raw pointer position given in client pixels.
    pub fn move_to(&mut self, client_y: f32, viewport_height: f32) {
        if viewport_height > 0.0 {
            self.target = clamp_unit(client_y / viewport_height);
        }
    }

    /// The pointer left the page, or the touch ended.
    #[inline]
    pub fn release(&mut self) {
        self.target = POINTER_REST;
    }

    /// Advances the eased position one frame toward the target and returns it.
    ///
    /// Each step closes the fraction `ease` of the remaining gap, so the approach is exponential
    /// and never overshoots. Gaps below a small epsilon snap to the target.
    pub fn step(&mut self, ease: f32) -> f32 {
        let ease = clamp(ease, 0.0, 1.0);
        let gap = self.target - self.current;
        if gap.abs() <= SETTLE_EPSILON {
            self.current = self.target;
        } else {
            let next = self.current + gap * ease;
            // Rounding must not carry the value past the target.
            self.current = if (self.target - next) * gap <= 0.0 {
                self.target
            } else {
                clamp_unit(next)
            };
        }
        self.current
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

#[cfg(test)]
mod test {
    use super::{PointerState, POINTER_REST};
    use quickcheck;

    #[test]
    fn test_starts_at_rest() {
        let pointer = PointerState::new();
        assert_eq!(pointer.current(), POINTER_REST);
        assert!(pointer.is_settled());
    }

    #[test]
    fn test_move_clamps_to_unit_range() {
        let mut pointer = PointerState::new();
        pointer.move_to(-40.0, 800.0);
        assert_eq!(pointer.target(), 0.0);
        pointer.move_to(1200.0, 800.0);
        assert_eq!(pointer.target(), 1.0);
        pointer.move_to(200.0, 800.0);
        assert_eq!(pointer.target(), 0.25);
        // A zero-height viewport keeps the last good target.
        pointer.move_to(10.0, 0.0);
        assert_eq!(pointer.target(), 0.25);
    }

    #[test]
    fn test_release_returns_to_rest() {
        let mut pointer = PointerState::new();
        pointer.move_to(0.0, 800.0);
        for _ in 0..10 {
            pointer.step(0.5);
        }
        pointer.release();
        assert_eq!(pointer.target(), POINTER_REST);
        for _ in 0..200 {
            pointer.step(0.5);
        }
        assert!(pointer.is_settled());
        assert_eq!(pointer.current(), POINTER_REST);
    }

    #[test]
    fn test_easing_converges_without_overshoot() {
        quickcheck::quickcheck(prop_converges as fn(u8, u8) -> bool);

        fn prop_converges(target: u8, ease: u8) -> bool {
            let target = target as f32 / 255.0;
            // Ease in [0.05, 1].
            let ease = 0.05 + (ease as f32 / 255.0) * 0.95;

            let mut pointer = PointerState::new();
            pointer.move_to(target * 800.0, 800.0);
            let target = pointer.target();

            let mut previous_gap = (pointer.current() - target).abs();
            for _ in 0..400 {
                let before = pointer.current();
                let after = pointer.step(ease);
                let gap = (after - target).abs();
                // Monotone approach from one side, never crossing the target.
                let same_side = (before - target) * (after - target) >= 0.0;
                if gap > previous_gap || !same_side {
                    return false;
                }
                previous_gap = gap;
            }
            pointer.is_settled()
        }
    }
}
