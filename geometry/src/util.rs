// overlap/geometry/src/util.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Various utilities.

/// Linear interpolation.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamps `value` to `[min, max]`.
///
/// NaN collapses to `min`, so that a degenerate measurement never leaks into style output.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Clamps `value` to the unit interval.
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

#[inline]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

#[cfg(test)]
mod test {
    use super::{clamp, clamp_unit, lerp};
    use quickcheck;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_clamp_nan() {
        assert_eq!(clamp(std::f32::NAN, 0.0, 1.0), 0.0);
        assert_eq!(clamp_unit(std::f32::INFINITY), 1.0);
        assert_eq!(clamp_unit(std::f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_clamp_unit_bounds() {
        quickcheck::quickcheck(prop_clamp_unit_in_bounds as fn(f32) -> bool);

        fn prop_clamp_unit_in_bounds(value: f32) -> bool {
            let clamped = clamp_unit(value);
            clamped >= 0.0 && clamped <= 1.0
        }
    }
}
