// overlap/animator/src/snapshot.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The geometry read from the host at the start of a frame.

use overlap_geometry::vector::Vector2F;

/// An immutable measurement of the scroller and its sections.
///
/// `scroll_top` and every entry of `page_tops` are expressed in the same coordinate space, so
/// that `page_tops[i] - scroll_top` is the distance in pixels from the top of the measurement
/// frame to the top edge of section `i`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Snapshot {
    /// Width is the layout viewport width used for the mobile breakpoint; height is the
    /// measurement frame's visible height.
    pub viewport: Vector2F,
    pub scroll_top: f32,
    pub page_tops: Vec<f32>,
}

impl Snapshot {
    #[inline]
    pub fn new(viewport: Vector2F, scroll_top: f32, page_tops: Vec<f32>) -> Snapshot {
        Snapshot { viewport, scroll_top, page_tops }
    }

    /// A snapshot of `count` sections of exactly one viewport height each, stacked from 0.
    pub fn stacked(viewport: Vector2F, count: usize, scroll_top: f32) -> Snapshot {
        let page_tops = (0..count).map(|index| index as f32 * viewport.y()).collect();
        Snapshot { viewport, scroll_top, page_tops }
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.page_tops.len()
    }

    /// Distance from the top of the measurement frame to the top edge of section `index`.
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn distance_to(&self, index: usize) -> f32 {
        self.page_tops[index] - self.scroll_top
    }
}
