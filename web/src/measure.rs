// overlap/web/src/measure.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reads the geometry of one frame from layout.
//!
//! Section positions come from the `offsetTop` chain rather than `getBoundingClientRect()`. A
//! section without a `.page-inner` wrapper carries the effect's own transform, and a transformed
//! box would feed the parked translation back into the next frame's progress.

use crate::dom::Markup;
use overlap_animator::{MeasurementFrame, Snapshot};
use overlap_geometry::vector::vec2f;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

/// `innerWidth`/`innerHeight`, or zero if the window cannot report them.
fn window_size(window: &Window) -> (f32, f32) {
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|value| value.as_f64()).unwrap_or(0.0) as f32
    };
    (read(window.inner_width()), read(window.inner_height()))
}

#[inline]
pub fn window_height(window: &Window) -> f32 {
    window_size(window).1
}

/// Sums `offsetTop` up the offset parent chain, stopping at `container`. Returns the sum and
/// whether `container` was reached; if not, the sum is relative to the document.
fn offset_chain(element: &HtmlElement, container: Option<&HtmlElement>) -> (f32, bool) {
    let mut top = element.offset_top() as f32;
    let mut parent = element.offset_parent();
    while let Some(ancestor) = parent.and_then(|parent| parent.dyn_into::<HtmlElement>().ok()) {
        if Some(&ancestor) == container {
            return (top, true);
        }
        top += ancestor.offset_top() as f32;
        parent = ancestor.offset_parent();
    }
    (top, false)
}

/// Layout top of `element` in the scroll content coordinates of `scroller`, ignoring transforms
/// and the current scroll offset.
pub fn content_top(element: &HtmlElement, scroller: &HtmlElement) -> f32 {
    match offset_chain(element, Some(scroller)) {
        (top, true) => top,
        // The scroller is not positioned, so both share an offset parent further up.
        (top, false) => {
            top - offset_chain(scroller, None).0 - scroller.client_top() as f32
        }
    }
}

/// Measures every section against `frame`.
///
/// `scroll_top` and the section tops share the scroller's content coordinates, so the distance
/// the animator computes is the distance from the frame's top edge to the section's layout top.
pub fn snapshot(window: &Window, markup: &Markup, frame: MeasurementFrame) -> Snapshot {
    let (window_width, window_height) = window_size(window);
    let scroller = &markup.scroller;
    let scroll_top = scroller.scroll_top() as f32;

    let (page_tops, viewport_height) = match frame {
        MeasurementFrame::Container => {
            let page_tops = markup.pages.iter().map(|page| {
                content_top(&page.element, scroller)
            }).collect();
            (page_tops, scroller.client_height() as f32)
        }
        MeasurementFrame::Window => {
            // Document position, shifted by the page's own scroll, lands in viewport space once
            // the animator subtracts the scroller's offset.
            let window_scroll = window.scroll_y().unwrap_or(0.0) as f32;
            let page_tops = markup.pages.iter().map(|page| {
                offset_chain(&page.element, None).0 - window_scroll
            }).collect();
            (page_tops, window_height)
        }
    };

    Snapshot::new(vec2f(window_width, viewport_height), scroll_top, page_tops)
}
