// overlap/web/src/navigation.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Navigation-link highlighting and smooth anchor scrolling.

use crate::dom::{self, NAV_ANCHOR_SELECTOR};
use crate::overlap::SharedOverlap;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, IntersectionObserver, IntersectionObserverInit};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smoothly scrolls `element`'s top edge to the top of its scroll container.
pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Replaces the jump of every in-page navigation link with a smooth scroll.
pub fn intercept_anchor_clicks(document: &Document) -> Result<(), JsValue> {
    for anchor in dom::elements(&document.query_selector_all(NAV_ANCHOR_SELECTOR)?) {
        let document = document.clone();
        let href_source = anchor.clone();
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let href = href_source.get_attribute("href").unwrap_or_default();
            let id = href.trim_start_matches('#');
            if id.is_empty() {
                return;
            }
            match document.get_element_by_id(id) {
                Some(target) => scroll_into_view(&target),
                None => debug!("navigation link {:?} has no target", href),
            }
        }) as Box<dyn FnMut(Event)>);
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Watches every section against the scroller and feeds crossings of the visibility threshold
/// into the navigation state.
pub fn observe_sections(overlap: &SharedOverlap) -> Result<IntersectionObserver, JsValue> {
    let state = overlap.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        state.borrow_mut().on_intersections(&entries);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let overlap = overlap.borrow();
    let init = IntersectionObserverInit::new();
    init.set_root(Some(&*overlap.markup.scroller));
    init.set_threshold(&JsValue::from_f64(overlap.animator.config().nav_threshold));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(),
                                                          &init)?;
    callback.forget();

    for page in &overlap.markup.pages {
        observer.observe(&page.element);
    }
    Ok(observer)
}
