// overlap/web/src/overlap.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The state of one installed overlap effect, shared by its browser callbacks.

use crate::dom::Markup;
use crate::measure;
use crate::navigation;
use crate::render;
use instant::Instant;
use js_sys::Array;
use overlap_animator::navigation::{NavigationState, NavigationUpdate};
use overlap_animator::navigation::{ACTIVE_CLASS, ANIMATE_CLASS};
use overlap_animator::Animator;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, Window};

pub type SharedOverlap = Rc<RefCell<Overlap>>;

pub struct Overlap {
    pub window: Window,
    pub markup: Markup,
    pub animator: Animator,
    pub navigation: NavigationState,
    pub observer: Option<IntersectionObserver>,
}

impl Overlap {
    pub fn new(window: Window, markup: Markup, animator: Animator) -> Overlap {
        let threshold = animator.config().nav_threshold;
        let navigation = NavigationState::new(markup.page_ids(), threshold);
        Overlap { window, markup, animator, navigation, observer: None }
    }

    /// Runs one animation frame. Returns true if the next frame must be requested.
    pub fn run_frame(&mut self) -> bool {
        let reschedule = self.animator.begin_frame();
        let config = self.animator.config();
        let (measurement, will_change_hints) = (config.measurement, config.will_change_hints);

        let snapshot = measure::snapshot(&self.window, &self.markup, measurement);
        let frame = self.animator.tick(&snapshot);
        render::apply_frame(&self.markup, &frame, will_change_hints);
        reschedule
    }

    pub fn scroll_to_section(&self, index: usize) {
        if let Some(page) = self.markup.pages.get(index) {
            navigation::scroll_into_view(&page.element);
        }
    }

    /// Handles a batch of intersection observer entries.
    pub fn on_intersections(&mut self, entries: &Array) {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let index = match self.markup.page_index_of(&entry.target()) {
                Some(index) => index,
                None => continue,
            };
            if let Err(error) = self.observe_section(index,
                                                     entry.is_intersecting(),
                                                     entry.intersection_ratio()) {
                warn!("failed to update navigation for section {}: {:?}", index, error);
            }
        }
    }

    /// Handles one intersection observer entry for section `index`.
    pub fn observe_section(&mut self, index: usize, is_intersecting: bool, ratio: f64)
                           -> Result<(), JsValue> {
        match self.navigation.observe(index, is_intersecting, ratio) {
            Some(update) => self.apply_navigation(update),
            None => Ok(()),
        }
    }

    fn apply_navigation(&mut self, update: NavigationUpdate) -> Result<(), JsValue> {
        if self.animator.config().animate_on_view {
            let page = &self.markup.pages[update.index];
            page.element.class_list().toggle_with_force(ANIMATE_CLASS, update.visible)?;
        }
        if update.activated {
            for link in &self.markup.nav_links {
                let href = link.get_attribute("href").unwrap_or_default();
                link.class_list()
                    .toggle_with_force(ACTIVE_CLASS, self.navigation.is_link_active(&href))?;
            }
            self.animator.sync_section(update.index, Instant::now());
        }
        Ok(())
    }
}
