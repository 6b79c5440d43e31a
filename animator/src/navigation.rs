// overlap/animator/src/navigation.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Which section the navigation bar should highlight.

pub const ACTIVE_CLASS: &str = "active";
pub const ANIMATE_CLASS: &str = "animate";

/// Intersection ratios are reported just past the threshold that fired the observer.
const RATIO_EPSILON: f64 = 1e-3;

/// What changed after a visibility observation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavigationUpdate {
    pub index: usize,
    /// Whether the section is now past the visibility threshold.
    pub visible: bool,
    /// The section just became the active one.
    pub activated: bool,
}

#[derive(Clone, Debug)]
pub struct NavigationState {
    ids: Vec<String>,
    active: Option<usize>,
    threshold: f64,
}

impl NavigationState {
    /// Tracks the sections named `ids`. A section counts as visible once at least `threshold`
    /// of it intersects the scroller.
    pub fn new(ids: Vec<String>, threshold: f64) -> NavigationState {
        NavigationState { ids, active: None, threshold }
    }

    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.map(|index| &*self.ids[index]).filter(|id| !id.is_empty())
    }

    /// Records an intersection observer entry for section `index`.
    ///
    /// The section is visible if it intersects with at least the threshold ratio. Becoming
    /// visible makes it active. Dropping below the threshold is reported but changes nothing
    /// else; the active section stays highlighted until another one enters.
    pub fn observe(&mut self, index: usize, is_intersecting: bool, ratio: f64)
                   -> Option<NavigationUpdate> {
        if index >= self.ids.len() {
            return None;
        }
        let visible = is_intersecting && ratio >= self.threshold - RATIO_EPSILON;

        let activated = visible && self.active != Some(index);
        if activated {
            debug!("navigation: section {} ({:?}) is active", index, self.ids[index]);
            self.active = Some(index);
        }
        Some(NavigationUpdate { index, visible, activated })
    }

    /// True if a navigation link with this `href` points at the active section.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (href.strip_prefix('#'), self.active_id()) {
            (Some(target), Some(active)) => target == active,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{NavigationState, NavigationUpdate};

    fn sections() -> NavigationState {
        NavigationState::new(vec!["home".to_owned(),
                                  "about".to_owned(),
                                  "".to_owned(),
                                  "contact".to_owned()],
                             0.6)
    }

    #[test]
    fn test_entering_activates() {
        let mut navigation = sections();
        assert_eq!(navigation.active(), None);

        let update = navigation.observe(1, true, 0.6).unwrap();
        assert_eq!(update, NavigationUpdate { index: 1, visible: true, activated: true });
        assert!(navigation.is_link_active("#about"));
        assert!(!navigation.is_link_active("#home"));
        assert!(!navigation.is_link_active("about"));

        // Re-entering the active section is not a new activation.
        assert!(!navigation.observe(1, true, 1.0).unwrap().activated);
    }

    #[test]
    fn test_threshold() {
        let mut navigation = sections();
        // Reported a hair under the threshold that fired the callback.
        assert!(navigation.observe(0, true, 0.5995).unwrap().activated);

        // Still intersecting, but not enough of it to count.
        let update = navigation.observe(1, true, 0.3).unwrap();
        assert_eq!(update, NavigationUpdate { index: 1, visible: false, activated: false });
        assert_eq!(navigation.active(), Some(0));

        // A ratio without intersection does not count either.
        assert!(!navigation.observe(1, false, 0.9).unwrap().visible);
        assert_eq!(navigation.active(), Some(0));
    }

    #[test]
    fn test_at_most_one_active() {
        let mut navigation = sections();
        navigation.observe(0, true, 0.8);
        navigation.observe(3, true, 0.7);
        assert_eq!(navigation.active(), Some(3));
        let active_links = ["#home", "#about", "#contact"]
            .iter()
            .filter(|href| navigation.is_link_active(href))
            .count();
        assert_eq!(active_links, 1);
    }

    #[test]
    fn test_leaving_keeps_highlight() {
        let mut navigation = sections();
        navigation.observe(0, true, 1.0);
        // The observer fires on the way out with a ratio below the threshold.
        let update = navigation.observe(0, true, 0.55).unwrap();
        assert!(!update.visible && !update.activated);
        assert_eq!(navigation.active(), Some(0));

        // Coming back re-activates after another section took over.
        navigation.observe(1, true, 0.9);
        assert!(navigation.observe(0, true, 0.9).unwrap().activated);
    }

    #[test]
    fn test_sections_without_ids() {
        let mut navigation = sections();
        navigation.observe(2, true, 1.0);
        assert_eq!(navigation.active(), Some(2));
        assert_eq!(navigation.active_id(), None);
        assert!(!navigation.is_link_active("#"));
        assert_eq!(navigation.observe(7, true, 1.0), None);
    }
}
