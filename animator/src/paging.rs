// overlap/animator/src/paging.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One-section-at-a-time navigation from wheel and keyboard input.
//!
//! At most one transition is in flight. Input that arrives during the cooldown window after a
//! transition starts is dropped, not queued, and does not extend the window.

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PagingIntent {
    Next,
    Previous,
    First,
    Last,
}

impl PagingIntent {
    /// Maps a wheel delta to an intent. Deltas smaller than `threshold` are not gestures.
    pub fn from_wheel(delta_y: f64, threshold: f64) -> Option<PagingIntent> {
        if !delta_y.is_finite() || delta_y == 0.0 || delta_y.abs() < threshold {
            None
        } else if delta_y > 0.0 {
            Some(PagingIntent::Next)
        } else {
            Some(PagingIntent::Previous)
        }
    }

    /// Maps a `KeyboardEvent.key` value to an intent.
    pub fn from_key(key: &str) -> Option<PagingIntent> {
        match key {
            "ArrowDown" | "PageDown" => Some(PagingIntent::Next),
            "ArrowUp" | "PageUp" => Some(PagingIntent::Previous),
            "Home" => Some(PagingIntent::First),
            "End" => Some(PagingIntent::Last),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PagingController {
    index: usize,
    count: usize,
    cooldown: Duration,
    transition_started: Option<Instant>,
}

impl PagingController {
    pub fn new(count: usize, cooldown: Duration) -> PagingController {
        PagingController { index: 0, count, cooldown, transition_started: None }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// True while a transition started less than one cooldown ago.
    pub fn is_transitioning(&self, now: Instant) -> bool {
        match self.transition_started {
            Some(started) => now < started || now.duration_since(started) < self.cooldown,
            None => false,
        }
    }

    /// Handles one input. Returns the section to scroll to, or `None` if the input was dropped
    /// because of the cooldown or would not move off the current section.
    pub fn request(&mut self, intent: PagingIntent, now: Instant) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        if self.is_transitioning(now) {
            trace!("paging: dropped {:?} during cooldown", intent);
            return None;
        }
        self.transition_started = None;

        let last = self.count - 1;
        let target = match intent {
            PagingIntent::Next => (self.index + 1).min(last),
            PagingIntent::Previous => self.index.saturating_sub(1),
            PagingIntent::First => 0,
            PagingIntent::Last => last,
        };
        if target == self.index {
            return None;
        }

        debug!("paging: {:?} from section {} to {}", intent, self.index, target);
        self.index = target;
        self.transition_started = Some(now);
        Some(target)
    }

    /// Adopts the section that became active by other means, such as native scrolling or a
    /// navigation link. Ignored while a transition is in flight, since the sections it scrolls
    /// past would otherwise be adopted on the way.
    pub fn sync_index(&mut self, index: usize, now: Instant) {
        if index < self.count && !self.is_transitioning(now) {
            self.index = index;
        }
    }
}
