// overlap/animator/src/scheduler.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bookkeeping for animation-frame requests.
//!
//! In on-demand mode any number of requests between two frames collapse into a single pending
//! frame. In continuous mode the first request starts a loop that asks for a new frame after
//! every frame it runs, for as long as the page lives.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrameScheduler {
    continuous: bool,
    pending: bool,
}

impl FrameScheduler {
    #[inline]
    pub fn on_demand() -> FrameScheduler {
        FrameScheduler { continuous: false, pending: false }
    }

    #[inline]
    pub fn continuous() -> FrameScheduler {
        FrameScheduler { continuous: true, pending: false }
    }

    /// Notes that a recompute is wanted. Returns true if the caller must ask the host for an
    /// animation frame; false if one is already on its way.
    #[inline]
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called first thing in the frame callback. Clears the pending flag, so that events arriving
    /// while the frame runs schedule a fresh one, and returns true if the caller must request the
    /// next frame itself.
    #[inline]
    pub fn begin_frame(&mut self) -> bool {
        self.pending = self.continuous;
        self.continuous
    }
}

#[cfg(test)]
mod test {
    use super::FrameScheduler;

    #[test]
    fn test_requests_coalesce() {
        let mut scheduler = FrameScheduler::on_demand();
        assert!(scheduler.request());
        assert!(!scheduler.request());
        assert!(!scheduler.request());

        assert!(!scheduler.begin_frame());
        assert_eq!(scheduler, FrameScheduler::on_demand());
        assert!(scheduler.request());
    }

    #[test]
    fn test_continuous_loop_reschedules_itself() {
        let mut scheduler = FrameScheduler::continuous();
        assert!(scheduler.request());
        for _ in 0..3 {
            assert!(scheduler.begin_frame());
            // The loop already has the next frame in hand.
            assert!(!scheduler.request());
        }
    }
}
