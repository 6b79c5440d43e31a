// overlap/animator/src/animator.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The state owned by one overlap instance, and how input events mutate it.

use crate::config::{DriveMode, OverlapConfig};
use crate::frame::{self, Frame};
use crate::paging::{PagingController, PagingIntent};
use crate::pointer::PointerState;
use crate::scheduler::FrameScheduler;
use crate::snapshot::Snapshot;
use instant::Instant;

/// Input the host forwards from the browser.
#[derive(Clone, PartialEq, Debug)]
pub enum InputEvent {
    Scrolled,
    Resized,
    Loaded,
    PointerMoved { client_y: f32, viewport_height: f32 },
    PointerReleased,
    Wheel { delta_y: f64 },
    /// A `KeyboardEvent.key` value.
    Key(String),
}

/// What the host must do in response to an event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Reaction {
    /// Ask for an animation frame.
    pub request_frame: bool,
    /// Smoothly scroll this section into view.
    pub navigate_to: Option<usize>,
    /// Suppress the event's default action.
    pub consumed: bool,
}

pub struct Animator {
    config: OverlapConfig,
    section_count: usize,
    pointer: PointerState,
    scheduler: FrameScheduler,
    paging: Option<PagingController>,
    degraded: bool,
}

impl Animator {
    pub fn new(config: OverlapConfig, section_count: usize) -> Animator {
        let scheduler = match config.drive {
            DriveMode::Scroll => FrameScheduler::on_demand(),
            DriveMode::Pointer => FrameScheduler::continuous(),
        };
        let paging = if config.paging.enabled {
            Some(PagingController::new(section_count, config.paging.cooldown()))
        } else {
            None
        };
        Animator {
            config,
            section_count,
            pointer: PointerState::new(),
            scheduler,
            paging,
            degraded: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &OverlapConfig {
        &self.config
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.section_count
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn paging(&self) -> Option<&PagingController> {
        self.paging.as_ref()
    }

    /// True if the last frame fell below the mobile breakpoint.
    #[inline]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Asks for a recompute outside of any browser event.
    #[inline]
    pub fn request_frame(&mut self) -> bool {
        self.scheduler.request()
    }

    pub fn handle_event(&mut self, event: &InputEvent, now: Instant) -> Reaction {
        match *event {
            InputEvent::Scrolled | InputEvent::Resized | InputEvent::Loaded => {
                Reaction { request_frame: self.scheduler.request(), ..Reaction::default() }
            }
            InputEvent::PointerMoved { client_y, viewport_height } => {
                if self.config.drive != DriveMode::Pointer {
                    return Reaction::default();
                }
                self.pointer.move_to(client_y, viewport_height);
                Reaction { request_frame: self.scheduler.request(), ..Reaction::default() }
            }
            InputEvent::PointerReleased => {
                if self.config.drive != DriveMode::Pointer {
                    return Reaction::default();
                }
                self.pointer.release();
                Reaction { request_frame: self.scheduler.request(), ..Reaction::default() }
            }
            InputEvent::Wheel { delta_y } => {
                let intent = PagingIntent::from_wheel(delta_y, self.config.paging.wheel_threshold);
                self.page(intent, now)
            }
            InputEvent::Key(ref key) => self.page(PagingIntent::from_key(key), now),
        }
    }

    fn page(&mut self, intent: Option<PagingIntent>, now: Instant) -> Reaction {
        // Small viewports scroll natively.
        if self.degraded {
            return Reaction::default();
        }
        match (self.paging.as_mut(), intent) {
            (Some(paging), Some(intent)) => {
                // Input during a transition is swallowed; at the first or last section it is
                // left to the browser so content past the edge stays reachable.
                let in_flight = paging.is_transitioning(now);
                let navigate_to = paging.request(intent, now);
                Reaction {
                    navigate_to,
                    consumed: in_flight || navigate_to.is_some(),
                    request_frame: false,
                }
            }
            _ => Reaction::default(),
        }
    }

    /// Tells the paging controller which section is on screen.
    pub fn sync_section(&mut self, index: usize, now: Instant) {
        if let Some(ref mut paging) = self.paging {
            paging.sync_index(index, now);
        }
    }

    /// Called first thing in the animation-frame callback. Returns true if the host must request
    /// the next frame.
    #[inline]
    pub fn begin_frame(&mut self) -> bool {
        self.scheduler.begin_frame()
    }

    /// Advances pointer easing by one frame and computes the styles for `snapshot`.
    pub fn tick(&mut self, snapshot: &Snapshot) -> Frame {
        let pointer_y = match self.config.drive {
            DriveMode::Pointer => self.pointer.step(self.config.pointer_ease),
            DriveMode::Scroll => self.pointer.current(),
        };
        let frame = frame::compute(&self.config, snapshot, pointer_y);
        if frame.degraded != self.degraded {
            debug!("overlap effect {} at viewport width {}",
                   if frame.degraded { "disabled" } else { "enabled" },
                   snapshot.viewport.x());
            self.degraded = frame.degraded;
        }
        frame
    }
}

#[cfg(test)]
mod test {
    use super::{Animator, InputEvent, Reaction};
    use crate::config::OverlapConfig;
    use crate::snapshot::Snapshot;
    use instant::Instant;
    use overlap_geometry::vector::vec2f;
    use std::time::Duration;

    fn paging_config() -> OverlapConfig {
        let mut config = OverlapConfig::default();
        config.paging.enabled = true;
        config
    }

    #[test]
    fn test_scroll_events_coalesce_into_one_frame() {
        let now = Instant::now();
        let mut animator = Animator::new(OverlapConfig::default(), 4);

        assert!(animator.handle_event(&InputEvent::Scrolled, now).request_frame);
        for _ in 0..20 {
            assert!(!animator.handle_event(&InputEvent::Scrolled, now).request_frame);
        }
        assert!(!animator.handle_event(&InputEvent::Resized, now).request_frame);

        assert!(!animator.begin_frame());
        animator.tick(&Snapshot::stacked(vec2f(1280.0, 800.0), 4, 0.0));
        assert!(animator.handle_event(&InputEvent::Scrolled, now).request_frame);
    }

    #[test]
    fn test_pointer_ignored_in_scroll_drive() {
        let now = Instant::now();
        let mut animator = Animator::new(OverlapConfig::default(), 2);
        let event = InputEvent::PointerMoved { client_y: 0.0, viewport_height: 800.0 };
        assert_eq!(animator.handle_event(&event, now), Reaction::default());
        assert_eq!(animator.pointer().target(), 1.0);
    }

    #[test]
    fn test_pointer_drive_eases_toward_pointer() {
        let now = Instant::now();
        let mut animator = Animator::new(OverlapConfig::pointer_driven(), 2);
        let event = InputEvent::PointerMoved { client_y: 0.0, viewport_height: 800.0 };

        assert!(animator.handle_event(&event, now).request_frame);
        let snapshot = Snapshot::stacked(vec2f(1280.0, 800.0), 2, 400.0);

        let mut previous = animator.pointer().current();
        let mut previous_translate = 50.0;
        for _ in 0..30 {
            assert!(animator.begin_frame());
            let frame = animator.tick(&snapshot);
            let current = animator.pointer().current();
            assert!(current < previous);
            let translate = frame.pages[1].transform.unwrap().translate_y;
            assert!(translate < previous_translate);
            previous = current;
            previous_translate = translate;
        }

        animator.handle_event(&InputEvent::PointerReleased, now);
        assert_eq!(animator.pointer().target(), 1.0);
    }

    #[test]
    fn test_paging_round_trip() {
        let start = Instant::now();
        let mut animator = Animator::new(paging_config(), 4);

        let down = InputEvent::Key("ArrowDown".to_owned());
        let reaction = animator.handle_event(&down, start);
        assert_eq!(reaction.navigate_to, Some(1));
        assert!(reaction.consumed);

        let reaction = animator.handle_event(&InputEvent::Wheel { delta_y: 120.0 },
                                             start + Duration::from_millis(300));
        assert_eq!(reaction.navigate_to, None);
        assert!(reaction.consumed);

        let reaction = animator.handle_event(&InputEvent::Wheel { delta_y: 120.0 },
                                             start + Duration::from_millis(900));
        assert_eq!(reaction.navigate_to, Some(2));

        // Tiny wheel deltas and unrelated keys fall through to the browser.
        let later = start + Duration::from_secs(5);
        assert!(!animator.handle_event(&InputEvent::Wheel { delta_y: 2.0 }, later).consumed);
        assert!(!animator.handle_event(&InputEvent::Key("x".to_owned()), later).consumed);
    }

    #[test]
    fn test_paging_past_the_edges_scrolls_natively() {
        let start = Instant::now();
        let mut animator = Animator::new(paging_config(), 3);
        let up = InputEvent::Key("ArrowUp".to_owned());
        assert_eq!(animator.handle_event(&up, start), Reaction::default());

        let end = animator.handle_event(&InputEvent::Key("End".to_owned()), start);
        assert_eq!(end.navigate_to, Some(2));

        // Still within the cooldown of the jump: swallowed.
        let down = InputEvent::Wheel { delta_y: 120.0 };
        let reaction = animator.handle_event(&down, start + Duration::from_millis(100));
        assert!(reaction.consumed && reaction.navigate_to.is_none());

        // On the last section once the transition settled: native.
        let reaction = animator.handle_event(&down, start + Duration::from_secs(2));
        assert_eq!(reaction, Reaction::default());
        let reaction = animator.handle_event(&InputEvent::Key("PageDown".to_owned()),
                                             start + Duration::from_secs(2));
        assert!(!reaction.consumed);
    }

    #[test]
    fn test_paging_disabled_by_default() {
        let mut animator = Animator::new(OverlapConfig::default(), 4);
        let reaction = animator.handle_event(&InputEvent::Key("ArrowDown".to_owned()),
                                             Instant::now());
        assert_eq!(reaction, Reaction::default());
        assert!(animator.paging().is_none());
    }

    #[test]
    fn test_paging_off_in_degraded_mode() {
        let now = Instant::now();
        let mut animator = Animator::new(paging_config(), 4);
        let frame = animator.tick(&Snapshot::stacked(vec2f(600.0, 800.0), 4, 0.0));
        assert!(frame.degraded);
        assert!(animator.is_degraded());
        assert_eq!(animator.handle_event(&InputEvent::Key("ArrowDown".to_owned()), now),
                   Reaction::default());

        animator.tick(&Snapshot::stacked(vec2f(1280.0, 800.0), 4, 0.0));
        assert_eq!(animator.handle_event(&InputEvent::Key("ArrowDown".to_owned()), now)
                           .navigate_to,
                   Some(1));
    }

    #[test]
    fn test_sync_section() {
        let now = Instant::now();
        let mut animator = Animator::new(paging_config(), 4);
        animator.sync_section(2, now);
        assert_eq!(animator.paging().unwrap().index(), 2);
        let reaction = animator.handle_event(&InputEvent::Key("PageDown".to_owned()), now);
        assert_eq!(reaction.navigate_to, Some(3));
    }
}
