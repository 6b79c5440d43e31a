// overlap/animator/src/frame.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turns one geometry snapshot into the style of every section.
//!
//! Each adjacent pair `(i, i + 1)` is evaluated independently from the snapshot. Section
//! `i + 1` takes the *incoming* role of the pair and section `i` the *covered* role. A section
//! in the middle of the sequence can hold both roles at once, in which case the two roles are
//! composed into a single transform.

use crate::config::{DriveMode, OverlapConfig};
use crate::progress;
use crate::snapshot::Snapshot;
use crate::style::{PageClasses, PageStyle, PageTransform, PointerEvents};

/// The computed output of one animation frame.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Frame {
    /// One style per section, in section order.
    pub pages: Vec<PageStyle>,
    /// One progress value per adjacent pair; empty in degraded mode.
    pub progress: Vec<f32>,
    /// True if the viewport is below the mobile breakpoint and every override was cleared.
    pub degraded: bool,
}

impl Frame {
    /// A frame that clears all overlap styling from `page_count` sections.
    pub fn degraded(page_count: usize) -> Frame {
        Frame {
            pages: vec![PageStyle::cleared(); page_count],
            progress: vec![],
            degraded: true,
        }
    }
}

/// The result of evaluating one pair.
#[derive(Clone, Copy, PartialEq, Debug)]
enum PairState {
    /// The next section has not entered the frame yet.
    Parked,
    Overlapping {
        /// Incoming translation, in percent.
        incoming_translate: f32,
        /// The incoming section has reached its resting position.
        arrived: bool,
        opacity: f32,
        scale: f32,
        lift: f32,
    },
}

#[derive(Clone, Copy, Default)]
struct Roles {
    incoming: Option<f32>,
    covered: Option<(f32, f32, f32)>,
    style: PageStyle,
}

/// Computes the frame for `snapshot`.
///
/// `pointer_y` is the eased, normalized pointer position (0 at the top of the screen). It is
/// ignored unless the animator is pointer-driven.
pub fn compute(config: &OverlapConfig, snapshot: &Snapshot, pointer_y: f32) -> Frame {
    let page_count = snapshot.page_count();
    if snapshot.viewport.x() < config.mobile_breakpoint {
        return Frame::degraded(page_count);
    }

    let viewport_height = snapshot.viewport.y();
    let pointer_factor = match config.drive {
        DriveMode::Pointer => 1.0 - pointer_y,
        DriveMode::Scroll => 0.0,
    };

    let mut roles = vec![Roles::default(); page_count];
    let mut pair_progress = Vec::with_capacity(page_count.saturating_sub(1));

    for index in 0..page_count.saturating_sub(1) {
        let progress = progress::pair_progress(snapshot.distance_to(index + 1), viewport_height);
        pair_progress.push(progress);

        match evaluate_pair(config, progress, viewport_height, pointer_factor) {
            PairState::Parked => {
                // The covered role is simply absent; the next section waits below the frame.
                roles[index + 1].incoming = Some(PageTransform::PARKED.translate_y);
            }
            PairState::Overlapping { incoming_translate, arrived, opacity, scale, lift } => {
                let current = &mut roles[index];
                current.covered = Some((opacity, scale, lift));
                current.style.classes |= PageClasses::COVERED;
                current.style.pointer_events = if arrived {
                    Some(PointerEvents::None)
                } else {
                    current.style.pointer_events.or(Some(PointerEvents::Auto))
                };

                let next = &mut roles[index + 1];
                next.incoming = Some(incoming_translate);
                next.style.classes |= PageClasses::INCOMING;
                next.style.pointer_events = Some(PointerEvents::Auto);
            }
        }
    }

    let pages = roles.into_iter().map(compose).collect();
    Frame { pages, progress: pair_progress, degraded: false }
}

fn evaluate_pair(config: &OverlapConfig,
                 progress: f32,
                 viewport_height: f32,
                 pointer_factor: f32)
                 -> PairState {
    if progress <= 0.0 {
        return PairState::Parked;
    }

    let offset = progress::incoming_offset(progress,
                                           viewport_height,
                                           config.pull_strength,
                                           pointer_factor);
    let arrived = offset <= config.arrival_threshold_px;
    let incoming_translate = if arrived { 0.0 } else { offset / viewport_height * 100.0 };

    PairState::Overlapping {
        incoming_translate,
        arrived,
        opacity: progress::covered_opacity(progress, config.max_dim),
        scale: progress::covered_scale(progress, config.max_scale_reduction),
        lift: progress::covered_lift(progress, config.covered_lift),
    }
}

fn compose(roles: Roles) -> PageStyle {
    let mut style = roles.style;
    let (opacity, scale, lift) = match roles.covered {
        Some((opacity, scale, lift)) => (Some(opacity), scale, lift),
        None => (None, 1.0, 0.0),
    };
    style.opacity = opacity;
    if roles.incoming.is_some() || roles.covered.is_some() {
        let translate_y = roles.incoming.unwrap_or(0.0) - lift;
        style.transform = Some(PageTransform { translate_y, scale });
    }
    style
}
