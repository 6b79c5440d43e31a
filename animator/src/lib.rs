// overlap/animator/src/lib.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The page cover-overlap effect, independent of any DOM.
//!
//! A host feeds input events into an [`Animator`](animator/struct.Animator.html), takes a
//! [`Snapshot`](snapshot/struct.Snapshot.html) of section geometry once per animation frame and
//! applies the returned [`Frame`](frame/struct.Frame.html) to its elements. Everything in this
//! crate is a pure function of those inputs, plus the pointer easing and paging cooldown state
//! that the animator owns.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod animator;
pub mod config;
pub mod error;
pub mod frame;
pub mod navigation;
pub mod paging;
pub mod pointer;
pub mod progress;
pub mod scheduler;
pub mod snapshot;
pub mod style;

pub use crate::animator::{Animator, InputEvent, Reaction};
pub use crate::config::{DriveMode, MeasurementFrame, OverlapConfig, PagingConfig};
pub use crate::error::ConfigError;
pub use crate::frame::Frame;
pub use crate::snapshot::Snapshot;
pub use crate::style::{PageClasses, PageStyle, PageTransform, PointerEvents};
