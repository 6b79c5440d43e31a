// overlap/web/src/lib.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Installs the page cover-overlap effect on a document.
//!
//! Expected markup: a `.scroller` container holding `.page` sections, each optionally wrapping
//! its content in a `.page-inner` element, plus `.navbar a[href="#<id>"]` links outside of the
//! scroller. The effect toggles the `page-covered`, `page-incoming`, `animate` and `active`
//! classes; styling them is left to the page's stylesheet.

#[macro_use]
extern crate log;

pub mod dom;
pub mod driver;
pub mod error;
pub mod events;
pub mod logger;
pub mod measure;
pub mod navigation;
pub mod overlap;
pub mod render;

mod utils;

use crate::dom::Markup;
use crate::driver::FrameDriver;
use crate::error::OverlapError;
use crate::overlap::{Overlap, SharedOverlap};
use log::LevelFilter;
use overlap_animator::{Animator, OverlapConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct OverlapHandle {
    overlap: SharedOverlap,
    driver: FrameDriver,
}

/// Installs the effect.
///
/// `options` is an optional JSON object overriding any subset of the defaults, for example
/// `{"drive": "pointer", "paging": {"enabled": true}}`. Returns `undefined` if the scroller holds
/// no sections, and throws if there is no scroller or the options are invalid.
#[wasm_bindgen(js_name = "initOverlap")]
pub fn init_overlap(options: Option<String>) -> Result<Option<OverlapHandle>, JsValue> {
    utils::set_panic_hook();
    logger::init(LevelFilter::Info);

    let result = parse_options(options.as_deref()).and_then(|config| {
        logger::init(config.log_level);
        install(config)
    });
    settle(result).map_err(JsValue::from)
}

/// Logs why the effect was not installed. Nothing to animate is not an error for the page.
fn settle<T>(result: Result<T, OverlapError>) -> Result<Option<T>, OverlapError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(OverlapError::NoPages) => {
            warn!("overlap effect not installed: {}", OverlapError::NoPages);
            Ok(None)
        }
        Err(error) => {
            error!("overlap effect not installed: {}", error);
            Err(error)
        }
    }
}

fn parse_options(options: Option<&str>) -> Result<OverlapConfig, OverlapError> {
    match options {
        Some(json) if !json.trim().is_empty() => Ok(OverlapConfig::from_json(json)?),
        _ => Ok(OverlapConfig::default()),
    }
}

fn install(config: OverlapConfig) -> Result<OverlapHandle, OverlapError> {
    let window = web_sys::window().ok_or(OverlapError::NoWindow)?;
    let document = window.document().ok_or(OverlapError::NoDocument)?;

    // Anchor links scroll smoothly even if the effect itself cannot be installed.
    navigation::intercept_anchor_clicks(&document)?;

    let markup = Markup::discover(&document)?;
    info!("overlap effect on {} sections ({:?} drive, {:?} measurement)",
          markup.pages.len(),
          config.drive,
          config.measurement);

    let animator = Animator::new(config, markup.pages.len());
    let overlap = Rc::new(RefCell::new(Overlap::new(window.clone(), markup, animator)));
    let driver = FrameDriver::new(window, overlap.clone());

    let observer = navigation::observe_sections(&overlap)?;
    overlap.borrow_mut().observer = Some(observer);
    events::install(&overlap, &driver)?;

    let handle = OverlapHandle { overlap, driver };
    handle.refresh();
    Ok(handle)
}

#[wasm_bindgen]
impl OverlapHandle {
    /// Recomputes the effect on the next animation frame, for hosts that change layout without
    /// scrolling or resizing.
    pub fn refresh(&self) {
        if self.overlap.borrow_mut().animator.request_frame() {
            self.driver.request_frame();
        }
    }

    #[wasm_bindgen(getter, js_name = "sectionCount")]
    pub fn section_count(&self) -> u32 {
        self.overlap.borrow().animator.section_count() as u32
    }

    #[wasm_bindgen(getter, js_name = "activeSection")]
    pub fn active_section(&self) -> Option<u32> {
        self.overlap.borrow().navigation.active().map(|index| index as u32)
    }

    /// True while the viewport is below the mobile breakpoint and the effect is off.
    #[wasm_bindgen(getter)]
    pub fn degraded(&self) -> bool {
        self.overlap.borrow().animator.is_degraded()
    }
}

#[cfg(test)]
mod test {
    use super::{parse_options, settle};
    use crate::error::OverlapError;
    use overlap_animator::{ConfigError, DriveMode, OverlapConfig};

    #[test]
    fn test_parse_options() {
        assert_eq!(parse_options(None).unwrap(), OverlapConfig::default());
        assert_eq!(parse_options(Some("  ")).unwrap(), OverlapConfig::default());
        assert_eq!(parse_options(Some(r#"{"drive":"pointer"}"#)).unwrap().drive,
                   DriveMode::Pointer);
        match parse_options(Some("42")) {
            Err(OverlapError::InvalidConfig(ConfigError::Json(_))) => {}
            other => panic!("expected invalid options, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_only_an_empty_scroller_is_tolerated() {
        assert_eq!(settle(Ok(3)), Ok(Some(3)));
        assert_eq!(settle::<()>(Err(OverlapError::NoPages)), Ok(None));
        assert_eq!(settle::<()>(Err(OverlapError::MissingScroller)),
                   Err(OverlapError::MissingScroller));
        assert_eq!(settle::<()>(Err(OverlapError::NoWindow)), Err(OverlapError::NoWindow));
    }
}
