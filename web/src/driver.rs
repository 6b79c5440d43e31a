// overlap/web/src/driver.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `requestAnimationFrame` callback.

use crate::overlap::SharedOverlap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Owns the single frame closure. Whether a frame should be requested at all is decided by the
/// animator's scheduler; the driver only talks to the browser.
#[derive(Clone)]
pub struct FrameDriver {
    window: Window,
    callback: FrameCallback,
}

impl FrameDriver {
    pub fn new(window: Window, overlap: SharedOverlap) -> FrameDriver {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let driver = FrameDriver { window, callback: callback.clone() };

        // The closure keeps the driver, and therefore itself, alive for the page's lifetime.
        let next_frame = driver.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            let reschedule = overlap.borrow_mut().run_frame();
            if reschedule {
                next_frame.request_frame();
            }
        }) as Box<dyn FnMut(f64)>));

        driver
    }

    pub fn request_frame(&self) {
        let callback = self.callback.borrow();
        let callback = match *callback {
            Some(ref callback) => callback,
            None => return,
        };
        if let Err(error) = self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            warn!("requestAnimationFrame failed: {:?}", error);
        }
    }
}
