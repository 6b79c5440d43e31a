// overlap/web/src/error.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors.

use overlap_animator::ConfigError;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use wasm_bindgen::JsValue;

/// An error that stops the overlap effect from being installed.
///
/// None of these affect the rest of the page. `initOverlap` throws all of them except
/// `NoPages`, which only leaves the effect uninstalled.
#[derive(Clone, PartialEq, Debug)]
pub enum OverlapError {
    /// There is no global `window`, as in a worker.
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// No `.scroller` element exists.
    MissingScroller,
    /// The scroller contains no `.page` elements.
    NoPages,
    /// The options were rejected.
    InvalidConfig(ConfigError),
    /// A browser API call threw.
    ///
    /// The string holds the debug rendering of the thrown value.
    Js(String),
}

impl Display for OverlapError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            OverlapError::NoWindow => formatter.write_str("no global `window` is available"),
            OverlapError::NoDocument => formatter.write_str("the window has no document"),
            OverlapError::MissingScroller => {
                formatter.write_str("no `.scroller` element found; make sure the script runs \
                                     after the document has been parsed")
            }
            OverlapError::NoPages => {
                formatter.write_str("the scroller contains no `.page` elements")
            }
            OverlapError::InvalidConfig(ref error) => Display::fmt(error, formatter),
            OverlapError::Js(ref message) => write!(formatter, "browser call failed: {}", message),
        }
    }
}

impl Error for OverlapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            OverlapError::InvalidConfig(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigError> for OverlapError {
    #[inline]
    fn from(error: ConfigError) -> OverlapError {
        OverlapError::InvalidConfig(error)
    }
}

impl From<JsValue> for OverlapError {
    #[inline]
    fn from(value: JsValue) -> OverlapError {
        OverlapError::Js(format!("{:?}", value))
    }
}

impl From<OverlapError> for JsValue {
    #[inline]
    fn from(error: OverlapError) -> JsValue {
        js_sys::Error::new(&error.to_string()).into()
    }
}
