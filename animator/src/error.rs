// overlap/animator/src/error.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Errors that can occur when building an `OverlapConfig`.
#[derive(Clone, PartialEq, Debug)]
pub enum ConfigError {
    /// The options string was not valid JSON, or did not match the expected shape.
    ///
    /// The string holds the message that the JSON parser returned.
    Json(String),
    /// A numeric option was non-finite or outside of its permitted range.
    OutOfRange {
        /// The option, as spelled in JSON.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the permitted range.
        expected: &'static str,
    },
}

impl Display for ConfigError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            ConfigError::Json(ref message) => {
                write!(formatter, "invalid overlap options: {}", message)
            }
            ConfigError::OutOfRange { field, value, expected } => {
                write!(formatter, "option `{}` is {}, expected {}", field, value, expected)
            }
        }
    }
}

impl Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    #[inline]
    fn from(error: serde_json::Error) -> ConfigError {
        ConfigError::Json(error.to_string())
    }
}
