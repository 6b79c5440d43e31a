// overlap/animator/src/style.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The presentational state written to one section's inner wrapper.
//!
//! `None` fields mean "no inline override": the host removes the property so that the
//! stylesheet applies.

bitflags! {
    pub struct PageClasses: u8 {
        const COVERED  = 0x01;
        const INCOMING = 0x02;
    }
}

pub const COVERED_CLASS: &str = "page-covered";
pub const INCOMING_CLASS: &str = "page-incoming";

impl Default for PageClasses {
    #[inline]
    fn default() -> PageClasses {
        PageClasses::empty()
    }
}

impl PageClasses {
    /// Every class this crate manages, with whether `self` sets it.
    pub fn class_states(self) -> [(&'static str, bool); 2] {
        [
            (COVERED_CLASS, self.contains(PageClasses::COVERED)),
            (INCOMING_CLASS, self.contains(PageClasses::INCOMING)),
        ]
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerEvents {
    Auto,
    None,
}

impl PointerEvents {
    #[inline]
    pub fn as_css(self) -> &'static str {
        match self {
            PointerEvents::Auto => "auto",
            PointerEvents::None => "none",
        }
    }
}

/// A vertical translation, in percent of the element's height, followed by a uniform scale.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PageTransform {
    pub translate_y: f32,
    pub scale: f32,
}

impl Default for PageTransform {
    #[inline]
    fn default() -> PageTransform {
        PageTransform { translate_y: 0.0, scale: 1.0 }
    }
}

impl PageTransform {
    /// Fully below the frame.
    pub const PARKED: PageTransform = PageTransform { translate_y: 100.0, scale: 1.0 };

    pub fn to_css(&self) -> String {
        let translate = format!("translate3d(0,{}%,0)", format_css_number(self.translate_y));
        if self.scale == 1.0 {
            translate
        } else {
            format!("{} scale({})", translate, format_css_number(self.scale))
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct PageStyle {
    pub transform: Option<PageTransform>,
    pub opacity: Option<f32>,
    pub pointer_events: Option<PointerEvents>,
    pub classes: PageClasses,
}

impl PageStyle {
    /// No overrides and no managed classes.
    #[inline]
    pub fn cleared() -> PageStyle {
        PageStyle::default()
    }

    #[inline]
    pub fn is_cleared(&self) -> bool {
        *self == PageStyle::cleared()
    }

    #[inline]
    pub fn is_covered(&self) -> bool {
        self.classes.contains(PageClasses::COVERED)
    }

    #[inline]
    pub fn is_incoming(&self) -> bool {
        self.classes.contains(PageClasses::INCOMING)
    }

    /// The `will-change` hint matching the properties this style animates.
    pub fn will_change(&self) -> Option<&'static str> {
        if self.is_covered() {
            Some("transform, opacity")
        } else if self.is_incoming() {
            Some("transform")
        } else {
            None
        }
    }
}

/// Formats a number for a CSS value, rounded to four decimal places and without a trailing
/// `.0`.
pub fn format_css_number(value: f32) -> String {
    let rounded = (value * 10000.0).round() / 10000.0;
    // Avoid "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}
