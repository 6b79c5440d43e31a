// overlap/web/src/render.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Writes computed frames to the DOM.

use crate::dom::Markup;
use overlap_animator::style::format_css_number;
use overlap_animator::{Frame, PageStyle};
use wasm_bindgen::JsValue;
use web_sys::{CssStyleDeclaration, HtmlElement};

/// Applies `frame` to the inner wrapper of every section. A failed write is logged and the
/// remaining sections are still updated.
pub fn apply_frame(markup: &Markup, frame: &Frame, will_change_hints: bool) {
    for (index, (page, style)) in markup.pages.iter().zip(frame.pages.iter()).enumerate() {
        if let Err(error) = apply_style(&page.inner, style, will_change_hints) {
            warn!("failed to style section {} ({:?}): {:?}", index, page.id, error);
        }
    }
}

pub fn apply_style(element: &HtmlElement, style: &PageStyle, will_change_hints: bool)
                   -> Result<(), JsValue> {
    let css = element.style();
    set_or_remove(&css, "transform", style.transform.map(|transform| transform.to_css()))?;
    set_or_remove(&css, "opacity", style.opacity.map(format_css_number))?;
    set_or_remove(&css,
                  "pointer-events",
                  style.pointer_events.map(|pointer_events| pointer_events.as_css().to_owned()))?;
    let will_change = if will_change_hints { style.will_change() } else { None };
    set_or_remove(&css, "will-change", will_change.map(str::to_owned))?;

    let class_list = element.class_list();
    for &(name, enabled) in style.classes.class_states().iter() {
        class_list.toggle_with_force(name, enabled)?;
    }
    Ok(())
}

fn set_or_remove(css: &CssStyleDeclaration, property: &str, value: Option<String>)
                 -> Result<(), JsValue> {
    match value {
        Some(value) => css.set_property(property, &value),
        None => css.remove_property(property).map(|_| ()),
    }
}
