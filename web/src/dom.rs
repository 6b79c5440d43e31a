// overlap/web/src/dom.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Discovery of the elements the effect works on.
//!
//! The markup is read once at startup. Sections are never created or removed afterwards, only
//! styled.

use crate::error::OverlapError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

pub const SCROLLER_SELECTOR: &str = ".scroller";
pub const PAGE_SELECTOR: &str = ".page";
pub const PAGE_INNER_SELECTOR: &str = ".page-inner";
pub const NAV_LINK_SELECTOR: &str = ".navbar a";
pub const NAV_ANCHOR_SELECTOR: &str = ".navbar a[href^=\"#\"]";

/// One full-screen section.
pub struct Page {
    /// The `.page` element. Its box is what gets measured.
    pub element: HtmlElement,
    /// The `.page-inner` wrapper that gets styled, or `element` itself if there is none.
    pub inner: HtmlElement,
    pub id: String,
}

impl Page {
    pub fn new(element: HtmlElement) -> Result<Page, OverlapError> {
        let inner = element.query_selector(PAGE_INNER_SELECTOR)?
                           .and_then(|inner| inner.dyn_into::<HtmlElement>().ok())
                           .unwrap_or_else(|| element.clone());
        let id = element.id();
        Ok(Page { element, inner, id })
    }

    /// True if `target` is this section's outer element.
    #[inline]
    pub fn is(&self, target: &Element) -> bool {
        AsRef::<Element>::as_ref(&self.element) == target
    }
}

pub struct Markup {
    pub scroller: HtmlElement,
    pub pages: Vec<Page>,
    pub nav_links: Vec<Element>,
}

impl Markup {
    /// Finds the scroller, its sections and the navigation links in `document`.
    pub fn discover(document: &Document) -> Result<Markup, OverlapError> {
        let scroller = document.query_selector(SCROLLER_SELECTOR)?
                               .and_then(|scroller| scroller.dyn_into::<HtmlElement>().ok())
                               .ok_or(OverlapError::MissingScroller)?;
        let nav_links = elements(&document.query_selector_all(NAV_LINK_SELECTOR)?);
        Markup::from_scroller(scroller, nav_links)
    }

    pub fn from_scroller(scroller: HtmlElement, nav_links: Vec<Element>)
                         -> Result<Markup, OverlapError> {
        let mut pages = vec![];
        for element in elements(&scroller.query_selector_all(PAGE_SELECTOR)?) {
            if let Ok(element) = element.dyn_into::<HtmlElement>() {
                pages.push(Page::new(element)?);
            }
        }
        if pages.is_empty() {
            return Err(OverlapError::NoPages);
        }
        Ok(Markup { scroller, pages, nav_links })
    }

    #[inline]
    pub fn page_ids(&self) -> Vec<String> {
        self.pages.iter().map(|page| page.id.clone()).collect()
    }

    pub fn page_index_of(&self, target: &Element) -> Option<usize> {
        self.pages.iter().position(|page| page.is(target))
    }
}

/// Collects the element nodes of a `NodeList`.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length()).filter_map(|index| list.item(index))
                      .filter_map(|node| node.dyn_into::<Element>().ok())
                      .collect()
}
