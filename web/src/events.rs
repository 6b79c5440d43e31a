// overlap/web/src/events.rs
//
// Copyright © 2026 The Overlap Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Browser input wiring.
//!
//! Every listener translates its event into an `InputEvent`, lets the animator decide what to do
//! and carries out the resulting `Reaction`. Listeners live as long as the page.

use crate::driver::FrameDriver;
use crate::measure;
use crate::overlap::SharedOverlap;
use instant::Instant;
use overlap_animator::{DriveMode, InputEvent, Reaction};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Event, EventTarget, HtmlElement, KeyboardEvent};
use web_sys::{PointerEvent, TouchEvent, WheelEvent};

pub fn dispatch(overlap: &SharedOverlap, driver: &FrameDriver, event: InputEvent) -> Reaction {
    let reaction = overlap.borrow_mut().animator.handle_event(&event, Instant::now());
    if reaction.request_frame {
        driver.request_frame();
    }
    if let Some(index) = reaction.navigate_to {
        overlap.borrow().scroll_to_section(index);
    }
    reaction
}

pub fn install(overlap: &SharedOverlap, driver: &FrameDriver) -> Result<(), JsValue> {
    let (window, scroller, document_element) = {
        let overlap = overlap.borrow();
        let document_element = overlap.window.document().and_then(|document| {
            document.document_element()
        });
        (overlap.window.clone(), overlap.markup.scroller.clone(), document_element)
    };
    let config = overlap.borrow().animator.config().clone();

    forward(&scroller, "scroll", overlap, driver, |_| Some(InputEvent::Scrolled))?;
    forward(&window, "resize", overlap, driver, |_| Some(InputEvent::Resized))?;
    forward(&window, "load", overlap, driver, |_| Some(InputEvent::Loaded))?;

    if config.drive == DriveMode::Pointer {
        let pointer_window = window.clone();
        forward(&window, "pointermove", overlap, driver, move |event| {
            let event = event.dyn_ref::<PointerEvent>()?;
            Some(InputEvent::PointerMoved {
                client_y: event.client_y() as f32,
                viewport_height: measure::window_height(&pointer_window),
            })
        })?;
        let touch_window = window.clone();
        forward(&window, "touchmove", overlap, driver, move |event| {
            let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
            Some(InputEvent::PointerMoved {
                client_y: touch.client_y() as f32,
                viewport_height: measure::window_height(&touch_window),
            })
        })?;
        forward(&window, "touchend", overlap, driver, |_| Some(InputEvent::PointerReleased))?;
        if let Some(ref document_element) = document_element {
            forward(document_element, "pointerleave", overlap, driver, |_| {
                Some(InputEvent::PointerReleased)
            })?;
        }
    }

    if config.paging.enabled {
        let wheel = |event: &Event| {
            let event = event.dyn_ref::<WheelEvent>()?;
            Some(InputEvent::Wheel { delta_y: event.delta_y() })
        };
        consume(&window, "wheel", overlap, driver, wheel)?;

        let key = |event: &Event| {
            let event = event.dyn_ref::<KeyboardEvent>()?;
            if event.ctrl_key() || event.alt_key() || event.meta_key() ||
                    is_editable(event.target()) {
                return None;
            }
            Some(InputEvent::Key(event.key()))
        };
        consume(&window, "keydown", overlap, driver, key)?;
    }

    Ok(())
}

/// Forwards events from a passive listener.
fn forward<F>(target: &EventTarget,
              event_type: &str,
              overlap: &SharedOverlap,
              driver: &FrameDriver,
              translate: F)
              -> Result<(), JsValue>
              where F: Fn(&Event) -> Option<InputEvent> + 'static {
    let (overlap, driver) = (overlap.clone(), driver.clone());
    listen(target, event_type, true, move |event| {
        if let Some(input) = translate(&event) {
            dispatch(&overlap, &driver, input);
        }
    })
}

/// Forwards events from an active listener, suppressing the default action of consumed ones.
fn consume<F>(target: &EventTarget,
              event_type: &str,
              overlap: &SharedOverlap,
              driver: &FrameDriver,
              translate: F)
              -> Result<(), JsValue>
              where F: Fn(&Event) -> Option<InputEvent> + 'static {
    let (overlap, driver) = (overlap.clone(), driver.clone());
    listen(target, event_type, false, move |event| {
        if let Some(input) = translate(&event) {
            if dispatch(&overlap, &driver, input).consumed {
                event.prevent_default();
            }
        }
    })
}

fn listen<F>(target: &EventTarget, event_type: &str, passive: bool, handler: F)
             -> Result<(), JsValue>
             where F: FnMut(Event) + 'static {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event_type,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// True if keyboard input on `target` belongs to a form control or editable region.
fn is_editable(target: Option<EventTarget>) -> bool {
    let element = match target.and_then(|target| target.dyn_into::<HtmlElement>().ok()) {
        Some(element) => element,
        None => return false,
    };
    match &*element.tag_name() {
        "INPUT" | "TEXTAREA" | "SELECT" => true,
        _ => element.is_content_editable(),
    }
}
