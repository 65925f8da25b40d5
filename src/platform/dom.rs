//! DOM access helpers

use std::cell::Cell;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{FxError, Result};
use crate::fx::{ElementKey, Rect};

/// Attribute holding an element's stable key
const KEY_ATTR: &str = "data-fx-key";

thread_local! {
    static NEXT_KEY: Cell<ElementKey> = const { Cell::new(1) };
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(FxError::MissingElement("window"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or(FxError::MissingElement("document"))
}

/// Optional element by id
pub fn by_id(id: &str) -> Option<HtmlElement> {
    document()
        .ok()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Required element by id
pub fn require_id(id: &'static str) -> Result<HtmlElement> {
    by_id(id).ok_or(FxError::MissingElement(id))
}

/// All matching HTML elements in the document, in document order
pub fn query_all(selector: &str) -> Result<Vec<HtmlElement>> {
    Ok(collect(document()?.query_selector_all(selector)?))
}

/// All matching HTML elements below `root`, in document order
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<HtmlElement>> {
    Ok(collect(root.query_selector_all(selector)?))
}

fn collect(list: web_sys::NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Stable key for `el`, assigned on first use
pub fn element_key(el: &Element) -> ElementKey {
    if let Some(key) = el.get_attribute(KEY_ATTR).and_then(|k| k.parse().ok()) {
        return key;
    }
    let key = NEXT_KEY.with(|next| {
        let key = next.get();
        next.set(key + 1);
        key
    });
    let _ = el.set_attribute(KEY_ATTR, &key.to_string());
    key
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn rect_of(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

pub fn client_point(event: &web_sys::MouseEvent) -> Vec2 {
    Vec2::new(event.client_x() as f32, event.client_y() as f32)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Attach a page-lifetime event listener
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach a page-lifetime passive listener (scroll/touch)
pub fn listen_passive(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}
