//! Mobile menu, anchor smooth scroll and the newsletter form

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlInputElement, ScrollBehavior, ScrollToOptions};

use super::dom;
use super::schedule::set_timeout;
use crate::consts::{ANCHOR_SCROLL_OFFSET, NEWSLETTER_CONFIRM_MS};
use crate::error::{FxError, Result};

const NEWSLETTER_OK_LABEL: &str = "✓";
const NEWSLETTER_OK_BACKGROUND: &str = "#22c55e";

fn set_menu_open(open: bool) {
    let Some(menu) = dom::by_id("mobile-menu") else {
        return;
    };
    dom::set_style(&menu, "display", if open { "flex" } else { "none" });
    if let Some(body) = dom::document().ok().and_then(|d| d.body()) {
        dom::set_style(&body, "overflow", if open { "hidden" } else { "" });
    }
}

pub fn close_mobile_menu() {
    set_menu_open(false);
}

pub fn init_mobile_menu() -> Result<()> {
    let open_btn = dom::require_id("menu-btn")?;
    let close_btn = dom::require_id("menu-close")?;
    dom::require_id("mobile-menu")?;

    dom::listen(&open_btn, "click", |_| set_menu_open(true))?;
    dom::listen(&close_btn, "click", |_| close_mobile_menu())?;

    // Inline markup calls window.closeMobileMenu()
    let global = Closure::<dyn Fn()>::new(close_mobile_menu);
    js_sys::Reflect::set(
        &dom::window()?,
        &JsValue::from_str("closeMobileMenu"),
        global.as_ref(),
    )?;
    global.forget();
    Ok(())
}

/// In-page links glide to their target, leaving room for the navbar
pub fn init_anchor_scroll() -> Result<()> {
    for anchor in dom::query_all("a[href^=\"#\"]")? {
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            event.prevent_default();

            let Ok(document) = dom::document() else {
                return;
            };
            // Invalid selectors are ignored like missing targets
            let Ok(Some(target)) = document.query_selector(&href) else {
                return;
            };
            let top = target.get_bounding_client_rect().top() + dom::scroll_y() - ANCHOR_SCROLL_OFFSET;

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            if let Ok(window) = dom::window() {
                window.scroll_to_with_scroll_to_options(&options);
            }
        })?;
    }
    Ok(())
}

/// Flash a confirmation on the newsletter button when an email is entered
pub fn init_newsletter() -> Result<()> {
    let (Some(button), Some(input)) = (dom::by_id("newsletter-btn"), dom::by_id("newsletter-email")) else {
        log::debug!("No newsletter form");
        return Ok(());
    };
    let input: HtmlInputElement = input
        .dyn_into()
        .map_err(|_| FxError::Js("#newsletter-email is not an input".into()))?;

    let confirming = Rc::new(Cell::new(false));
    let target = button.clone();
    dom::listen(&button, "click", move |_| {
        if input.value().is_empty() || confirming.get() {
            return;
        }

        let original = target.text_content().unwrap_or_default();
        target.set_text_content(Some(NEWSLETTER_OK_LABEL));
        dom::set_style(&target, "background", NEWSLETTER_OK_BACKGROUND);
        input.set_value("");
        confirming.set(true);

        let (restore, done) = (target.clone(), confirming.clone());
        let scheduled = set_timeout(NEWSLETTER_CONFIRM_MS, move || {
            restore.set_text_content(Some(&original));
            dom::set_style(&restore, "background", "");
            done.set(false);
        });
        if let Err(e) = scheduled {
            log::warn!("Newsletter reset not scheduled: {}", e);
        }
    })
}
