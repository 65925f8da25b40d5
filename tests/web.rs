#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement};

use vortex_fx::FxConfig;
use vortex_fx::fx::pointer::{CURSOR_HOVER_STYLE, CURSOR_REST_STYLE, MAGNETIC_REST_TRANSFORM};
use vortex_fx::fx::reveal::{IN_VIEW_CLASS, REVEALED_CLASS};
use vortex_fx::fx::stagger_index;
use vortex_fx::platform::{self, dom, loader, page, pointer};

wasm_bindgen_test_configure!(run_in_browser);

fn element(document: &web_sys::Document, tag: &str) -> HtmlElement {
    document.create_element(tag).unwrap().dyn_into().unwrap()
}

fn div(document: &web_sys::Document) -> HtmlElement {
    element(document, "div")
}

/// Element attached to the body with the given id
fn mounted(tag: &str, id: &str) -> HtmlElement {
    let document = dom::document().unwrap();
    let el = element(&document, tag);
    el.set_id(id);
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn style(el: &HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap()
}

/// How the browser serializes `value` for `property`
fn serialized(property: &str, value: &str) -> String {
    let scratch = div(&dom::document().unwrap());
    dom::set_style(&scratch, property, value);
    style(&scratch, property)
}

fn dispatch(el: &HtmlElement, kind: &str) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    el.dispatch_event(&event).unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        dom::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Desktop-only effects arm at any viewport width
fn desktop_config() -> FxConfig {
    FxConfig {
        desktop_min_width: 0.0,
        ..FxConfig::default()
    }
}

#[wasm_bindgen_test]
fn stagger_indices_follow_document_order() {
    let document = dom::document().unwrap();
    let parent = div(&document);
    parent.set_attribute("data-stagger", "").unwrap();

    let children: Vec<HtmlElement> = (0..3)
        .map(|_| {
            let child = div(&document);
            child.set_attribute("data-animate", "fade-up").unwrap();
            parent.append_child(&child).unwrap();
            child
        })
        .collect();
    document.body().unwrap().append_child(&parent).unwrap();

    let marked = dom::query_all_in(&parent, "[data-animate]").unwrap();
    for (i, child) in children.iter().enumerate() {
        assert_eq!(stagger_index(true, &marked, child), Some(i));
    }
}

#[wasm_bindgen_test]
fn element_keys_are_stable_and_distinct() {
    let document = dom::document().unwrap();
    let a = div(&document);
    let b = div(&document);

    let key_a = dom::element_key(&a);
    assert_eq!(dom::element_key(&a), key_a);
    assert_ne!(dom::element_key(&b), key_a);
}

#[wasm_bindgen_test]
fn mobile_menu_opens_and_global_close_restores() {
    let open = mounted("button", "menu-btn");
    let close = mounted("button", "menu-close");
    let menu = mounted("div", "mobile-menu");
    page::init_mobile_menu().unwrap();

    let body = dom::document().unwrap().body().unwrap();
    open.click();
    assert_eq!(style(&menu, "display"), "flex");
    assert_eq!(style(&body, "overflow"), "hidden");

    let window = dom::window().unwrap();
    let global: js_sys::Function = js_sys::Reflect::get(&window, &JsValue::from_str("closeMobileMenu"))
        .unwrap()
        .dyn_into()
        .unwrap();
    global.call0(&JsValue::NULL).unwrap();
    assert_eq!(style(&menu, "display"), "none");
    assert_eq!(style(&body, "overflow"), "");

    open.click();
    close.click();
    assert_eq!(style(&menu, "display"), "none");

    for el in [open, close, menu] {
        el.remove();
    }
}

#[wasm_bindgen_test]
fn anchor_clicks_skip_bare_hash_and_tolerate_missing_targets() {
    let document = dom::document().unwrap();
    let body = document.body().unwrap();

    let bare = element(&document, "a");
    bare.set_attribute("href", "#").unwrap();
    let dangling = element(&document, "a");
    dangling.set_attribute("href", "#no-such-section").unwrap();
    body.append_child(&bare).unwrap();
    body.append_child(&dangling).unwrap();

    page::init_anchor_scroll().unwrap();

    // Runs after the anchor handler; records its verdict and keeps the page put
    let prevented = Rc::new(Cell::new(None));
    for link in [&bare, &dangling] {
        let seen = prevented.clone();
        dom::listen(link, "click", move |event| {
            seen.set(Some(event.default_prevented()));
            event.prevent_default();
        })
        .unwrap();
    }

    let scroll_before = dom::scroll_y();
    dispatch(&bare, "click");
    assert_eq!(prevented.get(), Some(false));

    dispatch(&dangling, "click");
    assert_eq!(prevented.get(), Some(true));
    assert_eq!(dom::scroll_y(), scroll_before);

    bare.remove();
    dangling.remove();
}

#[wasm_bindgen_test]
async fn newsletter_confirms_once_then_restores() {
    let button = mounted("button", "newsletter-btn");
    button.set_text_content(Some("Join"));
    let input: HtmlInputElement = mounted("input", "newsletter-email").dyn_into().unwrap();
    page::init_newsletter().unwrap();

    // Empty email: nothing happens
    button.click();
    assert_eq!(button.text_content().unwrap(), "Join");

    input.set_value("reader@example.com");
    button.click();
    assert_eq!(button.text_content().unwrap(), "✓");
    assert_eq!(input.value(), "");

    // A second submit while confirming is ignored
    input.set_value("again@example.com");
    button.click();
    assert_eq!(input.value(), "again@example.com");

    sleep(2_700).await;
    assert_eq!(button.text_content().unwrap(), "Join");
    assert_eq!(style(&button, "background"), "");

    button.remove();
    input.remove();
}

#[wasm_bindgen_test]
fn cursor_grows_over_interactive_elements() {
    let dot = mounted("div", "cursor-dot");
    let link = mounted("a", "cursor-hover-target");
    link.set_attribute("href", "#").unwrap();
    pointer::init_cursor(&desktop_config()).unwrap();

    dispatch(&link, "mouseenter");
    assert_eq!(style(&dot, "transform"), serialized("transform", CURSOR_HOVER_STYLE.0));
    assert_eq!(style(&dot, "opacity"), serialized("opacity", CURSOR_HOVER_STYLE.1));

    dispatch(&link, "mouseleave");
    assert_eq!(style(&dot, "transform"), serialized("transform", CURSOR_REST_STYLE.0));
    assert_eq!(style(&dot, "opacity"), serialized("opacity", CURSOR_REST_STYLE.1));

    platform::teardown();
    dot.remove();
    link.remove();
}

#[wasm_bindgen_test]
fn magnetic_button_recenters_on_leave() {
    let button = mounted("button", "magnetic-target");
    button.class_list().add_1("magnetic-btn").unwrap();
    pointer::init_magnetic(&desktop_config()).unwrap();

    dom::set_style(&button, "transform", "translate(6px, -3px)");
    dispatch(&button, "mouseleave");
    assert_eq!(style(&button, "transform"), serialized("transform", MAGNETIC_REST_TRANSFORM));

    button.remove();
}

#[wasm_bindgen_test]
async fn hero_waits_for_loader_to_finish() {
    let loader_el = mounted("div", "loader");
    let bar = mounted("div", "loader-bar");
    let hero = mounted("section", "hero");
    let document = dom::document().unwrap();
    let word = element(&document, "span");
    word.class_list().add_1("hero-word").unwrap();
    let tagline = div(&document);
    tagline.set_attribute("data-animate", "").unwrap();
    hero.append_child(&word).unwrap();
    hero.append_child(&tagline).unwrap();

    // Tiny increments: completion comes from the tick cap after five ticks
    let config = FxConfig {
        loader_tick_ms: 20,
        loader_max_increment: 0.001,
        loader_max_ticks: 5,
        loader_settle_ms: 0,
        loader_handoff_ms: 0,
        ..FxConfig::default()
    };
    loader::init(Rc::new(config)).unwrap();

    sleep(40).await;
    assert!(!loader_el.class_list().contains("done"));
    assert!(!word.class_list().contains(REVEALED_CLASS));
    assert!(!tagline.class_list().contains(IN_VIEW_CLASS));

    sleep(500).await;
    assert_eq!(style(&bar, "width"), "100%");
    assert!(loader_el.class_list().contains("done"));
    assert!(word.class_list().contains(REVEALED_CLASS));
    assert!(tagline.class_list().contains(IN_VIEW_CLASS));

    for el in [loader_el, bar, hero] {
        el.remove();
    }
}
