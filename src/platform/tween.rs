//! Scroll-tween presets driven by the scroll position

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;

use super::dom;
use super::schedule::next_frame;
use crate::error::Result;
use crate::fx::preset::REST_TRANSFORM;
use crate::fx::{Preset, PresetTrigger, TweenAction};

fn apply(el: &HtmlElement, preset: Preset, action: TweenAction) {
    dom::set_style(el, "transition", &preset.transition());
    match action {
        TweenAction::Play => {
            dom::set_style(el, "opacity", "1");
            dom::set_style(el, "transform", REST_TRANSFORM);
        }
        TweenAction::Reverse => {
            dom::set_style(el, "opacity", "0");
            dom::set_style(el, "transform", preset.from_transform());
        }
    }
}

fn update(triggers: &RefCell<Vec<(HtmlElement, PresetTrigger)>>) {
    let viewport_height = dom::viewport_height();
    for (el, trigger) in triggers.borrow_mut().iter_mut() {
        let top = el.get_bounding_client_rect().top();
        if let Some(action) = trigger.update(top, viewport_height) {
            apply(el, trigger.preset(), action);
        }
    }
}

pub fn init() -> Result<()> {
    let mut triggers = Vec::new();
    for el in dom::query_all("[data-animate]")? {
        let Some(preset) = el.get_attribute("data-animate").and_then(|v| Preset::parse(&v)) else {
            continue;
        };
        dom::set_style(&el, "opacity", "0");
        dom::set_style(&el, "transform", preset.from_transform());
        triggers.push((el, PresetTrigger::new(preset)));
    }
    if triggers.is_empty() {
        return Ok(());
    }
    log::debug!("{} scroll tweens", triggers.len());

    let triggers = Rc::new(RefCell::new(triggers));

    // Let the offset state paint before anything already in view plays
    let first = triggers.clone();
    next_frame(move || update(&first))?;

    let window = dom::window()?;
    let on_scroll = triggers.clone();
    dom::listen_passive(&window, "scroll", move |_| update(&on_scroll))?;
    dom::listen(&window, "resize", move |_| update(&triggers))
}
