//! Viewport-entry observers: scroll reveals and counters
//!
//! Both use one `IntersectionObserver` each and a [`OneShot`] tracker, so an
//! element fires at most once and is unobserved as soon as it does.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use super::schedule::{FrameTask, set_timeout};
use crate::config::FxConfig;
use crate::error::Result;
use crate::fx::counter::parse_target;
use crate::fx::reveal::IN_VIEW_CLASS;
use crate::fx::{CounterRun, ElementKey, OneShot, parse_delay, stagger_index};

type Tracker = Rc<RefCell<OneShot<ElementKey>>>;

/// Build an observer that calls `on_enter` once per element on first entry
fn one_shot_observer(
    tracker: Tracker,
    options: &IntersectionObserverInit,
    mut on_enter: impl FnMut(Element) + 'static,
) -> Result<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let key = dom::element_key(&target);
                if tracker.borrow_mut().notify(key, entry.is_intersecting()) {
                    observer.unobserve(&target);
                    on_enter(target);
                }
            }
        },
    );
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?;
    callback.forget();
    Ok(observer)
}

/// Reveal `[data-animate]` elements as they scroll into view
pub fn init_scroll_animations(config: &FxConfig) -> Result<()> {
    let tracker: Tracker = Rc::new(RefCell::new(OneShot::new()));

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.0));
    options.set_root_margin(&config.observer_root_margin());

    let observer = one_shot_observer(tracker.clone(), &options, |target| {
        let delay = parse_delay(target.get_attribute("data-delay").as_deref());
        let scheduled = set_timeout(delay, move || {
            let _ = target.class_list().add_1(IN_VIEW_CLASS);
        });
        if let Err(e) = scheduled {
            log::warn!("Reveal not scheduled: {}", e);
        }
    })?;

    for el in dom::query_all("[data-animate]")? {
        let key = dom::element_key(&el);
        // Already revealed (hero items)
        if el.class_list().contains(IN_VIEW_CLASS) {
            tracker.borrow_mut().mark_fired(key);
            continue;
        }

        if let Some(parent) = el.parent_element() {
            let staggers = parent.has_attribute("data-stagger");
            if staggers {
                let marked = dom::query_all_in(&parent, "[data-animate]")?;
                if let Some(idx) = stagger_index(staggers, &marked, &el) {
                    dom::set_style(&el, "--stagger-index", &idx.to_string());
                }
            }
        }

        if tracker.borrow_mut().subscribe(key) {
            observer.observe(&el);
        }
    }

    log::info!("Scroll reveal watching {} elements", tracker.borrow().watching_count());
    Ok(())
}

/// Count `.counter[data-count]` elements up from zero on first view
pub fn init_counters(config: &FxConfig) -> Result<()> {
    let tracker: Tracker = Rc::new(RefCell::new(OneShot::new()));
    let duration_ms = config.counter_duration_ms;

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.counter_threshold));

    let observer = one_shot_observer(tracker.clone(), &options, move |target| {
        let Ok(el) = target.dyn_into::<HtmlElement>() else {
            return;
        };
        let Some(value) = parse_target(el.get_attribute("data-count").as_deref()) else {
            return;
        };
        if let Err(e) = run_counter(el, CounterRun::new(value, duration_ms)) {
            log::warn!("Counter not started: {}", e);
        }
    })?;

    for el in dom::query_all(".counter[data-count]")? {
        if parse_target(el.get_attribute("data-count").as_deref()).is_none() {
            log::debug!("Skipping counter with non-numeric target");
            continue;
        }
        if tracker.borrow_mut().subscribe(dom::element_key(&el)) {
            observer.observe(&el);
        }
    }

    log::info!("Counters watching {} elements", tracker.borrow().watching_count());
    Ok(())
}

fn run_counter(el: HtmlElement, run: CounterRun) -> Result<()> {
    log::debug!("Counting up to {}", run.target());
    let mut start: Option<f64> = None;
    let task = FrameTask::start(move |now| {
        let t0 = *start.get_or_insert(now);
        let frame = run.sample(now - t0);
        el.set_text_content(Some(&frame.value.to_string()));
        !frame.finished
    })?;
    super::track_frame_task(task);
    Ok(())
}
