//! Hover text scramble on `[data-scramble]` elements

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::dom;
use super::schedule::Interval;
use crate::config::FxConfig;
use crate::error::Result;
use crate::fx::{ElementKey, ScrambleRegistry};

struct ScrambleBinding {
    registry: ScrambleRegistry,
    // At most one ticking interval per element
    intervals: HashMap<ElementKey, Interval>,
}

pub fn init(config: &FxConfig) -> Result<()> {
    let elements = dom::query_all("[data-scramble]")?;
    if elements.is_empty() {
        return Ok(());
    }

    let seed = js_sys::Date::now() as u64;
    let binding = Rc::new(RefCell::new(ScrambleBinding {
        registry: ScrambleRegistry::new(seed),
        intervals: HashMap::new(),
    }));
    let tick_ms = config.scramble_tick_ms;

    for el in &elements {
        let key = dom::element_key(el);
        // Markup may pin the decoded text explicitly
        if let Some(value) = el.get_attribute("data-value") {
            binding.borrow_mut().registry.cache_original(key, value);
        }

        let state = binding.clone();
        let target = el.clone();
        dom::listen(el, "mouseenter", move |_| {
            let mut b = state.borrow_mut();
            let current = target.clone();
            b.registry.enter(key, move || current.inner_text());
            // Dropping the old interval stops it
            b.intervals.remove(&key);
            b.intervals.retain(|_, interval| interval.is_running());

            // Weak: the binding owns this interval
            let ticker: Weak<RefCell<ScrambleBinding>> = Rc::downgrade(&state);
            let display = target.clone();
            let interval = Interval::start(tick_ms, move || {
                let Some(binding) = ticker.upgrade() else {
                    return false;
                };
                let Some(frame) = binding.borrow_mut().registry.tick(key) else {
                    return false;
                };
                display.set_inner_text(&frame.text);
                !frame.done
            });
            match interval {
                Ok(interval) => {
                    b.intervals.insert(key, interval);
                }
                Err(e) => log::warn!("Scramble tick not started: {}", e),
            }
        })?;
    }

    super::on_teardown(move || {
        let mut b = binding.borrow_mut();
        b.intervals.clear();
        b.registry.clear_active();
    });

    log::debug!("{} scramble elements", elements.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;
    use web_sys::{Event, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            let _ = dom::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        });
        JsFuture::from(promise).await.unwrap();
    }

    #[wasm_bindgen_test]
    async fn hover_decodes_back_to_the_label() {
        let document = dom::document().unwrap();
        let label: HtmlElement = document.create_element("span").unwrap().dyn_into().unwrap();
        label.set_attribute("data-scramble", "").unwrap();
        label.set_inner_text("GO");
        document.body().unwrap().append_child(&label).unwrap();

        let config = FxConfig {
            scramble_tick_ms: 10,
            ..FxConfig::default()
        };
        init(&config).unwrap();

        // Re-entering mid-run restarts from the cached label
        label.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
        sleep(25).await;
        label.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();

        // 2 chars settle after 6 ticks
        sleep(400).await;
        assert_eq!(label.inner_text(), "GO");

        label.remove();
    }
}
