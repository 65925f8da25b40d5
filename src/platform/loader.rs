//! Loading splash and the hero reveal handoff

use std::cell::RefCell;
use std::rc::Rc;

use super::dom;
use super::observe;
use super::schedule::{Interval, set_timeout};
use crate::config::FxConfig;
use crate::error::Result;
use crate::fx::Loader;
use crate::fx::reveal::{RevealTarget, hero_reveal_schedule};

/// Class marking the loader as finished
const LOADER_DONE_CLASS: &str = "done";

pub fn init(config: Rc<FxConfig>) -> Result<()> {
    let loader_el = dom::require_id("loader")?;
    let bar = dom::require_id("loader-bar")?;

    let seed = js_sys::Date::now() as u64;
    let loader = Rc::new(RefCell::new(Loader::from_config(seed, &config)));

    let interval = Interval::start(config.loader_tick_ms, move || {
        let Some(step) = loader.borrow_mut().tick() else {
            return false;
        };
        dom::set_style(&bar, "width", &loader.borrow().bar_width());

        if step.completed {
            log::info!("Loader complete after {} ticks", loader.borrow().ticks());
            if let Err(e) = finish(loader_el.clone(), config.clone()) {
                log::warn!("Loader handoff failed: {}", e);
            }
            return false;
        }
        true
    })?;
    super::on_teardown(move || interval.clear());

    Ok(())
}

/// Settle, hide the loader, then hand off to reveal and observers
fn finish(loader_el: web_sys::HtmlElement, config: Rc<FxConfig>) -> Result<()> {
    let handoff_ms = config.loader_handoff_ms;
    set_timeout(config.loader_settle_ms, move || {
        let _ = loader_el.class_list().add_1(LOADER_DONE_CLASS);

        let handoff = set_timeout(handoff_ms, move || {
            super::arm("hero reveal", reveal_hero(&config));
            super::arm("scroll reveal", observe::init_scroll_animations(&config));
            super::arm("counters", observe::init_counters(&config));
        });
        if let Err(e) = handoff {
            log::warn!("Reveal handoff not scheduled: {}", e);
        }
    })?;
    Ok(())
}

/// Stagger the hero words in and reveal animated hero elements
pub fn reveal_hero(config: &FxConfig) -> Result<()> {
    let words = dom::query_all(".hero-word")?;
    let animated = match dom::by_id("hero") {
        Some(hero) => dom::query_all_in(&hero, "[data-animate]")?,
        None => Vec::new(),
    };

    let delays: Vec<Option<String>> = animated
        .iter()
        .map(|el| el.get_attribute("data-delay"))
        .collect();
    let raw: Vec<Option<&str>> = delays.iter().map(Option::as_deref).collect();

    let plan = hero_reveal_schedule(words.len(), config.hero_word_step_ms, &raw);
    log::debug!("Hero reveal: {} words, {} animated", words.len(), animated.len());

    for reveal in plan {
        let el = match reveal.target {
            RevealTarget::Word(i) => words[i].clone(),
            RevealTarget::Animated(i) => animated[i].clone(),
        };
        set_timeout(reveal.delay_ms, move || {
            let _ = el.class_list().add_1(reveal.class);
        })?;
    }
    Ok(())
}
