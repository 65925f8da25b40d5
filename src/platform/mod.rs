//! Browser bindings
//!
//! Wires each effect in `fx` to the page: element lookup, listeners, timers
//! and frame loops. Effects are armed independently; one failing to find
//! its elements never stops the others.

pub mod backdrop;
pub mod dom;
pub mod loader;
pub mod observe;
pub mod page;
pub mod pointer;
pub mod schedule;
pub mod scramble;
pub mod tween;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::FxConfig;
use crate::error::Result;
use schedule::FrameTask;

#[derive(Default)]
struct Teardown {
    hooks: Vec<Box<dyn FnOnce()>>,
    // Frame loops that stop by themselves are dropped on the next push
    tasks: Vec<FrameTask>,
}

thread_local! {
    static TEARDOWN: RefCell<Teardown> = RefCell::new(Teardown::default());
}

/// Register cleanup to run on [`teardown`]
pub fn on_teardown(f: impl FnOnce() + 'static) {
    TEARDOWN.with(|t| t.borrow_mut().hooks.push(Box::new(f)));
}

/// Keep `task` cancellable by [`teardown`] while it is still running
pub fn track_frame_task(task: FrameTask) {
    TEARDOWN.with(|t| {
        let mut t = t.borrow_mut();
        t.tasks.retain(FrameTask::is_running);
        t.tasks.push(task);
    });
}

/// Cancel every frame loop and in-flight interval started by the effects.
/// Listeners stay attached; the page is expected to go away next.
#[wasm_bindgen]
pub fn teardown() {
    let Teardown { hooks, tasks } = TEARDOWN.with(|t| std::mem::take(&mut *t.borrow_mut()));
    let running: Vec<FrameTask> = tasks.into_iter().filter(FrameTask::is_running).collect();
    log::info!("Tearing down {} frame loops and {} other tasks", running.len(), hooks.len());
    for task in running {
        task.cancel();
    }
    for hook in hooks {
        hook();
    }
}

/// Hide the mobile menu (also exposed as `window.closeMobileMenu`)
#[wasm_bindgen(js_name = closeMobileMenu)]
pub fn close_mobile_menu() {
    page::close_mobile_menu();
}

fn arm(name: &str, result: Result<()>) {
    match result {
        Ok(()) => log::debug!("{} armed", name),
        Err(e) => log::warn!("{} disabled: {}", name, e),
    }
}

/// Arm every effect on the current document
pub async fn run() {
    log::info!("Vortex FX starting...");

    let config = Rc::new(FxConfig::load());
    let desktop = config.is_desktop(dom::viewport_width());
    log::info!("Viewport is {}", if desktop { "desktop" } else { "mobile" });

    // Loader first; reveal and observers are armed when it completes
    arm("loader", loader::init(config.clone()));

    arm("navbar", pointer::init_navbar(&config));
    arm("mobile menu", page::init_mobile_menu());
    arm("anchor scroll", page::init_anchor_scroll());
    arm("hero parallax", pointer::init_hero_parallax(&config));
    arm("cursor", pointer::init_cursor(&config));
    arm("magnetic buttons", pointer::init_magnetic(&config));
    arm("newsletter", page::init_newsletter());
    arm("image tilt", pointer::init_tilt(&config));
    arm("scroll tweens", tween::init());
    arm("scramble", scramble::init(&config));
    arm("backdrop", backdrop::init(config.clone()).await);

    log::info!("Vortex FX running");
}

/// Run once the document has been parsed
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
    }

    let loading = dom::document()
        .map(|d| d.ready_state() == "loading")
        .unwrap_or(false);

    if !loading {
        wasm_bindgen_futures::spawn_local(run());
        return;
    }

    let armed = dom::document().and_then(|d| {
        dom::listen(&d, "DOMContentLoaded", |_| {
            wasm_bindgen_futures::spawn_local(run());
        })
    });
    if let Err(e) = armed {
        log::error!("Cannot wait for DOMContentLoaded: {}", e);
    }
}
