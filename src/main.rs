//! Vortex FX entry point
//!
//! On the web this arms every effect once the document is parsed. The native
//! build has no page to drive, so it plays the effect timelines headlessly.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    vortex_fx::platform::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Vortex FX (native) starting...");
    log::info!("Native mode has no DOM; build for wasm32-unknown-unknown and load the module in a page for the web version");

    preview();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Step each timeline with the configured tunables and log what a page would show
#[cfg(not(target_arch = "wasm32"))]
fn preview() {
    use vortex_fx::FxConfig;
    use vortex_fx::fx::{CounterRun, Loader, ScrambleRegistry};

    let config = FxConfig::load();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut loader = Loader::from_config(seed, &config);
    while loader.tick().is_some() {
        log::info!(
            "loader t={}ms progress={:.1}",
            loader.ticks() * config.loader_tick_ms,
            loader.progress()
        );
    }

    let counter = CounterRun::new(250, config.counter_duration_ms);
    for t in [0.0, 300.0, 600.0, 900.0, 1200.0, 1500.0, 1800.0] {
        log::info!("counter t={}ms value={}", t, counter.sample(t).value);
    }

    let mut scramble = ScrambleRegistry::new(seed);
    scramble.enter(1, || "VORTEX".to_string());
    let mut tick = 0;
    while let Some(frame) = scramble.tick(1) {
        tick += 1;
        log::info!("scramble t={}ms {}", tick * config.scramble_tick_ms, frame.text);
    }
}
