//! Vortex FX - landing page effects engine
//!
//! Core modules:
//! - `fx`: Pure effect state machines (loader, reveal, observers, counters, pointer, scramble, backdrop)
//! - `renderer`: wgpu shader plane for the hero backdrop
//! - `platform`: Browser bindings (DOM, timers, frame tasks)
//! - `config`: Tunables loaded from the hosting page

pub mod config;
pub mod error;
pub mod fx;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;

pub use config::FxConfig;
pub use error::{FxError, Result};

/// Effect constants
pub mod consts {
    /// Viewports at or below this width are treated as mobile
    pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

    /// Loader tick period (ms)
    pub const LOADER_TICK_MS: u32 = 200;
    /// Upper bound (exclusive) of one random loader increment, in percent
    pub const LOADER_MAX_INCREMENT: f32 = 30.0;
    /// Delay between reaching 100% and marking the loader done (ms)
    pub const LOADER_SETTLE_MS: u32 = 300;
    /// Delay between the loader finishing and the reveal handoff (ms)
    pub const LOADER_HANDOFF_MS: u32 = 300;
    /// Hard cap on loader ticks before completion is forced
    pub const LOADER_MAX_TICKS: u32 = 1000;

    /// Delay step between consecutive hero words (ms)
    pub const HERO_WORD_STEP_MS: u32 = 180;

    /// Bottom root margin of the viewport observer (px, negative shrinks)
    pub const OBSERVER_BOTTOM_MARGIN_PX: i32 = -40;

    /// Counter animation length (ms)
    pub const COUNTER_DURATION_MS: f64 = 1800.0;
    /// Fraction of a counter that must be visible before it starts
    pub const COUNTER_THRESHOLD: f64 = 0.5;

    /// Fraction of the remaining distance the cursor covers each frame
    pub const CURSOR_SMOOTHING: f32 = 0.15;
    /// Cursor dot radius (px); the dot is drawn centered on its position
    pub const CURSOR_DOT_RADIUS: f32 = 4.0;
    /// Magnetic button displacement factor
    pub const MAGNETIC_FACTOR: f32 = 0.15;
    /// Image tilt travel (px per unit of normalized pointer offset)
    pub const TILT_TRAVEL_PX: f32 = 10.0;
    /// Image zoom while the pointer is over it
    pub const TILT_ZOOM: f32 = 1.05;
    /// Hero image scroll parallax rate
    pub const HERO_PARALLAX_RATE: f64 = 0.15;
    /// Scroll offset at which the navbar switches to its blurred state (px)
    pub const NAVBAR_BLUR_THRESHOLD: f64 = 80.0;
    /// Offset kept above anchor targets when smooth scrolling (px)
    pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0;

    /// Scramble tick period (ms)
    pub const SCRAMBLE_TICK_MS: u32 = 30;
    /// Glyphs shown in not-yet-decoded positions
    pub const SCRAMBLE_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    /// Newsletter confirmation hold time (ms)
    pub const NEWSLETTER_CONFIRM_MS: u32 = 2500;

    /// Backdrop base color (dark jet)
    pub const BACKDROP_BG: [f32; 3] = [0.07, 0.07, 0.06];
    /// Backdrop glow color (gold)
    pub const BACKDROP_ACCENT: [f32; 3] = [0.9, 0.8, 0.1];
}
