//! Effect tunables
//!
//! Read from an optional inline JSON block (`<script id="fx-config"
//! type="application/json">`) so a page can retune effects without a rebuild.
//! Missing fields take the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Result;

/// Id of the inline config block
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    /// Viewport width above which desktop-only effects run
    pub desktop_min_width: f64,

    // === Loader ===
    pub loader_tick_ms: u32,
    pub loader_max_increment: f32,
    pub loader_settle_ms: u32,
    pub loader_handoff_ms: u32,
    /// Ticks after which the loader is forced to complete
    pub loader_max_ticks: u32,

    // === Reveal / observers ===
    pub hero_word_step_ms: u32,
    pub observer_bottom_margin_px: i32,
    pub counter_duration_ms: f64,
    pub counter_threshold: f64,

    // === Pointer ===
    pub cursor_smoothing: f32,
    pub magnetic_factor: f32,
    pub hero_parallax_rate: f64,
    pub navbar_blur_threshold: f64,

    // === Scramble ===
    pub scramble_tick_ms: u32,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            desktop_min_width: DESKTOP_MIN_WIDTH,

            loader_tick_ms: LOADER_TICK_MS,
            loader_max_increment: LOADER_MAX_INCREMENT,
            loader_settle_ms: LOADER_SETTLE_MS,
            loader_handoff_ms: LOADER_HANDOFF_MS,
            loader_max_ticks: LOADER_MAX_TICKS,

            hero_word_step_ms: HERO_WORD_STEP_MS,
            observer_bottom_margin_px: OBSERVER_BOTTOM_MARGIN_PX,
            counter_duration_ms: COUNTER_DURATION_MS,
            counter_threshold: COUNTER_THRESHOLD,

            cursor_smoothing: CURSOR_SMOOTHING,
            magnetic_factor: MAGNETIC_FACTOR,
            hero_parallax_rate: HERO_PARALLAX_RATE,
            navbar_blur_threshold: NAVBAR_BLUR_THRESHOLD,

            scramble_tick_ms: SCRAMBLE_TICK_MS,
        }
    }
}

impl FxConfig {
    /// Parse a (possibly partial) JSON config. Values that parse but cannot
    /// drive an effect fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitize())
    }

    /// Replace non-finite or out-of-range tunables with their defaults
    pub fn sanitize(mut self) -> Self {
        let d = Self::default();

        keep("desktop_min_width", &mut self.desktop_min_width, d.desktop_min_width, |v| {
            v.is_finite() && v >= 0.0
        });
        keep("loader_tick_ms", &mut self.loader_tick_ms, d.loader_tick_ms, |v| v > 0);
        keep("loader_max_increment", &mut self.loader_max_increment, d.loader_max_increment, |v| {
            v.is_finite() && v > 0.0 && v <= 100.0
        });
        keep("loader_max_ticks", &mut self.loader_max_ticks, d.loader_max_ticks, |v| v > 0);
        keep("counter_duration_ms", &mut self.counter_duration_ms, d.counter_duration_ms, |v| {
            v.is_finite() && v >= 0.0
        });
        keep("counter_threshold", &mut self.counter_threshold, d.counter_threshold, |v| {
            (0.0..=1.0).contains(&v)
        });
        keep("cursor_smoothing", &mut self.cursor_smoothing, d.cursor_smoothing, |v| {
            v > 0.0 && v <= 1.0
        });
        keep("magnetic_factor", &mut self.magnetic_factor, d.magnetic_factor, f32::is_finite);
        keep("hero_parallax_rate", &mut self.hero_parallax_rate, d.hero_parallax_rate, f64::is_finite);
        keep("navbar_blur_threshold", &mut self.navbar_blur_threshold, d.navbar_blur_threshold, f64::is_finite);
        keep("scramble_tick_ms", &mut self.scramble_tick_ms, d.scramble_tick_ms, |v| v > 0);

        self
    }

    /// Whether desktop-only effects should run at this viewport width
    pub fn is_desktop(&self, viewport_width: f64) -> bool {
        viewport_width > self.desktop_min_width
    }

    /// Observer root margin in CSS shorthand
    pub fn observer_root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.observer_bottom_margin_px)
    }

    /// Load config from the hosting page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded effect config from #{}", CONFIG_ELEMENT_ID);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default effect config");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

fn keep<T: Copy + std::fmt::Debug>(name: &str, value: &mut T, fallback: T, valid: impl Fn(T) -> bool) {
    if !valid(*value) {
        log::warn!("Config {} = {:?} is out of range, using {:?}", name, value, fallback);
        *value = fallback;
    }
}
