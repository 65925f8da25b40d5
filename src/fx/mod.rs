//! Effect state machines
//!
//! Everything here is platform-free and deterministic:
//! - Time is passed in, never read
//! - Seeded RNG only
//! - No DOM types; elements are referred to by [`ElementKey`]
//!
//! The `platform` layer owns the browser side and drives these types from
//! timers, frame callbacks and observers.

pub mod attr;
pub mod backdrop;
pub mod counter;
pub mod loader;
pub mod observer;
pub mod pointer;
pub mod preset;
pub mod rect;
pub mod reveal;
pub mod scramble;

pub use attr::{parse_delay, parse_int};
pub use backdrop::{BackdropUniforms, pointer_to_uv, shade};
pub use counter::{CounterFrame, CounterRun, ease_out_cubic};
pub use loader::{LoadStep, Loader};
pub use observer::{OneShot, stagger_index};
pub use pointer::{CursorFollower, NavbarState, hero_parallax, magnetic_offset, tilt_offset};
pub use preset::{Preset, PresetTrigger, TweenAction};
pub use rect::Rect;
pub use reveal::{hero_reveal_schedule, word_delays};
pub use scramble::{Scramble, ScrambleFrame, ScrambleRegistry};

/// Stable identity of a page element across callbacks
pub type ElementKey = u32;
