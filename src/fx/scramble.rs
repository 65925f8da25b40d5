//! Hover text scramble
//!
//! On hover an element's text decodes left to right: positions before the
//! reveal index show the real character, the rest show random glyphs. The
//! reveal index advances a third of a character per tick, so each character
//! settles after three ticks.
//!
//! [`ScrambleRegistry`] keeps per-element state keyed by [`ElementKey`]:
//! the cached original text and the in-flight run, if any.

use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ElementKey;
use crate::consts::SCRAMBLE_GLYPHS;

/// Ticks per fully revealed character
const TICKS_PER_CHAR: u32 = 3;

/// One rendered scramble frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleFrame {
    pub text: String,
    pub done: bool,
}

/// A single decode run
#[derive(Debug, Clone)]
pub struct Scramble {
    original: Vec<char>,
    // Reveal index in thirds of a character; keeps the stepping exact
    thirds: u32,
}

impl Scramble {
    pub fn new(original: &str) -> Self {
        Self {
            original: original.chars().collect(),
            thirds: 0,
        }
    }

    /// Fractional reveal index
    pub fn reveal_index(&self) -> f32 {
        self.thirds as f32 / TICKS_PER_CHAR as f32
    }

    /// Number of leading positions showing the real character
    pub fn revealed(&self) -> usize {
        (self.thirds / TICKS_PER_CHAR) as usize
    }

    pub fn is_done(&self) -> bool {
        self.revealed() >= self.original.len()
    }

    /// Advance the reveal index and render
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> ScrambleFrame {
        if !self.is_done() {
            self.thirds += 1;
        }

        let revealed = self.revealed();
        let glyphs = SCRAMBLE_GLYPHS.as_bytes();
        let text = self
            .original
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i < revealed {
                    c
                } else {
                    glyphs[rng.random_range(0..glyphs.len())] as char
                }
            })
            .collect();

        ScrambleFrame {
            text,
            done: self.is_done(),
        }
    }
}

/// Scramble state for every element on the page
#[derive(Debug, Clone)]
pub struct ScrambleRegistry {
    originals: HashMap<ElementKey, String>,
    active: HashMap<ElementKey, Scramble>,
    rng: Pcg32,
}

impl ScrambleRegistry {
    pub fn new(seed: u64) -> Self {
        Self {
            originals: HashMap::new(),
            active: HashMap::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start (or restart) the decode for `key`.
    ///
    /// The original text is captured from `current_text` on first entry and
    /// reused afterwards, so an interrupted run never becomes the new
    /// original. Returns true if an in-flight run was replaced.
    pub fn enter(&mut self, key: ElementKey, current_text: impl FnOnce() -> String) -> bool {
        let original = self.originals.entry(key).or_insert_with(current_text);
        let run = Scramble::new(original.as_str());
        self.active.insert(key, run).is_some()
    }

    /// Seed the cached original (e.g. from markup) without starting a run
    pub fn cache_original(&mut self, key: ElementKey, text: String) {
        self.originals.entry(key).or_insert(text);
    }

    pub fn original(&self, key: ElementKey) -> Option<&str> {
        self.originals.get(&key).map(String::as_str)
    }

    /// Render the next frame for `key`. Finished runs are dropped.
    pub fn tick(&mut self, key: ElementKey) -> Option<ScrambleFrame> {
        let run = self.active.get_mut(&key)?;
        let frame = run.tick(&mut self.rng);
        if frame.done {
            self.active.remove(&key);
        }
        Some(frame)
    }

    pub fn is_active(&self, key: ElementKey) -> bool {
        self.active.contains_key(&key)
    }

    pub fn reveal_index(&self, key: ElementKey) -> Option<f32> {
        self.active.get(&key).map(Scramble::reveal_index)
    }

    /// Drop every in-flight run
    pub fn clear_active(&mut self) {
        self.active.clear();
    }
}
