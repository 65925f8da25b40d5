//! Scroll-tween presets
//!
//! Elements marked `data-animate="fade-up" | "fade-left" | "scale-in"` start
//! offset and transparent, then tween to rest when their top edge crosses a
//! start line partway down the viewport. Only `fade-up` plays back in reverse
//! when the element drops below the start line again.

/// Tween preset selected by the animate marker value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    FadeUp,
    FadeLeft,
    ScaleIn,
}

/// What the platform layer should do to the element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenAction {
    /// Tween to the rest state
    Play,
    /// Tween back to the offset state
    Reverse,
}

impl Preset {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "fade-up" => Some(Preset::FadeUp),
            "fade-left" => Some(Preset::FadeLeft),
            "scale-in" => Some(Preset::ScaleIn),
            _ => None,
        }
    }

    /// Start line as a fraction of viewport height from the top
    pub fn start_fraction(&self) -> f64 {
        match self {
            Preset::FadeUp | Preset::FadeLeft => 0.85,
            Preset::ScaleIn => 0.90,
        }
    }

    pub fn duration_s(&self) -> f32 {
        match self {
            Preset::FadeUp | Preset::FadeLeft => 1.0,
            Preset::ScaleIn => 1.2,
        }
    }

    pub fn reverses(&self) -> bool {
        matches!(self, Preset::FadeUp)
    }

    /// CSS easing curve (power3.out / power2.out)
    pub fn easing(&self) -> &'static str {
        match self {
            Preset::FadeUp | Preset::FadeLeft => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Preset::ScaleIn => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
        }
    }

    /// Transform of the offset (pre-play) state
    pub fn from_transform(&self) -> &'static str {
        match self {
            Preset::FadeUp => "translate(0px, 50px)",
            Preset::FadeLeft => "translate(50px, 0px)",
            Preset::ScaleIn => "scale(0.9)",
        }
    }

    pub fn transition(&self) -> String {
        let d = self.duration_s();
        let e = self.easing();
        format!("opacity {d}s {e}, transform {d}s {e}")
    }
}

/// Transform of the rest state
pub const REST_TRANSFORM: &str = "none";

/// Tracks whether a preset element has played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetTrigger {
    preset: Preset,
    played: bool,
    finished: bool,
}

impl PresetTrigger {
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            played: false,
            finished: false,
        }
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Presets that do not reverse stop listening once played
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feed the element's top edge (client px) and the viewport height
    pub fn update(&mut self, top: f64, viewport_height: f64) -> Option<TweenAction> {
        if self.finished {
            return None;
        }

        let past_start = top <= viewport_height * self.preset.start_fraction();
        match (self.played, past_start) {
            (false, true) => {
                self.played = true;
                if !self.preset.reverses() {
                    self.finished = true;
                }
                Some(TweenAction::Play)
            }
            (true, false) if self.preset.reverses() => {
                self.played = false;
                Some(TweenAction::Reverse)
            }
            _ => None,
        }
    }
}
