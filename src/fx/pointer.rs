//! Pointer and scroll driven transforms
//!
//! Cursor follower, magnetic buttons, image tilt, hero parallax and the
//! navbar state. Each is a direct mapping from an input sample to a style;
//! only the cursor keeps state between frames.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;

// ============================================================================
// CURSOR
// ============================================================================

/// Trailing cursor dot. Each step covers a fixed fraction of the remaining
/// distance to the last raw pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFollower {
    pos: Vec2,
    target: Vec2,
    smoothing: f32,
}

impl CursorFollower {
    pub fn new(smoothing: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            target: Vec2::ZERO,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    /// Record the latest raw pointer position
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Advance one frame and return the new position
    pub fn step(&mut self) -> Vec2 {
        self.pos += (self.target - self.pos) * self.smoothing;
        self.pos
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Top-left corner of the dot, which is drawn centered on `position`
    pub fn dot_origin(&self) -> Vec2 {
        self.pos - Vec2::splat(CURSOR_DOT_RADIUS)
    }
}

/// Cursor dot (transform, opacity) while hovering interactive elements
pub const CURSOR_HOVER_STYLE: (&str, &str) = ("scale(3)", "0.6");
/// Cursor dot (transform, opacity) at rest
pub const CURSOR_REST_STYLE: (&str, &str) = ("scale(1)", "1");

// ============================================================================
// MAGNETIC BUTTONS / TILT
// ============================================================================

/// Offset of a magnetic button toward the pointer
#[inline]
pub fn magnetic_offset(pointer: Vec2, bounds: Rect, factor: f32) -> Vec2 {
    (pointer - bounds.center()) * factor
}

pub fn magnetic_transform(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

/// Transform of a magnetic button after the pointer leaves
pub const MAGNETIC_REST_TRANSFORM: &str = "translate(0, 0)";

/// Image shift opposite to the pointer, in pixels.
/// The pointer position is normalized to -0.5..0.5 across the container.
#[inline]
pub fn tilt_offset(pointer: Vec2, bounds: Rect) -> Vec2 {
    let rel = bounds.normalize(pointer) - Vec2::splat(0.5);
    rel * -TILT_TRAVEL_PX
}

pub fn tilt_transform(offset: Vec2) -> String {
    format!("scale({}) translate({}px, {}px)", TILT_ZOOM, offset.x, offset.y)
}

/// Transform of a tilt image after the pointer leaves
pub const TILT_REST_TRANSFORM: &str = "scale(1) translate(0, 0)";

// ============================================================================
// SCROLL
// ============================================================================

/// Vertical hero image offset for a scroll position
#[inline]
pub fn hero_parallax(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

pub fn hero_parallax_transform(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

/// Navbar visual state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
    /// Tall, gradient backed (page top)
    Resting,
    /// Compact, blurred (scrolled)
    Blurred,
}

impl NavbarState {
    /// Blurred from `threshold` inclusive
    pub fn from_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y >= threshold {
            NavbarState::Blurred
        } else {
            NavbarState::Resting
        }
    }

    pub const BLUR_CLASS: &'static str = "nav-blur";

    pub fn padding(&self) -> &'static str {
        match self {
            NavbarState::Resting => "24px 32px",
            NavbarState::Blurred => "14px 32px",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavbarState::Resting => {
                "linear-gradient(to bottom, rgba(18,18,16,0.85) 0%, rgba(18,18,16,0.5) 60%, transparent 100%)"
            }
            NavbarState::Blurred => "rgba(18, 18, 16, 0.85)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn button() -> Rect {
        Rect::new(100.0, 50.0, 200.0, 40.0)
    }

    #[test]
    fn test_magnetic_center_is_zero() {
        let b = button();
        assert_eq!(magnetic_offset(b.center(), b, MAGNETIC_FACTOR), Vec2::ZERO);
    }

    #[test]
    fn test_magnetic_scales_displacement() {
        let b = button();
        let offset = magnetic_offset(b.center() + Vec2::new(100.0, 0.0), b, MAGNETIC_FACTOR);
        assert!((offset.x - 15.0).abs() < 1e-4);
        assert_eq!(offset.y, 0.0);
        assert_eq!(magnetic_transform(Vec2::new(15.0, 0.0)), "translate(15px, 0px)");
    }

    #[test]
    fn test_tilt_moves_against_pointer() {
        let r = Rect::new(0.0, 0.0, 400.0, 200.0);
        assert_eq!(tilt_offset(r.center(), r), Vec2::ZERO);
        let corner = tilt_offset(Vec2::new(400.0, 200.0), r);
        assert_eq!(corner, Vec2::new(-5.0, -5.0));
        assert_eq!(tilt_transform(corner), "scale(1.05) translate(-5px, -5px)");
    }

    #[test]
    fn test_cursor_lags_toward_target() {
        let mut cursor = CursorFollower::new(CURSOR_SMOOTHING);
        cursor.set_target(Vec2::new(100.0, 0.0));
        let first = cursor.step();
        assert!((first.x - 15.0).abs() < 1e-4);
        let second = cursor.step();
        assert!((second.x - 27.75).abs() < 1e-3);
        assert_eq!(cursor.dot_origin(), second - Vec2::splat(4.0));
    }

    #[test]
    fn test_navbar_threshold_inclusive() {
        assert_eq!(NavbarState::from_scroll(79.0, 80.0), NavbarState::Resting);
        assert_eq!(NavbarState::from_scroll(80.0, 80.0), NavbarState::Blurred);
        assert_eq!(NavbarState::Blurred.padding(), "14px 32px");
        assert_eq!(NavbarState::Resting.padding(), "24px 32px");
    }

    #[test]
    fn test_hero_parallax() {
        assert!((hero_parallax(200.0, 0.15) - 30.0).abs() < 1e-9);
        assert_eq!(hero_parallax_transform(30.0), "translateY(30px)");
    }

    proptest! {
        #[test]
        fn prop_cursor_distance_shrinks(x in -2000.0f32..2000.0, y in -2000.0f32..2000.0) {
            let mut cursor = CursorFollower::new(CURSOR_SMOOTHING);
            let target = Vec2::new(x, y);
            cursor.set_target(target);
            let mut last = target.length();
            for _ in 0..20 {
                let d = (target - cursor.step()).length();
                prop_assert!(d <= last + 1e-3);
                last = d;
            }
        }
    }
}
