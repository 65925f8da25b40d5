//! Client-space rectangles

use glam::Vec2;

/// Element bounds in client (viewport) pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Point relative to the top-left corner, as a fraction of the size.
    /// Zero-sized rects map everything to the origin.
    #[inline]
    pub fn normalize(&self, point: Vec2) -> Vec2 {
        let x = if self.width > 0.0 {
            (point.x - self.left) / self.width
        } else {
            0.0
        };
        let y = if self.height > 0.0 {
            (point.y - self.top) / self.height
        } else {
            0.0
        };
        Vec2::new(x, y)
    }
}
