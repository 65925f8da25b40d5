//! Hero backdrop uniforms
//!
//! The backdrop is a full-viewport plane shaded entirely on the GPU. This
//! module owns the uniform values fed to it every frame, plus a CPU version
//! of the fragment shading used to check the shader math.

use glam::{Vec2, Vec3, Vec4};

use super::rect::Rect;
use crate::consts::{BACKDROP_ACCENT, BACKDROP_BG};

/// Per-frame shader inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropUniforms {
    /// Seconds since the backdrop started
    pub time: f32,
    /// Pointer in uv space (0..1, y up)
    pub mouse: Vec2,
    /// Drawing buffer size in pixels
    pub resolution: Vec2,
}

impl BackdropUniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            time: 0.0,
            mouse: Vec2::splat(0.5),
            resolution: Vec2::new(width, height),
        }
    }

    pub fn set_pointer(&mut self, client: Vec2, mount: Rect) {
        self.mouse = pointer_to_uv(client, mount);
    }

    pub fn set_resolution(&mut self, width: f32, height: f32) {
        self.resolution = Vec2::new(width, height);
    }
}

/// Client-space pointer to uv space of the mount (y flipped, GL convention).
/// Points outside the mount fall outside 0..1.
#[inline]
pub fn pointer_to_uv(client: Vec2, mount: Rect) -> Vec2 {
    let n = mount.normalize(client);
    Vec2::new(n.x, 1.0 - n.y)
}

/// CPU reference of the fragment shader: premultiplication is left to the
/// blend stage, so this returns straight (rgb, alpha).
pub fn shade(uv: Vec2, mouse: Vec2, time: f32) -> Vec4 {
    let dist = uv.distance(mouse);

    let glow = (0.05 / dist).powf(1.5);
    let ripple = (dist * 20.0 - time * 2.0).sin() * 0.02;

    let bg = Vec3::from_array(BACKDROP_BG);
    let accent = Vec3::from_array(BACKDROP_ACCENT);
    let mut color = bg.lerp(accent, glow + ripple);

    let vignette = 1.0 - uv.distance(Vec2::splat(0.5));
    color *= vignette;

    color.extend(0.2 + glow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_uv_flips_y() {
        let mount = Rect::new(0.0, 100.0, 800.0, 400.0);
        assert_eq!(pointer_to_uv(Vec2::new(0.0, 100.0), mount), Vec2::new(0.0, 1.0));
        assert_eq!(pointer_to_uv(Vec2::new(800.0, 500.0), mount), Vec2::new(1.0, 0.0));
        assert_eq!(pointer_to_uv(Vec2::new(400.0, 300.0), mount), Vec2::splat(0.5));
    }

    #[test]
    fn test_defaults_center_pointer() {
        let u = BackdropUniforms::new(1280.0, 720.0);
        assert_eq!(u.mouse, Vec2::splat(0.5));
        assert_eq!(u.resolution, Vec2::new(1280.0, 720.0));
        assert_eq!(u.time, 0.0);
    }

    #[test]
    fn test_glow_falls_off_with_distance() {
        let mouse = Vec2::new(0.3, 0.6);
        let near = shade(mouse + Vec2::new(0.02, 0.0), mouse, 0.0);
        let far = shade(mouse + Vec2::new(0.4, 0.0), mouse, 0.0);
        assert!(near.w > far.w);
        assert!(far.w > 0.2);
    }

    #[test]
    fn test_vignette_darkens_edges() {
        // Pointer far away so the glow is negligible at both samples
        let mouse = Vec2::new(-50.0, -50.0);
        let center = shade(Vec2::splat(0.5), mouse, 0.0);
        let corner = shade(Vec2::new(1.0, 1.0), mouse, 0.0);
        assert!(center.truncate().length() > corner.truncate().length());
    }
}
