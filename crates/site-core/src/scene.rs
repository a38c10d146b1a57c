//! Decorative hero background model.
//!
//! Holds particle and sphere positions, the pointer offset and the current
//! theme, and answers "where is everything at time t". No platform APIs
//! here; the web frontend projects the result onto a 2-D canvas.

use crate::constants::*;
use crate::theme::Theme;
use glam::{Mat4, Vec2, Vec3, Vec4};
use rand::prelude::*;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Hero camera looking down -Z from `CAMERA_Z`.
    pub fn hero(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// A world-space point mapped into a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    /// Pixel position, origin top-left.
    pub screen: Vec2,
    /// Clip-space w, i.e. distance along the view direction.
    pub depth: f32,
}

/// Project `world` through `view_proj` into a `width` x `height` viewport.
/// Points behind the camera or outside the frustum depth range give `None`.
pub fn project(view_proj: Mat4, world: Vec3, width: f32, height: f32) -> Option<Projected> {
    let clip = view_proj * Vec4::new(world.x, world.y, world.z, 1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !(-1.0..=1.0).contains(&ndc.z) {
        return None;
    }
    Some(Projected {
        screen: Vec2::new(
            (ndc.x * 0.5 + 0.5) * width,
            (1.0 - (ndc.y * 0.5 + 0.5)) * height,
        ),
        depth: clip.w,
    })
}

/// On-screen size in pixels of a world-space length at `depth`.
#[inline]
pub fn pixel_size(world_size: f32, depth: f32, viewport_h: f32, fovy_radians: f32) -> f32 {
    world_size * viewport_h / (2.0 * (fovy_radians * 0.5).tan() * depth.max(1e-3))
}

#[derive(Clone, Debug)]
pub struct FloatingShape {
    pub origin: Vec3,
    pub radius: f32,
    pub speed: f32,
    pub amplitude: f32,
    pub color: u32,
}

impl FloatingShape {
    /// Bobs vertically around its origin.
    pub fn position_at(&self, elapsed_sec: f32) -> Vec3 {
        let y = self.origin.y + (elapsed_sec * self.speed).sin() * self.amplitude;
        Vec3::new(self.origin.x, y, self.origin.z)
    }
}

pub struct SceneModel {
    pub particles: Vec<Vec3>,
    pub shapes: Vec<FloatingShape>,
    theme: Theme,
    pointer: Vec2,
}

impl SceneModel {
    pub fn new(seed: u64, theme: Theme) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = PARTICLE_SPREAD * 0.5;
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect();
        let shapes = (0..SHAPE_COUNT)
            .map(|i| {
                let origin = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD[0],
                    (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD[1],
                    (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD[2],
                );
                FloatingShape {
                    origin,
                    radius: 0.1 + rng.gen::<f32>() * 0.1,
                    speed: 0.5 + rng.gen::<f32>() * 0.5,
                    amplitude: 0.2 + rng.gen::<f32>() * 0.3,
                    color: SHAPE_COLORS[i % SHAPE_COLORS.len()],
                }
            })
            .collect();
        Self {
            particles,
            shapes,
            theme,
            pointer: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn recolor(&mut self, theme: Theme) {
        self.theme = theme;
    }

    #[inline]
    pub fn particle_opacity(&self) -> f32 {
        self.theme.particle_opacity()
    }

    #[inline]
    pub fn shape_opacity(&self) -> f32 {
        self.theme.shape_opacity()
    }

    /// Pointer in normalized device coordinates (x right, y up, -1..1).
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Particle cloud rotation (x, y) at `elapsed_sec`, including pointer follow.
    pub fn particle_rotation(&self, elapsed_sec: f32) -> (f32, f32) {
        let rx = elapsed_sec * PARTICLE_SPIN_X + self.pointer.y * POINTER_FOLLOW;
        let ry = elapsed_sec * PARTICLE_SPIN_Y + self.pointer.x * POINTER_FOLLOW;
        (rx, ry)
    }

    pub fn particle_transform(&self, elapsed_sec: f32) -> Mat4 {
        let (rx, ry) = self.particle_rotation(elapsed_sec);
        Mat4::from_rotation_x(rx) * Mat4::from_rotation_y(ry)
    }
}

/// Pointer position in client pixels to NDC.
pub fn pointer_ndc(client_x: f64, client_y: f64, width: f64, height: f64) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        ((client_x / width) * 2.0 - 1.0) as f32,
        (-(client_y / height) * 2.0 + 1.0) as f32,
    )
}

/// Canvas backing-store size for a CSS box: device pixels with the ratio
/// capped at 2x, never smaller than 1x1.
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = device_pixel_ratio.min(MAX_PIXEL_RATIO);
    (
        ((css_width * dpr) as u32).max(1),
        ((css_height * dpr) as u32).max(1),
    )
}

/// `#rrggbb`-style colour with alpha for canvas fill styles.
pub fn rgba(color: u32, alpha: f32) -> String {
    let r = (color >> 16) & 0xff;
    let g = (color >> 8) & 0xff;
    let b = color & 0xff;
    format!("rgba({}, {}, {}, {:.2})", r, g, b, alpha.clamp(0.0, 1.0))
}
