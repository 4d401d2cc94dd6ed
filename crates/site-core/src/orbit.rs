//! 3D orbit carousel math.
//!
//! Items sit on fixed golden-spiral points of a unit sphere. Every frame the
//! sphere is rotated about Y by an angle proportional to the time since the
//! session epoch and each point is mapped to a CSS 3D transform with
//! depth-driven scale, opacity, stacking order and blur.

use crate::constants::*;
use crate::viewport::Viewport;
use glam::{Mat3, Vec3};

/// Point `i` of `n` evenly spread over the unit sphere.
///
/// Y steps uniformly through `(-1, 1)` while the azimuth advances by the
/// golden angle, so no two neighbours line up.
pub fn sphere_point(i: usize, n: usize) -> Vec3 {
    let n = n.max(1) as f32;
    let offset = 2.0 / n;
    let golden_angle = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
    let y = i as f32 * offset - 1.0 + offset / 2.0;
    let r = (1.0 - y * y).max(0.0).sqrt();
    let phi = i as f32 * golden_angle;
    Vec3::new(phi.cos() * r, y, phi.sin() * r)
}

/// Viewport-dependent orbit parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    pub radius: f32,
    pub y_scale: f32,
    /// Radians per millisecond.
    pub speed: f64,
    pub tilt_x_deg: f32,
    pub tilt_y_deg: f32,
    pub base_z: f32,
}

impl OrbitParams {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let radius = (viewport.width * ORBIT_RADIUS_WIDTH_FRAC)
            .floor()
            .clamp(ORBIT_RADIUS_MIN, ORBIT_RADIUS_MAX);
        let y_scale =
            (viewport.height / ORBIT_Y_SCALE_DIVISOR).clamp(ORBIT_Y_SCALE_MIN, ORBIT_Y_SCALE_MAX);
        let (speed, [tilt_x_deg, tilt_y_deg], base_z) = if viewport.is_narrow() {
            (ORBIT_SPEED_NARROW, ORBIT_TILT_NARROW, ORBIT_BASE_Z_NARROW)
        } else {
            (ORBIT_SPEED_WIDE, ORBIT_TILT_WIDE, ORBIT_BASE_Z_WIDE)
        };
        Self {
            radius,
            y_scale,
            speed,
            tilt_x_deg,
            tilt_y_deg,
            base_z,
        }
    }

    /// Rotation angle after `elapsed_ms`; frozen at 0 under reduced motion.
    #[inline]
    pub fn angle(&self, elapsed_ms: f64, reduced_motion: bool) -> f32 {
        if reduced_motion {
            0.0
        } else {
            (elapsed_ms * self.speed) as f32
        }
    }

    /// CSS transform for the scene container.
    pub fn scene_transform_css(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) translateZ({}px)",
            self.tilt_x_deg, self.tilt_y_deg, self.base_z
        )
    }
}

/// Screen-space placement of one orbit item for a single frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransform {
    /// Offset from the scene center in CSS pixels.
    pub position: Vec3,
    /// 0 at the back of the sphere, 1 at the front.
    pub depth: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
    pub blur_px: f32,
}

impl ItemTransform {
    pub fn transform_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, {}px) translate(-50%, -50%) scale({})",
            self.position.x, self.position.y, self.position.z, self.scale
        )
    }

    pub fn filter_css(&self) -> String {
        format!("blur({}px)", self.blur_px)
    }
}

/// Fixed sphere points for a set of orbit items.
#[derive(Clone, Debug)]
pub struct OrbitLayout {
    points: Vec<Vec3>,
}

impl OrbitLayout {
    pub fn new(count: usize) -> Self {
        let points = (0..count).map(|i| sphere_point(i, count)).collect();
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Project every item for rotation `angle` (radians about Y).
    pub fn project(&self, angle: f32, params: &OrbitParams) -> Vec<ItemTransform> {
        // x' = x cos a - z sin a, z' = x sin a + z cos a
        let rot = Mat3::from_rotation_y(-angle);
        self.points
            .iter()
            .map(|p| project_point(rot * *p, params))
            .collect()
    }
}

fn project_point(p: Vec3, params: &OrbitParams) -> ItemTransform {
    let r = params.radius;
    let position = Vec3::new(p.x * r, p.y * r * params.y_scale, p.z * r);
    let depth = if r > 0.0 {
        ((position.z + r) / (2.0 * r)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    ItemTransform {
        position,
        depth,
        scale: ORBIT_SCALE_BASE + depth * ORBIT_SCALE_SPAN,
        opacity: ORBIT_OPACITY_BASE + depth * ORBIT_OPACITY_SPAN,
        z_index: (depth * ORBIT_Z_INDEX_SPAN).floor() as i32,
        blur_px: (1.0 - depth) * ORBIT_BLUR_MAX_PX,
    }
}

/// A video shown in the orbit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrbitVideo<'a> {
    pub id: &'a str,
}

impl<'a> OrbitVideo<'a> {
    pub fn thumbnail_url(&self) -> String {
        format!("https://img.youtube.com/vi/{}/hqdefault.jpg", self.id)
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

pub fn default_videos() -> impl Iterator<Item = OrbitVideo<'static>> {
    let ids: &'static [&'static str] = &ORBIT_VIDEO_IDS;
    ids.iter().map(|&id| OrbitVideo { id })
}
