use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::matrix::{Transform, Vec3};

/// A point on the 2D target surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Perspective divide: `focus / (z + focus)` scales x and y.
/// The caller keeps `z + focus > 0`; `z == -focus` divides by zero.
#[inline]
pub fn project(p: Vec3, focus: f64) -> Point2 {
    let scale = focus / (p.z + focus);
    Point2::new(p.x * scale, p.y * scale)
}

/// Whether a face is painted solid or only outlined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FaceStyle {
    #[default]
    Fill,
    Mesh,
}

/// One quad of the terrain mesh: model-space corners, their projection and
/// the color to paint them with. Lives for a single frame.
#[derive(Debug, Clone)]
pub struct Face {
    pub p3d: [Vec3; 4],
    pub p2d: [Point2; 4],
    pub color: Srgb<u8>,
    pub style: FaceStyle,
}

impl Face {
    pub fn new(p3d: [Vec3; 4], color: Srgb<u8>, style: FaceStyle) -> Self {
        Self {
            p3d,
            p2d: [Point2::default(); 4],
            color,
            style,
        }
    }

    pub fn transform(&mut self, t: &Transform) {
        t.transform_points(&mut self.p3d);
    }

    // Refresh p2d from p3d
    pub fn project(&mut self, focus: f64) {
        for (p2, &p3) in self.p2d.iter_mut().zip(self.p3d.iter()) {
            *p2 = project(p3, focus);
        }
    }

    /// Closed path for the surface: move to the first vertex, line through
    /// the rest and back to the first.
    pub fn outline(&self) -> [Point2; 5] {
        let [a, b, c, d] = self.p2d;
        [a, b, c, d, a]
    }
}
