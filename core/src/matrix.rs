use crate::error::{ConfigError, Result};

/// A point in model or camera space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Rotation axis. Converts from the numeric 0/1/2 convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl TryFrom<usize> for Axis {
    type Error = ConfigError;

    fn try_from(axis: usize) -> Result<Self> {
        match axis {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(ConfigError::InvalidAxis(axis)),
        }
    }
}

/// 4×4 homogeneous transform, row-vector convention: `p' = p · M`, so the
/// translation lives in row 3. Every operation right-multiplies, meaning the
/// first operation applied to a matrix is the first one a point goes through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub m: [[f64; 4]; 4],
}

impl Transform {
    pub const fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub const fn zero() -> Self {
        Self { m: [[0.0; 4]; 4] }
    }

    /// Camera used by the terrain view: rotate about X, then Y, then Z, then
    /// push the scene `focal_distance` away along Z. Angles in radians.
    pub fn camera(angle_x: f64, angle_y: f64, angle_z: f64, focal_distance: f64) -> Self {
        let mut t = Self::identity();
        t.rotate_x(angle_x);
        t.rotate_y(angle_y);
        t.rotate_z(angle_z);
        t.translate(0.0, 0.0, focal_distance);
        t
    }

    /// Right-multiply in place: `self = self · other`.
    pub fn multiply(&mut self, other: &Transform) {
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        self.m = out;
    }

    pub fn scale(&mut self, x: f64, y: f64, z: f64) {
        let mut s = Self::identity();
        s.m[0][0] = x;
        s.m[1][1] = y;
        s.m[2][2] = z;
        self.multiply(&s);
    }

    /// Rotate by `angle` radians about axis 0 (x), 1 (y) or 2 (z).
    pub fn rotate(&mut self, angle: f64, axis: usize) -> Result<()> {
        self.rotate_about(angle, Axis::try_from(axis)?);
        Ok(())
    }

    pub fn rotate_about(&mut self, angle: f64, axis: Axis) {
        let (sin, cos) = angle.sin_cos();
        let mut r = Self::identity();
        match axis {
            Axis::X => {
                r.m[1][1] = cos;
                r.m[2][2] = cos;
                r.m[1][2] = sin;
                r.m[2][1] = -sin;
            }
            Axis::Y => {
                r.m[0][0] = cos;
                r.m[2][2] = cos;
                r.m[0][2] = sin;
                r.m[2][0] = -sin;
            }
            Axis::Z => {
                r.m[0][0] = cos;
                r.m[1][1] = cos;
                r.m[1][0] = sin;
                r.m[0][1] = -sin;
            }
        }
        self.multiply(&r);
    }

    pub fn rotate_x(&mut self, angle: f64) {
        self.rotate_about(angle, Axis::X);
    }

    pub fn rotate_y(&mut self, angle: f64) {
        self.rotate_about(angle, Axis::Y);
    }

    pub fn rotate_z(&mut self, angle: f64) {
        self.rotate_about(angle, Axis::Z);
    }

    /// Mirror across the plane orthogonal to `axis`.
    pub fn reflect(&mut self, axis: usize) -> Result<()> {
        let i = Axis::try_from(axis)? as usize;
        let mut r = Self::identity();
        r.m[i][i] = -1.0;
        self.multiply(&r);
        Ok(())
    }

    // Same as right-multiplying by a translation matrix, since column 3 of an
    // affine transform is (0, 0, 0, 1).
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.m[3][0] += dx;
        self.m[3][1] += dy;
        self.m[3][2] += dz;
    }

    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3 {
            x: m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
            y: m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
            z: m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
        }
    }

    pub fn transform_points(&self, points: &mut [Vec3]) {
        for p in points.iter_mut() {
            *p = self.transform_point(*p);
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
