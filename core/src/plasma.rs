use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::utils::{HeightField, bind, new_field};

// Plasma cloud via recursive 2D midpoint displacement.
//
//   c0 ---- e0 ---- c1
//    |       |       |
//   e3 ---- mid --- e1
//    |       |       |
//   c3 ---- e2 ---- c2

/// Corner values in clockwise order: top-left, top-right, bottom-right,
/// bottom-left.
pub type Corners = [f64; 4];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlasmaParams {
    pub width: usize,
    pub height: usize,
    // scales the random offset applied to every center point
    pub roughness: f64,
}

impl PlasmaParams {
    pub fn new(width: usize, height: usize, roughness: f64) -> Self {
        Self {
            width,
            height,
            roughness,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyField {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for PlasmaParams {
    fn default() -> Self {
        Self::new(200, 200, 0.5)
    }
}

/// Result of splitting one quad: the displaced center, the four edge
/// midpoints (top, right, bottom, left) and the corners of each child quad
/// in the order top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subdivision {
    pub center: f64,
    pub edges: [f64; 4],
    pub children: [Corners; 4],
}

// Split one quad. `r` is a uniform sample in [0, 1).
// Every edge value is computed once here and handed to both children that
// share it, which keeps neighbouring quads continuous.
pub fn subdivide(c: Corners, half_w: usize, half_h: usize, roughness: f64, r: f64) -> Subdivision {
    let [c0, c1, c2, c3] = c;
    let mut center = (c0 + c1 + c2 + c3) / 4.0;
    center += (r - 0.5) * ((half_w + half_h) as f64 / 10.0) * roughness;
    let center = bind(center, 0.0, 1.0);

    let e0 = bind((c0 + c1) / 2.0, 0.0, 1.0);
    let e1 = bind((c1 + c2) / 2.0, 0.0, 1.0);
    let e2 = bind((c2 + c3) / 2.0, 0.0, 1.0);
    let e3 = bind((c3 + c0) / 2.0, 0.0, 1.0);

    Subdivision {
        center,
        edges: [e0, e1, e2, e3],
        children: [
            [c0, e0, center, e3],
            [e0, c1, e1, center],
            [center, e1, c2, e2],
            [e3, center, e2, c3],
        ],
    }
}

// Fill the rectangle (x, y, width, height) of `field`.
// Sizes halve (floor) on every level, so the depth is bounded by
// log2(max(width, height)) + 1.
#[allow(clippy::too_many_arguments)]
pub fn displace<R: Rng + ?Sized>(
    field: &mut HeightField,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    corners: Corners,
    roughness: f64,
    rng: &mut R,
) {
    if width <= 1 && height <= 1 {
        field[x][y] = corners.iter().sum::<f64>() / 4.0;
        return;
    }

    let half_w = width / 2;
    let half_h = height / 2;
    let split = subdivide(corners, half_w, half_h, roughness, rng.random::<f64>());
    let [tl, tr, br, bl] = split.children;

    displace(field, x, y, half_w, half_h, tl, roughness, rng);
    displace(field, x + half_w, y, width - half_w, half_h, tr, roughness, rng);
    displace(
        field,
        x + half_w,
        y + half_h,
        width - half_w,
        height - half_h,
        br,
        roughness,
        rng,
    );
    displace(field, x, y + half_h, half_w, height - half_h, bl, roughness, rng);
}

// Generate a fresh width×height plasma field with random corner seeds
pub fn generate<R: Rng + ?Sized>(params: &PlasmaParams, rng: &mut R) -> Result<HeightField> {
    params.validate()?;
    let start = Instant::now();

    let corners: Corners = [
        rng.random::<f64>(),
        rng.random::<f64>(),
        rng.random::<f64>(),
        rng.random::<f64>(),
    ];
    let mut field = new_field(params.width, params.height);
    displace(
        &mut field,
        0,
        0,
        params.width,
        params.height,
        corners,
        params.roughness,
        rng,
    );

    log::debug!(
        "plasma field {}x{} in {:.2?}",
        params.width,
        params.height,
        start.elapsed()
    );
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn shared_edges_are_identical() {
        let split = subdivide([0.1, 0.9, 0.4, 0.7], 8, 8, 0.5, 0.83);
        let [tl, tr, br, bl] = split.children;
        // top edge midpoint, shared by the two upper children
        assert_eq!(tl[1].to_bits(), tr[0].to_bits());
        // right edge midpoint
        assert_eq!(tr[2].to_bits(), br[1].to_bits());
        // bottom edge midpoint
        assert_eq!(br[3].to_bits(), bl[2].to_bits());
        // left edge midpoint
        assert_eq!(bl[0].to_bits(), tl[3].to_bits());
        // the center is the common corner of all four
        for child in [tl[2], tr[3], br[0], bl[1]] {
            assert_eq!(child.to_bits(), split.center.to_bits());
        }
    }

    #[test]
    fn subdivide_clamps_center() {
        let high = subdivide([1.0; 4], 50, 50, 4.0, 0.99);
        assert_eq!(high.center, 1.0);
        let low = subdivide([0.0; 4], 50, 50, 4.0, 0.0);
        assert_eq!(low.center, 0.0);
    }

    #[test]
    fn unit_quad_averages_corners() {
        let mut field = new_field(1, 1);
        let mut rng = SmallRng::seed_from_u64(1);
        displace(&mut field, 0, 0, 1, 1, [0.0, 0.2, 0.4, 0.6], 1.0, &mut rng);
        assert!((field[0][0] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn flat_corners_without_roughness_stay_flat() {
        let mut field = new_field(9, 5);
        let mut rng = SmallRng::seed_from_u64(3);
        displace(&mut field, 0, 0, 9, 5, [0.25; 4], 0.0, &mut rng);
        for column in &field {
            for &v in column {
                assert!((v - 0.25).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn plasma_dimensions_and_range() {
        let mut rng = SmallRng::seed_from_u64(2025);
        let field = generate(&PlasmaParams::new(37, 20, 0.5), &mut rng).unwrap();
        assert_eq!(field.len(), 37);
        assert_eq!(field[0].len(), 20);
        for column in &field {
            for &v in column {
                assert!((0.0..=1.0).contains(&v), "value {} out of range", v);
            }
        }
    }

    #[test]
    fn plasma_determinism() {
        let params = PlasmaParams::new(33, 33, 0.8);
        let a = generate(&params, &mut SmallRng::seed_from_u64(42)).unwrap();
        let b = generate(&params, &mut SmallRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn plasma_rejects_empty() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(generate(&PlasmaParams::new(0, 4, 0.5), &mut rng).is_err());
    }
}
