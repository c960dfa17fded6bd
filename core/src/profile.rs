use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::face::Point2;

/// Parameters of a 1D midpoint-displacement terrain profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileParams {
    // number of segments; the profile has `segments + 1` points
    pub segments: usize,
    // offset range of the first midpoint, in output units
    pub max_displacement: f64,
    // factor applied to the offset range on every level, usually in (0, 1)
    pub sharpness: f64,
}

impl ProfileParams {
    pub fn new(segments: usize, max_displacement: f64, sharpness: f64) -> Self {
        Self {
            segments,
            max_displacement,
            sharpness,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.segments == 0 {
            return Err(ConfigError::EmptyProfile);
        }
        Ok(())
    }
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self::new(32, 40.0, 0.5)
    }
}

// Displace the interior of [start, end]. Endpoints must already be seeded and
// are never written. Returns the deepest recursion level reached, which is at
// most ceil(log2(end - start)).
pub fn displace_1d<R: Rng + ?Sized>(
    points: &mut [f64],
    start: usize,
    end: usize,
    max_displacement: f64,
    sharpness: f64,
    rng: &mut R,
) -> usize {
    if end <= start + 1 {
        return 0;
    }
    // round-half-up of (start + end) / 2
    let mid = (start + end + 1) / 2;
    if mid == start || mid == end {
        return 0;
    }

    let offset = max_displacement * (1.0 - 2.0 * rng.random::<f64>());
    points[mid] = 0.5 * (points[start] + points[end]) + offset;

    let next = max_displacement * sharpness;
    let left = displace_1d(points, start, mid, next, sharpness, rng);
    let right = displace_1d(points, mid, end, next, sharpness, rng);
    1 + left.max(right)
}

// Fresh profile with both endpoints seeded at 0
pub fn generate<R: Rng + ?Sized>(params: &ProfileParams, rng: &mut R) -> Result<Vec<f64>> {
    params.validate()?;
    let start = Instant::now();

    let mut points = vec![0.0; params.segments + 1];
    let depth = displace_1d(
        &mut points,
        0,
        params.segments,
        params.max_displacement,
        params.sharpness,
        rng,
    );

    log::trace!("profile recursion depth {}", depth);
    log::debug!(
        "profile of {} segments in {:.2?}",
        params.segments,
        start.elapsed()
    );
    Ok(points)
}

// Stroke path across a width×height surface, centred vertically
pub fn polyline(points: &[f64], width: f64, height: f64) -> Vec<Point2> {
    let segments = points.len().saturating_sub(1).max(1) as f64;
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| Point2::new(i as f64 * width / segments, height / 2.0 + p))
        .collect()
}
