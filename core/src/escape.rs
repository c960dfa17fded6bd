use std::f64::consts::LN_2;
use std::time::Instant;

use crate::error::Result;
use crate::params::{Coefficients, FractalParameters};
use crate::utils::{IterationField, bind, new_field};

// Escape-time evaluation of the generalized quadratic map.
// Mandelbrot, Julia and Tricorn differ only in their Coefficients,
// so nothing in here looks at which family is being drawn.

// Iterate one point and return the escape index, or exactly `max_iter`
// when the orbit stays inside `radius_sq`.
#[inline]
pub fn iterate(x0: f64, y0: f64, max_iter: u32, k: &Coefficients, radius_sq: f64) -> u32 {
    orbit(x0, y0, max_iter, k, radius_sq).0
}

// Continuous variant: subtracts ln(ln|z|²/ln 2) on escape to remove banding.
// The correction is bound to [0, 1] so the result never drops below
// `count - 1` nor below zero.
pub fn iterate_smooth(x0: f64, y0: f64, max_iter: u32, k: &Coefficients, radius_sq: f64) -> f64 {
    let (count, mag_sq) = orbit(x0, y0, max_iter, k, radius_sq);
    if count == max_iter {
        return max_iter as f64;
    }
    let correction = (mag_sq.ln() / LN_2).ln();
    // NaN only when |z|² <= 1, which cannot escape a positive radius above 1
    let correction = if correction.is_nan() {
        0.0
    } else {
        bind(correction, 0.0, 1.0)
    };
    (count as f64 - correction).max(0.0)
}

// Core loop shared by both variants; returns (count, |z|² at exit)
#[inline]
fn orbit(x0: f64, y0: f64, max_iter: u32, k: &Coefficients, radius_sq: f64) -> (u32, f64) {
    let mut x = x0;
    let mut y = y0;
    for i in 0..max_iter {
        let mag_sq = x * x + y * y;
        if mag_sq > radius_sq {
            return (i, mag_sq);
        }
        let z = k.a * x * x - k.b * y * y + k.j * x0 + k.j1;
        y = 2.0 * k.c * x * y + k.j * y0 + k.j2;
        x = k.d * z;
    }
    (max_iter, x * x + y * y)
}

// Map pixel (px, py) of a w×h grid onto the parameter window
#[inline]
pub fn pixel_to_plane(params: &FractalParameters, px: usize, py: usize) -> (f64, f64) {
    let w = &params.window;
    let x0 = w.xmin + w.width() * px as f64 / params.width as f64;
    let y0 = w.ymin + w.height() * py as f64 / params.height as f64;
    (x0, y0)
}

// Sample the whole grid into a fresh field of count / max_iter in [0, 1]
pub fn sample(params: &FractalParameters) -> Result<IterationField> {
    params.validate()?;
    let start = Instant::now();

    let max_iter = params.max_iterations;
    let cap = max_iter as f64;
    let radius_sq = params.radius_sq();
    let k = &params.coefficients;

    let mut field = new_field(params.width, params.height);
    for (px, column) in field.iter_mut().enumerate() {
        for (py, cell) in column.iter_mut().enumerate() {
            let (x0, y0) = pixel_to_plane(params, px, py);
            let count = if params.smoothing {
                iterate_smooth(x0, y0, max_iter, k, radius_sq)
            } else {
                iterate(x0, y0, max_iter, k, radius_sq) as f64
            };
            *cell = bind(count, 0.0, cap) / cap;
        }
    }

    log::debug!(
        "escape-time field {}x{} ({} iterations) in {:.2?}",
        params.width,
        params.height,
        max_iter,
        start.elapsed()
    );
    Ok(field)
}
