use std::time::Instant;

use image::{Rgba, RgbaImage};

use crate::params::ColorMap;
use crate::utils::{Field2D, channel};

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

// Pixel for one scaled value `i` (field value times gradient), or None when
// the pixel should be left untouched.
pub fn shade_level(i: f64, cmap: &ColorMap, max_iterations: f64) -> Option<Rgba<u8>> {
    if i < cmap.crop.abs() {
        // positive crop blacks out the skipped levels, negative leaves them clear
        return (cmap.crop > 0.0).then_some(BLACK);
    }
    if i < cmap.colored_below(max_iterations) {
        let t = i / cmap.gamma;
        return Some(Rgba([
            channel(t * cmap.red),
            channel(t * cmap.green),
            channel(t * cmap.blue),
            255,
        ]));
    }
    if i > max_iterations - cmap.fill {
        return Some(BLACK);
    }
    // banded rainbow, only visible for the first few levels
    Some(Rgba([
        channel(i % 8.0 * 32.0),
        channel(i % 16.0 * 16.0),
        channel(i % 32.0 * 8.0),
        255,
    ]))
}

// Turn a normalized field into an RGBA buffer. `gradient` scales field values
// back to level units: the iteration cap for escape-time fields, the gamma
// for plasma. Untouched pixels stay fully transparent.
pub fn shade(field: &Field2D, cmap: &ColorMap, gradient: f64, max_iterations: f64) -> RgbaImage {
    let start = Instant::now();
    let width = field.len();
    let height = field.first().map_or(0, Vec::len);
    let mut img = RgbaImage::new(width as u32, height as u32);

    for (x, column) in field.iter().enumerate() {
        for (y, &v) in column.iter().enumerate() {
            if let Some(px) = shade_level(v * gradient, cmap, max_iterations) {
                img.put_pixel(x as u32, y as u32, px);
            }
        }
    }

    log::debug!("shaded {}x{} buffer in {:.2?}", width, height, start.elapsed());
    img
}
