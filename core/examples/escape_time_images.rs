// Renders the three escape-time families to PNG:
// Mandelbrot (banded and smoothed), Julia, Tricorn

use fractals::{ColorMap, Fractal, FractalParameters};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let mut rng = SmallRng::seed_from_u64(2025);

    // Tint the first dozen levels blue, band the rest, black out the interior
    let color = ColorMap {
        colored: Some(12.0),
        fill: 1.0,
        ..ColorMap::rgb(40.0, 90.0, 255.0, 13.0)
    };

    let base = FractalParameters::mandelbrot()
        .with_size(600, 600)
        .with_iterations(64)
        .with_color(color);

    let jobs = [
        ("mandelbrot.png", Fractal::Mandelbrot(base)),
        (
            "mandelbrot_smooth.png",
            Fractal::Mandelbrot(base.with_smoothing(true)),
        ),
        (
            "julia.png",
            Fractal::Julia(
                FractalParameters::julia(-0.8, 0.156)
                    .with_size(600, 600)
                    .with_iterations(64)
                    .with_color(color),
            ),
        ),
        (
            "tricorn.png",
            Fractal::Tricorn(
                FractalParameters::tricorn()
                    .with_size(600, 600)
                    .with_iterations(64)
                    .with_color(color),
            ),
        ),
    ];

    for (path, fractal) in jobs {
        if let Some(img) = fractal.rasterize(&mut rng)? {
            img.save(path)?;
            println!("Saved {} to {}", fractal.name(), path);
        }
    }
    Ok(())
}
