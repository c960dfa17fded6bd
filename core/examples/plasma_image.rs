// Generates a 512×512 plasma cloud and saves it as plasma.png

use fractals::{ColorMap, Fractal, PlasmaParams};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);
    let mut rng = SmallRng::seed_from_u64(seed);

    let fractal = Fractal::Plasma {
        params: PlasmaParams::new(512, 512, 0.5),
        color: ColorMap::rgb(255.0, 180.0, 60.0, 13.0),
    };
    if let Some(img) = fractal.rasterize(&mut rng)? {
        img.save("plasma.png")?;
        println!("Saved plasma (seed {}) to plasma.png", seed);
    }
    Ok(())
}
