// core holds the escape-time, midpoint displacement and projection engines
pub mod color;
pub mod error;
pub mod escape;
pub mod face;
pub mod matrix;
pub mod params;
pub mod plasma;
pub mod profile;
pub mod terrain;
pub mod tree;
pub mod utils;

pub use error::{ConfigError, Result};
pub use face::{Face, FaceStyle, Point2};
pub use matrix::{Axis, Transform, Vec3};
pub use params::{ColorMap, Coefficients, FractalParameters, Window};
pub use plasma::PlasmaParams;
pub use profile::ProfileParams;
pub use terrain::TerrainConfig;
pub use tree::{Segment, TreeParams};
pub use utils::{Field2D, HeightField, IterationField, bind, flatten2};

use image::RgbaImage;
use rand::Rng;

/// Every drawable family, each with its own parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Fractal {
    Mandelbrot(FractalParameters),
    Julia(FractalParameters),
    Tricorn(FractalParameters),
    Plasma { params: PlasmaParams, color: ColorMap },
    Terrain1D(ProfileParams),
    Tree(TreeParams),
}

/// Output of one render.
#[derive(Debug, Clone, PartialEq)]
pub enum Render {
    // normalized escape counts
    Field(IterationField),
    // plasma intensities
    Heights(HeightField),
    // 1D terrain profile, `segments + 1` points
    Profile(Vec<f64>),
    // tree strokes
    Segments(Vec<Segment>),
}

impl Fractal {
    pub fn mandelbrot() -> Self {
        Fractal::Mandelbrot(FractalParameters::mandelbrot())
    }

    pub fn julia(j1: f64, j2: f64) -> Self {
        Fractal::Julia(FractalParameters::julia(j1, j2))
    }

    pub fn tricorn() -> Self {
        Fractal::Tricorn(FractalParameters::tricorn())
    }

    pub fn plasma(params: PlasmaParams) -> Self {
        Fractal::Plasma {
            params,
            color: ColorMap::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Fractal::Mandelbrot(_) => "mandelbrot",
            Fractal::Julia(_) => "julia",
            Fractal::Tricorn(_) => "tricorn",
            Fractal::Plasma { .. } => "plasma",
            Fractal::Terrain1D(_) => "terrain",
            Fractal::Tree(_) => "tree",
        }
    }

    /// Run the generator. Each call allocates fresh output; nothing carries
    /// over between renders except what `rng` has consumed.
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Render> {
        log::debug!("rendering {}", self.name());
        match self {
            Fractal::Mandelbrot(p) | Fractal::Julia(p) | Fractal::Tricorn(p) => {
                escape::sample(p).map(Render::Field)
            }
            Fractal::Plasma { params, .. } => plasma::generate(params, rng).map(Render::Heights),
            Fractal::Terrain1D(p) => profile::generate(p, rng).map(Render::Profile),
            Fractal::Tree(p) => tree::branches(p).map(Render::Segments),
        }
    }

    /// Render and shade into an RGBA buffer. Only the field-producing
    /// families have a pixel form; the others return `Ok(None)`.
    pub fn rasterize<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<RgbaImage>> {
        if let Fractal::Plasma { color, .. } = self {
            color.validate()?;
        }
        let image = match (self, self.render(rng)?) {
            (
                Fractal::Mandelbrot(p) | Fractal::Julia(p) | Fractal::Tricorn(p),
                Render::Field(field),
            ) => {
                let cap = p.max_iterations as f64;
                Some(color::shade(&field, &p.color, cap, cap))
            }
            (Fractal::Plasma { color: cmap, .. }, Render::Heights(field)) => {
                // plasma has no iteration cap, every level is tinted
                Some(color::shade(&field, cmap, cmap.gamma, f64::INFINITY))
            }
            _ => None,
        };
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn dispatch_matches_family() {
        let mut rng = SmallRng::seed_from_u64(7);
        let small = FractalParameters::mandelbrot().with_size(8, 8);
        assert!(matches!(
            Fractal::Mandelbrot(small).render(&mut rng),
            Ok(Render::Field(_))
        ));
        assert!(matches!(
            Fractal::plasma(PlasmaParams::new(8, 8, 0.5)).render(&mut rng),
            Ok(Render::Heights(_))
        ));
        assert!(matches!(
            Fractal::Terrain1D(ProfileParams::default()).render(&mut rng),
            Ok(Render::Profile(_))
        ));
        assert!(matches!(
            Fractal::Tree(TreeParams::default()).render(&mut rng),
            Ok(Render::Segments(_))
        ));
    }

    #[test]
    fn julia_and_mandelbrot_share_the_engine() {
        // a Julia set seeded with the Mandelbrot coefficients is the Mandelbrot set
        let mut rng = SmallRng::seed_from_u64(0);
        let params = FractalParameters::mandelbrot().with_size(16, 16);
        let a = Fractal::Mandelbrot(params).render(&mut rng).unwrap();
        let b = Fractal::Julia(params).render(&mut rng).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tree_has_no_raster() {
        let mut rng = SmallRng::seed_from_u64(0);
        let out = Fractal::Tree(TreeParams::new(100.0, 100.0, 3))
            .rasterize(&mut rng)
            .unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn bad_config_fails_fast() {
        let mut rng = SmallRng::seed_from_u64(0);
        let err = Fractal::Mandelbrot(FractalParameters::default().with_iterations(0))
            .render(&mut rng)
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroIterations);
    }
}
