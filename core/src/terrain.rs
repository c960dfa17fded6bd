use std::time::Instant;

use palette::Srgb;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::face::{Face, FaceStyle};
use crate::matrix::{Transform, Vec3};
use crate::plasma::{self, PlasmaParams};
use crate::utils::{Field2D, HeightField, bind};

const SAND: (u8, u8, u8) = (238, 214, 175);
// Cells whose lowest corner sits higher than this are drawn as rock
const ROCK_LINE: f64 = 8.0;

// Terrain view: a plasma heightmap lifted into 3D, rotated by a camera and
// projected onto the surface as colored quads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    pub size: f64, // model-space extent of the whole grid
    pub detail: usize, // grid points per side
    pub roughness: f64,
    pub sea_level: f64, // subtracted after scaling, so water is < 0
    pub height_scale: f64, // plasma [0, 1] -> elevation units
    pub elevation_scale: f64, // elevation units -> model-space z
    pub zoom: f64, // perspective focus
    pub focal_distance: f64,
    pub angle_x: f64, // degrees
    pub angle_y: f64,
    pub angle_z: f64,
    pub style: FaceStyle,
}

impl TerrainConfig {
    pub fn with_angles(mut self, x: f64, y: f64, z: f64) -> Self {
        self.angle_x = x;
        self.angle_y = y;
        self.angle_z = z;
        self
    }

    pub fn camera(&self) -> Transform {
        Transform::camera(
            self.angle_x.to_radians(),
            self.angle_y.to_radians(),
            self.angle_z.to_radians(),
            self.focal_distance,
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.detail < 2 {
            return Err(ConfigError::TerrainTooSmall(self.detail));
        }
        Ok(())
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            size: 1020.0,
            detail: 30,
            roughness: 0.5,
            sea_level: 17.0,
            height_scale: 34.0,
            elevation_scale: 20.0,
            zoom: 100.0,
            focal_distance: 1000.0,
            angle_x: 0.0,
            angle_y: 0.0,
            angle_z: 0.0,
            style: FaceStyle::Fill,
        }
    }
}

// Affine map from a height field to elevations: scale·h + offset
pub fn to_elevation(field: &HeightField, scale: f64, offset: f64) -> Field2D {
    field
        .iter()
        .map(|column| column.iter().map(|&h| h * scale + offset).collect())
        .collect()
}

// Plasma heightmap shifted so that the sea sits at zero
pub fn generate<R: Rng + ?Sized>(config: &TerrainConfig, rng: &mut R) -> Result<Field2D> {
    config.validate()?;
    let params = PlasmaParams::new(config.detail, config.detail, config.roughness);
    let heights = plasma::generate(&params, rng)?;
    Ok(to_elevation(&heights, config.height_scale, -config.sea_level))
}

/// Color of a grid cell from its four corner elevations.
pub fn cell_color(corners: [f64; 4]) -> Srgb<u8> {
    let mut e = corners;
    e.sort_by(f64::total_cmp);
    let [lowest, _, second, highest] = e;

    if highest < 0.0 {
        // deeper water is darker
        let blue = bind((192.0 + highest * 8.0).floor(), 0.0, 255.0) as u8;
        return Srgb::new(0, 0, blue);
    }
    if second < 0.0 {
        return Srgb::from_components(SAND);
    }
    if lowest > ROCK_LINE {
        let grey = bind((lowest * 8.0).floor() + 50.0, 0.0, 255.0) as u8;
        return Srgb::new(grey, grey, grey);
    }
    let slope = highest - lowest;
    let grey = bind((slope * 16.0 + lowest * 4.0).floor(), 0.0, 155.0) as u8;
    Srgb::new(grey, grey + 100, grey)
}

// Build every face of the mesh in raster order (row i, then column j).
// Faces are NOT depth sorted: painting them in this order can show
// artifacts where steep terrain folds over itself.
pub fn faces(config: &TerrainConfig, elevations: &Field2D) -> Result<Vec<Face>> {
    config.validate()?;
    let detail = config.detail;
    if elevations.len() < detail || elevations.iter().any(|c| c.len() < detail) {
        return Err(ConfigError::EmptyField {
            width: elevations.len(),
            height: elevations.first().map_or(0, Vec::len),
        });
    }
    let start = Instant::now();

    let camera = config.camera();
    let grid = config.size / detail as f64;
    let half = (detail / 2) as f64;
    // Water is flattened to the sea surface; its color still uses the depth
    let z_at = |i: usize, j: usize| elevations[i][j].max(0.0) * config.elevation_scale;

    let mut out = Vec::with_capacity((detail - 1) * (detail - 1));
    for i in 0..detail - 1 {
        for j in 0..detail - 1 {
            let x0 = (i as f64 - half) * grid;
            let y0 = (j as f64 - half) * grid;
            let x1 = x0 + grid;
            let y1 = y0 + grid;
            let color = cell_color([
                elevations[i][j],
                elevations[i][j + 1],
                elevations[i + 1][j + 1],
                elevations[i + 1][j],
            ]);

            let mut face = Face::new(
                [
                    Vec3::new(x0, y0, z_at(i, j)),
                    Vec3::new(x0, y1, z_at(i, j + 1)),
                    Vec3::new(x1, y1, z_at(i + 1, j + 1)),
                    Vec3::new(x1, y0, z_at(i + 1, j)),
                ],
                color,
                config.style,
            );
            face.transform(&camera);
            face.project(config.zoom);
            out.push(face);
        }
    }

    log::debug!("terrain mesh of {} faces in {:.2?}", out.len(), start.elapsed());
    Ok(out)
}
