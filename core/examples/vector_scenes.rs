// Writes the vector outputs as SVG:
// terrain.svg - projected terrain mesh, painted in raster order
// tree.svg    - recursive binary tree
// profile.svg - 1D midpoint displacement skyline

use fractals::{
    FaceStyle, Point2, ProfileParams, TerrainConfig, TreeParams, profile, terrain, tree,
    utils::css_rgb,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;

const SIZE: f64 = 800.0;

fn svg(body: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{0}\" \
         viewBox=\"0 0 {0} {0}\"><rect width=\"100%\" height=\"100%\" fill=\"black\"/>{1}</svg>\n",
        SIZE, body
    )
}

fn points_attr(points: &[Point2], dx: f64, dy: f64) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x + dx, p.y + dy))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let mut rng = SmallRng::seed_from_u64(2025);

    // Terrain, centred on the canvas
    let config = TerrainConfig::default().with_angles(-50.0, 0.0, 30.0);
    let elevations = terrain::generate(&config, &mut rng)?;
    let mut body = String::new();
    for face in terrain::faces(&config, &elevations)? {
        let color = css_rgb(face.color);
        let fill = match face.style {
            FaceStyle::Fill => color.as_str(),
            FaceStyle::Mesh => "none",
        };
        write!(
            body,
            "<polygon points=\"{}\" fill=\"{}\" stroke=\"{}\"/>",
            points_attr(&face.outline(), SIZE / 2.0, SIZE / 2.0),
            fill,
            color
        )?;
    }
    fs::write("terrain.svg", svg(&body))?;
    println!("Saved terrain mesh to terrain.svg");

    // Tree
    let mut body = String::new();
    for s in tree::branches(&TreeParams::new(SIZE, SIZE, 10))? {
        write!(
            body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"white\"/>",
            s.from.x, s.from.y, s.to.x, s.to.y
        )?;
    }
    fs::write("tree.svg", svg(&body))?;
    println!("Saved tree to tree.svg");

    // Skyline
    let points = profile::generate(&ProfileParams::new(128, 120.0, 0.55), &mut rng)?;
    let line = profile::polyline(&points, SIZE, SIZE);
    let body = format!(
        "<polyline points=\"{}\" fill=\"none\" stroke=\"white\"/>",
        points_attr(&line, 0.0, 0.0)
    );
    fs::write("profile.svg", svg(&body))?;
    println!("Saved profile to profile.svg");
    Ok(())
}
