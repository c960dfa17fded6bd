use fractals::{
    ColorMap, Fractal, FractalParameters, PlasmaParams, ProfileParams, Render, TerrainConfig,
    TreeParams, Window, escape, flatten2, profile, terrain, utils::css_rgb,
};
use image::Rgba;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn mandelbrot_field_to_pixels() {
    // Bring a small Mandelbrot view all the way to an RGBA buffer
    let params = FractalParameters::mandelbrot()
        .with_size(40, 30)
        .with_window(Window::new(-2.0, 1.0, -1.5, 1.5))
        .with_iterations(24)
        .with_color(ColorMap {
            fill: 2.0,
            ..ColorMap::default()
        });
    let mut rng = SmallRng::seed_from_u64(1);
    let img = Fractal::Mandelbrot(params)
        .rasterize(&mut rng)
        .unwrap()
        .expect("escape-time families rasterize");
    assert_eq!(img.dimensions(), (40, 30));

    // pixel (20, 15) maps to (-0.5, 0): inside the set, painted as fill
    assert_eq!(escape::pixel_to_plane(&params, 20, 15), (-0.5, 0.0));
    assert_eq!(*img.get_pixel(20, 15), Rgba([0, 0, 0, 255]));
    // the far corner escapes at once and is tinted with level 0 = black
    assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    // every pixel was written
    assert!(img.pixels().all(|p| p[3] == 255));
}

#[test]
fn rerender_replaces_field() {
    let fractal = Fractal::julia(-0.8, 0.156);
    let small = match fractal {
        Fractal::Julia(p) => Fractal::Julia(p.with_size(20, 20)),
        _ => unreachable!(),
    };
    let mut rng = SmallRng::seed_from_u64(3);
    let first = small.render(&mut rng).unwrap();
    let second = small.render(&mut rng).unwrap();
    assert_eq!(first, second);
    if let Render::Field(field) = first {
        assert_eq!(flatten2(&field).len(), 400);
    } else {
        panic!("julia should render a field");
    }
}

#[test]
fn plasma_rasterizes_with_tint() {
    let fractal = Fractal::Plasma {
        params: PlasmaParams::new(17, 9, 0.7),
        color: ColorMap::rgb(255.0, 0.0, 0.0, 13.0),
    };
    let mut rng = SmallRng::seed_from_u64(99);
    let img = fractal.rasterize(&mut rng).unwrap().unwrap();
    assert_eq!(img.dimensions(), (17, 9));
    for p in img.pixels() {
        assert_eq!(p[1], 0);
        assert_eq!(p[2], 0);
        assert_eq!(p[3], 255);
    }
}

#[test]
fn profile_feeds_polyline() {
    let mut rng = SmallRng::seed_from_u64(8);
    let params = ProfileParams::new(64, 40.0, 0.5);
    let points = match Fractal::Terrain1D(params).render(&mut rng).unwrap() {
        Render::Profile(points) => points,
        other => panic!("unexpected render {:?}", other),
    };
    assert_eq!(points[0], 0.0);
    assert_eq!(points[64], 0.0);
    let line = profile::polyline(&points, 640.0, 200.0);
    assert_eq!(line.len(), 65);
    assert_eq!(line[64].x, 640.0);
}

#[test]
fn tree_segments_stay_connected() {
    let mut rng = SmallRng::seed_from_u64(0);
    let segments = match Fractal::Tree(TreeParams::new(300.0, 300.0, 6))
        .render(&mut rng)
        .unwrap()
    {
        Render::Segments(s) => s,
        other => panic!("unexpected render {:?}", other),
    };
    // every non-trunk segment starts at the end of some segment one level up
    for s in &segments[1..] {
        assert!(
            segments
                .iter()
                .any(|parent| parent.depth == s.depth + 1 && parent.to == s.from)
        );
    }
}

#[test]
fn terrain_scene_end_to_end() {
    let config = TerrainConfig {
        detail: 16,
        ..TerrainConfig::default()
    }
    .with_angles(-35.0, 0.0, 20.0);
    let mut rng = SmallRng::seed_from_u64(2025);
    let elevations = terrain::generate(&config, &mut rng).unwrap();
    let mesh = terrain::faces(&config, &elevations).unwrap();
    assert_eq!(mesh.len(), 15 * 15);
    for face in &mesh {
        let css = css_rgb(face.color);
        assert!(css.starts_with("rgb("));
        assert!(face.p2d.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}
