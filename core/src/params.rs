use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Rectangle of the complex plane sampled by the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Window {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Window centred on `(shift_x, shift_y)` whose half-extent is
    /// `2 - inset` on each axis. An inset of 0.5 gives a 3×3 window.
    pub fn from_shift(shift_x: f64, shift_y: f64, inset_x: f64, inset_y: f64) -> Self {
        Self {
            xmin: shift_x + inset_x - 2.0,
            xmax: shift_x - inset_x + 2.0,
            ymin: shift_y + inset_y - 2.0,
            ymax: shift_y - inset_y + 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    // Move the window without changing its extent
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.xmin += dx;
        self.xmax += dx;
        self.ymin += dy;
        self.ymax += dy;
    }

    // Shrink each side inwards by `dx`/`dy` (negative grows the window)
    pub fn inset(&mut self, dx: f64, dy: f64) {
        self.xmin += dx;
        self.xmax -= dx;
        self.ymin += dy;
        self.ymax -= dy;
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [self.xmin, self.xmax, self.ymin, self.ymax]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.xmin >= self.xmax || self.ymin >= self.ymax {
            return Err(ConfigError::InvalidWindow {
                xmin: self.xmin,
                xmax: self.xmax,
                ymin: self.ymin,
                ymax: self.ymax,
            });
        }
        Ok(())
    }
}

impl Default for Window {
    // Shifted half a unit left so the main cardioid sits in the middle
    fn default() -> Self {
        Self::from_shift(-0.5, 0.0, 0.5, 0.5)
    }
}

/// Coefficients of the generalized quadratic map
///
/// ```text
/// z = a·x² − b·y² + j·x0 + j1
/// y = 2c·x·y + j·y0 + j2
/// x = d·z
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub j: f64,
    pub j1: f64,
    pub j2: f64,
}

impl Coefficients {
    pub const MANDELBROT: Self = Self {
        a: 1.0,
        b: 1.0,
        c: 1.0,
        d: 1.0,
        j: 1.0,
        j1: 0.0,
        j2: 0.0,
    };

    pub const TRICORN: Self = Self {
        d: -1.0,
        ..Self::MANDELBROT
    };

    // Julia sets drop the per-pixel term and add a fixed seed instead
    pub fn julia(j1: f64, j2: f64) -> Self {
        Self {
            j: 0.0,
            j1,
            j2,
            ..Self::MANDELBROT
        }
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::MANDELBROT
    }
}

/// How normalized field values turn into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorMap {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub gamma: f64,
    // Iteration levels to skip: positive paints them black, negative leaves
    // them transparent.
    pub crop: f64,
    // Levels below this are tinted with (red, green, blue).
    // `None` means every level up to `max_iterations - fill`.
    pub colored: Option<f64>,
    // Levels above `max_iterations - fill` are painted black.
    pub fill: f64,
}

impl ColorMap {
    pub fn rgb(red: f64, green: f64, blue: f64, gamma: f64) -> Self {
        Self {
            red,
            green,
            blue,
            gamma,
            ..Self::default()
        }
    }

    // Resolved tint threshold for a given iteration cap
    pub fn colored_below(&self, max_iterations: f64) -> f64 {
        self.colored.unwrap_or(max_iterations - self.fill)
    }

    pub fn validate(&self) -> Result<()> {
        if self.gamma == 0.0 {
            return Err(ConfigError::ZeroGamma);
        }
        Ok(())
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self {
            red: 255.0,
            green: 255.0,
            blue: 255.0,
            gamma: 13.0,
            crop: 0.0,
            colored: None,
            fill: 0.0,
        }
    }
}

/// Everything one escape-time render needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalParameters {
    pub width: usize,
    pub height: usize,
    pub window: Window,
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub smoothing: bool,
    pub coefficients: Coefficients,
    pub color: ColorMap,
}

impl FractalParameters {
    pub fn mandelbrot() -> Self {
        Self::default()
    }

    pub fn tricorn() -> Self {
        Self {
            coefficients: Coefficients::TRICORN,
            ..Self::default()
        }
    }

    // Julia sets are framed on the origin
    pub fn julia(j1: f64, j2: f64) -> Self {
        Self {
            window: Window::from_shift(0.0, 0.0, 0.5, 0.5),
            coefficients: Coefficients::julia(j1, j2),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    pub fn with_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_color(mut self, color: ColorMap) -> Self {
        self.color = color;
        self
    }

    pub fn radius_sq(&self) -> f64 {
        self.escape_radius * self.escape_radius
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyField {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.escape_radius.is_finite() && self.escape_radius > 0.0) {
            return Err(ConfigError::InvalidEscapeRadius(self.escape_radius));
        }
        self.window.validate()?;
        self.color.validate()
    }
}

impl Default for FractalParameters {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            window: Window::default(),
            max_iterations: 32,
            escape_radius: 2.0,
            smoothing: false,
            coefficients: Coefficients::MANDELBROT,
            color: ColorMap::default(),
        }
    }
}
