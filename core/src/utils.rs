use palette::Srgb;

// 2D scalar field: column-major Vec<Vec<f64>> of size width×height
// access as `field[x][y]`.
pub type Field2D = Vec<Vec<f64>>;

// Normalized escape counts in [0, 1]
pub type IterationField = Field2D;

// Midpoint displacement output in [0, 1]
pub type HeightField = Field2D;

// Allocate a zeroed width×height field
pub fn new_field(width: usize, height: usize) -> Field2D {
    vec![vec![0.0; height]; width]
}

// Saturating clamp into [min, max].
// Every component clamps through here: counts, displacement, channels.
#[inline]
pub fn bind(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

// Clamp to [0, 255] and round into a color channel
#[inline]
pub fn channel(value: f64) -> u8 {
    bind(value, 0.0, 255.0).round() as u8
}

// flatten a column-major field into a row-major Vec<f64>
// For converting to an image buffer or handing to a surface that wants rows
pub fn flatten2(field: &Field2D) -> Vec<f64> {
    let width = field.len();
    let height = field.first().map_or(0, Vec::len);
    let mut flat = Vec::with_capacity(width * height);
    for y in 0..height {
        for column in field {
            flat.push(column[y]);
        }
    }
    flat
}

// CSS style string for a fill color, e.g. `rgb(0,0,152)`
pub fn css_rgb(color: Srgb<u8>) -> String {
    format!("rgb({},{},{})", color.red, color.green, color.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_saturates_both_ends() {
        assert_eq!(bind(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(bind(1.5, 0.0, 1.0), 1.0);
        assert_eq!(bind(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn channel_rounds_and_clamps() {
        assert_eq!(channel(-3.0), 0);
        assert_eq!(channel(300.0), 255);
        assert_eq!(channel(12.6), 13);
    }

    #[test]
    fn flatten_is_row_major() {
        // 2 columns, 3 rows
        let field = vec![vec![0.0, 2.0, 4.0], vec![1.0, 3.0, 5.0]];
        assert_eq!(flatten2(&field), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn css_format() {
        assert_eq!(css_rgb(Srgb::new(0, 0, 152)), "rgb(0,0,152)");
    }
}
