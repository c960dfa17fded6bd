use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::face::Point2;

/// One stroke of the tree. `depth` counts down to 1 at the leaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point2,
    pub to: Point2,
    pub depth: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeParams {
    pub width: f64,
    pub height: f64,
    pub depth: u32,
    pub spread: f64, // degrees each child turns away from its parent
    pub heading: f64, // degrees, -90 points up the surface
    // Length multiplier; `None` derives it from the surface width and depth
    pub unit: Option<f64>,
}

impl TreeParams {
    pub fn new(width: f64, height: f64, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
            spread: 20.0,
            heading: -90.0,
            unit: None,
        }
    }

    pub fn unit_length(&self) -> f64 {
        self.unit
            .unwrap_or(1.0 + self.width / 100.0 - self.depth as f64 / 10.0)
    }

    pub fn validate(&self) -> Result<()> {
        let unit = self.unit_length();
        if !(unit.is_finite() && unit > 0.0) {
            return Err(ConfigError::InvalidBranchLength(unit));
        }
        Ok(())
    }
}

impl Default for TreeParams {
    fn default() -> Self {
        Self::new(200.0, 200.0, 12)
    }
}

// Binary tree rooted at the bottom centre of the surface.
// Returns the strokes in depth-first order (trunk first, left before right);
// a tree of depth n has 2^n - 1 segments.
pub fn branches(params: &TreeParams) -> Result<Vec<Segment>> {
    params.validate()?;
    let capacity = 1usize
        .checked_shl(params.depth)
        .map_or(0, |n| n.saturating_sub(1));
    let mut out = Vec::with_capacity(capacity.min(1 << 16));
    let root = Point2::new(params.width / 2.0, params.height);
    grow(
        &mut out,
        root,
        params.heading,
        params.depth,
        params.spread,
        params.unit_length(),
    );
    log::debug!("tree of depth {} -> {} segments", params.depth, out.len());
    Ok(out)
}

fn grow(out: &mut Vec<Segment>, from: Point2, heading: f64, depth: u32, spread: f64, unit: f64) {
    if depth == 0 {
        return;
    }
    let length = depth as f64 * unit;
    let (sin, cos) = heading.to_radians().sin_cos();
    let to = Point2::new(from.x + cos * length, from.y + sin * length);
    out.push(Segment { from, to, depth });
    grow(out, to, heading - spread, depth - 1, spread, unit);
    grow(out, to, heading + spread, depth - 1, spread, unit);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_count_doubles_per_level() {
        for depth in 0..8 {
            let tree = branches(&TreeParams::new(400.0, 300.0, depth)).unwrap();
            assert_eq!(tree.len(), (1usize << depth) - 1);
        }
    }

    #[test]
    fn trunk_points_up_from_bottom_centre() {
        let params = TreeParams {
            unit: Some(2.0),
            ..TreeParams::new(200.0, 100.0, 3)
        };
        let tree = branches(&params).unwrap();
        let trunk = tree[0];
        assert_eq!(trunk.from, Point2::new(100.0, 100.0));
        assert!((trunk.to.x - 100.0).abs() < 1e-9);
        assert!((trunk.to.y - 94.0).abs() < 1e-9);
        assert_eq!(trunk.depth, 3);
    }

    #[test]
    fn children_start_where_parent_ends() {
        let tree = branches(&TreeParams::new(300.0, 300.0, 4)).unwrap();
        assert_eq!(tree[1].from, tree[0].to);
        assert_eq!(tree[1].depth, 3);
        // left subtree of the trunk has 2^3 - 1 segments, then the right child
        assert_eq!(tree[8].from, tree[0].to);
    }

    #[test]
    fn children_mirror_each_other() {
        let tree = branches(&TreeParams::new(300.0, 300.0, 2)).unwrap();
        let trunk = tree[0];
        let (left, right) = (tree[1], tree[2]);
        let dl = left.to.x - trunk.to.x;
        let dr = right.to.x - trunk.to.x;
        assert!((dl + dr).abs() < 1e-9);
        assert!((left.to.y - right.to.y).abs() < 1e-9);
    }

    #[test]
    fn non_positive_unit_rejected() {
        // 1 + 100/100 - 30/10 = -1
        let params = TreeParams::new(100.0, 100.0, 30);
        assert_eq!(
            branches(&params),
            Err(ConfigError::InvalidBranchLength(-1.0))
        );
    }
}
