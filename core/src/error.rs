use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

// Rejected parameter sets. Raised before any work starts so a bad
// configuration never produces a silently empty field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("iteration cap must be at least 1")]
    ZeroIterations,

    #[error("field size must be non-zero, got {width}x{height}")]
    EmptyField { width: usize, height: usize },

    #[error("window is empty or inverted: x [{xmin}, {xmax}], y [{ymin}, {ymax}]")]
    InvalidWindow {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },

    #[error("escape radius must be positive and finite, got {0}")]
    InvalidEscapeRadius(f64),

    #[error("gamma must be non-zero")]
    ZeroGamma,

    #[error("terrain detail must be at least 2, got {0}")]
    TerrainTooSmall(usize),

    #[error("profile needs at least one segment")]
    EmptyProfile,

    #[error("branch unit length must be positive, got {0}")]
    InvalidBranchLength(f64),

    #[error("rotation axis must be 0, 1 or 2, got {0}")]
    InvalidAxis(usize),
}
