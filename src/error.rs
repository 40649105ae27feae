//! Error types for cloth construction and configuration.

use core::fmt;

/// Errors raised while building a cloth or binding anchors.
///
/// Nothing that happens inside a step is an error: degenerate constraints are
/// skipped and tearing is an ordinary state change.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid width and height must both be at least 1.
    InvalidGridDimensions { width: usize, height: usize },
    /// Spacing must be finite and non-negative.
    InvalidSpacing,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// Lattice row is out of bounds.
    RowOutOfBounds { row: usize, rows: usize },
    /// At least one relaxation iteration is required.
    InvalidIterations,
    /// Damping must be in [0, 1].
    InvalidDamping,
    /// Tear distance must be non-negative.
    InvalidTearDistance,
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions { width, height } => {
                write!(f, "grid must be at least 1x1 (got {}x{})", width, height)
            }
            ClothError::InvalidSpacing => write!(f, "spacing must be finite"),
            ClothError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            ClothError::RowOutOfBounds { row, rows } => {
                write!(f, "row {} out of bounds (rows: {})", row, rows)
            }
            ClothError::InvalidIterations => write!(f, "iterations must be at least 1"),
            ClothError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            ClothError::InvalidTearDistance => write!(f, "tear distance must be non-negative"),
        }
    }
}
