//! Configuration types for grid generation and the step solver.

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec;

/// Which constraint families a grid is generated with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    /// Left and lower neighbor edges.
    pub structural: bool,
    /// Both diagonals of every lattice cell.
    pub shear: bool,
}

impl Topology {
    /// Structural edges only.
    pub const STRUCTURAL: Topology = Topology { structural: true, shear: false };
    /// Structural and shear edges.
    pub const STRUCTURAL_AND_SHEAR: Topology = Topology { structural: true, shear: true };
}

impl Default for Topology {
    fn default() -> Self {
        Topology::STRUCTURAL
    }
}

/// Generation parameters for a cloth grid.
///
/// Kept by the cloth so [`crate::Cloth::regenerate`] can rebuild the same
/// shape.
///
/// ```
/// use weft::config::{GridConfig, Topology};
/// use weft::vec::Vec3;
///
/// let grid = GridConfig::new(8, 6, 0.25f32, Vec3::new(0.0, 2.0, 0.0))
///     .with_topology(Topology::STRUCTURAL_AND_SHEAR);
/// assert_eq!(grid.particle_count(), 48);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig<V: Vec> {
    /// Particles per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Distance between lattice neighbors.
    pub spacing: V::Scalar,
    /// Position of particle `(0, 0)`.
    pub origin: V,
    /// Constraint families to generate. Default: structural only.
    pub topology: Topology,
}

impl<V: Vec> GridConfig<V> {
    pub fn new(width: usize, height: usize, spacing: V::Scalar, origin: V) -> Self {
        GridConfig {
            width,
            height,
            spacing,
            origin,
            topology: Topology::default(),
        }
    }

    /// Set the constraint topology.
    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn particle_count(&self) -> usize {
        self.width * self.height
    }

    /// Check dimensions and spacing. A negative spacing is fine: the lattice
    /// is laid out toward the negative axes.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.width == 0 || self.height == 0 {
            return Err(ClothError::InvalidGridDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.spacing.is_finite() {
            return Err(ClothError::InvalidSpacing);
        }
        Ok(())
    }
}

/// Configuration for integration and relaxation.
///
/// # Builder Pattern
/// ```
/// use weft::config::SolverConfig;
/// use weft::vec::Vec3;
///
/// let config: SolverConfig<Vec3<f32>> = SolverConfig::new()
///     .with_iterations(8)
///     .with_gravity(Vec3::new(0.0, -9.8, 0.0))
///     .with_damping(0.01)
///     .with_tear_distance(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig<V: Vec> {
    /// Relaxation passes per step. Default: 3.
    pub iterations: usize,
    /// Constant acceleration applied to free particles. Default: zero.
    pub gravity: V,
    /// Share of implicit velocity discarded each step, in [0, 1].
    /// 0 keeps all of it. Default: 0.01.
    pub damping: V::Scalar,
    /// Constraints stretched beyond this length tear. `None` disables
    /// tearing. Default: `None`.
    pub tear_distance: Option<V::Scalar>,
}

impl<V: Vec> SolverConfig<V> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            iterations: 3,
            gravity: V::zero(),
            damping: V::Scalar::from_f32(0.01),
            tear_distance: None,
        }
    }

    /// Set the number of relaxation passes.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: V::Scalar) -> Self {
        self.damping = damping;
        self
    }

    /// Enable tearing at the given stretch distance.
    pub fn with_tear_distance(mut self, tear_distance: V::Scalar) -> Self {
        self.tear_distance = Some(tear_distance);
        self
    }

    /// Disable tearing.
    pub fn without_tearing(mut self) -> Self {
        self.tear_distance = None;
        self
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        if self.iterations == 0 {
            return Err(ClothError::InvalidIterations);
        }
        if !self.damping.within(V::Scalar::zero(), V::Scalar::one()) {
            return Err(ClothError::InvalidDamping);
        }
        if let Some(tear) = self.tear_distance {
            // NaN fails the comparison and is rejected too.
            if !(tear >= V::Scalar::zero()) {
                return Err(ClothError::InvalidTearDistance);
            }
        }
        Ok(())
    }
}

impl<V: Vec> Default for SolverConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}
