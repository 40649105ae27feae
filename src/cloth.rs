//! Verlet cloth: a particle lattice, its constraints and its anchors.

use crate::adjacency::AdjacencyIndex;
use crate::anchor::{AnchorDriver, AnchorHandle, AnchorSet};
use crate::config::{GridConfig, SolverConfig};
use crate::constraint::DistanceConstraint;
use crate::error::ClothError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::{Particle, ParticleStore};
use crate::solver::ConstraintSet;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// One live constraint as seen by a renderer or stress visualizer.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintView<V: Vec> {
    pub a: usize,
    pub b: usize,
    pub position_a: V,
    pub position_b: V,
    pub rest_length: V::Scalar,
    /// Current distance between the endpoints.
    pub length: V::Scalar,
}

impl<V: Vec> ConstraintView<V> {
    /// `length / rest_length`; 1 at rest. Zero-length rests report 1.
    pub fn stretch(&self) -> V::Scalar {
        if self.rest_length == V::Scalar::zero() {
            return V::Scalar::one();
        }
        self.length / self.rest_length
    }
}

/// A cloth simulation instance.
///
/// Owns its particles, constraints and anchor bindings; nothing is shared
/// between instances.
///
/// ```
/// use weft::{Cloth, GridConfig, NoOpStepObserver, SolverConfig, Vec3};
///
/// let grid = GridConfig::new(10, 10, 0.1f32, Vec3::new(0.0, 0.0, 0.0));
/// let solver = SolverConfig::new()
///     .with_gravity(Vec3::new(0.0, -9.8, 0.0))
///     .with_tear_distance(0.5);
/// let mut cloth = Cloth::new(grid, solver).unwrap();
/// cloth.bind_row(9).unwrap();
///
/// for _ in 0..60 {
///     cloth.step(1.0 / 60.0, &(), &mut NoOpStepObserver);
/// }
/// assert_eq!(cloth.particle_count(), 100);
/// ```
#[derive(Clone, Debug)]
pub struct Cloth<V: Vec> {
    grid: GridConfig<V>,
    solver: SolverConfig<V>,
    particles: ParticleStore<V>,
    constraints: ConstraintSet<V>,
    anchors: AnchorSet,
}

impl<V: Vec> Cloth<V> {
    /// Generate the lattice and its constraints.
    pub fn new(grid: GridConfig<V>, solver: SolverConfig<V>) -> Result<Self, ClothError> {
        solver.validate()?;
        let particles = ParticleStore::from_config(&grid)?;
        let constraints = ConstraintSet::from_grid(&particles, grid.topology);
        log::debug!(
            "cloth generated: {}x{} particles, {} constraints",
            grid.width,
            grid.height,
            constraints.len()
        );
        Ok(Cloth {
            grid,
            solver,
            particles,
            constraints,
            anchors: AnchorSet::new(),
        })
    }

    /// Advance one fixed step of size `dt`.
    ///
    /// Anchors are applied first, then free particles are integrated, then
    /// the constraints are relaxed `iterations` times. Returns the number of
    /// constraints that tore during the step.
    pub fn step<D, O>(&mut self, dt: V::Scalar, drivers: &D, observer: &mut O) -> usize
    where
        D: AnchorDriver<V> + ?Sized,
        O: StepObserver<V>,
    {
        let applied = self.anchors.apply_all(&mut self.particles, drivers);
        observer.on_anchors_applied(applied);

        self.particles.integrate(dt, self.solver.gravity, self.solver.damping);
        observer.on_integrate();

        let torn = self.constraints.relax(
            self.particles.as_mut_slice(),
            self.solver.iterations,
            self.solver.tear_distance,
            observer,
        );
        observer.on_step_complete();
        torn
    }

    /// Run relaxation alone, without anchors or integration.
    pub fn relax<O: StepObserver<V>>(&mut self, iterations: usize, observer: &mut O) -> usize {
        self.constraints.relax(
            self.particles.as_mut_slice(),
            iterations,
            self.solver.tear_distance,
            observer,
        )
    }

    /// Throw away the current state and rebuild from the generation
    /// parameters. Anchor bindings survive and re-pin their particles.
    pub fn regenerate(&mut self) -> Result<(), ClothError> {
        let mut particles = ParticleStore::from_config(&self.grid)?;
        let constraints = ConstraintSet::from_grid(&particles, self.grid.topology);
        self.anchors.repin(&mut particles);
        log::debug!(
            "cloth regenerated: {} constraints ({} torn before)",
            constraints.len(),
            self.constraints.torn_count()
        );
        self.particles = particles;
        self.constraints = constraints;
        Ok(())
    }

    /// Pin particle `index`; drivers look its position up by the returned
    /// handle.
    pub fn bind_anchor(&mut self, index: usize) -> Result<AnchorHandle, ClothError> {
        self.anchors.bind(&mut self.particles, index)
    }

    /// Bind every particle of lattice row `row`.
    pub fn bind_row(&mut self, row: usize) -> Result<AllocVec<AnchorHandle>, ClothError> {
        self.anchors.bind_row(&mut self.particles, row)
    }

    /// Move one anchor right away, outside a step.
    pub fn apply_anchor(&mut self, handle: AnchorHandle, position: V) {
        self.anchors.apply(&mut self.particles, handle, position);
    }

    /// Pin or free a particle. Idempotent.
    pub fn set_pinned(&mut self, index: usize, pinned: bool) -> Result<(), ClothError> {
        self.particles.check(index)?;
        self.particles.get_mut(index).pinned = pinned;
        Ok(())
    }

    /// Replace the solver parameters.
    pub fn set_solver(&mut self, solver: SolverConfig<V>) -> Result<(), ClothError> {
        solver.validate()?;
        self.solver = solver;
        Ok(())
    }

    /// Index of lattice coordinate `(x, y)`.
    pub fn index(&self, x: usize, y: usize) -> usize {
        self.particles.index_of(x, y)
    }

    pub fn particle(&self, index: usize) -> &Particle<V> {
        self.particles.get(index)
    }

    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<V> {
        self.particles.get_mut(index)
    }

    pub fn particles(&self) -> core::slice::Iter<'_, Particle<V>> {
        self.particles.iter()
    }

    pub fn positions(&self) -> AllocVec<V> {
        self.particles.positions()
    }

    pub fn position_at(&self, x: usize, y: usize) -> V {
        self.particles.get(self.index(x, y)).pos
    }

    /// Live constraints with their endpoint positions.
    pub fn constraints(&self) -> impl Iterator<Item = ConstraintView<V>> + '_ {
        self.constraints.iter().map(move |c| self.view(c))
    }

    fn view(&self, c: &DistanceConstraint<V>) -> ConstraintView<V> {
        let position_a = self.particles.get(c.a).pos;
        let position_b = self.particles.get(c.b).pos;
        ConstraintView {
            a: c.a,
            b: c.b,
            position_a,
            position_b,
            rest_length: c.rest_length,
            length: position_a.distance(position_b),
        }
    }

    /// Incident constraints per particle, for the live set as it is now.
    pub fn adjacency(&self) -> AdjacencyIndex {
        AdjacencyIndex::build(self.particles.len(), self.constraints.as_slice())
    }

    pub fn anchors(&self) -> &AnchorSet { &self.anchors }
    pub fn constraint_set(&self) -> &ConstraintSet<V> { &self.constraints }
    pub fn grid_config(&self) -> &GridConfig<V> { &self.grid }
    pub fn solver_config(&self) -> &SolverConfig<V> { &self.solver }
    pub fn width(&self) -> usize { self.grid.width }
    pub fn height(&self) -> usize { self.grid.height }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
    pub fn torn_count(&self) -> usize { self.constraints.torn_count() }
}
