//! Iterative relaxation over the live constraint set, with tearing.

use crate::config::Topology;
use crate::constraint::{self, DistanceConstraint, Resolution};
use crate::observer::StepObserver;
use crate::particle::{Particle, ParticleStore};
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// The active constraints of one cloth.
///
/// Only ever shrinks: a torn constraint is removed for good, and the set is
/// rebuilt from scratch when the grid is regenerated.
#[derive(Clone, Debug)]
pub struct ConstraintSet<V: Vec> {
    constraints: AllocVec<DistanceConstraint<V>>,
    torn: usize,
}

impl<V: Vec> ConstraintSet<V> {
    pub fn new(constraints: AllocVec<DistanceConstraint<V>>) -> Self {
        ConstraintSet { constraints, torn: 0 }
    }

    /// Constraints for the lattice held by `store`, with rest lengths measured
    /// from its current positions.
    pub fn from_grid(store: &ParticleStore<V>, topology: Topology) -> Self {
        Self::new(constraint::build(store.width(), store.height(), store.as_slice(), topology))
    }

    /// One Gauss-Seidel pass: every live constraint is solved exactly once,
    /// in set order.
    ///
    /// A torn constraint is swapped with the last one and the set shrinks;
    /// the cursor stays put so the swapped-in constraint is solved next.
    /// Returns the number of constraints torn in this pass.
    pub fn relax_pass<O: StepObserver<V>>(
        &mut self,
        particles: &mut [Particle<V>],
        tear_distance: Option<V::Scalar>,
        observer: &mut O,
    ) -> usize {
        let mut torn = 0;
        let mut i = 0;
        while i < self.constraints.len() {
            match self.constraints[i].solve(particles, tear_distance) {
                Resolution::Torn => {
                    let c = self.constraints.swap_remove(i);
                    log::trace!(
                        "constraint {}-{} tore (rest length {:?})",
                        c.a,
                        c.b,
                        c.rest_length
                    );
                    observer.on_tear(&c);
                    torn += 1;
                }
                Resolution::Corrected | Resolution::Degenerate => i += 1,
            }
        }
        self.torn += torn;
        torn
    }

    /// Run `iterations` passes. Returns the number of constraints torn.
    pub fn relax<O: StepObserver<V>>(
        &mut self,
        particles: &mut [Particle<V>],
        iterations: usize,
        tear_distance: Option<V::Scalar>,
        observer: &mut O,
    ) -> usize {
        let mut torn = 0;
        for i in 0..iterations {
            torn += self.relax_pass(particles, tear_distance, observer);
            observer.on_constraint_iteration(i);
        }
        torn
    }

    pub fn get(&self, index: usize) -> &DistanceConstraint<V> {
        &self.constraints[index]
    }

    pub fn iter(&self) -> core::slice::Iter<'_, DistanceConstraint<V>> {
        self.constraints.iter()
    }

    pub fn as_slice(&self) -> &[DistanceConstraint<V>] {
        &self.constraints
    }

    pub fn len(&self) -> usize { self.constraints.len() }
    pub fn is_empty(&self) -> bool { self.constraints.is_empty() }

    /// Constraints torn since this set was built.
    pub fn torn_count(&self) -> usize { self.torn }
}
