//! Step observer trait for watching a cloth step phase by phase.

use crate::constraint::DistanceConstraint;
use crate::vec::Vec;

/// Hooks invoked while a cloth steps.
///
/// Implement this trait for debugging, visualization, or profiling. All
/// methods have default no-op implementations.
pub trait StepObserver<V: Vec> {
    /// Called after every anchor binding has been applied.
    fn on_anchors_applied(&mut self, _applied: usize) {}

    /// Called after all free particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a constraint tears, after it has been removed from the
    /// active set.
    fn on_tear(&mut self, _constraint: &DistanceConstraint<V>) {}

    /// Called after each relaxation pass.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<V: Vec> StepObserver<V> for NoOpStepObserver {}
