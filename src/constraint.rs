//! Distance constraints between particle pairs and the grid topology builders.

use crate::config::Topology;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// A stick holding two particles at the distance they were created at.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<V: Vec> {
    pub a: usize,
    pub b: usize,
    pub rest_length: V::Scalar,
}

/// What a single correction did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Positions were pulled toward the rest length.
    Corrected,
    /// Endpoints coincide, so there is no direction to correct along.
    Degenerate,
    /// Stretched past the tear distance; the caller must drop the constraint.
    Torn,
}

impl<V: Vec> DistanceConstraint<V> {
    pub fn new(a: usize, b: usize, rest_length: V::Scalar) -> Self {
        debug_assert!(a != b, "constraint endpoints must differ");
        debug_assert!(rest_length >= V::Scalar::zero(), "rest length must be non-negative");
        DistanceConstraint { a, b, rest_length }
    }

    /// Rest length taken from the current particle positions.
    pub fn from_particles(a: usize, b: usize, particles: &[Particle<V>]) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        Self::new(a, b, rest_length)
    }

    pub fn length(&self, particles: &[Particle<V>]) -> V::Scalar {
        particles[self.a].pos.distance(particles[self.b].pos)
    }

    /// Pull both endpoints toward the rest length.
    ///
    /// A pinned endpoint never moves. With one endpoint pinned the other takes
    /// the whole correction; otherwise each takes half. Stretch strictly
    /// greater than `tear_distance` reports [`Resolution::Torn`] and leaves
    /// positions untouched.
    pub fn solve(
        &self,
        particles: &mut [Particle<V>],
        tear_distance: Option<V::Scalar>,
    ) -> Resolution {
        let offset = particles[self.a].pos - particles[self.b].pos;
        let distance = offset.length();

        if let Some(tear) = tear_distance {
            if distance > tear {
                return Resolution::Torn;
            }
        }
        if distance == V::Scalar::zero() {
            return Resolution::Degenerate;
        }

        let correction = (self.rest_length - distance) / distance;
        let movement = offset.scale(correction);

        let pinned_a = particles[self.a].pinned;
        let pinned_b = particles[self.b].pinned;
        let weight_a: V::Scalar = share(pinned_a, pinned_b);
        let weight_b: V::Scalar = share(pinned_b, pinned_a);

        if weight_a != V::Scalar::zero() {
            particles[self.a].pos = particles[self.a].pos + movement.scale(weight_a);
        }
        if weight_b != V::Scalar::zero() {
            particles[self.b].pos = particles[self.b].pos - movement.scale(weight_b);
        }
        Resolution::Corrected
    }
}

/// Share of a correction taken by one endpoint.
fn share<F: Float>(pinned: bool, other_pinned: bool) -> F {
    match (pinned, other_pinned) {
        (true, _) => F::zero(),
        (false, true) => F::one(),
        (false, false) => F::half(),
    }
}

/// Left and lower neighbor edges of a `width × height` lattice.
///
/// For every `(x, y)` this adds `(x, y)-(x-1, y)` when `x > 0` and
/// `(x, y)-(x, y-1)` when `y > 0`, so each edge appears once.
pub fn build_structural<V: Vec>(
    width: usize,
    height: usize,
    particles: &[Particle<V>],
) -> AllocVec<DistanceConstraint<V>> {
    build(width, height, particles, Topology::STRUCTURAL)
}

/// Both diagonals of every lattice cell.
pub fn build_shear<V: Vec>(
    width: usize,
    height: usize,
    particles: &[Particle<V>],
) -> AllocVec<DistanceConstraint<V>> {
    build(width, height, particles, Topology { structural: false, shear: true })
}

/// Generate the constraint families selected by `topology`.
///
/// Particles are visited row by row; for each one its structural edges come
/// before its shear edges. Rest lengths are measured from `particles`.
pub fn build<V: Vec>(
    width: usize,
    height: usize,
    particles: &[Particle<V>],
    topology: Topology,
) -> AllocVec<DistanceConstraint<V>> {
    debug_assert_eq!(particles.len(), width * height);
    let mut constraints = AllocVec::with_capacity(expected_count(width, height, topology));
    let idx = |x: usize, y: usize| x + width * y;

    for y in 0..height {
        for x in 0..width {
            if topology.structural {
                if x > 0 {
                    constraints.push(DistanceConstraint::from_particles(idx(x, y), idx(x - 1, y), particles));
                }
                if y > 0 {
                    constraints.push(DistanceConstraint::from_particles(idx(x, y), idx(x, y - 1), particles));
                }
            }
            if topology.shear && x > 0 && y > 0 {
                constraints.push(DistanceConstraint::from_particles(idx(x, y), idx(x - 1, y - 1), particles));
                constraints.push(DistanceConstraint::from_particles(idx(x, y - 1), idx(x - 1, y), particles));
            }
        }
    }

    constraints
}

/// Number of constraints [`build`] produces for a lattice.
pub fn expected_count(width: usize, height: usize, topology: Topology) -> usize {
    if width == 0 || height == 0 {
        return 0;
    }
    let mut count = 0;
    if topology.structural {
        count += width * (height - 1) + height * (width - 1);
    }
    if topology.shear {
        count += 2 * (width - 1) * (height - 1);
    }
    count
}
