//! Verlet particles and the index-addressed store that owns them.

use crate::config::GridConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// A Verlet particle: position-based dynamics with implicit velocity.
///
/// Every particle has the same (unit) mass, so nothing but the pinned flag
/// changes how constraints move it.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<V: Vec> {
    pub pos: V,
    pub prev_pos: V,
    pub pinned: bool,
}

impl<V: Vec> Particle<V> {
    /// A free particle at rest.
    pub fn new(pos: V) -> Self {
        Particle { pos, prev_pos: pos, pinned: false }
    }

    /// A pinned particle at rest.
    pub fn pinned(pos: V) -> Self {
        Particle { pos, prev_pos: pos, pinned: true }
    }

    /// Advance one step of size `dt`.
    ///
    /// `damping` is the share of the implied displacement dropped before
    /// gravity is added. Pinned particles are left alone.
    pub fn integrate(&mut self, dt: V::Scalar, gravity: V, damping: V::Scalar) {
        if self.pinned {
            return;
        }
        let displacement = self.pos - self.prev_pos;
        let new_pos = self.pos
            + displacement.scale(V::Scalar::one() - damping)
            + gravity.scale(dt * dt);
        self.prev_pos = self.pos;
        self.pos = new_pos;
    }

    /// Place the particle at `pos` with no implied velocity.
    pub fn teleport(&mut self, pos: V) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    /// Displacement over the last step.
    pub fn velocity_raw(&self) -> V {
        self.pos - self.prev_pos
    }

    pub fn velocity(&self, dt: V::Scalar) -> V {
        if dt == V::Scalar::zero() {
            return V::zero();
        }
        self.velocity_raw().scale(V::Scalar::one() / dt)
    }
}

/// Fixed-size, row-major collection of particles.
///
/// Particle `(x, y)` lives at index `x + width * y`. Indexing outside
/// `[0, len)` panics; only indices produced by the grid builders are valid.
#[derive(Clone, Debug)]
pub struct ParticleStore<V: Vec> {
    particles: AllocVec<Particle<V>>,
    width: usize,
    height: usize,
}

impl<V: Vec> ParticleStore<V> {
    /// Lay out a `width × height` lattice starting at `origin`, spaced
    /// `spacing` apart along the first two axes.
    pub fn create(
        width: usize,
        height: usize,
        spacing: V::Scalar,
        origin: V,
    ) -> Result<Self, ClothError> {
        if width == 0 || height == 0 {
            return Err(ClothError::InvalidGridDimensions { width, height });
        }
        let mut particles = AllocVec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let offset = V::planar(
                    V::Scalar::from_usize(x) * spacing,
                    V::Scalar::from_usize(y) * spacing,
                );
                particles.push(Particle::new(origin + offset));
            }
        }
        Ok(ParticleStore { particles, width, height })
    }

    /// Build from generation parameters after validating them.
    pub fn from_config(config: &GridConfig<V>) -> Result<Self, ClothError> {
        config.validate()?;
        Self::create(config.width, config.height, config.spacing, config.origin)
    }

    pub fn index_of(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height, "({}, {}) outside lattice", x, y);
        x + self.width * y
    }

    pub fn get(&self, index: usize) -> &Particle<V> {
        &self.particles[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut Particle<V> {
        &mut self.particles[index]
    }

    pub fn set(&mut self, index: usize, particle: Particle<V>) {
        self.particles[index] = particle;
    }

    /// Bounds check for caller-supplied indices.
    pub fn check(&self, index: usize) -> Result<(), ClothError> {
        if index < self.particles.len() {
            Ok(())
        } else {
            Err(ClothError::ParticleOutOfBounds { index, count: self.particles.len() })
        }
    }

    /// Run one Verlet step over every free particle.
    pub fn integrate(&mut self, dt: V::Scalar, gravity: V, damping: V::Scalar) {
        for p in self.particles.iter_mut() {
            p.integrate(dt, gravity, damping);
        }
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Particle<V>> {
        self.particles.iter()
    }

    pub fn positions(&self) -> AllocVec<V> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn as_slice(&self) -> &[Particle<V>] {
        &self.particles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle<V>] {
        &mut self.particles
    }

    pub fn len(&self) -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }
    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
}
