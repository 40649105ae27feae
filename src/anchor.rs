//! Anchor bindings: externally driven particles.
//!
//! A binding pins one particle and, once per step, copies a position read from
//! an [`AnchorDriver`] into it. The driver is owned by the caller; the cloth
//! only reads from it.

use crate::error::ClothError;
use crate::particle::ParticleStore;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Identifies one binding. Handles are issued in bind order starting at 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorHandle(pub usize);

/// Source of anchor positions for one step.
///
/// Returning `None` means the driver has nothing for that handle this step;
/// the bound particle stays where it is.
pub trait AnchorDriver<V: Vec> {
    fn position(&self, handle: AnchorHandle) -> Option<V>;
}

/// No drivers: every anchor holds still.
impl<V: Vec> AnchorDriver<V> for () {
    fn position(&self, _handle: AnchorHandle) -> Option<V> {
        None
    }
}

/// One position per handle, in bind order.
impl<V: Vec> AnchorDriver<V> for [V] {
    fn position(&self, handle: AnchorHandle) -> Option<V> {
        self.get(handle.0).copied()
    }
}

impl<V: Vec, const N: usize> AnchorDriver<V> for [V; N] {
    fn position(&self, handle: AnchorHandle) -> Option<V> {
        self.get(handle.0).copied()
    }
}

impl<V: Vec> AnchorDriver<V> for AllocVec<V> {
    fn position(&self, handle: AnchorHandle) -> Option<V> {
        self.get(handle.0).copied()
    }
}

impl<V: Vec, F> AnchorDriver<V> for F
where
    F: Fn(AnchorHandle) -> Option<V>,
{
    fn position(&self, handle: AnchorHandle) -> Option<V> {
        self(handle)
    }
}

/// The particle indices driven from outside.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorSet {
    bindings: AllocVec<usize>,
}

impl AnchorSet {
    pub fn new() -> Self {
        AnchorSet { bindings: AllocVec::new() }
    }

    /// Bind `index` and pin it for the lifetime of the cloth.
    ///
    /// Several bindings may target the same particle; they are applied in
    /// handle order, so the last one wins.
    pub fn bind<V: Vec>(
        &mut self,
        store: &mut ParticleStore<V>,
        index: usize,
    ) -> Result<AnchorHandle, ClothError> {
        store.check(index)?;
        store.get_mut(index).pinned = true;
        let handle = AnchorHandle(self.bindings.len());
        self.bindings.push(index);
        log::trace!("anchor {} bound to particle {}", handle.0, index);
        Ok(handle)
    }

    /// Bind every particle of lattice row `row`, left to right.
    pub fn bind_row<V: Vec>(
        &mut self,
        store: &mut ParticleStore<V>,
        row: usize,
    ) -> Result<AllocVec<AnchorHandle>, ClothError> {
        if row >= store.height() {
            return Err(ClothError::RowOutOfBounds { row, rows: store.height() });
        }
        (0..store.width())
            .map(|x| {
                let index = store.index_of(x, row);
                self.bind(store, index)
            })
            .collect()
    }

    /// Overwrite the bound particle's position and history with `position`.
    pub fn apply<V: Vec>(&self, store: &mut ParticleStore<V>, handle: AnchorHandle, position: V) {
        store.get_mut(self.bindings[handle.0]).teleport(position);
    }

    /// Apply every binding the driver has a position for. Returns how many
    /// were applied.
    pub fn apply_all<V: Vec, D: AnchorDriver<V> + ?Sized>(
        &self,
        store: &mut ParticleStore<V>,
        driver: &D,
    ) -> usize {
        let mut applied = 0;
        for handle in self.handles() {
            if let Some(position) = driver.position(handle) {
                self.apply(store, handle, position);
                applied += 1;
            }
        }
        applied
    }

    /// Re-pin every bound particle, e.g. after the store was rebuilt.
    pub fn repin<V: Vec>(&self, store: &mut ParticleStore<V>) {
        for &index in &self.bindings {
            store.get_mut(index).pinned = true;
        }
    }

    pub fn particle(&self, handle: AnchorHandle) -> usize {
        self.bindings[handle.0]
    }

    pub fn handles(&self) -> impl Iterator<Item = AnchorHandle> {
        (0..self.bindings.len()).map(AnchorHandle)
    }

    pub fn len(&self) -> usize { self.bindings.len() }
    pub fn is_empty(&self) -> bool { self.bindings.is_empty() }
}
