//! Per-particle index of incident constraints.
//!
//! Built once from a constraint slice and never patched. After a tear the
//! positions in it are stale; rebuild it from the live set instead.

use crate::constraint::DistanceConstraint;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Compressed adjacency: `offsets[i]..offsets[i + 1]` slices `incident`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyIndex {
    offsets: AllocVec<usize>,
    incident: AllocVec<usize>,
}

impl AdjacencyIndex {
    /// Index `constraints` over `particle_count` particles.
    ///
    /// Each constraint position is listed under both of its endpoints, in
    /// increasing order.
    pub fn build<V: Vec>(particle_count: usize, constraints: &[DistanceConstraint<V>]) -> Self {
        let mut offsets = alloc::vec![0usize; particle_count + 1];
        for c in constraints {
            offsets[c.a + 1] += 1;
            offsets[c.b + 1] += 1;
        }
        for i in 0..particle_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets.clone();
        let mut incident = alloc::vec![0usize; constraints.len() * 2];
        for (position, c) in constraints.iter().enumerate() {
            incident[cursor[c.a]] = position;
            cursor[c.a] += 1;
            incident[cursor[c.b]] = position;
            cursor[c.b] += 1;
        }

        AdjacencyIndex { offsets, incident }
    }

    /// Positions (in the indexed constraint slice) touching `particle`.
    pub fn incident(&self, particle: usize) -> &[usize] {
        &self.incident[self.offsets[particle]..self.offsets[particle + 1]]
    }

    pub fn degree(&self, particle: usize) -> usize {
        self.offsets[particle + 1] - self.offsets[particle]
    }

    pub fn particle_count(&self) -> usize {
        self.offsets.len() - 1
    }
}
