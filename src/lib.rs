//! Verlet cloth simulation for games.
//!
//! `weft` simulates a cloth as a lattice of point masses held together by
//! distance constraints. Each fixed step applies externally driven anchors,
//! advances free particles with Verlet integration and relaxes the
//! constraints toward their rest lengths, tearing any that stretch too far.
//!
//! # Features
//!
//! - **Verlet integration**: Implicit velocity from position history
//! - **Pin-aware relaxation**: Pinned particles never move; a free particle
//!   tied to a pinned one takes the whole correction
//! - **Tearing**: Over-stretched constraints break permanently
//! - **Anchors**: Drive pinned particles from caller-owned positions
//! - **Observable**: Monitor each phase of a step via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod adjacency;
pub mod solver;
pub mod anchor;
pub mod cloth;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use particle::{Particle, ParticleStore};
pub use constraint::{DistanceConstraint, Resolution};
pub use adjacency::AdjacencyIndex;
pub use solver::ConstraintSet;
pub use anchor::{AnchorDriver, AnchorHandle, AnchorSet};
pub use cloth::{Cloth, ConstraintView};
pub use config::{GridConfig, SolverConfig, Topology};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ClothError;
