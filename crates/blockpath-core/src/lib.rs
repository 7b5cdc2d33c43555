//! **blockpath-core** — geometry primitives for voxel pathfinding.
//!
//! This crate provides the integer coordinate types used across the
//! *blockpath* crates: block positions, vertical columns, and half-open
//! 3D regions.

pub mod geom;

pub use geom::{BlockPos, Column, Region, RegionIter};
