//! Reference block worlds for blockpath: materials, a dense in-memory
//! world, text layouts and random terrain.

pub mod block;
pub mod layout;
pub mod terrain;
pub mod world;

#[cfg(test)]
mod scenarios;

pub use block::Block;
pub use layout::{Layout, LayoutError};
pub use terrain::TerrainGen;
pub use world::BlockWorld;
