//! An in-memory block world.
//!
//! [`BlockWorld`] stores one [`Block`] per position of a [`Region`] and
//! answers the [`TerrainOracle`] queries of a
//! [`WorldExaminer`](blockpath::WorldExaminer). Positions outside the
//! region are unknown.

use blockpath::{OpenableState, TerrainOracle};
use blockpath_core::{BlockPos, Region};

use crate::block::Block;

/// A dense box of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockWorld {
    bounds: Region,
    blocks: Vec<Block>,
}

impl BlockWorld {
    /// Create a world covering `bounds`, filled with air.
    pub fn new(bounds: Region) -> Self {
        Self {
            bounds,
            blocks: vec![Block::Air; bounds.len()],
        }
    }

    /// Returns the region covered by this world.
    #[inline]
    pub fn bounds(&self) -> Region {
        self.bounds
    }

    #[inline]
    pub fn contains(&self, pos: BlockPos) -> bool {
        self.bounds.contains(pos)
    }

    fn index(&self, pos: BlockPos) -> Option<usize> {
        if !self.bounds.contains(pos) {
            return None;
        }
        let rel = pos - self.bounds.min;
        let w = self.bounds.width() as usize;
        let d = self.bounds.depth() as usize;
        Some((rel.y as usize * d + rel.z as usize) * w + rel.x as usize)
    }

    /// Get the block at `pos`, or `None` if out of bounds.
    pub fn at(&self, pos: BlockPos) -> Option<Block> {
        self.index(pos).map(|i| self.blocks[i])
    }

    /// Set the block at `pos`. Returns `false` if out of bounds.
    pub fn set(&mut self, pos: BlockPos, block: Block) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.blocks[i] = block;
                true
            }
            None => false,
        }
    }

    /// Fill the part of `region` inside the world with `block`.
    pub fn fill(&mut self, region: Region, block: Block) {
        for p in region.intersect(self.bounds).iter() {
            self.set(p, block);
        }
    }

    /// Fill the whole world using a function of each position.
    pub fn fill_fn(&mut self, mut f: impl FnMut(BlockPos) -> Block) {
        for p in self.bounds.iter() {
            let b = f(p);
            self.set(p, b);
        }
    }

    /// Open or close the door at `pos`. Returns `false` if there is no door.
    pub fn set_door(&mut self, pos: BlockPos, state: OpenableState) -> bool {
        match self.at(pos) {
            Some(Block::Door(_)) => self.set(pos, Block::Door(state)),
            _ => false,
        }
    }

    /// Count how many blocks equal `block`.
    pub fn count(&self, block: Block) -> usize {
        self.blocks.iter().filter(|&&b| b == block).count()
    }

    /// Highest surface block of column (x, z), if any.
    pub fn top_surface(&self, x: i32, z: i32) -> Option<BlockPos> {
        (self.bounds.min.y..self.bounds.max.y)
            .rev()
            .map(|y| BlockPos::new(x, y, z))
            .find(|&p| self.at(p).is_some_and(Block::is_surface))
    }
}

impl TerrainOracle for BlockWorld {
    type Material = Block;

    #[inline]
    fn material_at(&self, pos: BlockPos) -> Option<Block> {
        self.at(pos)
    }

    #[inline]
    fn is_surface(&self, material: Block) -> bool {
        material.is_surface()
    }

    #[inline]
    fn is_transparent(&self, material: Block) -> bool {
        material.is_transparent()
    }

    #[inline]
    fn openable_state(&self, pos: BlockPos) -> Option<OpenableState> {
        self.at(pos).and_then(Block::openable_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_is_air() {
        let w = BlockWorld::new(Region::new(0, 0, 0, 4, 3, 2));
        assert_eq!(w.count(Block::Air), 24);
        assert_eq!(w.at(BlockPos::new(3, 2, 1)), Some(Block::Air));
        assert_eq!(w.at(BlockPos::new(4, 0, 0)), None);
    }

    #[test]
    fn set_and_get_with_offset_bounds() {
        let mut w = BlockWorld::new(Region::new(-2, -1, 5, 2, 3, 8));
        let p = BlockPos::new(-2, 2, 7);
        assert!(w.set(p, Block::Glass));
        assert_eq!(w.at(p), Some(Block::Glass));
        assert_eq!(w.count(Block::Glass), 1);
        assert!(!w.set(BlockPos::new(0, 0, 0), Block::Stone));
        // Neighbouring indices are untouched.
        assert_eq!(w.at(BlockPos::new(-1, 2, 7)), Some(Block::Air));
        assert_eq!(w.at(BlockPos::new(-2, 2, 6)), Some(Block::Air));
    }

    #[test]
    fn fill_clamps_to_bounds() {
        let mut w = BlockWorld::new(Region::new(0, 0, 0, 3, 3, 3));
        w.fill(Region::new(-5, 0, -5, 5, 1, 5), Block::Stone);
        assert_eq!(w.count(Block::Stone), 9);
        w.fill_fn(|p| if p.y == 2 { Block::Plant } else { Block::Air });
        assert_eq!(w.count(Block::Plant), 9);
        assert_eq!(w.count(Block::Stone), 0);
    }

    #[test]
    fn doors_toggle() {
        let mut w = BlockWorld::new(Region::new(0, 0, 0, 2, 2, 2));
        let p = BlockPos::new(1, 1, 1);
        assert!(!w.set_door(p, OpenableState::Open));
        w.set(p, Block::CLOSED_DOOR);
        assert_eq!(w.openable_state(p), Some(OpenableState::Closed));
        assert!(w.set_door(p, OpenableState::Open));
        assert_eq!(w.openable_state(p), Some(OpenableState::Open));
    }

    #[test]
    fn top_surface_skips_air_and_plants() {
        let mut w = BlockWorld::new(Region::new(0, 0, 0, 1, 6, 1));
        w.set(BlockPos::new(0, 0, 0), Block::Stone);
        w.set(BlockPos::new(0, 2, 0), Block::Grass);
        w.set(BlockPos::new(0, 3, 0), Block::Plant);
        assert_eq!(w.top_surface(0, 0), Some(BlockPos::new(0, 2, 0)));
        assert_eq!(w.top_surface(1, 0), None);
    }

    #[test]
    fn oracle_reports_unknown_outside() {
        let w = BlockWorld::new(Region::new(0, 0, 0, 2, 2, 2));
        assert_eq!(w.material_at(BlockPos::new(0, -1, 0)), None);
        assert_eq!(w.openable_state(BlockPos::new(0, -1, 0)), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn world_round_trip() {
        let mut w = BlockWorld::new(Region::new(0, 0, 0, 2, 2, 2));
        w.set(BlockPos::new(1, 0, 1), Block::OPEN_DOOR);
        let json = serde_json::to_string(&w).unwrap();
        let back: BlockWorld = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}
