//! Random terrain generation.
//!
//! Provides a few generators for test and demo worlds:
//! - **Floor**: a flat layer of one block.
//! - **Pillars**: random stone columns standing on the floor.
//! - **Plants**: random walk-through decoration on the floor.
//! - **Hills**: a smoothed random heightmap of stone topped with grass.

use blockpath_core::{BlockPos, Region};
use rand::Rng;

use crate::block::Block;
use crate::world::BlockWorld;

/// Terrain generator operating on a [`BlockWorld`].
pub struct TerrainGen<R: Rng> {
    pub rng: R,
    pub world: BlockWorld,
}

impl<R: Rng> TerrainGen<R> {
    /// Create a new generator for the given world.
    pub fn with_world(world: BlockWorld, rng: R) -> Self {
        Self { rng, world }
    }

    /// Fill layer `y` with `block`. Returns the number of blocks set.
    pub fn floor(&mut self, y: i32, block: Block) -> usize {
        let layer = self.world.bounds().layer(y);
        self.world.fill(layer, block);
        layer.len()
    }

    /// Raise stone pillars on the surface blocks of layer `floor_y`.
    ///
    /// Each floor block carries a pillar with probability `density`
    /// (0.0–1.0); pillar heights are uniform in `1..=max_height`. Returns the
    /// number of pillars.
    pub fn scatter_pillars(&mut self, floor_y: i32, density: f64, max_height: i32) -> usize {
        let max_height = max_height.max(1);
        let mut placed = 0;
        for p in self.world.bounds().layer(floor_y + 1).iter() {
            if !self.stands_on_surface(p) {
                continue;
            }
            let r: f64 = self.rng.random();
            if r >= density {
                continue;
            }
            let h = self.rng.random_range(1..=max_height);
            for i in 0..h {
                self.world.set(p.up(i), Block::Stone);
            }
            placed += 1;
        }
        placed
    }

    /// Put plants in free cells above surface blocks of layer `floor_y`,
    /// each with probability `density`. Returns the number of plants.
    pub fn scatter_plants(&mut self, floor_y: i32, density: f64) -> usize {
        let mut placed = 0;
        for p in self.world.bounds().layer(floor_y + 1).iter() {
            if !self.stands_on_surface(p) {
                continue;
            }
            let r: f64 = self.rng.random();
            if r < density {
                self.world.set(p, Block::Plant);
                placed += 1;
            }
        }
        placed
    }

    /// Build rolling hills over the whole world.
    ///
    /// Every column gets a random height in `0..=amplitude` above `base_y`,
    /// smoothed `reps` times by averaging with its eight neighbours. Columns
    /// are stone from the bottom of the world up to their height, topped
    /// with grass. Returns the highest grass block's y.
    pub fn hills(&mut self, base_y: i32, amplitude: i32, reps: usize) -> i32 {
        let bounds = self.world.bounds();
        let w = bounds.width().max(0) as usize;
        let d = bounds.depth().max(0) as usize;
        let amplitude = amplitude.max(0);

        let mut heights: Vec<i32> = (0..w * d)
            .map(|_| self.rng.random_range(0..=amplitude))
            .collect();

        // Smoothing passes.
        for _ in 0..reps {
            let prev = heights.clone();
            for z in 0..d {
                for x in 0..w {
                    let mut sum = 0;
                    let mut n = 0;
                    for nz in z.saturating_sub(1)..(z + 2).min(d) {
                        for nx in x.saturating_sub(1)..(x + 2).min(w) {
                            sum += prev[nz * w + nx];
                            n += 1;
                        }
                    }
                    heights[z * w + x] = (sum as f32 / n as f32).round() as i32;
                }
            }
        }

        let mut top = i32::MIN;
        for z in 0..d {
            for x in 0..w {
                let cx = bounds.min.x + x as i32;
                let cz = bounds.min.z + z as i32;
                let surface = base_y + heights[z * w + x];
                let column = Region::new(cx, bounds.min.y, cz, cx + 1, surface, cz + 1);
                self.world.fill(column, Block::Stone);
                self.world.set(BlockPos::new(cx, surface, cz), Block::Grass);
                top = top.max(surface);
            }
        }
        top
    }

    /// Clear `above` cells over `pos`, e.g. to free a start or goal.
    pub fn clear_above(&mut self, pos: BlockPos, above: i32) {
        for i in 1..=above {
            self.world.set(pos.up(i), Block::Air);
        }
    }

    fn stands_on_surface(&self, p: BlockPos) -> bool {
        self.world.at(p) == Some(Block::Air)
            && self.world.at(p.up(-1)).is_some_and(Block::is_surface)
    }
}
