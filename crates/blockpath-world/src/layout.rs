//! Block worlds built from text.
//!
//! A [`Layout`] is a stack of horizontal layers drawn with one character per
//! block, bottom layer first. Layers are separated by a line containing
//! only `---`; inside a layer each line is a row (Z grows downwards) and
//! each character a block (X grows rightwards). Surrounding whitespace of
//! every line is ignored, as are blank lines.
//!
//! ```text
//! #####      .....
//! #####      ..#..
//! #####  --- ..#..
//! ```
//!
//! See [`Block::rune`] for the characters.

use std::fmt;

use blockpath_core::{BlockPos, Region};

use crate::block::Block;
use crate::world::BlockWorld;

const LAYER_SEPARATOR: &str = "---";

/// A parsed text layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    size: BlockPos,
    blocks: Vec<Block>,
}

impl Layout {
    /// Parse a layout.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let mut layers: Vec<Vec<&str>> = vec![Vec::new()];
        for line in s.lines().map(str::trim) {
            if line == LAYER_SEPARATOR {
                layers.push(Vec::new());
            } else if !line.is_empty() {
                if let Some(layer) = layers.last_mut() {
                    layer.push(line);
                }
            }
        }

        let width = layers
            .first()
            .and_then(|rows| rows.first())
            .map_or(0, |row| row.chars().count());
        let depth = layers.first().map_or(0, Vec::len);
        if width == 0 || depth == 0 {
            return Err(LayoutError::Empty);
        }

        let mut blocks = Vec::with_capacity(width * depth * layers.len());
        for (y, rows) in layers.iter().enumerate() {
            if rows.len() != depth {
                return Err(LayoutError::InconsistentSize { layer: y });
            }
            for (z, row) in rows.iter().enumerate() {
                if row.chars().count() != width {
                    return Err(LayoutError::InconsistentSize { layer: y });
                }
                for (x, ch) in row.chars().enumerate() {
                    let Some(b) = Block::from_rune(ch) else {
                        return Err(LayoutError::InvalidRune {
                            ch,
                            pos: BlockPos::new(x as i32, y as i32, z as i32),
                        });
                    };
                    blocks.push(b);
                }
            }
        }

        Ok(Self {
            size: BlockPos::new(width as i32, layers.len() as i32, depth as i32),
            blocks,
        })
    }

    /// Width (x), number of layers (y) and depth (z).
    pub fn size(&self) -> BlockPos {
        self.size
    }

    /// Every block with its layout-relative position, bottom layer first.
    pub fn iter(&self) -> impl Iterator<Item = (BlockPos, Block)> + '_ {
        Region::from_corners(BlockPos::ZERO, self.size)
            .iter()
            .zip(self.blocks.iter().copied())
    }

    /// Draw the layout into `world` with its first block at `origin`.
    ///
    /// Blocks falling outside the world are dropped.
    pub fn draw(&self, world: &mut BlockWorld, origin: BlockPos) {
        for (p, b) in self.iter() {
            world.set(origin + p, b);
        }
    }

    /// A world holding exactly this layout plus `headroom` layers of air on
    /// top.
    pub fn to_world(&self, headroom: i32) -> BlockWorld {
        let top = self.size.up(headroom.max(0));
        let mut world = BlockWorld::new(Region::from_corners(BlockPos::ZERO, top));
        self.draw(&mut world, BlockPos::ZERO);
        world
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No blocks at all.
    Empty,
    /// A row or layer differs in size from the first one.
    InconsistentSize { layer: usize },
    /// A character with no block assigned.
    InvalidRune { ch: char, pos: BlockPos },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: no blocks"),
            Self::InconsistentSize { layer } => {
                write!(f, "layout: inconsistent size in layer {layer}")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    const HUT: &str = "
        ###
        ###
        ---
        #D#
        #.#
    ";

    #[test]
    fn parses_layers_bottom_up() {
        let l = Layout::parse(HUT).unwrap();
        assert_eq!(l.size(), BlockPos::new(3, 2, 2));
        let blocks: Vec<_> = l.iter().collect();
        assert_eq!(blocks.len(), 12);
        assert_eq!(blocks[0], (BlockPos::new(0, 0, 0), Block::Stone));
        assert_eq!(blocks[7], (BlockPos::new(1, 1, 0), Block::CLOSED_DOOR));
        assert_eq!(blocks[10], (BlockPos::new(1, 1, 1), Block::Air));
    }

    #[test]
    fn to_world_adds_headroom() {
        let w = Layout::parse(HUT).unwrap().to_world(3);
        assert_eq!(w.bounds(), Region::new(0, 0, 0, 3, 5, 2));
        assert_eq!(w.at(BlockPos::new(1, 1, 0)), Some(Block::CLOSED_DOOR));
        assert_eq!(w.at(BlockPos::new(1, 4, 1)), Some(Block::Air));
    }

    #[test]
    fn draw_offsets_and_clips() {
        let l = Layout::parse("##\n##").unwrap();
        let mut w = BlockWorld::new(Region::new(0, 0, 0, 3, 1, 3));
        l.draw(&mut w, BlockPos::new(2, 0, 2));
        assert_eq!(w.count(Block::Stone), 1);
        assert_eq!(w.at(BlockPos::new(2, 0, 2)), Some(Block::Stone));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Layout::parse("###\n##").unwrap_err();
        assert_eq!(err, LayoutError::InconsistentSize { layer: 0 });
        let err = Layout::parse("##\n##\n---\n##").unwrap_err();
        assert_eq!(err, LayoutError::InconsistentSize { layer: 1 });
    }

    #[test]
    fn unknown_runes_are_rejected() {
        let err = Layout::parse("##\n#?").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidRune {
                ch: '?',
                pos: BlockPos::new(1, 0, 1)
            }
        );
        assert!(err.to_string().contains("(1, 0, 1)"));
    }

    #[test]
    fn empty_layout_is_rejected() {
        assert_eq!(Layout::parse("  \n\n"), Err(LayoutError::Empty));
        assert_eq!(Layout::parse("---\n##"), Err(LayoutError::Empty));
    }
}
