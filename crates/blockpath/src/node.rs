use blockpath_core::BlockPos;

use crate::distance::chebyshev;
use crate::traits::AstarNode;

/// Voxel nodes: every block touching this one by a face, edge or corner.
impl AstarNode for BlockPos {
    #[inline]
    fn pos(&self) -> BlockPos {
        *self
    }

    #[inline]
    fn adjacent(&self, other: &Self) -> bool {
        chebyshev(*self, *other) == 1
    }

    fn neighbors(&self, buf: &mut Vec<Self>) {
        buf.extend_from_slice(&self.neighbors_26());
    }
}
