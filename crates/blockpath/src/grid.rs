use blockpath_core::BlockPos;

use crate::distance::squared_euclidean;
use crate::traits::{AstarNode, BASE_STEP_COST, ScoreProvider};

/// Step cost of a full 3D diagonal (one block on every axis).
pub const DIAGONAL_3D_COST: f32 = 0.7;
/// Step cost of a move along exactly two axes.
pub const DIAGONAL_PLANAR_COST: f32 = 0.4;
/// Step cost of any other move.
pub const STRAIGHT_COST: f32 = BASE_STEP_COST;

/// Voxel-grid scores with quantised step costs.
///
/// Approximates the 1 : √2 : √3 ratio of straight, planar-diagonal and
/// full-diagonal moves without a square root per edge. The heuristic is
/// the squared Euclidean distance to the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridScore;

impl GridScore {
    /// Quantised cost of the single hop between two positions.
    pub fn hop_cost(from: BlockPos, to: BlockPos) -> f32 {
        let d = to - from;
        let axes = [d.x, d.y, d.z].iter().filter(|v| v.abs() == 1).count();
        match axes {
            3 => DIAGONAL_3D_COST,
            2 => DIAGONAL_PLANAR_COST,
            _ => STRAIGHT_COST,
        }
    }
}

impl<N: AstarNode> ScoreProvider<N> for GridScore {
    fn step_cost(&self, from: N, to: N) -> f32 {
        Self::hop_cost(from.pos(), to.pos())
    }

    fn estimate(&self, node: N, destination: N) -> f32 {
        squared_euclidean(node.pos(), destination.pos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::NodeContainer;
    use crate::context::SearchContext;
    use crate::score::Score;

    #[test]
    fn straight_is_cheaper_than_planar_diagonal_is_cheaper_than_full_diagonal() {
        let o = BlockPos::ZERO;
        let straight = GridScore::hop_cost(o, BlockPos::new(1, 0, 0));
        let vertical = GridScore::hop_cost(o, BlockPos::new(0, 1, 0));
        let planar = GridScore::hop_cost(o, BlockPos::new(1, 0, -1));
        let full = GridScore::hop_cost(o, BlockPos::new(-1, 1, 1));
        assert_eq!(straight, 0.1);
        assert_eq!(vertical, 0.1);
        assert_eq!(planar, 0.4);
        assert_eq!(full, 0.7);
        assert!(straight < planar && planar < full);
    }

    #[test]
    fn climbing_one_axis_costs_a_planar_diagonal() {
        let o = BlockPos::ZERO;
        assert_eq!(GridScore::hop_cost(o, BlockPos::new(1, 1, 0)), DIAGONAL_PLANAR_COST);
        assert_eq!(GridScore::hop_cost(o, BlockPos::new(0, -1, 1)), DIAGONAL_PLANAR_COST);
        assert_eq!(GridScore::hop_cost(o, BlockPos::new(0, 1, 0)), STRAIGHT_COST);
    }

    #[test]
    fn g_accumulates_over_recorded_parents() {
        let a = BlockPos::new(0, 0, 0);
        let b = BlockPos::new(1, 0, 1);
        let c = BlockPos::new(2, 1, 2);
        let goal = BlockPos::new(5, 1, 2);

        let mut container = NodeContainer::new();
        container.offer(Score::root(a, 0.0));
        container.offer(Score::new(Some(a), b, 0.4, 0.0));

        let ctx = SearchContext::new(goal, &container);
        let s = GridScore.score(Some(b), c, &ctx);
        assert!((s.g() - (0.4 + 0.7)).abs() < 1e-6);
        assert_eq!(s.h(), 9.0);
        assert_eq!(s.f(), s.g() + s.h());
        assert_eq!(s.parent(), Some(b));
    }
}
