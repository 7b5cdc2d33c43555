use std::fmt;
use std::hash::Hash;

use blockpath_core::{BlockPos, Column};

use crate::context::SearchContext;
use crate::score::Score;

/// Step cost the base provider charges for every hop.
pub const BASE_STEP_COST: f32 = 0.1;

/// A position in a search space.
///
/// Nodes are plain values: identity is `Eq`/`Hash`, and the parent link of
/// a node during a search lives in the search's
/// [`NodeContainer`](crate::NodeContainer), never on the node itself.
pub trait AstarNode: Copy + Eq + Hash + fmt::Debug {
    /// Integer coordinates of the node.
    fn pos(&self) -> BlockPos;

    /// Whether a single step leads from `self` to `other`.
    fn adjacent(&self, other: &Self) -> bool;

    /// Append the candidate neighbours of `self` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, buf: &mut Vec<Self>);

    /// Vertical column used for column pruning.
    #[inline]
    fn column(&self) -> Column {
        self.pos().column()
    }
}

/// Strategy producing a [`Score`] for a `(parent, node)` pair.
///
/// The provided methods form the base provider: every hop costs
/// [`BASE_STEP_COST`] and there is no heuristic. Implementations override
/// [`step_cost`](Self::step_cost) and [`estimate`](Self::estimate).
pub trait ScoreProvider<N: AstarNode> {
    /// Cost of the single hop `from` → `to`.
    fn step_cost(&self, _from: N, _to: N) -> f32 {
        BASE_STEP_COST
    }

    /// Heuristic estimate from `node` to `destination`.
    fn estimate(&self, _node: N, _destination: N) -> f32 {
        0.0
    }

    /// Cost from the search root to `node` reached through `parent`.
    ///
    /// Walks the whole chain: `node` → `parent` → recorded parents in the
    /// context's container, summing [`step_cost`](Self::step_cost).
    fn path_cost(&self, parent: Option<N>, node: N, ctx: &SearchContext<'_, N>) -> f32 {
        let mut g = 0.0;
        let mut cur = node;
        let mut next = parent;
        while let Some(p) = next {
            g += self.step_cost(p, cur);
            cur = p;
            next = ctx.parent(p);
        }
        g
    }

    /// Build the score of `node` reached through `parent`.
    fn score(&self, parent: Option<N>, node: N, ctx: &SearchContext<'_, N>) -> Score<N> {
        let g = self.path_cost(parent, node, ctx);
        let h = self.estimate(node, ctx.destination());
        Score::new(parent, node, g, h)
    }
}

/// Result of examining a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathableResult {
    /// The move is allowed.
    Valid,
    /// This candidate is unusable.
    InvalidPoint,
    /// Every block in the candidate's column is unusable.
    InvalidColumn,
}

impl PathableResult {
    #[inline]
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

/// Strategy deciding destinations, move validity and scoring.
pub trait NodeExaminer<N: AstarNode> {
    /// Whether `node` ends the search.
    fn is_destination(&self, node: N, ctx: &SearchContext<'_, N>) -> bool;

    /// Whether the move `from` → `to` is allowed.
    fn is_pathable(&self, from: N, to: N, ctx: &SearchContext<'_, N>) -> PathableResult;

    /// Score of `node` reached through `parent`.
    fn score(&self, parent: Option<N>, node: N, ctx: &SearchContext<'_, N>) -> Score<N>;
}

/// The base provider on its own: 0.1 per hop, no heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseScore;

impl<N: AstarNode> ScoreProvider<N> for BaseScore {}
