//! Search over arbitrary graphs.
//!
//! [`AdjacencyGraph`] is a small caller-owned graph whose vertices carry a
//! position; [`GraphNode`] is a handle into it that implements
//! [`AstarNode`]. [`GraphExaminer`] only relies on [`AstarNode::adjacent`],
//! so it works with any other node type as well.

use std::fmt;
use std::hash::{Hash, Hasher};

use blockpath_core::BlockPos;

use crate::context::SearchContext;
use crate::distance::squared_euclidean;
use crate::score::Score;
use crate::traits::{AstarNode, NodeExaminer, PathableResult, ScoreProvider};

/// Index of a vertex in an [`AdjacencyGraph`].
pub type VertexId = usize;

// ---------------------------------------------------------------------------
// AdjacencyGraph
// ---------------------------------------------------------------------------

/// Vertices with positions and directed adjacency lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyGraph {
    positions: Vec<BlockPos>,
    edges: Vec<Vec<VertexId>>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex at `pos` and return its id.
    pub fn add_vertex(&mut self, pos: BlockPos) -> VertexId {
        self.positions.push(pos);
        self.edges.push(Vec::new());
        self.positions.len() - 1
    }

    /// Connect `a` and `b` in both directions.
    ///
    /// # Panics
    ///
    /// Panics if either id is not a vertex of this graph.
    pub fn connect(&mut self, a: VertexId, b: VertexId) {
        self.connect_one_way(a, b);
        self.connect_one_way(b, a);
    }

    /// Connect `from` to `to` only.
    ///
    /// # Panics
    ///
    /// Panics if either id is not a vertex of this graph.
    pub fn connect_one_way(&mut self, from: VertexId, to: VertexId) {
        assert!(from < self.positions.len(), "unknown vertex {from}");
        assert!(to < self.positions.len(), "unknown vertex {to}");
        let out = &mut self.edges[from];
        if !out.contains(&to) {
            out.push(to);
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of vertex `id`.
    #[inline]
    pub fn position(&self, id: VertexId) -> Option<BlockPos> {
        self.positions.get(id).copied()
    }

    /// Outgoing edges of vertex `id`.
    #[inline]
    pub fn edges(&self, id: VertexId) -> &[VertexId] {
        self.edges.get(id).map_or(&[], Vec::as_slice)
    }

    /// Handle to vertex `id`, if it exists.
    pub fn node(&self, id: VertexId) -> Option<GraphNode<'_>> {
        (id < self.len()).then_some(GraphNode { graph: self, id })
    }
}

// ---------------------------------------------------------------------------
// GraphNode
// ---------------------------------------------------------------------------

/// A vertex of an [`AdjacencyGraph`]. Identity is the vertex id.
#[derive(Clone, Copy)]
pub struct GraphNode<'g> {
    graph: &'g AdjacencyGraph,
    id: VertexId,
}

impl GraphNode<'_> {
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }
}

impl PartialEq for GraphNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GraphNode<'_> {}

impl Hash for GraphNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for GraphNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.id, self.pos())
    }
}

impl AstarNode for GraphNode<'_> {
    #[inline]
    fn pos(&self) -> BlockPos {
        self.graph.positions[self.id]
    }

    #[inline]
    fn adjacent(&self, other: &Self) -> bool {
        self.graph.edges(self.id).contains(&other.id)
    }

    fn neighbors(&self, buf: &mut Vec<Self>) {
        let graph = self.graph;
        buf.extend(graph.edges(self.id).iter().map(|&id| GraphNode { graph, id }));
    }
}

// ---------------------------------------------------------------------------
// Scoring and examination
// ---------------------------------------------------------------------------

/// Graph scores: squared Euclidean distance per hop and to the goal.
///
/// `g` sums squared hop lengths, so it orders paths within one search but
/// is not a path length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphScore;

impl<N: AstarNode> ScoreProvider<N> for GraphScore {
    fn step_cost(&self, from: N, to: N) -> f32 {
        squared_euclidean(from.pos(), to.pos())
    }

    fn estimate(&self, node: N, destination: N) -> f32 {
        squared_euclidean(node.pos(), destination.pos())
    }
}

/// Examiner for plain graphs: adjacency plus a guard against stepping
/// straight back to the node just left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphExaminer {
    scorer: GraphScore,
}

impl GraphExaminer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: AstarNode> NodeExaminer<N> for GraphExaminer {
    fn is_destination(&self, node: N, ctx: &SearchContext<'_, N>) -> bool {
        node == ctx.destination()
    }

    fn is_pathable(&self, from: N, to: N, ctx: &SearchContext<'_, N>) -> PathableResult {
        if from.adjacent(&to) && ctx.parent(from) != Some(to) {
            PathableResult::Valid
        } else {
            PathableResult::InvalidPoint
        }
    }

    fn score(&self, parent: Option<N>, node: N, ctx: &SearchContext<'_, N>) -> Score<N> {
        self.scorer.score(parent, node, ctx)
    }
}
