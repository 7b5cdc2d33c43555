//! The A* search driver.
//!
//! [`Pathfinder`] runs the open/closed expansion loop and delegates every
//! decision to a [`NodeExaminer`]: whether a node is the destination,
//! whether a move is allowed, and what a node costs. Column verdicts are
//! applied to the [`NodeContainer`] in one step.

use crate::container::NodeContainer;
use crate::context::SearchContext;
use crate::score::Score;
use crate::traits::{AstarNode, NodeExaminer, PathableResult};

/// Limits applied to each search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of node expansions after which a search gives up with
    /// [`PathOutcome::BudgetExhausted`]. `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Unbounded searches.
    pub const UNBOUNDED: Self = Self {
        max_expansions: None,
    };

    /// Give up after `n` expansions.
    pub const fn with_max_expansions(n: usize) -> Self {
        Self {
            max_expansions: Some(n),
        }
    }
}

/// Counters of the last search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken from the open set and expanded.
    pub expanded: usize,
    /// Scores accepted into the open set, the start node included.
    pub opened: usize,
    /// Columns excluded after an `InvalidColumn` verdict.
    pub pruned_columns: usize,
}

/// A path from start to destination, both included.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<N> {
    nodes: Vec<N>,
    cost: f32,
}

impl<N: Copy> Path<N> {
    /// Nodes in walking order.
    #[inline]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes, both endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a path holds at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn start(&self) -> N {
        self.nodes[0]
    }

    #[inline]
    pub fn destination(&self) -> N {
        self.nodes[self.nodes.len() - 1]
    }

    /// `g` of the destination, as computed by the examiner's provider.
    #[inline]
    pub fn cost(&self) -> f32 {
        self.cost
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome<N> {
    /// The destination was reached.
    Found(Path<N>),
    /// The open set ran dry without reaching the destination.
    Unreachable,
    /// [`SearchConfig::max_expansions`] was reached first.
    BudgetExhausted,
}

impl<N> PathOutcome<N> {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[inline]
    pub fn path(&self) -> Option<&Path<N>> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path<N>> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::Unreachable => "unreachable",
            Self::BudgetExhausted => "budget exhausted",
        }
    }
}

/// What the driver does with one neighbour.
enum Verdict<N> {
    Open(Score<N>),
    PruneColumn,
    Skip,
}

/// Reusable A* driver.
///
/// The node container and neighbour buffer are kept between searches and
/// cleared at the start of each one, so repeated queries reuse their
/// allocations. After a search, [`stats`](Self::stats) and
/// [`container`](Self::container) describe how it went.
pub struct Pathfinder<N> {
    container: NodeContainer<N>,
    nbuf: Vec<N>,
    config: SearchConfig,
    stats: SearchStats,
}

impl<N: AstarNode> Default for Pathfinder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: AstarNode> Pathfinder<N> {
    /// Create an unbounded pathfinder.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::UNBOUNDED)
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            container: NodeContainer::new(),
            nbuf: Vec::with_capacity(26),
            config,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Counters of the last search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Open/closed state left by the last search.
    #[inline]
    pub fn container(&self) -> &NodeContainer<N> {
        &self.container
    }

    /// Search for a path from `start` to `destination`.
    pub fn find_path<E: NodeExaminer<N>>(
        &mut self,
        examiner: &E,
        start: N,
        destination: N,
    ) -> PathOutcome<N> {
        self.container.clear();
        self.stats = SearchStats::default();

        let root = {
            let ctx = SearchContext::new(destination, &self.container);
            examiner.score(None, start, &ctx)
        };
        if self.container.offer(root) {
            self.stats.opened += 1;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = 'search: loop {
            let Some(current) = self.container.pop() else {
                break 'search PathOutcome::Unreachable;
            };
            let node = current.node();

            let arrived = {
                let ctx = SearchContext::new(destination, &self.container);
                examiner.is_destination(node, &ctx)
            };
            if arrived {
                break 'search PathOutcome::Found(self.rebuild(node, current.g()));
            }

            if self
                .config
                .max_expansions
                .is_some_and(|limit| self.stats.expanded >= limit)
            {
                break 'search PathOutcome::BudgetExhausted;
            }

            self.stats.expanded += 1;
            nbuf.clear();
            node.neighbors(&mut nbuf);

            for &next in nbuf.iter() {
                if next == node || self.container.is_closed(next) {
                    continue;
                }
                let verdict = {
                    let ctx = SearchContext::new(destination, &self.container);
                    match examiner.is_pathable(node, next, &ctx) {
                        PathableResult::Valid => Verdict::Open(examiner.score(Some(node), next, &ctx)),
                        PathableResult::InvalidColumn => Verdict::PruneColumn,
                        PathableResult::InvalidPoint => Verdict::Skip,
                    }
                };
                match verdict {
                    Verdict::Open(score) => {
                        if self.container.offer(score) {
                            self.stats.opened += 1;
                        }
                    }
                    Verdict::PruneColumn => {
                        let column = next.column();
                        if self.container.exclude_column(column) {
                            self.stats.pruned_columns += 1;
                            log::trace!("pruned column {column} while expanding {node:?}");
                        }
                    }
                    Verdict::Skip => {}
                }
            }

            self.container.close(node);
        };

        self.nbuf = nbuf;

        log::debug!(
            "search {:?} -> {:?}: {} ({} expanded, {} opened, {} columns pruned)",
            start,
            destination,
            outcome.label(),
            self.stats.expanded,
            self.stats.opened,
            self.stats.pruned_columns,
        );
        outcome
    }

    /// Walk the came-from records back from `goal`.
    fn rebuild(&self, goal: N, cost: f32) -> Path<N> {
        let mut nodes = vec![goal];
        let mut cur = goal;
        while let Some(p) = self.container.parent(cur) {
            nodes.push(p);
            cur = p;
        }
        nodes.reverse();
        Path { nodes, cost }
    }
}
