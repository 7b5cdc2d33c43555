use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::traits::AstarNode;

/// Cost record of a node: `g` from the start, `h` to the goal, `f = g + h`.
///
/// Both costs are computed once, when the score is built by a
/// [`ScoreProvider`](crate::ScoreProvider), and never change afterwards.
/// Equality and hashing consider only the node; ordering considers only `f`.
#[derive(Debug, Clone, Copy)]
pub struct Score<N> {
    parent: Option<N>,
    node: N,
    g: f32,
    h: f32,
}

impl<N: AstarNode> Score<N> {
    /// Build a score.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is `node` itself.
    pub fn new(parent: Option<N>, node: N, g: f32, h: f32) -> Self {
        assert!(
            parent != Some(node),
            "score parent must differ from its node: {node:?}"
        );
        Self { parent, node, g, h }
    }

    /// Score of a search root.
    #[inline]
    pub fn root(node: N, h: f32) -> Self {
        Self::new(None, node, 0.0, h)
    }

    #[inline]
    pub fn node(&self) -> N {
        self.node
    }

    #[inline]
    pub fn parent(&self) -> Option<N> {
        self.parent
    }

    /// Cost from the start.
    #[inline]
    pub fn g(&self) -> f32 {
        self.g
    }

    /// Estimated cost to the destination.
    #[inline]
    pub fn h(&self) -> f32 {
        self.h
    }

    #[inline]
    pub fn f(&self) -> f32 {
        self.g + self.h
    }

    /// Order by `f`. Equal `f` values compare `Equal`; there is no
    /// secondary key.
    #[inline]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.f().total_cmp(&other.f())
    }
}

impl<N: PartialEq> PartialEq for Score<N> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<N: Eq> Eq for Score<N> {}

impl<N: Hash> Hash for Score<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}
