use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use blockpath_core::Column;

use crate::score::Score;
use crate::traits::AstarNode;

// ---------------------------------------------------------------------------
// Open-set entries
// ---------------------------------------------------------------------------

/// Heap entry ordered by `f`, then by insertion sequence.
#[derive(Clone, Copy)]
struct OpenEntry<N> {
    node: N,
    f: f32,
    seq: u64,
}

impl<N> Ord for OpenEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest insertion among equal f.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for OpenEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> PartialEq for OpenEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for OpenEntry<N> {}

/// Best-known score of a node and the sequence of its live heap entry.
#[derive(Clone, Copy)]
struct Record<N> {
    score: Score<N>,
    seq: u64,
}

// ---------------------------------------------------------------------------
// NodeContainer
// ---------------------------------------------------------------------------

/// Open and closed sets of one search.
///
/// The container also keeps the came-from records: the best score seen for
/// each node, whose parent is the node's parent in the search tree. A node
/// is closed when it was expanded or when its column was excluded, and a
/// closed node is never offered again until [`clear`](Self::clear).
pub struct NodeContainer<N> {
    open: BinaryHeap<OpenEntry<N>>,
    records: HashMap<N, Record<N>>,
    closed: HashSet<N>,
    excluded: HashSet<Column>,
    seq: u64,
}

impl<N: AstarNode> Default for NodeContainer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: AstarNode> NodeContainer<N> {
    pub fn new() -> Self {
        Self {
            open: BinaryHeap::new(),
            records: HashMap::new(),
            closed: HashSet::new(),
            excluded: HashSet::new(),
            seq: 0,
        }
    }

    /// Forget everything, keeping allocations.
    pub fn clear(&mut self) {
        self.open.clear();
        self.records.clear();
        self.closed.clear();
        self.excluded.clear();
        self.seq = 0;
    }

    /// Insert `score` into the open set, or replace the node's current
    /// score if the new `g` is strictly lower.
    ///
    /// Returns `false` when the node is closed or already has a path at
    /// least as cheap.
    pub fn offer(&mut self, score: Score<N>) -> bool {
        let node = score.node();
        if self.is_closed(node) {
            return false;
        }
        if let Some(r) = self.records.get(&node) {
            if score.g() >= r.score.g() {
                return false;
            }
        }
        self.seq += 1;
        let seq = self.seq;
        self.records.insert(node, Record { score, seq });
        self.open.push(OpenEntry {
            node,
            f: score.f(),
            seq,
        });
        true
    }

    /// Take the open node with the lowest `f`.
    ///
    /// Superseded entries and entries closed since they were pushed are
    /// dropped on the way.
    pub fn pop(&mut self) -> Option<Score<N>> {
        while let Some(entry) = self.open.pop() {
            if !self.is_live(&entry) {
                continue;
            }
            if let Some(r) = self.records.get(&entry.node) {
                return Some(r.score);
            }
        }
        None
    }

    /// Mark `node` as visited.
    #[inline]
    pub fn close(&mut self, node: N) {
        self.closed.insert(node);
    }

    /// Whether `node` was visited or lies in an excluded column.
    #[inline]
    pub fn is_closed(&self, node: N) -> bool {
        self.closed.contains(&node) || self.excluded.contains(&node.column())
    }

    /// Exclude every node of `column` that is not closed yet, open ones
    /// included. Returns `false` if the column was already excluded.
    pub fn exclude_column(&mut self, column: Column) -> bool {
        self.excluded.insert(column)
    }

    #[inline]
    pub fn is_column_excluded(&self, column: Column) -> bool {
        self.excluded.contains(&column)
    }

    /// Columns excluded so far, in no particular order.
    pub fn excluded_columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.excluded.iter().copied()
    }

    /// Parent of `node` on its best-known path.
    #[inline]
    pub fn parent(&self, node: N) -> Option<N> {
        self.records.get(&node).and_then(|r| r.score.parent())
    }

    /// Best-known score of `node`.
    #[inline]
    pub fn score(&self, node: N) -> Option<&Score<N>> {
        self.records.get(&node).map(|r| &r.score)
    }

    /// Number of nodes waiting in the open set.
    pub fn open_len(&self) -> usize {
        self.open.iter().filter(|e| self.is_live(e)).count()
    }

    /// Number of expanded nodes. Column exclusions are not counted.
    #[inline]
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    fn is_live(&self, entry: &OpenEntry<N>) -> bool {
        if self.is_closed(entry.node) {
            return false;
        }
        self.records
            .get(&entry.node)
            .is_some_and(|r| r.seq == entry.seq)
    }
}
