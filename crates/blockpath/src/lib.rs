//! Pluggable A* pathfinding for voxel terrain and graphs.
//!
//! The search is split into small strategies that plug into one driver,
//! [`Pathfinder`]:
//!
//! - a node type ([`AstarNode`]) supplies identity, coordinates and
//!   neighbours;
//! - a [`ScoreProvider`] turns a `(parent, node)` pair into a [`Score`];
//! - a [`NodeExaminer`] says which node is the destination and which moves
//!   are allowed;
//! - a [`NodeContainer`] keeps the open and closed sets and the came-from
//!   records of one search.
//!
//! Two strategy families are provided:
//!
//! | Examiner | Scores | Nodes |
//! |---|---|---|
//! | [`GraphExaminer`] | [`GraphScore`] | any [`AstarNode`], e.g. [`GraphNode`] |
//! | [`WorldExaminer`] | [`GridScore`] (default) | [`BlockPos`](blockpath_core::BlockPos) over a [`TerrainOracle`] |
//!
//! A world examiner may reject a move with
//! [`PathableResult::InvalidColumn`], telling the driver that no block of
//! the target's vertical column can be stood on; the driver then excludes
//! the whole column at once.

mod container;
mod context;
mod distance;
mod error;
mod graph;
mod grid;
mod node;
mod score;
mod search;
mod traits;
mod world;

pub use container::NodeContainer;
pub use context::SearchContext;
pub use distance::{chebyshev, manhattan, squared_euclidean};
pub use error::ConfigError;
pub use graph::{AdjacencyGraph, GraphExaminer, GraphNode, GraphScore, VertexId};
pub use grid::{DIAGONAL_3D_COST, DIAGONAL_PLANAR_COST, GridScore, STRAIGHT_COST};
pub use score::Score;
pub use search::{Path, PathOutcome, Pathfinder, SearchConfig, SearchStats};
pub use traits::{AstarNode, BASE_STEP_COST, BaseScore, NodeExaminer, PathableResult, ScoreProvider};
pub use world::{
    DEFAULT_ENTITY_HEIGHT, DoorPathMode, OpenableState, TerrainOracle, WorldExaminer,
    WorldExaminerConfig,
};
