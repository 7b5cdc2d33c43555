//! Voxel-terrain examination.
//!
//! A [`WorldExaminer`] decides whether an entity of a given height can stand
//! on a block and move to it, asking a [`TerrainOracle`] about materials and
//! doors. A node of the search is the block the entity stands *on*; the
//! cells above it must leave room for the entity.

use std::fmt;
use std::str::FromStr;

use blockpath_core::BlockPos;

use crate::context::SearchContext;
use crate::error::ConfigError;
use crate::grid::GridScore;
use crate::score::Score;
use crate::traits::{AstarNode, NodeExaminer, PathableResult, ScoreProvider};

// ---------------------------------------------------------------------------
// Terrain oracle
// ---------------------------------------------------------------------------

/// State of an openable block such as a door, gate or trapdoor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OpenableState {
    Open,
    Closed,
}

impl OpenableState {
    #[inline]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Read access to the blocks of a world.
///
/// Lookups are expected to be cheap in-memory queries; the examiner calls
/// them several times per move.
pub trait TerrainOracle {
    /// Material classification of a block.
    type Material: Copy;

    /// Material at `pos`, or `None` when the block is unknown (outside the
    /// loaded world).
    fn material_at(&self, pos: BlockPos) -> Option<Self::Material>;

    /// Whether an entity can stand on top of `material`.
    fn is_surface(&self, material: Self::Material) -> bool;

    /// Whether an entity can move through `material`.
    fn is_transparent(&self, material: Self::Material) -> bool;

    /// Door state of the block at `pos`, `None` if it cannot be opened.
    fn openable_state(&self, pos: BlockPos) -> Option<OpenableState>;
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// How openable blocks count when checking headroom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DoorPathMode {
    /// Open doors are passable, closed doors block.
    #[default]
    Open,
    /// Doors are ignored: passable whether open or closed.
    IgnoreClosed,
    /// Doors always block.
    IgnoreOpen,
}

impl DoorPathMode {
    /// Whether a door in `state` leaves room for the entity.
    #[inline]
    pub fn allows(self, state: OpenableState) -> bool {
        match self {
            Self::Open => state.is_open(),
            Self::IgnoreClosed => true,
            Self::IgnoreOpen => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::IgnoreClosed => "ignore-closed",
            Self::IgnoreOpen => "ignore-open",
        }
    }
}

impl fmt::Display for DoorPathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DoorPathMode {
    type Err = ConfigError;

    /// Accepts `open`, `ignore-closed` and `ignore-open`, in any case and
    /// with `_` in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "open" => Ok(Self::Open),
            "ignore-closed" => Ok(Self::IgnoreClosed),
            "ignore-open" => Ok(Self::IgnoreOpen),
            _ => Err(ConfigError::UnknownDoorMode(s.to_string())),
        }
    }
}

/// Default entity height, in blocks.
pub const DEFAULT_ENTITY_HEIGHT: f32 = 2.0;

/// Settings of a [`WorldExaminer`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldExaminerConfig {
    /// Height of the walking entity; `ceil(entity_height)` free cells are
    /// required above every block it stands on.
    pub entity_height: f32,
    pub door_mode: DoorPathMode,
}

impl Default for WorldExaminerConfig {
    fn default() -> Self {
        Self {
            entity_height: DEFAULT_ENTITY_HEIGHT,
            door_mode: DoorPathMode::default(),
        }
    }
}

impl WorldExaminerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.entity_height.is_finite() || self.entity_height <= 0.0 {
            return Err(ConfigError::InvalidEntityHeight(self.entity_height));
        }
        Ok(())
    }

    /// Number of free cells required above a standing block.
    #[inline]
    pub fn headroom(&self) -> i32 {
        self.entity_height.ceil() as i32
    }
}

// ---------------------------------------------------------------------------
// WorldExaminer
// ---------------------------------------------------------------------------

/// Examiner for voxel terrain.
///
/// A move `from` → `to` is valid when `to` is an open, known surface block
/// with enough headroom and, for a horizontal diagonal that does not
/// descend, both orthogonal shoulder blocks also have headroom. Solid
/// obstructions report [`PathableResult::InvalidColumn`] so the driver can
/// drop the whole column.
pub struct WorldExaminer<'t, T, S = GridScore> {
    terrain: &'t T,
    config: WorldExaminerConfig,
    headroom: i32,
    scorer: S,
}

impl<'t, T: TerrainOracle> WorldExaminer<'t, T> {
    /// Examiner with the default configuration and grid scores.
    pub fn new(terrain: &'t T) -> Self {
        let config = WorldExaminerConfig::default();
        Self {
            terrain,
            config,
            headroom: config.headroom(),
            scorer: GridScore,
        }
    }

    /// Examiner with a validated configuration and grid scores.
    pub fn with_config(terrain: &'t T, config: WorldExaminerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            terrain,
            config,
            headroom: config.headroom(),
            scorer: GridScore,
        })
    }
}

impl<'t, T: TerrainOracle, S> WorldExaminer<'t, T, S> {
    /// Replace the score provider.
    pub fn with_scorer<S2>(self, scorer: S2) -> WorldExaminer<'t, T, S2> {
        WorldExaminer {
            terrain: self.terrain,
            config: self.config,
            headroom: self.headroom,
            scorer,
        }
    }

    #[inline]
    pub fn config(&self) -> &WorldExaminerConfig {
        &self.config
    }

    #[inline]
    pub fn terrain(&self) -> &'t T {
        self.terrain
    }

    #[inline]
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Whether the cells above `pos` leave room for the entity.
    pub fn has_room_for_entity(&self, pos: BlockPos) -> bool {
        (1..=self.headroom).all(|i| self.is_clear(pos.up(i)))
    }

    /// Whether the entity fits in the single cell at `pos`.
    fn is_clear(&self, pos: BlockPos) -> bool {
        match self.terrain.openable_state(pos) {
            Some(state) => self.config.door_mode.allows(state),
            None => self
                .terrain
                .material_at(pos)
                .is_some_and(|m| self.terrain.is_transparent(m)),
        }
    }

    /// Verdict for standing on `pos`, ignoring where the entity comes from.
    fn examine_block(&self, pos: BlockPos) -> PathableResult {
        let Some(material) = self.terrain.material_at(pos) else {
            return PathableResult::InvalidPoint;
        };
        if self.terrain.is_surface(material) && self.has_room_for_entity(pos) {
            return PathableResult::Valid;
        }
        // Only an opaque, non-openable block rules out the whole column.
        if self.terrain.is_transparent(material) || self.terrain.openable_state(pos).is_some() {
            PathableResult::InvalidPoint
        } else {
            PathableResult::InvalidColumn
        }
    }
}

impl<N, T, S> NodeExaminer<N> for WorldExaminer<'_, T, S>
where
    N: AstarNode,
    T: TerrainOracle,
    S: ScoreProvider<N>,
{
    fn is_destination(&self, node: N, ctx: &SearchContext<'_, N>) -> bool {
        node == ctx.destination()
    }

    fn is_pathable(&self, from: N, to: N, ctx: &SearchContext<'_, N>) -> PathableResult {
        if ctx.is_closed(to) {
            return PathableResult::InvalidPoint;
        }

        let target = to.pos();
        let verdict = self.examine_block(target);
        if !verdict.is_valid() {
            return verdict;
        }

        let origin = from.pos();
        let d = target - origin;
        if d.x != 0 && d.z != 0 && d.y >= 0 {
            // No cutting through wall corners.
            let along_x = origin.shift(d.x, 0, 0);
            let along_z = origin.shift(0, 0, d.z);
            if !self.has_room_for_entity(along_x) || !self.has_room_for_entity(along_z) {
                return PathableResult::InvalidColumn;
            }
        }

        PathableResult::Valid
    }

    fn score(&self, parent: Option<N>, node: N, ctx: &SearchContext<'_, N>) -> Score<N> {
        self.scorer.score(parent, node, ctx)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = WorldExaminerConfig {
            entity_height: 1.8,
            door_mode: DoorPathMode::IgnoreClosed,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"ignore-closed\""));
        let back: WorldExaminerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: WorldExaminerConfig = serde_json::from_str(r#"{"door_mode":"ignore-open"}"#).unwrap();
        assert_eq!(cfg.entity_height, DEFAULT_ENTITY_HEIGHT);
        assert_eq!(cfg.door_mode, DoorPathMode::IgnoreOpen);
    }
}
