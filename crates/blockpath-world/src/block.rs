//! Block materials of the reference world.

use blockpath::OpenableState;

/// A block of a [`BlockWorld`](crate::BlockWorld).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Block {
    #[default]
    Air,
    Stone,
    Grass,
    Glass,
    /// Flowers, tall grass and the like: walk-through, not standable.
    Plant,
    Door(OpenableState),
}

impl Block {
    pub const CLOSED_DOOR: Self = Self::Door(OpenableState::Closed);
    pub const OPEN_DOOR: Self = Self::Door(OpenableState::Open);

    /// Whether an entity can stand on top of this block.
    #[inline]
    pub fn is_surface(self) -> bool {
        matches!(self, Self::Stone | Self::Grass | Self::Glass)
    }

    /// Whether an entity can move through this block.
    #[inline]
    pub fn is_transparent(self) -> bool {
        matches!(self, Self::Air | Self::Plant)
    }

    #[inline]
    pub fn openable_state(self) -> Option<OpenableState> {
        match self {
            Self::Door(state) => Some(state),
            _ => None,
        }
    }

    /// Character used for this block in text layouts.
    pub fn rune(self) -> char {
        match self {
            Self::Air => '.',
            Self::Stone => '#',
            Self::Grass => 'g',
            Self::Glass => '=',
            Self::Plant => '*',
            Self::Door(OpenableState::Closed) => 'D',
            Self::Door(OpenableState::Open) => 'd',
        }
    }

    /// Block drawn by `ch` in text layouts.
    pub fn from_rune(ch: char) -> Option<Self> {
        Some(match ch {
            '.' => Self::Air,
            '#' => Self::Stone,
            'g' => Self::Grass,
            '=' => Self::Glass,
            '*' => Self::Plant,
            'D' => Self::CLOSED_DOOR,
            'd' => Self::OPEN_DOOR,
            _ => return None,
        })
    }
}
