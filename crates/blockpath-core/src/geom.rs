//! Geometry primitives: [`BlockPos`], [`Column`] and [`Region`].
//!
//! Coordinates follow the usual voxel-game convention: X and Z span the
//! horizontal plane, Y grows upwards.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// BlockPos
// ---------------------------------------------------------------------------

/// An integer block position in a 3D voxel grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Return a position shifted by (dx, dy, dz).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// The position `n` blocks above this one.
    #[inline]
    pub const fn up(self, n: i32) -> Self {
        self.shift(0, n, 0)
    }

    /// The vertical column this position belongs to.
    #[inline]
    pub const fn column(self) -> Column {
        Column::new(self.x, self.z)
    }

    /// All 26 neighbours (faces, edges and corners).
    ///
    /// Ordered bottom layer first, then the current layer, then the top
    /// layer; within a layer Z is the outer and X the inner axis.
    pub fn neighbors_26(self) -> [BlockPos; 26] {
        let mut out = [self; 26];
        let mut i = 0;
        for dy in -1..=1 {
            for dz in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }
                    out[i] = self.shift(dx, dy, dz);
                    i += 1;
                }
            }
        }
        out
    }
}

// --- trait impls for BlockPos ---

impl PartialOrd for BlockPos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BlockPos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y
            .cmp(&other.y)
            .then(self.z.cmp(&other.z))
            .then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for BlockPos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for BlockPos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<i32> for BlockPos {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

/// A vertical stack of blocks sharing the same horizontal (x, z).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    pub x: i32,
    pub z: i32,
}

impl Column {
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The block of this column at height `y`.
    #[inline]
    pub const fn at(self, y: i32) -> BlockPos {
        BlockPos::new(self.x, y, self.z)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.z)
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A half-open box \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub min: BlockPos,
    pub max: BlockPos,
}

impl Region {
    /// Create a new region from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, z0: i32, x1: i32, y1: i32, z1: i32) -> Self {
        Self {
            min: BlockPos::new(x0.min(x1), y0.min(y1), z0.min(z1)),
            max: BlockPos::new(x0.max(x1), y0.max(y1), z0.max(z1)),
        }
    }

    /// Region spanning `min` (inclusive) to `max` (exclusive).
    #[inline]
    pub fn from_corners(min: BlockPos, max: BlockPos) -> Self {
        Self::new(min.x, min.y, min.z, max.x, max.y, max.z)
    }

    /// Size along each axis.
    #[inline]
    pub fn size(self) -> BlockPos {
        self.max - self.min
    }

    /// Extent along X.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Extent along Z.
    #[inline]
    pub fn depth(self) -> i32 {
        self.max.z - self.min.z
    }

    /// Total number of blocks in the region.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize) * (self.depth() as usize)
    }

    /// Whether the region has zero or negative volume.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y || self.min.z >= self.max.z
    }

    /// Whether `p` is inside the half-open region.
    #[inline]
    pub fn contains(self, p: BlockPos) -> bool {
        p.x >= self.min.x
            && p.x < self.max.x
            && p.y >= self.min.y
            && p.y < self.max.y
            && p.z >= self.min.z
            && p.z < self.max.z
    }

    /// Intersection of two regions. Disjoint regions give the zero region.
    #[inline]
    pub fn intersect(self, other: Region) -> Self {
        let r = Self {
            min: BlockPos::new(
                self.min.x.max(other.min.x),
                self.min.y.max(other.min.y),
                self.min.z.max(other.min.z),
            ),
            max: BlockPos::new(
                self.max.x.min(other.max.x),
                self.max.y.min(other.max.y),
                self.max.z.min(other.max.z),
            ),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// The horizontal slice at height `y`, clamped to the region.
    pub fn layer(self, y: i32) -> Self {
        self.intersect(Self {
            min: BlockPos::new(self.min.x, y, self.min.z),
            max: BlockPos::new(self.max.x, y + 1, self.max.z),
        })
    }

    /// Iterator over every block, X fastest, then Z, then Y.
    #[inline]
    pub fn iter(self) -> RegionIter {
        RegionIter {
            region: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Region {
    type Item = BlockPos;
    type IntoIter = RegionIter;
    #[inline]
    fn into_iter(self) -> RegionIter {
        self.iter()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RegionIter
// ---------------------------------------------------------------------------

/// Layer-by-layer iterator over the blocks in a [`Region`].
#[derive(Clone, Debug)]
pub struct RegionIter {
    region: Region,
    cur: BlockPos,
}

impl Iterator for RegionIter {
    type Item = BlockPos;

    #[inline]
    fn next(&mut self) -> Option<BlockPos> {
        if self.region.is_empty() || self.cur.y >= self.region.max.y {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.region.max.x {
            self.cur.x = self.region.min.x;
            self.cur.z += 1;
            if self.cur.z >= self.region.max.z {
                self.cur.z = self.region.min.z;
                self.cur.y += 1;
            }
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.region.is_empty() || self.cur.y >= self.region.max.y {
            return (0, Some(0));
        }
        let w = self.region.width() as usize;
        let d = self.region.depth() as usize;
        let in_row = (self.region.max.x - self.cur.x) as usize;
        let rows_in_layer = (self.region.max.z - self.cur.z - 1) as usize;
        let layers = (self.region.max.y - self.cur.y - 1) as usize;
        let total = in_row + rows_in_layer * w + layers * w * d;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RegionIter {}
