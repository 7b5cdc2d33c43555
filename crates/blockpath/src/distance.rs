use blockpath_core::BlockPos;

/// Squared Euclidean distance between two positions.
#[inline]
pub fn squared_euclidean(a: BlockPos, b: BlockPos) -> f32 {
    let dx = (a.x - b.x) as f32;
    let dy = (a.y - b.y) as f32;
    let dz = (a.z - b.z) as f32;
    dx * dx + dy * dy + dz * dz
}

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: BlockPos, b: BlockPos) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs()
}

/// Chebyshev (L∞) distance between two positions.
#[inline]
pub fn chebyshev(a: BlockPos, b: BlockPos) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs()).max((a.z - b.z).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_agree_on_axis_steps() {
        let a = BlockPos::ZERO;
        let b = BlockPos::new(0, 3, 0);
        assert_eq!(squared_euclidean(a, b), 9.0);
        assert_eq!(manhattan(a, b), 3);
        assert_eq!(chebyshev(a, b), 3);
    }

    #[test]
    fn distances_on_full_diagonal() {
        let a = BlockPos::new(1, 1, 1);
        let b = BlockPos::new(-1, -1, -1);
        assert_eq!(squared_euclidean(a, b), 12.0);
        assert_eq!(manhattan(a, b), 6);
        assert_eq!(chebyshev(a, b), 2);
    }
}
